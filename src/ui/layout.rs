use ratatui::layout::{Constraint, Direction, Layout, Rect};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutTier {
    Wide,   // ≥100 cols: number, term, reading, meaning, example marker
    Medium, // 60-99 cols: drop the example marker column
    Narrow, // <60 cols: term, reading, meaning only
}

impl LayoutTier {
    pub fn from_area(area: Rect) -> Self {
        if area.width >= 100 {
            LayoutTier::Wide
        } else if area.width >= 60 {
            LayoutTier::Medium
        } else {
            LayoutTier::Narrow
        }
    }

    pub fn show_number(&self) -> bool {
        *self != LayoutTier::Narrow
    }

    pub fn show_example_marker(&self) -> bool {
        *self == LayoutTier::Wide
    }
}

pub struct AppLayout {
    pub header: Rect,
    pub search: Rect,
    pub banner: Option<Rect>,
    pub table: Rect,
    pub pager: Rect,
    pub footer: Rect,
    pub tier: LayoutTier,
}

impl AppLayout {
    pub fn new(area: Rect, show_banner: bool, footer_lines: u16) -> Self {
        let tier = LayoutTier::from_area(area);

        let mut constraints = vec![Constraint::Length(1), Constraint::Length(3)];
        if show_banner {
            constraints.push(Constraint::Length(3));
        }
        constraints.extend([
            Constraint::Min(5),
            Constraint::Length(1),
            Constraint::Length(footer_lines.max(1)),
        ]);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(area);

        let (banner, rest) = if show_banner {
            (Some(chunks[2]), 3)
        } else {
            (None, 2)
        };

        Self {
            header: chunks[0],
            search: chunks[1],
            banner,
            table: chunks[rest],
            pager: chunks[rest + 1],
            footer: chunks[rest + 2],
            tier,
        }
    }
}

pub fn pack_hint_lines(hints: &[&str], width: usize) -> Vec<String> {
    if width == 0 || hints.is_empty() {
        return Vec::new();
    }

    let prefix = " ";
    let separator = "  ";
    let mut out: Vec<String> = Vec::new();
    let mut current = prefix.to_string();
    let mut has_hint = false;

    for hint in hints {
        if hint.is_empty() {
            continue;
        }
        let candidate = if has_hint {
            format!("{current}{separator}{hint}")
        } else {
            format!("{current}{hint}")
        };
        if candidate.chars().count() <= width {
            current = candidate;
            has_hint = true;
        } else {
            if has_hint {
                out.push(current);
            }
            current = format!("{prefix}{hint}");
            has_hint = true;
        }
    }

    if has_hint {
        out.push(current);
    }
    out
}

/// Split a footer string on double spaces into individual hints.
pub fn split_hints(footer: &str) -> Vec<&str> {
    footer
        .split("  ")
        .map(str::trim)
        .filter(|h| !h.is_empty())
        .collect()
}

pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    const MIN_POPUP_WIDTH: u16 = 40;
    const MIN_POPUP_HEIGHT: u16 = 8;

    let requested_w = area.width.saturating_mul(percent_x.min(100)) / 100;
    let requested_h = area.height.saturating_mul(percent_y.min(100)) / 100;

    let target_w = requested_w.max(MIN_POPUP_WIDTH).min(area.width);
    let target_h = requested_h.max(MIN_POPUP_HEIGHT).min(area.height);

    let left = area
        .x
        .saturating_add((area.width.saturating_sub(target_w)) / 2);
    let top = area
        .y
        .saturating_add((area.height.saturating_sub(target_h)) / 2);

    Rect::new(left, top, target_w, target_h)
}
