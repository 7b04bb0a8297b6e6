/// A run of example-sentence text with its emphasis.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub bold: bool,
}

impl Segment {
    fn plain(text: &str) -> Self {
        Self {
            text: text.to_string(),
            bold: false,
        }
    }

    fn bold(text: &str) -> Self {
        Self {
            text: text.to_string(),
            bold: true,
        }
    }
}

/// Split example text into lines of segments. `**x**` marks bold and each
/// `\n` starts a new line. Unpaired markers are kept as literal text.
pub fn format_example(text: &str) -> Vec<Vec<Segment>> {
    text.split('\n').map(format_line).collect()
}

fn format_line(line: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut rest = line;

    while let Some(open) = rest.find("**") {
        let after_open = &rest[open + 2..];
        let Some(close) = after_open.find("**") else {
            break;
        };
        if open > 0 {
            segments.push(Segment::plain(&rest[..open]));
        }
        segments.push(Segment::bold(&after_open[..close]));
        rest = &after_open[close + 2..];
    }

    if !rest.is_empty() || segments.is_empty() {
        segments.push(Segment::plain(rest));
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bold_markers_become_bold_segments() {
        let lines = format_example("**傘**を持って行きます");
        assert_eq!(
            lines,
            vec![vec![Segment::bold("傘"), Segment::plain("を持って行きます")]]
        );
    }

    #[test]
    fn newlines_split_lines() {
        let lines = format_example("satu\n**dua**");
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], vec![Segment::plain("satu")]);
        assert_eq!(lines[1], vec![Segment::bold("dua")]);
    }

    #[test]
    fn unpaired_marker_stays_literal() {
        let lines = format_example("a **b** c **d");
        assert_eq!(
            lines[0],
            vec![
                Segment::plain("a "),
                Segment::bold("b"),
                Segment::plain(" c **d"),
            ]
        );
    }

    #[test]
    fn empty_bold_is_kept() {
        let lines = format_example("****x");
        assert_eq!(lines[0], vec![Segment::bold(""), Segment::plain("x")]);
    }
}
