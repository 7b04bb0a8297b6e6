use std::io;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};
use rust_i18n::t;
use tracing::{info, warn};

use kotoba::app::{App, AppScreen};
use kotoba::config::Config;
use kotoba::event::{AppEvent, EventHandler};
use kotoba::logging::{self, LogTarget};
use kotoba::ui::components::example_popup::ExamplePopup;
use kotoba::ui::components::header_bar::HeaderBar;
use kotoba::ui::components::pager_bar::PagerBar;
use kotoba::ui::components::search_box::SearchBox;
use kotoba::ui::components::vocab_table::VocabTable;
use kotoba::ui::layout::{AppLayout, centered_rect, pack_hint_lines, split_hints};
use kotoba::ui::plain_text::load_page_text;
use kotoba::ui::theme::Theme;
use kotoba::vocab::cache::DiskCache;
use kotoba::vocab::source::{BundledSource, DataSource, DirSource};
use kotoba::vocab::Column;

rust_i18n::i18n!("locales", fallback = "en");

#[derive(Parser)]
#[command(name = "kotoba", version, about = "Weekly Japanese vocabulary viewer with blur-to-quiz columns")]
struct Cli {
    #[arg(short, long, help = "Week to open")]
    week: Option<u32>,

    #[arg(short, long, help = "Day to open")]
    day: Option<u32>,

    #[arg(short = 'n', long, help = "Rows per page")]
    page_size: Option<usize>,

    #[arg(long, help = "Directory containing a data/ folder of word lists")]
    data_dir: Option<String>,

    #[arg(long, help = "Base URL serving data/kotoba-minggu{w}-halaman{d}.json")]
    url: Option<String>,

    #[arg(short, long, help = "Theme name")]
    theme: Option<String>,

    #[arg(short, long, help = "Interface language (id, en)")]
    locale: Option<String>,

    #[arg(long = "hide", value_parser = parse_column, help = "Start with a column blurred (term, reading, meaning)")]
    hide: Vec<Column>,

    #[arg(long, help = "List available themes and exit")]
    list_themes: bool,

    #[arg(long, help = "Print the first page as text and exit")]
    print: bool,

    #[arg(short, long, help = "Verbose logging")]
    verbose: bool,
}

fn parse_column(value: &str) -> std::result::Result<Column, String> {
    Column::from_key(value).ok_or_else(|| format!("unknown column '{value}'"))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.list_themes {
        for name in Theme::available_themes() {
            println!("{name}");
        }
        return Ok(());
    }

    let target = if cli.print {
        LogTarget::Stderr
    } else {
        LogTarget::File
    };
    let log_path = logging::init(cli.verbose, target);

    let mut config = Config::load().unwrap_or_else(|e| {
        warn!(error = %e, "ignoring unreadable config");
        Config::default()
    });
    apply_cli(&mut config, &cli);

    let source = build_source(&config)?;
    let cache = if config.cache_enabled {
        DiskCache::new().map(Arc::new)
    } else {
        None
    };
    info!(source = %source.describe(), cache = cache.is_some(), "starting");

    if cli.print {
        let text = load_page_text(&config, source.as_ref(), cache.as_deref(), &cli.hide)?;
        print!("{text}");
        return Ok(());
    }

    let theme: &'static Theme = Box::leak(Box::new(Theme::load(&config.theme).unwrap_or_default()));
    let mut app = App::new(config, theme, source, cache);
    for column in &cli.hide {
        app.toggle_column(*column);
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let events = EventHandler::new(Duration::from_millis(100));
    app.start();

    let result = run_app(&mut terminal, &mut app, &events);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        eprintln!("Error: {err:?}");
        if let Some(path) = &log_path {
            eprintln!("Log: {}", path.display());
        }
    }

    Ok(())
}

fn apply_cli(config: &mut Config, cli: &Cli) {
    if let Some(week) = cli.week {
        config.start_week = week;
        config.start_day = 1;
    }
    if let Some(day) = cli.day {
        config.start_day = day;
    }
    if let Some(size) = cli.page_size {
        config.page_size = size;
    }
    if let Some(dir) = &cli.data_dir {
        config.data_dir = Some(dir.clone());
    }
    if let Some(url) = &cli.url {
        config.base_url = Some(url.clone());
    }
    if let Some(theme) = &cli.theme {
        config.theme = theme.clone();
    }
    if let Some(locale) = &cli.locale {
        config.locale = locale.clone();
    }
    config.validate();
}

fn build_source(config: &Config) -> Result<Arc<dyn DataSource>> {
    if let Some(dir) = &config.data_dir {
        return Ok(Arc::new(DirSource::new(dir)));
    }
    if let Some(url) = &config.base_url {
        if let Some(source) = http_source(url)? {
            return Ok(source);
        }
    }
    Ok(Arc::new(BundledSource))
}

#[cfg(feature = "network")]
fn http_source(url: &str) -> Result<Option<Arc<dyn DataSource>>> {
    let source = kotoba::vocab::source::HttpSource::new(url)?;
    Ok(Some(Arc::new(source)))
}

#[cfg(not(feature = "network"))]
fn http_source(url: &str) -> Result<Option<Arc<dyn DataSource>>> {
    warn!(%url, "built without network support, using bundled word lists");
    Ok(None)
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &EventHandler,
) -> Result<()> {
    loop {
        if let Some(request) = app.take_pending_load() {
            events.spawn_load(
                request,
                Arc::clone(&app.source),
                app.cache.clone(),
                app.config.cache_policy(),
            );
        }

        terminal.draw(|frame| render(frame, app))?;

        match events.next()? {
            AppEvent::Key(key) => handle_key(app, key),
            AppEvent::Loaded {
                token,
                coord,
                result,
            } => app.on_loaded(token, coord, result),
            AppEvent::Tick | AppEvent::Resize(_, _) => {}
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    match app.screen {
        AppScreen::Table => handle_table_key(app, key),
        AppScreen::Search => app.handle_search_key(key),
        AppScreen::Example => handle_example_key(app, key),
    }
}

fn handle_table_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
        KeyCode::Char('/') => app.begin_search(),
        KeyCode::Left | KeyCode::Char('h') => app.prev_page(),
        KeyCode::Right | KeyCode::Char('l') => app.next_page(),
        KeyCode::Char('w') => app.next_week(),
        KeyCode::Char('W') => app.prev_week(),
        KeyCode::Char('d') => app.next_day(),
        KeyCode::Char('D') => app.prev_day(),
        KeyCode::Char('p') => app.cycle_page_size(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next_row(),
        KeyCode::Up | KeyCode::Char('k') => app.select_prev_row(),
        KeyCode::Char('1') => app.toggle_column(Column::Term),
        KeyCode::Char('2') => app.toggle_column(Column::Reading),
        KeyCode::Char('3') => app.toggle_column(Column::Meaning),
        KeyCode::Char(' ') => app.toggle_selected_row(),
        KeyCode::Enter => app.open_example(),
        KeyCode::Char('r') => app.reload(),
        _ => {}
    }
}

fn handle_example_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => app.close_example(),
        _ => {}
    }
}

fn render(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();
    let colors = &app.theme.colors;
    let locale = app.locale();

    let bg = Block::default().style(Style::default().bg(colors.bg()));
    frame.render_widget(bg, area);

    let footer_text = if app.screen == AppScreen::Search {
        t!("footer.search", locale = locale)
    } else {
        t!("footer.table", locale = locale)
    };
    let footer_hints = pack_hint_lines(&split_hints(&footer_text), area.width as usize);

    let view = app.controller.render();
    let layout = AppLayout::new(area, view.error.is_some(), footer_hints.len() as u16);

    let source = app.source.describe();
    frame.render_widget(
        HeaderBar::new(view.coord, app.controller.state().page_size, app.theme, locale)
            .bounds(app.config.weeks, app.config.days_per_week)
            .loading(view.loading)
            .source(&source),
        layout.header,
    );

    frame.render_widget(
        SearchBox::new(view.search, app.theme, locale).editing(app.search_input.as_ref()),
        layout.search,
    );

    if let (Some(banner), Some(error)) = (layout.banner, view.error) {
        let paragraph = Paragraph::new(Line::from(Span::styled(
            error.to_string(),
            Style::default()
                .fg(colors.error())
                .add_modifier(Modifier::BOLD),
        )))
        .wrap(Wrap { trim: true })
        .block(Block::bordered().border_style(Style::default().fg(colors.error())));
        frame.render_widget(paragraph, banner);
    }

    let selected = (app.screen != AppScreen::Search).then_some(app.selected);
    frame.render_widget(
        VocabTable::new(&view, app.theme, locale)
            .selected(selected)
            .tier(layout.tier),
        layout.table,
    );

    frame.render_widget(PagerBar::new(&view, app.theme, locale), layout.pager);

    let footer_lines: Vec<Line> = footer_hints
        .into_iter()
        .map(|hint| Line::from(Span::styled(hint, Style::default().fg(colors.text_dim()))))
        .collect();
    frame.render_widget(Paragraph::new(footer_lines), layout.footer);

    if let Some(example) = &app.example {
        let popup = centered_rect(60, 40, area);
        frame.render_widget(
            ExamplePopup::new(&example.term, &example.text, app.theme, locale),
            popup,
        );
    }
}
