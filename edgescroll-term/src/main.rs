mod strip;
mod terminal;
mod view;

use std::fs::File;
use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{
    Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent,
    MouseEventKind,
};
use edgescroll::config::{VAR_BACKGROUND_COLOR, VAR_COLOR_TEXT, VAR_GRADIENT_WIDTH};
use edgescroll::{EdgeChange, ScrollBehavior, ScrollEdgeController, ScrollableConfig};
use log::{debug, info};
use simplelog::{Config, LevelFilter, WriteLogger};

use strip::Strip;
use terminal::Terminal;
use view::Area;

/// Repaint interval while a scroll or fade is running.
const FRAME: Duration = Duration::from_millis(16);

/// Columns moved per arrow key press and wheel notch.
const KEY_STEP: f32 = 1.0;
const WHEEL_STEP: f32 = 3.0;

const DEFAULT_ITEMS: &[&str] = &[
    "Amsterdam",
    "Berlin",
    "Copenhagen",
    "Dublin",
    "東京",
    "Helsinki",
    "Lisbon",
    "Madrid",
    "Oslo",
    "Paris",
    "Reykjavík",
    "Stockholm",
    "Vienna",
    "Warsaw",
    "Zürich",
];

/// Defaults that suit a terminal better than the pixel-based ones.
const TERMINAL_DEFAULTS: &[(&str, &str)] = &[
    (VAR_GRADIENT_WIDTH, "6"),
    (VAR_BACKGROUND_COLOR, "black"),
    (VAR_COLOR_TEXT, "white"),
];

struct Args {
    attributes: Vec<(String, Option<String>)>,
    items: Vec<String>,
}

/// `--hide-buttons`, `--hide-gradients` and `--scrollable--name=value`
/// become attributes; everything else is an item of the strip.
fn parse_args(args: impl IntoIterator<Item = String>) -> Args {
    let mut attributes: Vec<(String, Option<String>)> = TERMINAL_DEFAULTS
        .iter()
        .map(|(name, value)| (name.to_string(), Some(value.to_string())))
        .collect();
    let mut items = Vec::new();

    for arg in args {
        if arg.starts_with("--scrollable--") {
            match arg.split_once('=') {
                Some((name, value)) => attributes.push((name.into(), Some(value.into()))),
                None => attributes.push((arg, None)),
            }
        } else if let Some(flag) = arg.strip_prefix("--") {
            match flag.split_once('=') {
                Some((name, value)) => attributes.push((name.into(), Some(value.into()))),
                None => attributes.push((flag.into(), None)),
            }
        } else {
            items.push(arg);
        }
    }

    if items.is_empty() {
        items = DEFAULT_ITEMS.iter().map(|s| s.to_string()).collect();
    }

    Args { attributes, items }
}

fn main() -> io::Result<()> {
    let log_file = File::create("edgescroll.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let args = parse_args(std::env::args().skip(1));
    let config = ScrollableConfig::from_attributes(
        args.attributes
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_deref())),
    )
    .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    info!("starting with {config:?}");

    let mut strip = Strip::new(args.items);
    let mut scrollable = ScrollEdgeController::new(config);
    scrollable.subscribe(|change: EdgeChange| {
        info!("{} edge: at_edge={}", change.edge, change.at_edge);
    });

    let mut term = Terminal::new()?;
    let (cols, rows) = term.size()?;
    let mut area = Area::centered(cols, rows);
    scrollable.mount(strip.width() as f32, area.width as f32);

    loop {
        let now = Instant::now();
        let busy = scrollable.frame(now);

        view::draw_status(term.out(), &scrollable, &strip, area)?;
        view::draw_strip(term.out(), &scrollable, &strip, area, now)?;
        term.flush()?;

        let timeout = busy.then_some(FRAME);
        for event in term.poll(timeout)? {
            match event {
                CrosstermEvent::Key(KeyEvent {
                    code,
                    kind: KeyEventKind::Press,
                    ..
                }) => match code {
                    KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                    KeyCode::Left => {
                        scrollable.scroll_by(-KEY_STEP);
                    }
                    KeyCode::Right => {
                        scrollable.scroll_by(KEY_STEP);
                    }
                    KeyCode::Home => scrollable.scroll_to(0.0, ScrollBehavior::Smooth),
                    KeyCode::End => scrollable.scroll_to(f32::MAX, ScrollBehavior::Smooth),
                    KeyCode::Char('+') => {
                        strip.push(format!("Item {}", strip.item_count() + 1));
                        scrollable.set_content_width(strip.width() as f32);
                    }
                    KeyCode::Char('-') if strip.item_count() > 1 => {
                        strip.pop();
                        scrollable.set_content_width(strip.width() as f32);
                    }
                    _ => {}
                },
                CrosstermEvent::Mouse(MouseEvent {
                    kind, column, row, ..
                }) => match kind {
                    MouseEventKind::Down(MouseButton::Left) => {
                        if let Some(edge) = area.button_at(&scrollable, column, row) {
                            if !scrollable.click(edge).is_handled() {
                                debug!("{edge} button is inactive");
                            }
                        }
                    }
                    MouseEventKind::ScrollLeft | MouseEventKind::ScrollUp => {
                        scrollable.scroll_by(-WHEEL_STEP);
                    }
                    MouseEventKind::ScrollRight | MouseEventKind::ScrollDown => {
                        scrollable.scroll_by(WHEEL_STEP);
                    }
                    _ => {}
                },
                CrosstermEvent::Resize(cols, rows) => {
                    term.clear()?;
                    area = Area::centered(cols, rows);
                    scrollable.set_client_width(area.width as f32);
                }
                _ => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Args {
        parse_args(list.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_positional_arguments_become_items() {
        let parsed = args(&["one", "two"]);
        assert_eq!(parsed.items, vec!["one", "two"]);
    }

    #[test]
    fn test_default_items_when_none_given() {
        let parsed = args(&["--hide-buttons"]);
        assert_eq!(parsed.items.len(), DEFAULT_ITEMS.len());
    }

    #[test]
    fn test_flags_and_variables_become_attributes() {
        let parsed = args(&["--hide-buttons", "--scrollable--gradient-width=4", "x"]);

        assert!(
            parsed
                .attributes
                .contains(&("hide-buttons".to_string(), None))
        );
        assert!(parsed.attributes.contains(&(
            "--scrollable--gradient-width".to_string(),
            Some("4".to_string())
        )));
    }

    #[test]
    fn test_user_variables_override_terminal_defaults() {
        let parsed = args(&["--scrollable--gradient-width=2"]);
        let config = ScrollableConfig::from_attributes(
            parsed
                .attributes
                .iter()
                .map(|(n, v)| (n.as_str(), v.as_deref())),
        )
        .unwrap();

        assert_eq!(config.style.gradient_width, 2.0);
        assert!(!config.hide_buttons);
    }
}
