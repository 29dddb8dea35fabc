//! Rendering tests against ratatui's TestBackend
//!
//! Each test draws a full frame and searches the buffer text.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use notebook_configurator::app::App;
use notebook_configurator::catalog::CatalogSource;
use notebook_configurator::config::Settings;
use notebook_configurator::theme::Colors;
use ratatui::{backend::TestBackend, Terminal};

fn terminal() -> Terminal<TestBackend> {
    Terminal::new(TestBackend::new(120, 40)).unwrap()
}

/// Buffer contents, one string per row
fn screen(terminal: &Terminal<TestBackend>) -> Vec<String> {
    let buffer = terminal.backend().buffer();
    (0..buffer.area.height)
        .map(|y| {
            (0..buffer.area.width)
                .map(|x| buffer[(x, y)].symbol())
                .collect::<String>()
        })
        .collect()
}

fn contains(terminal: &Terminal<TestBackend>, needle: &str) -> bool {
    screen(terminal).iter().any(|row| row.contains(needle))
}

/// Buffer position of the first cell of `needle`
fn find(terminal: &Terminal<TestBackend>, needle: &str) -> Option<(u16, u16)> {
    let buffer = terminal.backend().buffer();
    let width = needle.chars().count() as u16;
    (0..buffer.area.height).find_map(|y| {
        (0..buffer.area.width.saturating_sub(width)).find_map(|x| {
            let text: String = (x..x + width).map(|cx| buffer[(cx, y)].symbol()).collect();
            (text == needle).then_some((x, y))
        })
    })
}

fn press(app: &mut App, code: KeyCode) {
    app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
}

#[test]
fn test_loading_frame_has_no_controls() {
    let app = App::new(Settings::default(), CatalogSource::Embedded);
    let mut terminal = terminal();
    app.draw(&mut terminal).unwrap();

    assert!(contains(&terminal, "Loading..."));
    assert!(!contains(&terminal, "Choose your colour"));
    assert!(!contains(&terminal, "Summary"));
}

#[test]
fn test_ready_frame_shows_options_and_placeholders() {
    let mut app = App::new(Settings::default(), CatalogSource::Embedded);
    app.finish_loading();
    let mut terminal = terminal();
    app.draw(&mut terminal).unwrap();

    assert!(contains(&terminal, "Hardcover Notebook"));
    assert!(contains(&terminal, "Choose your colour"));
    assert!(contains(&terminal, "Choose your page layout"));
    assert!(contains(&terminal, "○ Sunset"));
    assert!(contains(&terminal, "○ Plain"));
    assert!(contains(&terminal, "Price not available"));
    assert!(contains(&terminal, "Not selected"));
}

#[test]
fn test_selection_is_drawn() {
    let mut app = App::new(Settings::default(), CatalogSource::Embedded);
    app.finish_loading();
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Enter);

    let mut terminal = terminal();
    app.draw(&mut terminal).unwrap();

    assert!(contains(&terminal, "Hardcover Notebook - red(dotted)"));
    assert!(contains(&terminal, "● Sunset"));
    assert!(contains(&terminal, "● Dotted"));
    assert!(contains(&terminal, "£11"));
    assert!(contains(&terminal, "100"));
}

#[test]
fn test_empty_catalog_shows_no_product() {
    let mut app = App::new(Settings::default(), CatalogSource::Inline(r#"{"products": []}"#.to_string()));
    app.finish_loading();
    let mut terminal = terminal();
    app.draw(&mut terminal).unwrap();

    assert!(contains(&terminal, "No product found"));
    assert!(!contains(&terminal, "Hardcover Notebook"));

    let (x, y) = find(&terminal, "No product found").unwrap();
    assert_eq!(terminal.backend().buffer()[(x, y)].fg, Colors::ERROR);
}

#[test]
fn test_help_overlay_lists_keys() {
    let mut app = App::new(Settings::default(), CatalogSource::Embedded);
    app.finish_loading();
    press(&mut app, KeyCode::Char('?'));

    let mut terminal = terminal();
    app.draw(&mut terminal).unwrap();

    assert!(contains(&terminal, "Help"));
    assert!(contains(&terminal, "Choose option"));
}
