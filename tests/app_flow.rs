use cardZoom::app::{App, Mode};
use cardZoom::data::{Product, Tag};
use cardZoom::input::KeyCode;
use cardZoom::runner::handlers::handle_key;

fn tagged_catalog(n: usize) -> Vec<Product> {
    (0..n)
        .map(|i| Product {
            id: format!("p{i}"),
            title: format!("Product {i}"),
            description: "A product.".to_string(),
            price: Some(10.0),
            tags: vec![Tag::Text(if i % 2 == 0 { "even" } else { "odd" }.to_string())],
        })
        .collect()
}

fn app(n: usize) -> App {
    App::new(tagged_catalog(n), None)
}

fn press(app: &mut App, code: KeyCode) -> bool {
    handle_key(app, code).unwrap()
}

#[test]
fn quit_key_exits_the_loop() {
    let mut app = app(3);
    assert!(press(&mut app, KeyCode::Char('q')));
}

#[test]
fn slash_opens_search_seeded_with_active_filter() {
    let mut app = app(5);
    app.apply_search("even");
    press(&mut app, KeyCode::Char('/'));
    assert_eq!(
        app.mode,
        Mode::Search {
            buffer: "even".to_string()
        }
    );
}

#[test]
fn typing_then_enter_applies_the_filter() {
    let mut app = app(6);
    press(&mut app, KeyCode::Char('/'));
    for c in "odd".chars() {
        press(&mut app, KeyCode::Char(c));
    }
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.mode, Mode::Normal);
    assert_eq!(app.catalog.filter_term(), "odd");
    assert_eq!(app.catalog.filtered_len(), 3);
    assert_eq!(app.selected, 0);
}

#[test]
fn esc_cancels_the_edit_and_keeps_the_filter() {
    let mut app = app(6);
    app.apply_search("even");
    press(&mut app, KeyCode::Char('/'));
    press(&mut app, KeyCode::Char('x'));
    press(&mut app, KeyCode::Esc);
    assert_eq!(app.mode, Mode::Normal);
    assert_eq!(app.catalog.filter_term(), "even");
}

#[test]
fn backspace_edits_the_buffer() {
    let mut app = app(3);
    press(&mut app, KeyCode::Char('/'));
    press(&mut app, KeyCode::Char('a'));
    press(&mut app, KeyCode::Char('b'));
    press(&mut app, KeyCode::Backspace);
    assert_eq!(
        app.mode,
        Mode::Search {
            buffer: "a".to_string()
        }
    );
}

#[test]
fn paging_keys_move_the_page_and_reset_selection() {
    let mut app = app(25);
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Down);
    assert_eq!(app.selected, 2);

    press(&mut app, KeyCode::Char('n'));
    assert_eq!(app.catalog.offset(), 10);
    assert_eq!(app.selected, 0);

    press(&mut app, KeyCode::Char('p'));
    assert_eq!(app.catalog.offset(), 0);
}

#[test]
fn selection_clamps_to_the_short_last_page() {
    let mut app = app(25);
    press(&mut app, KeyCode::Char('n'));
    press(&mut app, KeyCode::Char('n'));
    assert_eq!(app.visible_len(), 5);
    for _ in 0..20 {
        press(&mut app, KeyCode::Down);
    }
    assert_eq!(app.selected, 4);

    // A next-page request at the boundary is a no-op and keeps the selection.
    press(&mut app, KeyCode::Char('n'));
    assert_eq!(app.catalog.offset(), 20);
    assert_eq!(app.selected, 4);
}

#[test]
fn enter_opens_the_selected_product_and_esc_returns() {
    let mut app = app(5);
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);
    assert_eq!(
        app.mode,
        Mode::Detail {
            id: "p1".to_string()
        }
    );
    press(&mut app, KeyCode::Esc);
    assert_eq!(app.mode, Mode::Normal);
}

#[test]
fn enter_on_an_empty_page_is_a_no_op() {
    let mut app = app(5);
    app.apply_search("nothing-matches-this");
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.mode, Mode::Normal);
}

#[test]
fn message_dialog_swallows_keys_until_dismissed() {
    let mut app = app(5);
    app.show_error("something broke".to_string());
    // Keys that would normally page or quit are swallowed by the dialog.
    assert!(!press(&mut app, KeyCode::Char('q')));
    press(&mut app, KeyCode::Char('n'));
    assert_eq!(app.catalog.offset(), 0);
    assert!(matches!(app.mode, Mode::Message { .. }));

    press(&mut app, KeyCode::Enter);
    assert_eq!(app.mode, Mode::Normal);
}

#[test]
fn reload_replaces_the_catalog_from_the_source() {
    // No data path means the bundled sample, so reload swaps the small
    // test catalog for the 25-product sample through the replacement path.
    let mut app = app(3);
    app.apply_search("even");
    press(&mut app, KeyCode::Char('r'));
    assert_eq!(app.catalog.products().len(), 25);
    assert!(!app.catalog.has_filter());
    assert_eq!(app.catalog.offset(), 0);
    assert_eq!(app.mode, Mode::Normal);
}
