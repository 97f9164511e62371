use cardZoom::app::{Catalog, Direction};
use cardZoom::data::{Product, Tag};

fn product(id: &str, tags: Vec<Tag>) -> Product {
    Product {
        id: id.to_string(),
        title: format!("Product {id}"),
        description: String::new(),
        price: None,
        tags,
    }
}

fn text(tag: &str) -> Tag {
    Tag::Text(tag.to_string())
}

fn titled(title: &str) -> Tag {
    Tag::Named {
        title: Some(title.to_string()),
        name: None,
    }
}

#[test]
fn term_is_trimmed_and_case_insensitive() {
    let mut catalog = Catalog::new(vec![
        product("a", vec![titled("Abstract Art")]),
        product("b", vec![text("landscape")]),
    ]);
    catalog.filter_by_tag("  ABSTRACT  ");
    let ids: Vec<&str> = catalog.visible_page().iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["a"]);
    assert_eq!(catalog.filter_term(), "abstract");
}

#[test]
fn named_tag_name_field_also_matches() {
    let mut catalog = Catalog::new(vec![product(
        "a",
        vec![Tag::Named {
            title: None,
            name: Some("Watercolor".to_string()),
        }],
    )]);
    catalog.filter_by_tag("water");
    assert_eq!(catalog.filtered_len(), 1);
}

#[test]
fn clear_filter_round_trip_restores_everything() {
    let products: Vec<Product> = (0..25)
        .map(|i| product(&format!("p{i}"), vec![text(if i % 2 == 0 { "even" } else { "odd" })]))
        .collect();
    let mut catalog = Catalog::new(products);

    catalog.filter_by_tag("even");
    assert_eq!(catalog.filtered_len(), 13);

    catalog.filter_by_tag("");
    assert_eq!(catalog.filtered_len(), 25);
    assert_eq!(catalog.offset(), 0);
    assert!(!catalog.has_filter());
}

#[test]
fn whitespace_only_term_clears_the_filter() {
    let mut catalog = Catalog::new(vec![product("a", vec![text("oil")]), product("b", vec![])]);
    catalog.filter_by_tag("oil");
    assert_eq!(catalog.filtered_len(), 1);
    catalog.filter_by_tag("   ");
    assert_eq!(catalog.filtered_len(), 2);
}

#[test]
fn repeated_identical_filters_are_idempotent() {
    let products: Vec<Product> = (0..20)
        .map(|i| product(&format!("p{i}"), if i < 7 { vec![text("ink")] } else { vec![] }))
        .collect();
    let mut catalog = Catalog::new(products);

    catalog.filter_by_tag("ink");
    let first: Vec<String> = catalog.visible_page().iter().map(|p| p.id.clone()).collect();
    catalog.filter_by_tag("ink");
    let second: Vec<String> = catalog.visible_page().iter().map(|p| p.id.clone()).collect();
    assert_eq!(first, second);
}

#[test]
fn filtering_preserves_catalog_order() {
    let mut catalog = Catalog::new(vec![
        product("a", vec![text("ink")]),
        product("b", vec![text("oil")]),
        product("c", vec![text("ink")]),
        product("d", vec![text("ink")]),
    ]);
    catalog.filter_by_tag("ink");
    let ids: Vec<&str> = catalog.visible_page().iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "c", "d"]);
}

#[test]
fn filtering_resets_the_page_offset() {
    let products: Vec<Product> = (0..25).map(|i| product(&format!("p{i}"), vec![text("all")])).collect();
    let mut catalog = Catalog::new(products);
    catalog.change_page(Direction::Next);
    assert_eq!(catalog.offset(), 10);
    catalog.filter_by_tag("all");
    assert_eq!(catalog.offset(), 0);
}

#[test]
fn unmatched_filter_reports_no_results() {
    let products: Vec<Product> = (0..25).map(|i| product(&format!("p{i}"), vec![])).collect();
    let mut catalog = Catalog::new(products);
    catalog.filter_by_tag("xyz");
    assert_eq!(catalog.filtered_len(), 0);
    assert!(catalog.visible_page().is_empty());
    assert!(catalog.no_results());
    // Without a filter an empty page is not a "no results" state.
    catalog.filter_by_tag("");
    assert!(!catalog.no_results());
}

#[test]
fn products_with_malformed_tags_never_match() {
    // Decoded from JSON so the lenient tags path is the one under test.
    let json = r#"[
        { "id": "a", "title": "ok", "tags": ["abstract"] },
        { "id": "b", "title": "bad", "tags": "not-an-array" },
        { "id": "c", "title": "junk", "tags": [42, null, ["nested"]] }
    ]"#;
    let products: Vec<Product> = serde_json::from_str(json).unwrap();
    let mut catalog = Catalog::new(products);

    catalog.filter_by_tag("abstract");
    let ids: Vec<&str> = catalog.visible_page().iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["a"]);

    // A term that happens to appear in the malformed payloads still finds
    // nothing, because those shapes decode to "no tags".
    catalog.filter_by_tag("not-an-array");
    assert_eq!(catalog.filtered_len(), 0);
}

#[test]
fn replacing_the_catalog_resets_view_and_offset() {
    let mut catalog = Catalog::new(vec![
        product("a", vec![text("ink")]),
        product("b", vec![]),
    ]);
    catalog.filter_by_tag("ink");
    assert_eq!(catalog.filtered_len(), 1);

    let replacement: Vec<Product> = (0..12).map(|i| product(&format!("n{i}"), vec![])).collect();
    catalog.replace_products(replacement);
    assert_eq!(catalog.filtered_len(), 12);
    assert_eq!(catalog.offset(), 0);
    assert!(!catalog.has_filter());
}

#[test]
fn product_by_id_ignores_the_active_filter() {
    let mut catalog = Catalog::new(vec![
        product("a", vec![text("ink")]),
        product("b", vec![text("oil")]),
    ]);
    catalog.filter_by_tag("ink");
    // "b" is filtered out of the view but still addressable.
    assert!(catalog.product_by_id("b").is_some());
    assert!(catalog.product_by_id("missing").is_none());
}
