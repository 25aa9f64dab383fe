//! Table presenter integration tests
//!
//! Exercise the presenter end to end with real portal records, the way the
//! page handlers drive it.

use civicdesk::records::{Citizen, CitizenRegistry};
use civicdesk::table::{escape_html, present, render_table, Column, PageCursor, TableView};

fn citizen_columns() -> Vec<Column<Citizen>> {
    vec![
        Column::field("Citizen ID", |c: &Citizen| c.id.clone()),
        Column::render("Status", |c: &Citizen| {
            format!("<span class=\"badge\">{}</span>", c.status)
        }),
        Column::blank("Actions"),
    ]
}

#[test]
fn test_seeded_citizens_resolve_to_rows() {
    let registry = CitizenRegistry::seeded();
    let (citizens, cursor) = registry.page(1, 10);
    let view = present(&citizens, &citizen_columns(), false, cursor);

    let TableView::Rows { headers, rows, cursor } = view else {
        panic!("expected rows");
    };

    assert_eq!(headers, vec!["Citizen ID", "Status", "Actions"]);
    assert_eq!(rows.len(), registry.len());
    assert_eq!(rows[0][0], "USR-1001");
    assert!(rows[0][1].starts_with("<span"));
    assert_eq!(rows[0][2], "");
    assert_eq!(cursor, PageCursor::new(1, 1));
}

#[test]
fn test_loading_wins_over_data() {
    let registry = CitizenRegistry::seeded();
    let (citizens, cursor) = registry.page(1, 10);
    let view = present(&citizens, &citizen_columns(), true, cursor);
    assert_eq!(view, TableView::Loading);
}

#[test]
fn test_out_of_range_page_renders_empty_state() {
    let registry = CitizenRegistry::seeded();
    let (citizens, cursor) = registry.page(99, 10);
    let view = present(&citizens, &citizen_columns(), false, cursor);
    assert_eq!(view, TableView::EmptyState);

    let html = render_table(&view, "/users");
    assert!(html.contains("No records found"));
}

#[test]
fn test_pagination_links_carry_page_parameter() {
    let registry = CitizenRegistry::seeded();
    let (citizens, cursor) = registry.page(2, 2); // 5 citizens, 3 pages
    assert_eq!(cursor.total_pages, 3);

    let view = present(&citizens, &citizen_columns(), false, cursor);
    let html = render_table(&view, "/users");

    assert!(html.contains("/users?page=1"));
    assert!(html.contains("/users?page=3"));
}

#[test]
fn test_edge_pages_disable_their_controls() {
    let registry = CitizenRegistry::seeded();

    let (citizens, cursor) = registry.page(1, 2);
    let html = render_table(
        &present(&citizens, &citizen_columns(), false, cursor),
        "/users",
    );
    assert!(!html.contains("page=0"));
    assert!(html.contains("disabled"));

    let (citizens, cursor) = registry.page(3, 2);
    let html = render_table(
        &present(&citizens, &citizen_columns(), false, cursor),
        "/users",
    );
    assert!(!html.contains("page=4"));
    assert!(html.contains("disabled"));
}

#[test]
fn test_zero_page_query_renders_without_prev_link() {
    let registry = CitizenRegistry::seeded();
    let (citizens, cursor) = registry.page(0, 2);

    let html = render_table(
        &present(&citizens, &citizen_columns(), false, cursor),
        "/users",
    );
    assert!(!html.contains("page=0"));
    assert!(html.contains("/users?page=2"));
}

#[test]
fn test_field_columns_escape_untrusted_text() {
    struct Row {
        name: String,
    }

    let rows = vec![Row {
        name: "<img src=x onerror=alert(1)>".to_string(),
    }];
    let columns = vec![Column::field("Name", |r: &Row| r.name.clone())];

    let view = present(&rows, &columns, false, PageCursor::new(1, 1));
    let TableView::Rows { rows, .. } = view else {
        panic!("expected rows");
    };
    assert!(!rows[0][0].contains('<'));
    assert_eq!(rows[0][0], escape_html("<img src=x onerror=alert(1)>"));
}
