//! HTML rendering of a resolved [`TableView`]

use super::{PageCursor, TableView};

/// Render a table view to an HTML fragment.
///
/// `base_path` is the page URL the prev/next controls navigate to; the target
/// page travels in the `page` query parameter.
pub fn render_table(view: &TableView, base_path: &str) -> String {
    match view {
        TableView::Loading => loading_state(),
        TableView::EmptyState => empty_state(),
        TableView::Rows {
            headers,
            rows,
            cursor,
        } => rows_table(headers, rows, *cursor, base_path),
    }
}

fn loading_state() -> String {
    r#"
    <div class="flex flex-col items-center justify-center py-12 bg-white rounded-xl border border-slate-200 shadow-sm">
        <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-blue-500 mb-4"></div>
        <p class="text-slate-500 font-medium">Loading records...</p>
    </div>
    "#
    .to_string()
}

fn empty_state() -> String {
    r#"
    <div class="flex flex-col items-center justify-center py-16 bg-white rounded-xl border border-slate-200 shadow-sm text-center">
        <h3 class="text-lg font-bold text-slate-800">No records found</h3>
        <p class="text-sm text-slate-500 mt-1">We couldn't find any data matching your current filters.</p>
    </div>
    "#
    .to_string()
}

fn rows_table(
    headers: &[String],
    rows: &[Vec<String>],
    cursor: PageCursor,
    base_path: &str,
) -> String {
    let header_cells: String = headers
        .iter()
        .map(|h| format!("<th class=\"px-6 py-4\">{}</th>", h))
        .collect();

    let body_rows: String = rows
        .iter()
        .map(|cells| {
            let tds: String = cells
                .iter()
                .map(|cell| format!("<td class=\"px-6 py-4 whitespace-nowrap\">{}</td>", cell))
                .collect();
            format!(
                "<tr class=\"hover:bg-slate-50 transition-colors\">{}</tr>",
                tds
            )
        })
        .collect();

    format!(
        r#"
    <div class="bg-white rounded-xl shadow-sm border border-slate-200 overflow-hidden flex flex-col">
        <div class="overflow-x-auto">
            <table class="w-full text-left text-sm text-slate-600">
                <thead class="bg-slate-50 text-slate-700 font-semibold border-b border-slate-200 uppercase text-xs tracking-wider">
                    <tr>{header_cells}</tr>
                </thead>
                <tbody class="divide-y divide-slate-100">{body_rows}</tbody>
            </table>
        </div>
        <div class="bg-slate-50 px-6 py-4 border-t border-slate-200 flex items-center justify-between">
            <span class="text-sm text-slate-500 font-medium">
                Page <span class="text-slate-800 font-bold">{current}</span> of <span class="text-slate-800 font-bold">{total}</span>
            </span>
            <div class="flex items-center gap-2">
                {prev_button}
                {next_button}
            </div>
        </div>
    </div>
    "#,
        header_cells = header_cells,
        body_rows = body_rows,
        current = cursor.current_page,
        total = cursor.total_pages,
        prev_button = page_button(cursor.prev_target(), base_path, "&larr; Prev"),
        next_button = page_button(cursor.next_target(), base_path, "Next &rarr;"),
    )
}

fn page_button(target: Option<u32>, base_path: &str, label: &str) -> String {
    match target {
        Some(page) => format!(
            r#"<a href="{}?page={}" class="px-3 py-2 border border-slate-200 rounded-md text-slate-600 hover:bg-slate-100 transition-colors">{}</a>"#,
            base_path, page, label
        ),
        None => format!(
            r#"<button disabled class="px-3 py-2 border border-slate-200 rounded-md text-slate-600 opacity-50 cursor-not-allowed">{}</button>"#,
            label
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows_view(current: u32, total: u32) -> TableView {
        TableView::Rows {
            headers: vec!["Name".to_string()],
            rows: vec![vec!["Rahul Kumar".to_string()]],
            cursor: PageCursor::new(current, total),
        }
    }

    #[test]
    fn test_loading_renders_only_indicator() {
        let html = render_table(&TableView::Loading, "/users");
        assert!(html.contains("Loading records"));
        assert!(!html.contains("<table"));
        assert!(!html.contains("Page"));
    }

    #[test]
    fn test_empty_state_has_no_pagination() {
        let html = render_table(&TableView::EmptyState, "/users");
        assert!(html.contains("No records found"));
        assert!(!html.contains("page="));
    }

    #[test]
    fn test_first_page_disables_prev() {
        let html = render_table(&rows_view(1, 3), "/users");
        assert!(html.contains("/users?page=2"));
        assert!(!html.contains("page=0"));
        assert!(html.contains("disabled"));
    }

    #[test]
    fn test_middle_page_links_both_neighbours() {
        let html = render_table(&rows_view(2, 3), "/users");
        assert!(html.contains("/users?page=1"));
        assert!(html.contains("/users?page=3"));
        assert!(!html.contains("disabled"));
    }

    #[test]
    fn test_last_page_disables_next() {
        let html = render_table(&rows_view(3, 3), "/users");
        assert!(html.contains("/users?page=2"));
        assert!(!html.contains("page=4"));
        assert!(html.contains("disabled"));
    }
}
