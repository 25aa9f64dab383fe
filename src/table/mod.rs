//! Generic paginated table presenter
//!
//! Pages supply an ordered row sequence plus a column schema; the presenter
//! resolves every cell up front and hands back a [`TableView`] the HTML layer
//! renders verbatim. Pagination state is owned by the calling page - the
//! presenter only reads the cursor and exposes the prev/next target pages.
//!
//! Sorting, filtering, searching, selection and virtualization are
//! intentionally absent.

mod html;

pub use html::render_table;

/// Where a column's cell content comes from.
///
/// Exactly one source applies per column. `Render` output is authoritative
/// markup and is emitted as-is; `Field` output is coerced to text and
/// HTML-escaped. A column with no source renders empty cells.
pub enum CellSource<T> {
    /// Direct field accessor; the value is escaped before rendering
    Field(Box<dyn Fn(&T) -> String + Send + Sync>),
    /// Custom renderer producing trusted markup (badges, buttons)
    Render(Box<dyn Fn(&T) -> String + Send + Sync>),
    /// No accessor and no renderer; the cell stays blank
    Empty,
}

/// A single column of the table schema
pub struct Column<T> {
    pub header: String,
    pub source: CellSource<T>,
}

impl<T> Column<T> {
    /// Column backed by a plain field accessor
    pub fn field(
        header: impl Into<String>,
        accessor: impl Fn(&T) -> String + Send + Sync + 'static,
    ) -> Self {
        Self {
            header: header.into(),
            source: CellSource::Field(Box::new(accessor)),
        }
    }

    /// Column backed by a custom markup renderer
    pub fn render(
        header: impl Into<String>,
        renderer: impl Fn(&T) -> String + Send + Sync + 'static,
    ) -> Self {
        Self {
            header: header.into(),
            source: CellSource::Render(Box::new(renderer)),
        }
    }

    /// Column with neither accessor nor renderer
    pub fn blank(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            source: CellSource::Empty,
        }
    }

    fn resolve(&self, row: &T) -> String {
        match &self.source {
            CellSource::Field(accessor) => escape_html(&accessor(row)),
            CellSource::Render(renderer) => renderer(row),
            CellSource::Empty => String::new(),
        }
    }
}

/// Pagination cursor, owned and mutated exclusively by the calling page.
///
/// `1 <= current_page <= total_pages` is expected but not enforced here; an
/// out-of-range cursor only disables the affected controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCursor {
    pub current_page: u32,
    pub total_pages: u32,
}

impl PageCursor {
    pub fn new(current_page: u32, total_pages: u32) -> Self {
        Self {
            current_page,
            total_pages,
        }
    }

    pub fn prev_enabled(&self) -> bool {
        self.current_page > 1
    }

    pub fn next_enabled(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Target page of the "previous" control, when enabled
    pub fn prev_target(&self) -> Option<u32> {
        self.prev_enabled().then(|| self.current_page - 1)
    }

    /// Target page of the "next" control, when enabled
    pub fn next_target(&self) -> Option<u32> {
        self.next_enabled().then(|| self.current_page + 1)
    }
}

/// Fully resolved table, ready for rendering
#[derive(Debug, Clone, PartialEq)]
pub enum TableView {
    /// Only a loading indicator; no table, no pagination
    Loading,
    /// Empty-state placeholder; no table, no pagination
    EmptyState,
    /// One row per input row, one cell per schema column
    Rows {
        headers: Vec<String>,
        rows: Vec<Vec<String>>,
        cursor: PageCursor,
    },
}

/// Resolve rows against a column schema into a [`TableView`].
///
/// A loading flag takes precedence over everything; an empty row sequence
/// takes precedence over the table itself.
pub fn present<T>(
    rows: &[T],
    columns: &[Column<T>],
    is_loading: bool,
    cursor: PageCursor,
) -> TableView {
    if is_loading {
        return TableView::Loading;
    }

    if rows.is_empty() {
        return TableView::EmptyState;
    }

    let headers = columns.iter().map(|c| c.header.clone()).collect();
    let body = rows
        .iter()
        .map(|row| columns.iter().map(|col| col.resolve(row)).collect())
        .collect();

    TableView::Rows {
        headers,
        rows: body,
        cursor,
    }
}

/// Escape text for safe interpolation into HTML
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row {
        name: &'static str,
        status: &'static str,
    }

    fn sample_rows() -> Vec<Row> {
        vec![
            Row {
                name: "Rahul Kumar",
                status: "Active",
            },
            Row {
                name: "Priya Sharma",
                status: "Suspended",
            },
        ]
    }

    fn sample_columns() -> Vec<Column<Row>> {
        vec![
            Column::field("Name", |r: &Row| r.name.to_string()),
            Column::render("Status", |r: &Row| {
                format!("<span class=\"badge\">{}</span>", r.status)
            }),
            Column::blank("Actions"),
        ]
    }

    #[test]
    fn test_loading_takes_precedence() {
        let view = present(
            &sample_rows(),
            &sample_columns(),
            true,
            PageCursor::new(1, 5),
        );
        assert_eq!(view, TableView::Loading);
    }

    #[test]
    fn test_empty_rows_yield_empty_state() {
        let rows: Vec<Row> = Vec::new();
        let view = present(&rows, &sample_columns(), false, PageCursor::new(1, 1));
        assert_eq!(view, TableView::EmptyState);
    }

    #[test]
    fn test_cell_resolution_per_source() {
        let view = present(
            &sample_rows(),
            &sample_columns(),
            false,
            PageCursor::new(2, 5),
        );

        let TableView::Rows { headers, rows, cursor } = view else {
            panic!("expected rows");
        };

        assert_eq!(headers, vec!["Name", "Status", "Actions"]);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0][0], "Rahul Kumar");
        assert_eq!(rows[0][1], "<span class=\"badge\">Active</span>");
        assert_eq!(rows[0][2], "");
        assert_eq!(cursor, PageCursor::new(2, 5));
    }

    #[test]
    fn test_field_cells_are_escaped() {
        let rows = vec![Row {
            name: "<script>alert(1)</script>",
            status: "Active",
        }];
        let columns = vec![Column::field("Name", |r: &Row| r.name.to_string())];
        let view = present(&rows, &columns, false, PageCursor::new(1, 1));

        let TableView::Rows { rows, .. } = view else {
            panic!("expected rows");
        };
        assert_eq!(rows[0][0], "&lt;script&gt;alert(1)&lt;/script&gt;");
    }

    #[test]
    fn test_cursor_edges() {
        let first = PageCursor::new(1, 5);
        assert!(!first.prev_enabled());
        assert_eq!(first.prev_target(), None);
        assert_eq!(first.next_target(), Some(2));

        let last = PageCursor::new(5, 5);
        assert!(!last.next_enabled());
        assert_eq!(last.next_target(), None);
        assert_eq!(last.prev_target(), Some(4));

        let middle = PageCursor::new(3, 5);
        assert_eq!(middle.prev_target(), Some(2));
        assert_eq!(middle.next_target(), Some(4));
    }

    #[test]
    fn test_single_page_disables_both() {
        let only = PageCursor::new(1, 1);
        assert!(!only.prev_enabled());
        assert!(!only.next_enabled());
    }

    #[test]
    fn test_out_of_range_cursor_disables_controls() {
        // A zero page must not underflow into a bogus prev target
        let below = PageCursor::new(0, 3);
        assert!(!below.prev_enabled());
        assert_eq!(below.prev_target(), None);

        // A page past the end must not offer a next target
        let beyond = PageCursor::new(9, 3);
        assert!(!beyond.next_enabled());
        assert_eq!(beyond.next_target(), None);
    }
}
