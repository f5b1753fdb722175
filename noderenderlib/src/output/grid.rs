//! Bordered text grid built on comfy-table.
//!
//! Rows are accumulated one at a time and rendered once. Cells may contain
//! newlines; each line stays inside its cell.

use comfy_table::Table;

/// Light box-drawing borders with a rule under the header and between rows.
///
/// Component order follows `comfy_table::TableComponent`.
const LIGHT: &str = "││──├─┼┤│─┼├┤┬┴┌┐└┘";

/// Same as `LIGHT` without rules between rows; the rows form one block.
const LIGHT_BLOCK: &str = "││──├─┼┤│    ┬┴┌┐└┘";

/// Same as `LIGHT` without the header rule, used when there are no rows.
const LIGHT_HEADER_ONLY: &str = "││──    │─┼├┤┬┴┌┐└┘";

/// A header plus rows of text cells.
#[derive(Debug, Clone)]
pub struct Grid {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    row_rules: bool,
}

impl Grid {
    pub fn new<S: Into<String>>(headers: impl IntoIterator<Item = S>) -> Self {
        Grid {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
            row_rules: true,
        }
    }

    /// Builder: draw a rule between consecutive rows (default), or render
    /// all rows as one block closed by the bottom border.
    pub fn with_row_rules(mut self, enabled: bool) -> Self {
        self.row_rules = enabled;
        self
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn preset(&self) -> &'static str {
        if self.rows.is_empty() {
            LIGHT_HEADER_ONLY
        } else if self.row_rules {
            LIGHT
        } else {
            LIGHT_BLOCK
        }
    }

    /// Render the whole grid. The result ends with a newline.
    ///
    /// Rows may be wider or narrower than the header; missing cells render
    /// empty.
    pub fn render(&self) -> String {
        let mut table = Table::new();
        table.load_preset(self.preset());
        table.set_header(&self.headers);
        for row in &self.rows {
            table.add_row(row);
        }

        let mut out = table.to_string();
        out.push('\n');
        out
    }
}
