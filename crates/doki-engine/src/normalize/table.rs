/// A table split into rows of raw cell text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableModel {
    /// First row renders as header cells.
    pub header: bool,
    pub rows: Vec<Vec<String>>,
}

impl TableModel {
    pub fn header_row(&self) -> Option<&[String]> {
        if self.header {
            self.rows.first().map(Vec::as_slice)
        } else {
            None
        }
    }

    pub fn body_rows(&self) -> &[Vec<String>] {
        let skip = usize::from(self.header && !self.rows.is_empty());
        &self.rows[skip..]
    }
}

/// Splits `|a|b|` rows into trimmed cells.
///
/// Each row loses its first and last character (the outer pipes) before
/// being split on `|`. A blank line inside the table is a row holding one
/// empty cell. Blank content has no rows.
pub fn parse_table(content: &str, header: bool) -> TableModel {
    let content = content.trim();
    if content.is_empty() {
        return TableModel {
            header,
            rows: vec![],
        };
    }

    let rows = content
        .split('\n')
        .map(str::trim)
        .map(|row| {
            strip_outer(row)
                .split('|')
                .map(|cell| cell.trim().to_string())
                .collect()
        })
        .collect();

    TableModel { header, rows }
}

fn strip_outer(row: &str) -> &str {
    let mut chars = row.chars();
    chars.next();
    chars.next_back();
    chars.as_str()
}
