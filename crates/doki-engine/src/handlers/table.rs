use crate::args::Args;
use crate::node::Node;
use crate::normalize::{TableModel, parse_table};
use crate::parsing::Expander;

/// Flag that turns the first row into header cells.
pub const HEADER_FLAG: &str = "header";

impl TableModel {
    pub fn into_node(self, expander: &Expander<'_>) -> Node {
        let header = self.header;
        let table = self
            .rows
            .iter()
            .enumerate()
            .fold(Node::new("doki-table"), |table, (i, cells)| {
                let cell_tag = if header && i == 0 {
                    "doki-table-header"
                } else {
                    "doki-table-cell"
                };
                let row = cells.iter().fold(Node::new("doki-table-row"), |row, cell| {
                    row.with_child(Node::new(cell_tag).with_markup(expander.inline(cell)))
                });
                table.with_child(row)
            });

        Node::new("doki-table-container").with_child(table)
    }
}

pub fn table(expander: &Expander<'_>, content: &str, args: &Args) -> Node {
    parse_table(content, args.has_flag(HEADER_FLAG)).into_node(expander)
}
