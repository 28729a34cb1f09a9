use crate::args::Args;
use crate::node::Node;
use crate::normalize::{ListKind, ListModel, parse_list};
use crate::parsing::Expander;

impl ListModel {
    /// `doki-list` with one `doki-list-item` per item, each inline-expanded.
    pub fn into_node(self, expander: &Expander<'_>) -> Node {
        let mut list = Node::new("doki-list");
        match self.kind {
            ListKind::Unordered { bullet } => {
                list.set_attr("data-type", "unordered");
                list.set_attr("data-bullet", bullet.to_string());
            }
            ListKind::Ordered { format } => {
                list.set_attr("data-type", "ordered");
                list.set_attr("data-format", format.as_str());
            }
        }

        self.items.iter().fold(list, |list, item| {
            list.with_child(Node::new("doki-list-item").with_markup(expander.inline(item)))
        })
    }
}

pub fn list(expander: &Expander<'_>, content: &str, _: &Args) -> Node {
    parse_list(content, expander.options().number_formats).into_node(expander)
}
