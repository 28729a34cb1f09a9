use crate::args::{Args, Argument};
use crate::node::{Node, is_attribute_name};
use crate::parsing::Expander;

/// Builds a handler that wraps inline-expanded content in `element`.
pub fn wrapper(element: &'static str) -> impl Fn(&Expander<'_>, &str, &Args) -> Node + Send + Sync {
    move |expander: &Expander<'_>, content: &str, args: &Args| wrap(element, expander, content, args)
}

/// Keyed args become `data-<key>`, positional args `data-arg-<index>`.
///
/// A keyed arg whose key cannot be part of an attribute name is recorded
/// as positional, with the whole `key=value` token as its value.
pub fn wrap(element: &str, expander: &Expander<'_>, content: &str, args: &Args) -> Node {
    let mut node = Node::new(element).with_markup(expander.inline(content));
    // One argument per token, so the iteration index is the token index.
    for (index, arg) in args.iter().enumerate() {
        match arg {
            Argument::Keyed { key, value } if is_attribute_name(key) => {
                node.set_attr(format!("data-{key}"), value.as_str())
            }
            Argument::Keyed { key, value } => {
                node.set_attr(format!("data-arg-{index}"), format!("{key}={value}"))
            }
            Argument::Positional { index, value } => {
                node.set_attr(format!("data-arg-{index}"), value.as_str())
            }
        }
    }
    node
}
