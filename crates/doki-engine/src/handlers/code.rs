use crate::args::Args;
use crate::node::Node;
use crate::normalize::normalize_code_block;
use crate::parsing::Expander;

/// Class the highlighter looks for on every code element.
pub const HIGHLIGHT_CLASS: &str = "prettyprint";

/// A code snippet, inline or block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeBlock {
    /// From the first positional argument.
    pub language: Option<String>,
    pub text: String,
    pub inline: bool,
}

impl CodeBlock {
    /// Inline code keeps its content exactly as written.
    pub fn inline(content: &str, args: &Args) -> Self {
        Self {
            language: args.positional(0).map(str::to_string),
            text: content.to_string(),
            inline: true,
        }
    }

    /// Block code has its common indentation stripped.
    pub fn block(content: &str, args: &Args) -> Self {
        Self {
            language: args.positional(0).map(str::to_string),
            text: normalize_code_block(content),
            inline: false,
        }
    }

    pub fn into_node(self) -> Node {
        let class = match &self.language {
            Some(language) => format!("language-{language} {HIGHLIGHT_CLASS}"),
            None => HIGHLIGHT_CLASS.to_string(),
        };
        let code = Node::new("code")
            .with_attr("class", class)
            .with_attr("translate", "no")
            .with_text(self.text);
        let element = if self.inline {
            "doki-inline-code"
        } else {
            "doki-code-block"
        };

        Node::new("doki-code-block-container").with_child(Node::new(element).with_child(code))
    }
}

pub fn inline_code(_: &Expander<'_>, content: &str, args: &Args) -> Node {
    CodeBlock::inline(content, args).into_node()
}

pub fn code_block(_: &Expander<'_>, content: &str, args: &Args) -> Node {
    CodeBlock::block(content, args).into_node()
}
