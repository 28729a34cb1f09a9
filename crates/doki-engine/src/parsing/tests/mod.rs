//! Integration tests for the two-phase parse.

use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::args::Args;
use crate::node::Node;
use crate::options::{BlockNesting, ParseOptions};
use crate::parsing::{Expander, parse, parse_blocks, parse_inline, parse_with};
use crate::registry::TagRegistry;

const INLINE_CODE_Y: &str = concat!(
    "<doki-code-block-container><doki-inline-code>",
    r#"<code class="prettyprint" translate="no">y</code>"#,
    "</doki-inline-code></doki-code-block-container>"
);

fn defaults(text: &str) -> String {
    parse(&TagRegistry::with_defaults(), text)
}

// Passthrough

#[rstest]
#[case("")]
#[case("plain text")]
#[case("<p>host <em>markup</em> &amp; entities</p>")]
#[case("a [b] c")]
#[case("] stray [ brackets ][")]
#[case("[note]never closed")]
#[case("[/note] before [note]")]
#[case("héllo [wörld]")]
fn text_without_complete_tags_is_unchanged(#[case] text: &str) {
    assert_eq!(defaults(text), text);
}

#[test]
fn unknown_inline_tag_is_unchanged() {
    assert_eq!(defaults(r#"[foo: "bar"]"#), r#"[foo: "bar"]"#);
}

#[test]
fn unknown_block_is_unchanged_including_its_content() {
    let text = "[foo][note]x[/note][/foo]";
    assert_eq!(defaults(text), text);
}

#[test]
fn empty_registry_expands_nothing() {
    let text = r#"[note]x[/note] [code: "y"]"#;
    assert_eq!(parse(&TagRegistry::empty(), text), text);
}

// Block and inline phases

#[test]
fn block_and_inline_tags_in_one_document() {
    let out = defaults("[heading]Intro[/heading]\nRun [code: \"y\"] now.");
    assert_eq!(
        out,
        format!("<doki-heading>Intro</doki-heading>\nRun {INLINE_CODE_Y} now.")
    );
}

#[test]
fn block_content_is_trimmed() {
    assert_eq!(
        defaults("[note]\n   spaced   \n[/note]"),
        "<doki-note>spaced</doki-note>"
    );
}

#[test]
fn inline_tags_inside_wrapper_content_expand() {
    assert_eq!(
        defaults(r#"[note]See [link: "Top" #top][/note]"#),
        r##"<doki-note>See <doki-link href="#top" data-target="internal">Top</doki-link></doki-note>"##
    );
}

#[test]
fn inline_tag_next_to_unclosed_block_still_expands() {
    assert_eq!(
        defaults(r#"[note]a [code: "y"]"#),
        format!("[note]a {INLINE_CODE_Y}")
    );
}

#[test]
fn block_phase_alone_leaves_inline_tags() {
    let registry = TagRegistry::with_defaults();
    let text = r#"[note]x[/note] [code: "y"]"#;
    assert_eq!(
        parse_blocks(&registry, ParseOptions::default(), text),
        r#"<doki-note>x</doki-note> [code: "y"]"#
    );
    assert_eq!(
        parse_inline(&registry, ParseOptions::default(), text),
        format!("[note]x[/note] {INLINE_CODE_Y}")
    );
}

#[test]
fn code_block_output_is_not_expanded_again() {
    assert_eq!(
        defaults("[codeblock]\n  [note: \"x\"]\n[/codeblock]"),
        concat!(
            "<doki-code-block-container><doki-code-block>",
            r#"<code class="prettyprint" translate="no">&#91;note: "x"&#93;</code>"#,
            "</doki-code-block></doki-code-block-container>"
        )
    );
}

#[test]
fn code_block_language_and_indentation() {
    assert_eq!(
        defaults("[codeblock rust]\n    fn main() {\n        run();\n    }\n[/codeblock]"),
        concat!(
            "<doki-code-block-container><doki-code-block>",
            r#"<code class="language-rust prettyprint" translate="no">"#,
            "fn main() {\n    run();\n}",
            "</code></doki-code-block></doki-code-block-container>"
        )
    );
}

#[test]
fn list_block() {
    assert_eq!(
        defaults("[list]\n- a\n- b\n[/list]"),
        concat!(
            r#"<doki-list data-type="unordered" data-bullet="-">"#,
            "<doki-list-item>a</doki-list-item><doki-list-item>b</doki-list-item>",
            "</doki-list>"
        )
    );
}

#[test]
fn table_block_with_header() {
    assert_eq!(
        defaults("[table header]\n|a|b|\n|c|d|\n[/table]"),
        concat!(
            "<doki-table-container><doki-table>",
            "<doki-table-row><doki-table-header>a</doki-table-header><doki-table-header>b</doki-table-header></doki-table-row>",
            "<doki-table-row><doki-table-cell>c</doki-table-cell><doki-table-cell>d</doki-table-cell></doki-table-row>",
            "</doki-table></doki-table-container>"
        )
    );
}

#[test]
fn inline_image() {
    assert_eq!(
        defaults(r#"[img: "cat.png" width=10px alt=Cat]"#),
        r#"<doki-image style="width: 10px;"><img src="cat.png" alt="Cat"></doki-image>"#
    );
}

// Nesting

#[test]
fn nested_same_name_blocks_balance_by_default() {
    assert_eq!(
        defaults("[note]x[note]y[/note]z[/note]"),
        "<doki-note>x[note]y[/note]z</doki-note>"
    );
}

#[test]
fn legacy_nesting_truncates_at_first_close() {
    let options = ParseOptions {
        nesting: BlockNesting::Legacy,
        ..ParseOptions::default()
    };
    assert_eq!(
        parse_with(&TagRegistry::with_defaults(), options, "[note]x[note]y[/note]z[/note]"),
        "<doki-note>x[note]y</doki-note>z[/note]"
    );
}

#[test]
fn handlers_can_run_the_full_parse_on_their_content() {
    let mut registry = TagRegistry::with_defaults();
    registry.register("section", |expander: &Expander<'_>, content: &str, _: &Args| {
        Node::new("section").with_markup(expander.parse(content))
    });

    assert_eq!(
        parse(&registry, "[section][note]x[/note][/section]"),
        "<section><doki-note>x</doki-note></section>"
    );
}

#[rstest]
#[case(
    "[list]\n- [note]x[/note]\n[/list]",
    r#"<doki-list data-type="unordered" data-bullet="-"><doki-list-item>[note]x[/note]</doki-list-item></doki-list>"#
)]
#[case(
    "[table]\n|[note]x[/note]|\n[/table]",
    concat!(
        "<doki-table-container><doki-table><doki-table-row>",
        "<doki-table-cell>[note]x[/note]</doki-table-cell>",
        "</doki-table-row></doki-table></doki-table-container>"
    )
)]
#[case(
    "[warning][note]x[/note][/warning]",
    "<doki-warning>[note]x[/note]</doki-warning>"
)]
fn builtin_handlers_never_reenter_the_block_phase(#[case] text: &str, #[case] expected: &str) {
    assert_eq!(defaults(text), expected);
}

#[test]
fn wrapper_args_cannot_break_out_of_the_start_tag() {
    assert_eq!(
        defaults(r#"[note a"><b>pwn</b><i=1]hi[/note]"#),
        r#"<doki-note data-arg-0="a&quot;&gt;&lt;b&gt;pwn&lt;/b&gt;&lt;i=1">hi</doki-note>"#
    );
}

#[test]
fn blank_table_line_is_an_empty_row() {
    let out = defaults("[table]\n|a|\n\n|b|\n[/table]");
    assert_eq!(out.matches("<doki-table-row>").count(), 3, "{out}");
}

#[test]
fn sibling_blocks_expand_independently() {
    assert_eq!(
        defaults("[note]a[/note] [warning]b[/warning]"),
        "<doki-note>a</doki-note> <doki-warning>b</doki-warning>"
    );
}

// Registry behaviour through parse

#[test]
fn late_registration_applies_to_later_parses() {
    let mut registry = TagRegistry::empty();
    let text = r#"[shout: "hi"]"#;
    assert_eq!(parse(&registry, text), text);

    registry.register("shout", |_: &Expander<'_>, content: &str, _: &Args| {
        Node::new("b").with_text(content.to_uppercase())
    });
    assert_eq!(parse(&registry, text), "<b>HI</b>");
}

#[test]
fn alias_expands_like_its_target() {
    let mut registry = TagRegistry::with_defaults();
    registry.alias("callout", "note").unwrap();
    assert_eq!(
        parse(&registry, "[callout]x[/callout]"),
        "<doki-note>x</doki-note>"
    );
}

#[test]
fn registries_are_independent() {
    let mut custom = TagRegistry::with_defaults();
    custom.register("note", |_: &Expander<'_>, content: &str, _: &Args| {
        Node::new("aside").with_text(content)
    });
    let stock = TagRegistry::with_defaults();

    assert_eq!(parse(&custom, "[note]x[/note]"), "<aside>x</aside>");
    assert_eq!(parse(&stock, "[note]x[/note]"), "<doki-note>x</doki-note>");
}

#[test]
fn handler_output_text_is_escaped() {
    let mut registry = TagRegistry::empty();
    registry.register("raw", |_: &Expander<'_>, content: &str, _: &Args| {
        Node::new("pre").with_text(content)
    });
    assert_eq!(
        parse(&registry, "[raw]<b> & [x][/raw]"),
        "<pre>&lt;b&gt; &amp; &#91;x&#93;</pre>"
    );
}
