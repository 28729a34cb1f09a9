// Shared by the bench targets in this directory; each target only uses some
// of these, which dead code analysis flags per target.
#[allow(dead_code)]
pub fn generate_doki_content(size: usize) -> String {
    let base = concat!(
        "<h2>Section</h2>\n",
        "[note]Remember to run [code: \"doki build\"] first.[/note]\n",
        "[list]\n- one\n- two [link: \"more\" #more]\n- three\n[/list]\n",
        "[table header]\n| Key | Value |\n| a | 1 |\n| b | 2 |\n[/table]\n",
        "[codeblock rust]\n    fn main() {\n        println!(\"hi\");\n    }\n[/codeblock]\n",
        "Plain paragraph text with [brackets] that are not tags.\n\n",
    );
    base.repeat(size)
}

/// `depth` levels of same-name notes, each closing its own opener.
#[allow(dead_code)]
pub fn generate_nested_notes(depth: usize) -> String {
    let mut content = String::new();
    for level in 0..depth {
        content.push_str(&format!("[note level={level}]text "));
    }
    for _ in 0..depth {
        content.push_str("[/note]");
    }
    content
}
