/// Strips the common indentation from a code block body.
///
/// The first line usually sits right after the opening tag and carries no
/// indentation of its own, so the indent is measured on lines 2..N only.
/// Line 1's indent is the fallback when every later line is blank.
///
/// Only lines that start with a space are touched; tabs are ordinary
/// characters and tab-indented lines are left alone.
pub fn normalize_code_block(content: &str) -> String {
    let lines: Vec<&str> = content.split('\n').collect();

    let Some(first) = lines.iter().position(|l| !l.trim().is_empty()) else {
        return String::new();
    };
    let last = lines
        .iter()
        .rposition(|l| !l.trim().is_empty())
        .unwrap_or(first);
    let lines = &lines[first..=last];

    if let [only] = lines {
        return only.trim().to_string();
    }

    let min_indent = lines[1..]
        .iter()
        .filter(|l| !l.trim().is_empty())
        .map(|l| indent_width(l))
        .min()
        .unwrap_or_else(|| indent_width(lines[0]));

    lines
        .iter()
        .map(|line| {
            if !line.starts_with(' ') || line.trim().is_empty() {
                return *line;
            }
            strip_chars(line, min_indent)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Length of the leading run of spaces and tabs.
fn indent_width(line: &str) -> usize {
    line.bytes().take_while(|b| *b == b' ' || *b == b'\t').count()
}

/// Drops up to `n` leading characters, never more than the line holds.
fn strip_chars(line: &str, n: usize) -> &str {
    match line.char_indices().nth(n) {
        Some((idx, _)) => &line[idx..],
        None => "",
    }
}
