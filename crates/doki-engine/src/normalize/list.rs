use std::sync::OnceLock;

use regex::Regex;

use crate::options::NumberFormatDetection;

/// Characters accepted as unordered bullets.
pub const BULLETS: [char; 4] = ['-', '•', '*', '~'];

/// Bullet used when the first item does not start with one.
pub const DEFAULT_BULLET: char = '*';

/// How ordered list items are numbered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberFormat {
    /// `1.`
    Dot,
    /// `1).`
    ParenDot,
    /// `1)`
    Paren,
    /// `1)-`
    ParenDash,
    /// `1-`
    Dash,
}

impl NumberFormat {
    /// The format label written to the list node, `#` standing for the number.
    pub fn as_str(self) -> &'static str {
        match self {
            NumberFormat::Dot => "#.",
            NumberFormat::ParenDot => "(#).",
            NumberFormat::Paren => "(#)",
            NumberFormat::ParenDash => "(#)-",
            NumberFormat::Dash => "#-",
        }
    }

    fn pattern(self) -> &'static Regex {
        static PATTERNS: OnceLock<[Regex; 5]> = OnceLock::new();
        let patterns = PATTERNS.get_or_init(|| {
            [r"^[0-9]+\.", r"^[0-9]+\)\.", r"^[0-9]+\)", r"^[0-9]+\)-", r"^[0-9]+-"]
                .map(|p| Regex::new(p).expect("Invalid number format regex"))
        });
        match self {
            NumberFormat::Dot => &patterns[0],
            NumberFormat::ParenDot => &patterns[1],
            NumberFormat::Paren => &patterns[2],
            NumberFormat::ParenDash => &patterns[3],
            NumberFormat::Dash => &patterns[4],
        }
    }

    /// Order in which formats are tried against the first item.
    fn precedence(detection: NumberFormatDetection) -> [NumberFormat; 5] {
        use NumberFormat::*;
        match detection {
            // `1)` claims every `1)…` prefix before `1)-` is tried.
            NumberFormatDetection::Legacy => [Dot, ParenDot, Paren, ParenDash, Dash],
            NumberFormatDetection::Strict => [ParenDot, ParenDash, Paren, Dot, Dash],
        }
    }

    fn detect(item: &str, detection: NumberFormatDetection) -> NumberFormat {
        Self::precedence(detection)
            .into_iter()
            .find(|f| f.pattern().is_match(item))
            .unwrap_or(NumberFormat::Dot)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Unordered { bullet: char },
    Ordered { format: NumberFormat },
}

/// A list split into items with their markers removed.
///
/// Items are still raw text here; they are inline-expanded when the list is
/// turned into a node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListModel {
    pub kind: ListKind,
    pub items: Vec<String>,
}

impl ListModel {
    pub fn is_ordered(&self) -> bool {
        matches!(self.kind, ListKind::Ordered { .. })
    }
}

fn ordered_marker() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[0-9]+[.)\-]").expect("Invalid ordered marker regex"))
}

fn item_prefix(detection: NumberFormatDetection) -> &'static Regex {
    static LEGACY: OnceLock<Regex> = OnceLock::new();
    static STRICT: OnceLock<Regex> = OnceLock::new();
    match detection {
        NumberFormatDetection::Legacy => LEGACY.get_or_init(|| {
            Regex::new(r"^[0-9]+[.)\-]\s*").expect("Invalid item prefix regex")
        }),
        NumberFormatDetection::Strict => STRICT.get_or_init(|| {
            Regex::new(r"^[0-9]+(?:\)\.|\)-|[.)\-])\s*").expect("Invalid item prefix regex")
        }),
    }
}

/// Splits list content into items and infers the list kind from the first.
///
/// Blank lines are dropped. An empty list is unordered with the default
/// bullet and no items.
pub fn parse_list(content: &str, detection: NumberFormatDetection) -> ListModel {
    let lines: Vec<&str> = content
        .trim()
        .split('\n')
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();

    let first = lines.first().copied().unwrap_or("");

    let kind = if ordered_marker().is_match(first) {
        ListKind::Ordered {
            format: NumberFormat::detect(first, detection),
        }
    } else {
        let bullet = first
            .chars()
            .next()
            .filter(|c| BULLETS.contains(c))
            .unwrap_or(DEFAULT_BULLET);
        ListKind::Unordered { bullet }
    };

    let items = lines
        .into_iter()
        .map(|line| match kind {
            ListKind::Unordered { .. } => line
                .strip_prefix(&BULLETS[..])
                .unwrap_or(line)
                .trim()
                .to_string(),
            ListKind::Ordered { .. } => item_prefix(detection)
                .replace(line, "")
                .trim()
                .to_string(),
        })
        .collect();

    ListModel { kind, items }
}
