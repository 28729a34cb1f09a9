/// How a block tag finds its closing tag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BlockNesting {
    /// Close at the `[/name]` that balances the opener, counting nested
    /// openers of the same name.
    #[default]
    Balanced,
    /// Close at the first `[/name]`. A nested same-name block truncates the
    /// outer one.
    Legacy,
}

/// Precedence used when inferring an ordered list's number format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NumberFormatDetection {
    /// Most specific marker first, so every format is reachable.
    #[default]
    Strict,
    /// `#.`, `(#).`, `(#)`, `(#)-`, `#-` in that order.
    Legacy,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    pub nesting: BlockNesting,
    pub number_formats: NumberFormatDetection,
}

impl ParseOptions {
    /// Legacy rules for both switches.
    pub fn legacy() -> Self {
        Self {
            nesting: BlockNesting::Legacy,
            number_formats: NumberFormatDetection::Legacy,
        }
    }
}
