use compact_str::{CompactString, format_compact};
use core::fmt;

/// Syntax used to turn a parameter name into a placeholder token.
///
/// The token format belongs to whatever layer executes the statement; the
/// rendered fragment only carries it verbatim.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum PlaceholderStyle {
    /// MyBatis inline style (`#{name}`)
    #[default]
    MyBatis,
    /// MyBatis style bound through a `parameters` map argument (`#{parameters.name}`)
    MyBatisMap,
    /// Colon style placeholders (`:name`)
    Colon,
    /// At-sign style placeholders (`@name`)
    AtSign,
    /// Dollar style placeholders (`$name`)
    Dollar,
}

impl PlaceholderStyle {
    /// Renders the placeholder token for `name`.
    pub fn token(self, name: &str) -> CompactString {
        match self {
            PlaceholderStyle::MyBatis => format_compact!("#{{{name}}}"),
            PlaceholderStyle::MyBatisMap => format_compact!("#{{parameters.{name}}}"),
            PlaceholderStyle::Colon => format_compact!(":{name}"),
            PlaceholderStyle::AtSign => format_compact!("@{name}"),
            PlaceholderStyle::Dollar => format_compact!("${name}"),
        }
    }
}

/// A named parameter together with the style it renders in.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub struct Placeholder {
    /// The parameter name, used as the key in the parameter map
    pub name: CompactString,
    /// The style of the placeholder
    pub style: PlaceholderStyle,
}

impl Placeholder {
    pub fn new(name: impl Into<CompactString>, style: PlaceholderStyle) -> Self {
        Self {
            name: name.into(),
            style,
        }
    }

    pub fn token(&self) -> CompactString {
        self.style.token(&self.name)
    }
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.token())
    }
}

/// Hands out parameter names that are unique for the allocator's lifetime:
/// `p1`, `p2`, ... with the default prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterNames {
    prefix: CompactString,
    next: usize,
}

impl ParameterNames {
    pub const DEFAULT_PREFIX: &'static str = "p";

    pub fn new() -> Self {
        Self::with_prefix(Self::DEFAULT_PREFIX)
    }

    pub fn with_prefix(prefix: impl Into<CompactString>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 1,
        }
    }

    /// Returns the next unused name.
    pub fn next_name(&mut self) -> CompactString {
        let name = format_compact!("{}{}", self.prefix, self.next);
        self.next += 1;
        name
    }

    /// Number of names handed out so far.
    pub fn allocated(&self) -> usize {
        self.next - 1
    }
}

impl Default for ParameterNames {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for ParameterNames {
    type Item = CompactString;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.next_name())
    }
}
