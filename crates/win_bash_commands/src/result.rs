use serde::Serialize;
use std::collections::BTreeMap;

/// The classified tokens of one parse.
///
/// `kwargs` maps a keyword option's title to the token that followed it,
/// or `None` when the option was the last token. Keys are kept sorted, so
/// serialized output lists them alphabetically rather than in the order
/// they were given.
#[derive(Default, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ParseResult {
    pub args: Vec<String>,
    pub flags: Vec<String>,
    pub kwargs: BTreeMap<String, Option<String>>,
}

impl ParseResult {
    pub fn is_empty(&self) -> bool {
        self.args.is_empty() && self.flags.is_empty() && self.kwargs.is_empty()
    }

    pub fn has_flag(&self, title: &str) -> bool {
        self.flags.iter().any(|flag| flag == title)
    }

    /// How many times the flag was given. Repeats are kept, so `-v -v` is 2.
    pub fn flag_count(&self, title: &str) -> usize {
        self.flags.iter().filter(|flag| *flag == title).count()
    }

    pub fn kwarg(&self, title: &str) -> Option<&str> {
        self.kwargs.get(title).and_then(|value| value.as_deref())
    }

    /// True if the option was seen, even without a value following it
    pub fn contains_kwarg(&self, title: &str) -> bool {
        self.kwargs.contains_key(title)
    }
}
