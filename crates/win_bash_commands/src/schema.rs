use serde::Deserialize;

/// Which part of an [`OptionSpec`] a key is compared against.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    /// The long form, written as `--title`
    Title,
    /// The short form, written as `-short`
    Short,
}

/// A single declared flag or keyword option.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize)]
pub struct OptionSpec {
    pub title: Box<str>,
    pub short: Box<str>,
}

impl OptionSpec {
    pub fn new<T, S>(title: T, short: S) -> Self
    where
        T: Into<Box<str>>,
        S: Into<Box<str>>,
    {
        Self {
            title: title.into(),
            short: short.into(),
        }
    }

    pub fn title(&self) -> &str {
        &*self.title
    }

    pub fn short(&self) -> &str {
        &*self.short
    }

    pub fn key(&self, field: Field) -> &str {
        match field {
            Field::Title => self.title(),
            Field::Short => self.short(),
        }
    }
}

/// The flags and keyword options a command recognizes.
///
/// Titles and shorts are expected to be unique within each list. This isn't
/// checked: lookups walk the list in order and the first entry wins.
#[derive(Default, Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Schema {
    pub flags: Vec<OptionSpec>,
    pub kwargs: Vec<OptionSpec>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn flag<T, S>(mut self, title: T, short: S) -> Self
    where
        T: Into<Box<str>>,
        S: Into<Box<str>>,
    {
        self.flags.push(OptionSpec::new(title, short));
        self
    }

    pub fn kwarg<T, S>(mut self, title: T, short: S) -> Self
    where
        T: Into<Box<str>>,
        S: Into<Box<str>>,
    {
        self.kwargs.push(OptionSpec::new(title, short));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty() && self.kwargs.is_empty()
    }

    /// Title of the first flag whose `field` equals `key`
    pub fn find_flag(&self, field: Field, key: &str) -> Option<&str> {
        Self::find(&self.flags, field, key)
    }

    /// Title of the first keyword option whose `field` equals `key`
    pub fn find_kwarg(&self, field: Field, key: &str) -> Option<&str> {
        Self::find(&self.kwargs, field, key)
    }

    fn find<'a>(list: &'a [OptionSpec], field: Field, key: &str) -> Option<&'a str> {
        list.iter()
            .find(|spec| spec.key(field) == key)
            .map(OptionSpec::title)
    }
}
