#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    UnknownOption(String),
    MissingValue(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownOption(token) => write!(f, "unknown option: {}", token),
            Self::MissingValue(title) => write!(f, "a value must follow: {}", title),
        }
    }
}

impl std::error::Error for Error {}
