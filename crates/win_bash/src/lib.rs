mod config;
pub use config::Config;

mod persist;
pub use persist::{load_schema, Json, Persist, Toml};

use std::ffi::OsString;
use win_bash_commands::{ParseResult, Schema};

/// Turns raw process arguments into tokens. Bytes that aren't valid UTF-8
/// become U+FFFD instead of failing the whole parse.
pub fn tokens_from<I>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .map(|arg| match arg.into_string() {
            Ok(arg) => arg,
            Err(arg) => {
                let lossy = arg.to_string_lossy().into_owned();
                log::warn!("argument is not valid utf-8, using: {}", lossy);
                lossy
            }
        })
        .collect()
}

/// Loads the configured schema and classifies `tokens` with it.
pub fn run<S>(config: &Config, tokens: &[S]) -> anyhow::Result<ParseResult>
where
    S: AsRef<str>,
{
    let schema = load_schema(&config.parser.schema)?;
    classify(&schema, config.parser.strict, tokens)
}

pub fn classify<S>(schema: &Schema, strict: bool, tokens: &[S]) -> anyhow::Result<ParseResult>
where
    S: AsRef<str>,
{
    if strict {
        return schema.parse_strict(tokens).map_err(Into::into);
    }
    Ok(schema.parse(tokens))
}

#[cfg(test)]
mod tests;
