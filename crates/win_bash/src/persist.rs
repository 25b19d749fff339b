use ::serde::{Deserialize, Serialize};
use anyhow::Context;
use std::path::Path;

use win_bash_commands::Schema;

pub trait Persist<T>
where
    for<'de> T: Deserialize<'de>,
{
    fn load(data: &[u8]) -> anyhow::Result<T>;

    fn load_from<P>(file: P) -> anyhow::Result<T>
    where
        P: AsRef<Path>,
    {
        let file = file.as_ref();
        let data =
            std::fs::read(file).with_context(|| format!("cannot read '{}'", file.display()))?;
        Self::load(&data).with_context(|| format!("cannot load '{}'", file.display()))
    }
}

pub struct Json;

impl<T> Persist<T> for Json
where
    for<'de> T: Deserialize<'de>,
{
    fn load(data: &[u8]) -> anyhow::Result<T> {
        serde_json::from_slice(data).with_context(|| "cannot deserialize json")
    }
}

pub struct Toml;

impl Toml {
    pub fn save<P, T>(path: P, element: &T) -> anyhow::Result<()>
    where
        P: AsRef<Path>,
        T: Serialize,
    {
        let path = path.as_ref();
        std::fs::write(path, toml::to_string_pretty(element)?.as_bytes())
            .with_context(|| format!("cannot save to '{}'", path.display()))
    }
}

impl<T> Persist<T> for Toml
where
    for<'de> T: Deserialize<'de>,
{
    fn load(data: &[u8]) -> anyhow::Result<T> {
        toml::from_slice(data).with_context(|| "cannot deserialize toml")
    }
}

/// Loads a schema, picking the format from the extension. Anything that
/// isn't `.json` is read as toml.
pub fn load_schema(path: impl AsRef<Path>) -> anyhow::Result<Schema> {
    let path = path.as_ref();
    let schema: Schema = match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("json") => Json::load_from(path)?,
        _ => Toml::load_from(path)?,
    };

    log::debug!(
        "loaded {} flag(s) and {} kwarg(s) from '{}'",
        schema.flags.len(),
        schema.kwargs.len(),
        path.display()
    );
    Ok(schema)
}
