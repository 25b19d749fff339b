use crate::persist::{Persist, Toml};
use std::path::{Path, PathBuf};

#[derive(Default, Clone, Debug, serde::Deserialize, serde::Serialize)]
pub struct Config {
    pub parser: Parser,
}

#[derive(Clone, Debug, serde::Deserialize, serde::Serialize)]
pub struct Parser {
    pub schema: PathBuf,
    #[serde(default)]
    pub strict: bool,
}

impl Default for Parser {
    fn default() -> Self {
        Self {
            schema: PathBuf::from("schema.toml"),
            strict: false,
        }
    }
}

impl Config {
    pub const DEFAULT_PATH: &'static str = "win_bash.toml";
    pub const ENV_VAR: &'static str = "WIN_BASH_CONFIG";

    pub fn path() -> PathBuf {
        std::env::var_os(Self::ENV_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(Self::DEFAULT_PATH))
    }

    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(Self::path())
    }

    pub fn load_from(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Self::write_default(path);
        }
        log::debug!("loading config from '{}'", path.display());
        Toml::load_from(path)
    }

    fn write_default(path: &Path) -> anyhow::Result<Self> {
        let example = path.with_extension("toml.example");
        Toml::save(&example, &Self::default())?;
        log::warn!("wrote a default config to '{}'", example.display());

        anyhow::bail!(
            "cannot load config from '{}'. copy '{}' to it, edit it then rerun",
            path.display(),
            example.display()
        )
    }
}
