use anyhow::Context;
use std::fs;
use std::path::Path;
use tilemerge_core::GameConfig;

/// Reads a [`GameConfig`] from a TOML file. Missing keys fall back to defaults.
pub fn load(path: &Path) -> anyhow::Result<GameConfig> {
    let text =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    parse(&text).with_context(|| format!("parsing {}", path.display()))
}

pub fn parse(text: &str) -> anyhow::Result<GameConfig> {
    let config: GameConfig = toml::from_str(text)?;
    Ok(GameConfig::new(config.size, config.rules)?)
}
