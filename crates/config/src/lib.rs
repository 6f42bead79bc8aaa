pub mod schema;

pub use schema::{
    ColorChoice, LabConfig, OutputConfig, SequenceConfig, SingletonConfig, StyleConfig,
};

use lab_core::{LabError, Result};
use std::path::{Path, PathBuf};

/// Load configuration from a TOML file.  Returns `LabConfig::default()` if
/// the file doesn't exist so every panel always has sensible inputs.
pub fn load(path: impl AsRef<Path>) -> Result<LabConfig> {
    let path = path.as_ref();
    if !path.exists() {
        tracing::warn!(
            "Config file not found at '{}'; using defaults.",
            path.display()
        );
        return Ok(LabConfig::default());
    }

    let raw = std::fs::read_to_string(path)
        .map_err(|e| LabError::Config(format!("cannot read '{}': {e}", path.display())))?;

    let config = toml::from_str(&raw).map_err(|e| LabError::Config(format!("TOML parse error: {e}")))?;
    tracing::debug!("Loaded config from '{}'", path.display());
    Ok(config)
}

/// Return the default config path, honouring `$XDG_CONFIG_HOME`.
pub fn default_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("patterns-lab").join("lab.toml")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = load(dir.path().join("absent.toml")).unwrap();
        assert_eq!(cfg, LabConfig::default());
    }

    #[test]
    fn reads_values_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[sequence]\nstart = 10\nend = 0\nstep = -3\n\n[output]\ncolor = \"always\""
        )
        .unwrap();

        let cfg = load(file.path()).unwrap();
        assert_eq!(cfg.sequence.start, 10);
        assert_eq!(cfg.sequence.end, 0);
        assert_eq!(cfg.sequence.step, -3);
        assert_eq!(cfg.output.color, ColorChoice::Always);
        assert_eq!(cfg.singleton, SingletonConfig::default());
    }

    #[test]
    fn malformed_file_is_config_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[sequence\nstart = ").unwrap();

        let err = load(file.path()).unwrap_err();
        assert!(matches!(err, LabError::Config(_)));
    }

    #[test]
    fn default_path_ends_with_lab_toml() {
        let path = default_path();
        assert!(path.ends_with("patterns-lab/lab.toml"));
    }
}
