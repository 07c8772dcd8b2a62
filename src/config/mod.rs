//! Configuration loading and validation

mod schema;

pub use schema::*;

use anyhow::{Context, Result};
use std::path::Path;

/// Example configuration written by `semitone init`
pub const EXAMPLE_CONFIG: &str = include_str!("../../semitone.example.yaml");

/// Load configuration from a YAML file
pub fn load_config(path: &Path) -> Result<PlotConfig> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    parse_config(&contents)
}

/// Parse and validate configuration from YAML text
pub fn parse_config(contents: &str) -> Result<PlotConfig> {
    let config: PlotConfig = serde_yaml::from_str(contents)?;
    config.validate()?;
    log::debug!("loaded configuration with {} scales", config.scales.len());
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;
    use std::io::Write;

    #[test]
    fn test_load_minimal_config() {
        let yaml = r#"
scales:
  - key: C
    kind: major
"#;
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(yaml.as_bytes()).unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.scales.len(), 1);
        assert_eq!(config.plot.separation, 1.02);
    }

    #[test]
    fn test_example_config_is_valid() {
        let config = parse_config(EXAMPLE_CONFIG).unwrap();
        let table = config.to_plot().unwrap().table().unwrap();
        assert!(!table.rows.is_empty());
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let yaml = r#"
scales:
  - key: H
    kind: minor
"#;
        assert!(parse_config(yaml).is_err());
    }

    #[test]
    fn test_missing_file() {
        assert!(load_config(Path::new("/nonexistent/semitone.yaml")).is_err());
    }
}
