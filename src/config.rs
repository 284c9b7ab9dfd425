use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Settings for the `recipemark` binary
#[derive(Debug, Deserialize, Clone, Default)]
pub struct Settings {
    /// How parsed recipes are printed
    #[serde(default)]
    pub output: OutputSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct OutputSettings {
    #[serde(default)]
    pub format: OutputFormat,
    /// Indent JSON output
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            pretty: default_pretty(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    /// Rust debug representation, mostly useful while writing recipes
    Debug,
}

fn default_pretty() -> bool {
    true
}

impl Settings {
    /// Load settings from `recipemark.toml` and the environment
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables with RECIPEMARK__ prefix
    /// 2. recipemark.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPEMARK__OUTPUT__FORMAT=debug
    pub fn load() -> Result<Self, ConfigError> {
        load_settings(File::with_name("recipemark").required(false))
    }
}

fn load_settings<S>(file: S) -> Result<Settings, ConfigError>
where
    S: config::Source + Send + Sync + 'static,
{
    let settings = Config::builder()
        .add_source(file)
        // Use double underscore for nested: RECIPEMARK__OUTPUT__PRETTY
        .add_source(
            Environment::with_prefix("RECIPEMARK")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    fn from_toml(toml: &str) -> Result<Settings, ConfigError> {
        load_settings(File::from_str(toml, FileFormat::Toml))
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.output.format, OutputFormat::Json);
        assert!(settings.output.pretty);
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let settings = from_toml("").unwrap();
        assert_eq!(settings.output.format, OutputFormat::Json);
        assert!(settings.output.pretty);
    }

    #[test]
    fn test_output_section() {
        let settings = from_toml("[output]\nformat = \"debug\"\npretty = false\n").unwrap();
        assert_eq!(settings.output.format, OutputFormat::Debug);
        assert!(!settings.output.pretty);
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        assert!(from_toml("[output]\nformat = \"yaml\"\n").is_err());
    }
}
