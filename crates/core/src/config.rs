use serde::Deserialize;

/// Root application configuration. Loaded from environment variables
/// with the prefix `DELIVERABLE_STUDIO__`.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_project_title")]
    pub project_title: String,
    #[serde(default)]
    pub redaction: RedactionConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RedactionConfig {
    /// Audience applied when the caller does not specify one.
    #[serde(default = "default_audience")]
    pub default_audience: String,
    /// Run the output validator on every redacted tree before emitting it.
    #[serde(default = "default_validate_output")]
    pub validate_output: bool,
}

fn default_project_title() -> String {
    "Untitled Project".to_string()
}
fn default_audience() -> String {
    "client".to_string()
}
fn default_validate_output() -> bool {
    true
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            project_title: default_project_title(),
            redaction: RedactionConfig::default(),
        }
    }
}

impl Default for RedactionConfig {
    fn default() -> Self {
        Self {
            default_audience: default_audience(),
            validate_output: default_validate_output(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder().add_source(
            config::Environment::with_prefix("DELIVERABLE_STUDIO")
                .separator("__")
                .try_parsing(true)
                .list_separator(","),
        );

        let config = builder.build()?;
        config.try_deserialize()
    }
}
