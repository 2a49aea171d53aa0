use config::{Environment, File, FileFormat};
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;

/// Process configuration, built once in `main` and shared read-only.
#[derive(Clone, Debug, Deserialize)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Bearer credential for the completion API. Empty is allowed; calls will fail.
    pub openrouter_api_key: Secret<String>,
    pub model_id: String,
    pub api_base_url: String,
    pub detect_max_tokens: u32,
    pub generate_max_tokens: u32,
    /// Fail the request when language detection fails instead of omitting `sourceLang`.
    pub detection_required: bool,
    pub static_dir: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            openrouter_api_key: Secret::new(String::new()),
            model_id: String::new(),
            api_base_url: "https://openrouter.ai/api/v1".to_string(),
            detect_max_tokens: 10,
            generate_max_tokens: 100,
            detection_required: false,
            static_dir: "web".to_string(),
        }
    }
}

impl Config {
    /// Load defaults, then `CONFIG_PATH` (or `conf.yaml` if present), then the environment.
    pub fn load() -> Result<Self, config::ConfigError> {
        let path = std::env::var("CONFIG_PATH").ok();
        Self::from_sources(path.as_deref(), Environment::default().try_parsing(true))
    }

    pub fn from_sources(
        path: Option<&str>,
        environment: Environment,
    ) -> Result<Self, config::ConfigError> {
        let defaults = Config::default();

        let file = match path {
            Some(path) => File::with_name(path).required(true),
            None => File::new("conf", FileFormat::Yaml).required(false),
        };

        config::Config::builder()
            .set_default("host", defaults.host)?
            .set_default("port", i64::from(defaults.port))?
            .set_default("openrouter_api_key", "")?
            .set_default("model_id", defaults.model_id)?
            .set_default("api_base_url", defaults.api_base_url)?
            .set_default("detect_max_tokens", i64::from(defaults.detect_max_tokens))?
            .set_default("generate_max_tokens", i64::from(defaults.generate_max_tokens))?
            .set_default("detection_required", defaults.detection_required)?
            .set_default("static_dir", defaults.static_dir)?
            .add_source(file)
            .add_source(environment)
            .build()?
            .try_deserialize()
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn has_credentials(&self) -> bool {
        !self.openrouter_api_key.expose_secret().trim().is_empty()
            && !self.model_id.trim().is_empty()
    }
}
