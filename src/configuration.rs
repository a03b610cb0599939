use config::{Config, ConfigError, File};
use derive_getters::Getters;
use secrecy::{ExposeSecret, Secret};
use serde_aux::field_attributes::deserialize_number_from_string;
use std::time::Duration;

/// Retrive the configuration for the application.
///
/// Values are layered: `configuration/base.yaml`, then the file for the
/// current `APP_ENVIRONMENT` (`local` by default), then environment variables
/// such as `APP_CONTACTS__API_KEY`.
pub fn get_configuration() -> Result<Settings, ConfigError> {
    let base_path = std::env::current_dir().map_err(|e| ConfigError::Foreign(Box::new(e)))?;
    let configuration_directory = base_path.join("configuration");

    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(ConfigError::Message)?;
    let environment_filename = format!("{}.yaml", environment.as_str());

    Config::builder()
        .add_source(File::from(configuration_directory.join("base.yaml")))
        .add_source(File::from(configuration_directory.join(environment_filename)))
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?
        .try_deserialize()
}

#[derive(Debug, serde::Deserialize, Getters)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub contacts: ContactsSettings,
}

#[derive(Debug, serde::Deserialize)]
pub struct ApplicationSettings {
    pub host: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
    pub hmac_secret: Secret<String>,
    pub secure_cookies: bool,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub handoff_ttl_seconds: u64,
}

impl ApplicationSettings {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn handoff_ttl(&self) -> Duration {
        Duration::from_secs(self.handoff_ttl_seconds)
    }
}

/// Settings for the external contact-management API.
#[derive(Debug, serde::Deserialize)]
pub struct ContactsSettings {
    pub base_url: String,
    #[serde(default)]
    pub api_key: Option<Secret<String>>,
    #[serde(default)]
    pub list_id: Option<String>,
    #[serde(default = "default_duplicate_markers")]
    pub duplicate_markers: Vec<String>,
}

impl ContactsSettings {
    /// The API root. The path always ends in `/`, so relative endpoints are
    /// joined below it instead of replacing its last segment.
    pub fn base_url(&self) -> Result<url::Url, url::ParseError> {
        let mut url = url::Url::parse(&self.base_url)?;
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        Ok(url)
    }

    /// The API key, if one is configured and not blank.
    pub fn api_key(&self) -> Option<Secret<String>> {
        self.api_key
            .as_ref()
            .filter(|key| !key.expose_secret().trim().is_empty())
            .cloned()
    }

    /// The destination list, only when the configured value is an integer.
    pub fn list_id(&self) -> Option<i64> {
        let raw = self.list_id.as_deref()?.trim();
        if raw.is_empty() {
            return None;
        }
        match raw.parse() {
            Ok(id) => Some(id),
            Err(e) => {
                tracing::warn!(list_id = raw, "Ignoring contact list id: {e}");
                None
            }
        }
    }
}

fn default_duplicate_markers() -> Vec<String> {
    vec!["already exist".into(), "duplicate".into()]
}

/// The possible runtime environments for the application.
pub enum Environment {
    Local,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            other => Err(format!(
                "{other} is not a supported environment. Use either `local` or `production`."
            )),
        }
    }
}
