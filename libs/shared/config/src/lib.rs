use std::env;
use std::path::PathBuf;
use tracing::warn;

pub const DEFAULT_STORAGE_KEY: &str = "patientAppointments";
pub const DEFAULT_MOCK_API_URL: &str = "https://680dc4fec47cb8074d912473.mockapi.io";
pub const DEFAULT_BILLING_API_URL: &str = "https://680e5962c47cb8074d92d430.mockapi.io";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub storage_dir: PathBuf,
    pub storage_key: String,
    pub mock_api_url: String,
    pub billing_api_url: String,
    pub enforce_doctor_directory: bool,
    pub port: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_dir: PathBuf::from("./data"),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            mock_api_url: DEFAULT_MOCK_API_URL.to_string(),
            billing_api_url: DEFAULT_BILLING_API_URL.to_string(),
            enforce_doctor_directory: true,
            port: 3000,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let config = Self {
            storage_dir: env::var("PMS_STORAGE_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| {
                    warn!("PMS_STORAGE_DIR not set, using {}", defaults.storage_dir.display());
                    defaults.storage_dir.clone()
                }),
            storage_key: env::var("PMS_STORAGE_KEY")
                .unwrap_or_else(|_| defaults.storage_key.clone()),
            mock_api_url: env::var("PMS_MOCK_API_URL")
                .unwrap_or_else(|_| {
                    warn!("PMS_MOCK_API_URL not set, using default");
                    defaults.mock_api_url.clone()
                }),
            billing_api_url: env::var("PMS_BILLING_API_URL")
                .unwrap_or_else(|_| {
                    warn!("PMS_BILLING_API_URL not set, using default");
                    defaults.billing_api_url.clone()
                }),
            enforce_doctor_directory: parse_flag(
                "PMS_ENFORCE_DOCTOR_DIRECTORY",
                env::var("PMS_ENFORCE_DOCTOR_DIRECTORY").ok(),
                defaults.enforce_doctor_directory,
            ),
            port: env::var("PMS_PORT")
                .ok()
                .and_then(|raw| match raw.parse() {
                    Ok(port) => Some(port),
                    Err(_) => {
                        warn!("PMS_PORT={} is not a valid port, using {}", raw, defaults.port);
                        None
                    }
                })
                .unwrap_or(defaults.port),
        };

        if !config.is_configured() {
            warn!("Application not fully configured - storage key or API urls are empty");
        }

        config
    }

    pub fn is_configured(&self) -> bool {
        !self.storage_key.is_empty()
            && !self.mock_api_url.is_empty()
            && !self.billing_api_url.is_empty()
    }
}

fn parse_flag(name: &str, raw: Option<String>, default: bool) -> bool {
    match raw.as_deref().map(str::trim) {
        None => default,
        Some("1") | Some("true") | Some("yes") | Some("on") => true,
        Some("0") | Some("false") | Some("no") | Some("off") => false,
        Some(other) => {
            warn!("{}={} is not a boolean, using {}", name, other, default);
            default
        }
    }
}
