use serde::{Deserialize, Serialize};

use crate::error::AppError as Error;

pub const CONFIGURATION_FILE: &str = "configuration.yaml";

const DEFAULT_BASE_URL: &str = "http://localhost:5001/";
const DEFAULT_CACHE_PATH: &str = "expenses.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub api: Api,
    pub cache: Cache,
}

/// Where the remote expense store lives
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Api {
    pub base_url: String,
}

/// Where the local snapshot of the expense list is kept
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cache {
    pub path: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api: Api {
                base_url: DEFAULT_BASE_URL.to_string(),
            },
            cache: Cache {
                path: DEFAULT_CACHE_PATH.to_string(),
            },
        }
    }
}

/// Get the configuration from defaults, the configuration file and the environment
///
/// Later sources win: `configuration.yaml` overrides the defaults and
/// `EXPENSES__API__BASE_URL` style variables override both.
///
/// # Errors
/// Will return errors if the config can't be read or deserialised.
pub fn get_configuration() -> Result<Settings, Error> {
    let settings = config::Config::builder()
        .set_default("api.base_url", DEFAULT_BASE_URL)?
        .set_default("cache.path", DEFAULT_CACHE_PATH)?
        .add_source(
            config::File::new(CONFIGURATION_FILE, config::FileFormat::Yaml).required(false),
        )
        .add_source(
            config::Environment::with_prefix("EXPENSES")
                .prefix_separator("__")
                .separator("__"),
        )
        .build()?;

    Ok(settings.try_deserialize::<Settings>()?)
}
