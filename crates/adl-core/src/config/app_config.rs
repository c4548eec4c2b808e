use std::path::PathBuf;

/// Application configuration DTO (pure data, no logic)
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub store: StoreConfig,
    pub directory: DirectoryConfig,
    pub logging: LoggingConfig,
}

/// Connection settings of the REST page store.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreConfig {
    /// Project URL, e.g. `https://xyz.supabase.co` (may be empty - a fact, not an error)
    pub url: String,
    /// Anonymous API key sent as `apikey` and bearer token
    pub api_key: String,
    /// Request timeout in seconds; 0 means "not set"
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DirectoryConfig {
    /// Rows per window; 0 means "not set"
    pub page_size: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoggingConfig {
    /// Directory for rolling log files; `None` logs to stdout only
    pub dir: Option<PathBuf>,
}

impl AppConfig {
    /// Create AppConfig from TOML value
    ///
    /// **Prohibited**: This method must NOT contain any validation
    /// or default value logic. Empty strings are valid "facts".
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        let str_at = |section: &str, key: &str| lookup(toml_value, section, key).and_then(|v| v.as_str());
        let int_at = |section: &str, key: &str| {
            lookup(toml_value, section, key)
                .and_then(|v| v.as_integer())
                .unwrap_or(0)
        };

        Ok(Self {
            store: StoreConfig {
                url: str_at("store", "url").unwrap_or("").to_string(),
                api_key: str_at("store", "api_key").unwrap_or("").to_string(),
                timeout_secs: u64::try_from(int_at("store", "timeout_secs"))?,
            },
            directory: DirectoryConfig {
                page_size: u32::try_from(int_at("directory", "page_size"))?,
            },
            logging: LoggingConfig {
                dir: str_at("logging", "dir").map(PathBuf::from),
            },
        })
    }

    /// Create empty AppConfig (all empty/default values)
    pub fn empty() -> Self {
        Self {
            store: StoreConfig {
                url: String::new(),
                api_key: String::new(),
                timeout_secs: 0,
            },
            directory: DirectoryConfig { page_size: 0 },
            logging: LoggingConfig { dir: None },
        }
    }
}

fn lookup<'a>(value: &'a toml::Value, section: &str, key: &str) -> Option<&'a toml::Value> {
    value.get(section).and_then(|s| s.get(key))
}
