use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use crate::book::CLIENT_BOOK_FILE;
use crate::utils::path::expand_tilde;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Path of the client book (INI roster).
    pub client_book: String,
    /// Root directory holding one log directory per client slug.
    pub logs_dir: String,
    #[serde(default = "default_client_slug")]
    pub default_client: String,
    /// When true, a malformed log line fails the whole load instead of
    /// keeping the sessions parsed before it.
    #[serde(default)]
    pub strict_parse: bool,
}

fn default_client_slug() -> String {
    "self".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            client_book: Self::client_book_file().to_string_lossy().to_string(),
            logs_dir: Self::logs_root().to_string_lossy().to_string(),
            default_client: default_client_slug(),
            strict_parse: false,
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("timecard")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".timecard")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("timecard.conf")
    }

    pub fn client_book_file() -> PathBuf {
        Self::config_dir().join(CLIENT_BOOK_FILE)
    }

    pub fn logs_root() -> PathBuf {
        Self::config_dir().join("logs")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Self {
        let path = Self::config_file();
        if path.exists() {
            let content = fs::read_to_string(&path).expect("❌ Failed to read configuration file");
            serde_yaml::from_str(&content).expect("❌ Failed to parse configuration file")
        } else {
            Self::default()
        }
    }

    /// Re-root the client book and the logs directory under the given data
    /// directory (the global `--dir` override; used heavily by tests).
    pub fn rebase(&mut self, dir: &str) {
        let root = expand_tilde(dir);
        self.client_book = root.join(CLIENT_BOOK_FILE).to_string_lossy().to_string();
        self.logs_dir = root.join("logs").to_string_lossy().to_string();
    }

    /// Initialize the data directory and configuration file.
    pub fn init_all(custom_dir: Option<String>, is_test: bool) -> io::Result<Config> {
        let mut config = Config::default();
        if let Some(dir) = &custom_dir {
            config.rebase(dir);
        }

        fs::create_dir_all(&config.logs_dir)?;

        // The config file always lives in the standard location; a custom
        // data dir only moves the book and the logs.
        if !is_test {
            fs::create_dir_all(Self::config_dir())?;
            let yaml = serde_yaml::to_string(&config).expect("❌ Failed to render configuration");
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        Ok(config)
    }
}
