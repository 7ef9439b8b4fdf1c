use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub database: String,

    /// Department applied when `add` gets no --dept.
    #[serde(default)]
    pub default_department: String,

    /// Remark rule profile: "standard" (canonical) or "strict"
    /// (adds the invalid login window).
    #[serde(default = "default_remark_profile")]
    pub remark_profile: String,

    #[serde(default = "default_work_start")]
    pub work_start: String,

    #[serde(default = "default_afternoon_start")]
    pub afternoon_start: String,

    #[serde(default = "default_work_end")]
    pub work_end: String,

    /// "HH:MM-HH:MM", only honored by the strict profile.
    #[serde(default = "default_invalid_window")]
    pub invalid_window: String,

    /// "compact" or "verbose" offset rendering in tables.
    #[serde(default = "default_duration_style")]
    pub duration_style: String,

    #[serde(default = "default_separator_char")]
    pub separator_char: String,
}

fn default_remark_profile() -> String {
    "standard".to_string()
}
fn default_work_start() -> String {
    "08:00".to_string()
}
fn default_afternoon_start() -> String {
    "13:00".to_string()
}
fn default_work_end() -> String {
    "17:00".to_string()
}
fn default_invalid_window() -> String {
    "14:00-23:00".to_string()
}
fn default_duration_style() -> String {
    "compact".to_string()
}
fn default_separator_char() -> String {
    "-".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            default_department: String::new(),
            remark_profile: default_remark_profile(),
            work_start: default_work_start(),
            afternoon_start: default_afternoon_start(),
            work_end: default_work_end(),
            invalid_window: default_invalid_window(),
            duration_style: default_duration_style(),
            separator_char: default_separator_char(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("acculog")
        } else {
            let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
            home.join(".acculog")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("acculog.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("acculog.sqlite")
    }

    /// Load configuration from file, or return defaults if not found.
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
            serde_yaml::from_str(&content).map_err(|_| AppError::ConfigLoad)
        } else {
            Ok(Config::default())
        }
    }

    /// Initialize configuration and database files
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> AppResult<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // DB name: user provided or default
        let db_path = if let Some(name) = custom_db {
            let p = std::path::Path::new(&name);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            }
        } else {
            Self::database_file()
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        // Write config file
        if !is_test {
            let yaml = serde_yaml::to_string(&config).map_err(|_| AppError::ConfigSave)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        // Create empty DB file if not exists
        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        println!("✅ Database:    {:?}", db_path);

        Ok(())
    }
}
