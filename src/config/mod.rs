use crate::errors::{AppError, AppResult};
use crate::utils::date::parse_weekday;
use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default = "default_subject_color")]
    pub default_subject_color: String,
    #[serde(default = "default_habit_goal")]
    pub default_habit_goal: i64,
    #[serde(default = "default_week_start")]
    pub week_start: String,
    #[serde(default = "default_top_subjects")]
    pub top_subjects: usize,
}

fn default_subject_color() -> String {
    "#c77541".to_string()
}
fn default_habit_goal() -> i64 {
    30
}
fn default_week_start() -> String {
    "sunday".to_string()
}
fn default_top_subjects() -> usize {
    5
}

impl Default for Config {
    fn default() -> Self {
        Self::with_database(Self::database_file())
    }
}

impl Config {
    fn with_database(db_path: PathBuf) -> Self {
        Self {
            database: db_path.to_string_lossy().to_string(),
            default_subject_color: default_subject_color(),
            default_habit_goal: default_habit_goal(),
            week_start: default_week_start(),
            top_subjects: default_top_subjects(),
        }
    }

    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("studylog")
        } else {
            let home = dirs::home_dir()
                .or_else(|| env::var("HOME").ok().map(PathBuf::from))
                .unwrap_or_else(|| PathBuf::from("."));
            home.join(".studylog")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("studylog.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("studylog.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| AppError::ConfigLoad(format!("{}: {e}", path.display())))?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::ConfigLoad(format!("{}: {e}", path.display())))
    }

    /// First day of the week used by weekly views.
    pub fn week_start_day(&self) -> AppResult<Weekday> {
        parse_weekday(&self.week_start)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Initialize configuration and database files.
    /// Returns the database path that was configured.
    pub fn init_all(custom_name: Option<String>, is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();

        // DB name: user provided or default
        let db_path = if let Some(name) = custom_name {
            let p = Path::new(&name);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            }
        } else {
            dir.join("studylog.sqlite")
        };

        if let Some(parent) = db_path.parent() {
            fs::create_dir_all(parent)?;
        }

        // Write config file
        if !is_test {
            fs::create_dir_all(&dir)?;
            let yaml = Self::with_database(db_path.clone()).to_yaml()?;
            let mut file = fs::File::create(Self::config_file()).map_err(|_| AppError::ConfigSave)?;
            file.write_all(yaml.as_bytes())
                .map_err(|_| AppError::ConfigSave)?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        // Create empty DB file if not exists
        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        println!("✅ Database:    {:?}", db_path);

        Ok(db_path)
    }
}
