use std::path::PathBuf;

/// Store configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | WORK_DIR | ./data | Directory holding the database file |
/// | DB_FILE | hrms.redb | Database file name inside `WORK_DIR` |
/// | LOG_LEVEL | info | tracing max level |
/// | LOG_DIR | (unset) | Enables daily rolling file logs |
/// | SEED_SAMPLE_DATA | true | Seed sample records before loading |
/// | NOTIFICATION_CAPACITY | 64 | Outcome notification channel capacity |
///
/// # Example
///
/// ```ignore
/// WORK_DIR=/var/lib/hrms LOG_LEVEL=debug cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Working directory for the database file
    pub work_dir: String,
    /// Database file name, relative to `work_dir`
    pub db_file: String,
    pub log_level: String,
    /// Daily rolling log files go here when set and the directory exists
    pub log_dir: Option<String>,
    /// Seed the sample records before persisted collections are loaded
    pub seed_sample_data: bool,
    pub notification_capacity: usize,
}

impl Config {
    /// Load configuration from the environment
    ///
    /// Unset or unparsable variables fall back to their defaults
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "./data".into()),
            db_file: std::env::var("DB_FILE").unwrap_or_else(|_| "hrms.redb".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.is_empty()),
            seed_sample_data: std::env::var("SEED_SAMPLE_DATA")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
            notification_capacity: std::env::var("NOTIFICATION_CAPACITY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(64),
        }
    }

    /// Environment config with `work_dir` replaced
    ///
    /// Mostly used by tests
    pub fn with_work_dir(work_dir: impl Into<String>) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config
    }

    /// Full path of the database file
    pub fn db_path(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join(&self.db_file)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_db_path_joins_work_dir() {
        let mut config = Config::with_work_dir("/tmp/hrms-test");
        config.db_file = "store.redb".into();
        assert_eq!(config.db_path(), PathBuf::from("/tmp/hrms-test/store.redb"));
    }
}
