//! Runtime configuration: where the database, catalog and tips live.

use std::path::PathBuf;

pub const DEFAULT_DB_PATH: &str = "db.sqlite3";
pub const DEFAULT_CATALOG_PATH: &str = "data/questions.json";
pub const DEFAULT_TIPS_PATH: &str = "data/tips.json";
/// Number of log lines included in a progress report.
pub const DEFAULT_REPORT_LIMIT: usize = 50;

#[derive(Clone, Debug)]
pub struct Config {
    pub db_path: PathBuf,
    pub catalog_path: PathBuf,
    pub tips_path: PathBuf,
    pub report_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DEFAULT_DB_PATH),
            catalog_path: PathBuf::from(DEFAULT_CATALOG_PATH),
            tips_path: PathBuf::from(DEFAULT_TIPS_PATH),
            report_limit: DEFAULT_REPORT_LIMIT,
        }
    }
}

impl Config {
    pub fn with_db_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.db_path = path.into();
        self
    }

    pub fn with_catalog_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.catalog_path = path.into();
        self
    }

    pub fn with_tips_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.tips_path = path.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.db_path, PathBuf::from("db.sqlite3"));
        assert_eq!(config.catalog_path, PathBuf::from("data/questions.json"));
        assert_eq!(config.report_limit, 50);
    }

    #[test]
    fn test_builder_overrides() {
        let config = Config::default()
            .with_db_path("/tmp/coach.db")
            .with_tips_path("tips.json");
        assert_eq!(config.db_path, PathBuf::from("/tmp/coach.db"));
        assert_eq!(config.tips_path, PathBuf::from("tips.json"));
        assert_eq!(config.catalog_path, PathBuf::from(DEFAULT_CATALOG_PATH));
    }
}
