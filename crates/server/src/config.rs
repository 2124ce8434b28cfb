use std::{env, path::PathBuf};

/// Directory holding `courses.json` and `faculty.json`
pub const DEFAULT_DATA_DIR: &str = "./data";

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

/// Runtime settings, read from the environment (and `.env`, if present)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub data_dir: PathBuf,
    pub bind_addr: String,
}

impl Config {
    /// Reads `DATA_DIR` and `BIND_ADDR`, falling back to the defaults
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            data_dir: lookup("DATA_DIR")
                .unwrap_or_else(|| DEFAULT_DATA_DIR.to_string())
                .into(),
            bind_addr: lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(|_| None);

        assert_eq!(config.data_dir, PathBuf::from("./data"));
        assert_eq!(config.bind_addr, "0.0.0.0:3000");
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(|key| match key {
            "DATA_DIR" => Some("/srv/catalog".to_string()),
            "BIND_ADDR" => Some("127.0.0.1:8080".to_string()),
            _ => None,
        });

        assert_eq!(config.data_dir, PathBuf::from("/srv/catalog"));
        assert_eq!(config.bind_addr, "127.0.0.1:8080");
    }
}
