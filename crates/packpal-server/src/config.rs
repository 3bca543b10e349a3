use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use packpal_extract::DEFAULT_MIN_LIST_LINES;

use crate::error::{ServerError, ServerResult};

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address the HTTP listener binds to.
    pub bind_addr: SocketAddr,
    /// Public base URL used when building share links.
    pub base_url: String,
    /// Snapshot file for the JSON-backed store; `None` keeps trips in
    /// memory only.
    pub data_file: Option<PathBuf>,
    /// Minimum list lines before chat text is treated as a packing list.
    pub min_list_lines: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:8080".parse().expect("valid address literal"),
            base_url: "http://127.0.0.1:8080".into(),
            data_file: None,
            min_list_lines: DEFAULT_MIN_LIST_LINES,
        }
    }
}

impl ServerConfig {
    /// Load a config from a TOML file. Missing fields take their defaults.
    pub fn from_toml_file(path: &Path) -> ServerResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        toml::from_str(&raw).map_err(|e| ServerError::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config() {
        let c = ServerConfig::default();
        assert_eq!(c.bind_addr, "127.0.0.1:8080".parse::<SocketAddr>().unwrap());
        assert_eq!(c.min_list_lines, 3);
        assert!(c.data_file.is_none());
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "bind_addr = \"0.0.0.0:9000\"").unwrap();
        writeln!(file, "data_file = \"/var/lib/packpal/trips.json\"").unwrap();

        let c = ServerConfig::from_toml_file(file.path()).unwrap();
        assert_eq!(c.bind_addr, "0.0.0.0:9000".parse::<SocketAddr>().unwrap());
        assert_eq!(c.data_file, Some(PathBuf::from("/var/lib/packpal/trips.json")));
        assert_eq!(c.min_list_lines, 3); // defaulted
    }

    #[test]
    fn invalid_toml_is_a_config_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "bind_addr = 42").unwrap();

        let err = ServerConfig::from_toml_file(file.path()).unwrap_err();
        assert!(matches!(err, ServerError::Config(_)));
    }
}
