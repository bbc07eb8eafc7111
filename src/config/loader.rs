// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::config::consts::{DEFAULT_LOG_FILE, DEFAULT_SLOW_OP_DELAY_MS};

/// Runtime configuration for the processing support context.
///
/// Every section is optional; an empty document yields the built-in
/// defaults. Typically loaded from a YAML file.
///
/// # Example
/// ```yaml
/// runtime:
///   slow_op_delay_ms: 50
/// logging:
///   log_file: processor.log
/// scratch:
///   backend: temp_dir
/// ```
#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub runtime: RuntimeOptions,
    #[serde(default)]
    pub logging: LoggingOptions,
    #[serde(default)]
    pub scratch: ScratchOptions,
}

/// Options for the shared processor support behavior.
///
/// # Fields
/// * `slow_op_delay_ms` - Artificial delay before classification; 0
///   disables the delay without changing any other logic (optional)
#[derive(Debug, Deserialize)]
pub struct RuntimeOptions {
    pub slow_op_delay_ms: Option<u64>,
}

impl Default for RuntimeOptions {
    fn default() -> Self {
        Self {
            slow_op_delay_ms: None,
        }
    }
}

impl RuntimeOptions {
    /// Get the slow-check delay, using the built-in default if not configured.
    pub fn slow_op_delay(&self) -> Duration {
        Duration::from_millis(self.slow_op_delay_ms.unwrap_or(DEFAULT_SLOW_OP_DELAY_MS))
    }
}

/// Options for the durable log sink.
///
/// # Fields
/// * `log_file` - Sink path; relative paths resolve against the working
///   directory (optional)
#[derive(Debug, Deserialize)]
pub struct LoggingOptions {
    pub log_file: Option<PathBuf>,
}

impl Default for LoggingOptions {
    fn default() -> Self {
        Self { log_file: None }
    }
}

impl LoggingOptions {
    /// Get the sink path, using the built-in default if not configured.
    pub fn log_file_path(&self) -> PathBuf {
        self.log_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE))
    }
}

/// Options for scratch storage.
///
/// # Fields
/// * `backend` - Which scratch implementation to wire (defaults to
///   `temp_dir`)
#[derive(Debug, Deserialize)]
pub struct ScratchOptions {
    #[serde(default)]
    pub backend: ScratchBackend,
}

impl Default for ScratchOptions {
    fn default() -> Self {
        Self {
            backend: ScratchBackend::default(),
        }
    }
}

/// Scratch storage implementation choice.
///
/// # Variants
/// * `Memory` - In-memory entries; deterministic, isolated, test-friendly
/// * `TempDir` - One file per entry under a private temp directory
#[derive(Debug, Deserialize, PartialEq, Clone)]
#[serde(rename_all = "snake_case")]
pub enum ScratchBackend {
    Memory,
    TempDir,
}

impl Default for ScratchBackend {
    fn default() -> Self {
        ScratchBackend::TempDir
    }
}

/// Errors raised while loading a configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Load a config from a YAML file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let content = fs::read_to_string(path)?;
    let cfg: Config = serde_yaml::from_str(&content)?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full_config() {
        let yaml = r#"
runtime:
  slow_op_delay_ms: 0
logging:
  log_file: /var/log/dataproc/processor.log
scratch:
  backend: memory
"#;

        let cfg: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(cfg.runtime.slow_op_delay(), Duration::ZERO);
        assert_eq!(
            cfg.logging.log_file_path(),
            PathBuf::from("/var/log/dataproc/processor.log")
        );
        assert_eq!(cfg.scratch.backend, ScratchBackend::Memory);
    }

    #[test]
    fn empty_config_uses_defaults() {
        let cfg: Config = serde_yaml::from_str("{}").unwrap();

        assert_eq!(cfg.runtime.slow_op_delay(), Duration::from_millis(50));
        assert_eq!(cfg.logging.log_file_path(), PathBuf::from("processor.log"));
        assert_eq!(cfg.scratch.backend, ScratchBackend::TempDir);
    }

    #[test]
    fn partial_config_keeps_other_defaults() {
        let yaml = r#"
scratch:
  backend: memory
"#;

        let cfg: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(cfg.scratch.backend, ScratchBackend::Memory);
        assert_eq!(cfg.runtime.slow_op_delay(), Duration::from_millis(50));
    }

    #[test]
    fn test_load_config_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "runtime:\n  slow_op_delay_ms: 10\n").unwrap();

        let cfg = load_config(&path).unwrap();
        assert_eq!(cfg.runtime.slow_op_delay(), Duration::from_millis(10));
    }

    #[test]
    fn test_load_config_rejects_bad_yaml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "runtime: [not, a, mapping").unwrap();

        let result = load_config(&path);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config("/nonexistent/config.yaml");
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
