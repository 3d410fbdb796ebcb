use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

// PatternDef lives in selflink_core so functions can be built from it directly
use selflink_core::PatternDef;

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub functions: FunctionsConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Default level when `RUST_LOG` is not set.
    #[serde(default = "LoggingConfig::default_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Self::default_level(),
        }
    }
}

impl LoggingConfig {
    fn default_level() -> String {
        "warn".to_string()
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct FunctionsConfig {
    /// Built-in functions that should not be registered.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub disabled: Vec<String>,
    /// Extra pattern functions.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub custom: Vec<PatternDef>,
}

impl Config {
    pub fn config_dir() -> anyhow::Result<PathBuf> {
        Ok(dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?
            .join("selflink"))
    }

    pub fn config_path() -> anyhow::Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    pub fn load() -> anyhow::Result<Self> {
        Self::load_required(&Self::config_path()?)
    }

    /// Load from the default location, falling back to defaults when no
    /// config file exists. A file that exists but fails to parse is an error.
    pub fn load_or_default() -> anyhow::Result<Self> {
        let config_path = Self::config_path()?;
        if config_path.exists() {
            Self::load()
        } else {
            debug!("No config at {}, using defaults", config_path.display());
            Ok(Self::default())
        }
    }

    /// Like `load_from`, but a missing file points the user at `selflink init`.
    pub fn load_required(config_path: &Path) -> anyhow::Result<Self> {
        if !config_path.exists() {
            anyhow::bail!(
                "Config file not found at: {}. Please run 'selflink init' to create config.",
                config_path.display()
            );
        }

        Self::load_from(config_path)
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        debug!(
            "Loaded config from {} ({} custom functions)",
            path.display(),
            config.functions.custom.len()
        );
        Ok(config)
    }

    pub fn ensure_config_dir() -> anyhow::Result<PathBuf> {
        let config_dir = Self::config_dir()?;
        std::fs::create_dir_all(&config_dir)?;
        Ok(config_dir)
    }

    pub fn create_config() -> anyhow::Result<()> {
        let config_dir = Self::ensure_config_dir()?;
        let config_path = config_dir.join("config.json");
        Self::write_template(&config_path)?;

        println!("✅ Created config file at: {}", config_path.display());
        println!();
        println!("🔧 Configuration options:");
        println!("   - logging.level: default log level (error, warn, info, debug, trace)");
        println!("   - functions.disabled: built-in functions to leave unregistered");
        println!("   - functions.custom: extra pattern functions (name, pattern, template, description, label)");
        println!();
        Ok(())
    }

    /// Write the starter config to `config_path`, refusing to overwrite.
    pub fn write_template(config_path: &Path) -> anyhow::Result<()> {
        if config_path.exists() {
            anyhow::bail!(
                "Config file already exists at: {}. Please edit it directly.",
                config_path.display()
            );
        }

        let config_template = r#"{
  "logging": {
    "level": "warn"
  },
  "functions": {
    "disabled": [],
    "custom": [
      {
        "name": "topic_from_id",
        "summary": "Returns the Pub/Sub topic name within a topic id or self link.",
        "pattern": "topics/(?P<Topic>[^/]+)$",
        "template": "$Topic",
        "description": "topics/{topic}$",
        "label": "topic name"
      }
    ]
  }
}
"#;

        std::fs::write(config_path, config_template)?;
        Ok(())
    }
}
