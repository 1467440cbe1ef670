//! Configuration loading for bauview
//!
//! Resolution priority per key:
//! 1. Environment variable (`BAUVIEW_*`)
//! 2. TOML config file (`~/.config/bauview/config.toml`)
//! 3. Compiled default (the public results repository)
//!
//! There is no command-line surface; the dashboard starts zero-config
//! against the public repository.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;

/// Default results repository (`owner/name`)
pub const DEFAULT_REPO: &str = "slistl1393/Template-Matching";
/// Default branch of the results repository
pub const DEFAULT_BRANCH: &str = "main";
/// Default folder holding the per-template match documents
pub const DEFAULT_FOLDER: &str = "json_output";

const DEFAULT_SIDE_TABLE_URL: &str =
    "https://raw.githubusercontent.com/slistl1393/Template-Matching/main/bauteil_info.json";
const DEFAULT_PLAN_IMAGE_URL: &str =
    "https://raw.githubusercontent.com/slistl1393/Template-Matching/main/plan_image.png";
const DEFAULT_PORT: u16 = 5741;

/// Service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Results repository as `owner/name`
    #[serde(default = "default_repo")]
    pub repo: String,

    /// Branch of the results repository
    #[serde(default = "default_branch")]
    pub branch: String,

    /// Folder inside the repository holding the match documents
    #[serde(default = "default_folder")]
    pub folder: String,

    /// Optional bearer credential for private repositories. Absence is
    /// not an error; public repositories need none.
    #[serde(default)]
    pub token: Option<String>,

    /// Raw-file URL of the component info side table
    #[serde(default = "default_side_table_url")]
    pub side_table_url: String,

    /// Raw-file URL of the reference plan image
    #[serde(default = "default_plan_image_url")]
    pub plan_image_url: String,

    /// HTTP listen port
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_repo() -> String {
    DEFAULT_REPO.to_string()
}

fn default_branch() -> String {
    DEFAULT_BRANCH.to_string()
}

fn default_folder() -> String {
    DEFAULT_FOLDER.to_string()
}

fn default_side_table_url() -> String {
    DEFAULT_SIDE_TABLE_URL.to_string()
}

fn default_plan_image_url() -> String {
    DEFAULT_PLAN_IMAGE_URL.to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

impl Default for Config {
    fn default() -> Self {
        Self {
            repo: default_repo(),
            branch: default_branch(),
            folder: default_folder(),
            token: None,
            side_table_url: default_side_table_url(),
            plan_image_url: default_plan_image_url(),
            port: default_port(),
        }
    }
}

impl Config {
    /// Load configuration from the platform config file, then apply
    /// environment overrides.
    pub fn load() -> Result<Self> {
        Self::load_from(default_config_path().as_deref())
    }

    /// Load configuration from an explicit TOML path (or defaults when the
    /// path is absent), then apply environment overrides.
    pub fn load_from(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) if path.exists() => {
                let content = std::fs::read_to_string(path)
                    .map_err(|e| Error::Config(format!("Read {} failed: {}", path.display(), e)))?;
                toml::from_str(&content)
                    .map_err(|e| Error::Config(format!("Parse {} failed: {}", path.display(), e)))?
            }
            _ => Config::default(),
        };

        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Environment variables win over file and defaults
    fn apply_env_overrides(&mut self) {
        if let Ok(repo) = std::env::var("BAUVIEW_REPO") {
            self.repo = repo;
        }
        if let Ok(branch) = std::env::var("BAUVIEW_BRANCH") {
            self.branch = branch;
        }
        if let Ok(folder) = std::env::var("BAUVIEW_FOLDER") {
            self.folder = folder;
        }
        if let Ok(token) = std::env::var("BAUVIEW_TOKEN") {
            if !token.trim().is_empty() {
                self.token = Some(token);
            }
        }
        if let Ok(url) = std::env::var("BAUVIEW_SIDE_TABLE_URL") {
            self.side_table_url = url;
        }
        if let Ok(url) = std::env::var("BAUVIEW_PLAN_IMAGE_URL") {
            self.plan_image_url = url;
        }
        if let Ok(port) = std::env::var("BAUVIEW_PORT") {
            match port.parse() {
                Ok(port) => self.port = port,
                Err(_) => warn!(value = %port, "Ignoring invalid BAUVIEW_PORT"),
            }
        }
    }

    fn validate(&self) -> Result<()> {
        if self.repo.split('/').filter(|part| !part.is_empty()).count() != 2 {
            return Err(Error::Config(format!(
                "repo must be owner/name, got {:?}",
                self.repo
            )));
        }
        if self.folder.is_empty() {
            return Err(Error::Config("folder must not be empty".to_string()));
        }
        Ok(())
    }
}

/// Platform config file path: `<config dir>/bauview/config.toml`
fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("bauview").join("config.toml"))
}
