//! Store configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Main store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    // Site
    pub title: String,
    pub author: String,

    // Directory
    pub posts_dir: String,

    // Writing
    pub new_post_name: String,
    pub default_layout: String,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            title: "A Blog".to_string(),
            author: String::new(),

            posts_dir: "_posts".to_string(),

            new_post_name: ":year-:month-:day-:title.md".to_string(),
            default_layout: "post".to_string(),

            extra: HashMap::new(),
        }
    }
}

impl StoreConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: StoreConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}
