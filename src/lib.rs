//! postbox: a content store and validation tool for front-matter blog documents
//!
//! This crate exposes a directory of `---`-delimited blog documents as a
//! read-only document store, and checks each document against the format
//! contract an external static-site generator relies on: a delimited header
//! carrying non-empty `layout` and `title` fields, followed by free-form
//! prose with verbatim fenced code regions.

pub mod commands;
pub mod config;
pub mod content;

use anyhow::Result;
use std::path::{Path, PathBuf};

use content::{DocumentStore, StoreReport};

/// The main postbox application
#[derive(Clone)]
pub struct Postbox {
    /// Store configuration
    pub config: config::StoreConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Posts directory
    pub posts_dir: PathBuf,
}

impl Postbox {
    /// Create a new Postbox instance from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::StoreConfig::load(&config_path)?
        } else {
            config::StoreConfig::default()
        };

        let posts_dir = base_dir.join(&config.posts_dir);

        Ok(Self {
            config,
            base_dir,
            posts_dir,
        })
    }

    /// The document store over this instance's posts directory
    pub fn store(&self) -> DocumentStore {
        DocumentStore::new(&self.posts_dir)
    }

    /// Validate every document in the store
    pub fn check(&self) -> Result<StoreReport> {
        Ok(self.store().check_all()?)
    }

    /// Create a new post
    pub fn new_post(&self, title: &str, layout: Option<&str>) -> Result<()> {
        commands::new::run(self, title, layout)
    }
}
