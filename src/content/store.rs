//! Document store - lists, reads, and validates posts

use std::fs;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

use super::error::{StoreError, StoreResult};
use super::post::{id_stem, split_dated_stem};
use super::{Body, FrontMatter, Post};

/// Read-only access to a directory of front-matter documents.
///
/// The store holds no state beyond the directory path: every operation goes
/// back to the filesystem, and none of them writes to it.
pub struct DocumentStore {
    posts_dir: PathBuf,
}

impl DocumentStore {
    pub fn new<P: Into<PathBuf>>(posts_dir: P) -> Self {
        Self {
            posts_dir: posts_dir.into(),
        }
    }

    pub fn posts_dir(&self) -> &Path {
        &self.posts_dir
    }

    /// All document identifiers in the store, sorted by identifier.
    ///
    /// A missing or empty posts directory is an empty store, not an error.
    /// Every identifier returned here resolves through [`read`](Self::read).
    pub fn list(&self) -> StoreResult<Vec<String>> {
        if !self.posts_dir.exists() {
            return Ok(Vec::new());
        }

        let mut ids = Vec::new();

        for entry in WalkDir::new(&self.posts_dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if path.is_file() && is_markdown_file(path) {
                let id = path
                    .strip_prefix(&self.posts_dir)
                    .unwrap_or(path)
                    .components()
                    .filter_map(|c| c.as_os_str().to_str())
                    .collect::<Vec<_>>()
                    .join("/");
                ids.push(id);
            }
        }

        ids.sort();
        Ok(ids)
    }

    /// Read one document: front matter parsed and checked, body segmented.
    ///
    /// Fails NotFound iff the identifier does not resolve to a file;
    /// MalformedDocument iff the header is missing, unterminated, not
    /// parseable, or missing a required field. The two never overlap.
    pub fn read(&self, id: &str) -> StoreResult<Post> {
        let path = self.resolve(id)?;
        let text = read_source(&path, id)?;
        self.parse_document(id, &path, &text)
    }

    /// Structural well-formedness check for one document.
    ///
    /// Header present, properly delimited, required fields present and
    /// non-empty. Prose and fence payloads are not inspected.
    pub fn validate(&self, id: &str) -> StoreResult<()> {
        let path = self.resolve(id)?;
        let text = read_source(&path, id)?;

        let (fm, _body) = FrontMatter::parse(&text).map_err(|r| StoreError::malformed(id, r))?;
        fm.validate().map_err(|r| StoreError::malformed(id, r))?;
        Ok(())
    }

    /// Validate every document in the store.
    ///
    /// One malformed document never stops the sweep; every failure is
    /// collected with its identifier.
    pub fn check_all(&self) -> StoreResult<StoreReport> {
        let ids = self.list()?;
        let mut report = StoreReport {
            checked: ids.len(),
            failures: Vec::new(),
        };

        for id in ids {
            if let Err(e) = self.validate(&id) {
                report.failures.push(e);
            }
        }

        Ok(report)
    }

    /// Read every well-formed document, newest first.
    ///
    /// Malformed documents are logged and skipped; this is the lenient,
    /// renderer-facing view. Use [`check_all`](Self::check_all) to surface
    /// them instead.
    pub fn load_posts(&self) -> StoreResult<Vec<Post>> {
        let mut posts = Vec::new();

        for id in self.list()? {
            match self.read(&id) {
                Ok(post) => posts.push(post),
                Err(e) => {
                    tracing::warn!("Skipping {}: {}", id, e);
                }
            }
        }

        // Sort by date descending (newest first), undated posts last
        posts.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| b.id.cmp(&a.id)));

        Ok(posts)
    }

    /// Resolve an identifier to a path inside the posts directory.
    /// Identifiers never climb out of the store root.
    fn resolve(&self, id: &str) -> StoreResult<PathBuf> {
        let relative = Path::new(id);
        let escapes = relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_)));
        if id.is_empty() || escapes {
            return Err(StoreError::not_found(id));
        }
        Ok(self.posts_dir.join(relative))
    }

    fn parse_document(&self, id: &str, path: &Path, text: &str) -> StoreResult<Post> {
        let (fm, body_text) = FrontMatter::parse(text).map_err(|r| StoreError::malformed(id, r))?;
        fm.validate().map_err(|r| StoreError::malformed(id, r))?;

        // validate() guarantees both fields
        let layout = fm.layout.unwrap_or_default();
        let title = fm.title.unwrap_or_default();

        let (date, slug) = split_dated_stem(id_stem(id));

        Ok(Post {
            id: id.to_string(),
            layout,
            title,
            slug,
            date,
            full_source: path.to_path_buf(),
            raw: body_text.to_string(),
            body: Body::parse(body_text),
            extra: fm.extra,
        })
    }
}

/// Result of a whole-store validation sweep
#[derive(Debug)]
pub struct StoreReport {
    /// Number of documents visited
    pub checked: usize,
    /// Every failure found, with its identifier
    pub failures: Vec<StoreError>,
}

impl StoreReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

fn read_source(path: &Path, id: &str) -> StoreResult<String> {
    match fs::read_to_string(path) {
        Ok(text) => Ok(text),
        Err(e) if e.kind() == ErrorKind::NotFound => Err(StoreError::not_found(id)),
        Err(e) => Err(StoreError::io(path, e)),
    }
}

/// Check if a file is a markdown file
fn is_markdown_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == "md" || e == "markdown")
        .unwrap_or(false)
}
