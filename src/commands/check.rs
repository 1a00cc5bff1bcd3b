//! Validate every document in the store

use anyhow::Result;
use notify::Watcher;
use std::sync::mpsc::channel;
use std::time::Duration;

use crate::content::StoreReport;
use crate::Postbox;

/// Run one validation sweep and fail if anything is malformed.
///
/// The process exit status is the machine-readable answer; the per-document
/// lines are the human-readable one.
pub fn run(postbox: &Postbox) -> Result<()> {
    let report = sweep(postbox)?;
    if !report.is_clean() {
        anyhow::bail!(
            "{} of {} documents malformed",
            report.failures.len(),
            report.checked
        );
    }
    Ok(())
}

/// One sweep over the store, reporting every failure with its identifier
fn sweep(postbox: &Postbox) -> Result<StoreReport> {
    let report = postbox.check()?;

    for failure in &report.failures {
        println!("{}", failure);
    }
    println!(
        "Checked {} documents, {} malformed",
        report.checked,
        report.failures.len()
    );

    Ok(report)
}

/// Watch the store and re-run the sweep on changes
pub fn watch(postbox: &Postbox) -> Result<()> {
    let (tx, rx) = channel();

    let mut watcher = notify::recommended_watcher(move |res| {
        if let Ok(event) = res {
            let _ = tx.send(event);
        }
    })?;

    if postbox.posts_dir.exists() {
        watcher.watch(&postbox.posts_dir, notify::RecursiveMode::Recursive)?;
    }

    let config_path = postbox.base_dir.join("_config.yml");
    if config_path.exists() {
        watcher.watch(&config_path, notify::RecursiveMode::NonRecursive)?;
    }

    sweep(postbox)?;
    tracing::info!("Watching for changes. Press Ctrl+C to stop.");

    // Debounce events
    let mut last_run = std::time::Instant::now();

    loop {
        match rx.recv_timeout(Duration::from_millis(100)) {
            Ok(_event) => {
                if last_run.elapsed() > Duration::from_millis(500) {
                    tracing::info!("File changed, re-checking...");
                    if let Err(e) = sweep(postbox) {
                        tracing::error!("Check failed: {}", e);
                    }
                    last_run = std::time::Instant::now();
                }
            }
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {
                // Continue waiting
            }
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => {
                break;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn store_dir(docs: &[(&str, &str)]) -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        let posts = dir.path().join("_posts");
        fs::create_dir_all(&posts).unwrap();
        for (name, content) in docs {
            fs::write(posts.join(name), content).unwrap();
        }
        dir
    }

    #[test]
    fn test_run_fails_on_malformed_store() {
        let dir = store_dir(&[
            ("2014-01-01-good.md", "---\nlayout: post\ntitle: Good\n---\nBody.\n"),
            ("2014-01-02-bad.md", "no header\n"),
        ]);

        let postbox = Postbox::new(dir.path()).unwrap();
        let err = run(&postbox).unwrap_err();
        assert!(err.to_string().contains("1 of 2 documents malformed"));
    }

    #[test]
    fn test_run_succeeds_on_clean_store() {
        let dir = store_dir(&[(
            "2014-01-01-good.md",
            "---\nlayout: post\ntitle: Good\n---\nBody.\n",
        )]);

        let postbox = Postbox::new(dir.path()).unwrap();
        assert!(run(&postbox).is_ok());
    }

    #[test]
    fn test_run_succeeds_on_empty_store() {
        let dir = tempfile::tempdir().unwrap();
        let postbox = Postbox::new(dir.path()).unwrap();
        assert!(run(&postbox).is_ok());
    }
}
