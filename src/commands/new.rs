//! Create a new post

use anyhow::Result;
use indexmap::IndexMap;
use std::fs;

use crate::content::FrontMatter;
use crate::Postbox;

/// Create a new post file with a minimal valid header
pub fn create_post(
    postbox: &Postbox,
    title: &str,
    layout: Option<&str>,
    path: Option<&str>,
) -> Result<()> {
    let layout = layout.unwrap_or(&postbox.config.default_layout);
    let now = chrono::Local::now();

    fs::create_dir_all(&postbox.posts_dir)?;

    // Generate filename
    let filename = if let Some(p) = path {
        format!("{}.md", p.trim_end_matches(".md"))
    } else {
        let post_name = &postbox.config.new_post_name;
        let slug = slug::slugify(title);

        post_name
            .replace(":title", &slug)
            .replace(":year", &now.format("%Y").to_string())
            .replace(":month", &now.format("%m").to_string())
            .replace(":day", &now.format("%d").to_string())
            .replace(":i_month", &now.format("%-m").to_string())
            .replace(":i_day", &now.format("%-d").to_string())
    };

    let file_path = postbox.posts_dir.join(&filename);

    // Check if file already exists
    if file_path.exists() {
        anyhow::bail!("File already exists: {:?}", file_path);
    }

    // Serializing the header keeps titles with YAML-special characters valid
    let fm = FrontMatter {
        layout: Some(layout.to_string()),
        title: Some(title.to_string()),
        extra: IndexMap::new(),
    };
    let header = serde_yaml::to_string(&fm)?;
    let content = format!("---\n{}---\n\n", header);

    fs::write(&file_path, content)?;

    println!("Created: {:?}", file_path);

    Ok(())
}

/// Run the new command
pub fn run(postbox: &Postbox, title: &str, layout: Option<&str>) -> Result<()> {
    create_post(postbox, title, layout, None)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn postbox_in(dir: &std::path::Path) -> Postbox {
        Postbox::new(dir).unwrap()
    }

    #[test]
    fn test_created_post_is_well_formed() {
        let dir = tempfile::tempdir().unwrap();
        let postbox = postbox_in(dir.path());

        create_post(&postbox, "Utilities: a follow-up", None, Some("2014-02-21-followup"))
            .unwrap();

        let store = postbox.store();
        let ids = store.list().unwrap();
        assert_eq!(ids, vec!["2014-02-21-followup.md"]);

        let post = store.read(&ids[0]).unwrap();
        assert_eq!(post.title, "Utilities: a follow-up");
        assert_eq!(post.layout, "post");
    }

    #[test]
    fn test_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let postbox = postbox_in(dir.path());

        create_post(&postbox, "Once", None, Some("2014-01-01-once")).unwrap();
        let err = create_post(&postbox, "Twice", None, Some("2014-01-01-once")).unwrap_err();
        assert!(err.to_string().contains("already exists"));
    }

    #[test]
    fn test_dated_filename_from_pattern() {
        let dir = tempfile::tempdir().unwrap();
        let postbox = postbox_in(dir.path());

        create_post(&postbox, "Hello World", None, None).unwrap();

        let ids = postbox.store().list().unwrap();
        assert_eq!(ids.len(), 1);
        let today = chrono::Local::now().format("%Y-%m-%d").to_string();
        assert_eq!(ids[0], format!("{}-hello-world.md", today));
    }
}
