//! Post model and identifier conventions

use chrono::NaiveDate;
use indexmap::IndexMap;
use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use std::path::PathBuf;

use super::Body;

lazy_static! {
    /// Conventional post filename: `YYYY-MM-DD-slug`
    static ref DATED_NAME: Regex = Regex::new(r"^(\d{4})-(\d{2})-(\d{2})-(.+)$").unwrap();
}

/// A blog post as exposed to the external renderer
#[derive(Debug, Clone, Serialize)]
pub struct Post {
    /// Storage identifier (path relative to the posts directory)
    pub id: String,

    /// Layout template to use
    pub layout: String,

    /// Post title
    pub title: String,

    /// Slug (URL-friendly name, from the filename)
    pub slug: String,

    /// Publication date embedded in the filename, when the name follows
    /// the `YYYY-MM-DD-slug` convention
    pub date: Option<NaiveDate>,

    /// Full source file path
    #[serde(skip)]
    pub full_source: PathBuf,

    /// Raw body text, front-matter stripped
    pub raw: String,

    /// Body split into prose and fenced code blocks
    pub body: Body,

    /// Custom front-matter fields
    pub extra: IndexMap<String, serde_yaml::Value>,
}

/// Split a filename stem into its conventional date prefix and slug.
///
/// The convention is interpreted, never required: a stem that does not match
/// (or carries an impossible date) is treated as undated, the whole stem
/// becoming the slug.
pub fn split_dated_stem(stem: &str) -> (Option<NaiveDate>, String) {
    if let Some(caps) = DATED_NAME.captures(stem) {
        let year: i32 = caps[1].parse().unwrap_or(0);
        let month: u32 = caps[2].parse().unwrap_or(0);
        let day: u32 = caps[3].parse().unwrap_or(0);
        if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
            return (Some(date), slug::slugify(&caps[4]));
        }
    }
    (None, slug::slugify(stem))
}

/// Filename stem of a storage identifier
pub fn id_stem(id: &str) -> &str {
    let name = id.rsplit('/').next().unwrap_or(id);
    name.strip_suffix(".markdown")
        .or_else(|| name.strip_suffix(".md"))
        .unwrap_or(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dated_stem() {
        let (date, slug) = split_dated_stem("2014-02-20-utilities");
        assert_eq!(date, Some(NaiveDate::from_ymd_opt(2014, 2, 20).unwrap()));
        assert_eq!(slug, "utilities");
    }

    #[test]
    fn test_undated_stem() {
        let (date, slug) = split_dated_stem("about-this-blog");
        assert_eq!(date, None);
        assert_eq!(slug, "about-this-blog");
    }

    #[test]
    fn test_impossible_date_is_undated() {
        let (date, slug) = split_dated_stem("2014-13-99-nope");
        assert_eq!(date, None);
        assert_eq!(slug, "2014-13-99-nope");
    }

    #[test]
    fn test_id_stem_strips_extension_and_dirs() {
        assert_eq!(id_stem("2014-02-20-utilities.md"), "2014-02-20-utilities");
        assert_eq!(id_stem("drafts/2014-02-20-wip.markdown"), "2014-02-20-wip");
        assert_eq!(id_stem("plain"), "plain");
    }

    #[test]
    fn test_slug_is_normalized() {
        let (_, slug) = split_dated_stem("2014-02-20-Some_Mixed Case");
        assert_eq!(slug, "some-mixed-case");
    }
}
