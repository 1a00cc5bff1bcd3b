//! List store content

use anyhow::Result;
use chrono::NaiveDate;
use serde::Serialize;

use super::OutputFormat;
use crate::content::Post;
use crate::Postbox;

/// One row of the listing
#[derive(Serialize)]
struct PostSummary<'a> {
    id: &'a str,
    title: &'a str,
    layout: &'a str,
    slug: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    date: Option<NaiveDate>,
}

impl<'a> From<&'a Post> for PostSummary<'a> {
    fn from(post: &'a Post) -> Self {
        Self {
            id: &post.id,
            title: &post.title,
            layout: &post.layout,
            slug: &post.slug,
            date: post.date,
        }
    }
}

/// List documents in the store, newest first
pub fn run(postbox: &Postbox, format: OutputFormat) -> Result<()> {
    let posts = postbox.store().load_posts()?;

    match format {
        OutputFormat::Json => {
            let summaries: Vec<PostSummary> = posts.iter().map(PostSummary::from).collect();
            println!("{}", serde_json::to_string_pretty(&summaries)?);
        }
        OutputFormat::Plain => {
            println!("Posts ({}):", posts.len());
            for post in &posts {
                match post.date {
                    Some(date) => {
                        println!("  {} - {} [{}]", date.format("%Y-%m-%d"), post.title, post.id)
                    }
                    None => println!("  {:10} - {} [{}]", "", post.title, post.id),
                }
            }
        }
    }

    Ok(())
}
