//! Show a single document

use anyhow::Result;

use super::OutputFormat;
use crate::Postbox;

/// Print one document's metadata and body
pub fn run(postbox: &Postbox, id: &str, format: OutputFormat) -> Result<()> {
    let post = postbox.store().read(id)?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&post)?);
        }
        OutputFormat::Plain => {
            println!("{}", post.title);
            println!("  id:     {}", post.id);
            println!("  layout: {}", post.layout);
            println!("  slug:   {}", post.slug);
            if let Some(date) = post.date {
                println!("  date:   {}", date.format("%Y-%m-%d"));
            }
            for (key, value) in &post.extra {
                println!("  {}: {}", key, serde_yaml::to_string(value)?.trim_end());
            }
            println!();
            print!("{}", post.raw);
        }
    }

    Ok(())
}
