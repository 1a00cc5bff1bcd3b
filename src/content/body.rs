//! Body segmentation into prose and fenced code regions

use pulldown_cmark::{CodeBlockKind, Event, Options, Parser, Tag, TagEnd};
use serde::Serialize;

/// One region of a document body, in file order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    /// Free-form prose, verbatim from the source
    Prose { text: String },

    /// A fenced code region. The payload is opaque text for display by the
    /// external renderer; it is never executed or validated here.
    Code { lang: Option<String>, text: String },
}

/// A document body split into an ordered sequence of blocks
#[derive(Debug, Clone, Default, Serialize)]
pub struct Body {
    pub blocks: Vec<Block>,
}

impl Body {
    /// Segment a raw body into prose and fenced code blocks.
    ///
    /// Fence payloads come back byte-for-byte; indented code blocks are not
    /// fences and stay inside the surrounding prose.
    pub fn parse(raw: &str) -> Self {
        let options = Options::ENABLE_TABLES
            | Options::ENABLE_FOOTNOTES
            | Options::ENABLE_STRIKETHROUGH
            | Options::ENABLE_TASKLISTS
            | Options::ENABLE_HEADING_ATTRIBUTES
            | Options::ENABLE_GFM;
        let parser = Parser::new_ext(raw, options).into_offset_iter();

        let mut blocks = Vec::new();
        let mut prose_start = 0usize;
        let mut fence_end = 0usize;
        let mut fence_lang: Option<Option<String>> = None;
        let mut fence_text = String::new();

        for (event, range) in parser {
            match event {
                Event::Start(Tag::CodeBlock(CodeBlockKind::Fenced(lang))) => {
                    // Start ranges span the whole fenced element
                    if range.start > prose_start {
                        push_prose(&mut blocks, &raw[prose_start..range.start]);
                    }
                    fence_end = range.end;
                    fence_lang = Some(if lang.is_empty() {
                        None
                    } else {
                        Some(lang.to_string())
                    });
                    fence_text.clear();
                }
                Event::End(TagEnd::CodeBlock) if fence_lang.is_some() => {
                    blocks.push(Block::Code {
                        lang: fence_lang.take().flatten(),
                        text: std::mem::take(&mut fence_text),
                    });
                    prose_start = fence_end;
                }
                Event::Text(text) if fence_lang.is_some() => {
                    fence_text.push_str(&text);
                }
                _ => {}
            }
        }

        if prose_start < raw.len() {
            push_prose(&mut blocks, &raw[prose_start..]);
        }

        Body { blocks }
    }

    /// The fenced code regions, in order
    pub fn code_blocks(&self) -> impl Iterator<Item = (Option<&str>, &str)> {
        self.blocks.iter().filter_map(|b| match b {
            Block::Code { lang, text } => Some((lang.as_deref(), text.as_str())),
            Block::Prose { .. } => None,
        })
    }
}

fn push_prose(blocks: &mut Vec<Block>, text: &str) {
    if !text.trim().is_empty() {
        blocks.push(Block::Prose {
            text: text.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_fence_verbatim() {
        let raw = "Some prose first.\n\n```javascript\nvar el = document.querySelector('.foo');\n```\n\nProse after.\n";
        let body = Body::parse(raw);

        let fences: Vec<_> = body.code_blocks().collect();
        assert_eq!(fences.len(), 1);
        assert_eq!(fences[0].0, Some("javascript"));
        assert_eq!(fences[0].1, "var el = document.querySelector('.foo');\n");

        assert!(matches!(&body.blocks[0], Block::Prose { text } if text.contains("prose first")));
        assert!(matches!(&body.blocks[2], Block::Prose { text } if text.contains("Prose after")));
    }

    #[test]
    fn test_no_fences_is_one_prose_block() {
        let raw = "Just a paragraph.\n\nAnd another one.\n";
        let body = Body::parse(raw);
        assert_eq!(body.blocks.len(), 1);
        assert_eq!(body.code_blocks().count(), 0);
    }

    #[test]
    fn test_untagged_fence_has_no_lang() {
        let raw = "```\nplain text payload\n```\n";
        let body = Body::parse(raw);
        let fences: Vec<_> = body.code_blocks().collect();
        assert_eq!(fences, vec![(None, "plain text payload\n")]);
    }

    #[test]
    fn test_multiple_fences_keep_order() {
        let raw = "Intro.\n\n```js\nfirst();\n```\n\nBetween.\n\n```html\n<div></div>\n```\n";
        let body = Body::parse(raw);
        let fences: Vec<_> = body.code_blocks().collect();
        assert_eq!(fences.len(), 2);
        assert_eq!(fences[0], (Some("js"), "first();\n"));
        assert_eq!(fences[1], (Some("html"), "<div></div>\n"));
    }

    #[test]
    fn test_indented_code_stays_prose() {
        let raw = "Paragraph.\n\n    indented, not fenced\n\nMore.\n";
        let body = Body::parse(raw);
        assert_eq!(body.code_blocks().count(), 0);
        assert_eq!(body.blocks.len(), 1);
    }

    #[test]
    fn test_fence_payload_not_rendered() {
        // Markdown syntax inside a fence must come through untouched
        let raw = "```markdown\n# not a heading\n*not emphasis*\n```\n";
        let body = Body::parse(raw);
        let fences: Vec<_> = body.code_blocks().collect();
        assert_eq!(fences[0].1, "# not a heading\n*not emphasis*\n");
    }

    #[test]
    fn test_empty_body() {
        let body = Body::parse("");
        assert!(body.blocks.is_empty());
    }
}
