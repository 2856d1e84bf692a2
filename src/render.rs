//! Reference renderers for block lists.
//!
//! The mobile client draws blocks natively; these renderers back the CLI
//! and give other consumers a ready-made text or HTML view.

use html_escape::encode_text;

use crate::model::ContentBlock;

/// Render blocks as plain text, one block per line.
///
/// Headings and sub-headings after the first block are preceded by a
/// blank line.
pub fn render_text(blocks: &[ContentBlock]) -> String {
    let mut out: Vec<String> = Vec::with_capacity(blocks.len());

    for block in blocks {
        match block {
            ContentBlock::Heading { text } | ContentBlock::SubHeading { text } => {
                if !out.is_empty() {
                    out.push(String::new());
                }
                out.push(text.clone());
            }
            ContentBlock::Ingredient { text } => out.push(format!("• {}", text)),
            ContentBlock::Step { number, text } => {
                if text.is_empty() {
                    out.push(number.clone());
                } else {
                    out.push(format!("{} {}", number, text));
                }
            }
            ContentBlock::NutritionFact { label, value } => {
                out.push(format!("{}: {}", label, value))
            }
            ContentBlock::Paragraph { text } => out.push(text.clone()),
        }
    }

    out.join("\n")
}

/// List element currently open while rendering HTML
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Group {
    Ingredients,
    Steps,
    Facts,
}

impl Group {
    fn of(block: &ContentBlock) -> Option<Group> {
        match block {
            ContentBlock::Ingredient { .. } => Some(Group::Ingredients),
            ContentBlock::Step { .. } => Some(Group::Steps),
            ContentBlock::NutritionFact { .. } => Some(Group::Facts),
            _ => None,
        }
    }

    fn open(&self) -> &'static str {
        match self {
            Group::Ingredients => "<ul class=\"ingredients\">",
            Group::Steps => "<ol class=\"steps\">",
            Group::Facts => "<dl class=\"nutrition\">",
        }
    }

    fn close(&self) -> &'static str {
        match self {
            Group::Ingredients => "</ul>",
            Group::Steps => "</ol>",
            Group::Facts => "</dl>",
        }
    }
}

/// Render blocks as an HTML fragment.
///
/// Consecutive ingredients, steps and nutrition facts are grouped into a
/// single list element. All text is escaped.
pub fn render_html(blocks: &[ContentBlock]) -> String {
    let mut out: Vec<String> = Vec::new();
    let mut open: Option<Group> = None;

    for block in blocks {
        let group = Group::of(block);
        if open != group {
            if let Some(current) = open {
                out.push(current.close().to_string());
            }
            if let Some(next) = group {
                out.push(next.open().to_string());
            }
            open = group;
        }

        let element = match block {
            ContentBlock::Heading { text } => format!("<h2>{}</h2>", encode_text(text)),
            ContentBlock::SubHeading { text } => format!("<h3>{}</h3>", encode_text(text)),
            ContentBlock::Ingredient { text } => format!("<li>{}</li>", encode_text(text)),
            ContentBlock::Step { number, text } => format!(
                "<li><span class=\"step-number\">{}</span> {}</li>",
                encode_text(number),
                encode_text(text)
            ),
            ContentBlock::NutritionFact { label, value } => format!(
                "<dt>{}</dt><dd>{}</dd>",
                encode_text(label),
                encode_text(value)
            ),
            ContentBlock::Paragraph { text } => format!("<p>{}</p>", encode_text(text)),
        };
        out.push(element);
    }

    if let Some(current) = open {
        out.push(current.close().to_string());
    }

    out.join("\n")
}
