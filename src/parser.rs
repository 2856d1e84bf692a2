//! Block parser: annotated text to an ordered list of [`ContentBlock`]s.
//!
//! The parser is total. Unbalanced markers, unknown content and missing
//! fields all degrade to paragraphs instead of failing, since the text
//! comes from a generator nobody controls.

use log::debug;
use regex::Regex;
use std::sync::LazyLock;

use crate::markup::Tag;
use crate::model::ContentBlock;

static MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<(/?)(h|step|i|sh|n)>").unwrap());

static STEP_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(\d+\.|step\s*\d+[:.]?)").unwrap());

static LEADING_BULLET: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[-•*]\s?").unwrap());

/// Number shown for a step whose text carries no number of its own
pub const UNNUMBERED_STEP: &str = "•";

/// One piece of annotated text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    Open(Tag),
    Close(Tag),
    Text(&'a str),
}

/// Split annotated text into markers and the (possibly empty) text between them
pub fn tokenize(annotated: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut last = 0;

    for caps in MARKER.captures_iter(annotated) {
        let (Some(whole), Some(name)) = (caps.get(0), caps.get(2)) else {
            continue;
        };
        let Some(tag) = Tag::from_name(name.as_str()) else {
            continue;
        };

        tokens.push(Token::Text(&annotated[last..whole.start()]));
        if caps.get(1).is_some_and(|slash| !slash.as_str().is_empty()) {
            tokens.push(Token::Close(tag));
        } else {
            tokens.push(Token::Open(tag));
        }
        last = whole.end();
    }
    tokens.push(Token::Text(&annotated[last..]));

    tokens
}

/// Parses annotated text produced by any classifier.
#[derive(Debug, Default, Clone, Copy)]
pub struct BlockParser;

impl BlockParser {
    pub fn new() -> Self {
        Self
    }

    pub fn parse(&self, annotated: &str) -> Vec<ContentBlock> {
        let mut stack: Vec<Tag> = Vec::new();
        let mut blocks = Vec::new();

        for token in tokenize(annotated) {
            match token {
                Token::Open(tag) => stack.push(tag),
                Token::Close(tag) => {
                    if stack.pop().is_none() {
                        debug!("Ignoring unmatched closing marker {}", tag.close());
                    }
                }
                Token::Text(text) => {
                    if text.trim().is_empty() {
                        continue;
                    }
                    match stack.last() {
                        Some(tag) => blocks.push(build_block(*tag, text.trim())),
                        None => blocks.extend(paragraphs(text)),
                    }
                }
            }
        }

        if !stack.is_empty() {
            debug!("{} marker(s) left open at end of input", stack.len());
        }

        blocks
    }
}

/// Parse with the default parser
pub fn parse(annotated: &str) -> Vec<ContentBlock> {
    BlockParser.parse(annotated)
}

fn build_block(tag: Tag, content: &str) -> ContentBlock {
    match tag {
        Tag::Heading => ContentBlock::heading(content),
        Tag::SubHeading => ContentBlock::sub_heading(content),
        Tag::Ingredient => ContentBlock::ingredient(strip_bullet(content).trim()),
        Tag::Step => step_block(content),
        Tag::NutritionFact => match split_label_value(content) {
            Some((label, value)) => ContentBlock::nutrition_fact(label, value),
            None => ContentBlock::paragraph(content),
        },
    }
}

fn step_block(content: &str) -> ContentBlock {
    match STEP_LABEL.find(content) {
        Some(label) => {
            let token = label.as_str();
            // "1." keeps its period; "Step 2:" loses the trailing punctuation
            let number = if token.starts_with(|c: char| c.is_ascii_digit()) {
                token
            } else {
                token.trim_end_matches(['.', ':'])
            };
            ContentBlock::step(number, content[label.end()..].trim())
        }
        None => ContentBlock::step(UNNUMBERED_STEP, content),
    }
}

/// One paragraph per non-empty line of untagged text
fn paragraphs(text: &str) -> impl Iterator<Item = ContentBlock> + '_ {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(ContentBlock::paragraph)
}

/// Remove one leading bullet glyph and a single following space
pub(crate) fn strip_bullet(content: &str) -> &str {
    match LEADING_BULLET.find(content) {
        Some(bullet) => &content[bullet.end()..],
        None => content,
    }
}

/// Split a nutrition line into trimmed label and value at the first `:`, `|` or `-`.
///
/// A leading bullet glyph is removed first so "- Fat: 3 g" splits at the
/// colon. Returns `None` when there is no separator at all.
pub fn split_label_value(content: &str) -> Option<(&str, &str)> {
    strip_bullet(content.trim())
        .split_once([':', '|', '-'])
        .map(|(label, value)| (label.trim(), value.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_tokenize_keeps_markers_and_empty_text() {
        let tokens = tokenize("<h>Ingredients:</h>\n<i>salt</i>");
        assert_eq!(
            tokens,
            vec![
                Token::Text(""),
                Token::Open(Tag::Heading),
                Token::Text("Ingredients:"),
                Token::Close(Tag::Heading),
                Token::Text("\n"),
                Token::Open(Tag::Ingredient),
                Token::Text("salt"),
                Token::Close(Tag::Ingredient),
                Token::Text(""),
            ]
        );
    }

    #[test]
    fn test_tokenize_ignores_other_angle_brackets() {
        let tokens = tokenize("Bake at <200C> for <p>20</p> minutes");
        assert_eq!(
            tokens,
            vec![Token::Text("Bake at <200C> for <p>20</p> minutes")]
        );
    }

    #[test]
    fn test_ingredient_bullet_is_stripped_once() {
        assert_eq!(
            parse("<i>- 2 cups flour</i><i>•salt</i><i>-- odd</i>"),
            vec![
                ContentBlock::ingredient("2 cups flour"),
                ContentBlock::ingredient("salt"),
                ContentBlock::ingredient("- odd"),
            ]
        );
    }

    #[test]
    fn test_step_numbers() {
        assert_eq!(
            parse("<step>1. Mix.</step><step>Step 2: Bake.</step><step>step 3. Cool</step><step>Serve warm</step>"),
            vec![
                ContentBlock::step("1.", "Mix."),
                ContentBlock::step("Step 2", "Bake."),
                ContentBlock::step("step 3", "Cool"),
                ContentBlock::step("•", "Serve warm"),
            ]
        );
    }

    #[test]
    fn test_step_with_parenthesis_number_falls_back_to_bullet() {
        assert_eq!(
            parse("<step>1) Chop.</step>"),
            vec![ContentBlock::step(UNNUMBERED_STEP, "1) Chop.")]
        );
    }

    #[test]
    fn test_nutrition_facts() {
        assert_eq!(
            parse("<n>Calories: 95</n><n>- Fat | 0.3 g</n><n>Fiber - 4 g</n><n>Time: 10:30</n>"),
            vec![
                ContentBlock::nutrition_fact("Calories", "95"),
                ContentBlock::nutrition_fact("Fat", "0.3 g"),
                ContentBlock::nutrition_fact("Fiber", "4 g"),
                ContentBlock::nutrition_fact("Time", "10:30"),
            ]
        );
    }

    #[test]
    fn test_nutrition_without_separator_is_paragraph() {
        assert_eq!(
            parse("<n>Rich in vitamin C</n>"),
            vec![ContentBlock::paragraph("Rich in vitamin C")]
        );
    }

    #[test]
    fn test_untagged_text_becomes_one_paragraph_per_line() {
        assert_eq!(
            parse("<h>Notes</h>\nFirst line.\n\n  Second line.  \n<sh>Tips</sh>"),
            vec![
                ContentBlock::heading("Notes"),
                ContentBlock::paragraph("First line."),
                ContentBlock::paragraph("Second line."),
                ContentBlock::sub_heading("Tips"),
            ]
        );
    }

    #[test]
    fn test_nested_markers_use_innermost_tag() {
        assert_eq!(
            parse("<h>Outer <sh>inner</sh> tail</h>"),
            vec![
                ContentBlock::heading("Outer"),
                ContentBlock::sub_heading("inner"),
                ContentBlock::heading("tail"),
            ]
        );
    }

    #[test]
    fn test_unbalanced_markers_degrade() {
        assert_eq!(
            parse("</i>loose text<i>salt"),
            vec![
                ContentBlock::paragraph("loose text"),
                ContentBlock::ingredient("salt"),
            ]
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(parse("").is_empty());
        assert!(parse("<h></h>\n<i>  </i>").is_empty());
    }

    #[test]
    fn test_split_label_value() {
        assert_eq!(split_label_value("Protein: 1 g"), Some(("Protein", "1 g")));
        assert_eq!(split_label_value("• Sugar|19 g"), Some(("Sugar", "19 g")));
        assert_eq!(split_label_value("Vitamins:"), Some(("Vitamins", "")));
        assert_eq!(split_label_value("No separator"), None);
    }
}
