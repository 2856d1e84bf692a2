use log::{debug, info};

use super::{normalize, Classifier};
use crate::config::ClassifierConfig;
use crate::markup::{AnnotatedText, Tag};
use crate::parser::{split_label_value, strip_bullet};

/// Structures "give me nutrition facts" answers.
///
/// Lines keep their input order. `Label: value` lines become facts,
/// lines ending in a colon become sub-headings, and everything else is
/// kept as paragraph text.
#[derive(Debug, Clone)]
pub struct NutritionClassifier {
    heading: String,
    heading_key: String,
}

impl Default for NutritionClassifier {
    fn default() -> Self {
        Self::from_config(&ClassifierConfig::default())
    }
}

impl NutritionClassifier {
    pub fn from_config(config: &ClassifierConfig) -> Self {
        Self {
            heading: config.nutrition_heading.clone(),
            heading_key: normalize(&config.nutrition_heading),
        }
    }
}

impl Classifier for NutritionClassifier {
    fn name(&self) -> &str {
        "nutrition"
    }

    fn classify(&self, raw: &str) -> AnnotatedText {
        let mut lines = Vec::new();
        let mut facts = 0;

        for line in raw.lines().map(str::trim).filter(|line| !line.is_empty()) {
            if normalize(line) == self.heading_key {
                debug!("Dropped producer heading {:?}", line);
                continue;
            }

            if is_fact(line) {
                facts += 1;
                lines.push(Tag::NutritionFact.wrap(line));
            } else if line.ends_with(':') {
                lines.push(Tag::SubHeading.wrap(line));
            } else {
                lines.push(line.to_string());
            }
        }

        info!("Classified nutrition answer: {} facts", facts);

        if facts > 0 {
            lines.insert(0, Tag::Heading.wrap(&self.heading));
        }
        AnnotatedText::from_lines(lines)
    }
}

/// A line the block parser will split into a non-empty label and value.
///
/// A hyphen only counts as the separator when spaced out, so prose such as
/// "a low-fat snack" stays a paragraph.
fn is_fact(line: &str) -> bool {
    let body = strip_bullet(line);
    let Some(at) = body.find([':', '|', '-']) else {
        return false;
    };
    if body[at..].starts_with('-')
        && !(body[..at].ends_with(char::is_whitespace)
            && body[at + 1..].starts_with(char::is_whitespace))
    {
        return false;
    }
    matches!(split_label_value(line), Some((label, value)) if !label.is_empty() && !value.is_empty())
}
