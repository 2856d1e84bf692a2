//! Heuristics deciding whether a line reads like an ingredient.
//!
//! Four named patterns are tried in a fixed order; the first match wins.
//! The bullet catch-all is last so that numeric patterns always report
//! themselves first.

use log::trace;
use regex::Regex;
use std::sync::LazyLock;

use crate::config::ClassifierConfig;
use crate::StructureError;

/// Optional bullet glyph in front of a quantity
const BULLET_PREFIX: &str = r"(?:[-•*]\s*)?";

/// Integer, decimal, `a/b` fraction or `a-b` range
const QUANTITY: &str = r"\d+(?:[.,/]\d+)?(?:\s*-\s*\d+(?:[.,/]\d+)?)?";

const VULGAR_FRACTION: &str = "[¼½¾⅐⅑⅒⅓⅔⅕⅖⅗⅘⅙⅚⅛⅜⅝⅞]";

static DEFAULT_MATCHER: LazyLock<IngredientMatcher> = LazyLock::new(|| {
    IngredientMatcher::from_config(&ClassifierConfig::default())
        .expect("built-in ingredient vocabulary compiles")
});

/// The named ingredient patterns, in evaluation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IngredientPattern {
    /// "2 cups flour", "- 200g butter", "1-2 tbsp oil"
    QuantityUnit,
    /// "2 sprigs of thyme", "3 leaves fresh basil"
    QuantityWordConnector,
    /// "½ cup sugar", "1 ⅓ tsp salt"
    FractionUnit,
    /// "- salt to taste"
    BulletItem,
}

impl IngredientPattern {
    pub const ORDER: [IngredientPattern; 4] = [
        IngredientPattern::QuantityUnit,
        IngredientPattern::QuantityWordConnector,
        IngredientPattern::FractionUnit,
        IngredientPattern::BulletItem,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            IngredientPattern::QuantityUnit => "quantity-unit",
            IngredientPattern::QuantityWordConnector => "quantity-word-connector",
            IngredientPattern::FractionUnit => "fraction-unit",
            IngredientPattern::BulletItem => "bullet-item",
        }
    }
}

/// Compiled ingredient patterns for one unit/connector vocabulary.
#[derive(Debug, Clone)]
pub struct IngredientMatcher {
    patterns: Vec<(IngredientPattern, Regex)>,
}

impl Default for IngredientMatcher {
    fn default() -> Self {
        DEFAULT_MATCHER.clone()
    }
}

impl IngredientMatcher {
    /// Compile the patterns for the given unit and connector tokens.
    ///
    /// Tokens are matched case-insensitively and as whole words; regex
    /// metacharacters in tokens are escaped.
    pub fn new(units: &[String], connectors: &[String]) -> Result<Self, StructureError> {
        let units = alternation("units", units)?;
        let connectors = alternation("connectors", connectors)?;

        let mut patterns = Vec::with_capacity(IngredientPattern::ORDER.len());
        for pattern in IngredientPattern::ORDER {
            let source = match pattern {
                IngredientPattern::QuantityUnit => {
                    format!(r"(?i)^{BULLET_PREFIX}{QUANTITY}\s*(?:{units})\b")
                }
                IngredientPattern::QuantityWordConnector => {
                    format!(r"(?i)^{BULLET_PREFIX}{QUANTITY}\s+\S+\s+(?:{connectors})\b")
                }
                IngredientPattern::FractionUnit => format!(
                    r"(?i)^{BULLET_PREFIX}(?:\d+\s*)?{VULGAR_FRACTION}\s*(?:{units})\b"
                ),
                // A bullet followed by text that is not itself another bullet
                // or a markdown rule ("---", "**bold**")
                IngredientPattern::BulletItem => r"^[-•*]\s*[^-•*\s]".to_string(),
            };
            patterns.push((pattern, Regex::new(&source)?));
        }

        Ok(Self { patterns })
    }

    pub fn from_config(config: &ClassifierConfig) -> Result<Self, StructureError> {
        Self::new(&config.units, &config.connectors)
    }

    /// The first pattern accepting `line`, if any
    pub fn matching_pattern(&self, line: &str) -> Option<IngredientPattern> {
        let line = line.trim();
        let pattern = self
            .patterns
            .iter()
            .find(|(_, regex)| regex.is_match(line))
            .map(|(pattern, _)| *pattern);
        if let Some(pattern) = pattern {
            trace!("{:<24} {}", pattern.name(), line);
        }
        pattern
    }

    pub fn is_likely_ingredient(&self, line: &str) -> bool {
        self.matching_pattern(line).is_some()
    }
}

/// Build `a|b|c` from vocabulary tokens, longest first
fn alternation(name: &str, tokens: &[String]) -> Result<String, StructureError> {
    let mut escaped: Vec<String> = tokens
        .iter()
        .map(|token| token.trim())
        .filter(|token| !token.is_empty())
        .map(regex::escape)
        .collect();

    if escaped.is_empty() {
        return Err(StructureError::InvalidVocabulary(format!(
            "classifier.{} must contain at least one entry",
            name
        )));
    }

    escaped.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    escaped.dedup();
    Ok(escaped.join("|"))
}
