use log::{debug, info, trace};
use regex::Regex;
use std::sync::LazyLock;

use super::{normalize, Classifier, IngredientMatcher};
use crate::config::ClassifierConfig;
use crate::markup::{AnnotatedText, Tag};
use crate::model::{ClassifiedLine, LineCategory};
use crate::StructureError;

static STEP_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(?:\d+\.|step\s*\d+|\d+\))").unwrap());

static DEFAULT_CLASSIFIER: LazyLock<RecipeClassifier> = LazyLock::new(|| {
    RecipeClassifier::from_config(&ClassifierConfig::default())
        .expect("built-in recipe vocabulary compiles")
});

/// Line rules of the recipe classifier, evaluated in [`Rule::ORDER`].
///
/// The first rule that accepts a line decides what happens to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    /// Empty after trimming: dropped
    Blank,
    /// The producer's own "Ingredients" heading: dropped
    IngredientsHeading,
    /// Ingredient-looking line: deduplicated into the ingredients block
    Ingredient,
    /// Any other line ending in `:` that is not a section keyword: dropped
    RecipeTitle,
    /// Mentions a section keyword: opens the instructions section, dropped
    SectionHeader,
    /// Numbered line inside the instructions section
    NumberedStep,
    /// Unnumbered line inside the instructions section
    Continuation,
    /// Everything else, kept in input order after the instructions
    Other,
}

impl Rule {
    pub const ORDER: [Rule; 8] = [
        Rule::Blank,
        Rule::IngredientsHeading,
        Rule::Ingredient,
        Rule::RecipeTitle,
        Rule::SectionHeader,
        Rule::NumberedStep,
        Rule::Continuation,
        Rule::Other,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Rule::Blank => "blank",
            Rule::IngredientsHeading => "ingredients-heading",
            Rule::Ingredient => "ingredient",
            Rule::RecipeTitle => "recipe-title",
            Rule::SectionHeader => "section-header",
            Rule::NumberedStep => "numbered-step",
            Rule::Continuation => "continuation",
            Rule::Other => "other",
        }
    }

    /// Category reported for a line decided by this rule; blank lines have none
    pub fn category(&self) -> Option<LineCategory> {
        match self {
            Rule::Blank => None,
            Rule::IngredientsHeading | Rule::RecipeTitle => Some(LineCategory::SkippedTitle),
            Rule::Ingredient => Some(LineCategory::Ingredient),
            Rule::SectionHeader => Some(LineCategory::SectionHeader),
            Rule::NumberedStep => Some(LineCategory::NumberedStep),
            Rule::Continuation | Rule::Other => Some(LineCategory::PlainLine),
        }
    }
}

/// Structures "give me a recipe" answers.
///
/// Output always has the shape ingredients, then instructions, then
/// everything else, whatever order the producer used.
#[derive(Debug, Clone)]
pub struct RecipeClassifier {
    ingredients: IngredientMatcher,
    section_keywords: Vec<String>,
    ingredients_heading: String,
    instructions_heading: String,
}

impl Default for RecipeClassifier {
    fn default() -> Self {
        DEFAULT_CLASSIFIER.clone()
    }
}

impl RecipeClassifier {
    pub fn from_config(config: &ClassifierConfig) -> Result<Self, StructureError> {
        config.validate()?;

        let section_keywords = config
            .section_keywords
            .iter()
            .map(|keyword| keyword.trim().to_lowercase())
            .filter(|keyword| !keyword.is_empty())
            .collect();

        Ok(Self {
            ingredients: IngredientMatcher::from_config(config)?,
            section_keywords,
            ingredients_heading: config.ingredients_heading.clone(),
            instructions_heading: config.instructions_heading.clone(),
        })
    }

    /// Whether `rule` accepts the trimmed `line` in the given section state.
    pub fn matches(&self, rule: Rule, line: &str, in_instructions: bool) -> bool {
        let line = line.trim();
        let normalized = normalize(line);
        match rule {
            Rule::Blank => line.is_empty(),
            Rule::IngredientsHeading => normalized == "ingredients",
            Rule::Ingredient => self.ingredients.is_likely_ingredient(line),
            Rule::RecipeTitle => {
                line.ends_with(':')
                    && !self
                        .section_keywords
                        .iter()
                        .any(|keyword| *keyword == normalized)
            }
            Rule::SectionHeader => self
                .section_keywords
                .iter()
                .any(|keyword| normalized.contains(keyword.as_str())),
            Rule::NumberedStep => in_instructions && STEP_NUMBER.is_match(line),
            Rule::Continuation => in_instructions,
            Rule::Other => true,
        }
    }

    /// The first rule in [`Rule::ORDER`] accepting `line`
    pub fn rule_for(&self, line: &str, in_instructions: bool) -> Rule {
        Rule::ORDER
            .into_iter()
            .find(|rule| self.matches(*rule, line, in_instructions))
            .unwrap_or(Rule::Other)
    }

    /// Decide a rule for every line, threading the instructions flag through
    fn walk<'a>(&self, raw: &'a str) -> Vec<(Rule, &'a str)> {
        let mut in_instructions = false;
        let mut decided = Vec::new();

        for line in raw.lines() {
            let line = line.trim();
            let rule = self.rule_for(line, in_instructions);
            trace!("{:<20} {}", rule.name(), line);

            match rule {
                Rule::SectionHeader => {
                    if !in_instructions {
                        debug!("Instructions section opened by {:?}", line);
                    }
                    in_instructions = true;
                }
                Rule::RecipeTitle => debug!("Suppressed title line {:?}", line),
                _ => {}
            }

            decided.push((rule, line));
        }

        decided
    }

    /// Category of every non-empty input line, in input order
    pub fn classify_lines(&self, raw: &str) -> Vec<ClassifiedLine> {
        self.walk(raw)
            .into_iter()
            .filter_map(|(rule, line)| {
                rule.category().map(|category| ClassifiedLine {
                    content: line.to_string(),
                    category,
                })
            })
            .collect()
    }
}

impl Classifier for RecipeClassifier {
    fn name(&self) -> &str {
        "recipe"
    }

    fn classify(&self, raw: &str) -> AnnotatedText {
        let mut ingredients: Vec<String> = Vec::new();
        let mut instructions: Vec<String> = Vec::new();
        let mut other: Vec<String> = Vec::new();

        for (rule, line) in self.walk(raw) {
            match rule {
                Rule::Ingredient => {
                    let markup = Tag::Ingredient.wrap(line);
                    if ingredients.contains(&markup) {
                        debug!("Dropped repeated ingredient {:?}", line);
                    } else {
                        ingredients.push(markup);
                    }
                }
                Rule::NumberedStep => instructions.push(Tag::Step.wrap(line)),
                Rule::Continuation => instructions.push(line.to_string()),
                Rule::Other => other.push(line.to_string()),
                Rule::Blank
                | Rule::IngredientsHeading
                | Rule::RecipeTitle
                | Rule::SectionHeader => {}
            }
        }

        info!(
            "Classified recipe: {} ingredients, {} instruction lines, {} other lines",
            ingredients.len(),
            instructions.len(),
            other.len()
        );

        let mut lines = Vec::with_capacity(ingredients.len() + instructions.len() + other.len() + 2);
        if !ingredients.is_empty() {
            lines.push(Tag::Heading.wrap(&self.ingredients_heading));
            lines.extend(ingredients);
        }
        if !instructions.is_empty() {
            lines.push(Tag::Heading.wrap(&self.instructions_heading));
            lines.extend(instructions);
        }
        lines.extend(other);

        AnnotatedText::from_lines(lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn classify(raw: &str) -> String {
        RecipeClassifier::default().classify(raw).into_string()
    }

    #[rstest]
    #[case("", false, Rule::Blank)]
    #[case("   ", true, Rule::Blank)]
    #[case("Ingredients", false, Rule::IngredientsHeading)]
    #[case("INGREDIENTS:", false, Rule::IngredientsHeading)]
    #[case("- 2 cups flour", false, Rule::Ingredient)]
    #[case("1 tsp cinnamon", true, Rule::Ingredient)]
    #[case("Grandma's Apple Pie:", false, Rule::RecipeTitle)]
    #[case("For the crust:", true, Rule::RecipeTitle)]
    #[case("Instructions:", false, Rule::SectionHeader)]
    #[case("Directions", false, Rule::SectionHeader)]
    #[case("Cooking Method", false, Rule::SectionHeader)]
    #[case("1. Mix dry ingredients.", true, Rule::NumberedStep)]
    #[case("Step 2 Bake", true, Rule::NumberedStep)]
    #[case("step3: rest", true, Rule::NumberedStep)]
    #[case("3) Serve", true, Rule::NumberedStep)]
    #[case("1. Mix dry ingredients.", false, Rule::Other)]
    #[case("Stir until smooth.", true, Rule::Continuation)]
    #[case("Enjoy!", false, Rule::Other)]
    fn test_rule_for(#[case] line: &str, #[case] in_instructions: bool, #[case] expected: Rule) {
        let classifier = RecipeClassifier::default();
        assert_eq!(classifier.rule_for(line, in_instructions), expected);
    }

    #[test]
    fn test_ingredient_outranks_instructions() {
        let output = classify("Instructions:\n1. Whisk.\n2 cups flour\n2. Bake.");
        assert_eq!(
            output,
            "<h>Ingredients:</h>\n<i>2 cups flour</i>\n<h>Instructions:</h>\n<step>1. Whisk.</step>\n<step>2. Bake.</step>"
        );
    }

    #[test]
    fn test_ingredients_move_before_instructions() {
        let output = classify("Method\n1. Boil water.\n- 1 tsp salt\nServe hot");
        assert_eq!(
            output,
            "<h>Ingredients:</h>\n<i>- 1 tsp salt</i>\n<h>Instructions:</h>\n<step>1. Boil water.</step>\nServe hot"
        );
    }

    #[test]
    fn test_other_lines_keep_input_order_after_instructions() {
        let output = classify("A lovely dish.\nServes four.\n- 2 cups rice");
        assert_eq!(
            output,
            "<h>Ingredients:</h>\n<i>- 2 cups rice</i>\nA lovely dish.\nServes four."
        );
    }

    #[test]
    fn test_dedup_is_by_markup_not_by_text() {
        // Different bullets produce different markup and both survive
        let output = classify("- 2 cups flour\n* 2 cups flour\n- 2 cups flour");
        assert_eq!(
            output,
            "<h>Ingredients:</h>\n<i>- 2 cups flour</i>\n<i>* 2 cups flour</i>"
        );
    }

    #[test]
    fn test_repeated_continuation_lines_collapse() {
        let output = classify("Steps\n1. Stir.\nKeep stirring.\n2. Stir again.\nKeep stirring.");
        assert_eq!(
            output,
            "<h>Instructions:</h>\n<step>1. Stir.</step>\nKeep stirring.\n<step>2. Stir again.</step>"
        );
    }

    #[test]
    fn test_steps_mentioning_section_keywords_are_dropped() {
        // The section-header rule runs before the numbered-step rule
        let output = classify("Instructions:\n1. Mix.\n2. Repeat steps above.\n3. Follow the method.");
        assert_eq!(output, "<h>Instructions:</h>\n<step>1. Mix.</step>");
    }

    #[test]
    fn test_empty_and_blank_input() {
        assert_eq!(classify(""), "");
        assert_eq!(classify("\n  \n\t\n"), "");
        assert_eq!(classify("Just a title:"), "");
    }

    #[test]
    fn test_classify_lines_reports_categories() {
        let classifier = RecipeClassifier::default();
        let lines = classifier.classify_lines("Pie:\n\n- 1 cup sugar\nDirections\n1. Bake.\nCool.");
        let categories: Vec<LineCategory> = lines.iter().map(|l| l.category).collect();
        assert_eq!(
            categories,
            vec![
                LineCategory::SkippedTitle,
                LineCategory::Ingredient,
                LineCategory::SectionHeader,
                LineCategory::NumberedStep,
                LineCategory::PlainLine,
            ]
        );
        assert_eq!(lines[1].content, "- 1 cup sugar");
    }

    #[test]
    fn test_configured_headings_and_keywords() {
        let config = ClassifierConfig {
            section_keywords: vec!["zubereitung".to_string()],
            ingredients_heading: "Zutaten:".to_string(),
            instructions_heading: "Zubereitung:".to_string(),
            ..Default::default()
        };
        let classifier = RecipeClassifier::from_config(&config).unwrap();
        let output = classifier
            .classify("Zubereitung:\n1. Ofen vorheizen.\n200 g Mehl")
            .into_string();
        assert_eq!(
            output,
            "<h>Zutaten:</h>\n<i>200 g Mehl</i>\n<h>Zubereitung:</h>\n<step>1. Ofen vorheizen.</step>"
        );
    }
}
