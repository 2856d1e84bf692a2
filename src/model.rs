use serde::{Deserialize, Serialize};

/// One renderable unit of a structured response.
///
/// Serialized with an internal `type` tag so a presentation layer can switch
/// on it directly:
///
/// ```
/// use recipe_structurer::ContentBlock;
///
/// let block = ContentBlock::Step {
///     number: "1.".to_string(),
///     text: "Mix dry ingredients.".to_string(),
/// };
/// let json = serde_json::to_string(&block).unwrap();
/// assert_eq!(json, r#"{"type":"step","number":"1.","text":"Mix dry ingredients."}"#);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    Heading { text: String },
    Step { number: String, text: String },
    Ingredient { text: String },
    SubHeading { text: String },
    NutritionFact { label: String, value: String },
    Paragraph { text: String },
}

impl ContentBlock {
    pub fn heading(text: impl Into<String>) -> Self {
        ContentBlock::Heading { text: text.into() }
    }

    pub fn step(number: impl Into<String>, text: impl Into<String>) -> Self {
        ContentBlock::Step {
            number: number.into(),
            text: text.into(),
        }
    }

    pub fn ingredient(text: impl Into<String>) -> Self {
        ContentBlock::Ingredient { text: text.into() }
    }

    pub fn sub_heading(text: impl Into<String>) -> Self {
        ContentBlock::SubHeading { text: text.into() }
    }

    pub fn nutrition_fact(label: impl Into<String>, value: impl Into<String>) -> Self {
        ContentBlock::NutritionFact {
            label: label.into(),
            value: value.into(),
        }
    }

    pub fn paragraph(text: impl Into<String>) -> Self {
        ContentBlock::Paragraph { text: text.into() }
    }

    /// Short name of the variant, matching the serialized `type` tag
    pub fn kind(&self) -> &'static str {
        match self {
            ContentBlock::Heading { .. } => "heading",
            ContentBlock::Step { .. } => "step",
            ContentBlock::Ingredient { .. } => "ingredient",
            ContentBlock::SubHeading { .. } => "sub_heading",
            ContentBlock::NutritionFact { .. } => "nutrition_fact",
            ContentBlock::Paragraph { .. } => "paragraph",
        }
    }
}

/// How the recipe classifier treated a single input line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LineCategory {
    Ingredient,
    SectionHeader,
    NumberedStep,
    PlainLine,
    SkippedTitle,
}

/// A trimmed, non-empty input line together with its category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassifiedLine {
    pub content: String,
    pub category: LineCategory,
}

/// Which kind of generated answer is being structured
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseKind {
    /// "Give me a recipe" answers (default)
    #[default]
    Recipe,
    /// "Give me nutrition facts" answers
    Nutrition,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_matches_serialized_tag() {
        let blocks = vec![
            ContentBlock::heading("Ingredients:"),
            ContentBlock::step("1.", "Mix."),
            ContentBlock::ingredient("2 cups flour"),
            ContentBlock::sub_heading("Vitamins:"),
            ContentBlock::nutrition_fact("Calories", "95"),
            ContentBlock::paragraph("Enjoy!"),
        ];

        for block in blocks {
            let json = serde_json::to_value(&block).unwrap();
            assert_eq!(json["type"], block.kind());
        }
    }

    #[test]
    fn test_nutrition_fact_round_trips_through_json() {
        let json = r#"{"type":"nutrition_fact","label":"Calories","value":"95 kcal"}"#;
        let block: ContentBlock = serde_json::from_str(json).unwrap();
        assert_eq!(block, ContentBlock::nutrition_fact("Calories", "95 kcal"));
    }

    #[test]
    fn test_response_kind_default_is_recipe() {
        assert_eq!(ResponseKind::default(), ResponseKind::Recipe);
    }
}
