//! Structures free-form generated answers ("give me a recipe for…",
//! "give me nutrition facts for…") into typed content blocks.
//!
//! The pipeline has two pure stages:
//!
//! 1. a [`Classifier`] turns raw text into [`AnnotatedText`], re-ordering a
//!    recipe into ingredients, instructions, then everything else;
//! 2. the [`BlockParser`] turns annotated text into [`ContentBlock`]s.
//!
//! ```
//! use recipe_structurer::{structure_recipe, ContentBlock};
//!
//! let blocks = structure_recipe("Instructions:\n1. Mix.\n- 1 cup sugar");
//! assert_eq!(
//!     blocks,
//!     vec![
//!         ContentBlock::heading("Ingredients:"),
//!         ContentBlock::ingredient("1 cup sugar"),
//!         ContentBlock::heading("Instructions:"),
//!         ContentBlock::step("1.", "Mix."),
//!     ]
//! );
//! ```

pub mod builder;
pub mod classifier;
pub mod config;
pub mod error;
pub mod markup;
pub mod model;
pub mod parser;
pub mod render;
pub mod uniffi_bindings;

pub use builder::{ResponseStructurer, ResponseStructurerBuilder, StructuredResponse};
pub use classifier::{Classifier, NutritionClassifier, RecipeClassifier};
pub use config::{OutputFormat, StructurerConfig};
pub use error::StructureError;
pub use markup::{AnnotatedText, Tag};
pub use model::{ClassifiedLine, ContentBlock, LineCategory, ResponseKind};
pub use parser::BlockParser;

/// Classify a recipe answer with the built-in vocabulary
pub fn classify_recipe(raw: &str) -> AnnotatedText {
    RecipeClassifier::default().classify(raw)
}

/// Classify a nutrition answer with the built-in vocabulary
pub fn classify_nutrition(raw: &str) -> AnnotatedText {
    NutritionClassifier::default().classify(raw)
}

/// Parse annotated text into blocks
pub fn parse_blocks(annotated: &str) -> Vec<ContentBlock> {
    parser::parse(annotated)
}

/// Run both stages for the given kind of answer with the built-in vocabulary
pub fn structure(raw: &str, kind: ResponseKind) -> Vec<ContentBlock> {
    let annotated = classifier::default_classifier(kind).classify(raw);
    parser::parse(annotated.as_str())
}

/// Run both stages on a recipe answer
pub fn structure_recipe(raw: &str) -> Vec<ContentBlock> {
    structure(raw, ResponseKind::Recipe)
}

/// Run both stages on a nutrition answer
pub fn structure_nutrition(raw: &str) -> Vec<ContentBlock> {
    structure(raw, ResponseKind::Nutrition)
}
