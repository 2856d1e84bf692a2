mod ingredient;
mod nutrition;
mod recipe;

pub use ingredient::{IngredientMatcher, IngredientPattern};
pub use nutrition::NutritionClassifier;
pub use recipe::{RecipeClassifier, Rule};

use crate::config::ClassifierConfig;
use crate::markup::AnnotatedText;
use crate::model::ResponseKind;
use crate::StructureError;

/// Turns raw generated text into annotated text for the block parser.
///
/// Implementations must be pure and total: every input yields some
/// (possibly empty) annotated text.
pub trait Classifier: Send + Sync {
    /// Classifier name used in logs (e.g. "recipe", "nutrition")
    fn name(&self) -> &str;

    fn classify(&self, raw: &str) -> AnnotatedText;
}

/// Create the classifier for a response kind from configuration
pub fn classifier_for(
    kind: ResponseKind,
    config: &ClassifierConfig,
) -> Result<Box<dyn Classifier>, StructureError> {
    match kind {
        ResponseKind::Recipe => Ok(Box::new(RecipeClassifier::from_config(config)?)),
        ResponseKind::Nutrition => Ok(Box::new(NutritionClassifier::from_config(config))),
    }
}

/// Create the classifier for a response kind with the built-in vocabulary
pub fn default_classifier(kind: ResponseKind) -> Box<dyn Classifier> {
    match kind {
        ResponseKind::Recipe => Box::new(RecipeClassifier::default()),
        ResponseKind::Nutrition => Box::new(NutritionClassifier::default()),
    }
}

/// Lowercase form with surrounding whitespace and trailing colons removed
pub(crate) fn normalize(line: &str) -> String {
    line.trim().trim_end_matches(':').trim().to_lowercase()
}
