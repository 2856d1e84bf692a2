use log::info;

use crate::classifier::{classifier_for, default_classifier};
use crate::config::StructurerConfig;
use crate::markup::AnnotatedText;
use crate::model::{ContentBlock, ResponseKind};
use crate::parser::BlockParser;
use crate::render::{render_html, render_text};
use crate::StructureError;

/// Result of structuring one generated answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructuredResponse {
    /// Which classifier produced the annotated text
    pub kind: ResponseKind,
    /// Intermediate tag-annotated text
    pub annotated: AnnotatedText,
    /// Blocks ready for display, in order
    pub blocks: Vec<ContentBlock>,
}

impl StructuredResponse {
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn to_text(&self) -> String {
        render_text(&self.blocks)
    }

    pub fn to_html(&self) -> String {
        render_html(&self.blocks)
    }
}

/// Builder for configuring and running the structuring pipeline
#[derive(Debug, Default)]
pub struct ResponseStructurerBuilder {
    text: Option<String>,
    kind: ResponseKind,
    config: Option<StructurerConfig>,
}

impl ResponseStructurerBuilder {
    /// Set the generated text to structure
    ///
    /// # Example
    /// ```
    /// use recipe_structurer::ResponseStructurer;
    ///
    /// let builder = ResponseStructurer::builder()
    ///     .text("Ingredients\n- 2 cups flour");
    /// ```
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Set which kind of answer the text is (recipe by default)
    ///
    /// # Example
    /// ```
    /// use recipe_structurer::{ResponseKind, ResponseStructurer};
    ///
    /// let builder = ResponseStructurer::builder()
    ///     .text("Calories: 95")
    ///     .kind(ResponseKind::Nutrition);
    /// ```
    pub fn kind(mut self, kind: ResponseKind) -> Self {
        self.kind = kind;
        self
    }

    /// Shorthand for `.kind(ResponseKind::Nutrition)`
    pub fn nutrition(self) -> Self {
        self.kind(ResponseKind::Nutrition)
    }

    /// Use custom vocabularies and headings instead of the built-in ones
    ///
    /// # Example
    /// ```
    /// use recipe_structurer::{ResponseStructurer, StructurerConfig};
    ///
    /// let mut config = StructurerConfig::default();
    /// config.classifier.units.push("handful".to_string());
    ///
    /// let builder = ResponseStructurer::builder()
    ///     .text("2 handful spinach")
    ///     .config(config);
    /// ```
    pub fn config(mut self, config: StructurerConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Run the pipeline
    ///
    /// # Errors
    /// Returns `StructureError` if:
    /// - No text was specified
    /// - A custom configuration holds an empty or invalid vocabulary
    ///
    /// Empty or unstructured text is not an error; it yields an empty or
    /// paragraph-only response.
    ///
    /// # Example
    /// ```
    /// use recipe_structurer::{ContentBlock, ResponseStructurer};
    ///
    /// let response = ResponseStructurer::builder()
    ///     .text("Ingredients\n- 2 cups flour")
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(response.blocks[1], ContentBlock::ingredient("2 cups flour"));
    /// ```
    pub fn build(self) -> Result<StructuredResponse, StructureError> {
        let text = self.text.ok_or_else(|| {
            StructureError::BuilderError("No input text specified. Use .text()".to_string())
        })?;

        let classifier = match &self.config {
            Some(config) => classifier_for(self.kind, &config.classifier)?,
            None => default_classifier(self.kind),
        };

        let annotated = classifier.classify(&text);
        let blocks = BlockParser::new().parse(annotated.as_str());
        info!(
            "Structured {} answer into {} blocks",
            classifier.name(),
            blocks.len()
        );

        Ok(StructuredResponse {
            kind: self.kind,
            annotated,
            blocks,
        })
    }
}

/// Main entry point for the builder API
pub struct ResponseStructurer;

impl ResponseStructurer {
    /// Creates a new builder
    ///
    /// # Example
    /// ```
    /// use recipe_structurer::ResponseStructurer;
    ///
    /// let builder = ResponseStructurer::builder();
    /// ```
    pub fn builder() -> ResponseStructurerBuilder {
        ResponseStructurerBuilder::default()
    }
}
