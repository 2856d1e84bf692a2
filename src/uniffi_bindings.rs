//! UniFFI bindings for recipe-structurer
//!
//! This module provides FFI-compatible types and functions for use with iOS and Android.
//! The pipeline is synchronous and total, so every export returns a plain value.

use crate::model::{ContentBlock, ResponseKind};

// Re-export UniFFI macro
#[cfg(feature = "uniffi")]
uniffi::setup_scaffolding!();

/// FFI-compatible content block
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
pub enum FfiContentBlock {
    Heading { text: String },
    Step { number: String, text: String },
    Ingredient { text: String },
    SubHeading { text: String },
    NutritionFact { label: String, value: String },
    Paragraph { text: String },
}

impl From<ContentBlock> for FfiContentBlock {
    fn from(block: ContentBlock) -> Self {
        match block {
            ContentBlock::Heading { text } => FfiContentBlock::Heading { text },
            ContentBlock::Step { number, text } => FfiContentBlock::Step { number, text },
            ContentBlock::Ingredient { text } => FfiContentBlock::Ingredient { text },
            ContentBlock::SubHeading { text } => FfiContentBlock::SubHeading { text },
            ContentBlock::NutritionFact { label, value } => {
                FfiContentBlock::NutritionFact { label, value }
            }
            ContentBlock::Paragraph { text } => FfiContentBlock::Paragraph { text },
        }
    }
}

/// FFI-compatible response kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
pub enum FfiResponseKind {
    Recipe,
    Nutrition,
}

impl From<FfiResponseKind> for ResponseKind {
    fn from(kind: FfiResponseKind) -> Self {
        match kind {
            FfiResponseKind::Recipe => ResponseKind::Recipe,
            FfiResponseKind::Nutrition => ResponseKind::Nutrition,
        }
    }
}

/// Structure a generated answer into display blocks
///
/// # Arguments
/// * `text` - The generated text
/// * `kind` - Whether the text answers a recipe or a nutrition question
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn structure_response(text: String, kind: FfiResponseKind) -> Vec<FfiContentBlock> {
    crate::structure(&text, kind.into())
        .into_iter()
        .map(FfiContentBlock::from)
        .collect()
}

/// Run only the classifier and return its tag-annotated text
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn classify_response(text: String, kind: FfiResponseKind) -> String {
    crate::classifier::default_classifier(kind.into())
        .classify(&text)
        .into_string()
}

/// Parse annotated text (from this crate or any other producer) into display blocks
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn parse_annotated(annotated: String) -> Vec<FfiContentBlock> {
    crate::parse_blocks(&annotated)
        .into_iter()
        .map(FfiContentBlock::from)
        .collect()
}

/// Get the version of the library
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
