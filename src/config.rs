use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::StructureError;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone, Default)]
pub struct StructurerConfig {
    /// Vocabularies and headings used by the classifiers
    #[serde(default)]
    pub classifier: ClassifierConfig,
    /// Defaults for the command-line output
    #[serde(default)]
    pub output: OutputConfig,
}

/// Vocabularies driving line classification
#[derive(Debug, Deserialize, Clone)]
pub struct ClassifierConfig {
    /// Unit tokens accepted after a leading quantity ("2 cups", "200g")
    #[serde(default = "default_units")]
    pub units: Vec<String>,
    /// Words accepted after "quantity + word" ("2 sprigs of", "3 cloves minced")
    #[serde(default = "default_connectors")]
    pub connectors: Vec<String>,
    /// Keywords that open the instructions section
    #[serde(default = "default_section_keywords")]
    pub section_keywords: Vec<String>,
    /// Heading emitted before the ingredients block
    #[serde(default = "default_ingredients_heading")]
    pub ingredients_heading: String,
    /// Heading emitted before the instructions block
    #[serde(default = "default_instructions_heading")]
    pub instructions_heading: String,
    /// Heading emitted before nutrition facts
    #[serde(default = "default_nutrition_heading")]
    pub nutrition_heading: String,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            units: default_units(),
            connectors: default_connectors(),
            section_keywords: default_section_keywords(),
            ingredients_heading: default_ingredients_heading(),
            instructions_heading: default_instructions_heading(),
            nutrition_heading: default_nutrition_heading(),
        }
    }
}

impl ClassifierConfig {
    /// Reject vocabularies that would make a rule match nothing or everything
    pub fn validate(&self) -> Result<(), StructureError> {
        for (name, list) in [
            ("units", &self.units),
            ("connectors", &self.connectors),
            ("section_keywords", &self.section_keywords),
        ] {
            if list.iter().all(|entry| entry.trim().is_empty()) {
                return Err(StructureError::InvalidVocabulary(format!(
                    "classifier.{} must contain at least one entry",
                    name
                )));
            }
        }
        Ok(())
    }
}

/// Output format of the command-line tool
#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Block list as JSON (default)
    #[default]
    Json,
    /// Plain text rendering
    Text,
    /// HTML fragment
    Html,
    /// The classifier's tag-annotated text
    Annotated,
}

/// Configuration for command-line output
#[derive(Debug, Deserialize, Clone, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
    /// Pretty-print JSON output
    #[serde(default)]
    pub pretty: bool,
}

// Default value functions
fn default_units() -> Vec<String> {
    [
        "cup", "cups", "tbsp", "tsp", "oz", "ounces", "lb", "pound", "g", "grams", "kg",
        "kilograms", "ml", "clove", "cloves", "bunch", "can", "packet", "pinch",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_connectors() -> Vec<String> {
    ["of", "fresh", "dried", "chopped", "minced", "diced", "sliced"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_section_keywords() -> Vec<String> {
    ["instructions", "directions", "steps", "method", "preparation"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_ingredients_heading() -> String {
    "Ingredients:".to_string()
}

fn default_instructions_heading() -> String {
    "Instructions:".to_string()
}

fn default_nutrition_heading() -> String {
    "Nutrition Facts:".to_string()
}

impl StructurerConfig {
    /// Load configuration from `structurer.toml` and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPE_STRUCTURER__ prefix
    /// 2. structurer.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPE_STRUCTURER__CLASSIFIER__UNITS="cup tbsp tsp"
    pub fn load() -> Result<Self, StructureError> {
        load_config()
    }
}

/// Load configuration from `structurer.toml` (optional) and environment variables
pub fn load_config() -> Result<StructurerConfig, StructureError> {
    build(File::with_name("structurer").required(false))
}

/// Load configuration from an explicit TOML file, still layered under environment variables
pub fn load_config_from(path: impl AsRef<Path>) -> Result<StructurerConfig, StructureError> {
    build(File::from(path.as_ref()).required(true))
}

fn build<T>(file: T) -> Result<StructurerConfig, StructureError>
where
    T: config::Source + Send + Sync + 'static,
{
    let settings = Config::builder()
        .add_source(file)
        // Use double underscore for nested keys; lists are space-separated
        .add_source(
            Environment::with_prefix("RECIPE_STRUCTURER")
                .separator("__")
                .list_separator(" ")
                .with_list_parse_key("classifier.units")
                .with_list_parse_key("classifier.connectors")
                .with_list_parse_key("classifier.section_keywords")
                .try_parsing(true),
        )
        .build()?;

    let config: StructurerConfig = settings.try_deserialize()?;
    config.classifier.validate()?;
    Ok(config)
}
