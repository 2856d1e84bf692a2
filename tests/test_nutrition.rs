use pretty_assertions::assert_eq;
use recipe_structurer::{classify_nutrition, parse_blocks, structure_nutrition, ContentBlock};

const APPLE: &str = "Here are the nutrition facts for a medium apple:

Nutrition Facts
- Calories: 95
- Total Fat: 0.3 g
- Sugar | 19 g
Vitamin C - 14% DV
A low-fat snack.";

#[test]
fn test_apple_nutrition_blocks() {
    assert_eq!(
        structure_nutrition(APPLE),
        vec![
            ContentBlock::heading("Nutrition Facts:"),
            ContentBlock::sub_heading("Here are the nutrition facts for a medium apple:"),
            ContentBlock::nutrition_fact("Calories", "95"),
            ContentBlock::nutrition_fact("Total Fat", "0.3 g"),
            ContentBlock::nutrition_fact("Sugar", "19 g"),
            ContentBlock::nutrition_fact("Vitamin C", "14% DV"),
            ContentBlock::paragraph("A low-fat snack."),
        ]
    );
}

#[test]
fn test_producer_heading_is_not_repeated() {
    let annotated = classify_nutrition(APPLE);
    assert_eq!(annotated.as_str().matches("Nutrition Facts").count(), 1);
}

#[test]
fn test_answer_without_facts_is_prose() {
    assert_eq!(
        structure_nutrition("I don't have data for that.\nTry a more common food."),
        vec![
            ContentBlock::paragraph("I don't have data for that."),
            ContentBlock::paragraph("Try a more common food."),
        ]
    );
}

#[test]
fn test_fact_marker_without_separator_is_paragraph() {
    assert_eq!(
        parse_blocks("<n>Calories</n>"),
        vec![ContentBlock::paragraph("Calories")]
    );
}

#[test]
fn test_fact_marker_with_empty_value() {
    assert_eq!(
        parse_blocks("<n>Calories:</n>"),
        vec![ContentBlock::nutrition_fact("Calories", "")]
    );
}

#[test]
fn test_fact_splits_at_first_separator() {
    assert_eq!(
        parse_blocks("<n>Serving: 1 cup | 240 ml</n>"),
        vec![ContentBlock::nutrition_fact("Serving", "1 cup | 240 ml")]
    );
}
