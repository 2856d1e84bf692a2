//! Tag-annotated text shared by the classifiers and the block parser.
//!
//! Annotated text is plain text interleaved with paired markers such as
//! `<i>2 cups flour</i>`. Any producer that emits well-nested markers from
//! the fixed [`Tag`] set can feed the block parser.

use std::fmt;

/// The fixed marker set understood by the block parser
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Heading,
    Step,
    Ingredient,
    SubHeading,
    NutritionFact,
}

impl Tag {
    pub const ALL: [Tag; 5] = [
        Tag::Heading,
        Tag::Step,
        Tag::Ingredient,
        Tag::SubHeading,
        Tag::NutritionFact,
    ];

    /// Marker name as it appears between the angle brackets
    pub fn name(&self) -> &'static str {
        match self {
            Tag::Heading => "h",
            Tag::Step => "step",
            Tag::Ingredient => "i",
            Tag::SubHeading => "sh",
            Tag::NutritionFact => "n",
        }
    }

    pub fn from_name(name: &str) -> Option<Tag> {
        Tag::ALL.into_iter().find(|tag| tag.name() == name)
    }

    pub fn open(&self) -> String {
        format!("<{}>", self.name())
    }

    pub fn close(&self) -> String {
        format!("</{}>", self.name())
    }

    /// Wrap `content` in this tag's opening and closing markers
    pub fn wrap(&self, content: &str) -> String {
        format!("<{name}>{content}</{name}>", name = self.name())
    }
}

/// Output of a classifier: newline-separated lines of plain and tagged text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct AnnotatedText(String);

impl AnnotatedText {
    /// Join lines with `\n`, keeping only the first occurrence of each line
    pub fn from_lines<I>(lines: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut seen = std::collections::HashSet::new();
        let kept: Vec<String> = lines
            .into_iter()
            .filter(|line| seen.insert(line.clone()))
            .collect();
        AnnotatedText(kept.join("\n"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of complete `<tag>…</tag>` pairs for the given tag
    pub fn count_pairs(&self, tag: Tag) -> usize {
        self.0.matches(&tag.close()).count()
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.0.lines()
    }
}

impl fmt::Display for AnnotatedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for AnnotatedText {
    fn from(text: String) -> Self {
        AnnotatedText(text)
    }
}

impl From<&str> for AnnotatedText {
    fn from(text: &str) -> Self {
        AnnotatedText(text.to_string())
    }
}

impl AsRef<str> for AnnotatedText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
