//! Domain types for assist requests and the structured answers they return.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Fallback headline used when an answer arrives without a topic.
pub const DEFAULT_TOPIC: &str = "Lesson";

/// A structured answer from the assist service.
///
/// Every field is lenient: a missing or empty field degrades to a default
/// instead of failing deserialization, so a partial answer still renders.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnswerDocument {
    /// Human-readable title of the lesson.
    #[serde(default)]
    pub topic: Option<String>,

    /// Subject the answer belongs to, e.g. "Science".
    #[serde(default)]
    pub subject: String,

    /// Class/grade of the student the answer was written for.
    #[serde(default)]
    pub level: Level,

    /// Titled content blocks, in the order the service produced them.
    #[serde(default)]
    pub sections: Vec<Section>,

    /// Optional follow-up prompt shown after the study guide.
    #[serde(default)]
    pub follow_up: Option<String>,
}

impl AnswerDocument {
    /// Topic to display, falling back to "Lesson" when absent or empty.
    pub fn display_topic(&self) -> &str {
        match self.topic.as_deref() {
            Some(topic) if !topic.is_empty() => topic,
            _ => DEFAULT_TOPIC,
        }
    }
}

/// Class/grade identifier as the service sends it.
///
/// The wire format is loose: some responses carry a bare number while
/// others echo back the string from the request form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Level {
    /// A whole-number grade, e.g. `6`.
    Number(i64),
    /// A fractional grade, seen from services that echo floats.
    Decimal(f64),
    /// A free-form grade label, e.g. `"6"` or `"6th"`.
    Text(String),
}

impl Default for Level {
    fn default() -> Self {
        Level::Text(String::new())
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Number(n) => write!(f, "{}", n),
            Level::Decimal(d) => write!(f, "{}", d),
            Level::Text(t) => f.write_str(t),
        }
    }
}

/// A titled unit of content within an answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Display label, e.g. "Explanation" or "Practice Questions".
    #[serde(default)]
    pub title: String,

    /// Paragraph text or bullet list.
    #[serde(default)]
    pub content: SectionContent,
}

impl Section {
    /// Create a section with paragraph content.
    pub fn text(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: SectionContent::Text(content.into()),
        }
    }

    /// Create a section with bullet-list content.
    pub fn bullets(title: impl Into<String>, bullets: Vec<String>) -> Self {
        Self {
            title: title.into(),
            content: SectionContent::Bullets(bullets),
        }
    }
}

/// Body of a section: either a paragraph or an ordered bullet list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SectionContent {
    /// A single paragraph of prose.
    Text(String),
    /// An ordered list of bullet lines.
    Bullets(Vec<String>),
}

impl Default for SectionContent {
    fn default() -> Self {
        SectionContent::Text(String::new())
    }
}

impl SectionContent {
    /// Normalize to a bullet sequence.
    ///
    /// A paragraph becomes a one-element sequence; empty text becomes an
    /// empty sequence so blank sections count as absent.
    pub fn to_bullets(&self) -> Vec<String> {
        match self {
            SectionContent::Text(text) if text.is_empty() => Vec::new(),
            SectionContent::Text(text) => vec![text.clone()],
            SectionContent::Bullets(bullets) => bullets.clone(),
        }
    }

    /// True when there is nothing to show.
    pub fn is_empty(&self) -> bool {
        match self {
            SectionContent::Text(text) => text.is_empty(),
            SectionContent::Bullets(bullets) => bullets.is_empty(),
        }
    }
}

/// Content categories a caller can request from the assist service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    /// Plain-language explanation of the concept.
    Explanation,
    /// Step-by-step walkthrough.
    Steps,
    /// Worked examples.
    Examples,
    /// Practice questions for the student.
    Practice,
    /// Quick summary of the key points.
    Summary,
    /// Helpful tips and common pitfalls.
    Tips,
    /// Fun facts around the topic.
    FunFacts,
    /// Related topics to explore next.
    Related,
}

impl SectionKind {
    /// All kinds, in the order the request form lists them.
    pub fn all() -> Vec<SectionKind> {
        vec![
            SectionKind::Explanation,
            SectionKind::Steps,
            SectionKind::Examples,
            SectionKind::Practice,
            SectionKind::Summary,
            SectionKind::Tips,
            SectionKind::FunFacts,
            SectionKind::Related,
        ]
    }

    /// The snake_case name used in the request's `needs` array.
    pub fn wire_name(&self) -> &'static str {
        match self {
            SectionKind::Explanation => "explanation",
            SectionKind::Steps => "steps",
            SectionKind::Examples => "examples",
            SectionKind::Practice => "practice",
            SectionKind::Summary => "summary",
            SectionKind::Tips => "tips",
            SectionKind::FunFacts => "fun_facts",
            SectionKind::Related => "related",
        }
    }

    /// Parse a wire name back into a kind.
    pub fn from_wire(name: &str) -> Option<Self> {
        match name {
            "explanation" => Some(Self::Explanation),
            "steps" => Some(Self::Steps),
            "examples" => Some(Self::Examples),
            "practice" => Some(Self::Practice),
            "summary" => Some(Self::Summary),
            "tips" => Some(Self::Tips),
            "fun_facts" => Some(Self::FunFacts),
            "related" => Some(Self::Related),
            _ => None,
        }
    }
}

/// A single slide in a generated presentation outline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slide {
    /// The slide's title.
    pub heading: String,

    /// Bullet lines in display order. Slides produced by the outline
    /// builder always carry at least one.
    pub bullets: Vec<String>,
}

impl Slide {
    /// Create a new slide.
    pub fn new(heading: impl Into<String>, bullets: Vec<String>) -> Self {
        Self {
            heading: heading.into(),
            bullets,
        }
    }
}
