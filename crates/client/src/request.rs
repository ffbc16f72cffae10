//! Request payload for the assist endpoint.

use serde::Serialize;
use study_core::SectionKind;

/// A question for the assist service, with the student context and the
/// section kinds the answer should include.
#[derive(Debug, Clone, Serialize)]
pub struct AssistRequest {
    /// Class/grade of the student. The service expects 1 through 10.
    pub student_class: u32,

    /// Subject the question belongs to, e.g. "Math".
    pub subject: String,

    /// The question or topic text.
    pub question: String,

    /// Section kinds the answer should include.
    pub needs: Vec<SectionKind>,
}

impl Default for AssistRequest {
    /// Mirrors the request form's initial state: class 6, Math, every
    /// section kind.
    fn default() -> Self {
        Self {
            student_class: 6,
            subject: "Math".to_string(),
            question: String::new(),
            needs: SectionKind::all(),
        }
    }
}

impl AssistRequest {
    /// Create a request for the given question with the default context.
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            ..Self::default()
        }
    }

    /// Set the student's class.
    pub fn with_class(mut self, student_class: u32) -> Self {
        self.student_class = student_class;
        self
    }

    /// Set the subject.
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = subject.into();
        self
    }

    /// Replace the requested section kinds.
    pub fn with_needs(mut self, needs: Vec<SectionKind>) -> Self {
        self.needs = needs;
        self
    }
}
