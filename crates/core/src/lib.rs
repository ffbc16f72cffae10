//! Core domain types, outline building, and plain-text export for the
//! study assistant.

pub mod error;
pub mod export;
pub mod outline;
pub mod types;

pub use error::{Error, Result};
pub use outline::build_outline;
pub use types::{AnswerDocument, Level, Section, SectionContent, SectionKind, Slide};
