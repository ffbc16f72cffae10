//! WASM-compatible wrapper around the outline builder.
//!
//! This crate exposes the pure transforms to JavaScript so a browser page
//! or worker can turn an assist response into slides and copyable text
//! without another round trip.

use serde::{Deserialize, Serialize};
use study_core::{export, AnswerDocument, Slide};
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn init() {
    // Set up better panic messages in the console
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Result of building a presentation outline.
#[derive(Debug, Serialize, Deserialize)]
pub struct OutlinePayload {
    /// Slides in presentation order.
    pub slides: Vec<Slide>,
    /// Number of slides.
    pub slide_count: usize,
    /// Copyable plain-text rendering of the outline.
    pub text: String,
}

/// Result of rendering a study guide.
#[derive(Debug, Serialize, Deserialize)]
pub struct StudyGuidePayload {
    /// Plain-text study guide.
    pub text: String,
    /// Number of sections in the source document.
    pub section_count: usize,
}

/// Build the presentation outline for an answer document.
///
/// # Arguments
/// * `doc` - The assist response as a JavaScript object; `null` and
///   `undefined` produce an empty outline
///
/// # Returns
/// A JavaScript object with the slides, slide count, and copyable text,
/// or throws on a malformed document.
#[wasm_bindgen]
pub fn build_outline(doc: JsValue) -> Result<JsValue, JsValue> {
    let doc: Option<AnswerDocument> = serde_wasm_bindgen::from_value(doc)
        .map_err(|e| JsValue::from_str(&format!("Invalid answer document: {}", e)))?;

    let payload = build_outline_impl(doc.as_ref());

    serde_wasm_bindgen::to_value(&payload)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

fn build_outline_impl(doc: Option<&AnswerDocument>) -> OutlinePayload {
    let slides: Vec<Slide> = study_core::build_outline(doc);
    let text = export::outline_text(&slides);
    let slide_count = slides.len();

    OutlinePayload {
        slides,
        slide_count,
        text,
    }
}

/// Render an answer document as plain study-guide text.
///
/// # Arguments
/// * `doc` - The assist response as a JavaScript object
///
/// # Returns
/// A JavaScript object with the text and section count.
#[wasm_bindgen]
pub fn study_guide(doc: JsValue) -> Result<JsValue, JsValue> {
    let doc: AnswerDocument = serde_wasm_bindgen::from_value(doc)
        .map_err(|e| JsValue::from_str(&format!("Invalid answer document: {}", e)))?;

    let payload = study_guide_impl(&doc);

    serde_wasm_bindgen::to_value(&payload)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

fn study_guide_impl(doc: &AnswerDocument) -> StudyGuidePayload {
    StudyGuidePayload {
        text: export::study_guide_text(doc),
        section_count: doc.sections.len(),
    }
}
