//! Plain-text export.
//!
//! Renders outlines and study guides as copy-pasteable text, one block per
//! slide or section, blocks separated by a blank line.

use crate::types::{AnswerDocument, Section, SectionContent, Slide};

/// Render slides as copyable plain text.
///
/// Each slide becomes a numbered block with one `- ` line per bullet.
///
/// # Example output
/// ```text
/// Slide 1: Title Slide
/// - Photosynthesis
/// - Subject: Science | Class: 6
/// - Goal: Understand the concept step by step.
///
/// Slide 2: Exit Ticket
/// - Write 1 thing you learned.
/// ```
pub fn outline_text(slides: &[Slide]) -> String {
    slides
        .iter()
        .enumerate()
        .map(|(i, slide)| {
            format!(
                "Slide {}: {}\n- {}",
                i + 1,
                slide.heading,
                slide.bullets.join("\n- ")
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Render an outline with a trailing newline, for file output.
pub fn outline_text_with_newline(slides: &[Slide]) -> String {
    let text = outline_text(slides);
    if text.is_empty() {
        text
    } else {
        format!("{}\n", text)
    }
}

/// Render an answer document as a readable study guide.
///
/// Opens with the topic and a subject/class line, then one block per
/// section (paragraphs as-is, bullet lists with `- ` markers), then the
/// follow-up prompt when present.
pub fn study_guide_text(doc: &AnswerDocument) -> String {
    let mut blocks = Vec::new();

    blocks.push(format!(
        "{}\n{} • Class {}",
        doc.display_topic(),
        doc.subject,
        doc.level
    ));

    for section in &doc.sections {
        blocks.push(section_block(section));
    }

    if let Some(follow_up) = doc.follow_up.as_deref() {
        if !follow_up.is_empty() {
            blocks.push(follow_up.to_string());
        }
    }

    blocks.join("\n\n")
}

/// Render a study guide with a trailing newline, for file output.
pub fn study_guide_text_with_newline(doc: &AnswerDocument) -> String {
    format!("{}\n", study_guide_text(doc))
}

/// Render one section as a titled block. Paragraphs keep their prose form;
/// bullet lists get `- ` markers; empty content leaves just the title.
fn section_block(section: &Section) -> String {
    match &section.content {
        SectionContent::Text(text) if text.is_empty() => section.title.clone(),
        SectionContent::Text(text) => format!("{}\n{}", section.title, text),
        SectionContent::Bullets(bullets) if bullets.is_empty() => section.title.clone(),
        SectionContent::Bullets(bullets) => {
            format!("{}\n- {}", section.title, bullets.join("\n- "))
        }
    }
}
