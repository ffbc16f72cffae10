//! Presentation outline building.
//!
//! Turns an answer document into an ordered sequence of slides: a title
//! slide, one slide per well-known section with content, and a closing
//! exit ticket.

use crate::types::{AnswerDocument, Slide};
use std::collections::HashMap;

/// Section titles the outline builder recognizes.
mod titles {
    pub const EXPLANATION: &str = "Explanation";
    pub const STEP_BY_STEP: &str = "Step-by-step";
    pub const EXAMPLES: &str = "Examples";
    pub const QUICK_SUMMARY: &str = "Quick Summary";
    pub const HELPFUL_TIPS: &str = "Helpful Tips";
    pub const PRACTICE_QUESTIONS: &str = "Practice Questions";
    pub const RELATED_TOPICS: &str = "Related Topics";
}

/// Fixed goal line on the title slide.
const GOAL_LINE: &str = "Goal: Understand the concept step by step.";

/// Fixed bullets on the closing exit-ticket slide.
const EXIT_TICKET: [&str; 3] = [
    "Write 1 thing you learned.",
    "Write 1 question you still have.",
    "Rate your understanding: 😊 | 😐 | 😕",
];

/// Build the presentation outline for an answer document.
///
/// Returns an empty outline when no document is given. Otherwise the
/// outline always opens with a title slide and closes with an exit ticket;
/// the slides in between are keyed to well-known section titles
/// ("Explanation" becomes Big Idea, "Step-by-step" becomes Steps,
/// "Examples" stays Examples, "Quick Summary" and "Helpful Tips" merge
/// into Key Points & Tips, "Practice Questions" becomes Try It Now, and
/// "Related Topics" becomes Connect & Explore) and appear only when the
/// matching section has content. Sections with unrecognized titles are
/// ignored. When a title appears more than once, the last occurrence wins.
pub fn build_outline(doc: Option<&AnswerDocument>) -> Vec<Slide> {
    let Some(doc) = doc else {
        return Vec::new();
    };

    let by_title = bullets_by_title(doc);
    let mut slides = Vec::new();

    slides.push(Slide::new(
        "Title Slide",
        vec![
            doc.display_topic().to_string(),
            format!("Subject: {} | Class: {}", doc.subject, doc.level),
            GOAL_LINE.to_string(),
        ],
    ));

    push_section_slide(&mut slides, &by_title, titles::EXPLANATION, "Big Idea");
    push_section_slide(&mut slides, &by_title, titles::STEP_BY_STEP, "Steps");
    push_section_slide(&mut slides, &by_title, titles::EXAMPLES, "Examples");

    let mut key_ideas = Vec::new();
    if let Some(summary) = by_title.get(titles::QUICK_SUMMARY) {
        key_ideas.extend_from_slice(summary);
    }
    if let Some(tips) = by_title.get(titles::HELPFUL_TIPS) {
        key_ideas.extend_from_slice(tips);
    }
    if !key_ideas.is_empty() {
        slides.push(Slide::new("Key Points & Tips", key_ideas));
    }

    push_section_slide(&mut slides, &by_title, titles::PRACTICE_QUESTIONS, "Try It Now");
    push_section_slide(&mut slides, &by_title, titles::RELATED_TOPICS, "Connect & Explore");

    slides.push(Slide::new(
        "Exit Ticket",
        EXIT_TICKET.iter().map(|s| s.to_string()).collect(),
    ));

    slides
}

/// Map each section title to its normalized bullets. Later sections shadow
/// earlier ones with the same title.
fn bullets_by_title(doc: &AnswerDocument) -> HashMap<&str, Vec<String>> {
    let mut by_title = HashMap::new();
    for section in &doc.sections {
        by_title.insert(section.title.as_str(), section.content.to_bullets());
    }
    by_title
}

/// Append a slide for the named section, skipping it when the section is
/// absent or has no content.
fn push_section_slide(
    slides: &mut Vec<Slide>,
    by_title: &HashMap<&str, Vec<String>>,
    title: &str,
    heading: &str,
) {
    if let Some(bullets) = by_title.get(title) {
        if !bullets.is_empty() {
            slides.push(Slide::new(heading, bullets.clone()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Level, Section};

    fn minimal_doc() -> AnswerDocument {
        AnswerDocument {
            topic: Some("Photosynthesis".to_string()),
            subject: "Science".to_string(),
            level: Level::Number(6),
            sections: Vec::new(),
            follow_up: None,
        }
    }

    fn headings(slides: &[Slide]) -> Vec<&str> {
        slides.iter().map(|s| s.heading.as_str()).collect()
    }

    #[test]
    fn test_no_document_yields_empty_outline() {
        assert!(build_outline(None).is_empty());
    }

    #[test]
    fn test_minimal_document_yields_title_and_exit_ticket() {
        let slides = build_outline(Some(&minimal_doc()));

        assert_eq!(headings(&slides), vec!["Title Slide", "Exit Ticket"]);
        assert_eq!(
            slides[0].bullets,
            vec![
                "Photosynthesis".to_string(),
                "Subject: Science | Class: 6".to_string(),
                "Goal: Understand the concept step by step.".to_string(),
            ]
        );
        assert_eq!(
            slides[1].bullets,
            vec![
                "Write 1 thing you learned.".to_string(),
                "Write 1 question you still have.".to_string(),
                "Rate your understanding: 😊 | 😐 | 😕".to_string(),
            ]
        );
    }

    #[test]
    fn test_title_slide_falls_back_to_lesson() {
        let mut doc = minimal_doc();
        doc.topic = None;
        let slides = build_outline(Some(&doc));
        assert_eq!(slides[0].bullets[0], "Lesson");

        doc.topic = Some(String::new());
        let slides = build_outline(Some(&doc));
        assert_eq!(slides[0].bullets[0], "Lesson");
    }

    #[test]
    fn test_paragraph_section_becomes_single_bullet() {
        let mut doc = minimal_doc();
        doc.sections.push(Section::text(
            "Explanation",
            "Photosynthesis converts light to energy.",
        ));

        let slides = build_outline(Some(&doc));
        assert_eq!(
            headings(&slides),
            vec!["Title Slide", "Big Idea", "Exit Ticket"]
        );
        assert_eq!(
            slides[1].bullets,
            vec!["Photosynthesis converts light to energy.".to_string()]
        );
    }

    #[test]
    fn test_all_sections_present_in_fixed_order() {
        let mut doc = minimal_doc();
        // Deliberately scrambled input order; the outline order is fixed.
        doc.sections = vec![
            Section::bullets("Related Topics", vec!["Respiration".to_string()]),
            Section::bullets("Practice Questions", vec!["Q1".to_string()]),
            Section::text("Explanation", "The big idea."),
            Section::bullets("Helpful Tips", vec!["Tip".to_string()]),
            Section::bullets("Examples", vec!["Leaf".to_string()]),
            Section::bullets("Quick Summary", vec!["Summary".to_string()]),
            Section::bullets("Step-by-step", vec!["Step 1".to_string()]),
        ];

        let slides = build_outline(Some(&doc));
        assert_eq!(
            headings(&slides),
            vec![
                "Title Slide",
                "Big Idea",
                "Steps",
                "Examples",
                "Key Points & Tips",
                "Try It Now",
                "Connect & Explore",
                "Exit Ticket",
            ]
        );
    }

    #[test]
    fn test_key_points_merges_summary_before_tips() {
        let mut doc = minimal_doc();
        doc.sections = vec![
            Section::bullets("Helpful Tips", vec!["C".to_string()]),
            Section::bullets(
                "Quick Summary",
                vec!["A".to_string(), "B".to_string()],
            ),
        ];

        let slides = build_outline(Some(&doc));
        let key_points = &slides[1];
        assert_eq!(key_points.heading, "Key Points & Tips");
        assert_eq!(
            key_points.bullets,
            vec!["A".to_string(), "B".to_string(), "C".to_string()]
        );
    }

    #[test]
    fn test_key_points_from_tips_alone() {
        let mut doc = minimal_doc();
        doc.sections = vec![Section::bullets("Helpful Tips", vec!["C".to_string()])];

        let slides = build_outline(Some(&doc));
        assert_eq!(
            headings(&slides),
            vec!["Title Slide", "Key Points & Tips", "Exit Ticket"]
        );
        assert_eq!(slides[1].bullets, vec!["C".to_string()]);
    }

    #[test]
    fn test_empty_sections_are_skipped() {
        let mut doc = minimal_doc();
        doc.sections = vec![
            Section::text("Explanation", ""),
            Section::bullets("Examples", Vec::new()),
            Section::bullets("Quick Summary", Vec::new()),
            Section::bullets("Helpful Tips", Vec::new()),
        ];

        let slides = build_outline(Some(&doc));
        assert_eq!(headings(&slides), vec!["Title Slide", "Exit Ticket"]);
    }

    #[test]
    fn test_unknown_section_titles_are_ignored() {
        let mut doc = minimal_doc();
        doc.sections = vec![
            Section::bullets("Fun Facts", vec!["Bees see ultraviolet.".to_string()]),
            Section::text("Vocabulary", "chlorophyll"),
        ];

        let slides = build_outline(Some(&doc));
        assert_eq!(headings(&slides), vec!["Title Slide", "Exit Ticket"]);
    }

    #[test]
    fn test_duplicate_title_last_occurrence_wins() {
        let mut doc = minimal_doc();
        doc.sections = vec![
            Section::text("Explanation", "First version."),
            Section::text("Explanation", "Second version."),
        ];

        let slides = build_outline(Some(&doc));
        assert_eq!(slides[1].heading, "Big Idea");
        assert_eq!(slides[1].bullets, vec!["Second version.".to_string()]);
    }

    #[test]
    fn test_duplicate_empty_shadows_earlier_content() {
        let mut doc = minimal_doc();
        doc.sections = vec![
            Section::text("Explanation", "Real content."),
            Section::text("Explanation", ""),
        ];

        let slides = build_outline(Some(&doc));
        assert_eq!(headings(&slides), vec!["Title Slide", "Exit Ticket"]);
    }

    #[test]
    fn test_every_slide_has_bullets() {
        let mut doc = minimal_doc();
        doc.sections = vec![
            Section::text("Explanation", "Idea."),
            Section::bullets("Practice Questions", vec!["Q1".to_string()]),
        ];

        for slide in build_outline(Some(&doc)) {
            assert!(!slide.bullets.is_empty(), "slide {} is empty", slide.heading);
        }
    }

    #[test]
    fn test_build_outline_is_deterministic() {
        let mut doc = minimal_doc();
        doc.sections = vec![
            Section::text("Explanation", "Idea."),
            Section::bullets("Examples", vec!["One".to_string(), "Two".to_string()]),
        ];

        assert_eq!(build_outline(Some(&doc)), build_outline(Some(&doc)));
    }

    #[test]
    fn test_level_text_in_title_slide() {
        let mut doc = minimal_doc();
        doc.level = Level::Text("6th".to_string());
        let slides = build_outline(Some(&doc));
        assert_eq!(slides[0].bullets[1], "Subject: Science | Class: 6th");
    }
}
