use super::{escape_html, to_html_document, to_markdown, to_text};
use crate::render::render;
use shared::{
    domain::StepKind,
    protocol::{LearningPathway, NextStepsSection, PathwayPhase, PathwayStep},
};

fn pathway() -> LearningPathway {
    LearningPathway {
        title: "Rust <for> Chefs".to_string(),
        introduction: "Cook with ownership.".to_string(),
        phases: vec![PathwayPhase {
            title: "Mise en place".to_string(),
            description: "Prepare".to_string(),
            steps: vec![
                PathwayStep {
                    title: "Borrowing".to_string(),
                    kind: StepKind::Concept,
                    content: "Lend the **knife**.\n\n- sharpen\n- return".to_string(),
                    benefit: Some("Fewer accidents".to_string()),
                    practical_focus: None,
                },
                PathwayStep {
                    title: "Build a menu".to_string(),
                    kind: StepKind::Project,
                    content: "Write `main`.".to_string(),
                    benefit: None,
                    practical_focus: Some("Ship it".to_string()),
                },
            ],
        }],
        explanation_and_kickstart_examples: Vec::new(),
        history_and_milestones: Vec::new(),
        next_steps: NextStepsSection::default(),
        relevant_links: vec!["https://doc.rust-lang.org/book/?a=1&b=2".to_string()],
    }
}

#[test]
fn text_output_lists_steps_with_annotations() {
    let text = to_text(&render(&pathway()));
    assert!(text.starts_with("Rust <for> Chefs\n================"));
    assert!(text.contains("  1. Borrowing [Concept]"));
    assert!(text.contains("     Lend the knife."));
    assert!(text.contains("     • sharpen"));
    assert!(text.contains("     Benefit: Fewer accidents"));
    assert!(text.contains("  2. Build a menu [Project]"));
    assert!(text.contains("     Write `main`."));
    assert!(text.contains("     Action: Ship it"));
    assert!(!text.contains("History and Milestones"));
    assert!(text.contains("  1. https://doc.rust-lang.org/book/?a=1&b=2"));
}

#[test]
fn markdown_output_keeps_content_verbatim() {
    let md = to_markdown(&pathway());
    assert!(md.starts_with("# Rust <for> Chefs\n"));
    assert!(md.contains("### 1. Borrowing (Concept)"));
    assert!(md.contains("Lend the **knife**."));
    assert!(md.contains("> **Benefit:** Fewer accidents"));
    assert!(md.contains("> **Action:** Ship it"));
    assert!(md.contains("- <https://doc.rust-lang.org/book/?a=1&b=2>"));
}

#[test]
fn html_document_escapes_plain_fields_and_renders_markdown() {
    let html = to_html_document(&pathway(), 2026);
    assert!(html.contains("<h1>Rust &lt;for&gt; Chefs</h1>"));
    assert!(html.contains("<strong>knife</strong>"));
    assert!(html.contains("<strong>Benefit:</strong> Fewer accidents"));
    assert_eq!(html.matches("class=\"benefit\"").count(), 1);
    assert_eq!(html.matches("<section class=\"phase\">").count(), 1);
    assert!(html.contains("href=\"https://doc.rust-lang.org/book/?a=1&amp;b=2\""));
    assert!(html.contains("© 2026 Adaptive Learning Agent."));
}

#[test]
fn escapes_all_special_characters() {
    assert_eq!(
        escape_html(r#"<a href="x">Tom & Jerry's</a>"#),
        "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
    );
}

#[test]
fn html_document_neutralizes_markup_and_script_links() {
    let mut pathway = pathway();
    pathway.phases[0].steps[0].content =
        "hello <script>alert(1)</script> <img src=x onerror=alert(2)>".to_string();
    pathway.relevant_links = vec![
        "javascript:alert(3)".to_string(),
        "https://example.com/ok".to_string(),
    ];

    let html = to_html_document(&pathway, 2026);
    assert!(!html.contains("<script>"), "{html}");
    assert!(!html.contains("<img"), "{html}");
    assert!(!html.contains("href=\"javascript:"), "{html}");
    assert!(html.contains("<li>javascript:alert(3)</li>"), "{html}");
    assert!(html.contains("<a href=\"https://example.com/ok\""), "{html}");
}
