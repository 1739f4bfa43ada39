//! Text, markdown and HTML output of a rendered pathway for the CLI.

use std::fmt::Write as _;

use shared::protocol::LearningPathway;

use crate::{
    markdown::{self, Block, ListMarker, Span},
    render::{
        footer_line, PathwayView, EXPLANATION_HEADING, LINKS_HEADING, MILESTONES_HEADING,
    },
};

pub fn to_text(view: &PathwayView) -> String {
    let mut out = String::new();

    push_title(&mut out, &view.title, '=');
    if !view.introduction.trim().is_empty() {
        let _ = writeln!(out, "{}\n", view.introduction.trim());
    }

    for phase in &view.phases {
        push_title(&mut out, &phase.title, '-');
        if !phase.description.trim().is_empty() {
            let _ = writeln!(out, "{}\n", phase.description.trim());
        }
        for (index, step) in phase.steps.iter().enumerate() {
            let _ = writeln!(out, "  {}. {} [{}]", index + 1, step.title, step.kind.label());
            write_blocks(&mut out, &step.content, "     ");
            for annotation in &step.annotations {
                let _ = writeln!(out, "     {} {}", annotation.kind.label(), annotation.text);
            }
            out.push('\n');
        }
    }

    if !view.explanations.is_empty() {
        push_title(&mut out, EXPLANATION_HEADING, '-');
        for card in &view.explanations {
            let _ = writeln!(out, "  {}", card.title);
            write_blocks(&mut out, &card.content, "    ");
            out.push('\n');
        }
    }

    if !view.milestones.is_empty() {
        push_title(&mut out, MILESTONES_HEADING, '-');
        for milestone in &view.milestones {
            let _ = writeln!(out, "  - {}", milestone.line());
        }
        out.push('\n');
    }

    if !view.next_steps.items.is_empty() {
        push_title(&mut out, &view.next_steps.title, '-');
        for item in &view.next_steps.items {
            let _ = writeln!(out, "  - {}: {}", item.title, item.description);
        }
        out.push('\n');
    }

    if !view.links.is_empty() {
        push_title(&mut out, LINKS_HEADING, '-');
        for (index, link) in view.links.iter().enumerate() {
            let _ = writeln!(out, "  {}. {link}", index + 1);
        }
        out.push('\n');
    }

    out
}

fn push_title(out: &mut String, title: &str, underline: char) {
    let title = title.trim();
    let _ = writeln!(out, "{title}");
    let _ = writeln!(
        out,
        "{}\n",
        underline.to_string().repeat(title.chars().count().max(3))
    );
}

fn write_blocks(out: &mut String, blocks: &[Block], indent: &str) {
    for block in blocks {
        match block {
            Block::Heading { spans, .. } | Block::Paragraph(spans) => {
                let _ = writeln!(out, "{indent}{}", spans_plain(spans));
            }
            Block::ListItem {
                depth,
                marker,
                spans,
            } => {
                let nesting = "  ".repeat(*depth);
                let bullet = match marker {
                    ListMarker::Bullet => "•".to_string(),
                    ListMarker::Ordered(n) => format!("{n}."),
                };
                let _ = writeln!(out, "{indent}{nesting}{bullet} {}", spans_plain(spans));
            }
            Block::CodeBlock { code, .. } => {
                for line in code.lines() {
                    let _ = writeln!(out, "{indent}    {line}");
                }
            }
            Block::Quote(spans) => {
                let _ = writeln!(out, "{indent}> {}", spans_plain(spans));
            }
            Block::Rule => {
                let _ = writeln!(out, "{indent}----");
            }
        }
    }
}

fn spans_plain(spans: &[Span]) -> String {
    let mut text = String::new();
    for span in spans {
        if span.style.code {
            let _ = write!(text, "`{}`", span.text);
        } else {
            text.push_str(&span.text);
        }
        if let Some(link) = &span.link {
            if link != span.text.trim() {
                let _ = write!(text, " ({link})");
            }
        }
    }
    text
}

pub fn to_markdown(pathway: &LearningPathway) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "# {}\n", pathway.title.trim());
    if !pathway.introduction.trim().is_empty() {
        let _ = writeln!(out, "{}\n", pathway.introduction.trim());
    }

    for phase in &pathway.phases {
        let _ = writeln!(out, "## {}\n", phase.title.trim());
        if !phase.description.trim().is_empty() {
            let _ = writeln!(out, "_{}_\n", phase.description.trim());
        }
        for (index, step) in phase.steps.iter().enumerate() {
            let _ = writeln!(
                out,
                "### {}. {} ({})\n",
                index + 1,
                step.title.trim(),
                step.kind.label()
            );
            let _ = writeln!(out, "{}\n", step.content.trim());
            if let Some(benefit) = step.benefit.as_deref().filter(|b| !b.trim().is_empty()) {
                let _ = writeln!(out, "> **Benefit:** {}\n", benefit.trim());
            }
            if let Some(action) = step
                .practical_focus
                .as_deref()
                .filter(|a| !a.trim().is_empty())
            {
                let _ = writeln!(out, "> **Action:** {}\n", action.trim());
            }
        }
    }

    if !pathway.explanation_and_kickstart_examples.is_empty() {
        let _ = writeln!(out, "## {EXPLANATION_HEADING}\n");
        for section in &pathway.explanation_and_kickstart_examples {
            let _ = writeln!(out, "### {}\n\n{}\n", section.title.trim(), section.content.trim());
        }
    }

    if !pathway.history_and_milestones.is_empty() {
        let _ = writeln!(out, "## {MILESTONES_HEADING}\n");
        for milestone in &pathway.history_and_milestones {
            let _ = writeln!(out, "- **{}:** {}", milestone.year, milestone.description);
        }
        out.push('\n');
    }

    if !pathway.next_steps.steps.is_empty() {
        let _ = writeln!(out, "## {}\n", pathway.next_steps.title.trim());
        for item in &pathway.next_steps.steps {
            let _ = writeln!(out, "- **{}**: {}", item.title, item.description);
        }
        out.push('\n');
    }

    if !pathway.relevant_links.is_empty() {
        let _ = writeln!(out, "## {LINKS_HEADING}\n");
        for link in &pathway.relevant_links {
            let _ = writeln!(out, "- <{link}>");
        }
        out.push('\n');
    }

    out
}

/// Standalone HTML page. Markdown fields go through the markdown renderer;
/// every other string is escaped.
pub fn to_html_document(pathway: &LearningPathway, footer_year: i32) -> String {
    let mut out = String::new();
    let title = escape_html(&pathway.title);
    let _ = writeln!(
        out,
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n</head>\n<body>"
    );
    let _ = writeln!(out, "<header>\n<h1>{title}</h1>");
    let _ = writeln!(out, "<p class=\"introduction\">{}</p>\n</header>", escape_html(&pathway.introduction));

    for phase in &pathway.phases {
        let _ = writeln!(out, "<section class=\"phase\">");
        let _ = writeln!(out, "<h2>{}</h2>", escape_html(&phase.title));
        let _ = writeln!(out, "<p class=\"description\"><em>{}</em></p>", escape_html(&phase.description));
        let _ = writeln!(out, "<ol class=\"steps\">");
        for step in &phase.steps {
            let _ = writeln!(
                out,
                "<li class=\"step step-{}\">\n<h4>{}</h4>\n<div class=\"markdown-content\">\n{}</div>",
                step.kind.label().to_ascii_lowercase(),
                escape_html(&step.title),
                markdown::to_html(&step.content)
            );
            if let Some(benefit) = step.benefit.as_deref().filter(|b| !b.trim().is_empty()) {
                let _ = writeln!(
                    out,
                    "<p class=\"benefit\"><strong>Benefit:</strong> {}</p>",
                    escape_html(benefit.trim())
                );
            }
            if let Some(action) = step
                .practical_focus
                .as_deref()
                .filter(|a| !a.trim().is_empty())
            {
                let _ = writeln!(
                    out,
                    "<p class=\"action\"><strong>Action:</strong> {}</p>",
                    escape_html(action.trim())
                );
            }
            let _ = writeln!(out, "</li>");
        }
        let _ = writeln!(out, "</ol>\n</section>");
    }

    let _ = writeln!(out, "<section class=\"explanations\">\n<h2>{EXPLANATION_HEADING}</h2>");
    for section in &pathway.explanation_and_kickstart_examples {
        let _ = writeln!(
            out,
            "<div class=\"explanation\">\n<h4>{}</h4>\n<div class=\"markdown-content\">\n{}</div>\n</div>",
            escape_html(&section.title),
            markdown::to_html(&section.content)
        );
    }
    let _ = writeln!(out, "</section>");

    let _ = writeln!(out, "<section class=\"milestones\">\n<h2>{MILESTONES_HEADING}</h2>\n<ul>");
    for milestone in &pathway.history_and_milestones {
        let _ = writeln!(
            out,
            "<li><strong>{}:</strong> {}</li>",
            milestone.year,
            escape_html(&milestone.description)
        );
    }
    let _ = writeln!(out, "</ul>\n</section>");

    let _ = writeln!(
        out,
        "<section class=\"next-steps\">\n<h2>{}</h2>\n<ul>",
        escape_html(&pathway.next_steps.title)
    );
    for item in &pathway.next_steps.steps {
        let _ = writeln!(
            out,
            "<li><h4>{}</h4><p>{}</p></li>",
            escape_html(&item.title),
            escape_html(&item.description)
        );
    }
    let _ = writeln!(out, "</ul>\n</section>");

    let _ = writeln!(out, "<section class=\"links\">\n<h2>{LINKS_HEADING}</h2>\n<ul>");
    for link in &pathway.relevant_links {
        let text = escape_html(link);
        if markdown::is_web_url(link) {
            let _ = writeln!(
                out,
                "<li><a href=\"{text}\" target=\"_blank\" rel=\"noopener noreferrer\">{text}</a></li>"
            );
        } else {
            let _ = writeln!(out, "<li>{text}</li>");
        }
    }
    let _ = writeln!(out, "</ul>\n</section>");

    let _ = writeln!(
        out,
        "<footer><p>{}</p></footer>\n</body>\n</html>",
        escape_html(&footer_line(footer_year))
    );
    out
}

pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
#[path = "tests/export_tests.rs"]
mod tests;
