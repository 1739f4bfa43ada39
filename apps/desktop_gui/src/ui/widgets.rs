//! Reusable drawing helpers: cards, banners, and markdown blocks.

use client_core::markdown::{Block, ListMarker, Span};

use crate::ui::theme;

pub fn card<R>(ui: &mut egui::Ui, add_contents: impl FnOnce(&mut egui::Ui) -> R) -> R {
    egui::Frame::NONE
        .fill(theme::card_fill(ui))
        .corner_radius(12.0)
        .stroke(egui::Stroke::new(
            1.0,
            ui.visuals().widgets.noninteractive.bg_stroke.color,
        ))
        .inner_margin(egui::Margin::symmetric(14, 12))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            add_contents(ui)
        })
        .inner
}

/// Red banner; returns true when dismissed.
pub fn error_banner(ui: &mut egui::Ui, message: &str, dismissable: bool) -> bool {
    let mut dismissed = false;
    egui::Frame::NONE
        .fill(theme::ERROR_FILL)
        .stroke(egui::Stroke::new(1.0, theme::ERROR_STROKE))
        .corner_radius(8.0)
        .inner_margin(egui::Margin::symmetric(10, 8))
        .show(ui, |ui| {
            ui.horizontal_wrapped(|ui| {
                ui.label(egui::RichText::new(message).color(egui::Color32::WHITE));
                if dismissable {
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("Dismiss").clicked() {
                            dismissed = true;
                        }
                    });
                }
            });
        });
    dismissed
}

pub fn markdown(ui: &mut egui::Ui, blocks: &[Block]) {
    for block in blocks {
        match block {
            Block::Heading { level, spans } => {
                ui.add_space(4.0);
                spans_line(ui, spans, Some(theme::heading_size(*level)));
            }
            Block::Paragraph(spans) => spans_line(ui, spans, None),
            Block::ListItem {
                depth,
                marker,
                spans,
            } => {
                ui.horizontal_wrapped(|ui| {
                    ui.add_space(theme::LIST_INDENT * (*depth as f32 + 1.0));
                    let marker = match marker {
                        ListMarker::Bullet => "•".to_string(),
                        ListMarker::Ordered(n) => format!("{n}."),
                    };
                    ui.label(marker);
                    spans_inline(ui, spans, None);
                });
            }
            Block::CodeBlock { code, .. } => {
                egui::Frame::NONE
                    .fill(ui.visuals().extreme_bg_color)
                    .corner_radius(6.0)
                    .inner_margin(egui::Margin::symmetric(10, 8))
                    .show(ui, |ui| {
                        ui.set_width(ui.available_width());
                        ui.label(egui::RichText::new(code).monospace());
                    });
            }
            Block::Quote(spans) => {
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new("▌").color(theme::ACCENT_SOFT));
                    ui.vertical(|ui| spans_line(ui, spans, None));
                });
            }
            Block::Rule => {
                ui.separator();
            }
        }
    }
}

fn spans_line(ui: &mut egui::Ui, spans: &[Span], size: Option<f32>) {
    ui.horizontal_wrapped(|ui| spans_inline(ui, spans, size));
}

fn spans_inline(ui: &mut egui::Ui, spans: &[Span], size: Option<f32>) {
    ui.spacing_mut().item_spacing.x = 0.0;
    for span in spans {
        let text = span_text(span, size);
        match &span.link {
            Some(url) => {
                ui.hyperlink_to(text, url);
            }
            None => {
                ui.label(text);
            }
        }
    }
}

fn span_text(span: &Span, size: Option<f32>) -> egui::RichText {
    let mut text = egui::RichText::new(&span.text);
    if let Some(size) = size {
        text = text.size(size).strong();
    }
    if span.style.strong {
        text = text.strong();
    }
    if span.style.emphasis {
        text = text.italics();
    }
    if span.style.strikethrough {
        text = text.strikethrough();
    }
    if span.style.code {
        text = text.code();
    }
    text
}
