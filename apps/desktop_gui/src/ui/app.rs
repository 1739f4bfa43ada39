//! Desktop app shell: the form, loading, and results screens.

use std::time::{Duration, Instant};

use chrono::{Datelike, Local};
use client_core::{
    markdown, render,
    render::{
        footer_line, AnnotationKind, APP_NAME, EXPLANATION_HEADING, LINKS_HEADING,
        MILESTONES_HEADING, TRY_AGAIN_LABEL,
    },
    AppPhase, PathwayView, PreferenceForm,
};
use crossbeam_channel::{Receiver, Sender};
use serde::{Deserialize, Serialize};
use shared::domain::{PreferenceField, Preferences};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::{
    events::UiEvent, orchestration::dispatch_backend_command, reducer::GuiModel,
};
use crate::ui::{theme, widgets};

pub const SETTINGS_STORAGE_KEY: &str = "pathway_gui_form";

const SUBMIT_LABEL: &str = "Generate Learning Pathway";

/// Non-secret form values remembered between launches. API keys are never written.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersistedForm {
    pub learning_style: Option<String>,
    pub topic: Option<String>,
    pub hobbies: Option<String>,
    pub domain: Option<String>,
}

impl PersistedForm {
    pub fn capture(form: &PreferenceForm) -> Self {
        let keep = |field| Some(form.field(field).to_string());
        Self {
            learning_style: keep(PreferenceField::LearningStyle),
            topic: keep(PreferenceField::Topic),
            hobbies: keep(PreferenceField::Hobbies),
            domain: keep(PreferenceField::Domain),
        }
    }

    /// Starts from the stock defaults and overlays whatever was remembered.
    pub fn restore(self) -> PreferenceForm {
        let mut form = PreferenceForm::from_preferences(Preferences::default());
        let saved = [
            (PreferenceField::LearningStyle, self.learning_style),
            (PreferenceField::Topic, self.topic),
            (PreferenceField::Hobbies, self.hobbies),
            (PreferenceField::Domain, self.domain),
        ];
        for (field, value) in saved {
            if let Some(value) = value {
                form.set_field(field, value);
            }
        }
        form
    }
}

pub struct PathwayApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    model: GuiModel,
    view: Option<PathwayView>,
    footer: String,
}

impl PathwayApp {
    pub fn new(
        ctx: &egui::Context,
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
        persisted: Option<PersistedForm>,
    ) -> Self {
        theme::apply(ctx);
        let form = persisted.unwrap_or_default().restore();
        let mut app = Self {
            cmd_tx,
            ui_rx,
            model: GuiModel::new(form),
            view: None,
            footer: footer_line(Local::now().year()),
        };
        dispatch_backend_command(
            &app.cmd_tx,
            BackendCommand::CheckHealth,
            &mut app.model.status,
        );
        app
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            self.model.reduce(event);
        }
        match self.model.machine.pathway() {
            Some(pathway) if self.view.is_none() => self.view = Some(render(pathway)),
            Some(_) => {}
            None => self.view = None,
        }
    }

    fn submit(&mut self) {
        let Some(cmd) = self.model.submit(Instant::now()) else {
            return;
        };
        if !dispatch_backend_command(&self.cmd_tx, cmd, &mut self.model.status) {
            self.model.dispatch_failed();
        }
    }

    fn show_footer(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("footer")
            .frame(egui::Frame::NONE.inner_margin(egui::Margin::symmetric(12, 6)))
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.weak(&self.footer);
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.weak(&self.model.status);
                    });
                });
            });
    }

    fn show_form_screen(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                let avail = ui.available_size();
                let card_width = avail.x.clamp(theme::CARD_MIN_WIDTH, theme::CONTENT_MAX_WIDTH);
                ui.add_space((avail.y * 0.05).clamp(12.0, 48.0));

                ui.vertical_centered(|ui| {
                    ui.set_width(card_width);
                    ui.style_mut().spacing.item_spacing = egui::vec2(10.0, 10.0);

                    ui.heading(egui::RichText::new(APP_NAME).size(28.0).color(theme::ACCENT_SOFT));
                    ui.label(
                        "Imagine learning any topic effortlessly, tailored exactly to you. \
                         Enter your preferences and the assistant does the rest.",
                    );
                    ui.add_space(6.0);

                    let banner_line = self.model.banner.as_ref().map(|err| err.status_line());
                    if let Some(line) = banner_line {
                        if widgets::error_banner(ui, &line, true) {
                            self.model.banner = None;
                        }
                    }
                    if let Some(error) = self.model.machine.error() {
                        widgets::error_banner(ui, error, false);
                    }

                    let mut submit_requested = false;
                    widgets::card(ui, |ui| {
                        ui.with_layout(egui::Layout::top_down(egui::Align::Min), |ui| {
                            for field in PreferenceField::ALL {
                                if field == PreferenceField::GoogleApiKey {
                                    ui.add_space(6.0);
                                    ui.label(egui::RichText::new("API Keys Required").strong());
                                    ui.weak(
                                        "Keys are sent directly to the backend with this request and are not stored.",
                                    );
                                }
                                ui.label(egui::RichText::new(field.label()).strong());
                                let response = ui.add(
                                    egui::TextEdit::singleline(self.model.form.field_mut(field))
                                        .hint_text(field.hint())
                                        .password(field.is_secret())
                                        .desired_width(f32::INFINITY),
                                );
                                if response.lost_focus()
                                    && ui.input(|i| i.key_pressed(egui::Key::Enter))
                                {
                                    submit_requested = true;
                                }
                            }
                        });
                    });

                    if let Some(validation) = &self.model.validation {
                        ui.colored_label(theme::ERROR_STROKE, validation);
                    }

                    let button = egui::Button::new(
                        egui::RichText::new(SUBMIT_LABEL).strong().size(18.0),
                    )
                    .fill(theme::ACCENT)
                    .min_size(egui::vec2(ui.available_width(), 44.0));
                    if ui.add(button).clicked() {
                        submit_requested = true;
                    }

                    if submit_requested {
                        self.submit();
                    }
                });
            });
        });
    }

    fn show_loading_screen(&self, ctx: &egui::Context) {
        let Some(progress) = self.model.loading_progress(Instant::now()) else {
            return;
        };
        egui::CentralPanel::default().show(ctx, |ui| {
            let avail = ui.available_size();
            ui.add_space((avail.y * 0.3).clamp(24.0, 220.0));
            ui.vertical_centered(|ui| {
                ui.set_width(avail.x.clamp(320.0, 480.0));
                ui.add(egui::Spinner::new().size(48.0));
                ui.add_space(12.0);
                ui.heading("Crafting Your Pathway");
                ui.label(egui::RichText::new(progress.message()).color(theme::ACCENT_SOFT));
                ui.add_space(8.0);
                ui.add(
                    egui::ProgressBar::new(progress.fraction())
                        .show_percentage()
                        .fill(theme::ACCENT),
                );
            });
        });
    }

    fn show_results_screen(&mut self, ctx: &egui::Context) {
        let Some(view) = &self.view else {
            return;
        };
        let mut try_again = false;

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                let width = ui.available_width().min(theme::CONTENT_MAX_WIDTH);
                ui.vertical_centered(|ui| {
                    ui.set_width(width);
                    ui.style_mut().spacing.item_spacing = egui::vec2(8.0, 8.0);
                    ui.add_space(16.0);
                    ui.heading(egui::RichText::new(&view.title).size(30.0).color(theme::ACCENT_SOFT));
                    ui.label(egui::RichText::new(&view.introduction).size(16.0));
                    ui.add_space(12.0);

                    ui.with_layout(egui::Layout::top_down(egui::Align::Min), |ui| {
                        show_pathway(ui, view);
                    });

                    ui.add_space(16.0);
                    let button = egui::Button::new(
                        egui::RichText::new(TRY_AGAIN_LABEL).strong().size(16.0),
                    )
                    .fill(theme::ACCENT)
                    .min_size(egui::vec2(220.0, 40.0));
                    if ui.add(button).clicked() {
                        try_again = true;
                    }
                    ui.add_space(24.0);
                });
            });
        });

        if try_again && self.model.try_again() {
            self.view = None;
        }
    }
}

fn show_pathway(ui: &mut egui::Ui, view: &PathwayView) {
    for phase in &view.phases {
        widgets::card(ui, |ui| {
            ui.label(egui::RichText::new(&phase.title).size(22.0).strong());
            if !phase.description.is_empty() {
                ui.label(egui::RichText::new(&phase.description).italics().weak());
            }
            for step in &phase.steps {
                ui.add_space(6.0);
                ui.horizontal_wrapped(|ui| {
                    ui.label(egui::RichText::new(&step.title).size(17.0).strong());
                    ui.label(
                        egui::RichText::new(step.kind.label())
                            .small()
                            .color(theme::ACCENT_SOFT),
                    );
                });
                widgets::markdown(ui, &step.content);
                for annotation in &step.annotations {
                    let color = match annotation.kind {
                        AnnotationKind::Benefit => theme::BENEFIT,
                        AnnotationKind::Action => theme::ACTION,
                    };
                    ui.horizontal_wrapped(|ui| {
                        ui.label(egui::RichText::new(annotation.kind.label()).strong().color(color));
                        ui.label(egui::RichText::new(&annotation.text).color(color));
                    });
                }
            }
        });
    }

    widgets::card(ui, |ui| {
        ui.label(egui::RichText::new(EXPLANATION_HEADING).size(20.0).strong());
        for (index, section) in view.explanations.iter().enumerate() {
            if index > 0 {
                ui.separator();
            }
            ui.label(egui::RichText::new(&section.title).size(17.0).strong());
            widgets::markdown(ui, &section.content);
        }
    });

    widgets::card(ui, |ui| {
        ui.label(egui::RichText::new(MILESTONES_HEADING).size(20.0).strong());
        for milestone in &view.milestones {
            ui.horizontal_wrapped(|ui| {
                ui.label(egui::RichText::new(format!("{}:", milestone.year)).strong());
                ui.label(&milestone.description);
            });
        }
    });

    widgets::card(ui, |ui| {
        ui.label(egui::RichText::new(&view.next_steps.title).size(20.0).strong());
        for item in &view.next_steps.items {
            ui.label(egui::RichText::new(&item.title).strong());
            ui.label(&item.description);
        }
    });

    widgets::card(ui, |ui| {
        ui.label(egui::RichText::new(LINKS_HEADING).size(20.0).strong());
        for link in &view.links {
            if markdown::is_web_url(link) {
                ui.hyperlink(link);
            } else {
                ui.label(link);
            }
        }
    });
}

impl eframe::App for PathwayApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();
        self.show_footer(ctx);

        match self.model.machine.phase() {
            AppPhase::Form => self.show_form_screen(ctx),
            AppPhase::Loading => self.show_loading_screen(ctx),
            AppPhase::Results => self.show_results_screen(ctx),
        }

        if self.model.machine.phase() == AppPhase::Loading {
            ctx.request_repaint_after(Duration::from_millis(50));
        } else {
            ctx.request_repaint_after(Duration::from_millis(200));
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        let persisted = PersistedForm::capture(&self.model.form);
        if let Ok(serialized) = serde_json::to_string(&persisted) {
            storage.set_string(SETTINGS_STORAGE_KEY, serialized);
        }
    }
}
