mod backend_bridge;
mod controller;
mod ui;

use clap::Parser;
use client_core::{load_settings, render::APP_NAME};
use crossbeam_channel::bounded;
use tracing_subscriber::EnvFilter;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::ui::{PathwayApp, PersistedForm, SETTINGS_STORAGE_KEY};

#[derive(Parser, Debug)]
#[command(name = "pathway_gui", about = "Desktop front end for the learning pathway generator")]
struct Args {
    /// Backend base URL; takes precedence over API_BASE_URL and pathway.toml.
    #[arg(long)]
    api_base_url: Option<String>,
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    let args = Args::parse();
    let settings = load_settings().with_base_url_override(args.api_base_url);

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(64);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(256);
    backend_bridge::runtime::launch(settings, cmd_rx, ui_tx);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(APP_NAME)
            .with_inner_size([1024.0, 820.0])
            .with_min_inner_size([560.0, 520.0]),
        ..Default::default()
    };
    eframe::run_native(
        APP_NAME,
        options,
        Box::new(|cc| {
            let persisted = cc.storage.and_then(|storage| {
                storage
                    .get_string(SETTINGS_STORAGE_KEY)
                    .and_then(|text| serde_json::from_str::<PersistedForm>(&text).ok())
            });
            Ok(Box::new(PathwayApp::new(&cc.egui_ctx, cmd_tx, ui_rx, persisted)))
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::Args;
    use clap::Parser;
    use crossbeam_channel::bounded;

    use crate::backend_bridge::commands::BackendCommand;
    use crate::controller::orchestration::dispatch_backend_command;

    #[test]
    fn parses_base_url_override() {
        let args = Args::try_parse_from(["pathway_gui", "--api-base-url", "http://10.0.0.5:5000"])
            .expect("parse");
        assert_eq!(args.api_base_url.as_deref(), Some("http://10.0.0.5:5000"));
    }

    #[test]
    fn reports_full_and_disconnected_command_queue() {
        let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(1);
        let mut status = String::new();
        assert!(dispatch_backend_command(&cmd_tx, BackendCommand::CheckHealth, &mut status));
        assert!(!dispatch_backend_command(&cmd_tx, BackendCommand::CheckHealth, &mut status));
        assert!(status.contains("queue is full"));

        drop(cmd_rx);
        assert!(!dispatch_backend_command(&cmd_tx, BackendCommand::CheckHealth, &mut status));
        assert!(status.contains("disconnected"));
    }
}
