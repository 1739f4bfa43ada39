//! Runtime bridge between UI command queue and backend event intake.

use std::{sync::Arc, thread};

use client_core::{dispatch, AppEvent, ClientSettings, HttpPathwayClient};
use crossbeam_channel::{Receiver, Sender};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiErrorContext, UiEvent};

/// Starts the backend worker thread. The thread owns a tokio runtime and the
/// HTTP client; each command runs as its own task so a slow generate request
/// never delays a health check.
pub fn launch(settings: ClientSettings, cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>) {
    thread::spawn(move || {
        let _ = ui_tx.try_send(UiEvent::Info("Backend worker starting...".to_string()));
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::Error(UiError::new(
                    UiErrorContext::BackendStartup,
                    format!("failed to build runtime: {err}"),
                )));
                tracing::error!("failed to build backend runtime: {err}");
                return;
            }
        };

        let client = match HttpPathwayClient::from_settings(&settings) {
            Ok(client) => Arc::new(client),
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::Error(UiError::new(
                    UiErrorContext::BackendStartup,
                    err.to_string(),
                )));
                tracing::error!("invalid backend configuration: {err}");
                return;
            }
        };
        tracing::info!(base_url = client.base_url(), "backend worker ready");
        let _ = ui_tx.try_send(UiEvent::Info(format!("Backend: {}", client.base_url())));

        while let Ok(cmd) = cmd_rx.recv() {
            let client = Arc::clone(&client);
            let ui_tx = ui_tx.clone();
            runtime.spawn(async move { handle_command(client, cmd, ui_tx).await });
        }
        tracing::info!("ui command channel closed; backend worker exiting");
    });
}

async fn handle_command(
    client: Arc<HttpPathwayClient>,
    cmd: BackendCommand,
    ui_tx: Sender<UiEvent>,
) {
    let event = match cmd {
        BackendCommand::Generate { preferences } => match dispatch(&client, &preferences).await {
            AppEvent::Succeeded(pathway) => UiEvent::PathwayReady(pathway),
            AppEvent::Failed(message) => UiEvent::GenerationFailed(message),
            other => {
                tracing::warn!(event = ?other, "unexpected dispatch outcome");
                return;
            }
        },
        BackendCommand::CheckHealth => match client.health().await {
            Ok(status) => UiEvent::BackendHealth(status),
            Err(err) => UiEvent::Error(UiError::new(
                UiErrorContext::HealthCheck,
                err.user_message(),
            )),
        },
    };

    if ui_tx.send(event).is_err() {
        tracing::debug!("ui event channel closed; dropping backend result");
    }
}
