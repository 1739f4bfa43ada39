use std::{
    fs,
    io::{self, IsTerminal, Write},
    path::PathBuf,
};

use anyhow::{bail, Context, Result};
use chrono::{Datelike, Local};
use clap::{Args, Parser, Subcommand, ValueEnum};
use client_core::{
    export, load_settings, render::footer_line, AppState, HttpPathwayClient, LoadingProgress,
    LoadingTicker, PathwaySession, PreferenceForm,
};
use shared::{domain::PreferenceField, protocol::LearningPathway};
use tokio::{sync::watch, task::JoinHandle};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "pathway", about = "Generate a personalized learning pathway")]
struct Cli {
    /// Backend base URL; takes precedence over API_BASE_URL and pathway.toml.
    #[arg(long, global = true)]
    api_base_url: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Submit preferences and print the generated pathway.
    Generate(GenerateArgs),
    /// Check that the backend is up.
    Health,
}

#[derive(Args, Debug)]
struct GenerateArgs {
    #[arg(long)]
    learning_style: Option<String>,
    #[arg(long)]
    topic: Option<String>,
    #[arg(long)]
    hobbies: Option<String>,
    #[arg(long)]
    domain: Option<String>,
    #[arg(long, env = "GOOGLE_API_KEY", hide_env_values = true)]
    google_api_key: Option<String>,
    #[arg(long, env = "TAVILY_API_KEY", hide_env_values = true)]
    tavily_api_key: Option<String>,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
    /// Write the pathway to a file instead of stdout.
    #[arg(long)]
    output: Option<PathBuf>,
    /// Do not show the loading indicator.
    #[arg(long)]
    no_progress: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Markdown,
    Html,
}

impl GenerateArgs {
    fn fill_form(&self) -> PreferenceForm {
        let mut form = PreferenceForm::new();
        let values = [
            (PreferenceField::LearningStyle, &self.learning_style),
            (PreferenceField::Topic, &self.topic),
            (PreferenceField::Hobbies, &self.hobbies),
            (PreferenceField::Domain, &self.domain),
            (PreferenceField::GoogleApiKey, &self.google_api_key),
            (PreferenceField::TavilyApiKey, &self.tavily_api_key),
        ];
        for (field, value) in values {
            if let Some(value) = value {
                form.set_field(field, value.clone());
            }
        }
        form
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // stderr carries logs and the loading line; stdout carries only the report.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();
    let cli = Cli::parse();

    let settings = load_settings().with_base_url_override(cli.api_base_url);
    let client =
        HttpPathwayClient::from_settings(&settings).context("invalid backend configuration")?;

    match cli.command {
        Command::Generate(args) => generate(client, args).await,
        Command::Health => health(client).await,
    }
}

async fn generate(client: HttpPathwayClient, args: GenerateArgs) -> Result<()> {
    let preferences = args
        .fill_form()
        .submit()
        .context("preferences incomplete (API keys can also come from GOOGLE_API_KEY / TAVILY_API_KEY)")?;

    let show_progress = !args.no_progress && io::stderr().is_terminal();
    let ticker = show_progress.then(LoadingTicker::start);
    let printer = ticker
        .as_ref()
        .map(|ticker| spawn_progress_printer(ticker.subscribe()));

    let mut session = PathwaySession::new(client);
    let state = session.submit(preferences).await.clone();

    drop(ticker);
    if let Some(printer) = printer {
        printer.abort();
        eprint!("\r\x1b[2K");
    }

    match state {
        AppState::Results { pathway } => write_pathway(&pathway, args.format, args.output),
        AppState::Form { error } => bail!(error.unwrap_or_default()),
        AppState::Loading => bail!("pathway request did not complete"),
    }
}

fn write_pathway(
    pathway: &LearningPathway,
    format: OutputFormat,
    output: Option<PathBuf>,
) -> Result<()> {
    let year = Local::now().year();
    let rendered = match format {
        OutputFormat::Text => {
            let mut text = export::to_text(&client_core::render(pathway));
            text.push_str(&footer_line(year));
            text.push('\n');
            text
        }
        OutputFormat::Markdown => export::to_markdown(pathway),
        OutputFormat::Html => export::to_html_document(pathway, year),
    };

    match output {
        Some(path) => {
            fs::write(&path, rendered)
                .with_context(|| format!("failed to write pathway to '{}'", path.display()))?;
            tracing::info!(path = %path.display(), "pathway written");
            eprintln!("Pathway written to {}", path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(rendered.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}

async fn health(client: HttpPathwayClient) -> Result<()> {
    let status = client
        .health()
        .await
        .with_context(|| format!("health check against {} failed", client.base_url()))?;
    println!(
        "{}: {} (backend {}, version {})",
        client.base_url(),
        status.status,
        status.backend.as_deref().unwrap_or("unknown"),
        status.version.as_deref().unwrap_or("unknown"),
    );
    if !status.is_healthy() {
        bail!("backend reported status '{}'", status.status);
    }
    Ok(())
}

fn spawn_progress_printer(mut rx: watch::Receiver<LoadingProgress>) -> JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            let progress = *rx.borrow_and_update();
            eprint!("\r\x1b[2K{}", progress_line(progress));
            let _ = io::stderr().flush();
            if rx.changed().await.is_err() {
                break;
            }
        }
    })
}

fn progress_line(progress: LoadingProgress) -> String {
    const WIDTH: usize = 20;
    let filled = usize::from(progress.percent()) * WIDTH / 100;
    format!(
        "Crafting your pathway [{}{}] {:>2}% {}",
        "#".repeat(filled),
        "-".repeat(WIDTH - filled),
        progress.percent(),
        progress.message()
    )
}

#[cfg(test)]
mod tests {
    use super::{progress_line, Cli, Command, OutputFormat};
    use clap::Parser;
    use client_core::LoadingProgress;
    use shared::domain::PreferenceField;
    use std::time::Duration;

    #[test]
    fn generate_flags_fill_the_form() {
        let cli = Cli::try_parse_from([
            "pathway",
            "--api-base-url",
            "https://api.example",
            "generate",
            "--topic",
            "quantum computing",
            "--google-api-key",
            "g",
            "--tavily-api-key",
            "t",
            "--format",
            "html",
        ])
        .expect("parse");
        assert_eq!(cli.api_base_url.as_deref(), Some("https://api.example"));
        let Command::Generate(args) = cli.command else {
            panic!("expected generate");
        };
        assert_eq!(args.format, OutputFormat::Html);

        let form = args.fill_form();
        assert_eq!(form.field(PreferenceField::Topic), "quantum computing");
        assert_eq!(form.field(PreferenceField::Domain), "finance");
        let prefs = form.submit().expect("complete");
        assert_eq!(prefs.google_api_key, "g");
    }

    #[test]
    fn progress_line_shows_bar_percent_and_message() {
        let line = progress_line(LoadingProgress::at(Duration::from_millis(4000)));
        assert_eq!(
            line,
            "Crafting your pathway [####----------------] 20% Curating personalized content..."
        );
    }
}
