use clap::{Parser, builder::styling};
use anyhow::{Context, Result};
use colored::*;
use oauthprobe_core::contracts::DEFAULT_SCOPES;
use oauthprobe_provider_google::resource_manager_client::DEFAULT_RESOURCE_MANAGER_URL;
use oauthprobe_provider_google::{ResourceManagerClient, ServiceAccountCredential};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod probe;
mod report;

const STYLES: styling::Styles = styling::Styles::styled()
    .header(styling::AnsiColor::Green.on_default().bold())
    .usage(styling::AnsiColor::Green.on_default().bold())
    .literal(styling::AnsiColor::Cyan.on_default().bold())
    .placeholder(styling::AnsiColor::Cyan.on_default());

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "oauthprobe: checks whether OAuth clients can be created programmatically",
    long_about = "Authenticates with a Google Cloud service account key, confirms the key works and prints the manual steps for creating an iOS OAuth client, since no public API exists for it.",
    styles = STYLES
)]
struct Args {
    #[arg(short, long, default_value = probe::DEFAULT_KEY_PATH, help = "Path to the service account key")]
    key_file: PathBuf,

    #[arg(short, long = "scope", help = "OAuth scope to request; repeat for several (default: cloud-platform, cloudplatformprojects)")]
    scopes: Vec<String>,

    #[arg(long, default_value_t = false, help = "Look the project up in Cloud Resource Manager before printing the report")]
    confirm_project: bool,

    #[arg(long, default_value = DEFAULT_RESOURCE_MANAGER_URL, help = "Base URL of Cloud Resource Manager")]
    resource_manager_url: String,

    #[arg(short, long, default_value_t = false, help = "Log token exchange details to stderr")]
    verbose: bool,
}

impl Args {
    fn scopes(&self) -> Vec<String> {
        if self.scopes.is_empty() {
            DEFAULT_SCOPES.iter().map(|s| s.to_string()).collect()
        } else {
            self.scopes.clone()
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Rewrites a leading em dash (as inserted by some terminals' autocorrect) into
/// the equivalent hyphen flag.
fn normalize_arg(arg: String) -> String {
    match arg.strip_prefix('—') {
        Some(suffix) if suffix.chars().count() == 1 => format!("-{}", suffix),
        Some(suffix) => format!("--{}", suffix),
        None => arg,
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse_from(std::env::args().map(normalize_arg));
    init_tracing(args.verbose);

    let key = oauthprobe_provider_google::load(&args.key_file)?;
    let project_id = key.project_id.clone();
    let credential = ServiceAccountCredential::authenticate(key, args.scopes());

    let mut stdout = io::stdout();
    let token = probe::acquire_token(&mut stdout, &project_id, &credential).await?;

    if args.confirm_project {
        let project = ResourceManagerClient::new(args.resource_manager_url.as_str())
            .get_project(&token, &project_id)
            .await
            .with_context(|| format!("failed to confirm project {}", project_id))?;
        println!(
            "\n{} {}",
            "✅ Project confirmed:".green(),
            project.name.as_deref().unwrap_or(&project.project_id)
        );
        println!(
            "   Project Number: {}",
            project.project_number.as_deref().unwrap_or("unknown")
        );
    }

    report::report(&project_id)?;
    stdout.flush()?;
    Ok(())
}
