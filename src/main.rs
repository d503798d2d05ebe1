use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use drafterino::analyzer::BumpClassifier;
use drafterino::cli::{run_release_workflow, WorkflowArgs};
use drafterino::config::load_config;
use drafterino::git::{Git2Repository, Repository, UnavailableRepository};
use drafterino::hosting::github::GITHUB_API_URL;
use drafterino::hosting::{GitHubClient, PullRequestSource, RepoContext};
use drafterino::output::write_outputs;
use drafterino::scanner::DEFAULT_CONCURRENCY;
use drafterino::ui;

#[derive(clap::Parser)]
#[command(
    name = "drafterino",
    version,
    about = "Compute the next version and draft release notes from pull request labels"
)]
struct Args {
    #[arg(short, long, help = "Configuration file (YAML, or TOML with a .toml extension)")]
    config: Option<PathBuf>,

    #[arg(long, env = "CONFIG", help = "Inline YAML configuration")]
    config_text: Option<String>,

    #[arg(long, default_value = ".", help = "Path inside the repository to inspect")]
    repo: PathBuf,

    #[arg(long, env = "GITHUB_EVENT_PATH", help = "Webhook event payload (JSON)")]
    event_path: Option<PathBuf>,

    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true, help = "API bearer token")]
    token: Option<String>,

    #[arg(long, env = "GITHUB_API_URL", default_value = GITHUB_API_URL, help = "API base URL")]
    api_url: String,

    #[arg(long, env = "FILES", help = "Newline-separated list of release files")]
    files: Option<String>,

    #[arg(long, env = "GITHUB_OUTPUT", help = "File to append step outputs to")]
    output: Option<PathBuf>,

    #[arg(long, default_value_t = DEFAULT_CONCURRENCY, help = "Maximum simultaneous PR lookups")]
    concurrency: usize,

    #[arg(long, help = "Compute and print without writing outputs")]
    dry_run: bool,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    if let Err(e) = run(args).await {
        ui::display_error(&e.to_string());
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<()> {
    ui::display_status("Starting release preparation...");

    let config = load_config(args.config.as_deref(), args.config_text.as_deref())?;
    ui::display_config(&config)?;
    ui::display_bump_groups(&config.bump_groups());

    let repo: Box<dyn Repository> = match Git2Repository::open(&args.repo) {
        Ok(repo) => Box::new(repo),
        Err(e) => {
            tracing::warn!(path = %args.repo.display(), error = %e, "cannot open repository");
            Box::new(UnavailableRepository::new(e.to_string()))
        }
    };

    let source = match RepoContext::resolve(args.event_path.as_deref(), args.token.as_deref()) {
        Ok(context) => match GitHubClient::new(&context, &args.api_url) {
            Ok(client) => Some(client),
            Err(e) => {
                tracing::warn!(error = %e, "cannot create API client, skipping PR lookup");
                None
            }
        },
        Err(warning) => {
            ui::display_boundary_warning(&warning);
            None
        }
    };

    let workflow_args = WorkflowArgs {
        files: args.files,
        concurrency: args.concurrency,
        ..WorkflowArgs::default()
    };

    let draft = run_release_workflow(
        &config,
        repo.as_ref(),
        source.as_ref().map(|client| client as &dyn PullRequestSource),
        &workflow_args,
    )
    .await?;

    let matched = BumpClassifier::new(config.bump_groups()).matched_categories(&draft.pull_requests);
    ui::display_bump_decision(&matched, draft.bump);
    ui::display_release_summary(&draft);

    if args.dry_run {
        ui::display_status("Dry run: outputs not written");
        return Ok(());
    }

    match args.output {
        Some(path) => {
            write_outputs(&path, &draft)?;
            ui::display_success(&format!("Outputs written to {}", path.display()));
        }
        None => ui::display_status("No output file configured, outputs printed only"),
    }

    Ok(())
}
