//! `gists-gone`: bulk delete GitHub gists, filtered by visibility, language,
//! and creation date.

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use github_client::GithubClient;
use tracing_subscriber::EnvFilter;

mod config;
mod dates;
mod delete;
mod fetch;
mod filter;
mod gist;
mod report;

use config::Config;
use filter::Criteria;
use gist::Visibility;
use report::TerminalReporter;

#[derive(Parser)]
#[command(name = "gists-gone")]
#[command(about = "Bulk delete GitHub gists from the command line")]
#[command(version)]
struct Cli {
    /// GitHub API access token. Falls back to GITHUB_API_TOKEN.
    #[arg(short, long)]
    token: Option<String>,

    /// Skip the confirmation prompt before deletion. Use with caution.
    #[arg(short, long)]
    force: bool,

    /// Only delete gists with this visibility.
    #[arg(short, long, value_enum)]
    visibility: Option<Visibility>,

    /// Only delete gists whose language is one of these.
    #[arg(short, long, num_args = 1..)]
    languages: Option<Vec<String>>,

    /// Creation date (YYYY-MM-DD), or two dates for an inclusive range.
    #[arg(short = 'd', long, num_args = 1..)]
    date_range: Option<Vec<String>>,
}

impl Cli {
    fn criteria(&self) -> Result<Criteria> {
        let date_range = match &self.date_range {
            Some(args) => Some(dates::parse_date_range(args)?),
            None => None,
        };
        Ok(Criteria {
            visibility: self.visibility,
            languages: self.languages.clone(),
            date_range,
        })
    }
}

fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    if let Err(e) = run() {
        eprintln!("{} {:#}", "Error:".bright_red().bold(), e);
        return ExitCode::from(1);
    }
    ExitCode::SUCCESS
}

#[tokio::main]
async fn run() -> Result<()> {
    let cli = Cli::parse();
    let criteria = cli.criteria()?;
    let config = Config::resolve(cli.token, cli.force)?;

    let client = GithubClient::new(config.token.clone());
    let reporter = TerminalReporter::new();

    let gists = fetch::fetch_all(&client).await?;
    tracing::debug!(count = gists.len(), "fetched gists");

    // With no criteria every gist is a target; the filter engine is skipped.
    let ids: Vec<String> = if criteria.is_empty() {
        gists.into_iter().map(|g| g.id).collect()
    } else {
        let matched = filter::matching_ids(&criteria, &gists);
        gists
            .into_iter()
            .filter(|g| matched.contains(&g.id))
            .map(|g| g.id)
            .collect()
    };

    delete::delete_gists(&client, &reporter, config.force, &ids).await?;
    Ok(())
}
