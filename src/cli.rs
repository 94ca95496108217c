use std::env;
use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};
use tokio_util::sync::CancellationToken;

use crate::config::{Credential, Settings};
use crate::core::repos::RepoFilter;
use crate::core::scan::{run_scan, ScanRequest, ScanResults};
use crate::error::{GogiError, Result};
use crate::github::client::GithubHost;
use crate::utils::exclusion::ExclusionList;

#[derive(Parser)]
#[command(name = "gogi")]
#[command(about = "Collect commit author emails from a GitHub account's repositories")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scan a GitHub user account and list all repositories (public and private, with options to exclude forks)
    Scan(ScanArgs),
}

#[derive(Args, Clone, Debug)]
pub struct ScanArgs {
    #[arg(help = "GitHub account to scan")]
    pub username: String,

    #[arg(short = 'p', long = "public", help = "Include public repositories",
        action = ArgAction::Set, default_value_t = true, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub include_public: bool,

    #[arg(short = 'r', long = "private", help = "Include private repositories",
        action = ArgAction::Set, default_value_t = true, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub include_private: bool,

    #[arg(short = 'f', long = "exclude-forks", help = "Exclude forked repositories",
        action = ArgAction::Set, default_value_t = true, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub exclude_forks: bool,

    #[arg(short = 't', long, help = "GitHub token for authentication")]
    pub token: Option<String>,

    #[arg(short = 'o', long, help = "File to output results to")]
    pub output: Option<PathBuf>,

    #[arg(short = 'e', long = "exclude-mail", value_name = "EMAIL", help = "Email(s) to exclude from the scan")]
    pub exclude_mail: Vec<String>,
}

impl ScanArgs {
    pub fn request(&self) -> ScanRequest {
        ScanRequest {
            account: self.username.clone(),
            filter: RepoFilter {
                include_public: self.include_public,
                include_private: self.include_private,
                exclude_forks: self.exclude_forks,
            },
            exclusions: ExclusionList::new(&self.exclude_mail),
            output: self.output.clone(),
        }
    }
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub async fn execute(self, settings: &Settings, cancel: &CancellationToken) -> Result<()> {
        match self.command {
            Commands::Scan(args) => {
                let results = scan(&args, settings, cancel).await?;
                print_summary(&results);
                Ok(())
            }
        }
    }
}

async fn scan(
    args: &ScanArgs,
    settings: &Settings,
    cancel: &CancellationToken,
) -> Result<ScanResults> {
    let credential = Credential::resolve(args.token.as_deref(), |key| env::var(key).ok())?;
    let host = GithubHost::connect(&credential, &settings.base_url)
        .map_err(|e| GogiError::Configuration(e.to_string()))?;
    let request = args.request();
    log::debug!(
        "[scan] {} via {}, {:?}, {} excluded emails",
        request.account,
        host.base_url(),
        request.filter,
        request.exclusions.len()
    );
    run_scan(&host, &request, cancel).await
}

fn print_summary(results: &ScanResults) {
    if !results.failed.is_empty() {
        log::warn!(
            "[print_summary] {} repositories could not be scanned: {}",
            results.failed.len(),
            results.failed.join(", ")
        );
    }
    let summary = &results.summary;
    println!("\nSummary:");
    println!(
        "Found {} repositories (public: {}, private: {}, forks excluded: {})",
        summary.total, summary.public, summary.private, summary.forks
    );
}
