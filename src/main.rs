use anyhow::Result;
use clap::Parser;
use ghrd::commands;

/// ghrd - GitHub Release Downloads
///
/// Inspect the latest published release of a GitHub repository and list its
/// downloadable assets by platform.
///
/// If the GITHUB_TOKEN environment variable is set, it will be used for
/// authentication. This is useful for accessing private repositories or
/// avoiding rate limits.
///
/// Examples:
///   ghrd latest sreq-inc/Solo
///   ghrd downloads sreq-inc/Solo --platform linux
///   ghrd stars sreq-inc/Solo
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// GitHub API URL (defaults to https://api.github.com)
    #[arg(long = "api-url", env = "GHRD_API_URL", value_name = "URL", global = true)]
    api_url: Option<String>,

    /// Host serving release artifacts (defaults to https://github.com)
    #[arg(
        long = "download-url",
        env = "GHRD_DOWNLOAD_URL",
        value_name = "URL",
        global = true
    )]
    download_url: Option<String>,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Show the latest release and all of its assets
    Latest(LatestArgs),

    /// List the latest release's downloads for one platform
    Downloads(DownloadsArgs),

    /// Show the repository's star count
    Stars(StarsArgs),
}

#[derive(clap::Args, Debug)]
struct LatestArgs {
    /// The GitHub repository in the format "owner/repo"
    #[arg(value_name = "OWNER/REPO")]
    repo: String,

    /// Print the release as JSON
    #[arg(long)]
    json: bool,
}

#[derive(clap::Args, Debug)]
struct DownloadsArgs {
    /// The GitHub repository in the format "owner/repo"
    #[arg(value_name = "OWNER/REPO")]
    repo: String,

    /// Platform to list downloads for: windows, mac or linux
    /// (defaults to the current platform)
    #[arg(long, short = 'p', value_name = "PLATFORM")]
    platform: Option<String>,
}

#[derive(clap::Args, Debug)]
struct StarsArgs {
    /// The GitHub repository in the format "owner/repo"
    #[arg(value_name = "OWNER/REPO")]
    repo: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let source = commands::config::build_source(cli.api_url, cli.download_url)?;

    match cli.command {
        Commands::Latest(args) => commands::latest(&source, &args.repo, args.json).await?,
        Commands::Downloads(args) => {
            commands::downloads(&source, &args.repo, args.platform.as_deref()).await?
        }
        Commands::Stars(args) => commands::stars(&source, &args.repo).await?,
    }
    Ok(())
}
