use anyhow::Result;
use clap::Parser;
use ghds::{config::Config, github::RepoId, report::OutputFormat};

/// ghds - GitHub download stats
///
/// Sum the download counts of a repository's release assets.
///
/// If the GITHUB_TOKEN environment variable is set, it will be used for authentication.
/// This is useful for accessing private repositories or avoiding rate limits.
///
/// Examples:
///   ghds --owner cli --repo cli                    # All releases as a table
///   ghds --owner cli --repo cli --release v2.40.0  # A single release
///   ghds --owner cli --repo cli --json             # Machine-readable output
#[derive(Parser, Debug)]
#[command(author, version = env!("GHDS_VERSION"), about)]
struct Cli {
    /// The GitHub repository's owner
    #[arg(long, value_name = "OWNER")]
    owner: String,

    /// The GitHub repository
    #[arg(long, value_name = "REPO")]
    repo: String,

    /// Only report the release with this name or tag
    #[arg(long, value_name = "NAME")]
    release: Option<String>,

    /// Output in JSON
    #[arg(long)]
    json: bool,

    /// Include pre-releases
    #[arg(long)]
    prerelease: bool,

    /// Leave out assets whose name ends in "sha256"
    #[arg(long)]
    skip_checksums: bool,

    /// GitHub API URL, e.g. https://github.example.com/api/v3 for GitHub Enterprise
    #[arg(
        long = "api-url",
        env = "GITHUB_API_URL",
        value_name = "URL",
        default_value = ghds::github::DEFAULT_API_URL
    )]
    api_url: String,

    /// Token used for authentication
    #[arg(long, env = "GITHUB_TOKEN", value_name = "TOKEN", hide_env_values = true)]
    token: Option<String>,
}

impl Cli {
    fn into_config(self) -> Result<Config> {
        let repo = RepoId::new(self.owner, self.repo)?;
        Ok(Config {
            release: self.release,
            format: OutputFormat::from_json_flag(self.json),
            api_url: self.api_url,
            token: self.token.filter(|t| !t.is_empty()),
            include_prereleases: self.prerelease,
            skip_checksums: self.skip_checksums,
            ..Config::new(repo)
        })
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let config = Cli::parse().into_config()?;

    let out = ghds::app::run(&config).await?;
    if config.format == OutputFormat::Json {
        println!("{}", out);
    } else {
        print!("{}", out);
    }
    Ok(())
}
