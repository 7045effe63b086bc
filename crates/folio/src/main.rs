//! folio - Personal portfolio site

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use folio_core::{CoreError, Portfolio, SiteConfig};
use folio_web::SiteState;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "folio",
    version,
    about = "Personal portfolio site",
    long_about = "Serves the Leptos portfolio site and inspects its configuration and content.\n\
                  \n\
                  Examples:\n\
                    folio serve                      # Serve crates/folio-web/dist on :3333\n\
                    folio serve --port 8080          # Custom port\n\
                    folio config                     # Print the effective site config\n\
                    folio content my-content.json    # Validate a content document\n\
                  \n\
                  Site Workflow:\n\
                    # Option 1: Production (single command)\n\
                    trunk build --release            # Compile the site once\n\
                    folio serve                      # Serves site + API\n\
                    \n\
                    # Option 2: Development (hot reload)\n\
                    trunk serve                      # Uses compiled-in config defaults\n\
                  \n\
                  Environment Variables:\n\
                    FOLIO_CONFIG                     # Site config file (JSON)\n\
                    FOLIO_DIST                       # Directory with the built site\n\
                    RUST_LOG                         # Log filter (default: info)"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Site config file (default: <config dir>/folio/site.json if present)
    #[arg(long, global = true, env = "FOLIO_CONFIG")]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Command {
    /// Serve the built site and its API
    Serve {
        /// Port for web server
        #[arg(long, default_value = "3333")]
        port: u16,
        /// Directory containing the `trunk build` output
        #[arg(long, env = "FOLIO_DIST", default_value = "crates/folio-web/dist")]
        dist: PathBuf,
    },
    /// Print the effective site config as JSON and exit
    Config,
    /// Validate a content document (default: the compiled-in one) and print a summary
    Content {
        /// Content file (JSON)
        file: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config_path = cli.config.or_else(default_config_path);

    match cli.command {
        Command::Serve { port, dist } => run_serve(config_path.as_deref(), dist, port).await,
        Command::Config => run_config(config_path.as_deref()),
        Command::Content { file } => run_content(file.as_deref()),
    }
}

/// `<config dir>/folio/site.json`, only if it exists
fn default_config_path() -> Option<PathBuf> {
    let path = dirs::config_dir()?.join("folio").join("site.json");
    path.is_file().then_some(path)
}

fn load_config(path: Option<&Path>) -> Result<SiteConfig> {
    match path {
        Some(path) => SiteConfig::load(path).map_err(report),
        None => Ok(SiteConfig::default()),
    }
}

async fn run_serve(config_path: Option<&Path>, dist: PathBuf, port: u16) -> Result<()> {
    let config = load_config(config_path)?;
    info!(
        threshold_rem = config.menu_threshold_rem,
        offset_rem = config.scroll_offset_rem,
        "site config loaded"
    );
    let state = SiteState::new(config, dist);

    if state.is_built() {
        println!("\nSite + API:  http://localhost:{}", port);
        println!("API endpoints: http://localhost:{}/api/*", port);
    } else {
        println!("\nAPI only:    http://localhost:{}/api/*", port);
        println!("   Run 'trunk build' in crates/folio-web to compile the site");
    }

    folio_web::run(state, port).await
}

fn run_config(config_path: Option<&Path>) -> Result<()> {
    let config = load_config(config_path)?;
    let json = serde_json::to_string_pretty(&config).context("Failed to serialize config")?;
    println!("{}", json);
    Ok(())
}

fn run_content(file: Option<&Path>) -> Result<()> {
    let portfolio = match file {
        Some(path) => Portfolio::load(path).map_err(report)?,
        None => Portfolio::embedded().clone(),
    };

    println!("{} - {}", portfolio.profile.name, portfolio.profile.headline);
    println!("  about paragraphs: {}", portfolio.about.len());
    println!("  experience:       {}", portfolio.experience.len());
    println!("  skill groups:     {}", portfolio.skills.len());
    println!("  projects:         {}", portfolio.projects.len());
    println!("  footer links:     {}", portfolio.links.len());
    Ok(())
}

/// Print the suggestion for a core error, then hand it to anyhow
fn report(error: CoreError) -> anyhow::Error {
    if let Some(hint) = error.suggestion() {
        eprintln!("hint: {}", hint);
    }
    error.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_serve_defaults() {
        let cli = Cli::try_parse_from(["folio", "serve"]).unwrap();
        match cli.command {
            Command::Serve { port, .. } => assert_eq!(port, 3333),
            _ => panic!("expected serve"),
        }
    }

    #[test]
    fn test_content_takes_optional_file() {
        let cli = Cli::try_parse_from(["folio", "content", "site.json"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Content { file: Some(ref f) } if f == Path::new("site.json")
        ));
    }

    #[test]
    fn test_load_config_without_path_uses_defaults() {
        assert_eq!(load_config(None).unwrap(), SiteConfig::default());
    }
}
