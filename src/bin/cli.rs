//! Activity Signup CLI
//!
//! Terminal front-end for the activities backend:
//! - List activities
//! - Sign up for an activity
//! - Generate a config file

use activity_signup::config::{generate_default_config, Config, LogFormat};
use activity_signup::render::{render_notice, render_page};
use activity_signup::{HttpActivityClient, PageOrigin, Portal};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "activity-signup")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Browse extracurricular activities and sign up for one")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Backend URL (overrides config and ACTIVITY_SIGNUP_API_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Config file (default: search the usual locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show all activities
    List,

    /// Sign up for an activity
    Signup {
        /// Student email
        #[arg(short, long)]
        email: String,
        /// Activity name, exactly as listed
        #[arg(short, long)]
        activity: String,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    if let Some(url) = cli.api_url {
        config.api.base_url = url;
    }

    init_logging(&config);

    match cli.command {
        Commands::List => {
            let portal = Portal::new(HttpActivityClient::new(config.api.base_url.as_str()));
            portal.start(PageOrigin::classify(&config.api.base_url)).await;

            print!("{}", render_page(&portal.snapshot().await));
        }

        Commands::Signup { email, activity } => {
            let portal = Portal::new(HttpActivityClient::new(config.api.base_url.as_str()));
            if !portal.start(PageOrigin::classify(&config.api.base_url)).await {
                print!("{}", render_page(&portal.snapshot().await));
                std::process::exit(1);
            }

            portal.fill_form(email, activity).await;
            let outcome = portal.submit_signup().await;

            if outcome.is_success() {
                // Refresh so the new participant shows up in the roster.
                portal.load_activities().await;
                print!("{}", render_page(&portal.snapshot().await));
            } else {
                let page = portal.snapshot().await;
                if let Some(notice) = page.notice.visible() {
                    eprintln!("{}", render_notice(notice));
                }
                std::process::exit(1);
            }
        }

        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)?;
                    println!("Wrote default config to {}", path.display());
                }
                None => print!("{}", content),
            }
        }
    }

    Ok(())
}

fn init_logging(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("activity_signup={}", config.logging.level).into()
    });

    let registry = tracing_subscriber::registry().with(filter);

    match config.logging.format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init(),
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init(),
    }
}
