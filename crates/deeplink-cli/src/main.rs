mod contact;
mod map;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::contact::{run_call, run_email, run_sms};
use crate::map::{run_map, MapArgs};

#[derive(Debug, Parser)]
#[command(name = "deeplink")]
#[command(about = "Compose native maps and contact deep links")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Compose a maps link from flags and/or a request file
    Map(MapArgs),
    /// Compose a `tel:` link
    Call {
        /// Phone number to dial
        number: String,
    },
    /// Compose a `mailto:` link
    Email {
        /// Recipient address
        to: String,
        #[arg(long)]
        subject: Option<String>,
        #[arg(long)]
        body: Option<String>,
        #[arg(long)]
        cc: Option<String>,
    },
    /// Compose an `sms:` link
    Sms {
        /// Recipient number; omit to open a blank message
        number: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    // Loads `.env` before reading the environment.
    let config = deeplink_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(env = %config.env, base = %config.maps_base_url, "loaded config");

    let cli = Cli::parse();
    let link = match cli.command {
        Commands::Map(args) => run_map(args, &config)?,
        Commands::Call { number } => run_call(&number)?,
        Commands::Email {
            to,
            subject,
            body,
            cc,
        } => run_email(to, subject, body, cc)?,
        Commands::Sms { number } => run_sms(number.as_deref()),
    };

    println!("{link}");
    Ok(())
}
