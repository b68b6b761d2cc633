//! Snapvault CLI — drives the screen core from the command line.
//!
//! Subcommands stand in for the screen's gestures. Configuration comes from
//! the environment: STORAGE_BACKEND with its backend-specific settings,
//! AUTH_BASE_URL, and REQUIRE_LOGIN. See `snapvault_core::Config`.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::{Parser, Subcommand};

use snapvault_auth::{HttpIdentityProvider, IdentityProvider, StaticIdentity};
use snapvault_cli::init_tracing;
use snapvault_core::{Config, UploadOutcome};
use snapvault_media::{LoopbackTransfer, PathMediaSource, StaticPermission};
use snapvault_screen::{Screen, ScreenConfig, ScreenState};
use snapvault_storage::create_storage;

#[derive(Parser)]
#[command(name = "snapvault", about = "Snapvault screen-core CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in against the identity provider
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Pick a local file and upload it under a destination name
    Upload {
        /// Path to the image to upload
        file: PathBuf,
        /// Destination object name, used as the storage key exactly as given
        #[arg(long)]
        name: String,
        /// Credentials for the login-gated configuration
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        password: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config = Config::from_env().context("Failed to load configuration")?;
    let timeout = Duration::from_secs(config.http_timeout_secs);

    let identity: Arc<dyn IdentityProvider> = match &config.auth_base_url {
        Some(base_url) => Arc::new(
            HttpIdentityProvider::new(base_url.clone(), timeout)
                .context("Failed to create identity provider client")?,
        ),
        None => Arc::new(StaticIdentity::rejecting("AUTH_BASE_URL not configured")),
    };
    let storage = create_storage(&config)
        .await
        .context("Failed to create storage backend")?;
    let transfer =
        Arc::new(LoopbackTransfer::new(timeout).context("Failed to create media transfer")?);

    match cli.command {
        Commands::Login { email, password } => {
            let screen = Screen::new(
                ScreenConfig::from_config(&config),
                Arc::new(StaticPermission::granted()),
                Arc::new(PathMediaSource::empty()),
                transfer,
                identity,
                storage,
            );

            let mut state = ScreenState::new();
            state.email = email;
            state.password = password;

            screen.login(&mut state).await.context("Login failed")?;
            println!("Login successful.");
        }
        Commands::Upload {
            file,
            name,
            email,
            password,
        } => {
            let screen = Screen::new(
                ScreenConfig::from_config(&config),
                Arc::new(StaticPermission::granted()),
                Arc::new(PathMediaSource::new(file)),
                transfer,
                identity,
                storage,
            );

            let mut state = ScreenState::new();
            screen.initialize(&mut state).await;
            if let Some(notice) = state.take_permission_notice() {
                eprintln!("{}", notice);
            }

            if config.require_login {
                state.email =
                    email.context("--email is required when REQUIRE_LOGIN is enabled")?;
                state.password =
                    password.context("--password is required when REQUIRE_LOGIN is enabled")?;
                screen.login(&mut state).await.context("Login failed")?;
                println!("Signed in.");
            }

            let acquisition = screen
                .pick_from_gallery(&mut state)
                .await
                .context("Failed to pick media")?;
            if acquisition.is_cancelled() {
                anyhow::bail!("No file selected");
            }

            state.upload_name = name;
            match screen.upload(&mut state).await? {
                UploadOutcome::Completed { key, url } => {
                    println!("Uploaded {} -> {}", key, url);
                }
                UploadOutcome::Failed { reason } => {
                    anyhow::bail!("Upload failed: {}", reason);
                }
            }
        }
    }

    Ok(())
}
