//! Console Entry Point
//!
//! Builds the single session context for the process and runs one command
//! against it. Uses `anyhow` for startup errors; library errors stay typed
//! and convert into `kernel::error::AppError`.

mod cli;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use auth::models::RegistrationProfile;
use auth::{
    AuthConfig, AuthError, AuthGateway, HttpAuthApi, KvCredentialStore, RouteDecision,
    SessionContext, View,
};
use clap::Parser;
use platform::client::ApiClient;
use platform::password::ClearTextPassword;
use platform::storage::FileKeyValueStore;
use resources::Resources;
use resources::model::HotelSearch;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::{Cli, Command};

// Re-export unified error types
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

type Session = SessionContext<HttpAuthApi, KvCredentialStore<FileKeyValueStore>>;

const APP_DIR: &str = "hotel-client";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "console=info,auth=info,resources=info,platform=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let mut config = if cfg!(debug_assertions) {
        AuthConfig::development()
    } else {
        AuthConfig::default()
    };
    if let Some(url) = cli.api_url.clone() {
        config = config.with_base_url(url);
    }
    if let Some(secs) = cli.timeout {
        config = config.with_timeout(Duration::from_secs(secs));
    }
    let config = Arc::new(config);

    let data_dir = cli
        .data_dir
        .clone()
        .unwrap_or_else(default_data_dir);
    tracing::debug!(api = %config.api_base_url, data_dir = %data_dir.display(), "Client configured");

    // Wiring: one store backs both the session and the bearer header
    let store = Arc::new(KvCredentialStore::new(FileKeyValueStore::new(data_dir), &config));
    let client = ApiClient::new(&config.api_base_url, config.request_timeout)
        .context("Invalid API configuration")?
        .with_token_source(store.clone());

    let gateway = AuthGateway::new(Arc::new(HttpAuthApi::new(client.clone())), store, config);
    let session: Arc<Session> = Arc::new(SessionContext::initialize(gateway));
    let resources = Resources::new(client);

    let mut changes = session.subscribe();
    tokio::spawn(async move {
        while changes.changed().await.is_ok() {
            let state = changes.borrow_and_update().clone();
            tracing::debug!(
                signed_in = state.is_authenticated(),
                loading = state.loading,
                error = ?state.error,
                "Session state changed"
            );
        }
    });

    run(cli.command, &session, &resources).await
}

/// Per-user data directory, e.g. `~/.local/share/hotel-client`
fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".local/share")
        })
        .join(APP_DIR)
}

async fn run(command: Command, session: &Session, resources: &Resources) -> anyhow::Result<()> {
    match command {
        Command::Login {
            email,
            role,
            password,
        } => {
            let password = match password {
                Some(p) => p,
                None => rpassword::prompt_password("Password: ")?,
            };
            match session
                .login(&email, ClearTextPassword::new(password), &role)
                .await
            {
                Ok(user) => {
                    println!("Signed in as {} ({})", user.display_name(), user.role);
                    println!("Home: {}", View::home_for(user.role));
                }
                Err(e) => return Err(report(e)),
            }
        }
        Command::Logout => {
            session.logout()?;
            println!("Signed out");
        }
        Command::Register {
            name,
            email,
            contact_number,
            role,
        } => {
            let password = rpassword::prompt_password("Password: ")?;
            let confirm = rpassword::prompt_password("Confirm password: ")?;
            let profile = RegistrationProfile::new(
                name,
                email,
                ClearTextPassword::new(password),
                contact_number,
                role,
            )
            .with_confirmation(ClearTextPassword::new(confirm));

            match session.register(profile).await {
                Ok(()) => println!("Registration successful! Please login."),
                Err(e) => return Err(report(e)),
            }
        }
        Command::Whoami => match session.current_user() {
            Some(user) => println!("{}", serde_json::to_string_pretty(&user)?),
            None => println!("Not signed in"),
        },
        Command::Visit { path } => match session.navigate(&path) {
            RouteDecision::Allow => println!("{path}: allowed"),
            RouteDecision::Redirect(view) => println!("{path}: redirected to {view}"),
        },
        Command::Hotels {
            location,
            amenities,
            available,
        } => {
            let hotels = if available {
                resources.hotels.with_available_rooms().await?
            } else if location.is_some() || amenities.is_some() {
                let search = HotelSearch {
                    location,
                    amenities,
                };
                resources.hotels.search(&search).await?
            } else {
                resources.hotels.list().await?
            };

            if hotels.is_empty() {
                println!("No hotels found");
            }
            for hotel in hotels {
                println!(
                    "{}\t{}\t{}\t{}",
                    hotel.hotel_id,
                    hotel.name,
                    hotel.location,
                    hotel.amenity_list().join(", ")
                );
            }
        }
    }
    Ok(())
}

/// Print field errors one per line, then fail with the user-facing message
fn report(err: AuthError) -> anyhow::Error {
    for field in err.field_errors() {
        eprintln!("  {}: {}", field.field, field.message);
    }

    let app_error = AppError::from(err);
    if app_error.is_retryable() {
        tracing::warn!(kind = app_error.kind().as_str(), "Request may succeed if retried");
    }
    anyhow::anyhow!("{}", app_error.message())
}
