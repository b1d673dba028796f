use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "hotel", about = "Hotel booking client", version)]
pub struct Cli {
    /// Booking API root, e.g. https://host/api
    #[arg(long, env = "HOTEL_API_URL", value_name = "URL")]
    pub api_url: Option<String>,
    /// Directory holding the stored session
    #[arg(long, env = "HOTEL_CLIENT_DATA_DIR", value_name = "DIR")]
    pub data_dir: Option<PathBuf>,
    /// Per-request timeout in seconds (default: none)
    #[arg(long, value_name = "SECONDS")]
    pub timeout: Option<u64>,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Sign in and store the session
    Login {
        email: String,
        /// Role offered to the API: user, manager or admin
        #[arg(long, default_value = auth::models::DEFAULT_ROLE_HINT)]
        role: String,
        /// Provide the password non-interactively; otherwise prompt
        #[arg(long, value_name = "PASSWORD")]
        password: Option<String>,
    },
    /// Forget the stored session
    Logout,
    /// Create an account (does not sign in)
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long, value_name = "DIGITS")]
        contact_number: String,
        #[arg(long, default_value = auth::models::DEFAULT_ROLE_HINT)]
        role: String,
    },
    /// Show the signed-in user
    Whoami,
    /// Check whether a client route may be opened
    Visit {
        /// e.g. /admin, /profile, /hotels/3
        path: String,
    },
    /// List hotels
    Hotels {
        #[arg(long)]
        location: Option<String>,
        #[arg(long)]
        amenities: Option<String>,
        /// Only hotels with a free room
        #[arg(long)]
        available: bool,
    },
}
