//! Mineral Bridge CLI - Admin management and access inspection tools.
//!
//! # Usage
//!
//! ```bash
//! # List admin accounts
//! mb-cli admin list
//!
//! # Create an admin user
//! mb-cli admin create -e admin@mineralbridge.com -n "Admin Name" -r ceo --password ...
//!
//! # Verify credentials and show what the admin can access
//! mb-cli login -e admin@mineralbridge.com --password ...
//!
//! # Print the module access table
//! mb-cli access matrix
//! ```
//!
//! # Commands
//!
//! - `admin` - List, create, update and remove admin accounts
//! - `login` - Verify credentials
//! - `access` - Inspect access decisions for a role
//!
//! # Logging
//!
//! Output goes through `tracing`. `RUST_LOG` overrides the default filter and
//! `MB_LOG_JSON=1` switches to JSON lines.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use mineral_bridge_core::{AdminStatus, Email, Role};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

use commands::CliError;

#[derive(Parser)]
#[command(name = "mb-cli")]
#[command(author, version, about = "Mineral Bridge CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage admin users
    Admin {
        #[command(subcommand)]
        action: AdminAction,
    },
    /// Verify admin credentials
    Login {
        /// Admin email address
        #[arg(short, long)]
        email: String,

        /// Admin password
        #[arg(long, env = "MB_ADMIN_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },
    /// Inspect access decisions
    Access {
        #[command(subcommand)]
        query: AccessQuery,
    },
}

#[derive(Subcommand)]
enum AdminAction {
    /// List admin users
    List,
    /// Create a new admin user
    Create {
        /// Admin email address
        #[arg(short, long)]
        email: Email,

        /// Admin display name
        #[arg(short, long)]
        name: String,

        /// Admin role (`ceo`, `operations_manager`, `support_agent`, `data_clerk`)
        #[arg(short, long, default_value = "support_agent")]
        role: Role,

        /// Admin password
        #[arg(long, env = "MB_ADMIN_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },
    /// Update an admin user
    Update {
        /// Admin id
        id: String,

        /// New display name
        #[arg(long)]
        name: Option<String>,

        /// New email address
        #[arg(long)]
        email: Option<Email>,

        /// New role
        #[arg(long)]
        role: Option<Role>,

        /// New status (`active`, `inactive`)
        #[arg(long)]
        status: Option<AdminStatus>,

        /// New password
        #[arg(long)]
        password: Option<String>,
    },
    /// Remove an admin user
    Remove {
        /// Admin id
        id: String,
    },
}

#[derive(Subcommand)]
enum AccessQuery {
    /// Check a role name or permission token against a role
    Check {
        /// Role to check
        #[arg(short, long)]
        role: Role,

        /// Role name (hierarchy check) or permission token
        required: String,
    },
    /// Show a role's access level in a module
    Module {
        /// Role to check
        #[arg(short, long)]
        role: Role,

        /// Module id, e.g. `finance-release`
        module: String,
    },
    /// Print the module x role access table
    Matrix,
}

fn main() {
    let _ = dotenvy::dotenv();
    init_tracing();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

/// Install the subscriber: `RUST_LOG` filter, text or JSON output.
fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "mineral_bridge_admin=info,mb_cli=info".into());

    let json = std::env::var_os("MB_LOG_JSON").is_some();
    let json_layer = json.then(|| tracing_subscriber::fmt::layer().json().flatten_event(true));
    let text_layer = (!json).then(|| tracing_subscriber::fmt::layer().with_target(false));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .init();
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Commands::Admin { action } => {
            let registry = commands::open_registry()?;
            match action {
                AdminAction::List => {
                    commands::admin::list(&registry);
                }
                AdminAction::Create {
                    email,
                    name,
                    role,
                    password,
                } => {
                    commands::admin::create(&registry, email, &name, role, password)?;
                }
                AdminAction::Update {
                    id,
                    name,
                    email,
                    role,
                    status,
                    password,
                } => {
                    let fields = commands::admin::UpdateFields {
                        name,
                        email,
                        role,
                        status,
                        password,
                    };
                    commands::admin::update(&registry, &id, fields)?;
                }
                AdminAction::Remove { id } => commands::admin::remove(&registry, &id)?,
            }
        }
        Commands::Login { email, password } => {
            let registry = commands::open_registry()?;
            commands::login::login(&registry, &email, password)?;
        }
        Commands::Access { query } => match query {
            AccessQuery::Check { role, required } => {
                commands::access::check(role, &required);
            }
            AccessQuery::Module { role, module } => {
                commands::access::module(role, &module);
            }
            AccessQuery::Matrix => commands::access::matrix(),
        },
    }
    Ok(())
}
