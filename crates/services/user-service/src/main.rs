//! User Service - command line access to user records.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use common::{AppError, AppResult};
use domain::{CreateUser, UpdateUser, User};
use user_service_lib::config::UserServiceConfig;
use user_service_lib::service::UserService;

#[derive(Parser)]
#[command(name = "user-service")]
#[command(about = "User record management")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a user
    Create {
        #[arg(long)]
        email: String,
        #[arg(long)]
        name: String,
        /// Password, already hashed
        #[arg(long, env = "USER_SERVICE_PASSWORD")]
        password: String,
        #[arg(long)]
        username: String,
    },
    /// Look up a user by ID
    Get { id: String },
    /// Look up a user by email
    GetByEmail { email: String },
    /// Mark a user as active
    Activate { id: String },
    /// Update name, username or active flag
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        username: Option<String>,
        #[arg(long)]
        active: Option<bool>,
    },
    /// Check database connectivity
    Ping,
}

fn print_user(user: &User) -> AppResult<()> {
    let json = serde_json::to_string_pretty(user).map_err(|e| AppError::internal(e.to_string()))?;
    println!("{}", json);
    Ok(())
}

async fn run(command: Commands) -> AppResult<()> {
    let config = UserServiceConfig::from_env();
    let (db, service) = user_service_lib::build_service(&config).await?;

    match command {
        Commands::Create {
            email,
            name,
            password,
            username,
        } => {
            let user = service
                .register(CreateUser {
                    email,
                    name,
                    password,
                    username,
                })
                .await?;
            print_user(&user)
        }
        Commands::Get { id } => print_user(&service.get_user(&id).await?),
        Commands::GetByEmail { email } => print_user(&service.get_user_by_email(&email).await?),
        Commands::Activate { id } => print_user(&service.activate_user(&id).await?),
        Commands::Update {
            id,
            name,
            username,
            active,
        } => {
            let changes = UpdateUser {
                name,
                username,
                is_active: active,
            };
            print_user(&service.update_user(&id, changes).await?)
        }
        Commands::Ping => {
            db.ping().await?;
            tracing::info!("Database reachable");
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    if let Err(err) = run(cli.command).await {
        tracing::error!(code = err.code(), "{}", err.user_message());
        std::process::exit(1);
    }
}
