use bookstore_app::{
    auth::{JwtConfig, Password, PgAuthService},
    database,
};
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub(crate) struct UserCommand {
    #[command(subcommand)]
    command: UserSubcommand,
}

#[derive(Debug, Subcommand)]
enum UserSubcommand {
    /// Provision an admin account.
    CreateAdmin(CreateAdminArgs),
}

#[derive(Debug, Args)]
pub(crate) struct CreateAdminArgs {
    /// Display name
    #[arg(long)]
    name: String,

    /// Login email
    #[arg(long)]
    email: String,

    /// Initial password
    #[arg(long, env = "ADMIN_PASSWORD", hide_env_values = true)]
    password: String,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

pub(crate) async fn run(command: UserCommand) -> Result<(), String> {
    match command.command {
        UserSubcommand::CreateAdmin(args) => create_admin(args).await,
    }
}

async fn create_admin(args: CreateAdminArgs) -> Result<(), String> {
    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    // Token settings are irrelevant here; no session is issued.
    let service = PgAuthService::new(
        pool,
        JwtConfig {
            secret: String::new(),
            ttl_seconds: 0,
        },
    );

    let user = service
        .create_admin(args.name, args.email, &Password::new(args.password))
        .await
        .map_err(|error| format!("failed to create admin: {error}"))?;

    println!("admin_uuid: {}", user.uuid);
    println!("admin_email: {}", user.email);

    Ok(())
}
