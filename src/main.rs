use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, Subcommand};
use teller::persist::{FileTokenStore, default_token_path};
use teller::util::validate;
use teller::{Config, TellerClient};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("{0}")]
    Invalid(&'static str),
    #[error("not signed in; run `teller login` first")]
    NotSignedIn,
    #[error("could not load the profile; the session may have expired")]
    ProfileUnavailable,
    #[error("{0}")]
    Api(#[from] teller::Error),
}

#[derive(Parser, Debug)]
#[command(name = "teller", about = "Demo bank account CLI")]
struct Cli {
    #[arg(long, env = "TELLER_BASE_URL", default_value = "http://localhost:3001")]
    base_url: String,

    #[arg(long, env = "TELLER_TIMEOUT_SECS", default_value_t = 10)]
    timeout_secs: u64,

    #[arg(long, env = "TELLER_TOKEN_FILE")]
    token_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sign in and print the account profile.
    Login {
        email: String,
        password: String,
        #[arg(long, default_value_t = false)]
        remember_me: bool,
    },
    /// Create an account. Does not sign in.
    Signup {
        first_name: String,
        last_name: String,
        email: String,
        password: String,
    },
    /// Show the signed-in user's profile.
    Profile,
    /// Change the signed-in user's first and last name.
    Update { first_name: String, last_name: String },
    /// Sign out and forget any remembered session.
    Logout,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = Config {
        base_url: cli.base_url,
        timeout: Duration::from_secs(cli.timeout_secs),
        token_file: cli.token_file.unwrap_or_else(default_token_path),
    };
    let tokens = Arc::new(FileTokenStore::new(config.token_file.clone()));
    let client = TellerClient::new(config, tokens)?;

    match cli.command {
        Command::Login { email, password, remember_me } => {
            run_login(&client, &email, &password, remember_me).await
        }
        Command::Signup { first_name, last_name, email, password } => {
            run_signup(&client, &first_name, &last_name, &email, &password).await
        }
        Command::Profile => run_profile(&client).await,
        Command::Update { first_name, last_name } => {
            run_update(&client, &first_name, &last_name).await
        }
        Command::Logout => run_logout(&client).await,
    }
}

async fn run_login(
    client: &TellerClient,
    email: &str,
    password: &str,
    remember_me: bool,
) -> Result<(), CliError> {
    if !validate::is_valid_email(email) {
        return Err(CliError::Invalid(validate::EMAIL_MESSAGE));
    }
    if !validate::is_valid_password(password) {
        return Err(CliError::Invalid(validate::PASSWORD_MESSAGE));
    }

    client.login(email, password, remember_me).await?;
    // Login spawns its own profile fetch; await one here so the welcome
    // line can name the user before the process exits.
    client.fetch_profile().await;

    match client.reader().profile() {
        Some(profile) => println!("Welcome back, {} {}!", profile.first_name, profile.last_name),
        None => println!("Signed in."),
    }
    Ok(())
}

async fn run_signup(
    client: &TellerClient,
    first_name: &str,
    last_name: &str,
    email: &str,
    password: &str,
) -> Result<(), CliError> {
    if !validate::is_valid_first_name(first_name) {
        return Err(CliError::Invalid(validate::FIRST_NAME_MESSAGE));
    }
    if !validate::is_valid_last_name(last_name) {
        return Err(CliError::Invalid(validate::LAST_NAME_MESSAGE));
    }
    if !validate::is_valid_email(email) {
        return Err(CliError::Invalid(validate::EMAIL_MESSAGE));
    }
    if !validate::is_valid_password(password) {
        return Err(CliError::Invalid(validate::PASSWORD_MESSAGE));
    }

    client.sign_up(first_name, last_name, email, password).await?;
    println!("Account created for {email}. Sign in to continue.");
    Ok(())
}

async fn run_profile(client: &TellerClient) -> Result<(), CliError> {
    client.initialize_auth().await;

    let reader = client.reader();
    if !reader.authenticated() {
        return Err(CliError::NotSignedIn);
    }
    let Some(profile) = reader.profile() else {
        return Err(CliError::ProfileUnavailable);
    };

    println!("{} {} <{}> (id {})", profile.first_name, profile.last_name, profile.email, profile.id);
    Ok(())
}

async fn run_update(client: &TellerClient, first_name: &str, last_name: &str) -> Result<(), CliError> {
    let reader = client.reader();
    let Some(token) = reader.token() else {
        return Err(CliError::NotSignedIn);
    };

    let profile = client.update_profile(first_name, last_name, &token).await?;
    println!("Profile updated: {} {} <{}>", profile.first_name, profile.last_name, profile.email);
    Ok(())
}

async fn run_logout(client: &TellerClient) -> Result<(), CliError> {
    client.logout().await?;
    println!("Signed out.");
    Ok(())
}
