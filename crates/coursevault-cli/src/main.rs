use clap::{Parser, Subcommand};
use coursevault_cipher::FieldCipher;
use coursevault_cli::seeder;
use coursevault_config::{CipherConfig, DatabaseConfig};
use coursevault_core::{DEFAULT_HASH_COST, Role};
use coursevault_db::PgStore;
use dialoguer::{Input, Password};
use dotenvy::dotenv;

#[derive(Parser)]
#[command(name = "coursevault-cli")]
#[command(about = "CourseVault CLI - Administrative tools for CourseVault", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Seed the demo users and encrypted courses (only into empty tables)
    Seed,
    /// Create a user account
    CreateUser {
        /// Username (will be prompted if not provided)
        #[arg(short = 'u', long)]
        username: Option<String>,

        /// Role: student or teacher
        #[arg(short = 'r', long)]
        role: Role,

        /// Password (will be prompted securely if not provided)
        #[arg(short = 'p', long)]
        password: Option<String>,
    },
    /// Print a freshly generated CIPHER_KEY
    GenerateKey,
}

#[tokio::main]
async fn main() {
    dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Seed => handle_seed().await,
        Commands::CreateUser {
            username,
            role,
            password,
        } => handle_create_user(username, role, password).await,
        Commands::GenerateKey => handle_generate_key(),
    }
}

fn fail(context: &str, err: impl std::fmt::Display) -> ! {
    eprintln!("\n❌ {}: {}", context, err);
    std::process::exit(1);
}

async fn connect() -> PgStore {
    let config = DatabaseConfig::from_env();
    let Some(url) = config.url.as_deref() else {
        fail("Configuration error", "DATABASE_URL must be set");
    };

    let store = match PgStore::connect(url, config.max_connections).await {
        Ok(store) => store,
        Err(e) => fail("Failed to connect to database", e),
    };
    if let Err(e) = store.migrate().await {
        fail("Failed to run migrations", e);
    }
    store
}

async fn handle_seed() {
    let cipher = match FieldCipher::new(&CipherConfig::from_env()) {
        Ok(cipher) => cipher,
        Err(e) => fail("Invalid CIPHER_KEY", e),
    };
    let store = connect().await;

    println!("🌱 Seeding demo data...");
    match seeder::seed_demo_data(&store, &cipher, DEFAULT_HASH_COST).await {
        Ok(summary) if summary.is_empty() => {
            println!("✅ Database already populated, nothing to do");
        }
        Ok(summary) => {
            println!("✅ Created {} users", summary.users_created);
            println!("✅ Created {} courses", summary.courses_created);
        }
        Err(e) => fail("Error seeding database", e),
    }
}

async fn handle_create_user(username: Option<String>, role: Role, password: Option<String>) {
    let username = match username {
        Some(username) => username,
        None => match Input::<String>::new().with_prompt("Username").interact_text() {
            Ok(username) => username,
            Err(e) => fail("Failed to read username", e),
        },
    };

    let password = match password {
        Some(password) => password,
        None => match Password::new()
            .with_prompt("Password")
            .with_confirmation("Confirm password", "Passwords don't match")
            .interact()
        {
            Ok(password) => password,
            Err(e) => fail("Failed to read password", e),
        },
    };

    let store = connect().await;

    match seeder::create_user(&store, &username, &password, role, DEFAULT_HASH_COST).await {
        Ok(user) => {
            println!("\n✅ User created successfully!");
            println!("   Username: {}", user.username);
            println!("   Role: {}", user.role);
        }
        Err(e) => fail("Error creating user", e.error),
    }
}

fn handle_generate_key() {
    println!("CIPHER_KEY={}", FieldCipher::generate_key());
}
