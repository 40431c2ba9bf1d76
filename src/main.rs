use std::net::SocketAddr;
use std::process;

use clap::{Parser, Subcommand};
use comfy_table::{modifiers, presets, ContentArrangement, Table};
use terminal_size::{terminal_size, Width};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use userdeck::api::{fetch_users, set_silent};
use userdeck::config::{self, DEFAULT_HOST, DEFAULT_PORT};
use userdeck::models::{build_http_client, AppState, CardView, UserRecord};
use userdeck::routes::build_router;
use userdeck::services::spawn_initial_load;

fn build_state_from_env(env_file: Option<&str>) -> AppState {
    config::load_env_file(env_file);
    let client = match build_http_client() {
        Ok(c) => c,
        Err(e) => {
            tracing::error!(%e, "Failed to create HTTP client");
            eprintln!("{}: {}", yansi::Paint::red("Failed to create HTTP client"), e);
            process::exit(1);
        }
    };
    AppState::new(config::get_users_endpoint(), client)
}

async fn start_server(mut state: AppState, host: &str, port: u16, stylesheet: Option<String>) {
    if let Some(path) = stylesheet {
        match std::fs::read_to_string(&path) {
            Ok(css) => {
                state.custom_css = Some(css);
                tracing::info!("Loaded custom stylesheet from {}", path);
            }
            Err(e) => {
                tracing::error!(%e, "Failed to read custom stylesheet");
                eprintln!("{} {}: {}", yansi::Paint::red("Failed to read custom stylesheet at"), path, e);
                process::exit(1);
            }
        }
    }

    let addr: SocketAddr = match format!("{}:{}", host, port).parse() {
        Ok(a) => a,
        Err(e) => {
            tracing::error!(%e, "Invalid host/port format");
            eprintln!("{}: {}", yansi::Paint::red("Invalid host/port format"), e);
            process::exit(1);
        }
    };

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!(%e, "Failed to bind to address; is the port already in use?");
            eprintln!("{}: {}\n{}", yansi::Paint::new(format!("Failed to bind to {}", addr)).red(), e, yansi::Paint::new("Please stop any process using this port, or start the server with a different --port value.").yellow());
            process::exit(1);
        }
    };

    // The screen is "mounted" once the server is up: fetch exactly once, in the background.
    spawn_initial_load(state.clone());

    let app = build_router(state);
    tracing::info!(%addr, "Starting userdeck server");
    println!("{} {}", yansi::Paint::new("Web server running on").green(), yansi::Paint::new(format!("http://{}", addr)).cyan());
    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(%e, "Server encountered an error while running");
        eprintln!("{}: {}", yansi::Paint::new("Server error").red(), e);
        process::exit(1);
    }
}

fn print_users(users: &[UserRecord]) {
    if users.is_empty() {
        println!("(empty list)");
        return;
    }
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL);
    table.apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    if let Some((Width(w), _)) = terminal_size() {
        table.set_width(w.saturating_sub(4));
    }
    table.set_header(vec!["ID", "Name", "Email", "Phone", "Website", "Company", "Address"]);
    for card in users.iter().map(CardView::from_record) {
        table.add_row(vec![
            card.id.to_string(),
            card.name,
            card.email,
            card.phone,
            card.website,
            card.company,
            card.address,
        ]);
    }
    println!("\n{table}\n");
}

#[derive(Parser)]
#[command(
    name = "userdeck",
    author,
    version,
    about = "Browse and tidy a list of user profiles",
    long_about = r#"userdeck fetches a list of user profiles once, shows them as cards in a small web UI, and lets you edit, delete and like them. Changes live in memory only and are gone when the process exits.

Examples:
  1) Run the web UI (default when no subcommand is given):
      userdeck serve --host 127.0.0.1 --port 8080
  2) Print the profiles in the terminal:
      userdeck list
  3) Point at another source:
      USERS_ENDPOINT=http://localhost:9000/users userdeck serve
"#,
    after_help = "Use `userdeck <subcommand> --help` to get subcommand specific options and usage examples."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
    /// Disable colorized output
    #[arg(long, global = true)]
    no_color: bool,
    /// Disable request/response echo
    #[arg(long, global = true)]
    silent: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the web server
    Serve {
        /// Host to bind to
        #[arg(long, default_value_t = String::from(DEFAULT_HOST))]
        host: String,
        /// Port to bind to
        #[arg(long, default_value_t = DEFAULT_PORT)]
        port: u16,
        /// Path to .env file
        #[arg(long)]
        env_file: Option<String>,
        /// Path to a custom stylesheet to serve instead of the default
        #[arg(long)]
        stylesheet: Option<String>,
    },
    /// Fetch the profiles once and print them as a table
    #[command(about = "Print the user profiles", long_about = "Fetch the user list from the configured source and print one row per profile. Nothing is kept afterwards.")]
    List {
        /// Path to .env file
        #[arg(long)]
        env_file: Option<String>,
    },
    /// Validate configuration (env vars / data source)
    #[command(about = "Validate configuration and ensure the data source answers.", long_about = "Show the configured USERS_ENDPOINT and check that it returns a list of user profiles.")]
    CheckConfig {
        /// Path to .env file
        #[arg(long)]
        env_file: Option<String>,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.no_color {
        yansi::whenever(yansi::Condition::NEVER);
    }

    if cli.silent {
        set_silent(true);
    }

    // If no command provided, serve the web app by default
    let Some(command) = cli.command else {
        let state = build_state_from_env(None);
        start_server(state, DEFAULT_HOST, DEFAULT_PORT, None).await;
        return;
    };

    match command {
        Commands::Serve {
            host,
            port,
            env_file,
            stylesheet,
        } => {
            let state = build_state_from_env(env_file.as_deref());
            start_server(state, &host, port, stylesheet).await;
        }
        Commands::List { env_file } => {
            let state = build_state_from_env(env_file.as_deref());
            match fetch_users(&state.client, &state.users_endpoint).await {
                Ok(users) => print_users(&users),
                Err(e) => {
                    eprintln!("{}: {}", yansi::Paint::new("Failed to load users").red(), e);
                    process::exit(1);
                }
            }
        }
        Commands::CheckConfig { env_file } => {
            let state = build_state_from_env(env_file.as_deref());
            println!("USERS_ENDPOINT = {}", yansi::Paint::new(&state.users_endpoint).cyan());
            match fetch_users(&state.client, &state.users_endpoint).await {
                Ok(users) => {
                    println!("{}", yansi::Paint::new(format!("Configuration looks valid ({} users returned)", users.len())).green());
                }
                Err(e) => {
                    eprintln!("{}: {}", yansi::Paint::new("Configuration appears invalid").red(), e);
                    process::exit(1);
                }
            }
        }
    }
}
