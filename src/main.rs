// src/main.rs
// Task Manager - task service with a server-rendered UI

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

use task_manager::api::create_router;
use task_manager::config::{Config, ServeArgs};
use task_manager::ui::{App, render_page};
use task_manager::AppState;

#[derive(Parser)]
#[command(name = "task-manager")]
#[command(about = "Task manager service with a server-rendered UI")]
#[command(version)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Flags for the default `serve` command
    #[command(flatten)]
    serve: ServeArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP server (default)
    Serve(ServeArgs),

    /// Print the rendered page for an empty task list and exit
    Render,
}

fn init_tracing(level: Level) -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

async fn run_server(args: ServeArgs) -> Result<()> {
    let config = Config::from_args(&args)?;
    init_tracing(config.log_level)?;

    let state = AppState::connect(&config).await?;
    let app = create_router(state);

    let addr = config.bind_address()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Task Manager running on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        // Without a signal handler, run until killed
        std::future::pending::<()>().await;
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // .env in the working directory, if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Serve(args)) => run_server(args).await,
        None => run_server(cli.serve).await,
        Some(Commands::Render) => {
            init_tracing(Level::WARN)?;
            print!("{}", render_page(&App::default()));
            Ok(())
        }
    }
}
