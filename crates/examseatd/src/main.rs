//! examseatd — the examseat daemon and admin CLI.
//!
//! Serves the REST API over a redb classroom store, and offers direct
//! registry and allocation commands against the same store.
//!
//! # Usage
//!
//! ```text
//! examseatd serve --port 5000 --data-dir /var/lib/examseat
//! examseatd rooms add B-12 --capacity 40 --floor 1 --near-washroom
//! examseatd allocate 120 --format json
//! ```

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use examseat_core::{Classroom, ExamseatConfig};
use examseat_state::StateStore;
use tracing::info;

mod commands;

#[derive(Parser)]
#[command(
    name = "examseatd",
    about = "examseat — classroom registry and exam seat allocation",
    version,
    propagate_version = true
)]
struct Cli {
    /// Path to examseat.toml.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Data directory for the classroom store (overrides [storage].data_dir).
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Serve the REST API.
    Serve {
        /// Port to listen on (overrides [server].port).
        #[arg(long)]
        port: Option<u16>,

        /// Address to bind (overrides [server].bind).
        #[arg(long)]
        bind: Option<String>,
    },
    /// Manage classrooms.
    Rooms {
        #[command(subcommand)]
        action: RoomsAction,
    },
    /// Allocate seats for a number of students.
    Allocate {
        /// Total number of students to seat.
        #[arg(allow_negative_numbers = true)]
        students: i64,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: String,
    },
}

#[derive(Subcommand)]
enum RoomsAction {
    /// Add a classroom.
    Add {
        room_id: String,

        #[arg(long)]
        capacity: u32,

        #[arg(long, allow_negative_numbers = true)]
        floor: i32,

        #[arg(long)]
        near_washroom: bool,
    },
    /// List classrooms in the order they were added.
    List {
        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: String,
    },
    /// Remove a classroom.
    Remove { room_id: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,examseatd=debug,examseat=debug".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => ExamseatConfig::from_file(path)?,
        None => ExamseatConfig::default(),
    };
    let data_dir = cli.data_dir.clone().unwrap_or_else(|| config.data_dir());

    match cli.command {
        Command::Serve { port, bind } => {
            let port = port.unwrap_or_else(|| config.port());
            let bind = bind.unwrap_or_else(|| config.bind().to_string());
            serve(&config, &data_dir, &bind, port).await
        }
        Command::Rooms { action } => {
            let mut store = open_store(&data_dir)?;
            match action {
                RoomsAction::Add {
                    room_id,
                    capacity,
                    floor,
                    near_washroom,
                } => {
                    let classroom = Classroom::new(room_id, capacity, floor, near_washroom)?;
                    commands::rooms::add(&mut store, classroom)
                }
                RoomsAction::List { format } => commands::rooms::list(&store, &format),
                RoomsAction::Remove { room_id } => commands::rooms::remove(&mut store, &room_id),
            }
        }
        Command::Allocate { students, format } => {
            let store = open_store(&data_dir)?;
            commands::allocate::run(&store, students, &format)
        }
    }
}

fn open_store(data_dir: &Path) -> anyhow::Result<StateStore> {
    std::fs::create_dir_all(data_dir)?;
    let db_path = data_dir.join("examseat.redb");
    let store = StateStore::open(&db_path)?;
    info!(path = ?db_path, "classroom store opened");
    Ok(store)
}

async fn serve(
    config: &ExamseatConfig,
    data_dir: &Path,
    bind: &str,
    port: u16,
) -> anyhow::Result<()> {
    info!("examseat daemon starting");

    let store = open_store(data_dir)?;
    let mut state = examseat_api::ApiState::new(store);
    state.reject_negative_floors = config.reject_negative_floors();

    let router = examseat_api::build_router(state);
    let addr: SocketAddr = format!("{bind}:{port}").parse()?;

    info!(%addr, "API server starting");

    let listener = tokio::net::TcpListener::bind(addr).await?;

    // Graceful shutdown on Ctrl-C.
    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "failed to listen for shutdown signal");
                std::future::pending::<()>().await;
            }
            info!("shutdown signal received");
        })
        .await?;

    info!("examseat daemon stopped");
    Ok(())
}
