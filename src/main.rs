//! Interactive console host.
//!
//! ```text
//! stdin ──▶ Command ──▶ ShellHandle ──mpsc──▶ navigation actor
//!                                                  │
//! stdout ◀── Reply.lines ◀──────oneshot────────────┘
//! ```
//!
//! Ctrl-C or `quit` stops input; dropping the handle drains the actor,
//! which saves business data before returning.

use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};

use daftar::config::{self, AppConfig};
use daftar::lifecycle::{signals, Shutdown};
use daftar::observability::logging;
use daftar::shell::{self, Command, ShellHandle};
use daftar::storage::{FileStore, MemoryStore, SharedStore};

#[derive(Parser)]
#[command(name = "daftar")]
#[command(about = "Console client for invoices, expenses and clients", long_about = None)]
struct Args {
    /// Path to a TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Keep state in memory instead of the store file
    #[arg(long)]
    in_memory: bool,

    /// Start at this route instead of the configured one
    #[arg(short, long)]
    route: Option<String>,
}

fn open_store(config: &AppConfig) -> Result<SharedStore, Box<dyn std::error::Error>> {
    if config.storage.in_memory {
        tracing::info!("Using in-memory store");
        return Ok(Arc::new(MemoryStore::new()));
    }
    Ok(Arc::new(FileStore::open(&config.storage.path)?))
}

fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{line}");
    }
}

async fn run_input(handle: &ShellHandle, prompt: &str, shutdown: &Shutdown) -> Result<(), Box<dyn std::error::Error>> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print!("{prompt}");
        std::io::stdout().flush()?;

        let line = tokio::select! {
            _ = shutdown.wait() => break,
            line = lines.next_line() => line?,
        };
        // EOF
        let Some(line) = line else { break };

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(shell::CommandError::Empty) => continue,
            Err(e) => {
                eprintln!("{e}");
                continue;
            }
        };

        let reply = handle.send(command).await?;
        print_lines(&reply.lines);
        if reply.quit {
            break;
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = config::load_or_default(args.config.as_deref())?;
    if args.in_memory {
        config.storage.in_memory = true;
    }
    if let Some(route) = args.route {
        config.shell.start_route = route;
    }

    logging::init(&config.observability);
    tracing::info!("daftar v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        store = %config.storage.path.display(),
        in_memory = config.storage.in_memory,
        start_route = %config.shell.start_route,
        "Configuration loaded"
    );

    let store = open_store(&config)?;
    let controller = shell::build_controller(&config, store)?;

    let shutdown = Shutdown::new();
    let signal_task = signals::spawn_ctrl_c(shutdown.clone());

    let (handle, actor) = shell::spawn(controller, config.shell.channel_capacity);

    // First pass over the start location, as on page load.
    let first = handle.send(Command::Hash(config.shell.start_route.clone())).await?;
    print_lines(&first.lines);

    let result = run_input(&handle, &config.shell.prompt, &shutdown).await;

    drop(handle);
    let controller = actor.await?;
    signal_task.abort();

    tracing::info!(
        page = %controller.current_page(),
        authenticated = controller.is_authenticated(),
        "Shutdown complete"
    );
    result
}
