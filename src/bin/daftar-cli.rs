use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand, ValueEnum};

use daftar::calendar::{format_jalali, jalali_of, parse_iso_date, today_jalali};
use daftar::config::{self, AppConfig};
use daftar::data::{generate_id, DataStore};
use daftar::locale::{format_currency, format_file_size, validate_email, validate_phone};
use daftar::navigation::guard::{self, Decision};
use daftar::observability::logging;
use daftar::routing::Router;
use daftar::storage::{FileStore, MemoryStore, SharedStore};

#[derive(Parser)]
#[command(name = "daftar-cli")]
#[command(about = "One-shot helpers for the daftar client", long_about = None)]
struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a route and show where the auth guard sends it
    Route {
        path: String,
        /// Evaluate the guard as a signed-in user
        #[arg(long)]
        authenticated: bool,
    },
    /// List the route table in match order
    Routes,
    /// Convert a Gregorian date (YYYY-MM-DD, default today) to Jalali
    Jalali { date: Option<String> },
    /// Format an amount in the fa-IR style
    Currency {
        amount: f64,
        #[arg(default_value = "IRR")]
        code: String,
    },
    /// Format a byte count
    Filesize { bytes: u64 },
    /// Validate an email address or Iranian mobile number
    Check { kind: CheckKind, value: String },
    /// Generate a short unique id
    Id,
    /// Print a stored collection as JSON
    Data { collection: Collection },
}

#[derive(Clone, Copy, ValueEnum)]
enum CheckKind {
    Email,
    Phone,
}

#[derive(Clone, Copy, ValueEnum)]
enum Collection {
    Invoices,
    Expenses,
    Clients,
    Products,
    Settings,
}

fn open_data(config: &AppConfig) -> Result<DataStore, Box<dyn std::error::Error>> {
    let store: SharedStore = if config.storage.in_memory {
        Arc::new(MemoryStore::new())
    } else {
        Arc::new(FileStore::open(&config.storage.path)?)
    };
    Ok(DataStore::load(store, config.data.seed_sample_data)?)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = config::load_or_default(cli.config.as_deref())?;
    logging::init(&config.observability);

    match cli.command {
        Commands::Route { path, authenticated } => {
            let router = Router::default();
            let matched = router.resolve(&path);
            println!("page: {}", matched.page);
            for (name, value) in matched.params.iter() {
                println!("param {name} = {value:?}");
            }
            match guard::evaluate(matched.page, authenticated) {
                Decision::Allow => println!("guard: allow"),
                Decision::Redirect(target) => println!("guard: redirect to {target}"),
            }
        }
        Commands::Routes => {
            for route in Router::default().routes() {
                let marker = if route.page.is_protected() { " (sign-in)" } else { "" };
                println!("{:<16} {}{marker}", route.pattern.as_str(), route.page);
            }
        }
        Commands::Jalali { date } => {
            let jalali = match date {
                Some(input) => {
                    let Some(date) = parse_iso_date(&input) else {
                        eprintln!("Error: not a date: {input}");
                        std::process::exit(1);
                    };
                    jalali_of(date)
                }
                None => today_jalali(),
            };
            if !jalali.is_calendar_date() {
                eprintln!("Error: date falls before the Jalali era ({jalali})");
                std::process::exit(1);
            }
            println!("{jalali}");
            println!("{}", format_jalali(jalali));
        }
        Commands::Currency { amount, code } => println!("{}", format_currency(amount, &code)),
        Commands::Filesize { bytes } => println!("{}", format_file_size(bytes)),
        Commands::Check { kind, value } => {
            let valid = match kind {
                CheckKind::Email => validate_email(&value),
                CheckKind::Phone => validate_phone(&value),
            };
            println!("{}", if valid { "valid" } else { "invalid" });
            if !valid {
                std::process::exit(1);
            }
        }
        Commands::Id => println!("{}", generate_id()),
        Commands::Data { collection } => {
            let data = open_data(&config)?;
            let json = match collection {
                Collection::Invoices => serde_json::to_string_pretty(&data.invoices)?,
                Collection::Expenses => serde_json::to_string_pretty(&data.expenses)?,
                Collection::Clients => serde_json::to_string_pretty(&data.clients)?,
                Collection::Products => serde_json::to_string_pretty(&data.products)?,
                Collection::Settings => serde_json::to_string_pretty(&data.settings)?,
            };
            println!("{json}");
        }
    }

    Ok(())
}
