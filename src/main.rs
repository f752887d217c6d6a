use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use org_payroll::report::{self, Format};
use org_payroll::roster::Roster;

#[derive(Parser)]
#[command(name = "orgpay")]
#[command(about = "Department salary totals for a small company")]
struct Cli {
    /// JSON roster to report on instead of the built-in demo company
    #[arg(long, global = true)]
    roster: Option<PathBuf>,

    /// Reject rosters with empty names or negative amounts
    #[arg(long, global = true)]
    strict: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print salary totals per department
    Summary {
        /// Print the totals as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print every department with its members
    Tree,
}

/// Log targets for the library and this binary
const DEFAULT_LOG_FILTER: &str = "org_payroll=info,orgpay=info";

/// Initialize tracing with output to stderr so stdout only carries reports
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let roster = match &cli.roster {
        Some(path) => Roster::load(path)?,
        None => Roster::demo(),
    };
    tracing::info!("Loaded {} departments", roster.departments.len());

    let format = match cli.command {
        None => Format::default(),
        Some(Commands::Summary { json: false }) => Format::Summary,
        Some(Commands::Summary { json: true }) => Format::Json,
        Some(Commands::Tree) => Format::Tree,
    };
    print!("{}", report::render(&roster, format, cli.strict)?);

    Ok(())
}
