use clap::{Parser, Subcommand};

mod commands;

/// Environment variable holding the log filter directive.
const LOG_ENV: &str = "MANGO_WIDGET_LOG";

#[derive(Parser)]
#[command(name = "mango-widget", version, about = "Mango widget timeline inspector")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Read the shared store into a snapshot
    Snapshot(commands::snapshot::SnapshotArgs),
    /// Build the hourly timeline
    Timeline(commands::timeline::TimelineArgs),
    /// Resolve an entry into a layout descriptor
    Resolve(commands::resolve::ResolveArgs),
    /// Render an entry for a host platform
    Render(commands::render::RenderArgs),
    /// Widget catalog
    Widgets {
        #[command(subcommand)]
        action: commands::widgets::WidgetsAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_logging();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Snapshot(args) => commands::snapshot::run(args),
        Commands::Timeline(args) => commands::timeline::run(args),
        Commands::Resolve(args) => commands::resolve::run(args),
        Commands::Render(args) => commands::render::run(args),
        Commands::Widgets { action } => commands::widgets::run(action),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
