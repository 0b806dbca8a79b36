use clap::{Parser, Subcommand};
use colored::Colorize;
use eyre::Result;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use todostore::{
    Assume, Backend, Config, Confirm, Filter, KeyValueStore, Notification, PromptConfirm, Severity, TaskStore,
    TaskView, ValidationError,
};

#[derive(Parser)]
#[command(name = "todostore")]
#[command(about = "TodoStore CLI - add, complete, delete and filter to-do tasks")]
#[command(version = env!("GIT_DESCRIBE"))]
struct Cli {
    /// Directory holding the task data
    #[arg(short, long, env = "TODOSTORE_PATH")]
    store_path: Option<PathBuf>,

    /// Storage backend
    #[arg(short, long, env = "TODOSTORE_BACKEND", value_enum)]
    backend: Option<Backend>,

    /// Config file (default: <config dir>/todostore/config.yml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a task
    Add {
        /// Task text (words are joined with spaces)
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// Flip a task between pending and completed
    Toggle { id: String },

    /// Delete a task
    Delete {
        id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Delete all tasks
    Clear {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Show tasks
    List {
        #[arg(short, long, value_enum, default_value_t = Filter::All)]
        filter: Filter,
    },

    /// Show task counters
    Stats,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Setup tracing
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red().bold(), e);
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let config = Config::load(cli.config.as_deref())?.with_overrides(cli.store_path, cli.backend);
    todostore::config::check_store_path(&config.store_path)?;

    // Open store
    let mut store = TaskStore::open(config.open_backend()?);

    match cli.command {
        Commands::Add { text } => match store.add(&text.join(" ")) {
            Ok(_) => rerender(&store, Some(Notification::added())),
            Err(e) => match ValidationError::from_report(&e) {
                Some(invalid) => {
                    print_notification(&Notification::invalid(invalid));
                    return Ok(ExitCode::FAILURE);
                }
                None => return Err(e),
            },
        },
        Commands::Toggle { id } => {
            let notification = store.toggle(&id)?.map(Notification::toggled);
            rerender(&store, notification);
        }
        Commands::Delete { id, yes } => {
            let mut confirm = confirmation(yes);
            let outcome = store.delete(&id, &mut *confirm)?;
            rerender(&store, Notification::deleted(&outcome));
        }
        Commands::Clear { yes } => {
            let mut confirm = confirmation(yes);
            let outcome = store.clear_all(&mut *confirm)?;
            rerender(&store, Notification::cleared(&outcome));
        }
        Commands::List { filter } => {
            println!("{}", TaskView::project(store.tasks(), filter));
        }
        Commands::Stats => {
            let view = TaskView::project(store.tasks(), Filter::All);
            for label in view.stat_labels() {
                println!("{}", label);
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn confirmation(yes: bool) -> Box<dyn Confirm> {
    if yes {
        Box::new(Assume(true))
    } else {
        Box::new(PromptConfirm::new(io::stdin().lock(), io::stdout()))
    }
}

fn rerender<K: KeyValueStore>(store: &TaskStore<K>, notification: Option<Notification>) {
    if let Some(notification) = notification {
        print_notification(&notification);
    }
    println!("{}", TaskView::project(store.tasks(), Filter::All));
}

fn print_notification(notification: &Notification) {
    let message = match notification.severity {
        Severity::Success => notification.message.green(),
        Severity::Error => notification.message.red(),
        Severity::Info => notification.message.blue(),
    };
    println!("{}", message.bold());
}
