//! devware-menu CLI
//!
//! Show a keyboard-driven selection menu and print the chosen value.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use devware_menu::config::{default_menu_path, load_menu};
use devware_menu::{EXIT, Menu, MenuItem};

#[derive(Parser)]
#[command(name = "devware-menu")]
#[command(about = "Keyboard-driven terminal selection menu")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a menu built from command-line items and print the chosen value
    Choose {
        /// Title shown inside the box
        #[arg(long, default_value = "Select an option")]
        title: String,

        /// Box width in terminal cells
        #[arg(long)]
        width: Option<usize>,

        /// Menu entry; repeat for each item, in display order
        #[arg(long = "item", value_name = "LABEL=VALUE", required = true, value_parser = parse_item)]
        items: Vec<MenuItem>,
    },

    /// Show a menu loaded from a JSON definition file
    File {
        /// Definition file (default: <config dir>/devware-menu/menu.json)
        path: Option<PathBuf>,

        /// Box width in terminal cells, overriding the file
        #[arg(long)]
        width: Option<usize>,
    },

    /// Show the Dev Ware main menu
    Demo {
        /// Keep re-showing the menu until "exit" is chosen
        #[arg(long)]
        repeat: bool,
    },
}

/// Parse `LABEL=VALUE`, splitting on the first `=`.
///
/// Without `=`, the text serves as both label and value.
fn parse_item(raw: &str) -> Result<MenuItem, String> {
    let item = match raw.split_once('=') {
        Some((label, value)) => MenuItem::new(label, value),
        None => MenuItem::new(raw, raw),
    };
    if item.label.is_empty() {
        return Err(format!("empty label in item {:?}", raw));
    }
    Ok(item)
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Choose { title, width, items } => cmd_choose(title, width, items),
        Commands::File { path, width } => cmd_file(path, width),
        Commands::Demo { repeat } => cmd_demo(repeat),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr so stdout carries only the chosen value.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("devware_menu=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

// ============================================================================
// COMMAND HANDLERS
// ============================================================================

fn cmd_choose(title: String, width: Option<usize>, items: Vec<MenuItem>) -> Result<(), String> {
    let mut menu = Menu::new(title, items);
    if let Some(width) = width {
        menu = menu.with_width(width).map_err(|e| e.to_string())?;
    }
    println!("{}", menu.show());
    Ok(())
}

fn cmd_file(path: Option<PathBuf>, width: Option<usize>) -> Result<(), String> {
    let path = match path {
        Some(p) => p,
        None => default_menu_path().map_err(|e| e.to_string())?,
    };
    debug!(path = %path.display(), "loading menu definition");

    let mut menu = load_menu(&path, width).map_err(|e| e.to_string())?;
    println!("{}", menu.show());
    Ok(())
}

fn cmd_demo(repeat: bool) -> Result<(), String> {
    loop {
        // Fresh menu per round: selection never carries over
        let choice = main_menu().show();
        println!("{}", choice);

        if choice == EXIT {
            eprintln!("Thanks for playing Dev Ware!");
            break;
        }
        if !repeat {
            break;
        }
    }
    Ok(())
}

/// The application's top-level screen list.
fn main_menu() -> Menu {
    Menu::new(
        "Main Menu - Select Your Adventure",
        vec![
            MenuItem::new("🎲 Challenge Mode (All Games)", "challenge"),
            MenuItem::new("🎯 Typing Speed Challenge", "typing"),
            MenuItem::new("🧱 Tetris", "block-stacking"),
            MenuItem::new("👤 Login / Register", "auth"),
            MenuItem::new("🏆 View Leaderboards", "leaderboard"),
            MenuItem::new("⚙️  Settings", "settings"),
            MenuItem::new("❌ Exit", EXIT),
        ],
    )
}
