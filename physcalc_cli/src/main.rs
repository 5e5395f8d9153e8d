//! `physcalc` - solve physics formulas from the command line.
//!
//! ```text
//! physcalc list --search energy
//! physcalc solve "Kinetic Energy" KE m=2kg v=36km/h
//! physcalc fav toggle "Ohm's Law"
//! physcalc interactive
//! ```

mod input;

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use physcalc_core::calculation::{compute, parse_value};
use physcalc_core::format::format_value;
use physcalc_core::formulas::{group_by_category, search, Formula};
use physcalc_core::session::History;
use physcalc_core::units::{convert_from_base, convert_to_base};
use physcalc_core::{CalcError, FavoritesStore};
use thiserror::Error;

use input::{parse_assignment, resolve_formula};

#[derive(Parser)]
#[command(name = "physcalc", version, about = "Physics formula calculator")]
struct Cli {
    /// Favorites file
    #[arg(
        long,
        global = true,
        env = "PHYSCALC_FAVORITES",
        default_value = "physcalc_favorites.json"
    )]
    favorites: PathBuf,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List formulas grouped by category
    List {
        /// Only formulas whose name or category contains this text
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Show a formula's variables and units
    Show { formula: String },
    /// Solve a formula for one variable
    Solve {
        formula: String,
        /// Symbol to solve for
        target: String,
        /// Known values as symbol=value[unit], e.g. v=36km/h
        assignments: Vec<String>,
        /// Print the result (or error) as JSON
        #[arg(long)]
        json: bool,
    },
    /// Convert a value between a display unit and its base unit
    Convert {
        #[arg(allow_hyphen_values = true)]
        value: String,
        unit: String,
        /// Treat the value as a base-unit value and convert it into `unit`
        #[arg(long)]
        from_base: bool,
    },
    /// Manage favorite formulas
    Fav {
        #[command(subcommand)]
        command: FavCommands,
    },
    /// Read commands from stdin until `quit`
    Interactive,
}

#[derive(Subcommand)]
enum FavCommands {
    /// List favorites
    List,
    /// Add a formula to favorites
    Add { formula: String },
    /// Remove a formula from favorites
    Remove { formula: String },
    /// Add the formula if absent, remove it if present
    Toggle { formula: String },
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Calc(#[from] CalcError),

    #[error("no formula matches '{0}'")]
    NoMatch(String),

    #[error("'{query}' matches several formulas: {}", names.join("; "))]
    Ambiguous { query: String, names: Vec<String> },

    #[error("bad assignment '{0}': expected symbol=value[unit]")]
    BadAssignment(String),

    #[error("'{formula}' has no variable '{symbol}' (variables: {known})")]
    UnknownSymbol {
        formula: String,
        symbol: String,
        known: String,
    },

    #[error("unknown command '{0}', try 'help'")]
    UnknownCommand(String),

    #[error("no formula selected, use 'use <formula>' first")]
    NoFormula,

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        _ => tracing::Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(level)
        .init();

    let json_errors = matches!(cli.command, Commands::Solve { json: true, .. });

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(CliError::Calc(err)) if json_errors => {
            match serde_json::to_string_pretty(&err) {
                Ok(json) => eprintln!("{}", json),
                Err(_) => eprintln!("error: {}", err),
            }
            ExitCode::FAILURE
        }
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Commands::List { search } => cmd_list(search.as_deref().unwrap_or("")),
        Commands::Show { formula } => cmd_show(&formula),
        Commands::Solve {
            formula,
            target,
            assignments,
            json,
        } => cmd_solve(&formula, &target, &assignments, json),
        Commands::Convert {
            value,
            unit,
            from_base,
        } => cmd_convert(&value, &unit, from_base),
        Commands::Fav { command } => cmd_fav(command, &cli.favorites),
        Commands::Interactive => cmd_interactive(&cli.favorites),
    }
}

fn user_id() -> String {
    std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_else(|_| "unknown".to_string())
}

// ============================================================================
// Commands
// ============================================================================

fn cmd_list(query: &str) -> Result<(), CliError> {
    let hits = search(query);
    if hits.is_empty() {
        return Err(CliError::NoMatch(query.to_string()));
    }
    for (category, formulas) in group_by_category(hits) {
        println!("{}", category);
        for formula in formulas {
            println!("  {}", formula.name);
        }
    }
    Ok(())
}

fn cmd_show(query: &str) -> Result<(), CliError> {
    let formula = resolve_formula(query)?;
    print_formula(formula);
    Ok(())
}

fn print_formula(formula: &Formula) {
    println!("{}", formula.name);
    println!("Category: {}", formula.category);
    for variable in &formula.variables {
        let units: Vec<&str> = variable
            .units
            .iter()
            .map(|unit| if unit.is_empty() { "(none)" } else { *unit })
            .collect();
        println!(
            "  {:<8} {:<32} [{}]",
            variable.symbol,
            variable.name,
            units.join(", ")
        );
    }
}

fn cmd_solve(query: &str, target: &str, assignments: &[String], json: bool) -> Result<(), CliError> {
    let formula = resolve_formula(query)?;
    let inputs = assignments
        .iter()
        .map(|arg| parse_assignment(formula, arg))
        .collect::<Result<Vec<_>, _>>()?;
    // Values given for the target itself are ignored by the solve.
    let inputs: Vec<_> = inputs.into_iter().filter(|i| i.symbol != target).collect();

    tracing::debug!(formula = formula.name, target, inputs = inputs.len(), "solving");
    let result = compute(formula, target, &inputs)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{} = {}", result.target, result.display_value);
    }
    Ok(())
}

fn cmd_convert(raw: &str, unit: &str, from_base: bool) -> Result<(), CliError> {
    let value = parse_value("value", raw)?;
    let converted = if from_base {
        convert_from_base("value", value, unit)?
    } else {
        convert_to_base("value", value, unit)?
    };
    println!("{}", format_value(converted));
    Ok(())
}

fn cmd_fav(command: FavCommands, path: &Path) -> Result<(), CliError> {
    if let FavCommands::List = command {
        let store = FavoritesStore::open(path)?;
        print_favorites(&store);
        return Ok(());
    }

    let mut store = FavoritesStore::open_locked(path, user_id())?;
    match command {
        FavCommands::List => {}
        FavCommands::Add { formula } => {
            let formula = resolve_formula(&formula)?;
            if store.add(formula)? {
                println!("Added {}", formula.name);
            } else {
                println!("{} is already a favorite", formula.name);
            }
        }
        FavCommands::Remove { formula } => {
            // Stored names may no longer be in the catalog, so try them verbatim first.
            let name = if store.favorites().contains(&formula) {
                formula
            } else {
                resolve_formula(&formula)?.name.to_string()
            };
            if store.remove(&name)? {
                println!("Removed {}", name);
            } else {
                println!("{} is not a favorite", name);
            }
        }
        FavCommands::Toggle { formula } => {
            let formula = resolve_formula(&formula)?;
            let state = if store.toggle(formula)? { "Added" } else { "Removed" };
            println!("{} {}", state, formula.name);
        }
    }
    Ok(())
}

fn print_favorites(store: &FavoritesStore) {
    if store.favorites().is_empty() {
        println!("No favorites yet");
        return;
    }
    for favorite in store.favorites().iter() {
        let marker = if favorite.resolve().is_some() { " " } else { "?" };
        println!("{} {}", marker, favorite.name);
    }
}

// ============================================================================
// Interactive
// ============================================================================

struct Session {
    store: FavoritesStore,
    history: History,
    current: Option<&'static Formula>,
}

const HELP: &str = "\
Commands:
  list [text]          list formulas, optionally filtered
  use <formula>        select a formula
  show                 show the selected formula
  solve <target> [symbol=value[unit]...]
  star                 toggle the selected formula as a favorite
  favorites            list favorites
  history              recent results, newest first
  quit";

fn cmd_interactive(path: &Path) -> Result<(), CliError> {
    let mut session = Session {
        store: FavoritesStore::open_locked(path, user_id())?,
        history: History::new(),
        current: None,
    };
    tracing::info!(path = %path.display(), "interactive session started");
    println!("physcalc: type 'help' for commands");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut lines = stdin.lock().lines();
    loop {
        let prompt = session.current.map(|f| f.short_name()).unwrap_or("physcalc");
        print!("{}> ", prompt);
        stdout.flush()?;

        let Some(line) = lines.next() else { break };
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if matches!(line, "quit" | "exit" | "q") {
            break;
        }
        if let Err(err) = session.dispatch(line) {
            println!("error: {}", err);
        }
    }
    Ok(())
}

impl Session {
    fn dispatch(&mut self, line: &str) -> Result<(), CliError> {
        let (command, rest) = line.split_once(' ').unwrap_or((line, ""));
        let rest = rest.trim();
        match command {
            "help" | "?" => println!("{}", HELP),
            "list" => cmd_list(rest)?,
            "use" => {
                let formula = resolve_formula(rest)?;
                self.current = Some(formula);
                println!("{}", formula.name);
            }
            "show" => print_formula(self.formula()?),
            "solve" => self.solve(rest)?,
            "star" => {
                let formula = self.formula()?;
                let state = if self.store.toggle(formula)? { "Added" } else { "Removed" };
                println!("{} {}", state, formula.name);
            }
            "favorites" => print_favorites(&self.store),
            "history" => {
                if self.history.is_empty() {
                    println!("No calculations yet");
                }
                for entry in self.history.iter() {
                    println!("  {}", entry);
                }
            }
            other => return Err(CliError::UnknownCommand(other.to_string())),
        }
        Ok(())
    }

    fn formula(&self) -> Result<&'static Formula, CliError> {
        self.current.ok_or(CliError::NoFormula)
    }

    fn solve(&mut self, args: &str) -> Result<(), CliError> {
        let formula = self.formula()?;
        let mut parts = args.split_whitespace();
        let target = parts.next().ok_or_else(|| CliError::BadAssignment(args.to_string()))?;
        let inputs = parts
            .map(|arg| parse_assignment(formula, arg))
            .filter(|input| !matches!(input, Ok(i) if i.symbol == target))
            .collect::<Result<Vec<_>, _>>()?;

        let result = compute(formula, target, &inputs)?;
        println!("{}", self.history.record(formula, &result));
        Ok(())
    }
}
