//! Bloch - single-qubit Bloch sphere visualizer
//! Command-line interface for applying gates and watching the state move

mod render;

use anyhow::{Context, Result};
use bloch_core::config::CONFIG_FILE;
use bloch_core::{Action, BlochController, VisualizerConfig};
use clap::{Parser, Subcommand};
use colored::*;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use render::Report;

#[derive(Parser)]
#[command(name = "bloch")]
#[command(author = "SIL Contributors")]
#[command(version = "2026.10.19")]
#[command(about = "Bloch - single-qubit state on the Bloch sphere", long_about = None)]
struct Cli {
    /// Configuration file (TOML). Defaults to ./bloch.toml when present
    #[arg(short, long, global = true, value_name = "FILE", env = "BLOCH_CONFIG")]
    config: Option<PathBuf>,

    /// Verbose logging (debug level)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply a sequence of actions starting from |0>
    Run {
        /// Actions, e.g. `h x theta=45 plus`
        #[arg(value_name = "ACTION", required = true)]
        actions: Vec<String>,

        /// Print every animation frame
        #[arg(short, long)]
        animate: bool,

        /// Only print the final state
        #[arg(short, long)]
        quiet: bool,

        /// Print the final state as JSON
        #[arg(long, conflicts_with = "animate")]
        json: bool,
    },

    /// Interactive session, one action per line
    Repl {
        /// Print every animation frame
        #[arg(short, long)]
        animate: bool,
    },

    /// List the gate library
    Gates,

    /// Show version and effective configuration
    Info,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = dispatch(cli) {
        eprintln!("{} {:#}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "bloch=debug,bloch_core=debug"
    } else {
        "bloch=info,bloch_core=warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn dispatch(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Run {
            actions,
            animate,
            quiet,
            json,
        } => run_command(config, &actions, animate, quiet, json),
        Commands::Repl { animate } => repl_command(config, animate),
        Commands::Gates => {
            let mut out = io::stdout().lock();
            render::write_gates(&mut out, config.precision)?;
            Ok(())
        }
        Commands::Info => print_info(&config),
    }
}

/// Explicit path, else ./bloch.toml if it exists, else defaults; env vars on top
fn load_config(path: Option<&Path>) -> Result<VisualizerConfig> {
    let default_path = Path::new(CONFIG_FILE);
    let path = match path {
        Some(p) => Some(p),
        None if default_path.exists() => Some(default_path),
        None => None,
    };

    if let Some(p) = path {
        tracing::debug!(path = %p.display(), "loading config");
    }

    VisualizerConfig::load(path).with_context(|| match path {
        Some(p) => format!("failed to load {}", p.display()),
        None => "invalid configuration".to_string(),
    })
}

// ============================================================================
// Commands
// ============================================================================

fn run_command(
    config: VisualizerConfig,
    inputs: &[String],
    animate: bool,
    quiet: bool,
    json: bool,
) -> Result<()> {
    // Parse everything up front so a typo doesn't leave a half-applied run
    let actions = inputs
        .iter()
        .map(|s| s.parse::<Action>().with_context(|| format!("in action '{s}'")))
        .collect::<Result<Vec<_>>>()?;

    let mut controller = BlochController::new(config);
    let mut out = io::stdout().lock();

    for action in actions {
        let outcome = controller.dispatch(action)?;

        if json || quiet {
            continue;
        }

        writeln!(out, "{} {}", "Applying".green().bold(), action.to_string().cyan())?;
        if animate {
            render::play(&mut out, outcome, &controller)?;
        }
        render::write_state(&mut out, &controller)?;
        writeln!(out)?;
    }

    if json {
        let report = Report::new(inputs.to_vec(), &controller);
        serde_json::to_writer_pretty(&mut out, &report)?;
        writeln!(out)?;
    } else if quiet {
        render::write_state(&mut out, &controller)?;
    }

    tracing::info!(actions = inputs.len(), "run finished");
    Ok(())
}

fn repl_command(config: VisualizerConfig, animate: bool) -> Result<()> {
    let mut controller = BlochController::new(config);
    let stdin = io::stdin();
    let mut out = io::stdout().lock();

    writeln!(out, "{}", "Qubit Bloch Sphere".bold())?;
    writeln!(out, "Type 'help' for the list of actions, 'quit' to leave.")?;
    writeln!(out)?;
    render::write_state(&mut out, &controller)?;

    loop {
        write!(out, "\n{} ", "bloch>".cyan().bold())?;
        out.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        if repl_line(&mut out, &mut controller, line.trim(), animate)? == ReplStep::Quit {
            break;
        }
    }

    writeln!(out)?;
    Ok(())
}

/// What the REPL loop does after a line
#[derive(Debug, PartialEq, Eq)]
enum ReplStep {
    Continue,
    Quit,
}

fn repl_line<W: Write>(
    out: &mut W,
    controller: &mut BlochController,
    input: &str,
    animate: bool,
) -> io::Result<ReplStep> {
    match input {
        "" => {}
        "quit" | "exit" | "q" => return Ok(ReplStep::Quit),
        "help" | "?" => render::write_action_help(out)?,
        "state" => render::write_state(out, controller)?,
        "reset" => {
            controller.reset();
            render::write_state(out, controller)?;
        }
        input => match controller.dispatch_str(input) {
            Ok(outcome) => {
                if animate {
                    render::play(out, outcome, controller)?;
                }
                render::write_state(out, controller)?;
            }
            Err(e) => {
                tracing::debug!(input, "rejected action");
                writeln!(out, "{} {}", "error:".red().bold(), e)?;
            }
        },
    }
    Ok(ReplStep::Continue)
}

fn print_info(config: &VisualizerConfig) -> Result<()> {
    println!("{}", "Bloch - Qubit Bloch Sphere".bold());
    println!();
    println!("A single qubit drawn as a point on the Bloch sphere, moved by gates.");
    println!();
    println!("{}", "Gates:".bold());
    println!("  I, H, X, Y, Z, S (phase), T (pi/8), sN (sqrt not)");
    println!();
    println!("{}", "Commands:".bold());
    println!("  bloch run h x h                  # Apply gates from |0>");
    println!("  bloch run plus s --animate       # Print every animation frame");
    println!("  bloch run theta=90 phi=45 --json # Final state as JSON");
    println!("  bloch repl                       # Interactive session");
    println!("  bloch gates                      # Gate matrices and rotations");
    println!("  bloch info                       # Show this info");
    println!();
    println!("{}", "Configuration:".bold());
    for line in config.to_toml()?.lines() {
        println!("  {line}");
    }
    Ok(())
}
