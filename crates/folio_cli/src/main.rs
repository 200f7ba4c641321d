//! Folio CLI
//!
//! Run the portfolio typing effect in a terminal.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use folio_typing::{
    run_steps, Boundary, FolioConfig, RoleList, TypingCycler, CONFIG_FILE_NAME,
};
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod terminal;

use terminal::{TerminalLine, DEFAULT_CARET};

#[derive(Parser)]
#[command(name = "folio")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Portfolio typing effect", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Animate the typing effect on the current terminal line
    Run {
        /// Directory containing folio.toml
        #[arg(short, long, default_value = ".")]
        config: PathBuf,

        /// Stop after this many frames (runs until Ctrl-C otherwise)
        #[arg(short, long)]
        steps: Option<usize>,

        /// Role to display; repeat to build the rotation. Overrides the config
        #[arg(short, long = "role")]
        roles: Vec<String>,

        /// Static text shown before the typed role
        #[arg(short, long, default_value = "")]
        prefix: String,

        /// Divide every delay by this factor
        #[arg(long, default_value = "1")]
        speed: u32,

        /// Hide the caret after the typed text
        #[arg(long)]
        no_caret: bool,
    },

    /// Write a folio.toml with the default roles and cadence
    Init {
        /// Directory to write folio.toml into
        #[arg(default_value = ".")]
        dir: PathBuf,

        /// Overwrite an existing folio.toml
        #[arg(short, long)]
        force: bool,
    },

    /// List the configured roles
    Roles {
        /// Directory containing folio.toml
        #[arg(short, long, default_value = ".")]
        config: PathBuf,
    },

    /// Print frames and their delays without waiting
    Preview {
        /// Directory containing folio.toml
        #[arg(short, long, default_value = ".")]
        config: PathBuf,

        /// Number of frames to print (defaults to one full rotation)
        #[arg(short, long)]
        steps: Option<usize>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging; stderr keeps the animated stdout line clean
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();

    match cli.command {
        Commands::Run {
            config,
            steps,
            roles,
            prefix,
            speed,
            no_caret,
        } => cmd_run(&config, steps, roles, &prefix, speed, no_caret),

        Commands::Init { dir, force } => cmd_init(&dir, force),

        Commands::Roles { config } => cmd_roles(&config),

        Commands::Preview { config, steps } => cmd_preview(&config, steps),
    }
}

fn load_cycler(dir: &Path, roles: Vec<String>) -> Result<TypingCycler> {
    let config = FolioConfig::load_from_dir(dir)
        .with_context(|| format!("Failed to load config from {}", dir.display()))?;

    if roles.is_empty() {
        return config.build_cycler().context("Invalid typing config");
    }

    let roles = RoleList::new(roles).context("Invalid --role arguments")?;
    Ok(TypingCycler::with_timing(roles, config.typing.timing()))
}

fn cmd_run(
    dir: &Path,
    steps: Option<usize>,
    roles: Vec<String>,
    prefix: &str,
    speed: u32,
    no_caret: bool,
) -> Result<()> {
    let cycler = load_cycler(dir, roles)?;
    let timing = cycler.timing().accelerated(speed);
    let mut cycler = TypingCycler::with_timing(cycler.roles().clone(), timing);

    info!("Typing {} roles", cycler.roles().len());

    let caret = if no_caret { None } else { Some(DEFAULT_CARET) };

    // A single-threaded event loop is all the cycler needs
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start runtime")?;

    runtime.block_on(async {
        match steps {
            Some(steps) => {
                let mut line = TerminalLine::new(io::stdout())
                    .with_prefix(prefix)
                    .with_caret(caret);
                run_steps(&mut cycler, &mut line, steps).await;
                line.finish().context("Failed to write to stdout")?;
            }
            None => {
                let line = TerminalLine::new(io::stdout())
                    .with_prefix(prefix)
                    .with_caret(caret);
                let handle = folio_typing::spawn(cycler, line);

                tokio::signal::ctrl_c()
                    .await
                    .context("Failed to listen for Ctrl-C")?;

                let cycler = handle.stop().await?;
                println!();
                info!("Stopped on role {:?}", cycler.current_role());
            }
        }
        Ok::<(), anyhow::Error>(())
    })
}

fn cmd_init(dir: &Path, force: bool) -> Result<()> {
    let path = dir.join(CONFIG_FILE_NAME);
    if path.exists() && !force {
        anyhow::bail!(
            "{} already exists. Use --force to overwrite it.",
            path.display()
        );
    }

    let path = FolioConfig::default()
        .save_to_dir(dir)
        .context("Failed to write config")?;
    info!("Wrote {}", path.display());

    Ok(())
}

fn cmd_roles(dir: &Path) -> Result<()> {
    let cycler = load_cycler(dir, Vec::new())?;
    let timing = cycler.timing();

    for (i, role) in cycler.roles().iter().enumerate() {
        let cycle = timing.cycle_duration(cycler.roles().char_len(i));
        println!("{:>2}. {:<32} {:>6}ms", i + 1, role, cycle.as_millis());
    }

    Ok(())
}

fn cmd_preview(dir: &Path, steps: Option<usize>) -> Result<()> {
    let mut cycler = load_cycler(dir, Vec::new())?;

    // One rotation types and deletes every character once
    let rotation: usize = (0..cycler.roles().len())
        .map(|i| 2 * cycler.roles().char_len(i))
        .sum();
    let steps = steps.unwrap_or(rotation);

    let total: Duration = (0..cycler.roles().len())
        .map(|i| cycler.timing().cycle_duration(cycler.roles().char_len(i)))
        .sum();
    println!("rotation: {} frames, {}ms", rotation, total.as_millis());

    for _ in 0..steps {
        let step = cycler.step();
        let marker = match step.boundary {
            Boundary::None => "",
            Boundary::WordComplete => "  <- end pause",
            Boundary::DeletionComplete => "  <- next role",
        };
        println!("{:>6}ms  {:?}{}", step.delay.as_millis(), step.text, marker);
    }

    Ok(())
}
