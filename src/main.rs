use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;
use zcalc::calculator::NumberFormat;
use zcalc::config::Config;
use zcalc::eval::{OutputMode, evaluate};

#[derive(Parser, Debug)]
#[command(name = "zcalc", version, about = "A small four-function calculator")]
struct Cli {
    /// Path to the config file
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Decimal separator, overriding the config file and locale
    #[arg(long, global = true, value_name = "CHAR")]
    separator: Option<char>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Press keys without opening a window and print the display
    ///
    /// Keys are digits, `.` or `,`, `+ - x * /`, `ans` or `=`, `<` for
    /// backspace and `c` for clear. Whitespace is ignored.
    Eval {
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
        keys: Vec<String>,

        /// Print the display after every key
        #[arg(long)]
        trace: bool,

        /// Print the final state as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the default config file
    DefaultConfig,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config = Config::load(cli.config.as_deref()).context("Failed to load config")?;
    if let Some(separator) = cli.separator {
        let format = NumberFormat::new(separator).context("Invalid --separator")?;
        config.decimal_separator = Some(format.decimal_separator());
    }

    match cli.command {
        None => {
            info!("zcalc v{} starting...", env!("CARGO_PKG_VERSION"));
            let format = config.number_format().context("Invalid decimal separator")?;
            zcalc::ui::run(format, config.window);
        }
        Some(Command::Eval { keys, trace, json }) => {
            let format = config.number_format().context("Invalid decimal separator")?;
            let report = evaluate(format, &keys.join(" ")).context("Failed to evaluate keys")?;
            println!("{}", report.render(OutputMode { trace, json })?);
        }
        Some(Command::DefaultConfig) => {
            let rendered = Config::default_toml().context("Failed to render default config")?;
            print!("{rendered}");
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "zcalc=debug" } else { "zcalc=info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
