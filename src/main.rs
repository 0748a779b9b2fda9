use clap::{Parser as ClapParser, Subcommand};
use json_conditional::cli::{self, CliError, TranslateOptions};
use json_conditional::{DEFAULT_MAX_DEPTH, Dialect, TranslatorOptions};
use std::io::{self, Read};
use tracing_subscriber::EnvFilter;

#[derive(ClapParser)]
#[command(name = "jsoncond")]
#[command(about = "Translate IBM-style or JSONLogic conditional JSON into a SQL WHERE fragment")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Translate a condition into a SQL fragment
    Translate {
        /// Input syntax: 'ibm' or 'jsonlogic'
        dialect: Dialect,

        /// Conditional JSON (reads from stdin if not provided)
        #[arg(short, long)]
        input: Option<String>,

        /// Deepest nesting accepted before the input is rejected
        #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
        max_depth: usize,
    },

    /// List the supported operators
    Operators {
        /// Only list this dialect
        dialect: Option<Dialect>,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Translate {
            dialect,
            input,
            max_depth,
        } => run_translate(dialect, input, max_depth),
        Commands::Operators { dialect } => {
            print!("{}", cli::operators_overview(dialect));
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run_translate(dialect: Dialect, input: Option<String>, max_depth: usize) -> Result<(), CliError> {
    let input = match input {
        Some(s) => Some(s),
        None if !atty::is(atty::Stream::Stdin) => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Some(buffer)
        }
        None => None,
    };

    let options = TranslateOptions {
        dialect,
        input,
        translator: TranslatorOptions::default().with_max_depth(max_depth),
    };

    println!("{}", cli::execute_translate(&options)?);
    Ok(())
}
