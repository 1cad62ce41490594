use std::{
    fs::read_to_string,
    io::{self, Read, Write},
    path::PathBuf,
    process::ExitCode,
    time::Instant,
};

use anyhow::{Context, Result};
use clap::Parser;
use scanner::{render_error, Scanned, Scanner, ScannerConfig, TriviaKind};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Prints the token stream of a source file, one token per line.
#[derive(Parser, Debug)]
#[command(name = "scanner", version, about)]
struct Cli {
    /// Source file to scan; reads stdin when omitted
    file: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,

    /// Also print comments
    #[arg(long)]
    trivia: bool,

    /// Accept numbers such as `017`
    #[arg(long)]
    allow_leading_zeros: bool,

    /// Match keywords regardless of letter case
    #[arg(long)]
    case_insensitive_keywords: bool,

    /// Allow `_` in identifiers
    #[arg(long)]
    allow_underscores: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_logging(cli.verbose) {
        eprintln!("{:#}", e);
        return ExitCode::FAILURE;
    }

    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(2)
        }
    }
}

fn init_logging(verbose: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr).with_target(false))
        .try_init()
        .context("Failed to initialize logging")?;

    Ok(())
}

/// Scans the input and prints every token. Returns whether it was error free.
fn run(cli: Cli) -> Result<bool> {
    let (source, file_name) = match &cli.file {
        Some(path) => {
            let source = read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            let file_name = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            (source, file_name)
        }
        None => {
            let mut source = String::new();
            io::stdin()
                .read_to_string(&mut source)
                .context("Failed to read stdin")?;
            (source, String::from("<stdin>"))
        }
    };

    let config = ScannerConfig {
        allow_leading_zeros: cli.allow_leading_zeros,
        case_insensitive_keywords: cli.case_insensitive_keywords,
        allow_underscores: cli.allow_underscores,
    };

    let start = Instant::now();
    let mut scanner = Scanner::with_config(source.clone(), Some(file_name), config);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut tokens = 0usize;
    let mut errors = 0usize;

    while let Some(scanned) = scanner.scan_lexeme() {
        match scanned {
            Scanned::Token(token) => {
                tokens += 1;
                writeln!(out, "{}", token)?;

                if let Some(error) = token.error() {
                    errors += 1;
                    out.flush()?;
                    eprint!("{}", render_error(error, &source));
                }
            }
            Scanned::Trivia(trivia) if cli.trivia && trivia.kind == TriviaKind::Comment => {
                writeln!(out, "{} COMMENT {}", trivia.line, trivia.text)?;
            }
            Scanned::Trivia(_) => {}
        }
    }

    info!(tokens, errors, elapsed = ?start.elapsed(), "scanned input");

    Ok(errors == 0)
}
