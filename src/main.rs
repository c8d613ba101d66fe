use std::{
    env,
    io::{self, BufRead, Write},
    path::PathBuf,
    process::ExitCode,
    str::FromStr,
};

use clap::Parser as _;
use sharkara::{
    errors::errors::SyntaxError,
    lexer::{
        lexer::tokenize,
        tokens::{format_tokens, Token},
    },
    parser::{parser::Parser, stmt::parse_stmt},
};
use tracing::{debug, trace, warn};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

#[derive(clap::Parser)]
#[clap(name = "sharkara", about = "Tokenize and parse a Sharkara statement")]
struct Cli {
    /// Source text to parse. Starts the interactive terminal when omitted.
    source: Option<String>,
    /// Read the source from a file instead
    #[clap(long, conflicts_with = "source")]
    file: Option<PathBuf>,
    /// Print the token listing before the tree
    #[clap(long)]
    tokens: bool,
}

fn main() -> anyhow::Result<ExitCode> {
    initialize_logging()?;

    let cli = Cli::parse();

    let source = match (&cli.source, &cli.file) {
        (Some(source), _) => source.clone(),
        (None, Some(path)) => {
            let source = std::fs::read_to_string(path)?;
            trace!(path = %path.display(), source_len = source.len(), "Read input file");
            source
        }
        (None, None) => {
            run_terminal()?;
            return Ok(ExitCode::SUCCESS);
        }
    };

    let tokens = tokenize(&source);
    if cli.tokens {
        println!("{}", format_tokens(&tokens));
    }

    match run(tokens) {
        Ok(tree) => {
            println!("{}", tree);
            println!("Parsing completed.");
            Ok(ExitCode::SUCCESS)
        }
        Err(error) => {
            display_error(&error);
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Parses one statement, returning its printed tree.
fn run(tokens: Vec<Token>) -> Result<String, SyntaxError> {
    debug!(count = tokens.len(), "Tokenized source");

    let mut parser = Parser::new(tokens);
    let stmt = parse_stmt(&mut parser)?;

    if !parser.remaining().is_empty() {
        warn!(count = parser.remaining().len(), "Ignoring tokens after the first statement");
    }

    Ok(stmt.to_string())
}

fn run_terminal() -> anyhow::Result<()> {
    println!("Welcome to the Sharkara Terminal");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("Sharkara> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;

        if matches!(line.trim().to_lowercase().as_str(), "exit" | "quit") {
            println!("Exiting Sharkara Terminal.");
            break;
        }

        let tokens = tokenize(&line);
        println!("Lexer Output:\n{}", format_tokens(&tokens));
        match run(tokens) {
            Ok(tree) => println!("Parser Output:\n{}", tree),
            Err(error) => display_error(&error),
        }
    }

    Ok(())
}

fn display_error(error: &SyntaxError) {
    println!("Error: {} ({})", error.get_error_name(), error.get_tip());
    println!("-> {}", error);
}

fn initialize_logging() -> anyhow::Result<()> {
    let env_filter = env::var("RUST_LOG").unwrap_or_default();

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr).with_filter(EnvFilter::from_str(&env_filter)?))
        .init();

    Ok(())
}
