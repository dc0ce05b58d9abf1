use clap::Parser;
use textpattern::cli::{Cli, Command};
use textpattern::output::Output;
use textpattern::{validate_text_pattern_value, validate_value_type};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(true) => std::process::exit(0),
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(2);
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("textpattern=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> anyhow::Result<bool> {
    let use_color = !cli.no_color && atty::is(atty::Stream::Stdout);
    let mut output = Output::new(use_color);

    match &cli.command {
        Command::Check { pattern, value } => {
            let matched = validate_text_pattern_value(&pattern.pattern(), value)?;
            output.print_verdict(matched, "match", "no match")?;
            Ok(matched)
        }
        Command::Capacity { pattern } => {
            let capacity = pattern.pattern().total_values_potential()?;
            output.print_capacity(capacity)?;
            Ok(true)
        }
        Command::ValueType {
            pattern,
            value_type,
        } => {
            let compatible = validate_value_type(&pattern.pattern(), *value_type);
            output.print_verdict(compatible, "compatible", "incompatible")?;
            Ok(compatible)
        }
    }
}
