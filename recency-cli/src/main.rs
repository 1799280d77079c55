use clap::{CommandFactory, Parser};
use is_terminal::IsTerminal;
use std::io::Write;
use recency_cli::commands::{Cli, Commands};
use recency_cli::handlers::{
    handle_config_command, handle_explain_command, handle_rank_command,
};
use recency_cli::output::{OutputFormat, output_error_json};
use recency_cli::RecencyCliContext;
use tracing::{Level, debug};

fn main() {
    let cli_args = Cli::parse();

    // Determine output format - priority: machine flag > --output / RECENCY_OUTPUT
    let output_format = if cli_args.machine {
        OutputFormat::Json
    } else {
        match cli_args.output.parse::<OutputFormat>() {
            Ok(format) => format,
            Err(e) => {
                output_error_json(&e, OutputFormat::Table);
                std::process::exit(2);
            }
        }
    };

    let is_quiet = cli_args.quiet
        || std::env::var("RECENCY_QUIET")
            .map(|v| v == "true" || v == "1")
            .unwrap_or(false);

    // Machine mode keeps stderr quiet too, so callers only see structured errors
    let log_level = if is_quiet || output_format.is_machine() {
        Level::ERROR
    } else if cli_args.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();

    if !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    if let Err(e) = run(cli_args, output_format) {
        output_error_json(&e, output_format);
        std::process::exit(1);
    }
}

fn run(cli_args: Cli, output_format: OutputFormat) -> recency::Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match &cli_args.command {
        Commands::Version => {
            writeln!(out, "Recency CLI v{}", recency::VERSION)?;
            return Ok(());
        }
        Commands::Completions(args) => {
            let mut command = Cli::command();
            clap_complete::generate(
                clap_complete::Shell::from(args.shell),
                &mut command,
                "recency",
                &mut out,
            );
            return Ok(());
        }
        _ => {}
    }

    let ctx = RecencyCliContext::new(cli_args.config.as_deref())?;
    debug!(ranking = ?ctx.config.ranking, "Loaded configuration");

    match &cli_args.command {
        Commands::Rank(args) => handle_rank_command(args, &ctx, output_format, &mut out),
        Commands::Explain(args) => handle_explain_command(args, &ctx, output_format, &mut out),
        Commands::Config => handle_config_command(&ctx, output_format, &mut out),
        Commands::Version | Commands::Completions(_) => Ok(()),
    }
}
