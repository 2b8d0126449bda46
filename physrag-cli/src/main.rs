use clap::{CommandFactory, Parser};
use is_terminal::IsTerminal;
use physrag_cli::handlers::*;
use physrag_cli::{Cli, Commands, OutputFormat, PhysragCliContext, output_error};
use std::process::ExitCode;
use tracing::Level;

fn main() -> ExitCode {
    let cli_args = Cli::parse();
    let output_format = cli_args.output;

    // Machine-readable output gets a clean stdout
    let log_level = if cli_args.quiet || output_format == OutputFormat::Json {
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

    match run(cli_args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output_error(&e, output_format);
            ExitCode::FAILURE
        }
    }
}

fn run(cli_args: Cli) -> physrag::Result<()> {
    let output_format = cli_args.output;

    let context = if cli_args.command.needs_corpus() {
        Some(PhysragCliContext::new(cli_args.corpus, cli_args.config)?)
    } else {
        None
    };

    match (cli_args.command, context) {
        (Commands::Version, _) => {
            println!("Physrag CLI v{}", physrag::VERSION);
        }

        (Commands::Completions(args), _) => {
            let mut command = Cli::command();
            clap_complete::generate(
                clap_complete::Shell::from(args.shell),
                &mut command,
                "physrag-cli",
                &mut std::io::stdout(),
            );
        }

        (Commands::Export(args), _) => handle_export_command(args, output_format)?,

        (Commands::Diagnose, Some(ctx)) => handle_diagnose_command(&ctx, output_format)?,

        (Commands::Search(args), Some(ctx)) => handle_search_command(args, &ctx, output_format)?,

        (Commands::Context(args), Some(ctx)) => {
            handle_context_command(args, &ctx, output_format)?
        }

        (Commands::Topics(args), Some(ctx)) => handle_topics_command(args, &ctx, output_format)?,

        (Commands::Chapters, Some(ctx)) => handle_chapters_command(&ctx, output_format)?,

        (_, None) => {
            return Err(physrag::PhysragError::Other(
                "Command requires a loaded corpus".to_string(),
            ));
        }
    }

    Ok(())
}
