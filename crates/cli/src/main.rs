mod completion;
mod serve;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use time::macros::format_description;
use time::{Date, OffsetDateTime};

use accord_core::{
    extract_fields, generate_agreement, parse_document, render_document, Agreement, BlockName,
    ContractIdentifiers, Field,
};

use crate::completion::{build_refine_prompt, complete, strip_code_fences, CompletionConfig};

/// Output format for CLI responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Text,
    Json,
}

/// Accord vendor supply agreement generator.
#[derive(Parser)]
#[command(name = "accord", version, about = "Accord vendor supply agreement generator")]
struct Cli {
    /// Output format (text or json)
    #[arg(long, global = true, default_value = "text", value_enum)]
    output: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a complete agreement from a requirements prompt
    Generate {
        /// Requirements prompt text
        #[arg(long, conflicts_with = "file")]
        prompt: Option<String>,
        /// Read the requirements prompt from a file
        #[arg(long)]
        file: Option<PathBuf>,
        /// Reference date (YYYY-MM-DD) for the contract identifiers; defaults to today (UTC)
        #[arg(long)]
        date: Option<String>,
        /// Refine the agreement wording through the Groq completion API
        #[arg(long)]
        refine: bool,
        /// Completion model for --refine (defaults to llama3-70b-8192)
        #[arg(long)]
        model: Option<String>,
    },

    /// Extract the commercial fields from a requirements prompt
    Extract {
        /// Requirements prompt text
        #[arg(long, conflicts_with = "file")]
        prompt: Option<String>,
        /// Read the requirements prompt from a file
        #[arg(long)]
        file: Option<PathBuf>,
    },

    /// Start the HTTP API server
    Serve {
        /// Port to listen on
        #[arg(long, default_value = "8000")]
        port: u16,
    },
}

fn main() {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            prompt,
            file,
            date,
            refine,
            model,
        } => {
            cmd_generate(
                prompt,
                file,
                date,
                refine,
                model.as_deref(),
                cli.output,
                cli.quiet,
            );
        }
        Commands::Extract { prompt, file } => {
            cmd_extract(prompt, file, cli.output, cli.quiet);
        }
        Commands::Serve { port } => {
            let rt = tokio::runtime::Runtime::new().expect("failed to create tokio runtime");
            if let Err(e) = rt.block_on(serve::start_server(port)) {
                eprintln!("Server error: {}", e);
                process::exit(1);
            }
        }
    }
}

// ── Subcommands ──────────────────────────────────────────────────────

fn cmd_generate(
    prompt: Option<String>,
    file: Option<PathBuf>,
    date: Option<String>,
    refine: bool,
    model: Option<&str>,
    output: OutputFormat,
    quiet: bool,
) {
    let prompt = read_prompt(prompt, file, output, quiet);

    let today = match date {
        Some(raw) => match parse_date(&raw) {
            Ok(date) => date,
            Err(msg) => {
                report_error(&msg, output, quiet);
                process::exit(1);
            }
        },
        None => OffsetDateTime::now_utc().date(),
    };

    let agreement = if refine {
        refine_agreement(&prompt, today, model, output, quiet)
    } else {
        match generate_agreement(&prompt, today) {
            Ok(agreement) => agreement,
            Err(e) => {
                report_error(&e.to_string(), output, quiet);
                process::exit(1);
            }
        }
    };

    print_agreement(&agreement, output);
}

/// Render the agreement, send it through the completion API for a wording
/// pass, and re-parse the result. A refined document that loses a block
/// marker fails validation like any other malformed document.
fn refine_agreement(
    prompt: &str,
    today: Date,
    model: Option<&str>,
    output: OutputFormat,
    quiet: bool,
) -> Agreement {
    let config = match CompletionConfig::from_env(model) {
        Ok(config) => config,
        Err(e) => {
            report_error(&e.to_string(), output, quiet);
            process::exit(1);
        }
    };

    let fields = extract_fields(prompt);
    let identifiers = match ContractIdentifiers::from_date(today) {
        Ok(identifiers) => identifiers,
        Err(e) => {
            report_error(&e.to_string(), output, quiet);
            process::exit(1);
        }
    };
    let document = render_document(&fields, &identifiers);

    if !quiet {
        eprintln!("Refining agreement with {}...", config.model);
    }

    let refined = match complete(&config, &build_refine_prompt(&document)) {
        Ok(text) => text,
        Err(e) => {
            report_error(&e.to_string(), output, quiet);
            process::exit(1);
        }
    };

    match parse_document(strip_code_fences(&refined)) {
        Ok(agreement) => agreement,
        Err(e) => {
            report_error(&format!("refined document is invalid: {}", e), output, quiet);
            process::exit(1);
        }
    }
}

fn cmd_extract(
    prompt: Option<String>,
    file: Option<PathBuf>,
    output: OutputFormat,
    quiet: bool,
) {
    let prompt = read_prompt(prompt, file, output, quiet);
    let fields = extract_fields(&prompt);

    match output {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&fields)
                    .unwrap_or_else(|e| format!("serialization error: {}", e))
            );
        }
        OutputFormat::Text => {
            for field in Field::ALL {
                println!("{}: {}", field.key(), fields.get(field));
            }
        }
    }
}

// ── Helpers ──────────────────────────────────────────────────────────

/// Resolve the requirements prompt from --prompt or --file. Exits with an
/// error when neither is given or the file cannot be read.
fn read_prompt(
    prompt: Option<String>,
    file: Option<PathBuf>,
    output: OutputFormat,
    quiet: bool,
) -> String {
    if let Some(prompt) = prompt {
        return prompt;
    }
    if let Some(path) = file {
        match std::fs::read_to_string(&path) {
            Ok(content) => return content,
            Err(e) => {
                report_error(
                    &format!("error reading file '{}': {}", path.display(), e),
                    output,
                    quiet,
                );
                process::exit(1);
            }
        }
    }
    report_error("either --prompt or --file is required", output, quiet);
    process::exit(1);
}

fn parse_date(raw: &str) -> Result<Date, String> {
    let format = format_description!("[year]-[month]-[day]");
    Date::parse(raw, &format).map_err(|e| format!("invalid date '{}' (expected YYYY-MM-DD): {}", raw, e))
}

/// Join the agreement bodies into the plain-text document, blocks in
/// document order separated by blank lines.
fn agreement_text(agreement: &Agreement) -> String {
    BlockName::ALL
        .iter()
        .map(|&name| agreement.get(name))
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn print_agreement(agreement: &Agreement, output: OutputFormat) {
    match output {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(agreement)
                    .unwrap_or_else(|e| format!("serialization error: {}", e))
            );
        }
        OutputFormat::Text => {
            println!("{}", agreement_text(agreement));
        }
    }
}

/// Report an error to stderr, respecting the output format and quiet flag.
pub(crate) fn report_error(msg: &str, output: OutputFormat, quiet: bool) {
    if quiet {
        return;
    }
    match output {
        OutputFormat::Text => eprintln!("{}", msg),
        OutputFormat::Json => eprintln!("{{\"error\": \"{}\"}}", msg.replace('"', "\\\"")),
    }
}
