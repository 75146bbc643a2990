use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use serde_json::json;

use reelplan::brief::{load_brief, Brief};
use reelplan::error_codes::{find_coded_error, CodedError};
use reelplan::plan::generate;

#[derive(Debug, Parser)]
#[command(name = "reelplan")]
#[command(about = "Narrative-to-storyboard plan compiler")]
#[command(version = long_version())]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Compile a brief file into a production plan.
    Build {
        brief: PathBuf,
        #[arg(short = 'o', long = "output")]
        output: Option<PathBuf>,
        #[arg(long = "format", default_value = "json")]
        format: String,
    },
    /// Load a brief, generate, and print a one-line summary.
    Check {
        brief: PathBuf,
    },
    /// Shareable query-string encoding of a brief.
    Share {
        #[command(subcommand)]
        command: ShareCommands,
    },
}

#[derive(Debug, Subcommand)]
enum ShareCommands {
    /// Print the query-string encoding of a brief file.
    Encode { brief: PathBuf },
    /// Decode a query string back into a brief.
    Decode {
        query: String,
        #[arg(long = "format", default_value = "yaml")]
        format: String,
    },
}

#[derive(Debug, Clone, Copy)]
enum OutputFormat {
    Json,
    Yaml,
}

impl OutputFormat {
    fn from_keyword(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "yaml" => Ok(Self::Yaml),
            _ => Err(anyhow!(CodedError::usage(
                "INVALID_OUTPUT_FORMAT",
                format!("invalid output format '{value}'"),
            )
            .with_details(json!({
                "provided": value,
                "allowed": ["json", "yaml"]
            })))),
        }
    }
}

fn long_version() -> String {
    match option_env!("REELPLAN_GIT_HASH") {
        Some(hash) => format!("{} ({hash})", env!("CARGO_PKG_VERSION")),
        None => env!("CARGO_PKG_VERSION").to_owned(),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Build {
            brief,
            output,
            format,
        } => run_build(&brief, output.as_deref(), &format),
        Commands::Check { brief } => run_check(&brief),
        Commands::Share { command } => match command {
            ShareCommands::Encode { brief } => run_share_encode(&brief),
            ShareCommands::Decode { query, format } => run_share_decode(&query, &format),
        },
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if let Some(coded) = find_coded_error(&error) {
                let envelope = serde_json::to_string(&coded.envelope()).unwrap_or_else(|_| {
                    format!("{{\"ok\":false,\"error\":{{\"code\":\"{}\"}}}}", coded.code)
                });
                eprintln!("{envelope}");
                ExitCode::from(2)
            } else {
                eprintln!("error: {error:#}");
                ExitCode::FAILURE
            }
        }
    }
}

fn run_build(brief_path: &Path, output: Option<&Path>, format: &str) -> Result<()> {
    let format = OutputFormat::from_keyword(format)?;
    let brief = load_brief(brief_path)?;
    let plan = generate(&brief);

    let rendered = match format {
        OutputFormat::Json => serde_json::to_string_pretty(&plan)?,
        OutputFormat::Yaml => serde_yaml::to_string(&plan)?,
    };

    match output {
        Some(path) => {
            fs::write(path, rendered)
                .with_context(|| format!("failed to write plan {}", path.display()))?;
            println!("Wrote {}", path.display());
        }
        None => println!("{rendered}"),
    }
    Ok(())
}

fn run_check(brief_path: &Path) -> Result<()> {
    let brief = load_brief(brief_path)?;
    let plan = generate(&brief);

    let total_seconds: u32 = plan
        .scenes
        .iter()
        .map(|scene| scene.duration.trim_end_matches('s').parse::<u32>().unwrap_or(0))
        .sum();

    println!(
        "OK: {} ({} scenes, ~{}s, mood {}, aspect {}, {})",
        brief_path.display(),
        plan.scenes.len(),
        total_seconds,
        plan.mood,
        plan.aspect_ratio,
        plan.language
    );
    println!("Keywords: {}", plan.keywords.join(", "));
    Ok(())
}

fn run_share_encode(brief_path: &Path) -> Result<()> {
    let brief = load_brief(brief_path)?;
    println!("{}", brief.to_query());
    Ok(())
}

fn run_share_decode(query: &str, format: &str) -> Result<()> {
    let format = OutputFormat::from_keyword(format)?;
    let brief = Brief::from_query(query);
    let rendered = match format {
        OutputFormat::Json => serde_json::to_string_pretty(&brief)?,
        OutputFormat::Yaml => serde_yaml::to_string(&brief)?,
    };
    println!("{rendered}");
    Ok(())
}
