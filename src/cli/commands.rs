use crate::core::bundle_writer::write_bundle;
use crate::core::response::{DEFAULT_RESPONSE_FILE, create_response_file};
use crate::core::selector::FileSelector;
use crate::core::sorter::sort_files;
use crate::domain::errors::BundleError;
use crate::domain::models::{BundleConfig, SortMode, parse_language_tags};
use crate::infra::logger::setup_logger;
use clap::{Parser, Subcommand};
use log::{debug, info};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "codebundle")]
#[command(about = "Bundle source files from a directory tree into a single file", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Bundle code files into a single file
    Bundle {
        /// File path and name of the bundle
        #[arg(long)]
        output: PathBuf,

        /// Programming languages (comma-separated or 'all')
        #[arg(long)]
        language: String,

        /// Include a comment with each file's origin path
        #[arg(long)]
        note: bool,

        /// Sort order: 'name' or 'type'
        #[arg(long, default_value = "name")]
        sort: String,

        /// Remove empty lines from bundled code
        #[arg(long)]
        remove_empty_lines: bool,

        /// Name of the file author
        #[arg(long, default_value = "")]
        author: String,
    },

    /// Create a response file capturing bundle options for replay
    CreateRsp {
        /// Response file name
        file: Option<PathBuf>,
    },
}

/// Parses the command line, dispatches, and reports every failure as a
/// printed message with a failing exit code. Errors never escape as panics.
pub fn run() -> ExitCode {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            println!("An error occurred: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn execute(cli: Cli) -> anyhow::Result<()> {
    // Logger setup failure fits none of the typed arms; it lands in the
    // catch-all.
    setup_logger(cli.verbose).map_err(|e| BundleError::Unexpected(e.to_string()))?;

    match cli.command {
        Commands::Bundle {
            output,
            language,
            note,
            sort,
            remove_empty_lines,
            author,
        } => {
            info!("Starting bundle command");
            debug!(
                "Command parameters: output={}, language={}, note={}, sort={}, remove_empty_lines={}, author={}",
                output.display(),
                language,
                note,
                sort,
                remove_empty_lines,
                author
            );

            let config = BundleConfig {
                output_path: output,
                language_tags: parse_language_tags(&language),
                include_source_note: note,
                sort_mode: SortMode::parse(&sort),
                remove_empty_lines,
                author,
            };

            bundle(&config)?;
        }
        Commands::CreateRsp { file } => {
            info!("Starting create-rsp command");
            create_rsp(file)?;
        }
    }
    Ok(())
}

fn bundle(config: &BundleConfig) -> Result<(), BundleError> {
    config.validate()?;

    let root = std::env::current_dir()?;
    let selector = FileSelector::new();

    let files = selector.select(&root, &config.language_tags)?;
    let files = sort_files(files, config.sort_mode);
    write_bundle(&files, config, &root)?;

    let resolved = config
        .output_path
        .canonicalize()
        .unwrap_or_else(|_| config.output_path.clone());
    println!("bundle command executed successfully!");
    println!("The output file is created in: {}", resolved.display());
    Ok(())
}

fn create_rsp(file: Option<PathBuf>) -> Result<(), BundleError> {
    let path = file.unwrap_or_else(|| PathBuf::from(DEFAULT_RESPONSE_FILE));
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    create_response_file(&mut input, &mut output, &path)?;
    Ok(())
}
