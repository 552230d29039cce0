use crate::domain::errors::BundleError;
use crate::domain::models::{BundleConfig, SortMode, parse_language_tags};
use log::{debug, info};
use std::fs;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

pub const DEFAULT_RESPONSE_FILE: &str = "default.rsp";

const DEFAULT_LANGUAGES: &str = "all";
const DEFAULT_OUTPUT: &str = "bundled_code.txt";
const DEFAULT_AUTHOR: &str = "Unknown Author";

/// Raw answers collected from the interactive prompts, before any defaulting
/// or parsing.
#[derive(Debug, Default, Clone)]
pub struct PromptAnswers {
    pub languages: String,
    pub output: String,
    pub note: String,
    pub sort: String,
    pub remove_empty_lines: String,
    pub author: String,
}

/// Pure transformation from prompt answers to a resolved config. Blank
/// answers fall back to the defaults; booleans that fail to parse become
/// false.
pub fn answers_to_config(answers: &PromptAnswers) -> BundleConfig {
    let languages = non_empty_or(&answers.languages, DEFAULT_LANGUAGES);
    let output = non_empty_or(&answers.output, DEFAULT_OUTPUT);
    let author = non_empty_or(&answers.author, DEFAULT_AUTHOR);

    BundleConfig {
        output_path: PathBuf::from(output),
        language_tags: parse_language_tags(&languages),
        include_source_note: parse_bool(&answers.note),
        sort_mode: SortMode::parse(answers.sort.trim()),
        remove_empty_lines: parse_bool(&answers.remove_empty_lines),
        author,
    }
}

/// Serializes a config back into a `bundle` invocation string. Boolean
/// options serialize as flag presence so the result replays directly against
/// this CLI.
pub fn config_to_replay_string(config: &BundleConfig) -> String {
    let mut parts = vec![
        "bundle".to_string(),
        format!("--language {}", config.language_tags.join(",")),
        format!("--output {}", config.output_path.display()),
    ];

    if config.include_source_note {
        parts.push("--note".to_string());
    }

    let sort = match config.sort_mode {
        SortMode::ByName => "name",
        SortMode::ByExtension => "type",
    };
    parts.push(format!("--sort {}", sort));

    if config.remove_empty_lines {
        parts.push("--remove-empty-lines".to_string());
    }

    parts.push(format!("--author \"{}\"", config.author));
    parts.join(" ")
}

/// Prompts for the six bundle options and writes the replay string to `path`.
/// Prompt I/O goes through the generic reader/writer so tests can feed
/// canned answers.
pub fn create_response_file(
    input: &mut impl BufRead,
    output: &mut impl Write,
    path: &Path,
) -> Result<BundleConfig, BundleError> {
    info!("Creating response file: {}", path.display());
    writeln!(output, "Creating response file: {}", path.display())?;

    let answers = PromptAnswers {
        languages: ask(
            input,
            output,
            "Type the languages (e.g., csharp, javascript, html or 'all'):",
        )?,
        output: ask(input, output, "Enter the name of the output file:")?,
        note: ask(
            input,
            output,
            "Do you want to add comments with the file name? (true/false):",
        )?,
        sort: ask(input, output, "Sort type (name or type):")?,
        remove_empty_lines: ask(
            input,
            output,
            "Do you want to delete empty lines? (true/false):",
        )?,
        author: ask(input, output, "The name of the creator:")?,
    };

    let config = answers_to_config(&answers);
    let replay = config_to_replay_string(&config);
    debug!("Replay string: {}", replay);

    fs::write(path, &replay)?;

    writeln!(
        output,
        "The response file was created successfully: {}!",
        path.display()
    )?;
    // xargs parses the quotes around the author, so multi-word names replay
    // as a single argument.
    writeln!(
        output,
        "To run the command: xargs codebundle < {}",
        path.display()
    )?;

    Ok(config)
}

fn ask(
    input: &mut impl BufRead,
    output: &mut impl Write,
    question: &str,
) -> Result<String, BundleError> {
    writeln!(output, "{}", question)?;
    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(answer.trim().to_string())
}

fn non_empty_or(value: &str, default: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        default.to_string()
    } else {
        trimmed.to_string()
    }
}

fn parse_bool(value: &str) -> bool {
    value.trim().eq_ignore_ascii_case("true")
}
