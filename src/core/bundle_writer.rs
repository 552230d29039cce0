use crate::domain::errors::BundleError;
use crate::domain::models::{BundleConfig, CandidateFile, path_relative_to};
use crate::infra::file_system::read_file_contents;
use log::{debug, info};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

pub const BUNDLE_START_MARKER: &str = "// Bundled Code Starts Here";
pub const BUNDLE_END_MARKER: &str = "// Bundled Code Ends Here";

/// Streams the ordered files into the destination as one bundle. The
/// destination is truncated up front; on a mid-run failure a partial file may
/// remain, but the handle is flushed and closed on every exit path.
pub fn write_bundle(
    files: &[CandidateFile],
    config: &BundleConfig,
    root: &Path,
) -> Result<(), BundleError> {
    info!(
        "Writing bundle of {} files to {}",
        files.len(),
        config.output_path.display()
    );

    let destination = File::create(&config.output_path)?;
    let mut writer = BufWriter::new(destination);

    writeln!(writer, "// Author: {}", config.author)?;
    writeln!(writer, "{}", BUNDLE_START_MARKER)?;
    writeln!(writer)?;

    for file in files {
        write_section(&mut writer, file, config, root)?;
    }

    writeln!(writer, "{}", BUNDLE_END_MARKER)?;
    writer.flush()?;

    info!("Bundle written to {}", config.output_path.display());
    Ok(())
}

fn write_section(
    writer: &mut impl Write,
    file: &CandidateFile,
    config: &BundleConfig,
    root: &Path,
) -> Result<(), BundleError> {
    debug!("Bundling {}", file.path.display());

    if config.include_source_note {
        let note_path = path_relative_to(&file.path, root);
        writeln!(writer, "// File: {}", note_path.display())?;
    }

    let contents = read_file_contents(&file.path)?;
    for line in contents.lines() {
        if config.remove_empty_lines && line.trim().is_empty() {
            continue;
        }
        writeln!(writer, "{}", line)?;
    }

    // Every section ends with exactly one blank separator line.
    writeln!(writer)?;
    Ok(())
}
