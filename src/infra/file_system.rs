use log::debug;
use std::fs;
use std::io::Read;
use std::path::Path;

/// Reads a source file fully into memory as text. An unreadable file is an
/// error here; the bundle run aborts rather than silently skipping content.
pub fn read_file_contents(path: &Path) -> std::io::Result<String> {
    debug!("Reading file contents: {}", path.display());
    let mut file = fs::File::open(path)?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;
    debug!("Read {} bytes from file", contents.len());
    Ok(contents)
}
