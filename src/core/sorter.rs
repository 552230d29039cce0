use crate::domain::models::{CandidateFile, SortMode};
use log::debug;

/// Orders the selected files for bundling. The extension sort must be stable:
/// files sharing an extension keep their relative traversal order so the
/// grouped output is deterministic.
pub fn sort_files(mut files: Vec<CandidateFile>, mode: SortMode) -> Vec<CandidateFile> {
    debug!("Sorting {} files with {:?}", files.len(), mode);
    match mode {
        SortMode::ByName => files.sort_by(|a, b| a.path.cmp(&b.path)),
        SortMode::ByExtension => files.sort_by(|a, b| a.extension.cmp(&b.extension)),
    }
    files
}
