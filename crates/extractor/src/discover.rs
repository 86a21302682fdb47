//! Candidate stub file discovery

use grpc_readme_generator_common::{GeneratorError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Suffix carried by generated betterproto modules
const STUB_SUFFIX: &str = ".py";

/// Reserved-name prefix for package machinery files (`__init__.py` etc.)
const RESERVED_PREFIX: &str = "__";

/// Find the stub file to scan in a directory of generated sources
///
/// Entries are filtered to regular files matching the suffix/prefix rules,
/// then sorted lexicographically so the pick does not depend on readdir
/// order, which varies across filesystems.
pub fn find_stub_file(dir: &Path) -> Result<PathBuf> {
    if !dir.is_dir() {
        return Err(GeneratorError::DirectoryNotFound(dir.to_path_buf()));
    }

    let mut candidates = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() && is_candidate(&path) {
            candidates.push(path);
        }
    }

    if candidates.is_empty() {
        return Err(GeneratorError::NoCandidates(dir.to_path_buf()));
    }

    candidates.sort();
    Ok(candidates.swap_remove(0))
}

/// Check the suffix/prefix rules for a single directory entry
fn is_candidate(path: &Path) -> bool {
    match path.file_name().and_then(|n| n.to_str()) {
        Some(name) => name.ends_with(STUB_SUFFIX) && !name.starts_with(RESERVED_PREFIX),
        None => false,
    }
}
