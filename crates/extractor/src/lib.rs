//! Stub scanning for generated betterproto client packages
//!
//! This crate locates a generated Python stub file and recovers the service
//! metadata (`ServiceStub`) from its text via pattern matching. The scanned
//! files are never validated or executed; they are treated purely as text.
//!
//! ## Scanning Strategy
//!
//! - Candidates are regular files ending in `.py` whose name does not start
//!   with `__` (package machinery such as `__init__.py`).
//! - Candidates are sorted lexicographically and the first one is scanned,
//!   so the pick is stable across filesystems.
//! - A `ServiceStub` is produced only when both the service-class pattern
//!   and at least one method pattern matched; a partial match is treated as
//!   "no service found".

mod discover;
mod extract;

pub use discover::find_stub_file;
pub use extract::extract_service;

use grpc_readme_generator_common::{Result, ServiceStub};
use std::fs;
use std::path::Path;

/// Scan a directory of generated stubs and extract service metadata
///
/// Selects the lexicographically first candidate file in `dir` and applies
/// the stub patterns to its text.
pub fn scan_directory(dir: &Path) -> Result<ServiceStub> {
    let path = discover::find_stub_file(dir)?;
    scan_file(&path)
}

/// Extract service metadata from one explicit stub file
pub fn scan_file(path: &Path) -> Result<ServiceStub> {
    let content = fs::read_to_string(path)?;
    let module_name = module_name_of(path);
    extract::extract_service(&content, &module_name, path)
}

/// Python module name for a stub file (its file stem)
fn module_name_of(path: &Path) -> String {
    path.file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or_default()
        .to_string()
}
