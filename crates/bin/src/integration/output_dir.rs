//! Where exports and reports are written.

use std::io;
use std::path::{Path, PathBuf};

/// Get the default output directory.
///
/// Uses platform-specific data directories:
/// - Linux: `~/.local/share/valuescope/`
/// - macOS: `~/Library/Application Support/valuescope/`
/// - Windows: `%APPDATA%\valuescope\`
pub(crate) fn default_output_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("valuescope")
}

/// Resolve the output directory and make sure it exists.
pub(crate) fn prepare_output_dir(out: Option<&Path>) -> io::Result<PathBuf> {
    let dir = out.map_or_else(default_output_dir, Path::to_path_buf);
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Report file name for a symbol.
pub(crate) fn report_file_name(symbol: &str) -> String {
    format!("{}_report.json", symbol.to_uppercase())
}
