use std::path::Path;

use anyhow::{Context, Result};

pub fn run_blocking<F, T>(f: F) -> T
where
    F: FnOnce() -> T,
{
    f()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickedFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

pub fn read_picked_file(path: &Path) -> Result<PickedFile> {
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .map(str::to_string)
        .unwrap_or_else(|| path.to_string_lossy().into_owned());
    let bytes = std::fs::read(path)
        .with_context(|| format!("failed to read file: {}", path.display()))?;
    Ok(PickedFile { file_name, bytes })
}
