use std::{
    fs,
    path::{Path, PathBuf},
};

use rand::Rng;
use walkdir::WalkDir;

use crate::error::ToolError;

const TEMPORARY_PREFIX_LEN: usize = 10;
const LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// What [`standardize`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandardizeOutcome {
    /// Number of files renamed.
    pub renamed:    usize,
    /// Digits used for the ids.
    pub digits:     usize,
    /// `true` if the requested digits were too few for the last id and had to
    /// be widened.
    pub readjusted: bool,
}

/// Renames every file directly inside `directory` to `{prefix}-{id}{ext}`.
///
/// Files are taken in name order and numbered from `start`, zero-padded to
/// `digits`. The extension (the part after the last `.`, if any) is kept.
/// Renaming goes through a random temporary prefix first, so a file is never
/// renamed onto a name another file still has. Subdirectories are left alone.
///
/// # Errors
/// - `ToolError::NegativeStart` if `start` is negative.
/// - `ToolError::FileNotFound` if `directory` does not exist.
/// - `ToolError::NotADirectory` if it is not a directory.
/// - `ToolError::Io` if listing or renaming fails.
pub fn standardize<R>(directory: &Path,
                      prefix: &str,
                      start: i64,
                      digits: usize,
                      rng: &mut R)
                      -> Result<StandardizeOutcome, ToolError>
    where R: Rng
{
    let start = u64::try_from(start).map_err(|_| ToolError::NegativeStart { start })?;

    let metadata =
        fs::metadata(directory).map_err(|e| ToolError::from_io(directory.to_path_buf(), e))?;
    if !metadata.is_dir() {
        return Err(ToolError::NotADirectory { path: directory.to_path_buf() });
    }

    let files = list_files(directory)?;
    let last_id = start + (files.len() as u64).saturating_sub(1);
    let needed = last_id.to_string().len();
    let readjusted = needed > digits;
    let digits = digits.max(needed);

    let temporary = temporary_prefix(rng);
    tracing::debug!(directory = %directory.display(), %temporary, "renaming to temporary names");
    rename_all(&files, &temporary, start, digits)?;

    let files = list_files(directory)?;
    rename_all(&files, prefix, start, digits)?;

    Ok(StandardizeOutcome { renamed: files.len(),
                            digits,
                            readjusted })
}

/// Lists the regular files directly inside `directory`, sorted by name.
fn list_files(directory: &Path) -> Result<Vec<PathBuf>, ToolError> {
    let mut files = Vec::new();
    for entry in WalkDir::new(directory).min_depth(1)
                                        .max_depth(1)
                                        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| {
                             let path = e.path().unwrap_or(directory).to_path_buf();
                             ToolError::Io { path,
                                             source: e.into() }
                         })?;
        if entry.path().is_file() {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

fn rename_all(files: &[PathBuf], prefix: &str, start: u64, digits: usize) -> Result<(), ToolError> {
    for (id, from) in (start..).zip(files) {
        let extension = from.extension()
                            .map(|ext| format!(".{}", ext.to_string_lossy()))
                            .unwrap_or_default();
        let to = from.with_file_name(format!("{prefix}-{id:0digits$}{extension}"));

        tracing::trace!(from = %from.display(), to = %to.display(), "rename");
        fs::rename(from, &to).map_err(|e| ToolError::Io { path:   from.clone(),
                                                           source: e, })?;
    }
    Ok(())
}

/// Builds a prefix of random ASCII letters for the first renaming pass.
fn temporary_prefix<R>(rng: &mut R) -> String
    where R: Rng
{
    (0..TEMPORARY_PREFIX_LEN).map(|_| char::from(LETTERS[rng.gen_range(0..LETTERS.len())]))
                             .collect()
}
