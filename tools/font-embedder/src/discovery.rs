//! Scanning of the input directory for font files.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use crate::error::EmbedError;

/// A font file found by [`discover`].
#[derive(Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct DiscoveredFont {
    /// The name of the font file inside the input directory.
    pub file_name: String,
    /// The full path of the font file.
    pub path: PathBuf,
}

/// Lists every regular file directly inside `directory` whose name ends in `.<extension>`, sorted
/// by file name.
///
/// Hidden files are included and the extension comparison is case-sensitive. Entries that are not
/// regular files are skipped with a warning.
///
/// # Errors
///
/// - [`EmbedError::MissingDirectory`]: Returned if `directory` does not exist.
/// - [`EmbedError::NotADirectory`]: Returned if `directory` is not a directory.
/// - [`EmbedError::ListDirectory`]: Returned if `directory` could not be listed.
/// - [`EmbedError::NoFontFiles`]: Returned if no matching files were found.
pub fn discover(directory: &Path, extension: &str) -> Result<Vec<DiscoveredFont>, EmbedError> {
    if !directory.exists() {
        return Err(EmbedError::MissingDirectory(directory.to_path_buf()));
    }
    if !directory.is_dir() {
        return Err(EmbedError::NotADirectory(directory.to_path_buf()));
    }

    let list_error = |error: io::Error| EmbedError::ListDirectory {
        path: directory.to_path_buf(),
        error,
    };

    let suffix = format!(".{extension}");
    let mut fonts = Vec::new();
    for entry in fs::read_dir(directory).map_err(list_error)? {
        let entry = entry.map_err(list_error)?;
        let file_name = entry.file_name().to_string_lossy().into_owned();
        if !file_name.ends_with(&suffix) {
            continue;
        }

        let path = entry.path();
        if !path.is_file() {
            log::warn!("skipping '{}': not a regular file", path.display());
            continue;
        }

        fonts.push(DiscoveredFont { file_name, path });
    }

    if fonts.is_empty() {
        return Err(EmbedError::NoFontFiles {
            directory: directory.to_path_buf(),
            extension: extension.to_owned(),
        });
    }

    fonts.sort_by(|a, b| a.file_name.cmp(&b.file_name));
    Ok(fonts)
}
