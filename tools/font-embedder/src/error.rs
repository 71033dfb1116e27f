//! Failures that abort an embedding run.

use core::{error, fmt};
use std::{io, path::PathBuf};

use crate::{
    identifier::{Identifier, IdentifierError},
    layout::LayoutError,
};

/// Various errors that can occur while embedding fonts.
#[derive(Debug)]
pub enum EmbedError {
    /// The namespace or include path would produce malformed C++.
    InvalidLayout(LayoutError),
    /// The input directory does not exist.
    MissingDirectory(PathBuf),
    /// The input path exists but is not a directory.
    NotADirectory(PathBuf),
    /// The input directory contains no files with the font extension.
    NoFontFiles {
        /// The directory that was searched.
        directory: PathBuf,
        /// The extension that was searched for.
        extension: String,
    },
    /// A font file name does not yield a valid identifier.
    InvalidIdentifier(IdentifierError),
    /// Two font files yield the same identifier.
    DuplicateIdentifier {
        /// The shared identifier.
        identifier: Identifier,
        /// The font file that claimed `identifier` first.
        first: PathBuf,
        /// The font file that collided with `first`.
        second: PathBuf,
    },
    /// An error occurred while listing the input directory.
    ListDirectory {
        /// The directory being listed.
        path: PathBuf,
        /// The underlying error.
        error: io::Error,
    },
    /// An error occurred while reading a font file.
    ReadFont {
        /// The font file being read.
        path: PathBuf,
        /// The underlying error.
        error: io::Error,
    },
    /// An error occurred while writing a generated file.
    WriteOutput {
        /// The file being written.
        path: PathBuf,
        /// The underlying error.
        error: io::Error,
    },
}

impl EmbedError {
    /// Returns `true` if the error stems from the filesystem rather than from the fonts that were
    /// supplied.
    pub fn is_io(&self) -> bool {
        matches!(
            self,
            Self::ListDirectory { .. } | Self::ReadFont { .. } | Self::WriteOutput { .. }
        )
    }
}

impl From<LayoutError> for EmbedError {
    fn from(value: LayoutError) -> Self {
        Self::InvalidLayout(value)
    }
}

impl From<IdentifierError> for EmbedError {
    fn from(value: IdentifierError) -> Self {
        Self::InvalidIdentifier(value)
    }
}

impl fmt::Display for EmbedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLayout(error) => write!(f, "invalid output layout: {error}"),
            Self::MissingDirectory(path) => {
                write!(f, "input directory '{}' does not exist", path.display())
            }
            Self::NotADirectory(path) => write!(f, "'{}' is not a directory", path.display()),
            Self::NoFontFiles {
                directory,
                extension,
            } => write!(
                f,
                "no .{extension} files found in '{}'",
                directory.display()
            ),
            Self::InvalidIdentifier(error) => write!(f, "invalid identifier: {error}"),
            Self::DuplicateIdentifier {
                identifier,
                first,
                second,
            } => write!(
                f,
                "'{}' and '{}' both map to identifier \"{identifier}\"",
                first.display(),
                second.display()
            ),
            Self::ListDirectory { path, .. } => {
                write!(f, "error listing directory '{}'", path.display())
            }
            Self::ReadFont { path, .. } => write!(f, "error reading font '{}'", path.display()),
            Self::WriteOutput { path, .. } => write!(f, "error writing '{}'", path.display()),
        }
    }
}

impl error::Error for EmbedError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::InvalidLayout(error) => Some(error),
            Self::InvalidIdentifier(error) => Some(error),
            Self::ListDirectory { error, .. }
            | Self::ReadFont { error, .. }
            | Self::WriteOutput { error, .. } => Some(error),
            _ => None,
        }
    }
}
