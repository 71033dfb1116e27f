//! Derivation of C identifiers from font file names.

use core::{error, fmt};
use std::path::Path;

/// A name usable as a symbol in the generated C++ code.
///
/// The symbols emitted for a font are `<identifier>_Data` and `<identifier>_Size`.
#[derive(Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Identifier(String);

impl Identifier {
    /// Derives the [`Identifier`] for the font stored in `file_name`.
    ///
    /// # Errors
    ///
    /// - [`IdentifierError::Empty`]: Returned if nothing of `file_name` survives sanitization.
    /// - [`IdentifierError::LeadingDigit`]: Returned if the sanitized name starts with a digit.
    pub fn from_file_name(file_name: &str) -> Result<Self, IdentifierError> {
        let identifier = sanitize(file_name);

        match identifier.chars().next() {
            None => Err(IdentifierError::Empty {
                file_name: file_name.to_owned(),
            }),
            Some(c) if c.is_ascii_digit() => Err(IdentifierError::LeadingDigit {
                file_name: file_name.to_owned(),
                identifier,
            }),
            Some(_) => Ok(Self(identifier)),
        }
    }

    /// Returns the textual representation of the [`Identifier`].
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Strips the extension from `file_name`, turns spaces and hyphens into underscores and drops
/// every remaining character that is not an ASCII alphanumeric or an underscore.
///
/// Applying [`sanitize`] to its own output returns the output unchanged.
pub fn sanitize(file_name: &str) -> String {
    let stem = Path::new(file_name)
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or(file_name);

    stem.chars()
        .map(|c| match c {
            ' ' | '-' => '_',
            c => c,
        })
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect()
}

/// Returns `true` if `text` is a valid C identifier made of ASCII characters.
pub fn is_identifier(text: &str) -> bool {
    text.chars().next().is_some_and(|c| !c.is_ascii_digit())
        && text.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Various errors that can occur while deriving an [`Identifier`].
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub enum IdentifierError {
    /// Sanitizing the file name left nothing behind.
    Empty {
        /// The name of the offending font file.
        file_name: String,
    },
    /// The sanitized name starts with a digit.
    LeadingDigit {
        /// The name of the offending font file.
        file_name: String,
        /// The rejected identifier.
        identifier: String,
    },
}

impl fmt::Display for IdentifierError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { file_name } => {
                write!(f, "\"{file_name}\" does not contain any identifier characters")
            }
            Self::LeadingDigit {
                file_name,
                identifier,
            } => write!(
                f,
                "identifier \"{identifier}\" derived from \"{file_name}\" starts with a digit"
            ),
        }
    }
}

impl error::Error for IdentifierError {}
