//! Construction of [`FontEntry`]s from discovered font files.

use std::{collections::HashMap, fs, path::PathBuf};

use crate::{discovery::DiscoveredFont, error::EmbedError, identifier::Identifier};

/// A discovered font file paired with its [`Identifier`].
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct NamedFont {
    /// The identifier derived from the font's file name.
    pub identifier: Identifier,
    /// The font file.
    pub font: DiscoveredFont,
}

impl NamedFont {
    /// Derives the [`Identifier`] of `font`.
    ///
    /// # Errors
    ///
    /// Returns [`EmbedError::InvalidIdentifier`] if the file name does not produce a valid
    /// identifier.
    pub fn new(font: DiscoveredFont) -> Result<Self, EmbedError> {
        let identifier = Identifier::from_file_name(&font.file_name)?;
        Ok(Self { identifier, font })
    }

    /// Reads the font's bytes, producing a [`FontEntry`].
    ///
    /// # Errors
    ///
    /// Returns [`EmbedError::ReadFont`] if the font file could not be read.
    pub fn load(self) -> Result<FontEntry, EmbedError> {
        let bytes = fs::read(&self.font.path).map_err(|error| EmbedError::ReadFont {
            path: self.font.path.clone(),
            error,
        })?;
        log::debug!("read {} bytes from '{}'", bytes.len(), self.font.path.display());

        Ok(FontEntry {
            identifier: self.identifier,
            file_name: self.font.file_name,
            path: self.font.path,
            bytes,
        })
    }
}

/// Verifies that no two fonts in `fonts` share an [`Identifier`].
///
/// # Errors
///
/// Returns [`EmbedError::DuplicateIdentifier`] naming the first collision in `fonts` order.
pub fn check_unique(fonts: &[NamedFont]) -> Result<(), EmbedError> {
    let mut claimed = HashMap::<&Identifier, &PathBuf>::with_capacity(fonts.len());
    for named in fonts {
        if let Some(first) = claimed.insert(&named.identifier, &named.font.path) {
            return Err(EmbedError::DuplicateIdentifier {
                identifier: named.identifier.clone(),
                first: first.clone(),
                second: named.font.path.clone(),
            });
        }
    }

    Ok(())
}

/// A font ready to be embedded.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct FontEntry {
    /// The symbol prefix used for the font in the generated code.
    pub identifier: Identifier,
    /// The name of the font file the bytes were read from.
    pub file_name: String,
    /// The path of the font file the bytes were read from.
    pub path: PathBuf,
    /// The raw contents of the font file.
    pub bytes: Vec<u8>,
}

impl FontEntry {
    /// Returns the name of the generated byte array.
    pub fn data_symbol(&self) -> String {
        format!("{}_Data", self.identifier)
    }

    /// Returns the name of the generated size constant.
    pub fn size_symbol(&self) -> String {
        format!("{}_Size", self.identifier)
    }
}

#[cfg(test)]
pub(crate) mod test {
    use std::{fs, path::PathBuf};

    use crate::{discovery::DiscoveredFont, error::EmbedError, identifier::Identifier};

    use super::{FontEntry, NamedFont, check_unique};

    /// Builds an in-memory [`FontEntry`] for rendering tests.
    pub(crate) fn entry(file_name: &str, bytes: &[u8]) -> FontEntry {
        FontEntry {
            identifier: Identifier::from_file_name(file_name).unwrap(),
            file_name: file_name.to_owned(),
            path: PathBuf::from("fonts").join(file_name),
            bytes: bytes.to_vec(),
        }
    }

    fn named(file_name: &str) -> NamedFont {
        NamedFont::new(DiscoveredFont {
            file_name: file_name.to_owned(),
            path: PathBuf::from(file_name),
        })
        .unwrap()
    }

    #[test]
    fn symbols() {
        let entry = entry("Sans Pro.ttf", &[]);

        assert_eq!(entry.data_symbol(), "Sans_Pro_Data");
        assert_eq!(entry.size_symbol(), "Sans_Pro_Size");
    }

    #[test]
    fn distinct_identifiers() {
        check_unique(&[named("Sans Pro.ttf"), named("Mono-Bold.ttf")]).unwrap();
    }

    #[test]
    fn colliding_identifiers() {
        let fonts = [named("A-B.ttf"), named("C.ttf"), named("A B.ttf")];
        let error = check_unique(&fonts).unwrap_err();

        match error {
            EmbedError::DuplicateIdentifier {
                identifier,
                first,
                second,
            } => {
                assert_eq!(identifier.as_str(), "A_B");
                assert_eq!(first, PathBuf::from("A-B.ttf"));
                assert_eq!(second, PathBuf::from("A B.ttf"));
            }
            error => panic!("unexpected error: {error}"),
        }
    }

    #[test]
    fn load_reads_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Sans Pro.ttf");
        fs::write(&path, [0x01, 0x02, 0x03, 0x04]).unwrap();

        let entry = NamedFont::new(DiscoveredFont {
            file_name: "Sans Pro.ttf".to_owned(),
            path: path.clone(),
        })
        .unwrap()
        .load()
        .unwrap();

        assert_eq!(entry.identifier.as_str(), "Sans_Pro");
        assert_eq!(entry.path, path);
        assert_eq!(entry.bytes, [0x01, 0x02, 0x03, 0x04]);
    }

    #[test]
    fn load_missing_file() {
        let error = named("does-not-exist.ttf").load().unwrap_err();
        assert!(matches!(error, EmbedError::ReadFont { .. }));
        assert!(error.is_io());
    }
}
