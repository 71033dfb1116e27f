//! Naming shared by the generated header and source files.

use core::{error, fmt};
use std::{
    io::{self, Write},
    path::Path,
};

use chrono::NaiveDateTime;

use crate::identifier::is_identifier;

/// The namespace used when none is configured.
pub const DEFAULT_NAMESPACE: &str = "EmbeddedFonts";

/// The format of the `Generated:` line in each banner.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// The names through which the generated header and source files refer to each other.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct OutputLayout {
    /// The C++ namespace enclosing every generated symbol.
    pub namespace: String,
    /// The path the source file uses to `#include` the header.
    pub include_path: String,
    /// The include guard macro of the header.
    pub guard: String,
    /// The header's file name, as shown in its banner.
    pub header_name: String,
    /// The source's file name, as shown in its banner.
    pub source_name: String,
}

impl OutputLayout {
    /// Creates the [`OutputLayout`] for a header written to `header_path` and a source written to
    /// `source_path`.
    ///
    /// When `include_path` is [`None`], the source includes the header by its file name.
    pub fn new(
        header_path: &Path,
        source_path: &Path,
        namespace: &str,
        include_path: Option<&str>,
    ) -> Self {
        let header_name = file_name(header_path);
        let source_name = file_name(source_path);

        Self {
            namespace: namespace.to_owned(),
            include_path: include_path.map_or_else(|| header_name.clone(), str::to_owned),
            guard: include_guard(&header_name),
            header_name,
            source_name,
        }
    }

    /// Verifies that the namespace and include path can be emitted as well-formed C++.
    ///
    /// # Errors
    ///
    /// - [`LayoutError::InvalidNamespace`]: Returned if the namespace is not a `::`-separated
    ///   list of identifiers.
    /// - [`LayoutError::InvalidIncludePath`]: Returned if the include path cannot appear between
    ///   `<` and `>`.
    pub fn validate(&self) -> Result<(), LayoutError> {
        check_namespace(&self.namespace)?;
        check_include_path(&self.include_path)
    }
}

/// Checks that `namespace` is an identifier or a `::`-separated list of identifiers.
///
/// # Errors
///
/// Returns [`LayoutError::InvalidNamespace`] if it is not.
pub fn check_namespace(namespace: &str) -> Result<(), LayoutError> {
    if namespace.split("::").all(is_identifier) {
        Ok(())
    } else {
        Err(LayoutError::InvalidNamespace(namespace.to_owned()))
    }
}

/// Checks that `include_path` can be placed in an `#include <...>` directive.
///
/// # Errors
///
/// Returns [`LayoutError::InvalidIncludePath`] if it is empty or contains `>` or a control
/// character.
pub fn check_include_path(include_path: &str) -> Result<(), LayoutError> {
    if include_path.is_empty() || include_path.chars().any(|c| c == '>' || c.is_control()) {
        return Err(LayoutError::InvalidIncludePath(include_path.to_owned()));
    }

    Ok(())
}

/// Various errors that can occur while validating an [`OutputLayout`].
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub enum LayoutError {
    /// The namespace is not a valid C++ namespace name.
    InvalidNamespace(String),
    /// The include path cannot be used in an `#include <...>` directive.
    InvalidIncludePath(String),
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidNamespace(namespace) => {
                write!(f, "\"{namespace}\" is not a valid C++ namespace")
            }
            Self::InvalidIncludePath(path) => {
                write!(f, "{path:?} cannot be used as an include path")
            }
        }
    }
}

impl error::Error for LayoutError {}

/// Returns the final component of `path` or, failing that, the whole path.
fn file_name(path: &Path) -> String {
    path.file_name()
        .unwrap_or(path.as_os_str())
        .to_string_lossy()
        .into_owned()
}

/// Derives the include guard macro for a header named `header_name`.
///
/// `embeddedfonts.h` becomes `EMBEDDEDFONTS_H`.
pub fn include_guard(header_name: &str) -> String {
    let mut guard = header_name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_uppercase()
            } else {
                '_'
            }
        })
        .collect::<String>();

    if guard.chars().next().is_none_or(|c| c.is_ascii_digit()) {
        guard.insert(0, '_');
    }

    guard
}

/// Writes the comment block opening a generated file.
///
/// # Errors
///
/// Returns any error produced by `writer`.
pub fn write_banner<W: Write>(
    writer: &mut W,
    file_name: &str,
    brief: &str,
    generated: &NaiveDateTime,
) -> io::Result<()> {
    writeln!(writer, "/**")?;
    writeln!(writer, " * @file {file_name}")?;
    writeln!(writer, " * @brief {brief}")?;
    writeln!(writer, " *")?;
    writeln!(writer, " * AUTO-GENERATED FILE - DO NOT EDIT MANUALLY")?;
    writeln!(writer, " * Generated: {}", generated.format(TIMESTAMP_FORMAT))?;
    writeln!(writer, " */")?;
    writeln!(writer)
}

#[cfg(test)]
pub(crate) mod test {
    use std::path::Path;

    use chrono::{NaiveDate, NaiveDateTime};

    use super::{
        LayoutError, OutputLayout, check_include_path, check_namespace, include_guard,
        write_banner,
    };

    /// A fixed generation time for rendering tests.
    pub(crate) fn generated() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 2, 16)
            .and_then(|date| date.and_hms_opt(2, 53, 20))
            .unwrap()
    }

    #[test]
    fn guards() {
        assert_eq!(include_guard("embeddedfonts.h"), "EMBEDDEDFONTS_H");
        assert_eq!(include_guard("embedded-fonts.hpp"), "EMBEDDED_FONTS_HPP");
        assert_eq!(include_guard("3d.h"), "_3D_H");
        assert_eq!(include_guard(""), "_");
    }

    #[test]
    fn default_include_path() {
        let layout = OutputLayout::new(
            Path::new("ui/embeddedfonts.h"),
            Path::new("ui/embeddedfonts.cpp"),
            "EmbeddedFonts",
            None,
        );

        assert_eq!(layout.include_path, "embeddedfonts.h");
        assert_eq!(layout.guard, "EMBEDDEDFONTS_H");
        assert_eq!(layout.header_name, "embeddedfonts.h");
        assert_eq!(layout.source_name, "embeddedfonts.cpp");
    }

    #[test]
    fn explicit_include_path() {
        let layout = OutputLayout::new(
            Path::new("out/fonts.h"),
            Path::new("out/fonts.cpp"),
            "Fonts",
            Some("ui/fonts.h"),
        );

        assert_eq!(layout.include_path, "ui/fonts.h");
        assert_eq!(layout.namespace, "Fonts");
    }

    #[test]
    fn banner() {
        let mut out = Vec::new();
        write_banner(&mut out, "fonts.h", "Embedded font data", &generated()).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("/**\n * @file fonts.h\n * @brief Embedded font data\n"));
        assert!(text.contains(" * Generated: 2026-02-16 02:53:20\n"));
        assert!(text.ends_with(" */\n\n"));
    }

    #[test]
    fn namespaces() {
        assert_eq!(check_namespace("EmbeddedFonts"), Ok(()));
        assert_eq!(check_namespace("app::fonts"), Ok(()));
        assert_eq!(
            check_namespace("my fonts"),
            Err(LayoutError::InvalidNamespace("my fonts".to_owned()))
        );
        assert!(check_namespace("").is_err());
        assert!(check_namespace("app::").is_err());
        assert!(check_namespace("3d").is_err());
    }

    #[test]
    fn include_paths() {
        assert_eq!(check_include_path("ui/embeddedfonts.h"), Ok(()));
        assert!(check_include_path("").is_err());
        assert!(check_include_path("fonts>.h").is_err());
        assert!(check_include_path("fonts\n.h").is_err());
    }

    #[test]
    fn validate_checks_both() {
        let mut layout = OutputLayout::new(
            Path::new("fonts.h"),
            Path::new("fonts.cpp"),
            "Fonts",
            None,
        );
        assert_eq!(layout.validate(), Ok(()));

        layout.namespace = "my fonts".to_owned();
        assert!(matches!(layout.validate(), Err(LayoutError::InvalidNamespace(_))));

        layout.namespace = "Fonts".to_owned();
        layout.include_path = "a>b".to_owned();
        assert!(matches!(layout.validate(), Err(LayoutError::InvalidIncludePath(_))));
    }
}
