//! Tool for embedding TrueType fonts into a generated C++ header and source pair.
//!
//! Each font file becomes a `<identifier>_Data` byte array and a `<identifier>_Size` constant,
//! and the header lists every font in an `AllFonts` table for enumeration at runtime.

use std::{
    fs::File,
    io::{self, BufWriter},
    path::{Path, PathBuf},
};

use chrono::NaiveDateTime;

use crate::{
    discovery::discover,
    entry::{NamedFont, check_unique},
    header::write_header,
    layout::{DEFAULT_NAMESPACE, OutputLayout},
    source::write_source,
};

pub mod discovery;
pub mod entry;
pub mod error;
pub mod header;
pub mod identifier;
pub mod layout;
pub mod source;
pub mod summary;

pub use error::EmbedError;
pub use summary::{EmbedReport, EmbedSummary, FontMapping};

/// The font file extension searched for when none is configured.
pub const DEFAULT_EXTENSION: &str = "ttf";

/// Description of a single embedding run.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct EmbedConfig {
    /// The directory containing the fonts to embed.
    pub input_dir: PathBuf,
    /// The location at which the generated header should be placed.
    pub output_header: PathBuf,
    /// The location at which the generated source should be placed.
    pub output_source: PathBuf,
    /// The C++ namespace enclosing the generated symbols.
    pub namespace: String,
    /// The path through which the source includes the header, if not the header's file name.
    pub include_path: Option<String>,
    /// The extension, without the leading `.`, of the files to embed.
    pub extension: String,
}

impl EmbedConfig {
    /// Creates an [`EmbedConfig`] with the default namespace, include path and extension.
    pub fn new(
        input_dir: impl Into<PathBuf>,
        output_header: impl Into<PathBuf>,
        output_source: impl Into<PathBuf>,
    ) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_header: output_header.into(),
            output_source: output_source.into(),
            namespace: DEFAULT_NAMESPACE.to_owned(),
            include_path: None,
            extension: DEFAULT_EXTENSION.to_owned(),
        }
    }
}

/// Embeds every font in `config.input_dir`, writing the header and source described by `config`
/// and stamping both with `generated`.
///
/// The layout is validated and every font is read before either output file is opened.
///
/// # Errors
///
/// - [`EmbedError::InvalidLayout`]: Returned if the namespace or include path would produce
///   malformed C++.
/// - [`EmbedError::MissingDirectory`], [`EmbedError::NotADirectory`] or
///   [`EmbedError::NoFontFiles`]: Returned if there is nothing to embed.
/// - [`EmbedError::InvalidIdentifier`] or [`EmbedError::DuplicateIdentifier`]: Returned if the
///   font file names do not map to distinct identifiers.
/// - [`EmbedError::ListDirectory`], [`EmbedError::ReadFont`] or [`EmbedError::WriteOutput`]:
///   Returned if an I/O operation fails.
pub fn embed(config: &EmbedConfig, generated: &NaiveDateTime) -> Result<EmbedReport, EmbedError> {
    let layout = OutputLayout::new(
        &config.output_header,
        &config.output_source,
        &config.namespace,
        config.include_path.as_deref(),
    );
    layout.validate()?;

    let discovered = discover(&config.input_dir, &config.extension)?;
    log::info!("found {} .{} files", discovered.len(), config.extension);

    let named = discovered
        .into_iter()
        .map(NamedFont::new)
        .collect::<Result<Vec<_>, _>>()?;
    check_unique(&named)?;

    let entries = named
        .into_iter()
        .map(NamedFont::load)
        .collect::<Result<Vec<_>, _>>()?;

    write_output(&config.output_header, |writer| {
        write_header(writer, &entries, &layout, generated)
    })?;
    write_output(&config.output_source, |writer| {
        write_source(writer, &entries, &layout, generated)
    })?;

    let summary = EmbedSummary {
        font_count: entries.len(),
        total_bytes: entries
            .iter()
            .map(|entry| u64::try_from(entry.bytes.len()).unwrap_or(u64::MAX))
            .fold(0, u64::saturating_add),
    };
    let mappings = entries
        .into_iter()
        .map(|entry| FontMapping {
            file_name: entry.file_name,
            identifier: entry.identifier,
        })
        .collect();

    Ok(EmbedReport { mappings, summary })
}

/// Truncates or creates the file at `path` and hands a buffered writer for it to `render`.
fn write_output<F>(path: &Path, render: F) -> Result<(), EmbedError>
where
    F: FnOnce(BufWriter<File>) -> io::Result<()>,
{
    let write_error = |error| EmbedError::WriteOutput {
        path: path.to_path_buf(),
        error,
    };

    let file = File::create(path).map_err(write_error)?;
    render(BufWriter::new(file)).map_err(write_error)?;
    log::debug!("wrote '{}'", path.display());

    Ok(())
}
