//! Emission of the source file defining every embedded font.

use std::io::{self, Write};

use chrono::NaiveDateTime;

use crate::{
    entry::FontEntry,
    layout::{OutputLayout, write_banner},
};

/// The number of byte literals written per line of a byte table.
pub const BYTES_PER_LINE: usize = 16;

/// The rule framing the comment in front of each font's definitions.
const RULE: &str =
    "// ============================================================================";

/// Writes the source defining the `_Data` and `_Size` symbols of each of `entries` into `writer`.
///
/// # Errors
///
/// Returns any error produced by `writer`.
pub fn write_source<W: Write>(
    mut writer: W,
    entries: &[FontEntry],
    layout: &OutputLayout,
    generated: &NaiveDateTime,
) -> io::Result<()> {
    write_banner(
        &mut writer,
        &layout.source_name,
        "Embedded font data definitions",
        generated,
    )?;

    writeln!(writer, "#include <{}>", layout.include_path)?;
    writeln!(writer)?;

    let namespace = &layout.namespace;
    for entry in entries {
        let data_symbol = entry.data_symbol();

        writeln!(writer, "{RULE}")?;
        writeln!(writer, "// {} ({} bytes)", entry.file_name, entry.bytes.len())?;
        writeln!(writer, "{RULE}")?;
        writeln!(writer, "const unsigned char {namespace}::{data_symbol}[] = {{")?;
        write_byte_table(&mut writer, &entry.bytes)?;
        writeln!(writer, "}};")?;
        writeln!(
            writer,
            "const size_t {namespace}::{} = sizeof({namespace}::{data_symbol});",
            entry.size_symbol()
        )?;
        writeln!(writer)?;
    }

    writer.flush()
}

/// Writes `bytes` as indented `0xHH` literals, [`BYTES_PER_LINE`] per line.
///
/// Every line except the last ends with a comma. Nothing is written for an empty `bytes`.
///
/// # Errors
///
/// Returns any error produced by `writer`.
pub fn write_byte_table<W: Write>(writer: &mut W, bytes: &[u8]) -> io::Result<()> {
    let mut lines = bytes.chunks(BYTES_PER_LINE).peekable();
    while let Some(line) = lines.next() {
        write!(writer, "   ")?;
        for (index, byte) in line.iter().enumerate() {
            let separator = if index == 0 { "" } else { "," };
            write!(writer, "{separator} 0x{byte:02X}")?;
        }

        if lines.peek().is_some() {
            writeln!(writer, ",")?;
        } else {
            writeln!(writer)?;
        }
    }

    Ok(())
}
