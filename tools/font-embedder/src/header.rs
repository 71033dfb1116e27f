//! Emission of the header declaring every embedded font.

use std::io::{self, Write};

use chrono::NaiveDateTime;

use crate::{
    entry::FontEntry,
    layout::{OutputLayout, write_banner},
};

/// Writes the header declaring the symbols of each of `entries` into `writer`.
///
/// Besides one `_Data`/`_Size` declaration pair per font, the header carries the `AllFonts` table
/// listing every font in `entries` order and a `FontCount` constant computed from that table.
///
/// # Errors
///
/// Returns any error produced by `writer`.
pub fn write_header<W: Write>(
    mut writer: W,
    entries: &[FontEntry],
    layout: &OutputLayout,
    generated: &NaiveDateTime,
) -> io::Result<()> {
    write_banner(&mut writer, &layout.header_name, "Embedded font data", generated)?;

    writeln!(writer, "#ifndef {}", layout.guard)?;
    writeln!(writer, "#define {}", layout.guard)?;
    writeln!(writer)?;
    writeln!(writer, "#include <cstddef>")?;
    writeln!(writer)?;
    writeln!(writer, "namespace {} {{", layout.namespace)?;
    writeln!(writer)?;
    writeln!(writer, "struct FontData {{")?;
    writeln!(writer, "    const char* name;           // Font name identifier")?;
    writeln!(writer, "    const unsigned char* data;  // Pointer to font data")?;
    writeln!(writer, "    size_t size;                // Size of font data in bytes")?;
    writeln!(writer, "}};")?;
    writeln!(writer)?;

    for entry in entries {
        writeln!(writer, "// {}", entry.file_name)?;
        writeln!(writer, "extern const unsigned char {}[];", entry.data_symbol())?;
        writeln!(writer, "extern const size_t {};", entry.size_symbol())?;
        writeln!(writer)?;
    }

    writeln!(writer, "inline const FontData AllFonts[] = {{")?;
    for entry in entries {
        writeln!(
            writer,
            "    {{\"{}\", {}, {}}},",
            entry.identifier,
            entry.data_symbol(),
            entry.size_symbol()
        )?;
    }
    writeln!(writer, "}};")?;
    writeln!(writer)?;
    writeln!(
        writer,
        "inline constexpr size_t FontCount = sizeof(AllFonts) / sizeof(AllFonts[0]);"
    )?;
    writeln!(writer)?;
    writeln!(writer, "}} // namespace {}", layout.namespace)?;
    writeln!(writer)?;
    writeln!(writer, "#endif // {}", layout.guard)?;

    writer.flush()
}
