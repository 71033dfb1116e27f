//! The outcome of a run, as reported to the user.

use core::fmt;

use crate::identifier::Identifier;

/// Everything a finished embedding run has to report.
#[derive(Clone, Debug, Default, Hash, PartialEq, Eq)]
pub struct EmbedReport {
    /// The identifier assigned to each font, in output order.
    pub mappings: Vec<FontMapping>,
    /// The aggregate figures of the run.
    pub summary: EmbedSummary,
}

/// The [`Identifier`] assigned to a font file.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct FontMapping {
    /// The name of the font file.
    pub file_name: String,
    /// The identifier derived from `file_name`.
    pub identifier: Identifier,
}

impl fmt::Display for FontMapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.file_name, self.identifier)
    }
}

/// Aggregate figures of a finished embedding run.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
pub struct EmbedSummary {
    /// The number of fonts embedded.
    pub font_count: usize,
    /// The combined size of every embedded font in bytes.
    pub total_bytes: u64,
}

impl fmt::Display for EmbedSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tenths = kibibyte_tenths(self.total_bytes);
        write!(
            f,
            "Total embedded font data: {} bytes ({}.{} KB)",
            group_digits(self.total_bytes),
            tenths / 10,
            tenths % 10
        )
    }
}

/// Returns `bytes / 1024` in tenths, rounding ties to even.
fn kibibyte_tenths(bytes: u64) -> u128 {
    let scaled = u128::from(bytes) * 10;
    let mut tenths = scaled / 1024;
    let remainder = scaled % 1024;

    if remainder > 512 || (remainder == 512 && tenths % 2 == 1) {
        tenths += 1;
    }

    tenths
}

/// Formats `value` in decimal with `,` between groups of three digits.
fn group_digits(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (index, digit) in digits.chars().enumerate() {
        if index != 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    grouped
}
