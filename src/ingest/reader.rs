use std::fs;
use std::path::Path;

use tracing::{debug, error, warn};

/// Encodings tried, in order, before falling back to a lossy decode.
pub const DEFAULT_ENCODINGS: [TextEncoding; 3] = [
    TextEncoding::Utf8,
    TextEncoding::Windows1252,
    TextEncoding::Latin1
];

/// Code points for bytes 0x80..=0x9F in Windows-1252; `None` marks the five unassigned bytes.
const WINDOWS_1252_HIGH: [Option<char>; 32] = [
    Some('\u{20AC}'), None, Some('\u{201A}'), Some('\u{0192}'),
    Some('\u{201E}'), Some('\u{2026}'), Some('\u{2020}'), Some('\u{2021}'),
    Some('\u{02C6}'), Some('\u{2030}'), Some('\u{0160}'), Some('\u{2039}'),
    Some('\u{0152}'), None, Some('\u{017D}'), None,
    None, Some('\u{2018}'), Some('\u{2019}'), Some('\u{201C}'),
    Some('\u{201D}'), Some('\u{2022}'), Some('\u{2013}'), Some('\u{2014}'),
    Some('\u{02DC}'), Some('\u{2122}'), Some('\u{0161}'), Some('\u{203A}'),
    Some('\u{0153}'), None, Some('\u{017E}'), Some('\u{0178}')
];

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TextEncoding {
    Utf8,
    Windows1252,
    Latin1
}

impl TextEncoding {
    pub fn name(&self) -> &'static str {
        match self {
            TextEncoding::Utf8 => "utf-8",
            TextEncoding::Windows1252 => "cp1252",
            TextEncoding::Latin1 => "latin-1"
        }
    }

    /// Decodes the whole buffer, or returns `None` if any byte is invalid in this encoding.
    pub fn decode(&self, bytes: &[u8]) -> Option<String> {
        match self {
            TextEncoding::Utf8 => std::str::from_utf8(bytes).ok().map(str::to_owned),
            TextEncoding::Windows1252 => bytes.iter().map(|&byte| decode_windows_1252(byte)).collect(),
            TextEncoding::Latin1 => Some(bytes.iter().map(|&byte| char::from(byte)).collect())
        }
    }
}

fn decode_windows_1252(byte: u8) -> Option<char> {
    match byte {
        0x80..=0x9F => WINDOWS_1252_HIGH[usize::from(byte - 0x80)],
        _ => Some(char::from(byte))
    }
}

/// Decodes with the first encoding in `encodings` that accepts every byte.
///
/// When none does, invalid sequences are replaced with U+FFFD instead of failing.
pub fn decode_bytes(bytes: &[u8], encodings: &[TextEncoding]) -> String {
    for encoding in encodings {
        if let Some(text) = encoding.decode(bytes) {
            debug!("Decoded sales data as {}", encoding.name());
            return text;
        }

        debug!("Sales data is not valid {}, trying next encoding", encoding.name());
    }

    warn!("No candidate encoding could decode the sales data, substituting invalid bytes");
    String::from_utf8_lossy(bytes).into_owned()
}

/// Reads the data lines of a sales file using [`DEFAULT_ENCODINGS`].
pub fn read_sales_data(path: impl AsRef<Path>) -> Vec<String> {
    read_sales_data_with(path, &DEFAULT_ENCODINGS)
}

/// Reads a sales file and returns its trimmed, non-empty lines without the header.
///
/// A file that cannot be opened is logged and yields no lines.
pub fn read_sales_data_with(path: impl AsRef<Path>, encodings: &[TextEncoding]) -> Vec<String> {
    let path = path.as_ref();

    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(error) => {
            error!("Error opening sales data at path: {} | {error}", path.display());
            return Vec::new();
        }
    };

    decode_bytes(&bytes, encodings)
        .lines()
        .skip(1)
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect()
}
