//! Line/comma splitting of printer listings, plus byte decoding for files.
//!
//! The split is deliberately naive: newline separates rows, comma separates
//! cells, and nothing else is interpreted. Quotes, `\r` and whitespace all
//! stay inside the cells they appear in.

use std::path::Path;

use crate::error::{CsvError, CsvResult};
use crate::models::{Row, Table};

/// Row separator.
pub const ROW_DELIMITER: char = '\n';

/// Cell separator.
pub const CELL_DELIMITER: char = ',';

/// Byte-order mark some editors put in front of UTF-8 files.
const UTF8_BOM: char = '\u{feff}';

/// Result of reading a listing file, with metadata.
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Rows and cells, in file order
    pub table: Table,
    /// Charset the bytes were decoded from
    pub encoding: String,
}

/// Split listing text into a [`Table`].
///
/// One row per newline-separated segment, so text ending in `\n` yields a
/// final row holding a single empty cell, and `""` yields exactly one such row.
///
/// # Example
/// ```
/// use printer_table::split_table;
///
/// let table = split_table("ip,model\n10.0.0.5,bizhub\n");
/// assert_eq!(table.len(), 3);
/// assert_eq!(table.cell(1, 0), Some("10.0.0.5"));
/// assert_eq!(table.cell(2, 0), Some(""));
/// ```
pub fn split_table(text: &str) -> Table {
    let rows: Vec<Row> = text.split(ROW_DELIMITER).map(split_row).collect();
    log::debug!("split listing into {} rows", rows.len());
    Table::new(rows)
}

/// Split one line into cells.
pub fn split_row(line: &str) -> Row {
    Row::new(line.split(CELL_DELIMITER).map(str::to_string).collect())
}

/// Detect the encoding of raw bytes using chardet
pub fn detect_encoding(bytes: &[u8]) -> String {
    let result = chardet::detect(bytes);
    let charset = result.0;

    match charset.to_lowercase().as_str() {
        "" | "ascii" | "utf-8" | "utf8" => "utf-8".to_string(),
        "iso-8859-1" | "iso-8859-15" | "latin-1" | "latin1" => "iso-8859-1".to_string(),
        "windows-1252" | "cp1252" => "windows-1252".to_string(),
        other => other.to_string(),
    }
}

/// Decode bytes to a string using the given charset label.
///
/// Unknown labels fall back to Windows-1252, which maps every byte.
pub fn decode_content(bytes: &[u8], encoding: &str) -> CsvResult<String> {
    let label = encoding.to_lowercase();
    if matches!(label.as_str(), "utf-8" | "utf8" | "ascii") {
        if let Ok(text) = std::str::from_utf8(bytes) {
            return Ok(text.to_string());
        }
    }

    let codec = encoding_rs::Encoding::for_label(label.as_bytes()).unwrap_or(encoding_rs::WINDOWS_1252);
    let (text, used, had_errors) = codec.decode(bytes);
    if had_errors {
        return Err(CsvError::EncodingError {
            encoding: used.name().to_string(),
        });
    }
    Ok(text.into_owned())
}

/// Decode bytes, preferring UTF-8 and detecting the charset otherwise.
///
/// Returns the text and the name of the charset used. A leading UTF-8
/// byte-order mark is dropped, as browsers do when decoding a response.
/// A detected charset that cannot decode the bytes is replaced by
/// Windows-1252.
pub fn decode_auto(bytes: &[u8]) -> CsvResult<(String, String)> {
    if let Ok(text) = std::str::from_utf8(bytes) {
        let text = text.strip_prefix(UTF8_BOM).unwrap_or(text);
        return Ok((text.to_string(), "utf-8".to_string()));
    }

    let encoding = detect_encoding(bytes);
    log::debug!("listing is not UTF-8, detected {}", encoding);
    match decode_content(bytes, &encoding) {
        Ok(text) => Ok((text, encoding)),
        Err(e) => {
            log::warn!("{}, falling back to windows-1252", e);
            let text = decode_content(bytes, "windows-1252")?;
            Ok((text, "windows-1252".to_string()))
        }
    }
}

/// Parse listing bytes with charset auto-detection.
pub fn parse_bytes_auto(bytes: &[u8]) -> CsvResult<ParseResult> {
    let (text, encoding) = decode_auto(bytes)?;
    Ok(ParseResult {
        table: split_table(&text),
        encoding,
    })
}

/// Read a listing file and decode it to text.
pub fn read_listing<P: AsRef<Path>>(path: P) -> CsvResult<(String, String)> {
    let bytes = std::fs::read(path.as_ref())?;
    decode_auto(&bytes)
}

/// Read and split a listing file with charset auto-detection.
pub fn parse_listing_file<P: AsRef<Path>>(path: P) -> CsvResult<ParseResult> {
    let bytes = std::fs::read(path.as_ref())?;
    parse_bytes_auto(&bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_count_matches_segments() {
        for text in ["", "a", "a\n", "a\nb", "a\nb\n", "\n\n", "x,y\n\nz"] {
            let table = split_table(text);
            assert_eq!(table.len(), text.split('\n').count(), "text {:?}", text);
        }
    }

    #[test]
    fn test_trailing_newline_adds_empty_row() {
        let table = split_table("a,192.168.1.1\nb,10.0.0.1\n");

        assert_eq!(table.len(), 3);
        assert_eq!(table.rows()[2].cells(), &[String::new()]);
    }

    #[test]
    fn test_empty_text_is_one_empty_cell() {
        let table = split_table("");
        assert_eq!(table.len(), 1);
        assert_eq!(table.cell(0, 0), Some(""));
    }

    #[test]
    fn test_no_trimming_or_quote_handling() {
        let table = split_table("\"HP, Inc\", 10.0.0.1 ,x\r\n");

        assert_eq!(
            table.rows()[0].cells(),
            &["\"HP".to_string(), " Inc\"".to_string(), " 10.0.0.1 ".to_string(), "x\r".to_string()]
        );
    }

    #[test]
    fn test_empty_cells_kept() {
        let row = split_row(",,a,");
        assert_eq!(row.len(), 4);
        assert_eq!(row.get(0), Some(""));
        assert_eq!(row.get(2), Some("a"));
        assert_eq!(row.get(3), Some(""));
    }

    #[test]
    fn test_ragged_rows_pass_through() {
        let table = split_table("ip,model,serial\n10.0.0.9\n10.0.0.10,ecosys,X,extra");
        assert_eq!(table.rows()[1].len(), 1);
        assert_eq!(table.rows()[2].len(), 4);
        assert!(table.is_ragged());
    }

    #[test]
    fn test_utf8_bytes_kept() {
        let result = parse_bytes_auto("ip,lieu\n10.0.0.2,Réception".as_bytes()).unwrap();
        assert_eq!(result.encoding, "utf-8");
        assert_eq!(result.table.cell(1, 1), Some("Réception"));
    }

    #[test]
    fn test_utf8_bom_dropped() {
        let mut bytes = vec![0xEF, 0xBB, 0xBF];
        bytes.extend_from_slice(b"10.0.0.5,bizhub");
        let (text, encoding) = decode_auto(&bytes).unwrap();

        assert_eq!(encoding, "utf-8");
        assert_eq!(text, "10.0.0.5,bizhub");
    }

    #[test]
    fn test_latin1_decoding() {
        // "Société" in ISO-8859-1
        let bytes: &[u8] = &[0x53, 0x6F, 0x63, 0x69, 0xE9, 0x74, 0xE9];
        let decoded = decode_content(bytes, "iso-8859-1").unwrap();
        assert_eq!(decoded, "Société");
    }

    #[test]
    fn test_unknown_label_falls_back() {
        let decoded = decode_content(&[0x41, 0xE9], "no-such-charset").unwrap();
        assert_eq!(decoded, "Aé");
    }
}
