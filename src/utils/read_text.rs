use crate::Error;
use flate2::read::GzDecoder;
use std::fs;
use std::io::Read;
use std::path::Path;

/// Reads a text document from `path`. Files with a `.gz` extension are decompressed first.
///
/// Invalid UTF-8 is reported as an `IoError` of kind `InvalidData`.
pub fn read_text_from_path(path: &Path) -> Result<String, Error> {
    let read_bytes = fs::read(path)?;

    if path.extension().is_some_and(|ext| ext == "gz") {
        decompress_text_from_bytes(&read_bytes)
    } else {
        read_text_from_reader(read_bytes.as_slice())
    }
}

/// Reads a whole text document from any reader, e.g. stdin.
pub fn read_text_from_reader<R: Read>(mut reader: R) -> Result<String, Error> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    Ok(text)
}

/// Decompress a Gzip encoded text document held in memory.
pub fn decompress_text_from_bytes(read_bytes: &[u8]) -> Result<String, Error> {
    read_text_from_reader(GzDecoder::new(read_bytes))
}
