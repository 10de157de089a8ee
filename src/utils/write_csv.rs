use crate::models::WordFrequency;
use crate::Error;
use csv::WriterBuilder;
use std::io::Write;

/// Writes ranked word frequencies as CSV with a `word,frequency` header.
///
/// The header is written even when there are no rows.
pub fn write_word_frequencies_csv<W: Write>(
    writer: W,
    word_frequencies: &[WordFrequency],
) -> Result<(), Error> {
    let mut csv_writer = WriterBuilder::new().has_headers(false).from_writer(writer);

    csv_writer.write_record(["word", "frequency"])?;
    for word_frequency in word_frequencies {
        csv_writer.write_record([
            word_frequency.word(),
            word_frequency.frequency().to_string().as_str(),
        ])?;
    }
    csv_writer.flush()?;

    Ok(())
}

/// Writes a single scalar result as a one-column CSV document.
pub fn write_value_csv<W: Write>(writer: W, header: &str, value: &str) -> Result<(), Error> {
    let mut csv_writer = WriterBuilder::new().has_headers(false).from_writer(writer);

    csv_writer.write_record([header])?;
    csv_writer.write_record([value])?;
    csv_writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writes_header_and_rows() {
        let mut buffer = Vec::new();
        let rows = vec![WordFrequency::new("the", 2), WordFrequency::new("lake", 1)];

        write_word_frequencies_csv(&mut buffer, &rows).unwrap();

        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "word,frequency\nthe,2\nlake,1\n"
        );
    }

    #[test]
    fn test_empty_list_still_has_header() {
        let mut buffer = Vec::new();
        write_word_frequencies_csv(&mut buffer, &[]).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "word,frequency\n");
    }

    #[test]
    fn test_scalar_value() {
        let mut buffer = Vec::new();
        write_value_csv(&mut buffer, "value", "2").unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "value\n2\n");
    }
}
