//! Output formatting for CLI commands.

use crate::cli::args::OutputFormat;
use serde_json::Value;
use std::io::Write;
use word_frequency::{write_value_csv, write_word_frequencies_csv, Error, Response, WordFrequency};

/// Writes a response in the requested format. Error responses are rendered too, so the
/// caller decides which stream they go to.
pub fn write_response<W: Write>(
    mut writer: W,
    response: &Response,
    output_format: OutputFormat,
    pretty: bool,
) -> Result<(), Error> {
    if let Some(error_response) = response.error_response() {
        return match output_format {
            OutputFormat::Text => {
                writeln!(writer, "{}: {}", error_response.error, error_response.message)?;
                Ok(())
            }
            OutputFormat::Json | OutputFormat::Csv => write_json(writer, response, pretty),
        };
    }

    match output_format {
        OutputFormat::Json => write_json(writer, response, pretty),
        OutputFormat::Text => match &response.body {
            Value::Array(_) => {
                for word_frequency in word_frequencies(response)? {
                    writeln!(writer, "{}", word_frequency)?;
                }
                Ok(())
            }
            scalar => {
                writeln!(writer, "{}", scalar)?;
                Ok(())
            }
        },
        OutputFormat::Csv => match &response.body {
            Value::Array(_) => write_word_frequencies_csv(writer, &word_frequencies(response)?),
            scalar => write_value_csv(writer, "value", &scalar.to_string()),
        },
    }
}

fn write_json<W: Write>(mut writer: W, response: &Response, pretty: bool) -> Result<(), Error> {
    writeln!(writer, "{}", response.to_json_string(pretty)?)?;
    Ok(())
}

fn word_frequencies(response: &Response) -> Result<Vec<WordFrequency>, Error> {
    Ok(serde_json::from_value(response.body.clone())?)
}
