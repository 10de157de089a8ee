//! Command implementations for the word frequency CLI.

use crate::cli::args::{Command, WordFrequencyArgs};
use crate::cli::output::write_response;
use log::debug;
use std::io;
use word_frequency::constants::{N_PARAM, TEXT_PARAM, WORD_PARAM};
use word_frequency::{
    read_text_from_path, read_text_from_reader, DefaultWordFrequencyAnalyzer, Error, RequestParams,
    ResponseStatus, Route, WordCountController,
};

/// Execute a CLI command and report the status of the response it produced.
pub fn execute_command(args: &WordFrequencyArgs) -> Result<ResponseStatus, Error> {
    let controller = WordCountController::new();
    controller.log_endpoints();

    let route = match &args.command {
        Command::Endpoints => return list_endpoints(&controller),
        Command::HighestFrequency => Route::HighestFrequency,
        Command::Frequency(_) => Route::Frequency,
        Command::WordFrequency(_) => Route::WordFrequency,
    };

    let params = build_params(args, read_text(args)?);
    let response = controller.handle(&controller.route_path(route), &params);
    debug!("Responding with {}", response.status);

    if response.is_success() {
        write_response(io::stdout().lock(), &response, args.output_format, args.pretty)?;
    } else {
        write_response(io::stderr().lock(), &response, args.output_format, args.pretty)?;
    }

    Ok(response.status)
}

fn list_endpoints(
    controller: &WordCountController<DefaultWordFrequencyAnalyzer>,
) -> Result<ResponseStatus, Error> {
    for route in Route::ALL {
        println!(
            "{} ({})",
            controller.route_path(route),
            route.params().join(", ")
        );
    }

    Ok(ResponseStatus::Ok)
}

/// Text comes from `--text`, then `--input`, then stdin.
fn read_text(args: &WordFrequencyArgs) -> Result<String, Error> {
    if let Some(text) = &args.text {
        return Ok(text.clone());
    }

    match &args.input {
        Some(path) => {
            debug!("Reading text from {}", path.display());
            read_text_from_path(path)
        }
        None => {
            debug!("Reading text from stdin");
            read_text_from_reader(io::stdin().lock())
        }
    }
}

/// Options the user left out stay absent so the controller reports them as missing.
pub fn build_params(args: &WordFrequencyArgs, text: String) -> RequestParams {
    let mut params = RequestParams::new();
    params.insert(TEXT_PARAM.to_string(), text);

    match &args.command {
        Command::Frequency(frequency_args) => {
            if let Some(word) = &frequency_args.word {
                params.insert(WORD_PARAM.to_string(), word.clone());
            }
        }
        Command::WordFrequency(word_frequency_args) => {
            if let Some(n) = &word_frequency_args.n {
                params.insert(N_PARAM.to_string(), n.clone());
            }
        }
        Command::HighestFrequency | Command::Endpoints => {}
    }

    params
}
