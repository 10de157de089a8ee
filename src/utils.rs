pub mod count_word_frequencies;
pub mod preview_text;
pub mod read_text;
pub mod request_params;
pub mod sort_word_frequencies;
pub mod write_csv;

pub use count_word_frequencies::count_word_frequencies;
pub use preview_text::preview_text;
pub use read_text::{decompress_text_from_bytes, read_text_from_path, read_text_from_reader};
pub use request_params::{
    combine_violations, parse_int_param, require_not_blank, require_param, require_positive,
};
pub use sort_word_frequencies::sort_word_frequencies;
pub use write_csv::{write_value_csv, write_word_frequencies_csv};
