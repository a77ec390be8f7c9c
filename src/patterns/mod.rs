//! Japanese email pattern library
//!
//! Boolean predicates over single lines of *normalized* text. Because the
//! normalizer has already folded full-width ASCII to half-width and half-width
//! katakana to full-width, the patterns here never enumerate width variants.
//!
//! All regexes are compiled once at first use; callers never pay per-line
//! compilation.

mod closings;
mod greetings;
mod meta;
mod names;
mod separators;
mod signatures;

pub use closings::is_closing_line;
pub use greetings::is_greeting_line;
pub use meta::has_meta_discussion;
pub use names::{contains_known_name, is_name_line};
pub use separators::is_separator_line;
pub use signatures::{is_company_line, is_contact_info_line, is_position_line};
