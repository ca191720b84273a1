pub mod csv;

pub use csv::{load_history, parse_history, parse_key};
