//! Result emission and list helpers

mod printer;
pub mod list;

pub use printer::{emit, render, OutputFormat};
pub use list::{join_list, parse_comma_list};
