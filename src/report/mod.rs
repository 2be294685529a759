//! Text rendering of search results and saving them to `.txt` files

mod errors;
mod persist;
mod render;

pub use errors::ReportError;
pub use persist::{FILE_EXTENSION, save_solutions, validate_file_name};
pub use render::{render_elapsed, render_file_contents, render_solutions};
