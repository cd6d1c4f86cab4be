mod file_scanner;
mod path_filter;
mod path_validator;

pub use file_scanner::walk_image_files;
pub use path_filter::{is_in_cache_dir, is_jpeg_file_name, matches_image_pattern};
pub use path_validator::{ensure_directory_exists, validate_directory_exists};
