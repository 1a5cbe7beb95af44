pub mod source;

pub use source::{class_named, parse, parse_as, parse_class};
pub use tempdir::{unique_temp_dir, write_file};
