mod scanner;

pub use scanner::{is_index_file, is_test_file, ComponentScanner};
