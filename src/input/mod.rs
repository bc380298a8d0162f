pub mod matcher;
pub mod scanner;

pub use matcher::match_line;
pub use scanner::scan_file;
