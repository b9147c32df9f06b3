pub mod extractor;
pub mod scanner;

pub use scanner::Scanner;
