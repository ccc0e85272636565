//! Album directory and audio file discovery

pub mod scanner;

pub use scanner::scan;
