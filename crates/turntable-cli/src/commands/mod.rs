pub mod config;
pub mod info;
pub mod probe;
pub mod url;
