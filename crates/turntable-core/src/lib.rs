pub mod cache;
pub mod color;
pub mod config;
pub mod consts;
pub mod error;
pub mod executor;
pub mod frames;
pub mod loader;
pub mod navigation;
pub mod probe;
pub mod source;
pub mod surface;
pub mod viewer;
