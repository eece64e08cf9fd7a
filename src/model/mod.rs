pub mod config;
pub mod draft;
pub mod task;

pub use config::*;
pub use draft::*;
pub use task::*;
