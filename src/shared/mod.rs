/// Shared utilities used across all layers
pub mod encoding;
pub mod error;
pub mod result;
pub mod security;

pub use result::Result;
