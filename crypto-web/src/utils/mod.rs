//! Utilities: constants, formatting, markup and URL helpers

pub mod constants;
pub mod format;
pub mod html;
pub mod url;
