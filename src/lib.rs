pub mod boundary;
pub mod cli;
pub mod config;
pub mod envmerge;
pub mod error;
pub mod git;
pub mod manifest;
pub mod paths;
pub mod release;
pub mod scaffold;
pub mod strip;
pub mod ui;
pub mod version;

pub use error::{FrontkitError, Result};
