//! Interactive command workflows.
//!
//! Each submodule drives one subcommand: it asks its questions through a
//! [crate::ui::Prompter], calls the pure operation, and reports the outcome.
//! Keeping them apart from clap lets tests run them with scripted input.

pub mod bump;
pub mod component;
pub mod merge_env;
pub mod strip_logs;
