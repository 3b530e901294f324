//! Command implementations for the Registrar CLI
//!
//! Submodules:
//! - `common`: connection-string resolution shared by both surfaces
//! - `migrate`: run the full migration sequence from the command line
//! - `serve`: HTTP trigger endpoint wrapping the same runner

pub mod common;
pub mod migrate;
pub mod serve;
