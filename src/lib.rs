//! # mcpacker Core Library
//!
//! This crate provides the core functionality for the `mcpacker` packaging tool.
//!
//! It is designed to be used by the `mcpacker` command-line application, but its public API
//! can also be used to programmatically package an add-on source tree into a `.mcpack` archive.
//!
//! ## Key Modules
//!
//! - [`packager`]: Contains the logic for walking the source tree and writing the zip archive.
//! - [`config`]: Holds the fixed input/output paths used by the binary.
//! - [`manifest`]: Reads the add-on `manifest.json` to derive distribution package names.

pub mod config;
pub mod error;
pub mod manifest;
pub mod packager;

pub use config::PackConfig;
pub use error::PackagerError;
pub use packager::{pack, PackSummary};
