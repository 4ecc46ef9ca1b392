//! Clientsmith code generator library.
//!
//! This crate turns an [`ApiConfig`](clientsmith_define::ApiConfig) into a
//! complete Ruby client gem. The generated gem includes:
//!
//! - A module with a default `Configuration`, a pluggable cache and `configure`
//! - A Faraday-backed `Request` with basic, API key or OAuth authentication
//! - One resource class per configured resource, one method per endpoint
//! - `Object` and `Collection` wrappers for response bodies
//! - `README.md`, `docs/api.md` and a starter minitest suite
//!
//! ## Modules
//!
//! - [`builder`] - Generation context, render order and the build entry point
//! - [`codegen`] - Templates for each generated file
//! - [`output`] - Sinks that receive rendered files (disk, memory, stdout)
//! - [`naming`] - Module, class and file name derivation
//! - [`parser`] - Path template placeholders
//! - [`response`] - Collection detection and response unwrapping
//! - [`auth`] - Per-auth-mode fragments for every template
//! - [`errors`] - Error types for the generator
//!
//! ## Example Usage
//!
//! ```no_run
//! use std::path::Path;
//! use clientsmith_define::load_config;
//! use clientsmith_gen::builder::Builder;
//! use clientsmith_gen::output::FsSink;
//!
//! let config = load_config(Path::new("api.yml")).unwrap();
//! let mut sink = FsSink::new("my_client").unwrap();
//! let report = Builder::new(&config).build(&mut sink).unwrap();
//! println!("wrote {} files", report.len());
//! ```

pub mod auth;
pub mod builder;
pub mod codegen;
pub mod errors;
pub mod naming;
pub mod output;
pub mod parser;
pub mod response;

#[cfg(test)]
mod test_utils;
