//! Ruby and Markdown templates for the generated client gem.
//!
//! Each submodule renders one generated file (or one family of files) from a
//! [`GenerationContext`](crate::builder::GenerationContext). Templates are
//! plain functions returning `String`; none of them write to disk.
//!
//! ## Submodules
//!
//! - [`source`] - [`SourceBuilder`], the indentation-aware Ruby line writer
//! - [`main_file`] - Entry file with requires and module-level defaults
//! - [`configuration`] - `Configuration` with auth attributes
//! - [`client`] - `Client` with one memoized accessor per resource
//! - [`request`] - Faraday-backed `Request` with auth and error mapping
//! - [`error`] - `Error` carrying body and status
//! - [`object`] - `Object`, a recursive `OpenStruct` wrapper
//! - [`collection`] - `Collection`, an `Enumerable` with pagination keys
//! - [`cache`] - `MemoryCache` and `FileCache`
//! - [`version`] - `VERSION` constant
//! - [`resource`] - One class per resource, one method per endpoint
//! - [`documentation`] - [`ApiDocBuilder`] for `docs/api.md`
//! - [`readme`] - `README.md`
//! - [`test_suite`] - Minitest helper and starter tests

pub mod cache;
pub mod client;
pub mod collection;
pub mod configuration;
pub mod documentation;
pub mod error;
pub mod main_file;
pub mod object;
pub mod readme;
pub mod request;
pub mod resource;
pub mod source;
pub mod test_suite;
pub mod version;

pub use documentation::ApiDocBuilder;
pub use source::SourceBuilder;
