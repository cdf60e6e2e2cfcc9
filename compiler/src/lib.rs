//! protowrap-compiler
//!
//! This crate implements:
//!  1) A line classifier + per-file state machine for protobuf-style schema files,
//!  2) A type resolver (native scalars and same-file enums vs. message references),
//!  3) Scala renderers for the optional-wrapper and deserializer-registry artifacts,
//!  4) A driver (`generate`) that globs a schema tree, scans it in sorted order,
//!     and writes both artifacts,
//!  5) Error types (`ProtowrapError`).

pub mod error;
pub mod types;
pub mod utils;
pub mod line;
pub mod scanner;
pub mod resolve;
pub mod gen_scala;
pub mod generator;

pub use error::ProtowrapError;
pub use generator::{discover_schema_files, generate, GenerateReport, GeneratorConfig};
pub use scanner::{scan_file, scan_text};
