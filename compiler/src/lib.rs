//! jsonpb-haskell-compiler
//!
//! This crate implements:
//!  1) Conversion of protobuf descriptors into a schema model,
//!  2) Name/type mapping onto proto-lens Haskell conventions,
//!  3) Field classification (plain fields, oneof groups, presence wrapping),
//!  4) Code generation of `FromJSONPB`/`ToJSONPB` instances (`compile_file` → `GeneratedFile`),
//!  5) The protoc plugin request/response convention, and
//!  6) Error types (`GenError`) and configuration (`GeneratorConfig`).

pub mod error;
pub mod config;
pub mod types;
pub mod utils;
pub mod type_map;
pub mod classify;
pub mod gen_haskell;
pub mod compiler;
pub mod descriptor;
pub mod plugin;

pub use compiler::{compile_file, generate, select_files, GeneratedFile};
pub use config::GeneratorConfig;
pub use error::GenError;
pub use plugin::{handle_request, read_descriptor_set, run};
