#![deny(warnings, rust_2024_compatibility)]
// Specific pedantic lints enforced (not blanket allow):
#![deny(
    clippy::explicit_iter_loop,
    clippy::manual_let_else,
    clippy::semicolon_if_nothing_returned,
    clippy::inconsistent_struct_constructor
)]
// Noisy pedantic lints suppressed with justification:
#![allow(
    clippy::missing_errors_doc,      // Internal API
    clippy::module_name_repetitions, // e.g. ContainerBuilder in container module
    clippy::must_use_candidate,      // Annotated selectively on critical APIs
    clippy::doc_markdown             // Internal API
)]

//! Build-time wiring of log processors.
//!
//! Processors are services tagged with `monolog.processor`. [`AddProcessorsPass`]
//! runs once over a populated [`ContainerModel`], orders the tagged processors by
//! priority and appends a `pushProcessor` call to the logger, channel logger or
//! handler definition each one targets.

pub mod config;
pub mod constants;
pub mod container;
pub mod error;
pub mod logging;
pub mod pass;

// Re-export main types for easy access
pub use config::ProcessorPassConfig;
pub use container::{
    Argument, ContainerBuilder, ContainerModel, Definition, DefinitionModel, MethodCall, Tag,
    TagAttributes, TaggedService,
};
pub use error::{ConfigurationError, PassError, ResolutionError};
pub use pass::{AddProcessorsPass, CompilerPass};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
