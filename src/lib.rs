//! deadstrip - strip functions marked `#[allow(dead_code)]` from a source file
//!
//! This library removes function definitions preceded by a marker
//! annotation, finding each function's end with a naive line-by-line
//! brace count. It is deliberately not a parser: braces inside string
//! literals and comments count like any other brace.
//!
//! # Pipeline
//!
//! 1. **Read** - load the target file fully into memory
//! 2. **Strip** - one forward pass with a three-state scanner
//! 3. **Write** - overwrite the target file in place
//! 4. **Report** - original/clean/removed line counts

pub mod config;
pub mod error;
pub mod refactor;
pub mod report;
pub mod strip;

pub use config::Config;
pub use error::StripError;
pub use refactor::SourceRewriter;
pub use report::{ReportFormat, Reporter, StripSummary};
pub use strip::{DeadFunctionStripper, StripOutcome};
