//! Use case orchestration for stagegate.
//!
//! This crate provides the application layer: use cases that coordinate the settings, domain,
//! and render layers. It is intentionally thin and delegates heavy lifting to those layers.
//!
//! The CLI crate depends on this; it only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod context;
mod describe;
mod render;
mod run;

pub use context::{default_context, parse_context, read_context};
pub use describe::{StageDescription, describe_stage, format_stage_banner, format_stage_list};
pub use render::{parse_format, render_report, write_output};
pub use run::{RunInput, RunOutput, exit_code, resolve, run_stage};
