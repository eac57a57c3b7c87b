// STU: SESv2 Template Utility
// Copyright (c) 2024 STU Core Team

//! # STU Library
//!
//! Lists, fetches, and mirrors remotely stored email templates. Template
//! names double as relative paths: a configurable separator substring
//! splits each name into directory components, and `pull` materializes
//! the whole remote template set as a local `.html` tree with remote
//! creation times applied to the files.

#![warn(
    missing_docs,
    rust_2018_idioms,
    unused_qualifications,
    missing_debug_implementations
)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod export;
pub mod gateway;
pub mod mapper;
pub mod output;
pub mod types;

// Re-exports for convenience
pub use crate::config::{Config, GatewayConfig, PullConfig};
pub use crate::error::{Error, Result};
pub use crate::gateway::{SesTemplateStore, TemplateStore};
pub use crate::mapper::{map_name_to_path, PathPlan};
pub use crate::types::{TemplateBody, TemplateContent, TemplateSummary};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
