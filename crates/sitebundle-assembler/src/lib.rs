//! Sitebundle Assembler Library
//!
//! Turns the framework's build output into a flat, locale-prefixed bundle
//! for a static host.
//!
//! # Modules
//!
//! - [`layout`] - Where the generator output lives on disk
//! - [`input`] - Required/optional input declarations
//! - [`copy`] - Tree and file copy helpers
//! - [`build_id`] - Build identifier loading
//! - [`pages`] - Per-locale page copy
//! - [`nav_data`] - Client navigation data under `_next/data/<build id>/`
//! - [`redirects`] - `_redirects` rule file
//! - [`staging`] - Staged or in-place output publishing
//! - [`assemble`] - Assembly orchestration

pub mod assemble;
pub mod build_id;
pub mod copy;
pub mod input;
pub mod layout;
pub mod nav_data;
pub mod pages;
pub mod redirects;
pub mod staging;

pub use assemble::{AssembleError, Assembler, AssemblyStats};
pub use build_id::BuildId;
pub use input::{Input, InputPolicy};
pub use layout::SourceLayout;
pub use redirects::RedirectRule;
pub use staging::PublishMode;
