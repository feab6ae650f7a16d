//! # Builders
//!
//! Builder patterns for configuring the codec.
//!
//! ## Modules
//!
//! - [`codec_builder`] - window-size configuration for encode/decode
//!
//! ## Usage
//!
//! Builders provide a fluent API with the container's standard defaults and
//! validated overrides.

pub mod codec_builder;

pub use codec_builder::{Codec, CodecBuilder};
