//! Core scanning primitives
//!
//! - Scanner: SIMD-accelerated delimiter detection using memchr
//! - Tag: void element classification
//! - Identifier: `id`/`class` matching over a tag's attribute region

pub mod identifier;
pub mod scanner;
pub mod tag;
