//! Figweave Core Types and Definitions
//!
//! This crate provides the foundational types shared by the figweave crates.
//! It includes:
//!
//! - **Document**: The subset of the Figma file schema read by the converter ([`document`] module)
//! - **Colors**: Color handling with CSS output ([`color::Color`])
//! - **Geometry**: Bounding boxes and offsets ([`geometry`] module)

pub mod color;
pub mod document;
pub mod geometry;
