//! Roadmap Core Types and Definitions
//!
//! This crate provides the foundational types for career roadmap diagrams.
//! It includes:
//!
//! - **Geometry**: Basic geometric types ([`geometry`] module)
//! - **Model**: Learning-path and resource-catalog payload types ([`model`] module)
//! - **Diagram**: Positioned node and edge output types ([`diagram`] module)

pub mod diagram;
pub mod geometry;
pub mod model;
