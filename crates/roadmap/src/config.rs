//! Configuration types for roadmap layout.
//!
//! This module provides configuration structures that control how the
//! phase chain is laid out. All types implement [`serde::Deserialize`] for
//! flexible loading from external sources.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level application configuration.
//! - [`LayoutConfig`] - Spacing constants and chain origin.
//!
//! # Example
//!
//! ```
//! # use roadmap::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.layout().spacing(), 220.0);
//! ```

use serde::Deserialize;

use roadmap_core::geometry::Point;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Layout configuration section.
    #[serde(default)]
    layout: LayoutConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified layout configuration.
    pub fn new(layout: LayoutConfig) -> Self {
        Self { layout }
    }

    /// Returns the layout configuration.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }
}

/// Spacing constants and chain origin for the layout engine.
///
/// The spacing derived from these constants over-approximates rendered
/// card height, so nodes never overlap regardless of content length and
/// content is never measured.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Approximate rendered height of a node card.
    base_node_height: f32,

    /// Visual buffer between consecutive cards.
    min_gap: f32,

    /// Top-left origin of the chain.
    origin_x: f32,
    origin_y: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            base_node_height: 140.0,
            min_gap: 80.0,
            origin_x: 50.0,
            origin_y: 50.0,
        }
    }
}

impl LayoutConfig {
    /// Returns the approximate rendered height of a node card.
    pub fn base_node_height(&self) -> f32 {
        self.base_node_height
    }

    /// Returns the visual buffer between consecutive cards.
    pub fn min_gap(&self) -> f32 {
        self.min_gap
    }

    /// Vertical distance between consecutive node positions.
    pub fn spacing(&self) -> f32 {
        self.base_node_height + self.min_gap
    }

    /// Returns the position of the first node in the chain.
    pub fn origin(&self) -> Point {
        Point::new(self.origin_x, self.origin_y)
    }
}
