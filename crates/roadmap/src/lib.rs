//! Roadmap - layout, matching, and reconciliation for career roadmap diagrams.
//!
//! Transforms an AI-generated learning path and resource catalog into a
//! positioned, renderable graph: a linear chain of phase nodes bookended by
//! start and end markers. User-moved node positions survive incremental
//! document updates through reconciliation.

pub mod config;
pub mod layout;
pub mod matcher;
pub mod reconcile;
pub mod view;

mod error;

pub use roadmap_core::{diagram, geometry, model};

pub use error::RoadmapError;

use log::{debug, info, trace};

use roadmap_core::{
    diagram::DiagramGraph,
    model::{LearningPathDocument, ResourceCatalog},
};

use config::AppConfig;

/// Facade for decoding payloads and computing roadmap layouts.
///
/// # Examples
///
/// ```
/// use roadmap::{RoadmapBuilder, config::AppConfig};
///
/// let builder = RoadmapBuilder::new(AppConfig::default());
///
/// let payload = r#"{ "learning_phases": [ { "phase": "Foundations" } ] }"#;
/// let document = builder.parse_learning_path(payload).expect("valid payload");
///
/// let graph = builder.layout(Some(&document), None);
/// assert_eq!(graph.nodes.len(), 3);
/// ```
#[derive(Debug, Default)]
pub struct RoadmapBuilder {
    config: AppConfig,
}

impl RoadmapBuilder {
    /// Create a new builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Decode a learning-path JSON payload.
    ///
    /// # Errors
    ///
    /// Returns [`RoadmapError::Payload`] when the payload is not valid JSON
    /// or does not loosely conform to the learning-path shape.
    pub fn parse_learning_path(&self, source: &str) -> Result<LearningPathDocument, RoadmapError> {
        info!("Parsing learning-path payload");

        let document: LearningPathDocument = serde_json::from_str(source)?;

        debug!("Learning path parsed successfully");
        trace!(document:?; "Parsed learning path");

        Ok(document)
    }

    /// Decode a resources JSON payload.
    ///
    /// # Errors
    ///
    /// Returns [`RoadmapError::Payload`] when the payload is not valid JSON
    /// or does not loosely conform to the catalog shape.
    pub fn parse_resources(&self, source: &str) -> Result<ResourceCatalog, RoadmapError> {
        info!("Parsing resources payload");

        let catalog: ResourceCatalog = serde_json::from_str(source)?;

        debug!(
            courses_len = catalog.courses.len(),
            certifications_len = catalog.certifications.len();
            "Resource catalog parsed successfully",
        );

        Ok(catalog)
    }

    /// Compute the positioned graph for a document and catalog.
    ///
    /// Total over partial input: an absent document or catalog never
    /// fails, it just produces the default diagram or empty resource
    /// lists.
    pub fn layout(
        &self,
        document: Option<&LearningPathDocument>,
        catalog: Option<&ResourceCatalog>,
    ) -> DiagramGraph {
        info!("Calculating roadmap layout");

        let graph = layout::layout(document, catalog, self.config.layout());

        debug!(
            nodes_len = graph.nodes.len(),
            edges_len = graph.edges.len();
            "Layout calculated",
        );

        graph
    }

    /// Serialize a graph to the JSON output contract.
    ///
    /// # Errors
    ///
    /// Returns [`RoadmapError::Payload`] when serialization fails.
    pub fn to_json(&self, graph: &DiagramGraph) -> Result<String, RoadmapError> {
        Ok(serde_json::to_string_pretty(graph)?)
    }
}
