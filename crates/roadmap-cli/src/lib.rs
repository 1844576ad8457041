//! CLI logic for the roadmap diagram tool.
//!
//! Reads a learning-path JSON payload (and an optional resources payload),
//! runs the layout pipeline, and writes the positioned graph as JSON.

mod args;
mod config;

pub use args::Args;

use std::fs;

use log::info;

use roadmap::{RoadmapBuilder, RoadmapError};

/// Run the roadmap CLI application
///
/// # Errors
///
/// Returns `RoadmapError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Payload decoding errors
pub fn run(args: &Args) -> Result<(), RoadmapError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing roadmap"
    );

    // Load configuration
    let app_config = config::load_config(args.config.as_ref())?;

    // Read input payloads
    let source = fs::read_to_string(&args.input)?;

    let builder = RoadmapBuilder::new(app_config);
    let document = builder.parse_learning_path(&source)?;

    let catalog = match &args.resources {
        Some(path) => Some(builder.parse_resources(&fs::read_to_string(path)?)?),
        None => None,
    };

    // Compute the layout and write the output contract
    let graph = builder.layout(Some(&document), catalog.as_ref());
    let json = builder.to_json(&graph)?;
    fs::write(&args.output, json)?;

    info!(output_file = args.output; "Graph exported successfully");

    Ok(())
}
