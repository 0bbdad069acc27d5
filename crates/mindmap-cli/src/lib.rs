//! CLI logic for the mind-map layout tool.
//!
//! Reads a JSON mind-map document, lays it out and writes the positioned
//! document back as JSON.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::fs;

use log::info;

use mindmap::{
    MindMapBuilder, MindMapError,
    config::{AppConfig, OutputConfig},
};

/// Run the mindmap CLI application
///
/// This function processes the input document through the layout pipeline
/// and writes the resulting JSON to the output file.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `MindMapError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Malformed documents
/// - Graphs that are not a single rooted tree
pub fn run(args: &Args) -> Result<(), MindMapError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing mind map"
    );

    let mut app_config = config::load_config(args.config.as_ref())?;
    if args.compact {
        app_config = AppConfig::new(app_config.layout().clone(), OutputConfig::new(false));
    }

    let source = fs::read_to_string(&args.input)?;

    let builder = MindMapBuilder::new(app_config);
    let document = builder.parse(&source)?;
    let layout = builder.layout_document(&document)?;
    let json = builder.render_json(&layout)?;

    fs::write(&args.output, json)?;

    info!(output_file = args.output; "Layout exported successfully");

    Ok(())
}
