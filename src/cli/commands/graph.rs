//! `scholar graph` handler

use super::load_workspace;
use crate::args::GraphFormat;
use scholar_analytics::config::Config;
use scholar_analytics::core::knowledge::{all_tags, SimilarityGraph, TagFilter};
use scholar_analytics::core::report::MermaidGenerator;
use scholar_analytics::{info, warn};
use std::fs;
use std::path::Path;

/// Build the knowledge web and print or write it
///
/// # Errors
/// Returns a printable message if the record cannot be loaded, the tag is
/// empty, or the output cannot be written
pub fn run(
    input_file: Option<&Path>,
    tag: Option<&str>,
    format: GraphFormat,
    output: Option<&Path>,
    config: &Config,
) -> Result<(), String> {
    let filter: TagFilter = tag.unwrap_or("all").parse().map_err(|e| format!("✗ {e}"))?;
    let workspace = load_workspace(input_file, config)?;

    if let TagFilter::Tag(name) = &filter {
        if !workspace.notes.iter().any(|n| n.has_tag(name)) {
            warn!(
                "No note is tagged '{name}'. Known tags: {}",
                all_tags(workspace.notes.iter()).join(", ")
            );
        }
    }

    let graph = workspace.knowledge_web(&filter);
    let rendered = render(&graph, format)?;

    match output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)
                    .map_err(|e| format!("✗ Failed to create {}: {e}", parent.display()))?;
            }
            fs::write(path, rendered)
                .map_err(|e| format!("✗ Failed to write {}: {e}", path.display()))?;
            info!(
                "Knowledge web written to {} ({} notes, {} connections)",
                path.display(),
                graph.node_count(),
                graph.edge_count()
            );
            println!("✓ Knowledge web written: {}", path.display());
        }
        None => print!("{rendered}"),
    }
    Ok(())
}

fn render(graph: &SimilarityGraph, format: GraphFormat) -> Result<String, String> {
    match format {
        GraphFormat::Text => Ok(graph.to_string()),
        GraphFormat::Json => graph
            .to_json()
            .map(|json| json + "\n")
            .map_err(|e| format!("✗ Failed to serialize graph: {e}")),
        GraphFormat::Mermaid => Ok(MermaidGenerator::knowledge_web(graph)),
    }
}
