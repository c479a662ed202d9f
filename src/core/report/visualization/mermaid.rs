//! Mermaid diagram generator for the knowledge web
//!
//! Produces flowchart syntax that GitHub, GitLab and the Mermaid runtime
//! render directly.

use crate::core::knowledge::SimilarityGraph;
use std::fmt::Write;

/// Longest note title shown on a node before truncation
const MAX_LABEL_CHARS: usize = 28;

/// Generator for Mermaid diagram syntax
pub struct MermaidGenerator;

impl MermaidGenerator {
    /// Flowchart of the knowledge web, without code fences
    ///
    /// Notes become nodes labelled with title and course code. Shared-tag
    /// connections are undirected (`---`) and labelled with their strength.
    #[must_use]
    pub fn knowledge_web(graph: &SimilarityGraph) -> String {
        let mut output = String::from("flowchart LR\n");

        for node in &graph.nodes {
            let label = Self::node_label(&node.title, &node.course_code);
            let _ = writeln!(output, "    {}[\"{label}\"]", Self::sanitize_id(&node.id));
        }

        if !graph.edges.is_empty() {
            output.push('\n');
        }
        for edge in &graph.edges {
            let _ = writeln!(
                output,
                "    {} ---|{}| {}",
                Self::sanitize_id(&edge.source),
                edge.strength,
                Self::sanitize_id(&edge.target)
            );
        }

        output
    }

    /// Wrap a diagram in a ```` ```mermaid ```` block for Markdown
    #[must_use]
    pub fn fenced(diagram: &str) -> String {
        format!("```mermaid\n{diagram}```\n")
    }

    fn node_label(title: &str, course_code: &str) -> String {
        let title = if title.chars().count() > MAX_LABEL_CHARS {
            let short: String = title.chars().take(MAX_LABEL_CHARS - 3).collect();
            format!("{short}...")
        } else {
            title.to_string()
        };
        let title = title.replace('"', "#quot;");
        if course_code.is_empty() {
            title
        } else {
            format!("{title}<br/>{course_code}")
        }
    }

    /// Turn a note id into a valid Mermaid node id
    ///
    /// ASCII letters and digits pass through; every other byte, `_`
    /// included, becomes `_` plus two hex digits, so distinct ids never
    /// share a node id.
    fn sanitize_id(id: &str) -> String {
        let mut out = String::with_capacity(id.len() + 2);
        out.push_str("n_");
        for byte in id.bytes() {
            if byte.is_ascii_alphanumeric() {
                out.push(char::from(byte));
            } else {
                let _ = write!(out, "_{byte:02x}");
            }
        }
        out
    }
}
