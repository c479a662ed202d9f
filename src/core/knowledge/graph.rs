//! Undirected shared-tag graph over notes

use super::TagFilter;
use crate::core::models::Note;
use serde::Serialize;
use std::collections::{BTreeSet, HashMap};
use std::fmt;

/// Display data for one note in the graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeView {
    /// Note id
    pub id: String,
    /// Note title
    pub title: String,
    /// Code of the note's course
    pub course_code: String,
    /// Note tags
    pub tags: Vec<String>,
}

impl NodeView {
    fn from_note(note: &Note) -> Self {
        Self {
            id: note.id.clone(),
            title: note.title.clone(),
            course_code: note.course_code.clone(),
            tags: unique_tags(note),
        }
    }
}

/// An undirected edge between two notes that share at least one tag
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Edge {
    /// Id of the earlier note in enumeration order
    pub source: String,
    /// Id of the later note in enumeration order
    pub target: String,
    /// Tags present on both notes, in the source note's order
    pub shared_tags: Vec<String>,
    /// Number of shared tags
    pub strength: usize,
}

impl Edge {
    /// Whether `id` is one of the endpoints
    #[must_use]
    pub fn touches(&self, id: &str) -> bool {
        self.source == id || self.target == id
    }

    /// The endpoint opposite `id`, if `id` is an endpoint
    #[must_use]
    pub fn other(&self, id: &str) -> Option<&str> {
        if self.source == id {
            Some(&self.target)
        } else if self.target == id {
            Some(&self.source)
        } else {
            None
        }
    }
}

/// Notes as nodes, shared tags as weighted edges
///
/// Node degrees are derived from `edges` on every call rather than stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SimilarityGraph {
    /// One node per note, in input order
    pub nodes: Vec<NodeView>,
    /// Edges ordered by (source index, target index)
    pub edges: Vec<Edge>,
}

/// Build the similarity graph, then restrict it to `filter`.
///
/// For every pair of notes `i < j` (input order) an edge exists iff their tag
/// sets intersect; its strength is the size of the intersection. Candidate
/// pairs are found through a tag → notes index, so notes that share nothing
/// are never compared, but the edges and their order are exactly those of the
/// full pairwise scan.
///
/// With a tag filter, only notes carrying that tag survive, together with the
/// edges whose endpoints both survive.
#[must_use]
pub fn build_similarity_graph<'a, I>(notes: I, filter: &TagFilter) -> SimilarityGraph
where
    I: IntoIterator<Item = &'a Note>,
{
    let notes: Vec<&Note> = notes.into_iter().collect();
    let tag_sets: Vec<Vec<String>> = notes.iter().map(|n| unique_tags(n)).collect();

    let mut index: HashMap<&str, Vec<usize>> = HashMap::new();
    for (i, tags) in tag_sets.iter().enumerate() {
        for tag in tags {
            index.entry(tag.as_str()).or_default().push(i);
        }
    }

    let mut edges = Vec::new();
    for (i, tags) in tag_sets.iter().enumerate() {
        let partners: BTreeSet<usize> = tags
            .iter()
            .filter_map(|tag| index.get(tag.as_str()))
            .flatten()
            .copied()
            .filter(|&j| j > i)
            .collect();

        for j in partners {
            let shared: Vec<String> = tags
                .iter()
                .filter(|tag| tag_sets[j].contains(tag))
                .cloned()
                .collect();
            edges.push(Edge {
                source: notes[i].id.clone(),
                target: notes[j].id.clone(),
                strength: shared.len(),
                shared_tags: shared,
            });
        }
    }

    let graph = SimilarityGraph {
        nodes: notes.iter().map(|n| NodeView::from_note(n)).collect(),
        edges,
    };
    graph.filtered(filter)
}

fn unique_tags(note: &Note) -> Vec<String> {
    let mut tags: Vec<String> = Vec::with_capacity(note.tags.len());
    for tag in &note.tags {
        if !tags.contains(tag) {
            tags.push(tag.clone());
        }
    }
    tags
}

impl SimilarityGraph {
    /// Restrict to nodes passing `filter` and edges between surviving nodes
    #[must_use]
    pub fn filtered(self, filter: &TagFilter) -> Self {
        let TagFilter::Tag(tag) = filter else {
            return self;
        };

        let nodes: Vec<NodeView> = self
            .nodes
            .into_iter()
            .filter(|n| n.tags.contains(tag))
            .collect();
        let kept: BTreeSet<&str> = nodes.iter().map(|n| n.id.as_str()).collect();
        let edges = self
            .edges
            .into_iter()
            .filter(|e| kept.contains(e.source.as_str()) && kept.contains(e.target.as_str()))
            .collect();

        Self { nodes, edges }
    }

    /// Number of nodes
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Whether the graph has no nodes
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Look up a node by note id
    #[must_use]
    pub fn node(&self, id: &str) -> Option<&NodeView> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Number of edges incident to `id`
    #[must_use]
    pub fn degree(&self, id: &str) -> usize {
        self.edges.iter().filter(|e| e.touches(id)).count()
    }

    /// Degree of every node, in node order
    #[must_use]
    pub fn degrees(&self) -> Vec<(&str, usize)> {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for edge in &self.edges {
            *counts.entry(edge.source.as_str()).or_default() += 1;
            *counts.entry(edge.target.as_str()).or_default() += 1;
        }
        self.nodes
            .iter()
            .map(|n| (n.id.as_str(), counts.get(n.id.as_str()).copied().unwrap_or(0)))
            .collect()
    }

    /// Ids of the nodes adjacent to `id`, in edge order
    #[must_use]
    pub fn neighbors(&self, id: &str) -> Vec<&str> {
        self.edges.iter().filter_map(|e| e.other(id)).collect()
    }

    /// Nodes with no incident edges
    #[must_use]
    pub fn isolated(&self) -> Vec<&NodeView> {
        self.nodes.iter().filter(|n| self.degree(&n.id) == 0).collect()
    }

    /// The `n` strongest edges; ties keep edge order
    #[must_use]
    pub fn strongest_edges(&self, n: usize) -> Vec<&Edge> {
        let mut edges: Vec<&Edge> = self.edges.iter().collect();
        edges.sort_by(|a, b| b.strength.cmp(&a.strength));
        edges.truncate(n);
        edges
    }

    /// Serialize as `{ "nodes": [...], "links": [...] }` for force-layout front ends.
    ///
    /// Each node carries its computed `degree`.
    ///
    /// # Errors
    /// Returns an error if serialization fails
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        #[derive(Serialize)]
        struct LayoutNode<'a> {
            #[serde(flatten)]
            node: &'a NodeView,
            degree: usize,
        }

        #[derive(Serialize)]
        struct Layout<'a> {
            nodes: Vec<LayoutNode<'a>>,
            links: &'a [Edge],
        }

        let degrees = self.degrees();
        let layout = Layout {
            nodes: self
                .nodes
                .iter()
                .zip(degrees)
                .map(|(node, (_, degree))| LayoutNode { node, degree })
                .collect(),
            links: &self.edges,
        };
        serde_json::to_string_pretty(&layout)
    }
}

impl fmt::Display for SimilarityGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Knowledge web ({} notes, {} connections):",
            self.node_count(),
            self.edge_count()
        )?;
        writeln!(f)?;

        for (id, degree) in self.degrees() {
            let title = self.node(id).map_or(id, |n| n.title.as_str());
            writeln!(f, "  {title} [{id}] degree {degree}")?;
        }

        if !self.edges.is_empty() {
            writeln!(f)?;
        }
        for edge in &self.edges {
            writeln!(
                f,
                "  {} — {} ({}): {}",
                edge.source,
                edge.target,
                edge.strength,
                edge.shared_tags.join(", ")
            )?;
        }

        Ok(())
    }
}
