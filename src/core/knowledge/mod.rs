//! Knowledge web: notes connected by the tags they share

pub mod graph;

pub use graph::{build_similarity_graph, Edge, NodeView, SimilarityGraph};

use crate::core::models::Note;
use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::str::FromStr;

/// Single-tag restriction applied to the knowledge web
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TagFilter {
    /// No restriction
    #[default]
    All,
    /// Only notes carrying this exact tag
    Tag(String),
}

impl FromStr for TagFilter {
    type Err = String;

    /// `"all"` (any case) disables filtering; anything else is a tag name
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            Ok(Self::All)
        } else if s.trim().is_empty() {
            Err("Tag filter cannot be empty".to_string())
        } else {
            Ok(Self::Tag(s.to_string()))
        }
    }
}

impl fmt::Display for TagFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Tag(tag) => write!(f, "{tag}"),
        }
    }
}

/// Every tag used by at least one note, sorted
#[must_use]
pub fn all_tags<'a, I>(notes: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a Note>,
{
    notes
        .into_iter()
        .flat_map(|n| n.tags.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// How many notes use each tag, most used first (ties alphabetical)
#[must_use]
pub fn tag_usage<'a, I>(notes: I) -> Vec<(String, usize)>
where
    I: IntoIterator<Item = &'a Note>,
{
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for note in notes {
        let unique: BTreeSet<&str> = note.tags.iter().map(String::as_str).collect();
        for tag in unique {
            *counts.entry(tag).or_default() += 1;
        }
    }

    let mut usage: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(tag, count)| (tag.to_string(), count))
        .collect();
    usage.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    usage
}
