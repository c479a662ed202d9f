//! Integration tests for the tag-similarity knowledge web

use scholar_analytics::core::knowledge::{all_tags, build_similarity_graph, TagFilter};
use scholar_analytics::core::models::Note;

fn note(id: &str, tags: &[&str]) -> Note {
    Note::new(id.to_string(), format!("Note {id}"), "CS101".to_string(), tags)
}

fn abc() -> Vec<Note> {
    vec![
        note("A", &["Algorithms", "Theory"]),
        note("B", &["Algorithms", "Practice"]),
        note("C", &["Calculus"]),
    ]
}

#[test]
fn abc_example() {
    let notes = abc();
    let graph = build_similarity_graph(&notes, &TagFilter::All);

    assert_eq!(graph.node_count(), 3);
    assert_eq!(graph.edge_count(), 1);
    let edge = &graph.edges[0];
    assert_eq!((edge.source.as_str(), edge.target.as_str()), ("A", "B"));
    assert_eq!(edge.shared_tags, vec!["Algorithms".to_string()]);
    assert_eq!(edge.strength, 1);
    assert_eq!(graph.degree("A"), 1);
    assert_eq!(graph.degree("C"), 0);
}

#[test]
fn filtering_keeps_tagged_notes_only() {
    let notes = abc();
    let graph = build_similarity_graph(&notes, &TagFilter::Tag("Algorithms".to_string()));
    let ids: Vec<&str> = graph.nodes.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(ids, vec!["A", "B"]);
    assert_eq!(graph.edge_count(), 1);

    let calculus = build_similarity_graph(&notes, &"Calculus".parse().unwrap());
    assert_eq!(calculus.node_count(), 1);
    assert_eq!(calculus.edge_count(), 0);
}

#[test]
fn unknown_tag_gives_empty_graph() {
    let notes = abc();
    let graph = build_similarity_graph(&notes, &TagFilter::Tag("Physics".to_string()));
    assert!(graph.is_empty());
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn empty_input_gives_empty_graph() {
    let graph = build_similarity_graph(Vec::<&Note>::new(), &TagFilter::All);
    assert!(graph.is_empty());
}

#[test]
fn tags_match_case_sensitively() {
    let notes = [note("x", &["algorithms"]), note("y", &["Algorithms"])];
    let graph = build_similarity_graph(&notes, &TagFilter::All);
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn building_twice_gives_same_graph() {
    let notes = abc();
    assert_eq!(
        build_similarity_graph(&notes, &TagFilter::All),
        build_similarity_graph(&notes, &TagFilter::All)
    );
}

#[test]
fn dropdown_tags_are_sorted_unique() {
    let notes = abc();
    assert_eq!(
        all_tags(&notes),
        vec!["Algorithms", "Calculus", "Practice", "Theory"]
    );
}
