//! Visualization generation for the knowledge web

pub mod mermaid;

pub use mermaid::MermaidGenerator;
