//! Diagram data model: components, connections, and edge resolution.
//!
//! A diagram is a small static graph authored alongside each project entry.
//! Node positions are percentages of the diagram surface rather than pixels
//! so a graph keeps its shape at any container size. Connections reference
//! components by id; resolution against the component set is tolerant, and a
//! connection naming a missing id simply resolves to nothing.

#[cfg(test)]
#[path = "graph_test.rs"]
mod graph_test;

use serde::{Deserialize, Serialize};

/// A node in an architecture diagram.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiagramComponent {
    /// Stable identifier referenced by [`Connection`] endpoints.
    pub id: String,
    /// Short display name rendered inside the node.
    pub label: String,
    /// Horizontal center as a percentage of the diagram width (0–100).
    pub x: f64,
    /// Vertical center as a percentage of the diagram height (0–100).
    pub y: f64,
    /// CSS accent color for the node.
    pub color: String,
    /// Longer text shown in the detail panel while the node is selected.
    pub description: String,
}

/// Stroke style for a connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeStyle {
    /// Continuous stroke.
    #[default]
    Solid,
    /// Dashed stroke, used for async or background paths.
    Dashed,
}

/// A labeled edge between two components.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Connection {
    /// Id of the source component.
    pub from: String,
    /// Id of the target component.
    pub to: String,
    /// Short label drawn at the edge midpoint.
    pub label: String,
    /// Stroke style.
    #[serde(default)]
    pub style: EdgeStyle,
    /// Stroke color override; `None` falls back to the theme default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// A full diagram: the component set plus the connections between them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DiagramGraph {
    pub components: Vec<DiagramComponent>,
    pub connections: Vec<Connection>,
}

/// A connection resolved to its concrete endpoints, ready to draw.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedEdge<'a> {
    pub connection: &'a Connection,
    pub from: &'a DiagramComponent,
    pub to: &'a DiagramComponent,
}

impl DiagramGraph {
    /// Look up a component by id.
    #[must_use]
    pub fn component(&self, id: &str) -> Option<&DiagramComponent> {
        self.components.iter().find(|c| c.id == id)
    }

    /// Resolve every connection whose endpoints both exist.
    ///
    /// Connections referencing a missing component id are skipped rather
    /// than reported; a partially-authored graph still renders everything
    /// that does resolve.
    #[must_use]
    pub fn resolve_edges(&self) -> Vec<ResolvedEdge<'_>> {
        self.connections
            .iter()
            .filter_map(|connection| {
                let from = self.component(&connection.from)?;
                let to = self.component(&connection.to)?;
                Some(ResolvedEdge { connection, from, to })
            })
            .collect()
    }

    /// Whether two components share a connection in either direction.
    #[must_use]
    pub fn are_connected(&self, a: &str, b: &str) -> bool {
        self.connections
            .iter()
            .any(|c| (c.from == a && c.to == b) || (c.from == b && c.to == a))
    }
}
