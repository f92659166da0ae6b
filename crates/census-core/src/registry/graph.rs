//! Directed reference graph between pattern definitions.
//!
//! Cycles are legal; resolving references into prose belongs to the report
//! synthesizer, not the core.

use petgraph::algo::is_cyclic_directed;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::Direction;

use crate::types::collections::FxHashMap;
use crate::types::identifiers::PatternId;

use super::PatternRegistry;

pub struct ReferenceGraph {
    graph: DiGraph<PatternId, ()>,
    nodes: FxHashMap<PatternId, NodeIndex>,
}

impl ReferenceGraph {
    pub fn build(registry: &PatternRegistry) -> Self {
        let mut graph = DiGraph::new();
        let mut nodes = FxHashMap::default();
        for def in registry.iter() {
            let idx = graph.add_node(def.id.clone());
            nodes.insert(def.id.clone(), idx);
        }
        for def in registry.iter() {
            for related in &def.related {
                // both endpoints exist after registry validation
                if let (Some(&from), Some(&to)) = (nodes.get(&def.id), nodes.get(related)) {
                    graph.add_edge(from, to, ());
                }
            }
        }
        Self { graph, nodes }
    }

    /// Patterns directly referenced by `id`, sorted for determinism.
    pub fn references(&self, id: &PatternId) -> Vec<&PatternId> {
        self.neighbors(id, Direction::Outgoing)
    }

    /// Patterns that reference `id`, sorted for determinism.
    pub fn referenced_by(&self, id: &PatternId) -> Vec<&PatternId> {
        self.neighbors(id, Direction::Incoming)
    }

    fn neighbors(&self, id: &PatternId, direction: Direction) -> Vec<&PatternId> {
        let Some(&idx) = self.nodes.get(id) else {
            return Vec::new();
        };
        let mut out: Vec<&PatternId> = self
            .graph
            .neighbors_directed(idx, direction)
            .map(|n| &self.graph[n])
            .collect();
        out.sort();
        out
    }

    pub fn has_cycles(&self) -> bool {
        is_cyclic_directed(&self.graph)
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}
