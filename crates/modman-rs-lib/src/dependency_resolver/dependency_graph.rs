//! Module for only DependencyGraph functions not related to the overall resolving process.

use petgraph::prelude::*;
use serde::{Serialize, Deserialize};

use crate::package::*;

/// A directed "depends on" graph over package identities.
///
/// Vertices are deduplicated by [`PackageIdentifier`] equality; edges carry
/// the declared version bounds as an annotation the resolver itself never
/// evaluates. The graph is owned by a single resolve operation and discarded
/// once the needed projection has been taken from it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DependencyGraph {
	graph: DiGraph<PackageIdentifier, ModVersionBounds>,
}

impl DependencyGraph {
	/// Adds one directed dependency edge, creating either vertex as needed.
	///
	/// Adding the same pair again is a no-op, callers add each declared edge
	/// once.
	pub fn add_dependency(&mut self, source: &PackageIdentifier, target: &PackageIdentifier, version: ModVersionBounds) {
		let s = self.get_or_add_node_index(source);
		let t = self.get_or_add_node_index(target);
		if self.graph.find_edge(s, t).is_none() {
			self.graph.add_edge(s, t, version);
		}
	}

	/// Ensures `package` is present as a vertex even when it has no edges.
	pub fn add_package(&mut self, package: &PackageIdentifier) {
		self.get_or_add_node_index(package);
	}

	/// Whether the graph built so far is not a directed acyclic graph.
	///
	/// Computed over the full vertex and edge set because cross references
	/// between independently expanded branches can form cycles no single
	/// branch walk would see.
	pub fn has_cycle(&self) -> bool {
		petgraph::algo::is_cyclic_directed(&self.graph)
	}

	/// The direct dependencies of `source`, in the order their edges were
	/// added, which mirrors the declaration order of the source package.
	pub fn dependencies_of(&self, source: &PackageIdentifier) -> Vec<PackageIdentifier> {
		let Some(i) = self.get_node_index(source) else { return Vec::new() };
		/* `edges_directed` walks edges newest first so the collected list has
		 * to be reversed to recover insertion order. */
		let mut targets: Vec<PackageIdentifier> = self.graph
			.edges_directed(i, Outgoing)
			.map(|e| self.graph[e.target()].clone())
			.collect();
		targets.reverse();
		targets
	}

	pub fn contains(&self, package: &PackageIdentifier) -> bool {
		self.get_node_index(package).is_some()
	}

	/// All vertices, in unspecified order.
	pub fn packages(&self) -> impl Iterator<Item = &PackageIdentifier> {
		self.graph.node_weights()
	}

	pub fn package_count(&self) -> usize {
		self.graph.node_count()
	}

	pub fn dependency_count(&self) -> usize {
		self.graph.edge_count()
	}

	fn get_node_index(&self, package: &PackageIdentifier) -> Option<NodeIndex> {
		self.graph.node_weights()
			.enumerate()
			.find(|(_, id)| *id == package)
			.map(|(i, _)| petgraph::graph::node_index(i))
	}

	/// Returns the index of the existing vertex or a new one for `package`.
	fn get_or_add_node_index(&mut self, package: &PackageIdentifier) -> NodeIndex {
		self.get_node_index(package)
			.unwrap_or_else(|| self.graph.add_node(package.clone()))
	}
}
