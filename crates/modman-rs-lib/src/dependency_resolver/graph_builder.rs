//! Constructs a [`DependencyGraph`] for one root package using breadth-first,
//! layout-gated expansion.

use std::collections::{HashSet, VecDeque};

use crate::error::{Error, Result};
use crate::package::*;
use crate::registry::PackageRegistry;

use super::DependencyGraph;

/// Builds the graph of an already resolved chain, e.g. to rebuild a view of
/// it.
///
/// Fails with [`Error::NotYetResolved`] when any visited package, the root
/// included, is not in the `Resolved` state.
pub fn build(registry: &PackageRegistry, root: &PackageIdentifier) -> Result<DependencyGraph> {
	build_internal(registry, root, true)
}

/// Builds the graph without requiring prior resolution.
///
/// Dependencies of a visited package come from its resolved list when it has
/// one, otherwise from its raw declaration by looking each reference up in
/// the registry. Fails with [`Error::PackageNotFound`] when a declared
/// reference cannot be located.
pub fn build_resolve_free(registry: &PackageRegistry, root: &PackageIdentifier) -> Result<DependencyGraph> {
	build_internal(registry, root, false)
}

fn build_internal(registry: &PackageRegistry, root: &PackageIdentifier, require_resolved: bool) -> Result<DependencyGraph> {
	log::trace!("Building dependency graph for package {}", root);

	let mut graph = DependencyGraph::default();
	/* A package with no dependencies still has a vertex. */
	graph.add_package(root);

	let mut visited = HashSet::<PackageIdentifier>::new();
	let mut queue = VecDeque::<PackageIdentifier>::new();
	queue.push_back(root.clone());

	while let Some(id) = queue.pop_front() {
		/* Each package is expanded at most once per build, shared
		 * sub-dependencies and loops would otherwise reprocess forever. */
		if !visited.insert(id.clone()) {
			continue;
		}

		let package = registry.get(&id).ok_or_else(|| Error::PackageNotFound(id.identifier.clone()))?;
		if require_resolved && package.resolve_status() != ResolveStatus::Resolved {
			return Err(Error::NotYetResolved(package.identifier.clone()));
		}

		let entries = dependency_entries_resolve_free(registry, package)?;
		for (target, version) in &entries {
			graph.add_dependency(&id, target, version.clone());
		}

		/* The source's layout decides which targets are expanded further. */
		match package.resolve_layout() {
			ResolveLayout::RecursiveAll => queue.extend(entries.iter().map(|(t, _)| t.clone())),
			ResolveLayout::RecursiveLastOnly => {
				if let Some((t, _)) = entries.last() {
					queue.push_back(t.clone());
				}
			}
			ResolveLayout::FlatNoExpansion => {}
		}
	}

	Ok(graph)
}

/// The one-hop dependency list of `package` alone, in declared order.
///
/// Not equivalent to [`DependencyGraph::dependencies_of`] on a built graph: a
/// `FlatNoExpansion` ancestor may have kept `package`'s edges out of the
/// graph entirely, while this accessor always computes the complete list for
/// `package` itself.
pub fn dependency_list_resolve_free(registry: &PackageRegistry, package: &Package) -> Result<Vec<PackageIdentifier>> {
	Ok(dependency_entries_resolve_free(registry, package)?
		.into_iter()
		.map(|(t, _)| t)
		.collect())
}

/// One-hop dependencies with their version annotations.
fn dependency_entries_resolve_free(registry: &PackageRegistry, package: &Package) -> Result<Vec<(PackageIdentifier, ModVersionBounds)>> {
	if package.resolve_status() == ResolveStatus::Resolved {
		/* Version bounds are declaration data, the resolved list only holds
		 * concrete packages. */
		return Ok(package.dependencies().iter().map(|d| (d.clone(), ModVersionBounds::Any)).collect());
	}

	match &package.declaration {
		Some(declaration) => {
			declaration.references.iter()
				.map(|r| {
					registry.find_package(r)
						.map(|p| (p.identifier.clone(), r.version.clone()))
						.ok_or_else(|| Error::PackageNotFound(r.name.clone()))
				})
				.collect()
		}
		None => Ok(Vec::new()),
	}
}
