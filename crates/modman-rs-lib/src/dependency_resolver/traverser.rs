//! Flattening a package's dependency chain into a single load-order list.

use std::collections::HashSet;

use crate::error::{Error, Result};
use crate::package::PackageIdentifier;

use super::DependencyResolver;
use super::ResolveOptions;

/// Flattens `package` and its transitive dependencies into one ordered list.
///
/// The package itself is always index 0, followed by its dependencies in
/// pre-order, first declared first, with no duplicates. Downstream consumers
/// use this list to decide load order.
///
/// Every visited package is resolved through `resolver` with cycle checking
/// on, so a cycle anywhere in the chain fails with
/// [`Error::DependencyCycle`].
pub fn traverse_dependencies(resolver: &mut DependencyResolver, package: &PackageIdentifier) -> Result<Vec<PackageIdentifier>> {
	log::trace!("Flattening dependency chain of package {}", package);

	let mut order = Vec::<PackageIdentifier>::new();
	let mut visited = HashSet::<PackageIdentifier>::new();
	let mut stack = vec![package.clone()];

	while let Some(id) = stack.pop() {
		if !visited.insert(id.clone()) {
			continue;
		}

		resolver.resolve(&id, ResolveOptions { resolve_chain: false, check_cycles: true })?;
		let pkg = resolver.registry().get(&id).ok_or_else(|| Error::PackageNotFound(id.identifier.clone()))?;

		order.push(id.clone());
		/* Pushed in reverse so the first declared dependency is walked first. */
		for dependency in pkg.dependencies().iter().rev() {
			if !visited.contains(dependency) {
				stack.push(dependency.clone());
			}
		}
	}

	Ok(order)
}
