//! The per-package resolve state machine.

use std::collections::{HashSet, VecDeque};

use crate::error::{Error, Result};
use crate::package::*;
use crate::registry::PackageRegistry;

use super::graph_builder;
use super::ResolveOptions;

/// One resolve session over a registry.
///
/// Keeps the set of packages already resolved through this instance so that
/// diamond-shaped chains only trigger one eager resolve per package, and the
/// subscribers notified after each successful single-package resolve.
///
/// Not thread-safe; serialise resolution per host application or use one
/// resolver per logical resolve session.
pub struct DependencyResolver<'reg> {
	registry: &'reg mut PackageRegistry,
	visited: HashSet<PackageIdentifier>,
	subscribers: Vec<Box<dyn FnMut(&Package) + 'reg>>,
}

impl<'reg> DependencyResolver<'reg> {
	pub fn new(registry: &'reg mut PackageRegistry) -> Self {
		DependencyResolver {
			registry,
			visited: Default::default(),
			subscribers: Default::default(),
		}
	}

	pub fn registry(&self) -> &PackageRegistry {
		self.registry
	}

	/// Subscribes to the "dependencies resolved" notification, fired once per
	/// package that completes a resolve through this session.
	pub fn on_dependencies_resolved(&mut self, subscriber: impl FnMut(&Package) + 'reg) {
		self.subscribers.push(Box::new(subscriber));
	}

	/// Resolves `package`, populating its dependency list from its
	/// declaration.
	///
	/// Returns immediately when the package is already `Resolved`. Finding it
	/// `Resolving` means this call re-entered a resolve already in flight on
	/// the same package, which is always a cycle. Any failure leaves the
	/// package `Faulted` with its dependency list at the prior value; a later
	/// call may attempt the resolve again.
	pub fn resolve(&mut self, package: &PackageIdentifier, options: ResolveOptions) -> Result<()> {
		if package.identifier.is_empty() {
			return Err(Error::InvalidArgument("package identifier is empty".to_string()));
		}

		let pkg = self.registry.get(package).ok_or_else(|| Error::PackageNotFound(package.identifier.clone()))?;
		match pkg.resolve_status() {
			ResolveStatus::Resolved => {
				log::trace!("Package {} already resolved, skipping", package);
				return Ok(());
			}
			/* A package resolving itself mid-resolve is always a cycle. */
			ResolveStatus::Resolving => return Err(Error::DependencyCycle(package.clone())),
			ResolveStatus::Unresolved | ResolveStatus::Faulted => {}
		}

		log::trace!("Resolving package {}", package);
		self.set_status(package, ResolveStatus::Resolving);

		match self.resolve_inner(package, options) {
			Ok(dependencies) => {
				let pkg = self.registry.get_mut(package).expect("package removed from registry mid-resolve");
				let prior = pkg.dependencies().to_vec();
				pkg.set_dependencies(dependencies);
				pkg.set_resolve_status(ResolveStatus::Resolved);
				if let Err(e) = pkg.validate_resolved() {
					/* The post-resolve hook vetoed the resolve. */
					pkg.set_dependencies(prior);
					pkg.set_resolve_status(ResolveStatus::Faulted);
					return Err(e);
				}
				log::debug!("Resolved package {} with {} dependencies", package, pkg.dependencies().len());
				self.notify_resolved(package);
				Ok(())
			}
			Err(e) => {
				log::debug!("Failed to resolve package {}: {}", package, e);
				self.set_status(package, ResolveStatus::Faulted);
				Err(e)
			}
		}
	}

	fn resolve_inner(&mut self, package: &PackageIdentifier, options: ResolveOptions) -> Result<Vec<PackageIdentifier>> {
		let graph = graph_builder::build_resolve_free(self.registry, package)?;

		if options.resolve_chain {
			/* Breadth first over the built graph, continuing past a package
			 * only as far as its layout allows. The graph holds edges to
			 * non-expanded targets too, so following every edge here would
			 * eagerly resolve packages the layout declared leaves. */
			let mut walked = HashSet::<PackageIdentifier>::new();
			let mut queue = VecDeque::<PackageIdentifier>::new();
			queue.push_back(package.clone());
			while let Some(id) = queue.pop_front() {
				if !walked.insert(id.clone()) {
					continue;
				}
				let layout = self.registry.get(&id).map(|p| p.resolve_layout()).unwrap_or_default();
				let targets = graph.dependencies_of(&id);
				match layout {
					ResolveLayout::RecursiveAll => queue.extend(targets),
					ResolveLayout::RecursiveLastOnly => {
						if let Some(t) = targets.into_iter().last() {
							queue.push_back(t);
						}
					}
					ResolveLayout::FlatNoExpansion => {}
				}
				if id != *package && self.visited.insert(id.clone()) {
					/* Eager resolution is one level deep per neighbour; the
					 * chain flag is not propagated into the recursion. */
					self.resolve(&id, ResolveOptions { resolve_chain: false, ..options })?;
				}
			}
		}

		if options.check_cycles && graph.has_cycle() {
			return Err(Error::DependencyCycle(package.clone()));
		}

		let pkg = self.registry.get(package).expect("package removed from registry mid-resolve");
		graph_builder::dependency_list_resolve_free(self.registry, pkg)
	}

	fn set_status(&mut self, package: &PackageIdentifier, status: ResolveStatus) {
		if let Some(pkg) = self.registry.get_mut(package) {
			pkg.set_resolve_status(status);
		}
	}

	fn notify_resolved(&mut self, package: &PackageIdentifier) {
		let Self { registry, subscribers, .. } = self;
		if let Some(pkg) = registry.get(package) {
			for subscriber in subscribers.iter_mut() {
				subscriber(pkg);
			}
		}
	}
}
