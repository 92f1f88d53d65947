//! Utilities for turning a package's declared dependency list into a
//! validated, ordered dependency set.
//!
//! # Usage
//! 1. Create a [`DependencyResolver`] borrowing the application's [`crate::PackageRegistry`].
//! 1. Optionally subscribe to resolve notifications with [`DependencyResolver::on_dependencies_resolved()`].
//! 1. [`DependencyResolver::resolve()`] a package, or many with [`resolve_packages()`].
//! 1. [`traverse_dependencies()`] to flatten a resolved package into a load-order list.
//!
//! A resolver instance is one resolve session: it keeps a visited set so that
//! packages shared between dependency branches are only resolved once.

mod dependency_graph;
pub use dependency_graph::DependencyGraph;

pub mod graph_builder;

mod resolver;
pub use resolver::DependencyResolver;

mod traverser;
pub use traverser::traverse_dependencies;

mod batch;
pub use batch::resolve_packages;
pub use batch::BatchResolveOptions;
pub use batch::BatchResolveOutcome;

/// Options for a single-package resolve.
#[derive(Debug, Clone, Copy)]
pub struct ResolveOptions {
	/// Resolve every package reachable through the graph, not just the root.
	///
	/// Only one level of eager resolution is triggered per neighbour; how far
	/// the graph reaches is governed by each package's
	/// [`crate::package::ResolveLayout`].
	pub resolve_chain: bool,
	/// Check the built graph for dependency cycles before committing.
	pub check_cycles: bool,
}

impl Default for ResolveOptions {
	fn default() -> Self {
		Self {
			resolve_chain: true,
			check_cycles: true,
		}
	}
}
