//! Library error type.

pub type Result<T> = std::result::Result<T, Error>;

use thiserror::Error;

use crate::package::PackageIdentifier;

#[derive(Debug, Error)]
pub enum Error {
	/// A declared reference could not be located in the package registry.
	#[error("package `{0}` not found in registry")]
	PackageNotFound(String),
	/// The dependency chain of the named package contains a cycle.
	#[error("dependency cycle detected while resolving `{0}`")]
	DependencyCycle(PackageIdentifier),
	/// A resolved-only operation visited a package that has not been resolved.
	#[error("package `{0}` has not been resolved yet")]
	NotYetResolved(PackageIdentifier),
	/// A virtual package resolved without any non-virtual dependency.
	#[error("virtual package `{0}` must depend on at least one non-virtual package")]
	VirtualDependencyInvalid(PackageIdentifier),
	#[error("invalid argument: {0}")]
	InvalidArgument(String),
	#[error("parsing error: {0}")]
	Parse(String),
}
