//! Various types associated with packages.

use serde::*;

use crate::error::{Error, Result};

mod kind;
pub use kind::PackageKind;

mod mod_version;
pub use mod_version::ModVersion;
pub use mod_version::ModVersionBounds;

mod version_bounds;
pub use version_bounds::VersionBounds;

mod reference;
pub use reference::PackageIdentifier;
pub use reference::PackageReference;
pub use reference::DependencyDeclaration;
pub use reference::ResolveLayout;

/// Where a package is in its resolve lifecycle.
///
/// `Resolving` is only ever observable from within a resolve call; seeing it
/// at the entry of another resolve on the same package means the package is
/// part of a cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResolveStatus {
	#[default] Unresolved,
	Resolving,
	Resolved,
	Faulted,
}

/// An installable content unit for the host application.
///
/// A package starts out `Unresolved` with an empty dependency list. A
/// successful [`crate::dependency_resolver::DependencyResolver::resolve`]
/// call populates [`Package::dependencies`] from the declaration and moves
/// the status to `Resolved`; any failure moves it to `Faulted` and leaves
/// the dependency list at its prior value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Package {
	pub identifier: PackageIdentifier,
	/// Declared dependencies from the package's descriptor.
	/// `None` means the package declares nothing and resolves to an empty list.
	pub declaration: Option<DependencyDeclaration>,
	dependencies: Vec<PackageIdentifier>,
	resolve_status: ResolveStatus,
}

impl Package {
	pub fn new(identifier: impl Into<String>, kind: PackageKind, declaration: Option<DependencyDeclaration>) -> Self {
		Package {
			identifier: PackageIdentifier { identifier: identifier.into(), kind },
			declaration,
			dependencies: Default::default(),
			resolve_status: Default::default(),
		}
	}

	/// The resolved dependency list, in declared order.
	///
	/// Empty until the first successful resolve.
	pub fn dependencies(&self) -> &[PackageIdentifier] {
		&self.dependencies
	}

	pub fn resolve_status(&self) -> ResolveStatus {
		self.resolve_status
	}

	/// The layout from the declaration, or the default when the package
	/// declares nothing.
	pub fn resolve_layout(&self) -> ResolveLayout {
		self.declaration.as_ref().map(|d| d.layout).unwrap_or_default()
	}

	/// Explicitly forget a previous resolve so the package can be resolved
	/// again, e.g. after its declaration changed.
	pub fn invalidate(&mut self) {
		log::trace!("Invalidating resolve state of package {}", self.identifier);
		self.dependencies.clear();
		self.resolve_status = ResolveStatus::Unresolved;
	}

	pub(crate) fn set_resolve_status(&mut self, status: ResolveStatus) {
		self.resolve_status = status;
	}

	pub(crate) fn set_dependencies(&mut self, dependencies: Vec<PackageIdentifier>) {
		self.dependencies = dependencies;
	}

	/// Kind-specific invariant check, run after a structurally successful
	/// resolve and able to veto it.
	///
	/// Virtual packages only exist in memory so they must pull in at least
	/// one real package to have any effect on the host application.
	pub(crate) fn validate_resolved(&self) -> Result<()> {
		match self.identifier.kind {
			PackageKind::Ordinary | PackageKind::WorkshopManaged => Ok(()),
			PackageKind::Virtual => {
				if self.dependencies.iter().any(|d| d.kind != PackageKind::Virtual) {
					Ok(())
				} else {
					Err(Error::VirtualDependencyInvalid(self.identifier.clone()))
				}
			}
		}
	}
}

impl std::hash::Hash for Package {
	fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
		self.identifier.hash(state);
	}
}

impl std::cmp::PartialEq for Package {
	fn eq(&self, other: &Self) -> bool {
		self.identifier == other.identifier
	}
}

impl std::cmp::Eq for Package {}

impl AsRef<PackageIdentifier> for Package {
	fn as_ref(&self) -> &PackageIdentifier {
		&self.identifier
	}
}
