//! The installed package container of one host application.

use std::collections::HashMap;

use serde::*;

use crate::package::*;

/// All packages installed into one host application.
///
/// There is exactly one instance per identifier string; adding a package
/// under an existing identifier replaces the prior instance. The registry is
/// treated as read-mostly during a resolve pass, packages are only mutated
/// through the resolver.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PackageRegistry {
	packages: HashMap<String, Package>,
}

impl PackageRegistry {
	/// Adds a package, returning the instance it replaced if the identifier
	/// was already present.
	pub fn add_package(&mut self, package: Package) -> Option<Package> {
		self.packages.insert(package.identifier.identifier.clone(), package)
	}

	/// Locates the package a declaration entry refers to.
	pub fn find_package(&self, reference: &PackageReference) -> Option<&Package> {
		self.packages.get(&reference.name)
	}

	pub fn get(&self, identifier: impl AsRef<PackageIdentifier>) -> Option<&Package> {
		self.packages.get(&identifier.as_ref().identifier)
	}

	pub fn get_mut(&mut self, identifier: impl AsRef<PackageIdentifier>) -> Option<&mut Package> {
		self.packages.get_mut(&identifier.as_ref().identifier)
	}

	/// All installed packages, in no particular order.
	pub fn packages(&self) -> impl Iterator<Item = &Package> {
		self.packages.values()
	}

	pub fn len(&self) -> usize {
		self.packages.len()
	}

	pub fn is_empty(&self) -> bool {
		self.packages.is_empty()
	}
}
