//! Various helper functions for testing
//!
//! Fixture packages built here are deliberately small; tests compose them
//! into the graph shapes they need.

use modman_rs::package::*;
use modman_rs::PackageRegistry;

/// Initialises logging for a test run. Safe to call more than once.
pub fn init_logging() {
	let _ = env_logger::builder().is_test(true).try_init();
}

/// The identifier of an [`PackageKind::Ordinary`] fixture package.
pub fn ident(name: &str) -> PackageIdentifier {
	PackageIdentifier { identifier: name.to_string(), kind: PackageKind::Ordinary }
}

pub fn ident_of_kind(name: &str, kind: PackageKind) -> PackageIdentifier {
	PackageIdentifier { identifier: name.to_string(), kind }
}

/// A declaration depending on `references` in the given order.
pub fn declaration(layout: ResolveLayout, references: &[&str]) -> DependencyDeclaration {
	DependencyDeclaration {
		references: references.iter().map(|r| PackageReference::new(*r)).collect(),
		layout,
	}
}

/// An ordinary package depending on `references` with the default layout.
pub fn package(name: &str, references: &[&str]) -> Package {
	package_with_layout(name, ResolveLayout::RecursiveAll, references)
}

pub fn package_with_layout(name: &str, layout: ResolveLayout, references: &[&str]) -> Package {
	Package::new(
		name,
		PackageKind::Ordinary,
		if references.is_empty() { None } else { Some(declaration(layout, references)) },
	)
}

pub fn package_of_kind(name: &str, kind: PackageKind, references: &[&str]) -> Package {
	Package::new(
		name,
		kind,
		if references.is_empty() { None } else { Some(declaration(ResolveLayout::RecursiveAll, references)) },
	)
}

/// A package that declares nothing at all.
pub fn leaf(name: &str) -> Package {
	Package::new(name, PackageKind::Ordinary, None)
}

/// A registry holding the given packages.
pub fn registry_of(packages: Vec<Package>) -> PackageRegistry {
	let mut registry = PackageRegistry::default();
	for p in packages {
		registry.add_package(p);
	}
	registry
}
