use serde::*;
use super::*;

/// A unique identifier for packages.
///
/// Two in-memory packages with equal identifiers represent the same package,
/// which is what lets the dependency graph deduplicate vertices. Uniqueness
/// is scoped to one host application, i.e. one [`crate::PackageRegistry`].
#[derive(Debug, Clone, Eq, PartialEq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PackageIdentifier {
	pub identifier: String,
	pub kind: PackageKind,
}

impl std::fmt::Display for PackageIdentifier {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.identifier)
	}
}

impl AsRef<PackageIdentifier> for PackageIdentifier {
	fn as_ref(&self) -> &PackageIdentifier {
		self
	}
}

/// Describes a dependency on a package using an identifier and a version
/// requirement.
///
/// Differs from [`PackageIdentifier`] in that it refers to a package by name
/// only; the referenced package is located through the registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackageReference {
	pub name: String,
	#[serde(default)]
	pub version: ModVersionBounds,
}

impl PackageReference {
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			version: ModVersionBounds::Any,
		}
	}
}

/// How eagerly a package's declared dependencies are themselves expanded
/// while building a dependency graph for it.
///
/// The layout never changes *which* entries count as the package's direct
/// dependencies, only which of them get expanded further.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResolveLayout {
	/// Every declared dependency is expanded.
	#[default] RecursiveAll,
	/// Only the last declared dependency is expanded.
	RecursiveLastOnly,
	/// Declared dependencies are leaves of the expansion even when they have
	/// dependencies of their own.
	FlatNoExpansion,
}

/// The dependency section of a package's descriptor.
///
/// Owned by the descriptor and only consumed here; reference order is
/// significant and is preserved all the way into [`super::Package::dependencies`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DependencyDeclaration {
	pub references: Vec<PackageReference>,
	#[serde(default)]
	pub layout: ResolveLayout,
}
