use serde::*;

/// The type of a package.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PackageKind {
	/// A normal installable package managed directly by us.
	#[default] Ordinary,
	/// A package whose files are managed by the platform's workshop, which we
	/// can track and order but not install ourselves.
	WorkshopManaged,
	/// A package that only exists in memory to group other packages. Has no
	/// content of its own, so once resolved it must depend on at least one
	/// non-virtual package.
	Virtual,
}
