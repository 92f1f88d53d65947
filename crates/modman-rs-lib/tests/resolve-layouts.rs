//! Layout gating: which packages get eagerly resolved during a chain resolve.

use modman_rs::dependency_resolver::*;
use modman_rs::package::*;
use modman_rs_test_utils as util;

fn status_of(registry: &modman_rs::PackageRegistry, name: &str) -> ResolveStatus {
	registry.get(&util::ident(name)).unwrap().resolve_status()
}

#[test]
fn flat_no_expansion_leaves_children_unresolved() {
	util::init_logging();
	let mut registry = util::registry_of(vec![
		util::package_with_layout("Root", ResolveLayout::FlatNoExpansion, &["B", "C"]),
		util::package("B", &["BSub"]),
		util::package("C", &["CSub"]),
		util::leaf("BSub"),
		util::leaf("CSub"),
	]);

	{
		let mut resolver = DependencyResolver::new(&mut registry);
		resolver.resolve(&util::ident("Root"), ResolveOptions::default()).expect("resolve failed");
	}

	assert_eq!(status_of(&registry, "Root"), ResolveStatus::Resolved);
	assert_eq!(status_of(&registry, "B"), ResolveStatus::Unresolved);
	assert_eq!(status_of(&registry, "C"), ResolveStatus::Unresolved);
	/* The layout gates expansion, not what counts as a direct dependency. */
	assert_eq!(registry.get(&util::ident("Root")).unwrap().dependencies(), vec![util::ident("B"), util::ident("C")]);
}

#[test]
fn recursive_all_resolves_children() {
	util::init_logging();
	let mut registry = util::registry_of(vec![
		util::package_with_layout("Root", ResolveLayout::RecursiveAll, &["B", "C"]),
		util::package("B", &["BSub"]),
		util::package("C", &["CSub"]),
		util::leaf("BSub"),
		util::leaf("CSub"),
	]);

	{
		let mut resolver = DependencyResolver::new(&mut registry);
		resolver.resolve(&util::ident("Root"), ResolveOptions::default()).expect("resolve failed");
	}

	for name in ["Root", "B", "C", "BSub", "CSub"] {
		assert_eq!(status_of(&registry, name), ResolveStatus::Resolved, "{} not resolved", name);
	}
	assert_eq!(registry.get(&util::ident("B")).unwrap().dependencies(), vec![util::ident("BSub")]);
	assert_eq!(registry.get(&util::ident("C")).unwrap().dependencies(), vec![util::ident("CSub")]);
}

#[test]
fn recursive_last_only_resolves_only_the_last_declared() {
	util::init_logging();
	let mut registry = util::registry_of(vec![
		util::package_with_layout("Root", ResolveLayout::RecursiveLastOnly, &["B", "C", "D"]),
		util::leaf("B"),
		util::leaf("C"),
		util::leaf("D"),
	]);

	{
		let mut resolver = DependencyResolver::new(&mut registry);
		resolver.resolve(&util::ident("Root"), ResolveOptions::default()).expect("resolve failed");
	}

	assert_eq!(status_of(&registry, "Root"), ResolveStatus::Resolved);
	assert_eq!(status_of(&registry, "B"), ResolveStatus::Unresolved);
	assert_eq!(status_of(&registry, "C"), ResolveStatus::Unresolved);
	assert_eq!(status_of(&registry, "D"), ResolveStatus::Resolved);
	assert_eq!(registry.get(&util::ident("Root")).unwrap().dependencies(), vec![util::ident("B"), util::ident("C"), util::ident("D")]);
}

#[test]
fn flat_layout_below_a_recursive_root_stops_expansion_there() {
	util::init_logging();
	let mut registry = util::registry_of(vec![
		util::package_with_layout("Root", ResolveLayout::RecursiveAll, &["Mid"]),
		util::package_with_layout("Mid", ResolveLayout::FlatNoExpansion, &["Deep"]),
		util::package("Deep", &["Deeper"]),
		util::leaf("Deeper"),
	]);

	{
		let mut resolver = DependencyResolver::new(&mut registry);
		resolver.resolve(&util::ident("Root"), ResolveOptions::default()).expect("resolve failed");
	}

	assert_eq!(status_of(&registry, "Root"), ResolveStatus::Resolved);
	assert_eq!(status_of(&registry, "Mid"), ResolveStatus::Resolved);
	/* Mid's layout makes Deep a leaf of the eager walk. */
	assert_eq!(status_of(&registry, "Deep"), ResolveStatus::Unresolved);
	assert_eq!(status_of(&registry, "Deeper"), ResolveStatus::Unresolved);
	assert_eq!(registry.get(&util::ident("Mid")).unwrap().dependencies(), vec![util::ident("Deep")]);
}

#[test]
fn chain_resolve_can_be_disabled_entirely() {
	util::init_logging();
	let mut registry = util::registry_of(vec![
		util::package("Root", &["B"]),
		util::package("B", &["BSub"]),
		util::leaf("BSub"),
	]);

	{
		let mut resolver = DependencyResolver::new(&mut registry);
		resolver.resolve(&util::ident("Root"), ResolveOptions { resolve_chain: false, check_cycles: true }).expect("resolve failed");
	}

	assert_eq!(status_of(&registry, "Root"), ResolveStatus::Resolved);
	assert_eq!(status_of(&registry, "B"), ResolveStatus::Unresolved);
	assert_eq!(registry.get(&util::ident("Root")).unwrap().dependencies(), vec![util::ident("B")]);
}
