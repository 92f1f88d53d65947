use modman_rs::Error;
use modman_rs::dependency_resolver::*;
use modman_rs::package::*;
use modman_rs_test_utils as util;

#[test]
fn batch_continues_past_a_failed_package() {
	util::init_logging();
	let mut registry = util::registry_of(vec![
		util::leaf("First"),
		util::package("Second", &["Missing"]),
		util::leaf("Third"),
	]);
	let batch = [util::ident("First"), util::ident("Second"), util::ident("Third")];

	let outcome = {
		let mut resolver = DependencyResolver::new(&mut registry);
		resolve_packages(&mut resolver, &batch, BatchResolveOptions::default()).expect("batch rejected")
	};

	assert!(outcome.has_errors());
	assert_eq!(outcome.errors.len(), 1);
	assert_eq!(outcome.errors[0].0, util::ident("Second"));
	assert!(matches!(&outcome.errors[0].1, Error::PackageNotFound(name) if name == "Missing"));

	assert_eq!(registry.get(&util::ident("First")).unwrap().resolve_status(), ResolveStatus::Resolved);
	assert_eq!(registry.get(&util::ident("Second")).unwrap().resolve_status(), ResolveStatus::Faulted);
	assert_eq!(registry.get(&util::ident("Third")).unwrap().resolve_status(), ResolveStatus::Resolved);
}

#[test]
fn batch_abort_on_error_stops_immediately() {
	util::init_logging();
	let mut registry = util::registry_of(vec![
		util::leaf("First"),
		util::package("Second", &["Missing"]),
		util::leaf("Third"),
	]);
	let batch = [util::ident("First"), util::ident("Second"), util::ident("Third")];

	let outcome = {
		let mut resolver = DependencyResolver::new(&mut registry);
		let options = BatchResolveOptions { abort_on_error: true, ..Default::default() };
		resolve_packages(&mut resolver, &batch, options).expect("batch rejected")
	};

	assert_eq!(outcome.errors.len(), 1);
	assert_eq!(registry.get(&util::ident("First")).unwrap().resolve_status(), ResolveStatus::Resolved);
	assert_eq!(registry.get(&util::ident("Third")).unwrap().resolve_status(), ResolveStatus::Unresolved);
}

#[test]
fn batch_skips_already_resolved_packages() {
	util::init_logging();
	let mut registry = util::registry_of(vec![
		util::leaf("First"),
		util::leaf("Second"),
	]);
	let batch = [util::ident("First"), util::ident("Second")];

	{
		let mut resolver = DependencyResolver::new(&mut registry);
		resolver.resolve(&util::ident("First"), ResolveOptions::default()).expect("resolve failed");
	}

	let outcome = {
		let mut resolver = DependencyResolver::new(&mut registry);
		resolve_packages(&mut resolver, &batch, BatchResolveOptions::default()).expect("batch rejected")
	};

	assert!(!outcome.has_errors());
	assert_eq!(registry.get(&util::ident("First")).unwrap().resolve_status(), ResolveStatus::Resolved);
	assert_eq!(registry.get(&util::ident("Second")).unwrap().resolve_status(), ResolveStatus::Resolved);
}

#[test]
fn batch_rejects_invalid_input_before_touching_anything() {
	util::init_logging();
	let mut registry = util::registry_of(vec![util::leaf("Fine")]);
	let batch = [util::ident("Fine"), util::ident("")];

	let result = {
		let mut resolver = DependencyResolver::new(&mut registry);
		resolve_packages(&mut resolver, &batch, BatchResolveOptions::default())
	};

	assert!(matches!(result, Err(Error::InvalidArgument(_))));
	/* Validation happens before any package is resolved. */
	assert_eq!(registry.get(&util::ident("Fine")).unwrap().resolve_status(), ResolveStatus::Unresolved);
}

#[test]
fn batch_passes_notifications_through() {
	util::init_logging();
	let mut registry = util::registry_of(vec![
		util::leaf("First"),
		util::leaf("Second"),
	]);
	let batch = [util::ident("First"), util::ident("Second")];
	let resolved = std::cell::RefCell::new(Vec::<PackageIdentifier>::new());

	{
		let mut resolver = DependencyResolver::new(&mut registry);
		resolver.on_dependencies_resolved(|p| resolved.borrow_mut().push(p.identifier.clone()));
		let outcome = resolve_packages(&mut resolver, &batch, BatchResolveOptions::default()).expect("batch rejected");
		assert!(!outcome.has_errors());
	}

	assert_eq!(resolved.into_inner(), batch.to_vec());
}
