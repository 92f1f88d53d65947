//! Resolving an arbitrary collection of packages with batch-level policies.

use crate::error::{Error, Result};
use crate::package::*;

use super::DependencyResolver;
use super::ResolveOptions;

/// Policies for one batch resolve.
#[derive(Debug, Clone, Copy)]
pub struct BatchResolveOptions {
	/// Options forwarded to each single-package resolve.
	pub resolve: ResolveOptions,
	/// Skip packages that are already `Resolved`.
	pub skip_resolved: bool,
	/// Stop the batch at the first per-package failure instead of continuing.
	pub abort_on_error: bool,
}

impl Default for BatchResolveOptions {
	fn default() -> Self {
		Self {
			resolve: Default::default(),
			skip_resolved: true,
			abort_on_error: false,
		}
	}
}

/// Which packages of a batch failed to resolve, and why.
///
/// Packages that resolved before a failure keep their resolved state; the
/// coordinator never rolls anything back.
#[derive(Debug, Default)]
pub struct BatchResolveOutcome {
	pub errors: Vec<(PackageIdentifier, Error)>,
}

impl BatchResolveOutcome {
	pub fn has_errors(&self) -> bool {
		!self.errors.is_empty()
	}
}

/// Resolves each package of `packages` in iteration order.
///
/// Per-package failures are recorded in the outcome rather than returned:
/// unless [`BatchResolveOptions::abort_on_error`] is set the batch continues
/// past them. `Err` is only returned for eager input validation, before any
/// package has been touched. Resolve notifications pass through the
/// subscribers already registered on `resolver`.
pub fn resolve_packages(resolver: &mut DependencyResolver, packages: &[PackageIdentifier], options: BatchResolveOptions) -> Result<BatchResolveOutcome> {
	for package in packages {
		if package.identifier.is_empty() {
			return Err(Error::InvalidArgument("package identifier is empty".to_string()));
		}
	}

	log::debug!("Batch resolving {} packages", packages.len());
	let mut outcome = BatchResolveOutcome::default();

	for package in packages {
		if options.skip_resolved {
			if let Some(pkg) = resolver.registry().get(package) {
				if pkg.resolve_status() == ResolveStatus::Resolved {
					log::trace!("Package {} already resolved, skipping", package);
					continue;
				}
			}
		}

		if let Err(e) = resolver.resolve(package, options.resolve) {
			log::debug!("Batch resolve of package {} failed: {}", package, e);
			outcome.errors.push((package.clone(), e));
			if options.abort_on_error {
				break;
			}
		}
	}

	Ok(outcome)
}
