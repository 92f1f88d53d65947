pub mod error;
pub use error::Result;
pub use error::Error;

pub mod package;
pub use package::Package;
pub use package::PackageIdentifier;

pub mod registry;
pub use registry::PackageRegistry;

pub mod dependency_resolver;
