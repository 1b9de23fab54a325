//! Precinct Remote - HTTP/JSON transport for the officer client
//!
//! Production implementations of the `precinct-core` capability traits:
//! - [`RegistryLocator`] resolves `<station>StationServer` through the registry
//! - [`RemoteStationService`] calls the station record service it was bound to
//!
//! Both are blocking; the officer session is a synchronous prompt loop.

#![allow(clippy::result_large_err)]

pub mod registry;
pub mod station;
pub mod wire;

pub use registry::RegistryLocator;
pub use station::RemoteStationService;
