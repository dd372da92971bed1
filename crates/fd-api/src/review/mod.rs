//! Review session endpoints and the registry of sessions in progress.

pub mod model;
pub mod registry;
pub mod routes;

pub use registry::SessionRegistry;
pub use routes::routes;
