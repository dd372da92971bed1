//! Read-only deck endpoints: listing, cards and recorded results.

mod routes;

pub use routes::routes;
