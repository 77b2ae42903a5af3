//! HTTP server for the storefront
//!
//! [`ServerBuilder`] assembles a [`ServerHost`](host::ServerHost) from a
//! catalog and a generative backend, and the REST exposure turns the host
//! into an axum `Router`.

pub mod builder;
pub mod exposure;
pub mod extract;
pub mod handlers;
pub mod host;
pub mod router;

pub use builder::ServerBuilder;
pub use exposure::RestExposure;
pub use host::ServerHost;
