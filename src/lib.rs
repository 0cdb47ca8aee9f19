//! Status Service: deployment metadata over HTTP.
//!
//! Reports project, cluster, service and region details taken from the
//! environment, as JSON or as an HTML dashboard, alongside `/health` and
//! `/version` endpoints for load balancers.

pub mod config;
pub mod error;
pub mod http;
pub mod middleware;
pub mod negotiate;
pub mod routes;
pub mod state;
pub mod status;
pub mod templates;

pub use error::*;
