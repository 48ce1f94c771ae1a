/// Data Transfer Objects for the application layer
mod reconcile_request;
mod reconcile_response;

pub use reconcile_request::ReconcileRequest;
pub use reconcile_response::{ReconcileCheck, ReconcileResponse};
