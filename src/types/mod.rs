//! Public types for the vordr API.

mod manifest;
mod request;
mod response;

pub use manifest::Manifest;
pub use request::{Method, Request};
pub use response::Response;
