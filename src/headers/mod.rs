//! Public header derivation

pub mod aggregate;
pub mod policy;

pub use aggregate::{include_directive, PublicHeaders};
pub use policy::HeaderPolicy;
