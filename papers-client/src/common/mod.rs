//! Identifier types shared across the client

pub mod ids;

pub use ids::PubMedId;
