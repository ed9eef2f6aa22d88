//! Routed pages.

pub mod feedback;
