//! Domain models

pub mod artifact;
