//! Infrastructure layer - filesystem access
//!
//! This layer contains:
//! - Descriptor discovery under the build output tree
//! - Writing `.abi` / `.bin` artifacts to the target directory

pub mod artifact;
