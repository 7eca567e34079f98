//! Artifact infrastructure - filesystem scanning and output writing

mod scanner;
mod writer;

pub use scanner::{DescriptorFile, DescriptorScanner};
pub use writer::{ArtifactWriter, WrittenArtifacts};
