//! Artifact writer - emits `.abi` / `.bin` files into the flat target directory

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::core::ExtractError;
use crate::domain::artifact::output_file_names;

/// Paths written for one contract
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenArtifacts {
    pub abi: PathBuf,
    pub bin: PathBuf,
}

pub struct ArtifactWriter {
    target_dir: PathBuf,
}

impl ArtifactWriter {
    /// Create the target directory (and parents) if needed. Existing files are kept.
    pub fn create(target_dir: impl Into<PathBuf>) -> Result<Self, ExtractError> {
        let target_dir = target_dir.into();
        fs::create_dir_all(&target_dir).map_err(|err| ExtractError::io(&target_dir, err))?;
        Ok(Self { target_dir })
    }

    pub fn target_dir(&self) -> &Path {
        &self.target_dir
    }

    /// Write both artifacts, overwriting any previous ones
    pub fn write(
        &self,
        contract: &str,
        abi_text: &str,
        bin_text: &str,
    ) -> Result<WrittenArtifacts, ExtractError> {
        let (abi_name, bin_name) = output_file_names(contract);
        let abi = self.target_dir.join(abi_name);
        let bin = self.target_dir.join(bin_name);

        write_file(&abi, abi_text)?;
        write_file(&bin, bin_text)?;

        Ok(WrittenArtifacts { abi, bin })
    }
}

fn write_file(path: &Path, content: &str) -> Result<(), ExtractError> {
    let mut file = File::create(path).map_err(|err| ExtractError::io(path, err))?;
    file.write_all(content.as_bytes()).map_err(|err| ExtractError::io(path, err))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_makes_parents() {
        let root = tempfile::tempdir().unwrap();
        let target = root.path().join("a").join("b").join("ityfuzz_build");

        let writer = ArtifactWriter::create(&target).unwrap();
        assert!(target.is_dir());
        assert_eq!(writer.target_dir(), target.as_path());
    }

    #[test]
    fn test_write_overwrites_without_clearing() {
        let root = tempfile::tempdir().unwrap();
        fs::write(root.path().join("Other.bin"), "keep").unwrap();
        fs::write(root.path().join("Token.bin"), "stale-and-longer").unwrap();

        let writer = ArtifactWriter::create(root.path()).unwrap();
        let written = writer.write("Token", "[]", "6001").unwrap();

        assert_eq!(written.abi, root.path().join("Token.abi"));
        assert_eq!(fs::read_to_string(&written.bin).unwrap(), "6001");
        assert_eq!(fs::read_to_string(root.path().join("Other.bin")).unwrap(), "keep");
    }

    #[test]
    fn test_create_fails_on_file() {
        let root = tempfile::tempdir().unwrap();
        let blocker = root.path().join("ityfuzz_build");
        fs::write(&blocker, "").unwrap();

        let err = ArtifactWriter::create(blocker.join("nested")).err().unwrap();
        assert!(matches!(err, ExtractError::Io { .. }));
    }
}
