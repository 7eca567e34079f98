//! Descriptor scanner - lists contract directories and their JSON descriptors

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use crate::core::ExtractError;
use crate::domain::artifact::is_descriptor_name;

/// A descriptor file found under a contract directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescriptorFile {
    pub path: PathBuf,
    pub file_name: String,
}

/// Lists the two levels of a build output tree.
///
/// Listing order is whatever the OS returns; nothing is sorted.
pub struct DescriptorScanner;

impl DescriptorScanner {
    /// Immediate subdirectories of the source root
    pub fn contract_dirs(root: &Path) -> Result<Vec<PathBuf>, ExtractError> {
        match fs::metadata(root) {
            Ok(meta) if meta.is_dir() => {}
            Ok(_) => {
                return Err(ExtractError::SourceNotFound {
                    path: root.to_path_buf(),
                    source: None,
                })
            }
            Err(err) => {
                return Err(ExtractError::SourceNotFound {
                    path: root.to_path_buf(),
                    source: Some(err),
                })
            }
        }

        let mut dirs = Vec::new();
        for entry in Self::children(root) {
            let entry = entry.map_err(|err| Self::root_error(root, err))?;
            if entry.file_type().is_dir() {
                dirs.push(entry.into_path());
            } else {
                tracing::debug!(path = %entry.path().display(), "skipping non-directory entry");
            }
        }
        Ok(dirs)
    }

    /// `.json` entries directly inside one contract directory.
    ///
    /// Only the name decides: anything else, a dangling link included, is skipped
    /// without being stat-ed, and a `.json` entry that is not a readable file
    /// fails later when it is read.
    pub fn descriptors(dir: &Path) -> Result<Vec<DescriptorFile>, ExtractError> {
        let mut files = Vec::new();
        for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) if err.depth() == 0 || Self::names_descriptor(err.path()) => {
                    return Err(Self::walk_error(dir, err));
                }
                Err(err) => {
                    tracing::debug!("skipping unreadable entry: {err}");
                    continue;
                }
            };
            match Self::descriptor_name(&entry) {
                Some(file_name) => files.push(DescriptorFile {
                    path: entry.into_path(),
                    file_name,
                }),
                None => {
                    tracing::debug!(
                        path = %entry.path().display(),
                        "skipping non-descriptor entry"
                    );
                }
            }
        }
        Ok(files)
    }

    /// Entries exactly one level below `dir`, following symlinks
    fn children(dir: &Path) -> walkdir::IntoIter {
        WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .into_iter()
    }

    fn names_descriptor(path: Option<&Path>) -> bool {
        path.and_then(Path::file_name)
            .map(|name| is_descriptor_name(&name.to_string_lossy()))
            .unwrap_or(false)
    }

    fn descriptor_name(entry: &DirEntry) -> Option<String> {
        let name = entry.file_name().to_string_lossy();
        is_descriptor_name(&name).then(|| name.into_owned())
    }

    fn root_error(root: &Path, err: walkdir::Error) -> ExtractError {
        if err.depth() == 0 {
            ExtractError::SourceNotFound {
                path: root.to_path_buf(),
                source: Some(io::Error::from(err)),
            }
        } else {
            Self::walk_error(root, err)
        }
    }

    fn walk_error(dir: &Path, err: walkdir::Error) -> ExtractError {
        let path = err.path().unwrap_or(dir).to_path_buf();
        ExtractError::io(path, io::Error::from(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contract_dirs_skips_files() {
        let root = tempfile::tempdir().unwrap();
        fs::create_dir(root.path().join("Token.sol")).unwrap();
        fs::create_dir(root.path().join("Vault.sol")).unwrap();
        fs::write(root.path().join("build-info.json"), "{}").unwrap();

        let mut dirs = DescriptorScanner::contract_dirs(root.path()).unwrap();
        dirs.sort();
        assert_eq!(
            dirs,
            vec![root.path().join("Token.sol"), root.path().join("Vault.sol")]
        );
    }

    #[test]
    fn test_contract_dirs_missing_root() {
        let root = tempfile::tempdir().unwrap();
        let err = DescriptorScanner::contract_dirs(&root.path().join("out")).unwrap_err();
        assert!(matches!(err, ExtractError::SourceNotFound { source: Some(_), .. }));
    }

    #[test]
    fn test_contract_dirs_root_is_file() {
        let root = tempfile::tempdir().unwrap();
        let file = root.path().join("out");
        fs::write(&file, "").unwrap();

        let err = DescriptorScanner::contract_dirs(&file).unwrap_err();
        match err {
            ExtractError::SourceNotFound { path, source } => {
                assert_eq!(path, file);
                assert!(source.is_none());
            }
            other => panic!("expected SourceNotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_descriptors_filters_by_suffix() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("Token.json"), "{}").unwrap();
        fs::write(dir.path().join("Token.metadata.txt"), "").unwrap();
        fs::write(dir.path().join("Token.JSON"), "{}").unwrap();
        fs::create_dir(dir.path().join("cache")).unwrap();

        let files = DescriptorScanner::descriptors(dir.path()).unwrap();
        assert_eq!(
            files,
            vec![DescriptorFile {
                path: dir.path().join("Token.json"),
                file_name: "Token.json".to_string(),
            }]
        );
    }

    #[test]
    fn test_descriptors_keeps_json_named_directory() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("Nested.json")).unwrap();

        let files = DescriptorScanner::descriptors(dir.path()).unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].file_name, "Nested.json");
    }

    #[cfg(unix)]
    #[test]
    fn test_descriptors_ignores_dangling_non_descriptor_link() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("Token.json"), "{}").unwrap();
        std::os::unix::fs::symlink(
            dir.path().join("gone.txt"),
            dir.path().join("Token.metadata.txt"),
        )
        .unwrap();

        let files = DescriptorScanner::descriptors(dir.path()).unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].file_name, "Token.json");
    }
}
