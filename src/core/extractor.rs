//! Extractor - turns a build output tree into ityfuzz `.abi` / `.bin` pairs

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use crate::config::Config;
use crate::domain::artifact::{contract_name, Descriptor};
use crate::infrastructure::artifact::{ArtifactWriter, DescriptorFile, DescriptorScanner};

use super::ExtractError;

/// Run one extraction pass.
///
/// Visits `<source_root>/<dir>/*.json` and writes `<target_dir>/<name>.{abi,bin}`
/// for each descriptor, printing one confirmation line per contract. Stops at the
/// first error; a later descriptor with the same contract name overwrites earlier output.
pub fn run(config: &Config) -> Result<(), ExtractError> {
    let contract_dirs = DescriptorScanner::contract_dirs(&config.source_root)?;
    let writer = ArtifactWriter::create(&config.target_dir)?;

    let mut seen: HashMap<String, PathBuf> = HashMap::new();
    for dir in contract_dirs {
        tracing::debug!(dir = %dir.display(), "scanning contract directory");
        for descriptor in DescriptorScanner::descriptors(&dir)? {
            let name = extract_one(&writer, &descriptor)?;
            if let Some(previous) = seen.insert(name.clone(), descriptor.path.clone()) {
                tracing::warn!(
                    contract = %name,
                    previous = %previous.display(),
                    current = %descriptor.path.display(),
                    "duplicate contract name, later descriptor overwrote earlier output"
                );
            }
        }
    }

    tracing::info!(
        contracts = seen.len(),
        target = %writer.target_dir().display(),
        "extraction finished"
    );
    Ok(())
}

fn extract_one(writer: &ArtifactWriter, file: &DescriptorFile) -> Result<String, ExtractError> {
    let content = fs::read_to_string(&file.path).map_err(|err| ExtractError::io(&file.path, err))?;
    let descriptor = Descriptor::from_json(&content).map_err(|source| ExtractError::Parse {
        path: file.path.clone(),
        source,
    })?;

    let name = contract_name(&file.file_name);
    let abi_text = descriptor.abi_pretty().map_err(|source| ExtractError::Parse {
        path: file.path.clone(),
        source,
    })?;

    let written = writer.write(name, &abi_text, descriptor.bin_text())?;
    tracing::debug!(
        source = %file.path.display(),
        abi = %written.abi.display(),
        bin = %written.bin.display(),
        "wrote artifacts"
    );
    println!("Extracted {name}.abi and {name}.bin");

    Ok(name.to_string())
}
