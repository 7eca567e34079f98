//! Contract artifact model
//!
//! Pure rules for turning a build descriptor into `.abi` / `.bin` outputs,
//! independent of the filesystem.

mod descriptor;

pub use descriptor::Descriptor;

/// Suffix identifying descriptor files
pub const DESCRIPTOR_SUFFIX: &str = ".json";

/// Extension of the ABI output file
pub const ABI_EXTENSION: &str = "abi";

/// Extension of the bytecode output file
pub const BIN_EXTENSION: &str = "bin";

/// Check whether a file name denotes a descriptor (literal, case-sensitive suffix)
pub fn is_descriptor_name(file_name: &str) -> bool {
    file_name.ends_with(DESCRIPTOR_SUFFIX)
}

/// Derive the contract name from a descriptor file name.
///
/// Truncates at the *first* dot: `Token.sol.json` → `Token`, `1.2.Foo.json` → `1`.
pub fn contract_name(file_name: &str) -> &str {
    file_name.split('.').next().unwrap_or(file_name)
}

/// Strip exactly one leading lowercase `0x`
pub fn strip_hex_prefix(bytecode: &str) -> &str {
    bytecode.strip_prefix("0x").unwrap_or(bytecode)
}

/// Output file names for a contract
pub fn output_file_names(contract: &str) -> (String, String) {
    (
        format!("{}.{}", contract, ABI_EXTENSION),
        format!("{}.{}", contract, BIN_EXTENSION),
    )
}
