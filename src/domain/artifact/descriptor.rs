//! Descriptor model - the JSON shape emitted by contract build steps

use serde::de::{self, Deserializer};
use serde::Deserialize;
use serde_json::Value;

/// How a descriptor stores its bytecode
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BytecodeRepresentation {
    /// `"bytecode": "0x6001..."` (hardhat, truffle)
    RawString(String),
    /// `"bytecode": { "object": "0x6001...", ... }` (foundry)
    WrappedObject(WrappedBytecode),
}

/// Object form of the bytecode field; sibling keys (sourceMap, linkReferences) are ignored
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WrappedBytecode {
    pub object: Option<String>,
}

impl BytecodeRepresentation {
    /// Classify a raw `bytecode` value.
    ///
    /// An array carries no `object` key and resolves like an empty wrapper.
    /// Numbers, booleans, and a non-string `object` are rejected.
    pub fn from_value(value: Value) -> Result<Self, String> {
        match value {
            Value::String(text) => Ok(Self::RawString(text)),
            Value::Object(mut map) => match map.remove("object") {
                None | Some(Value::Null) => Ok(Self::WrappedObject(WrappedBytecode::default())),
                Some(Value::String(text)) => Ok(Self::WrappedObject(WrappedBytecode {
                    object: Some(text),
                })),
                Some(other) => Err(format!(
                    "bytecode.object must be a string, found {}",
                    json_kind(&other)
                )),
            },
            Value::Array(_) | Value::Null => Ok(Self::WrappedObject(WrappedBytecode::default())),
            other => Err(format!(
                "bytecode must be a string or an object, found {}",
                json_kind(&other)
            )),
        }
    }
}

impl<'de> Deserialize<'de> for BytecodeRepresentation {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Self::from_value(value).map_err(de::Error::custom)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// A parsed descriptor file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Descriptor {
    /// Contract interface, passed through untouched
    #[serde(default)]
    pub abi: Value,
    /// `None` when the field is absent or `null`
    #[serde(default)]
    pub bytecode: Option<BytecodeRepresentation>,
}

impl Descriptor {
    /// Parse a descriptor from its file contents.
    ///
    /// Goes through `Value` first so a repeated top-level key keeps its last value.
    pub fn from_json(content: &str) -> serde_json::Result<Self> {
        let value: Value = serde_json::from_str(content)?;
        serde_json::from_value(value)
    }

    /// ABI re-serialized with 2-space indentation
    pub fn abi_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.abi)
    }

    /// Bytecode text ready to be written as a `.bin` file
    pub fn bin_text(&self) -> &str {
        super::strip_hex_prefix(resolve_bytecode(self.bytecode.as_ref()))
    }
}

/// Resolve the bytecode string regardless of representation.
///
/// Absence, and an object without an `object` key, both resolve to `""`.
pub fn resolve_bytecode(bytecode: Option<&BytecodeRepresentation>) -> &str {
    match bytecode {
        Some(BytecodeRepresentation::RawString(text)) => text.as_str(),
        Some(BytecodeRepresentation::WrappedObject(wrapped)) => {
            wrapped.object.as_deref().unwrap_or("")
        }
        None => "",
    }
}
