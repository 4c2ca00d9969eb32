//! Converter configuration
//!
//! Loaded from JSON by the Python bindings; Rust callers usually start from
//! `ConverterConfig::default()` and override single fields.

use crate::language::Dialect;
use serde::{Deserialize, Serialize};

/// Primitive type names every configuration recognizes
pub const BASE_PRIMITIVES: &[&str] = &["number", "string", "boolean", "object", "any", "unknown"];

/// TypeScript keyword types that are primitive in the same sense
pub const KEYWORD_PRIMITIVES: &[&str] = &["void", "never", "null", "undefined", "bigint", "symbol"];

/// Library types that are always in scope without an import
pub const DEFAULT_AMBIENT_TYPES: &[&str] = &[
    "Array",
    "ReadonlyArray",
    "Promise",
    "PromiseLike",
    "Map",
    "ReadonlyMap",
    "WeakMap",
    "Set",
    "ReadonlySet",
    "WeakSet",
    "Record",
    "Partial",
    "Required",
    "Readonly",
    "Pick",
    "Omit",
    "Exclude",
    "Extract",
    "NonNullable",
    "ReturnType",
    "Parameters",
    "InstanceType",
    "Awaited",
    "Date",
    "Error",
    "RegExp",
    "Function",
    "Iterable",
    "Iterator",
    "IterableIterator",
    "AsyncIterable",
    "AsyncIterator",
    "Generator",
    "AsyncGenerator",
    "Uint8Array",
    "ArrayBuffer",
    "Object",
    "String",
    "Number",
    "Boolean",
    "Symbol",
    "BigInt",
];

/// Configuration for interface generation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConverterConfig {
    /// Grammar used to parse the source text
    pub dialect: Dialect,
    /// Indent unit prepended to every member line
    pub indent: String,
    /// Primitive names recognized on top of the built-in set
    pub extra_primitives: Vec<String>,
    /// Globally available type names that classify as user-defined
    pub ambient_types: Vec<String>,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            dialect: Dialect::TypeScript,
            indent: "    ".to_string(),
            extra_primitives: Vec::new(),
            ambient_types: DEFAULT_AMBIENT_TYPES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl ConverterConfig {
    /// Parse a configuration from JSON; missing fields fall back to defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// The full primitive set for this configuration, built-ins first
    pub fn primitives(&self) -> Vec<String> {
        BASE_PRIMITIVES
            .iter()
            .chain(KEYWORD_PRIMITIVES)
            .map(|s| s.to_string())
            .chain(self.extra_primitives.iter().cloned())
            .collect()
    }
}
