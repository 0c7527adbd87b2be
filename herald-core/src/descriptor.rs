//! Call descriptors produced by intent parsing.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The parsed representation of "which function to call, with what arguments".
///
/// A descriptor is immutable once built and compares by value, so parsing the
/// same transcript twice yields two equal descriptors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallDescriptor {
    function_name: String,
    parameters: BTreeMap<String, String>,
}

impl CallDescriptor {
    /// Create a descriptor with no parameters.
    pub fn new(function_name: impl Into<String>) -> Self {
        Self {
            function_name: function_name.into(),
            parameters: BTreeMap::new(),
        }
    }

    /// Add a named parameter.
    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.parameters.insert(name.into(), value.into());
        self
    }

    /// The registry key to dispatch to.
    pub fn function_name(&self) -> &str {
        &self.function_name
    }

    /// All named parameters, ordered by name.
    pub fn parameters(&self) -> &BTreeMap<String, String> {
        &self.parameters
    }

    /// Look up a single parameter.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.parameters.get(name).map(String::as_str)
    }
}
