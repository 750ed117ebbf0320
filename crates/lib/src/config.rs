//! Engine configuration.
//!
//! [`TreeConfig`] is passed explicitly to [`crate::Tree::load`]; nothing in the
//! crate reads global defaults. It is serde-friendly so hosts can embed it in
//! their own configuration files, with every field optional.

use serde::{Deserialize, Serialize};

use crate::tree::SizePolicy;

/// Type tag given to the root record when a document is loaded from nothing.
pub const DEFAULT_ROOT_TYPE: &str = "Configuration";

/// Settings that shape how a tree is created and measured.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TreeConfig {
    /// Type tag of the empty root record created when there is no document
    pub default_root_type: String,
    /// Counting policy used by `size()`
    pub size_policy: SizePolicy,
}

impl TreeConfig {
    /// Builder method to set the default root type tag
    pub fn with_default_root_type(mut self, type_tag: impl Into<String>) -> Self {
        self.default_root_type = type_tag.into();
        self
    }

    /// Builder method to set the size policy
    pub fn with_size_policy(mut self, policy: SizePolicy) -> Self {
        self.size_policy = policy;
        self
    }
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            default_root_type: DEFAULT_ROOT_TYPE.to_string(),
            size_policy: SizePolicy::DEFAULT,
        }
    }
}
