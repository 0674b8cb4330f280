//! Capability Interface Segregation lint
//!
//! Flags capability descriptors that declare no methods or too many of them.
//! This is a design-review aid: resolution never consults it, and bootstrap
//! only logs what it finds.

use std::fmt;

use serde::{Deserialize, Serialize};
use solid_domain::CapabilityDescriptor;

/// Maximum methods for a single capability (ISP)
pub const MAX_CAPABILITY_METHODS: usize = 4;

/// Violation severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Error,
    Warning,
}

/// Capability design violations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CapabilityViolation {
    /// The capability declares no methods at all
    EmptyCapability { capability: String },

    /// ISP: the capability bundles too many methods
    FatCapability {
        capability: String,
        method_count: usize,
        max_allowed: usize,
    },

    /// The same method name is declared twice
    DuplicateMethod { capability: String, method: String },
}

impl CapabilityViolation {
    pub fn severity(&self) -> Severity {
        match self {
            Self::EmptyCapability { .. } | Self::DuplicateMethod { .. } => Severity::Error,
            Self::FatCapability { .. } => Severity::Warning,
        }
    }

    pub fn capability(&self) -> &str {
        match self {
            Self::EmptyCapability { capability }
            | Self::FatCapability { capability, .. }
            | Self::DuplicateMethod { capability, .. } => capability,
        }
    }
}

impl fmt::Display for CapabilityViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyCapability { capability } => {
                write!(f, "ISP: capability {capability} declares no methods")
            }
            Self::FatCapability {
                capability,
                method_count,
                max_allowed,
            } => write!(
                f,
                "ISP: capability {capability} too large ({method_count} methods, max: {max_allowed}) - split it into focused capabilities"
            ),
            Self::DuplicateMethod { capability, method } => {
                write!(f, "capability {capability} declares {method} twice")
            }
        }
    }
}

/// Lint one descriptor
pub fn lint_capability(descriptor: &CapabilityDescriptor) -> Vec<CapabilityViolation> {
    let mut violations = Vec::new();
    let capability = descriptor.name.to_string();

    if descriptor.methods.is_empty() {
        violations.push(CapabilityViolation::EmptyCapability {
            capability: capability.clone(),
        });
    }

    if descriptor.methods.len() > MAX_CAPABILITY_METHODS {
        violations.push(CapabilityViolation::FatCapability {
            capability: capability.clone(),
            method_count: descriptor.methods.len(),
            max_allowed: MAX_CAPABILITY_METHODS,
        });
    }

    for (index, method) in descriptor.methods.iter().enumerate() {
        if descriptor.methods[..index].contains(method) {
            violations.push(CapabilityViolation::DuplicateMethod {
                capability: capability.clone(),
                method: (*method).to_string(),
            });
        }
    }

    violations
}

/// Lint a set of descriptors
pub fn lint_capabilities(descriptors: &[CapabilityDescriptor]) -> Vec<CapabilityViolation> {
    descriptors.iter().flat_map(lint_capability).collect()
}
