use std::fmt;

/// Warnings raised while looking for versions among git refs.
/// These are non-fatal issues that should be reported to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// Ref matches the naming pattern but its version part cannot be parsed
    UnparsableRef { name: String, reason: String },
    /// No ref carries a version; the fallback version is used instead
    NoVersionedRefs { fallback: String },
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::UnparsableRef { name, reason } => {
                write!(f, "Cannot parse ref '{}': {}", name, reason)
            }
            BoundaryWarning::NoVersionedRefs { fallback } => {
                write!(f, "No versioned refs found, falling back to '{}'", fallback)
            }
        }
    }
}
