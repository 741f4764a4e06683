//! Error types for the Kairos shim

use thiserror::Error;

/// Kairos shim errors
///
/// One taxonomy, two presentations: [`KairosError::EngineUnavailable`] is
/// raised by stub entities on any real use, [`KairosError::GuardedProperty`]
/// by the resolution fallback on any property access. Neither is caught
/// inside the shim; availability is a configuration problem for the
/// embedding application.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KairosError {
    #[error(
        "date/time engine required: install one with `Resolver::set_override`, \
         or register one on the process-wide ambient slot"
    )]
    EngineUnavailable,

    #[error(
        "date/time engine is not available (accessed property: {property}): \
         install an engine override or register one on the process-wide ambient slot"
    )]
    GuardedProperty { property: String },
}

/// Result type for Kairos operations
pub type KairosResult<T> = Result<T, KairosError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guarded_property_names_the_property() {
        let err = KairosError::GuardedProperty {
            property: "PlainDateTime".to_string(),
        };
        assert!(err.to_string().contains("accessed property: PlainDateTime"));
    }

    #[test]
    fn test_unavailable_carries_remediation() {
        let msg = KairosError::EngineUnavailable.to_string();
        assert!(msg.contains("date/time engine required"));
        assert!(msg.contains("ambient slot"));
    }
}
