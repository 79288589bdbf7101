use thiserror::Error;

/// error types of the kinetics kernels, model constructors and settings
#[derive(Debug, Error)]
pub enum KineticsError {
    #[error("Length mismatch for {what}: expected {expected}, found {found}")]
    LengthMismatch {
        what: &'static str,
        expected: usize,
        found: usize,
    },
    #[error("Workspace store '{store}' is too small: {required} elements required, {available} available")]
    WorkspaceTooSmall {
        store: &'static str,
        required: usize,
        available: usize,
    },
    #[error("Reaction {reaction} refers to {phase} species {species} which does not exist")]
    InvalidSpeciesIndex {
        reaction: usize,
        species: usize,
        phase: &'static str,
    },
    #[error("Reaction {reaction} is invalid: {reason}")]
    InvalidReaction { reaction: usize, reason: String },
    #[error("Unsupported log level: {0}")]
    UnsupportedLogLevel(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// returns `LengthMismatch` unless `found == expected`
pub(crate) fn check_len(
    what: &'static str,
    expected: usize,
    found: usize,
) -> Result<(), KineticsError> {
    if expected != found {
        return Err(KineticsError::LengthMismatch {
            what,
            expected,
            found,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_len() {
        assert!(check_len("Yk", 3, 3).is_ok());
        let err = check_len("Yk", 3, 2).unwrap_err();
        assert!(matches!(
            err,
            KineticsError::LengthMismatch {
                what: "Yk",
                expected: 3,
                found: 2
            }
        ));
        assert_eq!(
            err.to_string(),
            "Length mismatch for Yk: expected 3, found 2"
        );
    }
}
