//! Overlay error types

use thiserror::Error;

use crate::compass::MIN_DIAMETER;

/// Errors reported by the overlay geometry component.
///
/// All variants are local precondition violations: the offending call is
/// rejected with no partial mutation, so the previous valid cached state,
/// if any, remains intact. There is no retry or clamping logic here —
/// persistently invalid input is a caller bug and is surfaced immediately.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum OverlayError {
    /// Layout was requested before the first successful resize
    #[error("layout requested before first resize")]
    NotInitialized,
    /// Viewport too small for the range ring to fit inside its padding
    #[error("diameter {0} px is below the minimum of {} px", MIN_DIAMETER)]
    InvalidDiameter(u32),
    /// Heading was NaN or infinite
    #[error("heading must be finite, got {0}")]
    InvalidHeading(f64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            format!("{}", OverlayError::NotInitialized),
            "layout requested before first resize"
        );
        assert_eq!(
            format!("{}", OverlayError::InvalidDiameter(5)),
            "diameter 5 px is below the minimum of 54 px"
        );
        assert_eq!(
            format!("{}", OverlayError::InvalidHeading(f64::NAN)),
            "heading must be finite, got NaN"
        );
    }
}
