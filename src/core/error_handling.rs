//! Error handling utilities for the board client
//!
//! Nothing in the client is allowed to halt input handling. Transport failures
//! become [`GENERIC_FAILURE_STATUS`] on the status line, and surface targets
//! that have vanished (the host tore the board down mid-request) abort the
//! current operation through [`safe_unwrap!`](crate::safe_unwrap).

/// Status text shown when the authority cannot be reached
pub const GENERIC_FAILURE_STATUS: &str = "Connection problem, please try again.";

/// Status text shown when the authority rejects a move without a reason
pub const DEFAULT_REJECTION_STATUS: &str = "Invalid move";

/// Helper macro to unwrap an `Option` or abort the current operation
///
/// Logs a warning and returns `$ret` (or `()` when omitted) on `None`.
///
/// ```rust,ignore
/// let rect = safe_unwrap!(surface.board_rect(), "board element missing", RenderReport::default());
/// ```
#[macro_export]
macro_rules! safe_unwrap {
    ($expr:expr, $msg:expr) => {
        $crate::safe_unwrap!($expr, $msg, ())
    };
    ($expr:expr, $msg:expr, $ret:expr) => {
        match $expr {
            Some(val) => val,
            None => {
                ::tracing::warn!("[ERROR_HANDLER] {}", $msg);
                return $ret;
            }
        }
    };
}

#[cfg(test)]
mod tests {
    fn first_even(values: &[u32]) -> u32 {
        let found = crate::safe_unwrap!(values.iter().find(|v| *v % 2 == 0), "no even value", 0);
        *found
    }

    fn touch(flag: &mut bool, value: Option<u8>) {
        let _ = crate::safe_unwrap!(value, "value missing");
        *flag = true;
    }

    #[test]
    fn test_safe_unwrap_returns_value() {
        assert_eq!(first_even(&[1, 3, 4, 5]), 4);
    }

    #[test]
    fn test_safe_unwrap_aborts_with_fallback() {
        assert_eq!(first_even(&[1, 3, 5]), 0);
    }

    #[test]
    fn test_safe_unwrap_aborts_unit_function() {
        let mut flag = false;
        touch(&mut flag, None);
        assert!(!flag, "operation should have been aborted");
        touch(&mut flag, Some(1));
        assert!(flag);
    }
}
