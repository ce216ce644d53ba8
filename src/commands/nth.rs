use crate::core::{
    fibonacci_iterative, fibonacci_recursive, terms, Method, MAX_EXACT_POSITION,
    SLOW_RECURSION_POSITION,
};
use anyhow::{bail, Result};
use std::io::Write;
use tracing::{info, warn};

/// Value at 0-indexed `position` computed by `method`.
///
/// The nth-term calculators pass negative positions through unchanged; the
/// list-based methods have no such term and return `None`.
pub fn nth_term(method: Method, position: i64) -> Option<i64> {
    match method {
        Method::Recursive => Some(fibonacci_recursive(position)),
        Method::Iterative => Some(fibonacci_iterative(position)),
        Method::Sequence | Method::Generator => {
            let count = position.checked_add(1)?;
            let index = usize::try_from(position).ok()?;
            terms(method, count).get(index).copied()
        }
    }
}

pub fn handle_nth<W: Write>(mut writer: W, position: i64, method: Method) -> Result<()> {
    if position > MAX_EXACT_POSITION {
        warn!(
            position,
            "Positions beyond {} overflow i64 and will wrap", MAX_EXACT_POSITION
        );
    }
    if method == Method::Recursive && position > SLOW_RECURSION_POSITION {
        warn!(position, "Recursive calculation is exponential; this may take a long time");
    }
    info!(%method, position, "Computing term");

    let Some(value) = nth_term(method, position) else {
        bail!(
            "Position {} has no term for method {}; use recursive or iterative for negative positions",
            position,
            method
        );
    };
    writeln!(writer, "{}", value)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nth_term_methods_agree() {
        for method in [
            Method::Sequence,
            Method::Recursive,
            Method::Iterative,
            Method::Generator,
        ] {
            assert_eq!(nth_term(method, 10), Some(55), "method {}", method);
            assert_eq!(nth_term(method, 0), Some(0));
        }
    }

    #[test]
    fn test_negative_position() {
        assert_eq!(nth_term(Method::Recursive, -3), Some(-3));
        assert_eq!(nth_term(Method::Iterative, -3), Some(-3));
        assert_eq!(nth_term(Method::Sequence, -3), None);
        assert_eq!(nth_term(Method::Generator, -1), None);
    }

    #[test]
    fn test_handle_nth_writes_value() {
        let mut buffer = Vec::new();
        handle_nth(&mut buffer, 20, Method::Iterative).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "6765\n");
    }

    #[test]
    fn test_handle_nth_wraps_past_exact_range() {
        let mut buffer = Vec::new();
        handle_nth(&mut buffer, MAX_EXACT_POSITION + 1, Method::Iterative).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "-6246583658587674878\n");
    }

    #[test]
    fn test_handle_nth_rejects_negative_for_sequence() {
        let mut buffer = Vec::new();
        let err = handle_nth(&mut buffer, -1, Method::Sequence).unwrap_err();
        assert!(err.to_string().contains("Position -1"));
        assert!(buffer.is_empty());
    }
}
