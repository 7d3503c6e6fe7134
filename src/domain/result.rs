//! Result type alias for ou-export
//!
//! This module provides a convenient Result type alias that uses OuExportError
//! as the error type.

use super::errors::OuExportError;

/// Result type alias for ou-export operations
///
/// # Examples
///
/// ```
/// use ou_export::domain::result::Result;
/// use ou_export::domain::errors::OuExportError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(OuExportError::Validation("Invalid input".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, OuExportError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::OuExportError;

    #[test]
    fn test_result_err() {
        let result: Result<i32> = Err(OuExportError::Validation("test error".to_string()));
        assert!(result.is_err());
    }

    #[test]
    fn test_result_with_question_mark() -> Result<()> {
        fn inner() -> Result<i32> {
            Ok(42)
        }

        let value = inner()?;
        assert_eq!(value, 42);
        Ok(())
    }
}
