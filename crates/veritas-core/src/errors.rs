use thiserror::Error;

use crate::value::Fault;

/// Result type alias using VeritasError
pub type Result<T> = std::result::Result<T, VeritasError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that can be used for programmatic
/// error handling, testing and log assertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Assertion failures
    NotEqual,
    UnexpectedlyEqual,
    OutOfRange,
    UnexpectedlyInRange,
    NotFound,
    UnexpectedlyFound,

    // Comparison
    /// Operands of the same type expose no ordering
    Incomparable,
    /// A user-supplied member failed
    MemberFault,

    // Construction
    InvalidInput,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::NotEqual => "ERR_NOT_EQUAL",
            ExErrorKind::UnexpectedlyEqual => "ERR_UNEXPECTEDLY_EQUAL",
            ExErrorKind::OutOfRange => "ERR_OUT_OF_RANGE",
            ExErrorKind::UnexpectedlyInRange => "ERR_UNEXPECTEDLY_IN_RANGE",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::UnexpectedlyFound => "ERR_UNEXPECTEDLY_FOUND",
            ExErrorKind::Incomparable => "ERR_INCOMPARABLE",
            ExErrorKind::MemberFault => "ERR_MEMBER_FAULT",
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Carries the classification plus the rendered operands of a failed
/// assertion, so callers can build their own messages.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    type_name: Option<String>,
    expected: Option<String>,
    actual: Option<String>,
    message: String,
    source: Option<Box<ExError>>,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            type_name: None,
            expected: None,
            actual: None,
            message: String::new(),
            source: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add the type the failure concerns
    pub fn with_type_name(mut self, type_name: impl Into<String>) -> Self {
        self.type_name = Some(type_name.into());
        self
    }

    /// Add the rendered expected operand
    pub fn with_expected(mut self, expected: impl Into<String>) -> Self {
        self.expected = Some(expected.into());
        self
    }

    /// Add the rendered actual operand
    pub fn with_actual(mut self, actual: impl Into<String>) -> Self {
        self.actual = Some(actual.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add source error
    pub fn with_source(mut self, source: ExError) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn type_name(&self) -> Option<&str> {
        self.type_name.as_deref()
    }

    pub fn expected(&self) -> Option<&str> {
        self.expected.as_deref()
    }

    pub fn actual(&self) -> Option<&str> {
        self.actual.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn source_error(&self) -> Option<&ExError> {
        self.source.as_deref()
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(type_name) = &self.type_name {
            write!(f, " (type: {})", type_name)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

// ========== End Error Facility ==========

/// Error taxonomy for Veritas operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum VeritasError {
    // ===== Assertion Failures =====
    /// Values were expected to be equal
    #[error("Assert.Equal() Failure\nExpected: {expected}\nActual:   {actual}")]
    NotEqual { expected: String, actual: String },

    /// Strings were expected to be equal; indices locate the first mismatch
    #[error(
        "Assert.Equal() Failure: strings differ at expected index {expected_index}, actual index {actual_index}\nExpected: {expected}\nActual:   {actual}"
    )]
    StringsDiffer {
        expected: String,
        actual: String,
        expected_index: usize,
        actual_index: usize,
    },

    /// Values were expected to differ
    #[error("Assert.NotEqual() Failure\nExpected: Not {expected}\nActual:   {actual}")]
    UnexpectedlyEqual { expected: String, actual: String },

    /// Value lies outside the inclusive range
    #[error("Assert.InRange() Failure\nRange:  ({low} - {high})\nActual: {actual}")]
    OutOfRange {
        low: String,
        high: String,
        actual: String,
    },

    /// Value lies inside the inclusive range
    #[error("Assert.NotInRange() Failure\nRange:  ({low} - {high})\nActual: {actual}")]
    UnexpectedlyInRange {
        low: String,
        high: String,
        actual: String,
    },

    /// Item is missing from the collection
    #[error("Assert.Contains() Failure\nNot found: {expected}\nIn value:  {collection}")]
    NotFound { expected: String, collection: String },

    /// Item is present in the collection
    #[error("Assert.DoesNotContain() Failure\nFound:    {expected}\nIn value: {collection}")]
    UnexpectedlyFound { expected: String, collection: String },

    // ===== Comparison Errors =====
    /// Same-typed operands expose no ordering capability
    #[error("Could not compare objects of type {type_name}")]
    Incomparable { type_name: String },

    /// A user-supplied member failed
    #[error("Member fault: {0}")]
    MemberFault(#[from] Fault),

    // ===== Construction Errors =====
    /// Array dimensions do not account for the items supplied
    #[error("Array dimensions {lengths:?} do not match {items} items")]
    InvalidArrayShape { lengths: Vec<usize>, items: usize },

    /// Value cannot be enumerated
    #[error("Value of type {type_name} is not a collection")]
    NotACollection { type_name: String },

    // ===== Generic Errors =====
    /// Generic internal error
    #[error("Internal error: {message}")]
    Internal { message: String },
}

/// Conversion from VeritasError to ExError
impl From<VeritasError> for ExError {
    fn from(err: VeritasError) -> Self {
        let message = err.to_string();
        match err {
            VeritasError::NotEqual { expected, actual }
            | VeritasError::StringsDiffer {
                expected, actual, ..
            } => ExError::new(ExErrorKind::NotEqual)
                .with_expected(expected)
                .with_actual(actual)
                .with_message(message),

            VeritasError::UnexpectedlyEqual { expected, actual } => {
                ExError::new(ExErrorKind::UnexpectedlyEqual)
                    .with_expected(expected)
                    .with_actual(actual)
                    .with_message(message)
            }

            VeritasError::OutOfRange { actual, .. } => ExError::new(ExErrorKind::OutOfRange)
                .with_actual(actual)
                .with_message(message),

            VeritasError::UnexpectedlyInRange { actual, .. } => {
                ExError::new(ExErrorKind::UnexpectedlyInRange)
                    .with_actual(actual)
                    .with_message(message)
            }

            VeritasError::NotFound {
                expected,
                collection,
            } => ExError::new(ExErrorKind::NotFound)
                .with_expected(expected)
                .with_actual(collection)
                .with_message(message),

            VeritasError::UnexpectedlyFound {
                expected,
                collection,
            } => ExError::new(ExErrorKind::UnexpectedlyFound)
                .with_expected(expected)
                .with_actual(collection)
                .with_message(message),

            VeritasError::Incomparable { type_name } => ExError::new(ExErrorKind::Incomparable)
                .with_type_name(type_name)
                .with_message(message),

            VeritasError::MemberFault(fault) => ExError::new(ExErrorKind::MemberFault)
                .with_type_name(fault.type_name())
                .with_message(message),

            VeritasError::InvalidArrayShape { .. } => {
                ExError::new(ExErrorKind::InvalidInput).with_message(message)
            }

            VeritasError::NotACollection { type_name } => {
                ExError::new(ExErrorKind::InvalidInput)
                    .with_type_name(type_name)
                    .with_message(message)
            }

            VeritasError::Internal { .. } => {
                ExError::new(ExErrorKind::Internal).with_message(message)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_equal_carries_operands() {
        let err = VeritasError::NotEqual {
            expected: "1".to_string(),
            actual: "2".to_string(),
        };
        let ex: ExError = err.into();
        assert_eq!(ex.kind(), ExErrorKind::NotEqual);
        assert_eq!(ex.code(), "ERR_NOT_EQUAL");
        assert_eq!(ex.expected(), Some("1"));
        assert_eq!(ex.actual(), Some("2"));
    }

    #[test]
    fn test_member_fault_names_fault_type() {
        let err = VeritasError::from(Fault::new("DivideByZeroException", "oops"));
        let ex: ExError = err.into();
        assert_eq!(ex.kind(), ExErrorKind::MemberFault);
        assert_eq!(ex.type_name(), Some("DivideByZeroException"));
        assert!(ex.message().contains("oops"));
    }

    #[test]
    fn test_display_includes_code_and_op() {
        let ex = ExError::new(ExErrorKind::Incomparable)
            .with_op("compare")
            .with_message("no ordering")
            .with_type_name("Acme.Widget");
        assert_eq!(
            ex.to_string(),
            "[ERR_INCOMPARABLE] in operation 'compare': no ordering (type: Acme.Widget)"
        );
    }

    #[test]
    fn test_source_chain() {
        let inner = ExError::new(ExErrorKind::MemberFault);
        let outer = ExError::new(ExErrorKind::Internal).with_source(inner);
        assert_eq!(
            outer.source_error().map(ExError::kind),
            Some(ExErrorKind::MemberFault)
        );
        assert!(std::error::Error::source(&outer).is_some());
    }

    #[test]
    fn test_codes_are_unique() {
        let kinds = [
            ExErrorKind::NotEqual,
            ExErrorKind::UnexpectedlyEqual,
            ExErrorKind::OutOfRange,
            ExErrorKind::UnexpectedlyInRange,
            ExErrorKind::NotFound,
            ExErrorKind::UnexpectedlyFound,
            ExErrorKind::Incomparable,
            ExErrorKind::MemberFault,
            ExErrorKind::InvalidInput,
            ExErrorKind::Internal,
        ];
        let codes: std::collections::BTreeSet<&str> = kinds.iter().map(|k| k.code()).collect();
        assert_eq!(codes.len(), kinds.len());
    }
}
