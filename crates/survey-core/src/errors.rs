use survey_core_types::{RequestId, ScopeId};
use thiserror::Error;

/// Result type alias using SurveyError
pub type Result<T> = std::result::Result<T, SurveyError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that callers can branch on.
/// Not-found is deliberately absent from the data-access paths: lookups
/// return `Option` and updates/deletes return affected row counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Validation
    InvalidInput,
    InvalidTitle,
    InvalidAnswerValue,

    // Storage constraints
    NotFound,
    AlreadyExists,
    ConstraintViolation,

    // Credentials
    InvalidCredentials,

    // Integration/IO
    Io,
    Persistence,
    Concurrency,
    Cancelled,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::InvalidTitle => "ERR_INVALID_TITLE",
            ExErrorKind::InvalidAnswerValue => "ERR_INVALID_ANSWER_VALUE",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::AlreadyExists => "ERR_ALREADY_EXISTS",
            ExErrorKind::ConstraintViolation => "ERR_CONSTRAINT_VIOLATION",
            ExErrorKind::InvalidCredentials => "ERR_INVALID_CREDENTIALS",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Persistence => "ERR_PERSISTENCE",
            ExErrorKind::Concurrency => "ERR_CONCURRENCY",
            ExErrorKind::Cancelled => "ERR_CANCELLED",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification for programmatic handling plus optional
/// context for debugging.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    entity_id: Option<String>,
    request_id: Option<RequestId>,
    scope_id: Option<ScopeId>,
    message: String,
    source: Option<Box<ExError>>,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity_id: None,
            request_id: None,
            scope_id: None,
            message: String::new(),
            source: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add entity ID context
    pub fn with_entity_id(mut self, id: impl ToString) -> Self {
        self.entity_id = Some(id.to_string());
        self
    }

    /// Add request ID context
    pub fn with_request_id(mut self, request_id: RequestId) -> Self {
        self.request_id = Some(request_id);
        self
    }

    /// Add caller scope context
    pub fn with_scope_id(mut self, scope_id: ScopeId) -> Self {
        self.scope_id = Some(scope_id);
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

    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    pub fn request_id(&self) -> Option<&RequestId> {
        self.request_id.as_ref()
    }

    pub fn scope_id(&self) -> Option<&ScopeId> {
        self.scope_id.as_ref()
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
        if let Some(entity_id) = &self.entity_id {
            write!(f, " (entity_id: {})", entity_id)?;
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

/// Domain validation errors raised before anything touches storage
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SurveyError {
    #[error("Invalid title: {reason}")]
    InvalidTitle { reason: String },

    #[error("Invalid description: {reason}")]
    InvalidDescription { reason: String },

    #[error("Invalid question text: {reason}")]
    InvalidQuestionText { reason: String },

    #[error("Invalid username: {reason}")]
    InvalidUsername { reason: String },

    #[error("Invalid password: {reason}")]
    InvalidPassword { reason: String },

    #[error("Answer value {value} is outside the Likert scale 1..=5")]
    InvalidAnswerValue { value: i64 },

    #[error("Unknown Likert label: {label}")]
    UnknownLikertLabel { label: String },

    #[error("Username already taken: {username}")]
    UsernameTaken { username: String },

    #[error("Password hashing failed: {message}")]
    PasswordHash { message: String },

}

impl From<SurveyError> for ExError {
    fn from(err: SurveyError) -> Self {
        let message = err.to_string();
        match err {
            SurveyError::InvalidTitle { .. } => {
                ExError::new(ExErrorKind::InvalidTitle).with_message(message)
            }
            SurveyError::InvalidDescription { .. }
            | SurveyError::InvalidQuestionText { .. }
            | SurveyError::InvalidUsername { .. }
            | SurveyError::InvalidPassword { .. }
            | SurveyError::UnknownLikertLabel { .. } => {
                ExError::new(ExErrorKind::InvalidInput).with_message(message)
            }
            SurveyError::InvalidAnswerValue { value } => {
                ExError::new(ExErrorKind::InvalidAnswerValue)
                    .with_entity_id(value)
                    .with_message(message)
            }
            SurveyError::UsernameTaken { username } => ExError::new(ExErrorKind::AlreadyExists)
                .with_entity_id(username)
                .with_message(message),
            SurveyError::PasswordHash { .. } => ExError::new(ExErrorKind::Internal)
                .with_op("hash_password")
                .with_message(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_codes_are_unique() {
        let kinds = [
            ExErrorKind::InvalidInput,
            ExErrorKind::InvalidTitle,
            ExErrorKind::InvalidAnswerValue,
            ExErrorKind::NotFound,
            ExErrorKind::AlreadyExists,
            ExErrorKind::ConstraintViolation,
            ExErrorKind::InvalidCredentials,
            ExErrorKind::Io,
            ExErrorKind::Persistence,
            ExErrorKind::Concurrency,
            ExErrorKind::Cancelled,
            ExErrorKind::Internal,
        ];
        let mut codes: Vec<_> = kinds.iter().map(|k| k.code()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), kinds.len());
    }

    #[test]
    fn test_display_includes_code_op_and_entity() {
        let err = ExError::new(ExErrorKind::ConstraintViolation)
            .with_op("insert_question")
            .with_entity_id(42)
            .with_message("FOREIGN KEY constraint failed");

        let rendered = err.to_string();
        assert!(rendered.starts_with("[ERR_CONSTRAINT_VIOLATION]"));
        assert!(rendered.contains("insert_question"));
        assert!(rendered.contains("entity_id: 42"));
    }

    #[test]
    fn test_source_chain_is_exposed() {
        let inner = ExError::new(ExErrorKind::Persistence).with_message("disk I/O error");
        let outer = ExError::new(ExErrorKind::Internal).with_source(inner);

        let source = std::error::Error::source(&outer).expect("source should be set");
        assert!(source.to_string().contains("disk I/O error"));
    }
}
