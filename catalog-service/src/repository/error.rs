//! Store error types
//!
//! Structured errors for catalog store operations, carrying the operation
//! and failure category so handlers can log meaningful context while the
//! HTTP response stays generic.
//!
//! # Example
//!
//! ```rust
//! use catalog_service::repository::{StoreError, StoreErrorKind, StoreOperation};
//!
//! let error = StoreError::query_failed(StoreOperation::Count, "connection reset");
//! assert!(matches!(error.kind, StoreErrorKind::QueryFailed));
//! ```

use std::fmt;

/// Result type for store operations
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Operation being performed when the store error occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreOperation {
    /// Establishing a database connection
    Connect,
    /// Counting catalog rows
    Count,
    /// Selecting a page of catalog rows
    Select,
    /// Acquiring a connection from the pool
    PoolAcquire,
}

impl fmt::Display for StoreOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Connect => write!(f, "connect"),
            Self::Count => write!(f, "count"),
            Self::Select => write!(f, "select"),
            Self::PoolAcquire => write!(f, "pool_acquire"),
        }
    }
}

/// Category of store error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreErrorKind {
    /// Failed to establish connection
    ConnectionFailed,
    /// Query execution failed
    QueryFailed,
    /// Row-to-entity conversion error
    RowDecode,
    /// Operation timed out
    Timeout,
    /// Connection pool exhausted
    PoolExhausted,
    /// Other/unknown error
    Other,
}

impl fmt::Display for StoreErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConnectionFailed => write!(f, "connection_failed"),
            Self::QueryFailed => write!(f, "query_failed"),
            Self::RowDecode => write!(f, "row_decode"),
            Self::Timeout => write!(f, "timeout"),
            Self::PoolExhausted => write!(f, "pool_exhausted"),
            Self::Other => write!(f, "other"),
        }
    }
}

/// Structured store error with operation context
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreError {
    /// The operation being performed when the error occurred
    pub operation: StoreOperation,
    /// The category of error
    pub kind: StoreErrorKind,
    /// Human-readable error message
    pub message: String,
    /// Additional context (e.g., sanitized connection URL)
    pub context: Option<String>,
}

impl StoreError {
    /// Create a new store error
    pub fn new(
        operation: StoreOperation,
        kind: StoreErrorKind,
        message: impl Into<String>,
    ) -> Self {
        Self {
            operation,
            kind,
            message: message.into(),
            context: None,
        }
    }

    /// Create a connection failed error
    pub fn connection_failed(message: impl Into<String>) -> Self {
        Self::new(
            StoreOperation::Connect,
            StoreErrorKind::ConnectionFailed,
            message,
        )
    }

    /// Create a query failed error for the given operation
    pub fn query_failed(operation: StoreOperation, message: impl Into<String>) -> Self {
        Self::new(operation, StoreErrorKind::QueryFailed, message)
    }

    /// Add context to an existing error
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Classify a sqlx error for the given operation
    pub(crate) fn from_sqlx(operation: StoreOperation, err: sqlx::Error) -> Self {
        let kind = match &err {
            sqlx::Error::Io(_) | sqlx::Error::Tls(_) => StoreErrorKind::ConnectionFailed,
            sqlx::Error::PoolTimedOut => StoreErrorKind::PoolExhausted,
            sqlx::Error::PoolClosed | sqlx::Error::WorkerCrashed => {
                StoreErrorKind::ConnectionFailed
            }
            sqlx::Error::ColumnDecode { .. } | sqlx::Error::Decode(_) => StoreErrorKind::RowDecode,
            sqlx::Error::Database(_) => StoreErrorKind::QueryFailed,
            sqlx::Error::Configuration(_) => StoreErrorKind::Other,
            _ => StoreErrorKind::QueryFailed,
        };

        Self::new(operation, kind, err.to_string())
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Store {} error during {}: {}",
            self.kind, self.operation, self.message
        )?;
        if let Some(ref ctx) = self.context {
            write!(f, " [context: {}]", ctx)?;
        }
        Ok(())
    }
}

impl std::error::Error for StoreError {}
