use std::fmt::Display;

use serde::Serialize;

/// Error classes shared by every public operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Validation,
    Authorization,
    NotFound,
    Conflict,
    /// Unexpected failure of an underlying resource, e.g. the database.
    Transient,
}

/// Maps an operation error to its class and a stable, machine readable code.
pub trait ErrorCode {
    fn kind(&self) -> ErrorKind;
    fn code(&self) -> &'static str;
}

/// Actor-facing rendition of an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PublicError {
    pub kind: ErrorKind,
    pub code: &'static str,
    pub message: String,
}

impl PublicError {
    pub const INTERNAL_CODE: &'static str = "internal_error";

    pub fn from_error<E: ErrorCode + Display>(err: &E) -> Self {
        match err.kind() {
            ErrorKind::Transient => Self::internal(),
            kind => Self {
                kind,
                code: err.code(),
                message: err.to_string(),
            },
        }
    }

    pub fn internal() -> Self {
        Self {
            kind: ErrorKind::Transient,
            code: Self::INTERNAL_CODE,
            message: "Internal error".into(),
        }
    }

    pub fn validation(code: &'static str, message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Validation,
            code,
            message: message.into(),
        }
    }
}

/// Implements [`ErrorCode`] by mapping each variant pattern to a kind and a
/// code.
///
/// ```ignore
/// error_code!(MyError {
///     Self::NotFound => NotFound("not_found"),
///     Self::Other(_) => Transient("internal_error"),
/// });
/// ```
#[macro_export]
macro_rules! error_code {
    ($ty:ty { $($pat:pat => $kind:ident($code:literal)),* $(,)? }) => {
        impl $crate::error::ErrorCode for $ty {
            fn kind(&self) -> $crate::error::ErrorKind {
                match self {
                    $($pat => $crate::error::ErrorKind::$kind),*
                }
            }

            fn code(&self) -> &'static str {
                match self {
                    $($pat => $code),*
                }
            }
        }
    };
}

impl Display for PublicError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "error[{}]: {}", self.code, self.message)
    }
}

impl std::error::Error for PublicError {}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[derive(Debug)]
    enum TestError {
        Missing,
        Broken,
    }

    impl Display for TestError {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            match self {
                Self::Missing => write!(f, "The thing could not be found."),
                Self::Broken => write!(f, "connection refused by 10.0.0.3"),
            }
        }
    }

    crate::error_code!(TestError {
        Self::Missing => NotFound("missing"),
        Self::Broken => Transient("broken"),
    });

    #[test]
    fn expected_error_is_forwarded() {
        let result = PublicError::from_error(&TestError::Missing);

        assert_eq!(
            result,
            PublicError {
                kind: ErrorKind::NotFound,
                code: "missing",
                message: "The thing could not be found.".into(),
            }
        );
        assert_eq!(result.to_string(), "error[missing]: The thing could not be found.");
    }

    #[test]
    fn transient_error_is_hidden() {
        let result = PublicError::from_error(&TestError::Broken);

        assert_eq!(result, PublicError::internal());
        assert!(!result.message.contains("10.0.0.3"));
    }

    #[test]
    fn error_code_macro() {
        assert_eq!(TestError::Missing.kind(), ErrorKind::NotFound);
        assert_eq!(TestError::Missing.code(), "missing");
        assert_eq!(TestError::Broken.kind(), ErrorKind::Transient);
    }
}
