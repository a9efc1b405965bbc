//! Precondition checks for function entry points.
//! Each check either returns `Ok(())` or a [`BorderError`] naming the failed
//! condition, the caller's message and where the check was called from.
//!
//! ```
//! use border::{assert_not_null_or_empty, assert_valid_email, BorderError};
//!
//! fn register(name: Option<&str>, email: Option<&str>) -> border::Result {
//!     assert_not_null_or_empty("name is required", name)?;
//!     assert_valid_email("email is malformed", email)?;
//!     Ok(())
//! }
//!
//! let err = register(Some("Joe"), Some("joe at example")).unwrap_err();
//! assert!(matches!(err, BorderError::InvalidEmail(_)));
//! assert_eq!(err.message(), "email is malformed");
//! ```

mod check;
mod email;
mod error;
mod locator;

pub use check::*;
pub use email::is_email_shaped;
#[cfg(feature = "serde")]
pub use error::FailureReport;
pub use error::{BorderError, Failure, FailureKind};
pub use locator::Locator;

pub type Result<T = (), E = BorderError> = std::result::Result<T, E>;

/// Hook for types that guard their own invariants by chaining checks.
/// Stops at the first failed check.
pub trait Validate {
    fn validate(&self) -> Result;
}

/// Variadic form of [`assert_one_of`].
///
/// ```
/// let currency = Some("NZD");
/// assert!(border::one_of!("unsupported currency", currency, "NZD", "AUD").is_ok());
/// assert!(border::one_of!("unsupported currency", Some("EUR"), "NZD", "AUD").is_err());
/// ```
#[macro_export]
macro_rules! one_of {
    ($message:expr, $value:expr, $($candidate:expr),+ $(,)?) => {
        $crate::assert_one_of($message, $value, &[$($candidate),+])
    };
}
