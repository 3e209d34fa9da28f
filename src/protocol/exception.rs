//! The error envelope returned by a server.

use serde::Deserialize;
use serde::Serialize;

/// An error reported by the server for a request it could not satisfy.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GaException {
    /// A human-readable message.
    #[serde(default)]
    message: Option<String>,

    /// A server-specific error code.
    #[serde(default)]
    error_code: Option<i64>,
}

impl GaException {
    /// Gets the message reported by the server.
    ///
    /// # Examples
    ///
    /// ```
    /// use ga4gh_cts::protocol::GaException;
    ///
    /// let exception = serde_json::from_str::<GaException>(
    ///     r#"{"message": "no such object", "errorCode": 404}"#,
    /// )?;
    ///
    /// assert_eq!(exception.message(), Some("no such object"));
    /// assert_eq!(exception.error_code(), Some(404));
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Gets the error code reported by the server.
    pub fn error_code(&self) -> Option<i64> {
        self.error_code
    }
}

impl std::fmt::Display for GaException {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.message, self.error_code) {
            (Some(message), Some(code)) => write!(f, "{message} (error code {code})"),
            (Some(message), None) => write!(f, "{message}"),
            (None, Some(code)) => write!(f, "error code {code}"),
            (None, None) => write!(f, "<no details>"),
        }
    }
}
