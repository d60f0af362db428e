//! Contains the options that control how a [`Read`](crate::Read) is executed.

use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

/// The number of times a read is re-authenticated and resent if no other value is configured.
pub const DEFAULT_MAX_REAUTHENTICATION_ATTEMPTS: u32 = 1;

/// Specifies the options to [`Read::execute_with_options`](crate::Read::execute_with_options).
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize, TypedBuilder)]
#[builder(field_defaults(default, setter(strip_option)))]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct ReadOptions {
    /// The maximum number of times the read is resent after the node rejected its session and
    /// logged in again. Once exhausted, a further authorization failure is returned as a
    /// [`ReadFailure`](crate::error::ErrorKind::ReadFailure). A value of zero disables
    /// re-authentication.
    ///
    /// The default value is 1.
    pub max_reauthentication_attempts: Option<u32>,
}

impl ReadOptions {
    pub(crate) fn resolved_max_reauthentication_attempts(&self) -> u32 {
        self.max_reauthentication_attempts
            .unwrap_or(DEFAULT_MAX_REAUTHENTICATION_ATTEMPTS)
    }
}
