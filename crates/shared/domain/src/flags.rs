//! Feature flag registry.
//!
//! A fixed set of recognized flag identifiers, defined once and never mutated
//! at runtime. Callers validate user-supplied flag names against this set
//! before acting on them; what an unrecognized name means (reject, ignore,
//! log) is the caller's policy, not encoded here.

use std::ffi::OsString;

pub const FLAG_ALPHA_FEATURES: &str = "alpha_features";
pub const FLAG_ON_DEMAND_TRANSFORMS: &str = "on_demand_transforms";
pub const FLAG_AWS_LAMBDA_FEATURE_SERVER: &str = "aws_lambda_feature_server";
pub const FLAG_DIRECT_INGEST_TO_ONLINE_STORE: &str = "direct_ingest_to_online_store";
pub const FLAG_GO_FEATURE_SERVER: &str = "go_feature_server";

/// Environment variable gating test mode. Not a member of [`FLAG_NAMES`].
pub const ENV_FLAG_IS_TEST: &str = "IS_TEST";

/// Every recognized flag identifier, in declaration order.
pub const FLAG_NAMES: [&str; 5] = [
    FLAG_ALPHA_FEATURES,
    FLAG_ON_DEMAND_TRANSFORMS,
    FLAG_AWS_LAMBDA_FEATURE_SERVER,
    FLAG_DIRECT_INGEST_TO_ONLINE_STORE,
    FLAG_GO_FEATURE_SERVER,
];

/// Reports whether `name` is a recognized flag identifier.
///
/// Membership is exact and case-sensitive; the empty string is never
/// recognized.
#[must_use]
pub fn is_recognized(name: &str) -> bool {
    FLAG_NAMES.contains(&name)
}

/// Environment-derived runtime switches, read once at process start.
///
/// Re-reading the environment per call would make behavior nondeterministic
/// within a single run; construct this once and pass it along instead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RuntimeFlags {
    /// True when the [`ENV_FLAG_IS_TEST`] variable is present, with any value.
    pub test_mode: bool,
}

impl RuntimeFlags {
    /// Derives the flags from the current process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_test_var(std::env::var_os(ENV_FLAG_IS_TEST))
    }

    /// Derives the flags from an explicit variable value. Presence alone
    /// enables test mode; absence disables it.
    #[must_use]
    pub fn from_test_var(value: Option<OsString>) -> Self {
        Self { test_mode: value.is_some() }
    }
}
