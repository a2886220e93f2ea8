use serde::{Deserialize, Serialize};
use tracing::trace;

use super::code::{AdcodeInput, is_six_digit_code};
use super::table::{is_special_code, name_for, regions};

/// Policy for `resolve_name`.
///
/// Serializable so a host can keep it next to its own map configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolveOptions {
    #[serde(default = "default_include_special_regions")]
    pub include_special_regions: bool,
    #[serde(default)]
    pub fallback: Option<String>,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            include_special_regions: default_include_special_regions(),
            fallback: None,
        }
    }
}

impl ResolveOptions {
    #[must_use]
    pub fn with_special_regions(mut self, include: bool) -> Self {
        self.include_special_regions = include;
        self
    }

    #[must_use]
    pub fn with_fallback(mut self, fallback: impl Into<String>) -> Self {
        self.fallback = Some(fallback.into());
        self
    }
}

fn default_include_special_regions() -> bool {
    true
}

/// Looks up the table name for `code` under the given special-region policy.
///
/// Malformed, unknown and policy-excluded codes all yield `None`.
#[must_use]
pub fn lookup(code: impl AdcodeInput, include_special_regions: bool) -> Option<&'static str> {
    let code = code.normalized_code();
    if !is_six_digit_code(&code) {
        return None;
    }
    if !include_special_regions && is_special_code(&code) {
        return None;
    }
    name_for(&code)
}

/// Resolves `code` to its province name, never failing.
///
/// When the code cannot be resolved the configured fallback is returned, or
/// the normalized code itself when no fallback is set.
#[must_use]
pub fn resolve_name(code: impl AdcodeInput, options: &ResolveOptions) -> String {
    let normalized = code.normalized_code();
    if let Some(name) = lookup(&*normalized, options.include_special_regions) {
        return name.to_owned();
    }

    trace!(
        code = %normalized,
        include_special_regions = options.include_special_regions,
        "region code did not resolve, using fallback"
    );
    match &options.fallback {
        Some(fallback) => fallback.clone(),
        None => normalized.into_owned(),
    }
}

/// Reverse lookup by exact name.
#[must_use]
pub fn resolve_code(name: &str) -> Option<&'static str> {
    regions()
        .find(|region| region.name == name)
        .map(|region| region.code)
}

/// Table codes in definition order.
#[must_use]
pub fn list_codes(include_special_regions: bool) -> Vec<&'static str> {
    regions()
        .filter(|region| include_special_regions || !region.special)
        .map(|region| region.code)
        .collect()
}

#[must_use]
pub fn is_valid_code(code: impl AdcodeInput, include_special_regions: bool) -> bool {
    lookup(code, include_special_regions).is_some()
}

/// `is_valid_code` with special regions included.
#[must_use]
pub fn is_valid_province_adcode(code: impl AdcodeInput) -> bool {
    is_valid_code(code, true)
}

/// Whether `code` names one of the special regions.
#[must_use]
pub fn is_special_region(code: impl AdcodeInput) -> bool {
    is_special_code(&code.normalized_code())
}
