//! Input validation for request payloads and query parameters.
//!
//! Every violated rule is collected before failing, so a caller sees all of them at once.
//! Lengths count Unicode scalar values, not bytes.

use record_store::page::{DEFAULT_LIMIT, MAX_LIMIT};
use record_store::{Page, PageError};
use std::fmt;

/// Something that can check itself before it reaches a store.
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationError>;
}

/// One broken rule on one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: &'static str,
    pub rule: String,
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.field, self.rule)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid input: {}", join(.violations))]
pub struct ValidationError {
    pub violations: Vec<FieldViolation>,
}

impl ValidationError {
    pub fn single(field: &'static str, rule: impl Into<String>) -> Self {
        Self {
            violations: vec![FieldViolation {
                field,
                rule: rule.into(),
            }],
        }
    }

    /// Whether `field` is among the violations.
    pub fn concerns(&self, field: &str) -> bool {
        self.violations.iter().any(|v| v.field == field)
    }
}

fn join(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Accumulates violations across several checks.
#[derive(Debug, Default)]
pub struct Validator {
    violations: Vec<FieldViolation>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    fn reject(&mut self, field: &'static str, rule: String) {
        self.violations.push(FieldViolation { field, rule });
    }

    pub fn length(&mut self, field: &'static str, value: &str, min: usize, max: usize) -> &mut Self {
        let len = value.chars().count();
        if len < min || len > max {
            if min == max {
                self.reject(field, format!("must be exactly {min} characters, got {len}"));
            } else {
                self.reject(field, format!("must be {min} to {max} characters, got {len}"));
            }
        }
        self
    }

    pub fn max_length(&mut self, field: &'static str, value: &str, max: usize) -> &mut Self {
        self.length(field, value, 0, max)
    }

    pub fn range(&mut self, field: &'static str, value: i64, min: i64, max: i64) -> &mut Self {
        if !(min..=max).contains(&value) {
            self.reject(field, format!("must be between {min} and {max}, got {value}"));
        }
        self
    }

    pub fn positive(&mut self, field: &'static str, value: f64) -> &mut Self {
        if !(value.is_finite() && value > 0.0) {
            self.reject(field, format!("must be greater than 0, got {value}"));
        }
        self
    }

    pub fn non_negative(&mut self, field: &'static str, value: f64) -> &mut Self {
        if !(value.is_finite() && value >= 0.0) {
            self.reject(field, format!("must be greater than or equal to 0, got {value}"));
        }
        self
    }

    pub fn finish(&mut self) -> Result<(), ValidationError> {
        if self.violations.is_empty() {
            return Ok(());
        }
        Err(ValidationError {
            violations: std::mem::take(&mut self.violations),
        })
    }
}

/// Checks a raw path id. Ids start at 1.
pub fn record_id(raw: i64) -> Result<u64, ValidationError> {
    u64::try_from(raw)
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| ValidationError::single("id", format!("must be greater than 0, got {raw}")))
}

/// `skip`/`limit` for listings, falling back to the defaults when absent.
pub fn page(skip: Option<i64>, limit: Option<i64>) -> Result<Page, ValidationError> {
    let skip = skip.unwrap_or(0);
    let skip = usize::try_from(skip).map_err(|_| {
        ValidationError::single("skip", format!("must be greater than or equal to 0, got {skip}"))
    })?;

    let raw_limit = limit.unwrap_or(DEFAULT_LIMIT as i64);
    let limit = usize::try_from(raw_limit).unwrap_or(0);
    Page::new(skip, limit).map_err(|e| match e {
        PageError::LimitOutOfRange(_) => ValidationError::single(
            "limit",
            format!("must be between 1 and {MAX_LIMIT}, got {raw_limit}"),
        ),
    })
}

/// Like [`page`], but only when the caller asked for pagination at all.
pub fn optional_page(skip: Option<i64>, limit: Option<i64>) -> Result<Option<Page>, ValidationError> {
    if skip.is_none() && limit.is_none() {
        return Ok(None);
    }
    page(skip, limit).map(Some)
}
