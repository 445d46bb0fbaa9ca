//! Shared record model for the problem and factor tables.
//!
//! This crate owns the data shapes used by both `server` and `client`:
//! the `problems` and `factors` table rows, the discriminated factor
//! value, the creation payloads, and the title validation both sides
//! agree on. Serde field names match the table column names exactly, so
//! a serialized record is also a valid row for the table store.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

/// Error returned by input validation shared between client and server.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The problem title is empty or whitespace-only.
    #[error("problem name must not be empty")]
    EmptyProblemName,
}

/// Reject empty and whitespace-only problem titles.
///
/// # Errors
///
/// Returns [`ValidationError::EmptyProblemName`] when the trimmed title
/// has no characters left.
pub fn validate_problem_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::EmptyProblemName);
    }
    Ok(())
}

/// A row in the `problems` table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Problem {
    /// Unique identifier, minted by the application on create.
    pub id: Uuid,
    /// Owning user. Always `None` here; the column exists for a future
    /// authentication layer.
    #[serde(default)]
    pub user_id: Option<Uuid>,
    /// Creation instant, stored as an RFC 3339 timestamp.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    /// Title entered by the user. Never blank after validation.
    pub name: String,
    /// Free-form description. May be empty.
    #[serde(default)]
    pub description: String,
    /// Whether the user marked the attempt as a success.
    pub success: bool,
}

impl Problem {
    /// Build a fresh problem row from a creation payload.
    #[must_use]
    pub fn new(new: NewProblem, created_at: OffsetDateTime) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id: None,
            created_at,
            name: new.name,
            description: new.description,
            success: new.success,
        }
    }

    /// Outcome word shown beside the problem in list views.
    #[must_use]
    pub fn outcome_label(&self) -> &'static str {
        if self.success { "success" } else { "fail" }
    }
}

/// A row in the `factors` table.
///
/// The value lives in two columns discriminated by `is_scale`; the
/// column the discriminator does not select keeps its default and is
/// never read back. [`Factor::value`] is the only read path.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Factor {
    /// Unique identifier, minted by the application on create.
    pub id: Uuid,
    /// The problem this factor belongs to.
    pub problem_id: Uuid,
    /// Creation instant, stored as an RFC 3339 timestamp.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    /// Factor label entered by the user. May be empty.
    #[serde(default)]
    pub name: String,
    /// Value discriminator: `true` selects `value_scale`, `false`
    /// selects `value_binary`.
    pub is_scale: bool,
    /// Yes/no value, meaningful only when `is_scale` is `false`.
    #[serde(default)]
    pub value_binary: bool,
    /// Numeric rating, meaningful only when `is_scale` is `true`.
    #[serde(default)]
    pub value_scale: i64,
}

impl Factor {
    /// Build a fresh factor row from a creation payload, flattening the
    /// discriminated value onto the table columns.
    #[must_use]
    pub fn new(new: NewFactor, created_at: OffsetDateTime) -> Self {
        let (is_scale, value_binary, value_scale) = match new.value {
            FactorValue::Binary(flag) => (false, flag, 0),
            FactorValue::Scale(rating) => (true, false, rating),
        };

        Self {
            id: Uuid::new_v4(),
            problem_id: new.problem_id,
            created_at,
            name: new.name,
            is_scale,
            value_binary,
            value_scale,
        }
    }

    /// The factor's value, as selected by the `is_scale` discriminator.
    #[must_use]
    pub fn value(&self) -> FactorValue {
        if self.is_scale {
            FactorValue::Scale(self.value_scale)
        } else {
            FactorValue::Binary(self.value_binary)
        }
    }
}

/// The value carried by a factor: a yes/no answer or a numeric rating.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum FactorValue {
    /// Yes/no answer.
    Binary(bool),
    /// Numeric rating.
    Scale(i64),
}

impl std::fmt::Display for FactorValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Binary(flag) => write!(f, "{flag}"),
            Self::Scale(rating) => write!(f, "{rating}"),
        }
    }
}

/// Payload for creating a problem.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewProblem {
    /// Title entered by the user. Must survive [`validate_problem_name`].
    pub name: String,
    /// Free-form description. May be empty.
    #[serde(default)]
    pub description: String,
    /// Whether the user marked the attempt as a success.
    #[serde(default)]
    pub success: bool,
}

/// Payload for creating a factor against a selected problem.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewFactor {
    /// The problem the factor belongs to.
    pub problem_id: Uuid,
    /// Factor label entered by the user. May be empty.
    #[serde(default)]
    pub name: String,
    /// Discriminated value selected in the entry form.
    pub value: FactorValue,
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
