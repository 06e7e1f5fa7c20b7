//! Validated employee record with ID-based equality.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::{AppError, Result};

/// An employee record.
///
/// Fields are validated once at construction and never change afterwards,
/// so a value of this type always satisfies its invariants: `id > 0` and
/// both name parts non-blank.
#[derive(Debug, Clone)]
pub struct Employee {
    id: i32,
    first_name: String,
    last_name: String,
}

impl Employee {
    /// Create an employee, validating every field.
    ///
    /// Fails with a `Validation` error naming the offending field:
    /// - `id` must be positive
    /// - `first_name` and `last_name` must contain non-whitespace characters
    pub fn new(id: i32, first_name: impl Into<String>, last_name: impl Into<String>) -> Result<Self> {
        let first_name = first_name.into();
        let last_name = last_name.into();

        if id <= 0 {
            return Err(AppError::validation("Employee ID must be a positive number."));
        }
        if first_name.trim().is_empty() {
            return Err(AppError::validation("First name cannot be empty."));
        }
        if last_name.trim().is_empty() {
            return Err(AppError::validation("Last name cannot be empty."));
        }

        Ok(Self {
            id,
            first_name,
            last_name,
        })
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Full name as displayed: first name, space, last name.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Employee(ID: {}, Full Name: {} {})",
            self.id, self.first_name, self.last_name
        )
    }
}

/// Employees are compared by ID only. Two records with the same ID but
/// different names denote the same employee.
impl PartialEq for Employee {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Employee {}

/// Hash must agree with equality, so only the ID contributes.
impl Hash for Employee {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
