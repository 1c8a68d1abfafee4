//! Identifier types shared across layers.

/// Unique identifier for an employee record.
///
/// Ids are assigned by the upstream data source and are unique per record.
pub type EmployeeId = i64;
