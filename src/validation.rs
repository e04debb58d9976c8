//! Input validation for allocation runs.
//!
//! The allocator assumes clean input. These checks are for callers that
//! load fleets from outside (deserialized data skips the model
//! constructors). Detects:
//! - Duplicate truck or delivery IDs
//! - Destinations missing from the distance table
//! - Deliveries with zero weight or a non-positive deadline
//! - Trucks with no capacity or invalid hours

use crate::graph::DistanceTable;
use crate::models::{Delivery, Truck};
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two trucks or two deliveries share the same ID.
    DuplicateId,
    /// A delivery goes to a node the table does not know.
    UnknownDestination,
    /// A delivery has zero weight or a non-positive deadline.
    InvalidDelivery,
    /// A truck can never carry anything.
    InvalidTruck,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates deliveries and trucks against a distance table.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_fleet(deliveries: &[Delivery], trucks: &[Truck], table: &DistanceTable) -> ValidationResult {
    let mut errors = Vec::new();

    let mut truck_ids = HashSet::new();
    for truck in trucks {
        if !truck_ids.insert(truck.id()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate truck ID: {}", truck.id()),
            ));
        }
        if truck.capacity() == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidTruck,
                format!("Truck {} has no capacity", truck.id()),
            ));
        }
        if !truck.hours().is_finite() || truck.hours() < 0.0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidTruck,
                format!("Truck {} has invalid hours {}", truck.id(), truck.hours()),
            ));
        }
    }

    let known: HashSet<&str> = table.nodes().map(|n| n.as_str()).collect();
    let mut delivery_ids = HashSet::new();
    for delivery in deliveries {
        if !delivery_ids.insert(delivery.id()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate delivery ID: {}", delivery.id()),
            ));
        }
        if !known.contains(delivery.destination().as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownDestination,
                format!(
                    "Delivery {} goes to unknown node '{}'",
                    delivery.id(),
                    delivery.destination()
                ),
            ));
        }
        if delivery.weight() == 0 || delivery.deadline().is_nan() || delivery.deadline() <= 0.0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidDelivery,
                format!(
                    "Delivery {} has weight {} and deadline {}",
                    delivery.id(),
                    delivery.weight(),
                    delivery.deadline()
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
