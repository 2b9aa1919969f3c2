//! Input contract checks for layout requests.
//!
//! The engine performs no I/O, so every failure is an input-contract
//! violation detected up front:
//! - Inverted item intervals (`end < start`; the `end == start` ongoing
//!   sentinel is valid)
//! - Inverted windows (`start > end`)
//! - Duplicate item ids (anywhere in the tree)
//! - Configuration constants that break the sizing order
//!
//! Violations are never silently repaired — clamping a bad interval
//! would mask upstream data errors. All detected issues are collected
//! and returned together.

use crate::models::{LayoutConfig, ScheduledItem, TimeWindow};
use std::collections::HashSet;

/// Contract check result.
pub type ContractResult = Result<(), Vec<ContractViolation>>;

/// A single input-contract violation.
#[derive(Debug, Clone, PartialEq)]
pub struct ContractViolation {
    /// Violation category.
    pub kind: ContractViolationKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of contract violations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContractViolationKind {
    /// An item's end date precedes its start date.
    InvalidInterval,
    /// The window's start date follows its end date.
    InvalidWindow,
    /// Two items share the same id.
    DuplicateId,
    /// Configuration constants violate the sizing order.
    InvalidConfig,
}

impl ContractViolation {
    fn new(kind: ContractViolationKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a layout request.
///
/// Checks:
/// 1. Window `start <= end`
/// 2. Every item and nested child has `end >= start`
/// 3. No duplicate ids across the whole item tree
/// 4. Config preserves `child_row_height < min_item_height <
///    min_container_height` and uses positive weights
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(violations)` with every detected
/// issue.
pub fn validate_input(
    items: &[ScheduledItem],
    window: &TimeWindow,
    config: &LayoutConfig,
) -> ContractResult {
    let mut violations = Vec::new();

    if window.start > window.end {
        violations.push(ContractViolation::new(
            ContractViolationKind::InvalidWindow,
            format!("Window starts {} after it ends {}", window.start, window.end),
        ));
    }

    check_config(config, &mut violations);

    let mut seen_ids = HashSet::new();
    for item in items {
        check_item(item, &mut seen_ids, &mut violations);
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

fn check_item<'a>(
    item: &'a ScheduledItem,
    seen_ids: &mut HashSet<&'a str>,
    violations: &mut Vec<ContractViolation>,
) {
    if item.end < item.start {
        violations.push(ContractViolation::new(
            ContractViolationKind::InvalidInterval,
            format!(
                "Item '{}' ends {} before it starts {}",
                item.id, item.end, item.start
            ),
        ));
    }

    if !seen_ids.insert(item.id.as_str()) {
        violations.push(ContractViolation::new(
            ContractViolationKind::DuplicateId,
            format!("Duplicate item ID: {}", item.id),
        ));
    }

    for child in &item.children {
        check_item(child, seen_ids, violations);
    }
}

fn check_config(config: &LayoutConfig, violations: &mut Vec<ContractViolation>) {
    if config.weekday_weight <= 0.0 || config.weekend_weight <= 0.0 {
        violations.push(ContractViolation::new(
            ContractViolationKind::InvalidConfig,
            "Column weights must be positive",
        ));
    }
    if config.weekdays_per_window == 0 {
        violations.push(ContractViolation::new(
            ContractViolationKind::InvalidConfig,
            "Window must contain at least one weekday column",
        ));
    }
    if config.child_row_height >= config.min_item_height {
        violations.push(ContractViolation::new(
            ContractViolationKind::InvalidConfig,
            format!(
                "child_row_height {} must stay below min_item_height {}",
                config.child_row_height, config.min_item_height
            ),
        ));
    }
    if config.min_item_height >= config.min_container_height {
        violations.push(ContractViolation::new(
            ContractViolationKind::InvalidConfig,
            format!(
                "min_item_height {} must stay below min_container_height {}",
                config.min_item_height, config.min_container_height
            ),
        ));
    }
}
