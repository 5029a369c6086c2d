//! Order Commands
//!
//! Disputes and ratings attached to orders for the current session.

use collection_view::CollectionView;
use leptos::logging::log;
use serde::{Deserialize, Serialize};

use crate::config::TextLimits;
use crate::error::{CommandError, CommandResult, FieldErrors};
use crate::models::{Dispute, Order, OrderStatus, Rating};
use crate::validation::check_text_length;

/// Reasons offered in the dispute dialog: (value, label)
pub const DISPUTE_REASONS: &[(&str, &str)] = &[
    ("not-delivered", "Order not delivered"),
    ("not-as-described", "Not as described"),
    ("quality", "Quality issues"),
    ("late", "Late delivery"),
    ("other", "Other"),
];

// ========================
// Argument Structs
// ========================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DisputeArgs {
    pub reason: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RateArgs {
    pub stars: u8,
    pub comment: String,
}

// ========================
// Commands
// ========================

fn find_order(orders: &CollectionView<Order>, order_id: u32) -> CommandResult<&Order> {
    orders
        .find(&order_id)
        .ok_or_else(|| CommandError::NotFound(format!("order #{}", order_id)))
}

pub fn can_dispute(order: &Order) -> bool {
    order.dispute.is_none()
        && matches!(
            order.status,
            OrderStatus::InProgress | OrderStatus::Delivered | OrderStatus::Completed
        )
}

pub fn can_rate(order: &Order) -> bool {
    order.rating.is_none() && order.status.is_finished()
}

pub fn file_dispute(
    orders: &mut CollectionView<Order>,
    order_id: u32,
    args: DisputeArgs,
    limits: &TextLimits,
) -> CommandResult<()> {
    let mut errors = FieldErrors::new();
    if !DISPUTE_REASONS.iter().any(|(value, _)| *value == args.reason) {
        errors.insert("reason", "Please choose a reason");
    }
    check_text_length(
        &mut errors,
        "description",
        &args.description,
        "Description",
        limits.dispute_min,
        limits.dispute_max,
    );
    errors.into_result()?;

    let order = find_order(orders, order_id)?;
    if order.dispute.is_some() {
        return Err(CommandError::InvalidState(format!(
            "A dispute is already open for {}",
            order.order_number
        )));
    }
    if !can_dispute(order) {
        return Err(CommandError::InvalidState(format!(
            "{} orders cannot be disputed",
            order.status.label()
        )));
    }

    let dispute = Dispute { reason: args.reason, description: args.description.trim().to_string() };
    orders.update_record(&order_id, |order| order.dispute = Some(dispute));
    log!("[ORDERS] Dispute opened for order #{}", order_id);
    Ok(())
}

pub fn rate_order(
    orders: &mut CollectionView<Order>,
    order_id: u32,
    args: RateArgs,
    limits: &TextLimits,
) -> CommandResult<()> {
    let mut errors = FieldErrors::new();
    if !(1..=5).contains(&args.stars) {
        errors.insert("stars", "Choose between 1 and 5 stars");
    }
    check_text_length(&mut errors, "comment", &args.comment, "Comment", 0, limits.review_comment_max);
    errors.into_result()?;

    let order = find_order(orders, order_id)?;
    if order.rating.is_some() {
        return Err(CommandError::InvalidState(format!("{} is already rated", order.order_number)));
    }
    if !can_rate(order) {
        return Err(CommandError::InvalidState(
            "Only delivered or completed orders can be rated".to_string(),
        ));
    }

    let rating = Rating { stars: args.stars, comment: args.comment.trim().to_string() };
    orders.update_record(&order_id, |order| order.rating = Some(rating));
    log!("[ORDERS] Order #{} rated {} stars", order_id, args.stars);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock;
    use chrono::NaiveDate;

    fn orders() -> CollectionView<Order> {
        CollectionView::new(mock::orders(), NaiveDate::from_ymd_opt(2024, 3, 20).unwrap())
    }

    fn dispute(reason: &str) -> DisputeArgs {
        DisputeArgs {
            reason: reason.to_string(),
            description: "The delivered files are missing half of the pages.".to_string(),
        }
    }

    #[test]
    fn test_file_dispute_attaches_to_order() {
        let mut view = orders();
        file_dispute(&mut view, 3, dispute("quality"), &TextLimits::default()).unwrap();
        let order = view.find(&3).unwrap();
        assert_eq!(order.dispute.as_ref().unwrap().reason, "quality");
        assert!(!can_dispute(order));
    }

    #[test]
    fn test_dispute_twice_is_refused() {
        let mut view = orders();
        file_dispute(&mut view, 1, dispute("late"), &TextLimits::default()).unwrap();
        let err = file_dispute(&mut view, 1, dispute("late"), &TextLimits::default()).unwrap_err();
        assert!(matches!(err, CommandError::InvalidState(_)));
    }

    #[test]
    fn test_cancelled_order_cannot_be_disputed() {
        let mut view = orders();
        let err = file_dispute(&mut view, 4, dispute("other"), &TextLimits::default()).unwrap_err();
        assert_eq!(err, CommandError::InvalidState("Cancelled orders cannot be disputed".to_string()));
        assert!(view.find(&4).unwrap().dispute.is_none());
    }

    #[test]
    fn test_dispute_validation_blocks_action() {
        let mut view = orders();
        let args = DisputeArgs { reason: "bogus".to_string(), description: "too short".to_string() };
        let errors = file_dispute(&mut view, 3, args, &TextLimits::default()).unwrap_err().field_errors();
        assert!(errors.has("reason"));
        assert!(errors.has("description"));
        assert!(view.find(&3).unwrap().dispute.is_none());
    }

    #[test]
    fn test_dispute_unknown_order() {
        let mut view = orders();
        let err = file_dispute(&mut view, 99, dispute("other"), &TextLimits::default()).unwrap_err();
        assert_eq!(err, CommandError::NotFound("order #99".to_string()));
    }

    #[test]
    fn test_rate_completed_order() {
        let mut view = orders();
        let args = RateArgs { stars: 5, comment: " Great logo ".to_string() };
        rate_order(&mut view, 2, args.clone(), &TextLimits::default()).unwrap();
        assert_eq!(view.find(&2).unwrap().rating.as_ref().unwrap().comment, "Great logo");

        let err = rate_order(&mut view, 2, args, &TextLimits::default()).unwrap_err();
        assert!(matches!(err, CommandError::InvalidState(_)));
    }

    #[test]
    fn test_rate_requires_finished_order_and_valid_stars() {
        let mut view = orders();
        let err = rate_order(&mut view, 5, RateArgs { stars: 4, comment: String::new() }, &TextLimits::default())
            .unwrap_err();
        assert!(matches!(err, CommandError::InvalidState(_)));

        let err = rate_order(&mut view, 3, RateArgs { stars: 0, comment: String::new() }, &TextLimits::default())
            .unwrap_err();
        assert!(err.field_errors().has("stars"));
    }

    #[test]
    fn test_annotations_survive_filtering() {
        let mut view = orders();
        rate_order(&mut view, 3, RateArgs { stars: 4, comment: String::new() }, &TextLimits::default()).unwrap();
        view.set_criteria(collection_view::CriteriaPatch::new().facet("status", "delivered"));
        let derived = view.derive();
        assert_eq!(derived.len(), 1);
        assert_eq!(derived[0].rating.as_ref().map(|r| r.stars), Some(4));
    }
}
