//! Checks that turn a [`CreateOrderRequest`] into the parts of an [`Order`](crate::model::Order).
//!
//! Rules run in a fixed order and the first failure wins:
//!
//! 1. the body decodes ([`decode_request`])
//! 2. items are present and well formed ([`check_items`])
//! 3. the delivery type is known ([`check_delivery_type`])
//! 4. `deliver` orders carry an address ([`check_address`])
//! 5. amounts are present, and add up under [`TotalsPolicy::Strict`] ([`check_totals`])

use super::OrderError;
use crate::model::{CreateOrderRequest, DeliveryAddress, DeliveryType, OrderLine, OrderLineRequest};

/// Tolerance for [`TotalsPolicy::Strict`], half a cent.
const TOTALS_EPSILON: f64 = 0.005;

/// How much the server trusts client-computed amounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TotalsPolicy {
    /// Accept whatever subtotal, fee and total the client sends.
    #[default]
    Trusting,
    /// Require `subtotal + deliveryFee == total`.
    Strict,
}

/// A request that passed every check.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedOrder {
    pub items: Vec<OrderLine>,
    pub delivery_type: DeliveryType,
    pub address: Option<DeliveryAddress>,
    pub subtotal: f64,
    pub delivery_fee: f64,
    pub total: f64,
}

/// Decodes a JSON body into a [`CreateOrderRequest`].
pub fn decode_request(body: &[u8]) -> Result<CreateOrderRequest, OrderError> {
    serde_json::from_slice(body).map_err(|e| OrderError::MalformedRequest(e.to_string()))
}

/// Runs checks 2 to 5 on a decoded request.
pub fn validate(request: CreateOrderRequest, totals: TotalsPolicy) -> Result<ValidatedOrder, OrderError> {
    let items = check_items(request.items)?;
    let delivery_type = check_delivery_type(request.delivery_type.as_deref())?;
    let address = check_address(delivery_type, request.address)?;
    let (subtotal, delivery_fee, total) =
        check_totals(request.subtotal, request.delivery_fee, request.total, totals)?;

    Ok(ValidatedOrder {
        items,
        delivery_type,
        address,
        subtotal,
        delivery_fee,
        total,
    })
}

pub fn check_items(items: Vec<OrderLineRequest>) -> Result<Vec<OrderLine>, OrderError> {
    if items.is_empty() {
        return Err(OrderError::InvalidItem("order has no items".to_string()));
    }
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| check_item(index, item))
        .collect()
}

fn check_item(index: usize, item: OrderLineRequest) -> Result<OrderLine, OrderError> {
    let invalid = |reason: &str| OrderError::InvalidItem(format!("item {index}: {reason}"));

    let quantity = match item.quantity {
        None => return Err(invalid("quantity is required")),
        Some(q) if q < 1 => return Err(invalid("quantity must be at least 1")),
        Some(q) => u32::try_from(q).map_err(|_| invalid("quantity is too large"))?,
    };

    Ok(OrderLine {
        coffee_id: required(index, item.coffee_id, "coffeeId")?,
        name: required(index, item.name, "name")?,
        description: item.description.unwrap_or_default(),
        price: item.price.ok_or_else(|| invalid("price is required"))?,
        size: required(index, item.size, "size")?,
        quantity,
    })
}

fn required(index: usize, value: Option<String>, field: &str) -> Result<String, OrderError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(OrderError::InvalidItem(format!("item {index}: {field} is required"))),
    }
}

pub fn check_delivery_type(delivery_type: Option<&str>) -> Result<DeliveryType, OrderError> {
    let raw = delivery_type.unwrap_or_default();
    raw.parse()
        .map_err(|_| OrderError::InvalidDeliveryType(raw.to_string()))
}

/// Only presence is checked; the address contents are taken as sent.
pub fn check_address(
    delivery_type: DeliveryType,
    address: Option<DeliveryAddress>,
) -> Result<Option<DeliveryAddress>, OrderError> {
    if delivery_type.requires_address() && address.is_none() {
        return Err(OrderError::MissingAddress);
    }
    Ok(address)
}

/// Returns `(subtotal, delivery_fee, total)`. A missing fee counts as zero.
pub fn check_totals(
    subtotal: Option<f64>,
    delivery_fee: Option<f64>,
    total: Option<f64>,
    policy: TotalsPolicy,
) -> Result<(f64, f64, f64), OrderError> {
    let subtotal = subtotal.ok_or(OrderError::MissingAmount("subtotal"))?;
    let total = total.ok_or(OrderError::MissingAmount("total"))?;
    let delivery_fee = delivery_fee.unwrap_or_default();

    if policy == TotalsPolicy::Strict && (subtotal + delivery_fee - total).abs() > TOTALS_EPSILON {
        return Err(OrderError::TotalsMismatch {
            subtotal,
            delivery_fee,
            total,
        });
    }

    Ok((subtotal, delivery_fee, total))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(value: serde_json::Value) -> CreateOrderRequest {
        decode_request(value.to_string().as_bytes()).unwrap()
    }

    fn line() -> serde_json::Value {
        json!({"coffeeId": "2", "name": "Flat White", "price": "3.53", "size": "M", "quantity": 2})
    }

    #[test]
    fn test_pickup_without_address_is_valid() {
        let valid = validate(
            request(json!({"items": [line()], "deliveryType": "pickup", "subtotal": 7.06, "total": 7.06})),
            TotalsPolicy::Trusting,
        )
        .unwrap();
        assert_eq!(valid.delivery_type, DeliveryType::Pickup);
        assert_eq!(valid.address, None);
        assert_eq!(valid.delivery_fee, 0.0);
        assert_eq!(valid.items[0].price.to_string(), "3.53");
        assert_eq!(valid.items[0].description, "");
    }

    #[test]
    fn test_undecodable_bodies_are_malformed() {
        for body in [
            "not json",
            r#"{"deliveryType": "pickup"}"#,
            r#"{"items": "nope"}"#,
            r#"{"items": [{"quantity": "two"}]}"#,
            r#"{"items": [{"price": "cheap"}]}"#,
            r#"{"items": [{"coffeeId": "2", "name": "Flat White", "price": 3.53, "size": "M", "quantity": 1}], "deliveryType": "pickup", "subtotal": 3.53, "total": 3.53}"#,
        ] {
            assert!(
                matches!(decode_request(body.as_bytes()), Err(OrderError::MalformedRequest(_))),
                "{body} should be malformed"
            );
        }
    }

    #[test]
    fn test_empty_items_is_invalid_item() {
        let err = validate(
            request(json!({"items": [], "deliveryType": "pickup", "subtotal": 1.0, "total": 1.0})),
            TotalsPolicy::Trusting,
        )
        .unwrap_err();
        assert!(matches!(err, OrderError::InvalidItem(_)));
    }

    #[test]
    fn test_bad_items() {
        let cases = [
            (json!({"coffeeId": "1", "name": "x", "price": "1", "size": "S", "quantity": 0}), "quantity must be at least 1"),
            (json!({"coffeeId": "1", "name": "x", "price": "1", "size": "S"}), "quantity is required"),
            (json!({"coffeeId": "1", "name": "x", "price": "1", "quantity": 1}), "size is required"),
            (json!({"coffeeId": "", "name": "x", "price": "1", "size": "S", "quantity": 1}), "coffeeId is required"),
            (json!({"coffeeId": "1", "name": "x", "size": "S", "quantity": 1}), "price is required"),
        ];
        for (item, reason) in cases {
            let err = check_items(vec![serde_json::from_value(item).unwrap()]).unwrap_err();
            assert_eq!(err, OrderError::InvalidItem(format!("item 0: {reason}")));
        }
    }

    #[test]
    fn test_item_errors_win_over_delivery_type() {
        let err = validate(
            request(json!({"items": [], "deliveryType": "teleport"})),
            TotalsPolicy::Trusting,
        )
        .unwrap_err();
        assert!(matches!(err, OrderError::InvalidItem(_)));
    }

    #[test]
    fn test_delivery_type_wins_over_address() {
        let err = validate(
            request(json!({"items": [line()], "deliveryType": "drone", "subtotal": 7.06, "total": 7.06})),
            TotalsPolicy::Trusting,
        )
        .unwrap_err();
        assert_eq!(err, OrderError::InvalidDeliveryType("drone".to_string()));
    }

    #[test]
    fn test_address_wins_over_amounts() {
        let err = validate(
            request(json!({"items": [line()], "deliveryType": "deliver"})),
            TotalsPolicy::Strict,
        )
        .unwrap_err();
        assert_eq!(err, OrderError::MissingAddress);
    }

    #[test]
    fn test_string_price_keeps_its_digits() {
        let mut item = line();
        item["price"] = json!("3.530");
        let valid = validate(
            request(json!({"items": [item], "deliveryType": "pickup", "subtotal": 7.06, "total": 7.06})),
            TotalsPolicy::Trusting,
        )
        .unwrap();
        assert_eq!(serde_json::to_value(&valid.items[0]).unwrap()["price"], "3.530");
    }

    #[test]
    fn test_delivery_type_must_match_exactly() {
        assert_eq!(check_delivery_type(Some("deliver")), Ok(DeliveryType::Deliver));
        assert_eq!(
            check_delivery_type(Some("Deliver")),
            Err(OrderError::InvalidDeliveryType("Deliver".to_string()))
        );
        assert_eq!(
            check_delivery_type(None),
            Err(OrderError::InvalidDeliveryType(String::new()))
        );
    }

    #[test]
    fn test_deliver_requires_address() {
        let missing = request(json!({"items": [line()], "deliveryType": "deliver", "subtotal": 7.06, "total": 9.06}));
        assert_eq!(validate(missing, TotalsPolicy::Trusting), Err(OrderError::MissingAddress));

        let null = request(json!({"items": [line()], "deliveryType": "deliver", "address": null, "subtotal": 7.06, "total": 9.06}));
        assert_eq!(validate(null, TotalsPolicy::Trusting), Err(OrderError::MissingAddress));

        let empty_object = request(json!({"items": [line()], "deliveryType": "deliver", "address": {}, "subtotal": 7.06, "total": 9.06}));
        let valid = validate(empty_object, TotalsPolicy::Trusting).unwrap();
        assert_eq!(valid.address, Some(DeliveryAddress::default()));
    }

    #[test]
    fn test_missing_amounts() {
        assert_eq!(
            check_totals(None, None, Some(1.0), TotalsPolicy::Trusting),
            Err(OrderError::MissingAmount("subtotal"))
        );
        assert_eq!(
            check_totals(Some(1.0), Some(0.5), None, TotalsPolicy::Trusting),
            Err(OrderError::MissingAmount("total"))
        );
    }

    #[test]
    fn test_totals_policy() {
        // Trusting accepts numbers that do not add up.
        assert_eq!(
            check_totals(Some(7.06), Some(2.0), Some(1.0), TotalsPolicy::Trusting),
            Ok((7.06, 2.0, 1.0))
        );
        assert!(matches!(
            check_totals(Some(7.06), Some(2.0), Some(1.0), TotalsPolicy::Strict),
            Err(OrderError::TotalsMismatch { .. })
        ));
        assert!(check_totals(Some(7.06), Some(2.0), Some(9.06), TotalsPolicy::Strict).is_ok());
    }
}
