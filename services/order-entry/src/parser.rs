//! Order line parsing
//!
//! Protocol: `SIDE,id,price,quantity` for a plain limit order, with a
//! trailing `,peak` field for an iceberg order, where `SIDE` is `B` or
//! `S`. Whitespace is ignored anywhere in the line. Lines that do not
//! start with a side letter (blanks, comments, prompts) are silently
//! skipped; lines that do but fail validation are rejected with an
//! error so no malformed order ever reaches the engine.

use std::str::FromStr;

use types::ids::OrderId;
use types::numeric::{Price, Quantity};
use types::order::{Order, Side};

use crate::error::ParseError;

/// Parse one input line.
///
/// Returns `Ok(None)` for lines the protocol ignores, `Ok(Some(order))`
/// for a well-formed order, and `Err` for a malformed order line.
pub fn parse_line(line: &str) -> Result<Option<Order>, ParseError> {
    let stripped: String = line.chars().filter(|c| !c.is_whitespace()).collect();
    if !stripped.starts_with('B') && !stripped.starts_with('S') {
        return Ok(None);
    }

    let fields: Vec<&str> = stripped.split(',').collect();
    if fields.len() != 4 && fields.len() != 5 {
        return Err(ParseError::FieldCount(fields.len()));
    }

    let side = match fields[0] {
        "B" => Side::Buy,
        "S" => Side::Sell,
        other => return Err(ParseError::Side(other.to_string())),
    };

    let id = OrderId::new(parse_number::<u64>("id", fields[1])?);
    let price = parse_number::<i32>("price", fields[2])?;
    if price < 0 {
        return Err(ParseError::NegativePrice);
    }
    let quantity = parse_number::<i64>("quantity", fields[3])?;
    if quantity < 0 {
        return Err(ParseError::NegativeQuantity);
    }

    let order = match fields.get(4) {
        Some(peak_field) => {
            let peak = parse_number::<i64>("peak", peak_field)?;
            if peak <= 0 {
                return Err(ParseError::NonPositivePeak);
            }
            Order::iceberg(
                side,
                id,
                Price::new(price),
                Quantity::new(quantity),
                Quantity::new(peak),
            )
        }
        None => Order::limit(side, id, Price::new(price), Quantity::new(quantity)),
    };

    Ok(Some(order))
}

fn parse_number<T>(field: &'static str, raw: &str) -> Result<T, ParseError>
where
    T: FromStr<Err = std::num::ParseIntError>,
{
    raw.parse()
        .map_err(|source| ParseError::InvalidNumber { field, source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::order::OrderKind;

    fn parsed(line: &str) -> Order {
        parse_line(line).unwrap().unwrap()
    }

    #[test]
    fn test_parse_limit_order() {
        let order = parsed("B,100322,5103,7500");
        assert_eq!(order.side(), Side::Buy);
        assert_eq!(order.id(), OrderId::new(100322));
        assert_eq!(order.price(), Price::new(5103));
        assert_eq!(order.remaining_quantity(), Quantity::new(7500));
        assert_eq!(*order.kind(), OrderKind::Limit);
    }

    #[test]
    fn test_parse_iceberg_order() {
        let order = parsed("S,100345,5103,100000,10000");
        assert_eq!(order.side(), Side::Sell);
        assert_eq!(order.visible_volume(), Quantity::new(10000));
        assert_eq!(order.remaining_quantity(), Quantity::new(100000));
    }

    #[test]
    fn test_whitespace_is_ignored_anywhere() {
        let order = parsed("  B , 1 , 100 , 50 ");
        assert_eq!(order.id(), OrderId::new(1));
        assert_eq!(order.price(), Price::new(100));
    }

    #[test]
    fn test_non_order_lines_are_skipped() {
        assert_eq!(parse_line(""), Ok(None));
        assert_eq!(parse_line("   "), Ok(None));
        assert_eq!(parse_line("# comment"), Ok(None));
        assert_eq!(parse_line("hello,1,2,3"), Ok(None));
    }

    #[test]
    fn test_malformed_order_lines_are_rejected() {
        assert_eq!(parse_line("B,1,100"), Err(ParseError::FieldCount(3)));
        assert_eq!(
            parse_line("B,1,100,50,10,3"),
            Err(ParseError::FieldCount(6))
        );
        assert_eq!(
            parse_line("BX,1,100,50"),
            Err(ParseError::Side("BX".to_string()))
        );
        assert!(matches!(
            parse_line("B,x,100,50"),
            Err(ParseError::InvalidNumber { field: "id", .. })
        ));
        assert_eq!(parse_line("B,1,100,50,0"), Err(ParseError::NonPositivePeak));
    }

    #[test]
    fn test_zero_quantity_is_allowed() {
        let order = parsed("S,9,100,0");
        assert!(order.is_filled());
    }
}
