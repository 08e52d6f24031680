//! Trade and book rendering
//!
//! Trades print as bare CSV lines, one per trade. The book prints as a
//! fixed-width two-sided table: bid columns Id/Volume/Price mirrored by
//! ask columns Price/Volume/Id, one row per resting order pair, best
//! priority first. Volumes and prices carry thousands separators; ids
//! and the CSV stream do not. Icebergs show their visible slice only.

use std::fmt::{self, Write};

use matching_engine::MatchingEngine;
use types::order::Order;
use types::trade::Trade;

const ID_COLUMN_WIDTH: usize = 10;
const VOLUME_COLUMN_WIDTH: usize = 13;
const PRICE_COLUMN_WIDTH: usize = 7;

const HALF_COLUMN_WIDTH: usize = 32;
const TOTAL_COLUMN_WIDTH: usize = 65;

/// Format trades as CSV lines: `buy_id,sell_id,price,quantity`.
pub fn render_trades(trades: &[Trade]) -> String {
    let mut out = String::new();
    for trade in trades {
        let _ = writeln!(
            out,
            "{},{},{},{}",
            trade.buy_order_id, trade.sell_order_id, trade.price, trade.quantity
        );
    }
    out
}

/// Format the full book as a fixed-width table.
pub fn render_book(engine: &MatchingEngine) -> String {
    let mut out = String::new();
    write_book(engine, &mut out).expect("formatting into a String cannot fail");
    out
}

fn write_book(engine: &MatchingEngine, out: &mut impl Write) -> fmt::Result {
    // +-----------------------------------------------------------------+
    writeln!(out, "+{:-<TOTAL_COLUMN_WIDTH$}+", "")?;

    // | BUY                            | SELL                           |
    writeln!(
        out,
        "|{:<HALF_COLUMN_WIDTH$}|{:<HALF_COLUMN_WIDTH$}|",
        " BUY ", " SELL "
    )?;

    // | Id       | Volume      | Price | Price | Volume      | Id       |
    writeln!(
        out,
        "|{:<ID_COLUMN_WIDTH$}|{:<VOLUME_COLUMN_WIDTH$}|{:<PRICE_COLUMN_WIDTH$}\
         |{:<PRICE_COLUMN_WIDTH$}|{:<VOLUME_COLUMN_WIDTH$}|{:<ID_COLUMN_WIDTH$}|",
        " Id ", " Volume ", " Price ", " Price ", " Volume ", " Id "
    )?;

    // +----------+-------------+-------+-------+-------------+----------+
    writeln!(
        out,
        "+{:-<ID_COLUMN_WIDTH$}+{:-<VOLUME_COLUMN_WIDTH$}+{:-<PRICE_COLUMN_WIDTH$}\
         +{:-<PRICE_COLUMN_WIDTH$}+{:-<VOLUME_COLUMN_WIDTH$}+{:-<ID_COLUMN_WIDTH$}+",
        "", "", "", "", "", ""
    )?;

    // The i-th best bid pairs with the i-th best ask, blank-filled once
    // one side runs out.
    let mut bids = engine.bids();
    let mut asks = engine.asks();
    loop {
        let (bid, ask) = (bids.next(), asks.next());
        if bid.is_none() && ask.is_none() {
            break;
        }
        write_bid_cells(bid, out)?;
        write_ask_cells(ask, out)?;
        writeln!(out, "|")?;
    }

    writeln!(out, "+{:-<TOTAL_COLUMN_WIDTH$}+", "")
}

fn write_bid_cells(order: Option<&Order>, out: &mut impl Write) -> fmt::Result {
    match order {
        Some(order) => write!(
            out,
            "|{:>ID_COLUMN_WIDTH$}|{:>VOLUME_COLUMN_WIDTH$}|{:>PRICE_COLUMN_WIDTH$}",
            order.id().to_string(),
            group_digits(order.visible_volume().as_i64()),
            group_digits(order.price().ticks() as i64),
        ),
        None => write!(
            out,
            "|{:ID_COLUMN_WIDTH$}|{:VOLUME_COLUMN_WIDTH$}|{:PRICE_COLUMN_WIDTH$}",
            "", "", ""
        ),
    }
}

fn write_ask_cells(order: Option<&Order>, out: &mut impl Write) -> fmt::Result {
    match order {
        Some(order) => write!(
            out,
            "|{:>PRICE_COLUMN_WIDTH$}|{:>VOLUME_COLUMN_WIDTH$}|{:>ID_COLUMN_WIDTH$}",
            group_digits(order.price().ticks() as i64),
            group_digits(order.visible_volume().as_i64()),
            order.id().to_string(),
        ),
        None => write!(
            out,
            "|{:PRICE_COLUMN_WIDTH$}|{:VOLUME_COLUMN_WIDTH$}|{:ID_COLUMN_WIDTH$}",
            "", "", ""
        ),
    }
}

/// Insert a comma every three digits from the right.
fn group_digits(value: i64) -> String {
    let digits = value.to_string();
    let sign_len = usize::from(digits.starts_with('-'));
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > sign_len && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
