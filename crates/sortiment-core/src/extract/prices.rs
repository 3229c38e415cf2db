use rust_decimal::Decimal;
use std::str::FromStr;

use crate::rules::CatalogRules;

/// Bulk, suggested retail and recommended retail prices from one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceTriple {
    pub bulk: Decimal,
    pub srp: Decimal,
    pub rrp: Decimal,
}

/// Read a bulk/SRP/RRP triple from a price line.
///
/// With five or more price tokens the leading two are unit-cost columns and
/// the triple sits at positions 3..=5; with three or four it is the first
/// three. Fewer than three tokens yields `Ok(None)`.
pub fn parse_prices(
    line: &str,
    rules: &CatalogRules,
) -> Result<Option<PriceTriple>, rust_decimal::Error> {
    let tokens = rules.price_tokens(line);
    let offset = match tokens.len() {
        n if n >= 5 => 2,
        3 | 4 => 0,
        _ => return Ok(None),
    };

    Ok(Some(PriceTriple {
        bulk: Decimal::from_str(tokens[offset])?,
        srp: Decimal::from_str(tokens[offset + 1])?,
        rrp: Decimal::from_str(tokens[offset + 2])?,
    }))
}
