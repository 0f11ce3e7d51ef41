/// Rounding applied to displayed transfer amounts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundingMode {
    /// Emit amounts unchanged.
    None,
    /// Round to the nearest 1000 base units, preserving exact midpoints.
    Smart,
}

/// Currency-friendly rounding for transfer amounts.
///
/// Smart mode rounds to the nearest 1000 with one quirk kept from the
/// original behavior: a remainder of exactly 500 is returned unchanged
/// instead of being pushed to either neighbor.
///
/// Rounding is cosmetic. Planners apply it to the emitted amount only and
/// keep matching on unrounded balances, so the error never compounds across
/// matched pairs.
pub fn smart_round(amount: f64, mode: RoundingMode) -> f64 {
    match mode {
        RoundingMode::None => amount,
        RoundingMode::Smart => {
            let remainder = amount % 1000.0;
            if remainder == 500.0 {
                amount
            } else if remainder < 500.0 {
                (amount / 1000.0).floor() * 1000.0
            } else {
                (amount / 1000.0).ceil() * 1000.0
            }
        }
    }
}
