/// Rounds half-way cases toward positive infinity.
///
/// `-2.5` rounds to `-2.0`, unlike [`f64::round`] which rounds away from zero.
pub fn round_half_up(v: f64) -> f64 {
    (v + 0.5).floor()
}

/// Truncates toward zero and converts to a cell index.
pub(crate) fn truncate_index(v: f64) -> i64 {
    v.trunc() as i64
}
