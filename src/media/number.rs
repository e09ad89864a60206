use serde_json::Number;

/// Truncates a JSON number to an unsigned integer.
///
/// Integers pass through, floats keep their integer part. Negative values and
/// NaN become 0, values past `u64::MAX` saturate.
pub(crate) fn to_u64(n: &Number) -> u64 {
    if let Some(v) = n.as_u64() {
        return v;
    }
    if n.is_i64() {
        return 0;
    }
    // `as` saturates and maps NaN to 0
    n.as_f64().map(|f| f as u64).unwrap_or(0)
}

pub(crate) fn to_u32(n: &Number) -> u32 {
    u32::try_from(to_u64(n)).unwrap_or(u32::MAX)
}

/// Resolves an optional wire number to a timestamp, 0 when absent.
pub(crate) fn timestamp(n: Option<&Number>) -> u64 {
    n.map(to_u64).unwrap_or_default()
}

/// Resolves an optional wire number to a count, 0 when absent.
pub(crate) fn count(n: Option<&Number>) -> u32 {
    n.map(to_u32).unwrap_or_default()
}
