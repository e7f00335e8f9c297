/// First page when the caller supplies no usable page number
pub const DEFAULT_PAGE: u64 = 1;

/// Page size when the caller supplies no usable limit
pub const DEFAULT_LIMIT: u64 = 6;

/// Parse a raw pagination parameter, falling back to the default when the
/// value is absent, non-numeric, zero, or negative. Parse failures never
/// error; the catalog route always answers.
pub fn parse_positive_or(raw: Option<&str>, default: u64) -> u64 {
    raw.and_then(|s| s.trim().parse::<i64>().ok())
        .filter(|v| *v > 0)
        .map(|v| v as u64)
        .unwrap_or(default)
}
