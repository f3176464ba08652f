/// The digit no ticket number may contain.
pub const EXCLUDED_DIGIT: u64 = 4;

/// Largest number of integers a configured range may span.
pub const MAX_RANGE_SPAN: u64 = 1_000_000;

pub fn contains_digit_4(n: i64) -> bool {
    let mut rest = n.unsigned_abs();
    loop {
        if rest % 10 == EXCLUDED_DIGIT {
            return true;
        }
        rest /= 10;
        if rest == 0 {
            return false;
        }
    }
}

/// Ticket numbers in `[start, end]` (inclusive) that do not contain a 4, ascending.
pub fn eligible_numbers(start: i64, end: i64) -> Vec<i64> {
    (start..=end).filter(|&n| !contains_digit_4(n)).collect()
}

/// Number of integers in `[start, end]`, or 0 when the range is empty.
pub fn range_span(start: i64, end: i64) -> u64 {
    if end < start {
        0
    } else {
        end.abs_diff(start).saturating_add(1)
    }
}
