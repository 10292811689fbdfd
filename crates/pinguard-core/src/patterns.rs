//! Stateless recognizers for weak numeric patterns
//!
//! Every matcher is a total function over arbitrary strings. Digit-based
//! matchers only recognise ASCII `0-9`; any other character simply breaks a
//! run or a series, it never causes a failure.

/// Keypad cross sweeps (diagonals of a 3x3 phone keypad, in either order)
pub const CROSS_PATTERNS: [&str; 8] = [
    "159753", "159357", "951357", "951753", "357159", "357951", "753159", "753951",
];

/// Full ascending run of odd digits
pub const ODD_SERIES: &str = "13579";

/// Full ascending run of even digits
pub const EVEN_SERIES: &str = "02468";

/// Length of a consecutive ascending/descending series
const SERIES_LENGTH: usize = 3;

/// Exact match against one of the keypad cross sweeps
///
/// Containment does not count: `"1597530"` is not a cross pattern.
pub fn is_cross_pattern(pin: &str) -> bool {
    CROSS_PATTERNS.contains(&pin)
}

/// Whether the PIN contains the full odd or even ascending series
pub fn has_odd_or_even_series(pin: &str) -> bool {
    pin.contains(ODD_SERIES) || pin.contains(EVEN_SERIES)
}

/// Whether any three adjacent digits step by +1 or -1 (`456`, `210`, ...)
///
/// `9` followed by `0` is not a step, so `890` and `901` never match.
pub fn has_consecutive_series(pin: &str) -> bool {
    pin.as_bytes()
        .windows(SERIES_LENGTH)
        .any(is_consecutive_series)
}

fn is_consecutive_series(window: &[u8]) -> bool {
    if !window.iter().all(u8::is_ascii_digit) {
        return false;
    }

    let step = i16::from(window[1]) - i16::from(window[0]);
    (step == 1 || step == -1)
        && window
            .windows(2)
            .all(|pair| i16::from(pair[1]) - i16::from(pair[0]) == step)
}

/// Longest run of the same digit in direct succession
pub fn longest_digit_run(pin: &str) -> usize {
    longest_run(pin.as_bytes().chunks(1))
}

/// Longest run of the same two-digit unit repeated back to back
///
/// A repeating unit may start at any position, so both pair alignments are
/// scanned.
pub fn longest_pair_run(pin: &str) -> usize {
    let bytes = pin.as_bytes();
    (0..2)
        .filter_map(|offset| bytes.get(offset..))
        .map(|stream| longest_run(stream.chunks_exact(2)))
        .max()
        .unwrap_or(0)
}

/// Whether `min_run` or more identical digits appear in succession
pub fn has_repeated_digits(pin: &str, min_run: u32) -> bool {
    longest_digit_run(pin) >= run_floor(min_run)
}

/// Whether some digit pair repeats immediately `min_repeats` or more times
pub fn has_repeated_digit_pairs(pin: &str, min_repeats: u32) -> bool {
    longest_pair_run(pin) >= run_floor(min_repeats)
}

/// Non-empty and made of ASCII digits only
pub fn is_digits_only(pin: &str) -> bool {
    !pin.is_empty() && pin.bytes().all(|b| b.is_ascii_digit())
}

/// A threshold of zero behaves like one: any digit unit is already a run.
fn run_floor(threshold: u32) -> usize {
    threshold.max(1) as usize
}

/// Single linear pass counting equal consecutive units.
/// Units holding anything but ASCII digits reset the count.
fn longest_run<'a>(units: impl Iterator<Item = &'a [u8]>) -> usize {
    let mut longest = 0;
    let mut current = 0;
    let mut previous: Option<&[u8]> = None;

    for unit in units {
        if !unit.iter().all(u8::is_ascii_digit) {
            previous = None;
            current = 0;
            continue;
        }

        current = if previous == Some(unit) { current + 1 } else { 1 };
        previous = Some(unit);
        longest = longest.max(current);
    }

    longest
}
