//! Transition timing inspection.
//!
//! Computed `transition-duration` / `transition-delay` values are
//! comma-separated lists with one entry per transitioning property, each in
//! seconds (`0.5s`) or milliseconds (`250ms`). The slider only needs to know
//! how long the slowest property takes to settle.

/// Raw computed-style strings for one slide.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TransitionTiming {
    pub duration: String,
    pub delay: String,
}

impl TransitionTiming {
    pub fn new(duration: impl Into<String>, delay: impl Into<String>) -> Self {
        Self {
            duration: duration.into(),
            delay: delay.into(),
        }
    }

    /// No transition declared (`0s`, `0s`).
    pub fn none() -> Self {
        Self::new("0s", "0s")
    }
}

/// Longest `duration[i] + delay[i]` across all transitioning properties, in
/// milliseconds. Never negative and never NaN.
pub fn transition_delay_ms(timing: &TransitionTiming) -> f64 {
    let durations = parse_time_list(&timing.duration);
    let delays = parse_time_list(&timing.delay);

    durations
        .iter()
        .enumerate()
        .map(|(i, duration)| {
            let sum = duration + delays.get(i).copied().unwrap_or(0.0);
            if sum.is_finite() {
                sum
            } else {
                0.0
            }
        })
        .fold(0.0, f64::max)
}

/// Parse a comma-separated CSS time list into milliseconds. Entries that do
/// not start with a number come back as NaN.
pub fn parse_time_list(list: &str) -> Vec<f64> {
    if list.trim().is_empty() {
        return Vec::new();
    }
    list.split(',').map(parse_time).collect()
}

/// Parse one CSS time entry into milliseconds.
pub fn parse_time(entry: &str) -> f64 {
    let entry = entry.trim().to_ascii_lowercase();
    let value = parse_float_prefix(&entry);
    if entry.contains("ms") {
        value
    } else {
        value * 1000.0
    }
}

/// Leading-number parse: reads the longest numeric prefix and ignores the
/// rest (`"0.5s"` -> 0.5). No numeric prefix yields NaN.
fn parse_float_prefix(s: &str) -> f64 {
    let bytes = s.trim_start().as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }
    let int_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    let mut digits = end - int_start;
    if bytes.get(end) == Some(&b'.') {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while bytes.get(frac_end).is_some_and(u8::is_ascii_digit) {
            frac_end += 1;
        }
        if digits > 0 || frac_end > frac_start {
            digits += frac_end - frac_start;
            end = frac_end;
        }
    }
    if digits == 0 {
        return f64::NAN;
    }
    if matches!(bytes.get(end), Some(b'e') | Some(b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while bytes.get(exp_end).is_some_and(u8::is_ascii_digit) {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    std::str::from_utf8(&bytes[..end])
        .ok()
        .and_then(|n| n.parse::<f64>().ok())
        .unwrap_or(f64::NAN)
}
