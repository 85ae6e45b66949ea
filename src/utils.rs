//! Shared utility functions for storyscope

/// Round to `decimals` places, ties to even
#[inline]
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round_ties_even() / factor
}

/// First `max_chars` characters of `s`, for log lines.
/// Cuts on a char boundary so multi-byte text never panics.
pub fn preview(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(69.18863237274595, 1), 69.2);
        assert_eq!(round_to(2.3333333, 2), 2.33);
        assert_eq!(round_to(20.0, 1), 20.0);
        assert_eq!(round_to(1.25, 1), 1.2);
        assert_eq!(round_to(1.125, 2), 1.12);
        assert_eq!(round_to(2.375, 2), 2.38);
    }

    #[test]
    fn test_preview() {
        assert_eq!(preview("hello world", 5), "hello");
        assert_eq!(preview("hello", 10), "hello");
        assert_eq!(preview("", 5), "");
        assert_eq!(preview("café ☕ time", 6), "café ☕");
    }
}
