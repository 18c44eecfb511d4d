use std::time::Duration;

// Renders whole hours, minutes and seconds, largest unit first, e.g.
// "2h5m" or "45s". Sub-second slack is not worth printing.
pub(crate) fn duration_to_human_str(d: Duration) -> String {
    let total = d.as_secs();
    let (h, m, s) = (total / 3600, (total % 3600) / 60, total % 60);
    let mut out = String::new();
    if h > 0 {
        out.push_str(&format!("{h}h"));
    }
    if m > 0 {
        out.push_str(&format!("{m}m"));
    }
    if s > 0 || out.is_empty() {
        out.push_str(&format!("{s}s"));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_to_human_str() {
        assert_eq!(duration_to_human_str(Duration::ZERO), "0s");
        assert_eq!(duration_to_human_str(Duration::from_secs(45)), "45s");
        assert_eq!(duration_to_human_str(Duration::from_secs(300)), "5m");
        assert_eq!(
            duration_to_human_str(Duration::from_secs(2 * 3600 + 305)),
            "2h5m5s"
        );
        assert_eq!(
            duration_to_human_str(Duration::from_secs(10 * 3600)),
            "10h"
        );
    }
}
