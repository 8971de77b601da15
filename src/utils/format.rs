//! Compact number and duration strings for display.

const SUFFIXES: [&str; 14] = [
    "K", "M", "B", "T", "Qa", "Qi", "Sx", "Sp", "Oc", "No", "Dc", "Ud", "Dd", "Td",
];

/// Formats an energy amount: `7.25`, `950`, `1.50K`, `2.00M`, `∞`.
pub fn format_amount(n: f64) -> String {
    if !n.is_finite() {
        return "∞".to_string();
    }
    if n < 1_000.0 {
        return if n < 10.0 {
            format!("{:.2}", n)
        } else {
            format!("{:.0}", n)
        };
    }

    let mut value = n;
    let mut suffix = "";
    for s in SUFFIXES {
        if value < 1_000.0 {
            break;
        }
        value /= 1_000.0;
        suffix = s;
    }
    format!("{:.2}{}", value, suffix)
}

/// Formats a duration in milliseconds using its two largest units.
pub fn format_duration(ms: i64) -> String {
    let seconds = ms.max(0) / 1000;
    let minutes = seconds / 60;
    let hours = minutes / 60;
    let days = hours / 24;

    if days > 0 {
        format!("{}d {}h", days, hours % 24)
    } else if hours > 0 {
        format!("{}h {}m", hours, minutes % 60)
    } else if minutes > 0 {
        format!("{}m {}s", minutes, seconds % 60)
    } else {
        format!("{}s", seconds)
    }
}
