//! Human-readable size formatting.

/// Format a textual byte count into a display magnitude.
///
/// Total: unparsable input yields `"???"`, everything else a label.
/// Kilobytes and megabytes truncate to integers; gigabytes keep two
/// decimals. Promotion happens at 1000 exactly, so 999 kb stays in kb and
/// 1000 kb becomes 1 Mb.
pub fn format_size(raw: &str) -> String {
    let bytes: f64 = match raw.parse() {
        Ok(b) => b,
        Err(_) => return "???".to_string(),
    };

    let kilobytes = bytes / 1024.0;
    if kilobytes < 1000.0 {
        return format!("{} kb", kilobytes as i64);
    }

    let megabytes = kilobytes / 1000.0;
    if megabytes < 1000.0 {
        return format!("{} Mb", megabytes as i64);
    }

    let gigabytes = megabytes / 1000.0;
    format!("{:.2} Gb", gigabytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_sizes_stay_in_kilobytes() {
        assert_eq!(format_size("512"), "0 kb");
        assert_eq!(format_size("10240"), "10 kb");
    }

    #[test]
    fn test_megabytes() {
        assert_eq!(format_size("2097152"), "2 Mb");
    }

    #[test]
    fn test_kilobyte_boundary_is_exclusive() {
        // 999 kb stays in kb, 1000 kb promotes to Mb.
        assert_eq!(format_size(&(999.0f64 * 1024.0).to_string()), "999 kb");
        assert_eq!(format_size(&(1000.0f64 * 1024.0).to_string()), "1 Mb");
    }

    #[test]
    fn test_megabyte_boundary_is_exclusive() {
        // Exactly 1000 Mb promotes to 1.00 Gb, never "1000 Mb".
        let bytes = 1000.0f64 * 1000.0 * 1024.0;
        assert_eq!(format_size(&bytes.to_string()), "1.00 Gb");
    }

    #[test]
    fn test_gigabytes_keep_two_decimals() {
        let bytes = 2500.0f64 * 1000.0 * 1024.0;
        assert_eq!(format_size(&bytes.to_string()), "2.50 Gb");
    }

    #[test]
    fn test_unparsable_input() {
        assert_eq!(format_size("abc"), "???");
        assert_eq!(format_size(""), "???");
    }
}
