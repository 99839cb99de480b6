// SPDX-License-Identifier: GPL-3.0-only

//! Common formatting helpers shared across models

use num_format::{Locale, ToFormattedString};

/// Convert bytes to human-readable format (e.g., "1.50 GB")
pub fn bytes_to_pretty(bytes: &u64, add_bytes: bool) -> String {
    let mut steps = 0;
    let mut val: f64 = *bytes as f64;

    while val > 1024. && steps <= 8 {
        val /= 1024.;
        steps += 1;
    }

    let unit = match steps {
        0 => "B",
        1 => "KB",
        2 => "MB",
        3 => "GB",
        4 => "TB",
        5 => "PB",
        6 => "EB",
        7 => "ZB",
        8 => "YB",
        _ => "Not Supported",
    };

    if add_bytes {
        let bytes_str = bytes.to_formatted_string(&Locale::en);
        format!("{:.2} {} ({} bytes)", val, unit, bytes_str)
    } else {
        format!("{:.2} {}", val, unit)
    }
}

/// Short power-of-two size label used by the format dialog ("4K", "1M").
pub fn size_label(bytes: u32) -> String {
    if bytes >= 1024 * 1024 && bytes % (1024 * 1024) == 0 {
        format!("{}M", bytes / (1024 * 1024))
    } else if bytes >= 1024 && bytes % 1024 == 0 {
        format!("{}K", bytes / 1024)
    } else {
        bytes.to_string()
    }
}
