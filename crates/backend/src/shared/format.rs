const KB: usize = 1024;
const MB: usize = 1024 * KB;

/// Размер для логов и сообщений: "512 B", "1.5 KB", "5 MB".
/// Дробная часть показывается одним знаком и опускается, если она нулевая.
pub fn format_bytes(n: usize) -> String {
    let (value, unit) = match n {
        n if n < KB => return format!("{} B", n),
        n if n < MB => (n as f64 / KB as f64, "KB"),
        n => (n as f64 / MB as f64, "MB"),
    };
    let rounded = (value * 10.0).round() / 10.0;
    if rounded.fract() == 0.0 {
        format!("{} {}", rounded as u64, unit)
    } else {
        format!("{:.1} {}", rounded, unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(0), "0 B");
        assert_eq!(format_bytes(1023), "1023 B");
        assert_eq!(format_bytes(1024), "1 KB");
        assert_eq!(format_bytes(1536), "1.5 KB");
        assert_eq!(format_bytes(5 * MB), "5 MB");
        assert_eq!(format_bytes(MB + MB / 4), "1.3 MB");
    }
}
