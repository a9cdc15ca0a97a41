use dusage_domain::{CategoryUsage, DiskUsageSummary};

/// Decimal units, the way the engine CLI prints sizes.
pub fn human_size(bytes: i64) -> String {
    const UNITS: [&str; 6] = ["B", "kB", "MB", "GB", "TB", "PB"];
    let mut value = bytes.max(0) as f64;
    let mut unit = 0;
    while value >= 1000.0 && unit < UNITS.len() - 1 {
        value /= 1000.0;
        unit += 1;
    }
    let digits = format!("{value:.2}");
    let digits = digits.trim_end_matches('0').trim_end_matches('.');
    format!("{}{}", digits, UNITS[unit])
}

fn reclaimable(usage: &CategoryUsage) -> String {
    let size = human_size(usage.reclaimable_bytes);
    if usage.size_bytes > 0 {
        let pct = i128::from(usage.reclaimable_bytes) * 100 / i128::from(usage.size_bytes);
        format!("{size} ({pct}%)")
    } else {
        size
    }
}

pub fn summary_table(summary: &DiskUsageSummary) -> String {
    let rows = [
        ("Images", &summary.images),
        ("Containers", &summary.containers),
        ("Local Volumes", &summary.volumes),
        ("Build Cache", &summary.build_cache),
    ];

    let mut out = format!(
        "{:<16}{:<8}{:<8}{:<12}{}\n",
        "TYPE", "TOTAL", "ACTIVE", "SIZE", "RECLAIMABLE"
    );
    for (name, usage) in rows {
        out.push_str(&format!(
            "{:<16}{:<8}{:<8}{:<12}{}\n",
            name,
            usage.total,
            usage.active,
            human_size(usage.size_bytes),
            reclaimable(usage)
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_human_size() {
        assert_eq!(human_size(0), "0B");
        assert_eq!(human_size(999), "999B");
        assert_eq!(human_size(1000), "1kB");
        assert_eq!(human_size(4_400_000), "4.4MB");
        assert_eq!(human_size(1_234_567_890), "1.23GB");
        assert_eq!(human_size(-5), "0B");
    }

    #[test]
    fn test_summary_table_rows() {
        let summary = DiskUsageSummary {
            images: CategoryUsage { total: 3, active: 1, size_bytes: 2_000, reclaimable_bytes: 500 },
            ..Default::default()
        };
        let table = summary_table(&summary);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines[0].starts_with("TYPE"));
        assert!(lines[1].starts_with("Images"));
        assert!(lines[1].contains("2kB"));
        assert!(lines[1].ends_with("500B (25%)"));
        assert!(lines[4].starts_with("Build Cache"));
    }

    #[test]
    fn test_reclaimable_percent_of_huge_sizes() {
        let usage = CategoryUsage {
            total: 2,
            active: 0,
            size_bytes: i64::MAX,
            reclaimable_bytes: i64::MAX,
        };
        assert!(reclaimable(&usage).ends_with("(100%)"));
    }
}
