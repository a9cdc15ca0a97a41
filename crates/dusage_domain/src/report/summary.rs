use serde::Serialize;
use std::collections::HashSet;

use super::DiskUsageReport;

/// Totals for one kind of resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct CategoryUsage {
    pub total: usize,
    pub active: usize,
    pub size_bytes: i64,
    pub reclaimable_bytes: i64,
}

/// Per-category totals in the shape of `system df`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct DiskUsageSummary {
    pub images: CategoryUsage,
    pub containers: CategoryUsage,
    pub volumes: CategoryUsage,
    pub build_cache: CategoryUsage,
}

impl DiskUsageSummary {
    pub fn of(report: &DiskUsageReport) -> Self {
        Self {
            images: images(report),
            containers: containers(report),
            volumes: volumes(report),
            build_cache: build_cache(report),
        }
    }

    pub fn reclaimable_bytes(&self) -> i64 {
        [self.images, self.containers, self.volumes, self.build_cache]
            .iter()
            .fold(0i64, |acc, c| acc.saturating_add(c.reclaimable_bytes))
    }
}

fn images(report: &DiskUsageReport) -> CategoryUsage {
    let used_by_containers: HashSet<&str> = report
        .containers()
        .iter()
        .map(|c| c.image_id.as_str())
        .collect();

    let mut usage = CategoryUsage::default();
    let mut summed_size: i64 = 0;
    for image in report.images() {
        usage.total += 1;
        summed_size = summed_size.saturating_add(image.size_bytes);
        let active = used_by_containers.contains(image.id.as_str())
            || image.container_count.is_some_and(|n| n > 0);
        if active {
            usage.active += 1;
        } else {
            usage.reclaimable_bytes = usage.reclaimable_bytes.saturating_add(image.unique_size_bytes());
        }
    }
    usage.size_bytes = report.layers_size.unwrap_or(summed_size);
    usage
}

fn containers(report: &DiskUsageReport) -> CategoryUsage {
    let mut usage = CategoryUsage::default();
    for container in report.containers() {
        let size = container.size_rw_bytes.unwrap_or(0);
        usage.total += 1;
        usage.size_bytes = usage.size_bytes.saturating_add(size);
        if container.is_active() {
            usage.active += 1;
        } else {
            usage.reclaimable_bytes = usage.reclaimable_bytes.saturating_add(size);
        }
    }
    usage
}

fn volumes(report: &DiskUsageReport) -> CategoryUsage {
    let mut usage = CategoryUsage::default();
    for volume in report.volumes() {
        let size = volume.size_bytes().unwrap_or(0);
        usage.total += 1;
        usage.size_bytes = usage.size_bytes.saturating_add(size);
        match volume.ref_count() {
            Some(n) if n > 0 => usage.active += 1,
            Some(_) => usage.reclaimable_bytes = usage.reclaimable_bytes.saturating_add(size),
            None => {}
        }
    }
    usage
}

fn build_cache(report: &DiskUsageReport) -> CategoryUsage {
    let mut usage = CategoryUsage::default();
    for record in report.build_cache() {
        let size = record.size_bytes.unwrap_or(0);
        usage.total += 1;
        if record.is_in_use() {
            usage.active += 1;
        }
        if !record.is_shared() {
            usage.size_bytes = usage.size_bytes.saturating_add(size);
            if !record.is_in_use() {
                usage.reclaimable_bytes = usage.reclaimable_bytes.saturating_add(size);
            }
        }
    }
    usage
}
