use std::collections::HashMap;

use time::macros::datetime;

use crate::build_cache::BuildCacheRecord;
use crate::container::{ContainerUsage, HostConfigSummary, NetworkSummary};
use crate::image::ImageUsage;
use crate::report::{CategoryUsage, DiskUsageReport};
use crate::volume::{UsageData, VolumeUsage};

fn image(id: &str, size: i64, shared: Option<i64>, containers: Option<i32>) -> ImageUsage {
    ImageUsage {
        id: id.to_string(),
        parent_id: None,
        repo_tags: vec![format!("{id}:latest")],
        repo_digests: Vec::new(),
        created_at: datetime!(2024-05-01 10:00 UTC),
        size_bytes: size,
        shared_size_bytes: shared,
        labels: None,
        container_count: containers,
    }
}

fn container(id: &str, image_id: &str, state: &str, size_rw: Option<i64>) -> ContainerUsage {
    ContainerUsage {
        id: id.to_string(),
        names: vec![format!("/{id}")],
        image: "alpine".to_string(),
        image_id: image_id.to_string(),
        command: "/bin/sh".to_string(),
        created_at: datetime!(2024-05-01 10:05 UTC),
        ports: Vec::new(),
        size_rw_bytes: size_rw,
        size_root_fs_bytes: None,
        labels: HashMap::new(),
        state: state.to_string(),
        status: String::new(),
        host_config: HostConfigSummary::default(),
        network_settings: NetworkSummary::default(),
        mounts: Vec::new(),
    }
}

fn volume(name: &str, size: Option<i64>, refs: Option<i64>) -> VolumeUsage {
    VolumeUsage {
        name: name.to_string(),
        driver: "local".to_string(),
        mountpoint: format!("/var/lib/docker/volumes/{name}/_data"),
        labels: None,
        options: None,
        usage: Some(UsageData { size_bytes: size, ref_count: refs }),
    }
}

fn cache(id: &str, size: i64, in_use: bool, shared: bool) -> BuildCacheRecord {
    BuildCacheRecord {
        id: id.to_string(),
        parent_id: None,
        record_type: None,
        description: None,
        in_use: Some(in_use),
        shared: Some(shared),
        size_bytes: Some(size),
        created_at: None,
        last_used_at: None,
        usage_count: None,
    }
}

#[test]
fn test_empty_report_summarizes_to_zero() {
    let summary = DiskUsageReport::default().summary();
    assert_eq!(summary.images, CategoryUsage::default());
    assert_eq!(summary.reclaimable_bytes(), 0);
}

#[test]
fn test_absent_collection_reads_as_empty_slice() {
    let report = DiskUsageReport { containers: None, ..Default::default() };
    assert!(report.containers().is_empty());
}

#[test]
fn test_image_summary() {
    let report = DiskUsageReport {
        layers_size: Some(1_000),
        images: Some(vec![
            image("sha256:a", 400, Some(100), None),
            image("sha256:b", 300, Some(100), Some(0)),
            image("sha256:c", 300, None, Some(2)),
        ]),
        containers: Some(vec![container("c1", "sha256:a", "exited", Some(5))]),
        ..Default::default()
    };
    let images = report.summary().images;
    assert_eq!(images.total, 3);
    // a via container reference, c via its count
    assert_eq!(images.active, 2);
    assert_eq!(images.size_bytes, 1_000);
    assert_eq!(images.reclaimable_bytes, 200);
}

#[test]
fn test_image_size_falls_back_to_sum() {
    let report = DiskUsageReport {
        images: Some(vec![image("sha256:a", 10, None, None), image("sha256:b", 20, None, None)]),
        ..Default::default()
    };
    assert_eq!(report.summary().images.size_bytes, 30);
}

#[test]
fn test_container_summary() {
    let report = DiskUsageReport {
        containers: Some(vec![
            container("c1", "sha256:a", "running", Some(3)),
            container("c2", "sha256:a", "exited", Some(7)),
            container("c3", "sha256:a", "created", None),
        ]),
        ..Default::default()
    };
    let containers = report.summary().containers;
    assert_eq!(containers.total, 3);
    assert_eq!(containers.active, 1);
    assert_eq!(containers.size_bytes, 10);
    assert_eq!(containers.reclaimable_bytes, 7);
}

#[test]
fn test_paused_and_restarting_containers_are_active() {
    let report = DiskUsageReport {
        containers: Some(vec![
            container("c1", "sha256:a", "paused", Some(2)),
            container("c2", "sha256:a", "Restarting", Some(4)),
            container("c3", "sha256:a", "dead", Some(8)),
        ]),
        ..Default::default()
    };
    let containers = report.summary().containers;
    assert_eq!(containers.active, 2);
    assert_eq!(containers.size_bytes, 14);
    assert_eq!(containers.reclaimable_bytes, 8);
}

#[test]
fn test_summary_saturates_on_huge_sizes() {
    let report = DiskUsageReport {
        images: Some(vec![image("sha256:a", i64::MAX, None, None), image("sha256:b", 1, None, None)]),
        containers: Some(vec![
            container("c1", "sha256:x", "exited", Some(i64::MAX)),
            container("c2", "sha256:x", "exited", Some(1)),
        ]),
        volumes: Some(vec![volume("v1", Some(i64::MAX), Some(0)), volume("v2", Some(1), Some(0))]),
        build_cache: Some(vec![cache("b1", i64::MAX, false, false), cache("b2", 1, false, false)]),
        ..Default::default()
    };
    let summary = report.summary();
    assert_eq!(summary.images.size_bytes, i64::MAX);
    assert_eq!(summary.images.reclaimable_bytes, i64::MAX);
    assert_eq!(summary.containers.size_bytes, i64::MAX);
    assert_eq!(summary.volumes.reclaimable_bytes, i64::MAX);
    assert_eq!(summary.build_cache.size_bytes, i64::MAX);
    assert_eq!(summary.reclaimable_bytes(), i64::MAX);
}

#[test]
fn test_unique_size_saturates_on_negative_shared() {
    assert_eq!(image("sha256:a", i64::MAX, Some(-2), None).unique_size_bytes(), i64::MAX);
    assert_eq!(image("sha256:b", 10, Some(40), None).unique_size_bytes(), 0);
}

#[test]
fn test_volume_summary_skips_unknown_ref_count() {
    let report = DiskUsageReport {
        volumes: Some(vec![
            volume("used", Some(4), Some(1)),
            volume("idle", Some(6), Some(0)),
            volume("remote", None, None),
        ]),
        ..Default::default()
    };
    let volumes = report.summary().volumes;
    assert_eq!(volumes.total, 3);
    assert_eq!(volumes.active, 1);
    assert_eq!(volumes.size_bytes, 10);
    assert_eq!(volumes.reclaimable_bytes, 6);
}

#[test]
fn test_build_cache_summary_excludes_shared() {
    let report = DiskUsageReport {
        build_cache: Some(vec![
            cache("r1", 10, true, false),
            cache("r2", 20, false, false),
            cache("r3", 40, false, true),
        ]),
        ..Default::default()
    };
    let build_cache = report.summary().build_cache;
    assert_eq!(build_cache.total, 3);
    assert_eq!(build_cache.active, 1);
    assert_eq!(build_cache.size_bytes, 30);
    assert_eq!(build_cache.reclaimable_bytes, 20);
}
