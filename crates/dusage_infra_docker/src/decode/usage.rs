use dusage_domain as domain;

use super::{int32, list, required, timestamp, DecodeError, FieldPath, Normalize};
use crate::sentinel;
use crate::v1_45::{
    BuildCache, ContainerSummary, EndpointSettings, ImageSummary, Mount, Port, SummaryNetworkSettings,
    SystemDataUsage, UsageData, Volume,
};

impl Normalize for SystemDataUsage {
    type Output = domain::DiskUsageReport;

    fn normalize(self, at: &FieldPath) -> Result<Self::Output, DecodeError> {
        Ok(domain::DiskUsageReport {
            layers_size: self.layers_size,
            build_cache: list(self.build_cache, at, "BuildCache")?,
            images: list(self.images, at, "Images")?,
            containers: list(self.containers, at, "Containers")?,
            volumes: list(self.volumes, at, "Volumes")?,
        })
    }
}

impl Normalize for BuildCache {
    type Output = domain::BuildCacheRecord;

    fn normalize(self, at: &FieldPath) -> Result<Self::Output, DecodeError> {
        const ENTITY: &str = "BuildCache";

        let record_type = self
            .type_
            .map(|raw| {
                domain::UsageRecordType::from_wire(&raw).ok_or_else(|| DecodeError::InvalidValue {
                    path: at.field("Type"),
                    raw: format!("{raw:?}"),
                    reason: "unknown build cache record type".to_string(),
                })
            })
            .transpose()?;

        Ok(domain::BuildCacheRecord {
            id: required(self.id, at, "ID")?,
            parent_id: sentinel::text(ENTITY, "Parent", self.parent),
            record_type,
            description: sentinel::text(ENTITY, "Description", self.description),
            in_use: self.in_use,
            shared: self.shared,
            size_bytes: self.size,
            created_at: timestamp(self.created_at, at, "CreatedAt")?,
            last_used_at: timestamp(self.last_used_at, at, "LastUsedAt")?,
            usage_count: int32(self.usage_count, at, "UsageCount")?,
        })
    }
}

impl Normalize for ImageSummary {
    type Output = domain::ImageUsage;

    fn normalize(self, at: &FieldPath) -> Result<Self::Output, DecodeError> {
        const ENTITY: &str = "ImageSummary";

        let created_at = timestamp(self.created, at, "Created")?;
        let containers = sentinel::integer(ENTITY, "Containers", self.containers);

        Ok(domain::ImageUsage {
            id: required(self.id, at, "Id")?,
            parent_id: sentinel::text(ENTITY, "ParentId", self.parent_id),
            repo_tags: self.repo_tags.unwrap_or_default(),
            repo_digests: self.repo_digests.unwrap_or_default(),
            created_at: required(created_at, at, "Created")?,
            size_bytes: required(self.size, at, "Size")?,
            shared_size_bytes: sentinel::integer(ENTITY, "SharedSize", self.shared_size),
            labels: self.labels,
            container_count: int32(containers, at, "Containers")?,
        })
    }
}

impl Normalize for ContainerSummary {
    type Output = domain::ContainerUsage;

    fn normalize(self, at: &FieldPath) -> Result<Self::Output, DecodeError> {
        let created_at = timestamp(self.created, at, "Created")?;
        let ports = list(self.ports, at, "Ports")?.unwrap_or_default();
        let mounts = list(self.mounts, at, "Mounts")?.unwrap_or_default();
        let network_settings = match self.network_settings {
            Some(settings) => settings.normalize(&at.field("NetworkSettings"))?,
            None => domain::NetworkSummary::default(),
        };

        Ok(domain::ContainerUsage {
            id: required(self.id, at, "Id")?,
            names: self.names.unwrap_or_default(),
            image: required(self.image, at, "Image")?,
            image_id: required(self.image_id, at, "ImageID")?,
            command: required(self.command, at, "Command")?,
            created_at: required(created_at, at, "Created")?,
            ports,
            size_rw_bytes: self.size_rw,
            size_root_fs_bytes: self.size_root_fs,
            labels: self.labels.unwrap_or_default(),
            state: required(self.state, at, "State")?,
            status: required(self.status, at, "Status")?,
            host_config: domain::HostConfigSummary {
                network_mode: self.host_config.and_then(|h| h.network_mode),
            },
            network_settings,
            mounts,
        })
    }
}

impl Normalize for Port {
    type Output = domain::PortMapping;

    fn normalize(self, at: &FieldPath) -> Result<Self::Output, DecodeError> {
        Ok(domain::PortMapping {
            ip: self.ip,
            private_port: required(self.private_port, at, "PrivatePort")?,
            public_port: self.public_port,
            protocol: required(self.type_, at, "Type")?,
        })
    }
}

impl Normalize for Mount {
    type Output = domain::MountInfo;

    fn normalize(self, at: &FieldPath) -> Result<Self::Output, DecodeError> {
        let mount_type = self
            .type_
            .map(|raw| {
                domain::MountType::from_wire(&raw).ok_or_else(|| DecodeError::InvalidValue {
                    path: at.field("Type"),
                    raw: format!("{raw:?}"),
                    reason: "unknown mount type".to_string(),
                })
            })
            .transpose()?;

        Ok(domain::MountInfo {
            mount_type,
            name: self.name,
            source: required(self.source, at, "Source")?,
            destination: required(self.destination, at, "Destination")?,
            driver: self.driver,
            mode: self.mode,
            rw: required(self.rw, at, "RW")?,
            propagation: self.propagation,
        })
    }
}

impl Normalize for SummaryNetworkSettings {
    type Output = domain::NetworkSummary;

    fn normalize(self, at: &FieldPath) -> Result<Self::Output, DecodeError> {
        let here = at.field("Networks");
        let networks = self
            .networks
            .unwrap_or_default()
            .into_iter()
            .map(|(name, endpoint)| {
                let endpoint = endpoint.normalize(&here.field(&name))?;
                Ok::<_, DecodeError>((name, endpoint))
            })
            .collect::<Result<_, _>>()?;
        Ok(domain::NetworkSummary { networks })
    }
}

impl Normalize for EndpointSettings {
    type Output = domain::EndpointSummary;

    fn normalize(self, _at: &FieldPath) -> Result<Self::Output, DecodeError> {
        Ok(domain::EndpointSummary {
            network_id: self.network_id,
            endpoint_id: self.endpoint_id,
            gateway: self.gateway,
            ip_address: self.ip_address,
            ip_prefix_len: self.ip_prefix_len,
            ipv6_gateway: self.ipv6_gateway,
            global_ipv6_address: self.global_ipv6_address,
            global_ipv6_prefix_len: self.global_ipv6_prefix_len,
            mac_address: self.mac_address,
            aliases: self.aliases.unwrap_or_default(),
            links: self.links.unwrap_or_default(),
        })
    }
}

impl Normalize for Volume {
    type Output = domain::VolumeUsage;

    fn normalize(self, at: &FieldPath) -> Result<Self::Output, DecodeError> {
        let usage = self
            .usage_data
            .map(|u| u.normalize(&at.field("UsageData")))
            .transpose()?;

        Ok(domain::VolumeUsage {
            name: required(self.name, at, "Name")?,
            driver: required(self.driver, at, "Driver")?,
            mountpoint: required(self.mountpoint, at, "Mountpoint")?,
            labels: self.labels,
            options: self.options,
            usage,
        })
    }
}

impl Normalize for UsageData {
    type Output = domain::UsageData;

    fn normalize(self, _at: &FieldPath) -> Result<Self::Output, DecodeError> {
        const ENTITY: &str = "UsageData";

        Ok(domain::UsageData {
            size_bytes: sentinel::integer(ENTITY, "Size", self.size),
            ref_count: sentinel::integer(ENTITY, "RefCount", self.ref_count),
        })
    }
}
