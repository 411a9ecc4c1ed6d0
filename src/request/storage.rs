//! Storage management requests
//!
//! Covers the storage subset of the API: listing and inspecting storage
//! devices, provisioning, modification, attach/detach against a server, and
//! deletion.

use serde::Serialize;

use super::{Request, RequestBody};
use crate::models::BackupRule;

/// Retrieve all storages, or a filtered subset
///
/// Filters are mutually exclusive with a fixed precedence: `access` wins
/// over `storage_type`, which wins over `favorite`. With no filter set the
/// unscoped collection is listed.
#[derive(Debug, Clone, Default)]
pub struct GetStoragesRequest {
    /// Only storages with this access type ("public" or "private")
    pub access: Option<String>,
    /// Only storages of this type ("normal", "backup", "cdrom", "template")
    pub storage_type: Option<String>,
    /// Only storages marked as favorite
    pub favorite: bool,
}

impl Request for GetStoragesRequest {
    fn request_url(&self) -> String {
        if let Some(access) = &self.access {
            return format!("/storage/{}", access);
        }

        if let Some(storage_type) = &self.storage_type {
            return format!("/storage/{}", storage_type);
        }

        if self.favorite {
            return "/storage/favorite".to_string();
        }

        "/storage".to_string()
    }
}

/// Retrieve details about a single storage device
#[derive(Debug, Clone, Default)]
pub struct GetStorageDetailsRequest {
    pub uuid: String,
}

impl Request for GetStorageDetailsRequest {
    fn request_url(&self) -> String {
        format!("/storage/{}", self.uuid)
    }
}

/// Provision a new storage device
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateStorageRequest {
    /// Size in gigabytes
    pub size: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tier: Option<String>,
    pub title: String,
    pub zone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_rule: Option<BackupRule>,
}

impl Request for CreateStorageRequest {
    fn request_url(&self) -> String {
        "/storage".to_string()
    }
}

impl RequestBody for CreateStorageRequest {
    fn element_name(&self) -> &'static str {
        "storage"
    }
}

/// Modify an existing storage device
///
/// The UUID identifies the device in the URL and is never part of the body.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ModifyStorageRequest {
    #[serde(skip)]
    pub uuid: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_rule: Option<BackupRule>,
}

impl Request for ModifyStorageRequest {
    fn request_url(&self) -> String {
        format!("/storage/{}", self.uuid)
    }
}

impl RequestBody for ModifyStorageRequest {
    fn element_name(&self) -> &'static str {
        "storage"
    }
}

/// Attach a storage device to a server
#[derive(Debug, Clone, Default, Serialize)]
pub struct AttachStorageRequest {
    #[serde(skip)]
    pub server_uuid: String,

    /// Device type, e.g. "disk" or "cdrom"
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub device_type: Option<String>,
    /// Bus address, e.g. "virtio" or "ide:0:0"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// UUID of the storage to attach
    #[serde(rename = "storage", skip_serializing_if = "Option::is_none")]
    pub storage_uuid: Option<String>,
}

impl Request for AttachStorageRequest {
    fn request_url(&self) -> String {
        format!("/server/{}/storage/attach", self.server_uuid)
    }
}

impl RequestBody for AttachStorageRequest {
    fn element_name(&self) -> &'static str {
        "storage_device"
    }
}

/// Detach a storage device from a server
#[derive(Debug, Clone, Default, Serialize)]
pub struct DetachStorageRequest {
    #[serde(skip)]
    pub server_uuid: String,

    /// Bus address the device is attached at
    pub address: String,
}

impl Request for DetachStorageRequest {
    fn request_url(&self) -> String {
        format!("/server/{}/storage/detach", self.server_uuid)
    }
}

impl RequestBody for DetachStorageRequest {
    fn element_name(&self) -> &'static str {
        "storage_device"
    }
}

/// Delete a storage device
#[derive(Debug, Clone, Default)]
pub struct DeleteStorageRequest {
    pub uuid: String,
}

impl Request for DeleteStorageRequest {
    fn request_url(&self) -> String {
        format!("/storage/{}", self.uuid)
    }
}
