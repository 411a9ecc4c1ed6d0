//! Storage domain vocabulary
//!
//! String constants mirror the values the storage API accepts for access
//! types, tiers, storage types and backup intervals. Request fields stay
//! plain strings so callers are never blocked from sending values the API
//! grows later; the constants are a convenience, not validation.

use serde::Serialize;

/// Storage access types
pub const STORAGE_ACCESS_PUBLIC: &str = "public";
pub const STORAGE_ACCESS_PRIVATE: &str = "private";

/// Storage tiers
pub const STORAGE_TIER_HDD: &str = "hdd";
pub const STORAGE_TIER_MAXIOPS: &str = "maxiops";

/// Storage types
pub const STORAGE_TYPE_BACKUP: &str = "backup";
pub const STORAGE_TYPE_CDROM: &str = "cdrom";
pub const STORAGE_TYPE_DISK: &str = "disk";
pub const STORAGE_TYPE_NORMAL: &str = "normal";
pub const STORAGE_TYPE_TEMPLATE: &str = "template";

/// Backup rule intervals
pub const BACKUP_RULE_INTERVAL_DAILY: &str = "daily";
pub const BACKUP_RULE_INTERVAL_MON: &str = "mon";
pub const BACKUP_RULE_INTERVAL_TUE: &str = "tue";
pub const BACKUP_RULE_INTERVAL_WED: &str = "wed";
pub const BACKUP_RULE_INTERVAL_THU: &str = "thu";
pub const BACKUP_RULE_INTERVAL_FRI: &str = "fri";
pub const BACKUP_RULE_INTERVAL_SAT: &str = "sat";
pub const BACKUP_RULE_INTERVAL_SUN: &str = "sun";

/// Automated backup schedule attached to a storage device
///
/// Serializes as a nested `backup_rule` element inside create and modify
/// request bodies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BackupRule {
    /// One of the `BACKUP_RULE_INTERVAL_*` values
    pub interval: String,
    /// Start time in hhmm format, e.g. "0430"
    pub time: String,
    /// Number of days backups are kept
    pub retention: u32,
}
