//! Domain value objects and API vocabulary

mod storage;

pub use storage::{
    BackupRule, BACKUP_RULE_INTERVAL_DAILY, BACKUP_RULE_INTERVAL_FRI, BACKUP_RULE_INTERVAL_MON,
    BACKUP_RULE_INTERVAL_SAT, BACKUP_RULE_INTERVAL_SUN, BACKUP_RULE_INTERVAL_THU,
    BACKUP_RULE_INTERVAL_TUE, BACKUP_RULE_INTERVAL_WED, STORAGE_ACCESS_PRIVATE,
    STORAGE_ACCESS_PUBLIC, STORAGE_TIER_HDD, STORAGE_TIER_MAXIOPS, STORAGE_TYPE_BACKUP,
    STORAGE_TYPE_CDROM, STORAGE_TYPE_DISK, STORAGE_TYPE_NORMAL, STORAGE_TYPE_TEMPLATE,
};
