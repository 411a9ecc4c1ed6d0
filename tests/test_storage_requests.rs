//! Storage request body serialization tests

use serde_json::json;
use upcloud_storage::models::{BackupRule, BACKUP_RULE_INTERVAL_DAILY, STORAGE_TIER_MAXIOPS};
use upcloud_storage::request::{
    AttachStorageRequest, CreateStorageRequest, DetachStorageRequest, ModifyStorageRequest,
};
use upcloud_storage::RequestBody;

// ============================================================================
// XML Body Tests
// ============================================================================

#[test]
fn test_create_storage_xml_omits_unset_fields() {
    let r = CreateStorageRequest {
        size: 10,
        title: "disk".to_string(),
        zone: "fi-hel1".to_string(),
        ..Default::default()
    };

    let xml = r.to_xml().unwrap();
    assert!(xml.starts_with("<storage>"));
    assert!(xml.ends_with("</storage>"));
    assert!(xml.contains("<size>10</size>"));
    assert!(xml.contains("<title>disk</title>"));
    assert!(xml.contains("<zone>fi-hel1</zone>"));
    assert!(!xml.contains("tier"));
    assert!(!xml.contains("backup_rule"));
}

#[test]
fn test_create_storage_xml_with_all_fields() {
    let r = CreateStorageRequest {
        size: 50,
        tier: Some(STORAGE_TIER_MAXIOPS.to_string()),
        title: "data".to_string(),
        zone: "fi-hel1".to_string(),
        backup_rule: Some(BackupRule {
            interval: BACKUP_RULE_INTERVAL_DAILY.to_string(),
            time: "0430".to_string(),
            retention: 7,
        }),
    };

    let xml = r.to_xml().unwrap();
    assert!(xml.contains("<tier>maxiops</tier>"));
    assert!(xml.contains(
        "<backup_rule><interval>daily</interval><time>0430</time><retention>7</retention></backup_rule>"
    ));
}

#[test]
fn test_modify_storage_xml_omits_identity_and_unset_fields() {
    let r = ModifyStorageRequest {
        uuid: "x".to_string(),
        title: Some("new".to_string()),
        ..Default::default()
    };

    let xml = r.to_xml().unwrap();
    assert_eq!(xml, "<storage><title>new</title></storage>");
}

#[test]
fn test_attach_storage_xml_excludes_server_uuid() {
    let r = AttachStorageRequest {
        server_uuid: "srv1".to_string(),
        device_type: Some("disk".to_string()),
        address: Some("virtio".to_string()),
        storage_uuid: Some("sto1".to_string()),
    };

    let xml = r.to_xml().unwrap();
    assert_eq!(
        xml,
        "<storage_device><type>disk</type><address>virtio</address><storage>sto1</storage></storage_device>"
    );
}

#[test]
fn test_attach_storage_xml_empty_body() {
    let r = AttachStorageRequest {
        server_uuid: "srv1".to_string(),
        ..Default::default()
    };

    let xml = r.to_xml().unwrap();
    assert!(!xml.contains("type"));
    assert!(!xml.contains("address"));
    assert!(!xml.contains("srv1"));
}

#[test]
fn test_detach_storage_xml_always_emits_address() {
    let r = DetachStorageRequest {
        server_uuid: "srv1".to_string(),
        address: "virtio".to_string(),
    };

    let xml = r.to_xml().unwrap();
    assert_eq!(xml, "<storage_device><address>virtio</address></storage_device>");
}

// ============================================================================
// JSON Body Tests
// ============================================================================

#[test]
fn test_create_storage_json_shape() {
    let r = CreateStorageRequest {
        size: 10,
        title: "disk".to_string(),
        zone: "fi-hel1".to_string(),
        ..Default::default()
    };

    assert_eq!(
        r.to_json().unwrap(),
        json!({
            "storage": {
                "size": 10,
                "title": "disk",
                "zone": "fi-hel1",
            }
        })
    );
}

#[test]
fn test_modify_storage_json_never_includes_uuid() {
    let r = ModifyStorageRequest {
        uuid: "x".to_string(),
        title: Some("new".to_string()),
        size: Some(20),
        ..Default::default()
    };

    assert_eq!(
        r.to_json().unwrap(),
        json!({
            "storage": {
                "title": "new",
                "size": 20,
            }
        })
    );
}

#[test]
fn test_detach_storage_json_shape() {
    let r = DetachStorageRequest {
        server_uuid: "srv1".to_string(),
        address: "ide:0:0".to_string(),
    };

    assert_eq!(
        r.to_json().unwrap(),
        json!({
            "storage_device": {
                "address": "ide:0:0",
            }
        })
    );
}

#[test]
fn test_backup_rule_json_nesting() {
    let r = ModifyStorageRequest {
        uuid: "x".to_string(),
        backup_rule: Some(BackupRule {
            interval: "mon".to_string(),
            time: "2300".to_string(),
            retention: 14,
        }),
        ..Default::default()
    };

    assert_eq!(
        r.to_json().unwrap(),
        json!({
            "storage": {
                "backup_rule": {
                    "interval": "mon",
                    "time": "2300",
                    "retention": 14,
                }
            }
        })
    );
}
