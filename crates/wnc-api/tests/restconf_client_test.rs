#![allow(clippy::unwrap_used)]
// Integration tests for `RestconfClient` using wiremock.

use std::time::Duration;

use secrecy::SecretString;
use serde_json::json;
use url::Url;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use wnc_api::{Error, RestconfClient, TlsMode, TransportConfig};

// ── Helpers ─────────────────────────────────────────────────────────

const AP_OPER: &str = "/restconf/data/Cisco-IOS-XE-wireless-access-point-oper:access-point-oper-data";
const CLIENT_OPER: &str = "/restconf/data/Cisco-IOS-XE-wireless-client-oper:client-oper-data";

async fn setup() -> (MockServer, RestconfClient) {
    let server = MockServer::start().await;
    let base_url = Url::parse(&format!("{}/restconf/data/", server.uri())).unwrap();
    let transport = TransportConfig {
        tls: TlsMode::Verify,
        timeout: Duration::from_secs(5),
    };
    let client = RestconfClient::with_base_url(
        base_url,
        &SecretString::from("YWRtaW46c2VjcmV0".to_string()),
        &transport,
    )
    .unwrap();
    (server, client)
}

// ── Access point tests ──────────────────────────────────────────────

#[tokio::test]
async fn test_capwap_data_sends_credentials_and_unwraps_envelope() {
    let (server, client) = setup().await;

    let body = json!({
        "Cisco-IOS-XE-wireless-access-point-oper:capwap-data": [{
            "wtp-mac": "aa:aa:aa:00:00:01",
            "ip-addr": "10.0.0.11",
            "name": "ap-lobby",
            "device-detail": {
                "static-info": { "ap-models": { "model": "C9130AXI-E" } },
                "wtp-version": { "sw-version": "17.12.3.12" }
            },
            "tag-info": {
                "tag-source": "tag-source-static",
                "policy-tag-info": { "policy-tag-name": "PT-CORP" },
                "site-tag": { "site-tag-name": "ST-HQ" },
                "rf-tag": { "rf-tag-name": "RT-HIGH" }
            }
        }]
    });

    Mock::given(method("GET"))
        .and(path(format!("{AP_OPER}/capwap-data")))
        .and(header("authorization", "Basic YWRtaW46c2VjcmV0"))
        .and(header("accept", "application/yang-data+json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let aps = client.capwap_data().await.unwrap();

    assert_eq!(aps.len(), 1);
    assert_eq!(aps[0].wtp_mac, "aa:aa:aa:00:00:01");
    assert_eq!(aps[0].name, "ap-lobby");
    assert_eq!(aps[0].device_detail.static_info.ap_models.model, "C9130AXI-E");
    assert_eq!(aps[0].tag_info.rf_tag.rf_tag_name, "RT-HIGH");
    assert_eq!(aps[0].tag_info.site_tag.site_tag_name, "ST-HQ");
}

#[tokio::test]
async fn test_radio_oper_data_decodes_nested_config() {
    let (server, client) = setup().await;

    let body = json!({
        "Cisco-IOS-XE-wireless-access-point-oper:radio-oper-data": [{
            "wtp-mac": "aa:aa:aa:00:00:01",
            "radio-slot-id": 1,
            "radio-type": "client-dot11-5ghz-radio",
            "oper-state": "radio-up",
            "phy-ht-cfg": { "cfg-data": { "curr-freq": 36, "chan-width": "chan-width-80-mhz" } },
            "radio-band-info": [{
                "band-id": 1,
                "phy-tx-pwr-lvl-cfg": { "cfg-data": { "curr-tx-power-in-dbm": 14 } }
            }]
        }]
    });

    Mock::given(method("GET"))
        .and(path(format!("{AP_OPER}/radio-oper-data")))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let radios = client.radio_oper_data().await.unwrap();

    assert_eq!(radios.len(), 1);
    assert_eq!(radios[0].radio_slot_id, 1);
    assert_eq!(radios[0].channel(), 36);
    assert_eq!(radios[0].channel_width_mhz(), 80);
    assert_eq!(radios[0].tx_power_dbm(), 14);
}

// ── Empty and error responses ───────────────────────────────────────

#[tokio::test]
async fn test_no_content_is_empty_collection() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(format!("{AP_OPER}/lldp-neigh")))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let neighbors = client.lldp_neighbors().await.unwrap();
    assert!(neighbors.is_empty());
}

#[tokio::test]
async fn test_unauthorized_maps_to_authentication_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(format!("{CLIENT_OPER}/common-oper-data")))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let result = client.common_oper_data().await;
    assert!(
        matches!(result, Err(Error::Authentication { .. })),
        "expected Authentication error, got: {result:?}"
    );
}

#[tokio::test]
async fn test_restconf_error_body_is_surfaced() {
    let (server, client) = setup().await;

    let body = json!({
        "ietf-restconf:errors": {
            "error": [{
                "error-type": "application",
                "error-tag": "invalid-value",
                "error-message": "uri keypath not found"
            }]
        }
    });

    Mock::given(method("GET"))
        .and(path(
            "/restconf/data/Cisco-IOS-XE-wireless-rrm-oper:rrm-oper-data/rrm-measurement",
        ))
        .respond_with(ResponseTemplate::new(404).set_body_json(&body))
        .mount(&server)
        .await;

    let err = client.rrm_measurements().await.unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(
        err.to_string(),
        "RESTCONF error (HTTP 404): invalid-value: uri keypath not found"
    );
}

#[tokio::test]
async fn test_malformed_body_is_deserialization_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/restconf/data/Cisco-IOS-XE-wireless-rf-cfg:rf-cfg-data/rf-tags/rf-tag"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let result = client.rf_tags().await;
    match result {
        Err(Error::Deserialization { body, .. }) => assert!(body.contains("not json")),
        other => panic!("expected Deserialization error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_slow_controller_times_out() {
    let server = MockServer::start().await;
    let base_url = Url::parse(&format!("{}/restconf/data/", server.uri())).unwrap();
    let transport = TransportConfig {
        tls: TlsMode::Verify,
        timeout: Duration::from_millis(200),
    };
    let client = RestconfClient::with_base_url(
        base_url,
        &SecretString::from("dG9rZW4=".to_string()),
        &transport,
    )
    .unwrap();

    Mock::given(method("GET"))
        .and(path(format!("{CLIENT_OPER}/dc-info")))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(2)))
        .mount(&server)
        .await;

    let err = client.dc_info().await.unwrap_err();
    assert!(err.is_timeout(), "expected timeout, got: {err:?}");
}

// ── Client-station tests ────────────────────────────────────────────

#[tokio::test]
async fn test_client_lists_use_their_own_key_leaves() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(format!("{CLIENT_OPER}/sisf-db-mac")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Cisco-IOS-XE-wireless-client-oper:sisf-db-mac": [{
                "mac-addr": "cc:cc:cc:00:00:01",
                "ipv4-binding": { "ip-key": { "zone-id": 0, "ip-addr": "10.1.0.25" } }
            }]
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(format!("{CLIENT_OPER}/traffic-stats")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Cisco-IOS-XE-wireless-client-oper:traffic-stats": [{
                "ms-mac-address": "cc:cc:cc:00:00:01",
                "bytes-rx": "987654321",
                "bytes-tx": "123456",
                "most-recent-rssi": -61,
                "speed": 866
            }]
        })))
        .mount(&server)
        .await;

    let sisf = client.sisf_db_mac().await.unwrap();
    assert_eq!(sisf[0].mac_addr, "cc:cc:cc:00:00:01");
    assert_eq!(sisf[0].ipv4(), "10.1.0.25");

    let stats = client.traffic_stats().await.unwrap();
    assert_eq!(stats[0].ms_mac_address, "cc:cc:cc:00:00:01");
    assert_eq!(stats[0].bytes_rx, 987_654_321);
    assert_eq!(stats[0].most_recent_rssi, -61);
}

// ── WLAN tests ──────────────────────────────────────────────────────

#[tokio::test]
async fn test_wlan_cfg_data_tree() {
    let (server, client) = setup().await;

    let body = json!({
        "Cisco-IOS-XE-wireless-wlan-cfg:wlan-cfg-data": {
            "wlan-cfg-entries": { "wlan-cfg-entry": [{
                "profile-name": "corp-wlan",
                "wlan-id": 1,
                "auth-key-mgmt-dot1x": true,
                "apf-vap-id-data": { "ssid": "Corp", "wlan-status": true }
            }]},
            "wlan-policies": { "wlan-policy": [{
                "policy-profile-name": "corp-policy",
                "status": true,
                "interface-name": "VLAN0100"
            }]},
            "policy-list-entries": { "policy-list-entry": [{
                "tag-name": "PT-CORP",
                "wlan-policies": { "wlan-policy": [{
                    "wlan-profile-name": "corp-wlan",
                    "policy-profile-name": "corp-policy"
                }]}
            }]}
        }
    });

    Mock::given(method("GET"))
        .and(path("/restconf/data/Cisco-IOS-XE-wireless-wlan-cfg:wlan-cfg-data"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let tree = client.wlan_cfg_data().await.unwrap();
    let tags = &tree.policy_list_entries.policy_list_entry;
    assert_eq!(tags.len(), 1);
    assert_eq!(tags[0].wlan_policies.wlan_policy[0].wlan_profile_name, "corp-wlan");
    let wlan = &tree.wlan_cfg_entries.wlan_cfg_entry[0];
    assert_eq!(wlan.apf_vap_id_data.ssid, "Corp");
    assert_eq!(wlan.auth_summary(), "802.1X");
    assert_eq!(tree.wlan_policies.wlan_policy[0].interface_name, "VLAN0100");
}
