// ── Cisco-IOS-XE-wireless-wlan-cfg ──
//
// `wlan-cfg-data` is fetched as one tree. Policy tags reference WLAN
// profiles and policy profiles by name; the referenced definitions live in
// the sibling `wlan-cfg-entries` and `wlan-policies` lists.

use serde::{Deserialize, Serialize};

/// The full `wlan-cfg-data` container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct WlanCfgData {
    pub wlan_cfg_entries: WlanCfgEntries,
    pub wlan_policies: WlanPolicies,
    pub policy_list_entries: PolicyListEntries,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct WlanCfgEntries {
    pub wlan_cfg_entry: Vec<WlanCfgEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct WlanPolicies {
    pub wlan_policy: Vec<WlanPolicy>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct PolicyListEntries {
    pub policy_list_entry: Vec<PolicyListEntry>,
}

/// WLAN profile, keyed by `profile-name`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct WlanCfgEntry {
    pub profile_name: String,
    pub wlan_id: u32,
    pub auth_key_mgmt_psk: bool,
    pub auth_key_mgmt_dot1x: bool,
    pub auth_key_mgmt_sae: bool,
    pub apf_vap_id_data: ApfVapIdData,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct ApfVapIdData {
    pub ssid: String,
    pub wlan_status: bool,
    pub broadcast_ssid: bool,
}

impl WlanCfgEntry {
    /// Short label for the key management suites enabled on this WLAN.
    pub fn auth_summary(&self) -> String {
        let mut parts = Vec::new();
        if self.auth_key_mgmt_dot1x {
            parts.push("802.1X");
        }
        if self.auth_key_mgmt_psk {
            parts.push("PSK");
        }
        if self.auth_key_mgmt_sae {
            parts.push("SAE");
        }
        if parts.is_empty() {
            "open".into()
        } else {
            parts.join("+")
        }
    }
}

/// Policy profile, keyed by `policy-profile-name`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct WlanPolicy {
    pub policy_profile_name: String,
    pub description: String,
    pub status: bool,
    /// VLAN name or ID the policy maps clients to.
    pub interface_name: String,
}

/// Policy tag with its WLAN-to-policy associations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct PolicyListEntry {
    pub tag_name: String,
    pub description: String,
    pub wlan_policies: PolicyAssociations,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct PolicyAssociations {
    pub wlan_policy: Vec<PolicyAssociation>,
}

/// One (WLAN profile, policy profile) pair inside a policy tag.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct PolicyAssociation {
    pub wlan_profile_name: String,
    pub policy_profile_name: String,
}
