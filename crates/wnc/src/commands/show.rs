//! `show` handlers: run one aggregator across the fleet and render it.

use tabled::Tabled;
use wnc_core::aggregate::{self, Aggregation, ControllerFailure};
use wnc_core::{
    ApRecord, ApTagRecord, ClientQuery, ClientRecord, OverviewQuery, OverviewRecord,
    OverviewSortKey, RestconfConnector, SortOrder, WlanRecord,
};

use crate::cli::{GlobalOpts, ShowArgs, ShowCommand, SortDirection};
use crate::config::Settings;
use crate::error::CliError;
use crate::output::{self, bytes, or_dash, paint_state, short_state};

// ── Table rows ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct ApRow {
    #[tabled(rename = "Controller")]
    controller: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "MAC")]
    mac: String,
    #[tabled(rename = "IP")]
    ip: String,
    #[tabled(rename = "Model")]
    model: String,
    #[tabled(rename = "Version")]
    version: String,
    #[tabled(rename = "State")]
    state: String,
    #[tabled(rename = "Switch")]
    switch: String,
    #[tabled(rename = "Port")]
    port: String,
    #[tabled(rename = "CPU %")]
    cpu: u8,
    #[tabled(rename = "Mem %")]
    mem: u8,
}

impl ApRow {
    fn new(r: &ApRecord, color: bool) -> Self {
        let detail = &r.capwap.device_detail;
        Self {
            controller: r.controller.clone(),
            name: or_dash(r.name()),
            mac: r.capwap.wtp_mac.clone(),
            ip: or_dash(&r.capwap.ip_addr),
            model: or_dash(&detail.static_info.ap_models.model),
            version: or_dash(&detail.wtp_version.sw_version),
            state: paint_state(&r.capwap.ap_state.ap_operation_state, color),
            switch: or_dash(&r.lldp.system_name),
            port: or_dash(&r.lldp.port_id),
            cpu: r.oper.ap_sys_stats.cpu_usage,
            mem: r.oper.ap_sys_stats.memory_usage,
        }
    }
}

#[derive(Tabled)]
struct ApTagRow {
    #[tabled(rename = "Controller")]
    controller: String,
    #[tabled(rename = "AP")]
    ap: String,
    #[tabled(rename = "MAC")]
    mac: String,
    #[tabled(rename = "Policy Tag")]
    policy_tag: String,
    #[tabled(rename = "Site Tag")]
    site_tag: String,
    #[tabled(rename = "RF Tag")]
    rf_tag: String,
    #[tabled(rename = "Source")]
    source: String,
    #[tabled(rename = "Misconfigured")]
    misconfigured: String,
}

impl From<&ApTagRecord> for ApTagRow {
    fn from(r: &ApTagRecord) -> Self {
        Self {
            controller: r.controller.clone(),
            ap: or_dash(&r.ap_name),
            mac: r.wtp_mac.clone(),
            policy_tag: or_dash(&r.policy_tag),
            site_tag: or_dash(&r.site_tag),
            rf_tag: or_dash(&r.rf_tag),
            source: or_dash(short_state(&r.tag_source, "tag-source-")),
            misconfigured: if r.misconfigured { "yes" } else { "no" }.into(),
        }
    }
}

#[derive(Tabled)]
struct ClientRow {
    #[tabled(rename = "Controller")]
    controller: String,
    #[tabled(rename = "MAC")]
    mac: String,
    #[tabled(rename = "IP")]
    ip: String,
    #[tabled(rename = "AP")]
    ap: String,
    #[tabled(rename = "Slot")]
    slot: u8,
    #[tabled(rename = "SSID")]
    ssid: String,
    #[tabled(rename = "State")]
    state: String,
    #[tabled(rename = "Device")]
    device: String,
    #[tabled(rename = "RSSI")]
    rssi: i64,
    #[tabled(rename = "Rx")]
    rx: String,
    #[tabled(rename = "Tx")]
    tx: String,
}

impl ClientRow {
    fn new(r: &ClientRecord, color: bool) -> Self {
        Self {
            controller: r.controller.clone(),
            mac: r.mac().to_owned(),
            ip: or_dash(r.sisf.ipv4()),
            ap: or_dash(&r.common.ap_name),
            slot: r.radio_slot(),
            ssid: or_dash(r.ssid()),
            state: paint_state(short_state(&r.common.co_state, "client-status-"), color),
            device: or_dash(&r.dc.device_type),
            rssi: r.traffic.most_recent_rssi,
            rx: bytes(r.traffic.bytes_rx),
            tx: bytes(r.traffic.bytes_tx),
        }
    }
}

#[derive(Tabled)]
struct WlanRow {
    #[tabled(rename = "Controller")]
    controller: String,
    #[tabled(rename = "Policy Tag")]
    tag: String,
    #[tabled(rename = "WLAN Profile")]
    wlan_profile: String,
    #[tabled(rename = "SSID")]
    ssid: String,
    #[tabled(rename = "ID")]
    wlan_id: u32,
    #[tabled(rename = "Auth")]
    auth: String,
    #[tabled(rename = "Policy Profile")]
    policy_profile: String,
    #[tabled(rename = "Interface")]
    interface: String,
    #[tabled(rename = "Enabled")]
    enabled: String,
}

impl From<&WlanRecord> for WlanRow {
    fn from(r: &WlanRecord) -> Self {
        Self {
            controller: r.controller.clone(),
            tag: r.tag_name.clone(),
            wlan_profile: or_dash(&r.wlan_profile_name),
            ssid: or_dash(&r.wlan.apf_vap_id_data.ssid),
            wlan_id: r.wlan.wlan_id,
            auth: r.wlan.auth_summary(),
            policy_profile: or_dash(&r.policy_profile_name),
            interface: or_dash(&r.policy.interface_name),
            enabled: if r.wlan.apf_vap_id_data.wlan_status {
                "yes"
            } else {
                "no"
            }
            .into(),
        }
    }
}

#[derive(Tabled)]
struct OverviewRow {
    #[tabled(rename = "Controller")]
    controller: String,
    #[tabled(rename = "AP")]
    ap: String,
    #[tabled(rename = "Radio MAC")]
    mac: String,
    #[tabled(rename = "Slot")]
    slot: u8,
    #[tabled(rename = "Band")]
    band: String,
    #[tabled(rename = "Channel")]
    channel: u32,
    #[tabled(rename = "Width")]
    width: String,
    #[tabled(rename = "Tx Power")]
    tx_power: String,
    #[tabled(rename = "Clients")]
    clients: u32,
    #[tabled(rename = "Util %")]
    utilization: u8,
    #[tabled(rename = "RF Profile")]
    rf_profile: String,
    #[tabled(rename = "State")]
    state: String,
}

impl OverviewRow {
    fn new(r: &OverviewRecord, color: bool) -> Self {
        let width = r.radio.channel_width_mhz();
        Self {
            controller: r.controller.clone(),
            ap: or_dash(r.ap_name()),
            mac: r.radio_mac().to_owned(),
            slot: r.radio.radio_slot_id,
            band: r.band.to_string(),
            channel: r.radio.channel(),
            width: if width == 0 {
                "-".into()
            } else {
                format!("{width} MHz")
            },
            tx_power: format!("{} dBm", r.radio.tx_power_dbm()),
            clients: r.client_count(),
            utilization: r.measurement.load.cca_util_percentage,
            rf_profile: or_dash(&r.rf_profile),
            state: paint_state(short_state(&r.radio.oper_state, "radio-"), color),
        }
    }
}

// ── Handler ──────────────────────────────────────────────────────────

pub async fn handle(
    args: ShowArgs,
    settings: &Settings,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let connector = RestconfConnector;
    let controllers = settings.controllers.as_slice();
    let options = &settings.options;
    let color = output::should_color(global.color);

    match args.command {
        ShowCommand::Ap => {
            let agg = aggregate::access_points(&connector, controllers, options).await;
            emit(settings, global, &agg, |r| ApRow::new(r, color))
        }
        ShowCommand::ApTag => {
            let agg = aggregate::ap_tags(&connector, controllers, options).await;
            emit(settings, global, &agg, |r| ApTagRow::from(r))
        }
        ShowCommand::Client(client_args) => {
            let query = ClientQuery {
                ssid: client_args.ssid.unwrap_or_default(),
                radio_slot: client_args.radio.unwrap_or_default(),
            };
            let agg = aggregate::clients(&connector, controllers, options, &query).await;
            emit(settings, global, &agg, |r| ClientRow::new(r, color))
        }
        ShowCommand::Wlan => {
            let agg = aggregate::wlans(&connector, controllers, options).await;
            emit(settings, global, &agg, |r| WlanRow::from(r))
        }
        ShowCommand::Overview(overview_args) => {
            let query = OverviewQuery {
                radio_slot: overview_args.radio.unwrap_or_default(),
                sort_by: OverviewSortKey::lenient(&overview_args.sort_by),
                order: match overview_args.sort_order {
                    SortDirection::Asc => SortOrder::Asc,
                    SortDirection::Desc => SortOrder::Desc,
                },
            };
            let agg = aggregate::overview(&connector, controllers, options, &query).await;
            emit(settings, global, &agg, |r| OverviewRow::new(r, color))
        }
    }
}

fn emit<T, R>(
    settings: &Settings,
    global: &GlobalOpts,
    agg: &Aggregation<T>,
    to_row: impl Fn(&T) -> R,
) -> Result<(), CliError>
where
    T: serde::Serialize,
    R: Tabled,
{
    report_failures(agg, global);
    let out = output::render_list(settings.output, &agg.records, to_row)?;
    output::print_output(&out, global.quiet)
}

/// Failures were already logged at `warn`; `-v` adds a summary line each.
fn report_failures<T>(agg: &Aggregation<T>, global: &GlobalOpts) {
    if global.quiet || global.verbose == 0 {
        return;
    }
    for failure in &agg.failures {
        eprintln!("{}", failure_line(failure));
    }
}

fn failure_line(failure: &ControllerFailure) -> String {
    let status = failure
        .error
        .status()
        .map(|code| format!(" (HTTP {code})"))
        .unwrap_or_default();
    let hint = if failure.error.is_auth_failure() {
        "; check the credential for this controller"
    } else if failure.error.is_timeout() {
        "; try a larger --timeout"
    } else {
        ""
    };
    format!(
        "skipped {}: {} fetch failed{status}: {}{hint}",
        failure.controller, failure.collection, failure.error
    )
}
