// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

use crate::{
    ErrorKind, PortSelection, VlanmapError, WiredPorts, WirelessPorts,
    WIRED_PORT_COUNT,
};

/// Accepted IPTV bridge-mode configuration: one enable flag per port and
/// radio, plus the wired mask the firmware stores alongside them.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
#[non_exhaustive]
pub struct BridgeConfig {
    pub lan: [bool; WIRED_PORT_COUNT],
    pub ssid1: bool,
    pub ssid2: bool,
    pub guest_ssid1: bool,
    pub guest_ssid2: bool,
    pub wired_ports: WiredPorts,
    pub wireless_ports: WirelessPorts,
}

/// Validate the port selection of the non-VLAN IPTV bridge mode. Unlike
/// rule submission there is no cross-rule comparison, only the reserved
/// and empty combinations are refused.
pub fn check_bridge_ports(
    selection: &PortSelection,
) -> Result<BridgeConfig, VlanmapError> {
    let wired = selection.wired();
    let wireless = selection.wireless();
    if wired == WiredPorts::ALL && wireless == WirelessPorts::BOTH_SSIDS {
        return Err(VlanmapError::new(
            ErrorKind::AllPortsReservedCombination,
            "Every wired port plus both SSIDs is reserved for IPTV bridge \
             mode"
                .to_string(),
        ));
    }
    if wired.is_empty() && wireless.is_empty() {
        return Err(VlanmapError::new(
            ErrorKind::NoPortsSelected,
            "Select at least one wired port or radio".to_string(),
        ));
    }
    log::debug!(
        "Accepted IPTV bridge ports: wired {:#06b}, wireless {:#06b}",
        wired.raw(),
        wireless.raw()
    );
    Ok(BridgeConfig {
        lan: selection.lan,
        ssid1: selection.ssid1,
        ssid2: selection.ssid2,
        guest_ssid1: selection.guest_ssid1,
        guest_ssid2: selection.guest_ssid2,
        wired_ports: wired,
        wireless_ports: wireless,
    })
}
