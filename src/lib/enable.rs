// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

use crate::{
    DeviceContext, ErrorKind, RuleTable, VlanmapError, VLAN_ID_MAX,
    WIRED_PORT_COUNT, WIRELESS_PORT_COUNT,
};

/// At most six rules may be bridged simultaneously.
pub const MAX_ENABLED_RULES: usize = 6;

/// Port usage of the currently-configured Internet rule, as reported by
/// the firmware alongside the rule table.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
#[non_exhaustive]
pub struct InternetPorts {
    #[serde(default)]
    pub lan: [bool; WIRED_PORT_COUNT],
    /// Main radios only, guest radios never belong to the Internet rule.
    #[serde(default)]
    pub wireless: [bool; 2],
}

impl InternetPorts {
    pub fn any(&self) -> bool {
        self.lan.iter().chain(self.wireless.iter()).any(|used| *used)
    }
}

/// A request to enable a set of VLAN rules for simultaneous bridging.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
#[non_exhaustive]
pub struct EnableSelection {
    /// Slot indices of the selected rules, 1 and up.
    pub selected: Vec<usize>,
    #[serde(default)]
    pub internet_ports: InternetPorts,
    /// Orange provisioning note active, suppresses the Internet port
    /// check.
    #[serde(
        default,
        deserialize_with = "crate::deserializer::bool_or_string"
    )]
    pub orange_note: bool,
    /// Manual VLAN ID for the bridge group, raw form text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manual_vlan_id: Option<String>,
}

/// Validate a set of rules selected for simultaneous bridging. Every
/// physical port and radio may be claimed by at most one selected rule.
pub fn check_enable_list(
    table: &RuleTable,
    selection: &EnableSelection,
    ctx: &DeviceContext,
) -> Result<(), VlanmapError> {
    let mut wired_claims = [0u8; WIRED_PORT_COUNT];
    let mut wireless_claims = [0u8; WIRELESS_PORT_COUNT];
    for &index in &selection.selected {
        let rule = table
            .get(index)
            .filter(|_| index >= 1)
            .ok_or_else(|| {
                VlanmapError::new(
                    ErrorKind::InvalidRecord,
                    format!(
                        "Selected rule index {index} out of range, custom \
                         rules occupy slots 1..={}",
                        table.last_index()
                    ),
                )
            })?;
        for port in 0..WIRED_PORT_COUNT {
            if rule.wired_ports.contains(port) {
                wired_claims[port] += 1;
            }
        }
        for slot in 0..WIRELESS_PORT_COUNT {
            if rule.wireless_ports.contains(slot) {
                wireless_claims[slot] += 1;
            }
        }
    }

    if table.last_index() > 1
        && !selection.orange_note
        && !selection.internet_ports.any()
    {
        return Err(VlanmapError::new(
            ErrorKind::InternetPortsUnassigned,
            "The Internet rule claims no port, assign one before bridging \
             other rules"
                .to_string(),
        ));
    }
    if wired_claims
        .iter()
        .chain(wireless_claims.iter())
        .any(|claims| *claims > 1)
    {
        return Err(VlanmapError::new(
            ErrorKind::PortClassDuplicate,
            "A port is claimed by more than one selected rule".to_string(),
        ));
    }
    if selection.selected.len() > MAX_ENABLED_RULES {
        return Err(VlanmapError::new(
            ErrorKind::TooManySelected,
            format!(
                "At most {MAX_ENABLED_RULES} rules can be bridged \
                 simultaneously"
            ),
        ));
    }
    if ctx.manual_vlan_id_support {
        if let Some(value) = &selection.manual_vlan_id {
            check_manual_vlan_id(value)?;
        }
    }
    log::debug!(
        "Accepted enable list of {} rules",
        selection.selected.len()
    );
    Ok(())
}

/// Validate the manual VLAN ID of the bridge group. The form strips
/// non-digit characters before submission, reproduced here.
pub fn check_manual_vlan_id(value: &str) -> Result<u16, VlanmapError> {
    let digits: String =
        value.chars().filter(char::is_ascii_digit).collect();
    let id: u32 = digits.parse().map_err(|_| {
        VlanmapError::new(
            ErrorKind::IdNotNumeric,
            format!("Invalid manual VLAN ID '{value}', expecting a number"),
        )
    })?;
    if id < 1 || id > u32::from(VLAN_ID_MAX) {
        return Err(VlanmapError::new(
            ErrorKind::IdOutOfRange,
            format!("Manual VLAN ID {id} out of range 1..={VLAN_ID_MAX}"),
        ));
    }
    Ok(id as u16)
}
