// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

use crate::{
    Candidate, DeviceContext, ErrorKind, RuleTable, SubmitMode, VlanKind,
    VlanRule, VlanmapError, WiredPorts, WirelessPorts, VLAN_ID_MAX,
    VLAN_NAME_MAX_LEN, VLAN_PRIORITY_MAX, WIRED_PORT_COUNT,
};

pub const ORANGE_DISPLAY_NAME: &str = "Orange France TV";
pub const ORANGE_CANONICAL_NAME: &str = "OrangeIPTV";
pub const SPAIN_DISPLAY_NAME: &str = "Spain Voda IPTV";
pub const SPAIN_CANONICAL_NAME: &str = "SpainIPTV";

/// Accepted candidate in canonical form: parsed numerics, computed port
/// masks and the provider alias resolved, ready to be written back to the
/// device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
#[non_exhaustive]
pub struct CheckedRule {
    pub rule: VlanRule,
    /// Orange passthrough code stored by the firmware when the Internet
    /// rule is edited with provider support active: 1 for DHCP, 2 for
    /// PPPoE, 3 otherwise.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orange_code: Option<u8>,
}

/// Validate one candidate rule against the existing table and return the
/// canonical row, or the first failing check. Pure over its inputs, the
/// table is never mutated.
pub fn check_candidate(
    table: &RuleTable,
    candidate: &Candidate,
    ctx: &DeviceContext,
) -> Result<CheckedRule, VlanmapError> {
    let (edit_index, default_edit) = match candidate.mode {
        SubmitMode::Add => (None, false),
        SubmitMode::Edit {
            index,
            default_internet,
        } => (Some(index), default_internet),
    };
    let edited_rule = match edit_index {
        Some(index) => Some(table.get(index).ok_or_else(|| {
            VlanmapError::new(
                ErrorKind::InvalidRecord,
                format!(
                    "Edit index {index} out of range, table holds {} slots",
                    table.len()
                ),
            )
        })?),
        None => None,
    };

    let name = canonical_name(&candidate.name, ctx);

    if !default_edit {
        check_name(&name)?;
        check_name_duplicate(table, &name, edit_index, ctx)?;
    }

    let id = parse_id(&candidate.id, default_edit)?;
    // An Internet rule going untagged (ID 0) has its priority overwritten
    // with 0 before the field is even validated.
    let priority = if default_edit && id == 0 {
        0
    } else {
        parse_priority(&candidate.priority)?
    };

    // The Internet rule keeps its stored name and ports, everything else
    // takes them from the form.
    let default_rule = if default_edit { edited_rule } else { None };
    let (name, wired, wireless) = match default_rule {
        Some(rule) => (rule.name.clone(), rule.wired_ports, rule.wireless_ports),
        None => {
            let wired = candidate.ports.wired();
            let wireless = candidate.ports.wireless();
            check_port_selection(wired, wireless, candidate.kind, ctx)?;
            (name, wired, wireless)
        }
    };

    let orange_code = match default_rule {
        Some(_) if ctx.orange_support => Some(match candidate.kind {
            VlanKind::OrangeDhcp => 1,
            VlanKind::OrangePppoe => 2,
            _ => 3,
        }),
        _ => None,
    };

    let probe = ConflictProbe {
        id,
        priority,
        wired,
        wireless,
        edit_index,
        default_edit,
    };
    check_conflicts(table, ctx, &probe)?;

    log::debug!(
        "Accepted VLAN rule '{name}': id {id}, priority {priority}, \
         wired {:#06b}, wireless {:#06b}",
        wired.raw(),
        wireless.raw()
    );
    Ok(CheckedRule {
        rule: VlanRule::new(name, id, priority, wired, wireless),
        orange_code,
    })
}

/// Swap a provider display name for the canonical name the firmware
/// stores. Only active with provider support.
fn canonical_name(name: &str, ctx: &DeviceContext) -> String {
    if ctx.orange_support {
        match name {
            ORANGE_DISPLAY_NAME => ORANGE_CANONICAL_NAME.to_string(),
            SPAIN_DISPLAY_NAME => SPAIN_CANONICAL_NAME.to_string(),
            _ => name.to_string(),
        }
    } else {
        name.to_string()
    }
}

/// Inverse of [canonical_name], for user-facing messages.
fn display_name<'a>(name: &'a str, ctx: &DeviceContext) -> &'a str {
    if ctx.orange_support {
        match name {
            ORANGE_CANONICAL_NAME => ORANGE_DISPLAY_NAME,
            SPAIN_CANONICAL_NAME => SPAIN_DISPLAY_NAME,
            other => other,
        }
    } else {
        name
    }
}

fn is_valid_name_char(c: char) -> bool {
    (c.is_ascii_graphic() || c == ' ')
        && !matches!(c, '"' | '\'' | '<' | '>' | '&' | '`')
}

fn check_name(name: &str) -> Result<(), VlanmapError> {
    if name.is_empty() || name.chars().count() > VLAN_NAME_MAX_LEN {
        return Err(VlanmapError::new(
            ErrorKind::NameEmptyOrTooLong,
            format!(
                "VLAN name must be 1 to {VLAN_NAME_MAX_LEN} characters"
            ),
        ));
    }
    if let Some(c) = name.chars().find(|c| !is_valid_name_char(*c)) {
        return Err(VlanmapError::new(
            ErrorKind::NameInvalidChar,
            format!("VLAN name holds unsupported character {c:?}"),
        ));
    }
    Ok(())
}

fn check_name_duplicate(
    table: &RuleTable,
    name: &str,
    edit_index: Option<usize>,
    ctx: &DeviceContext,
) -> Result<(), VlanmapError> {
    for (i, rule) in table.iter_real(ctx) {
        if edit_index == Some(i) {
            continue;
        }
        if rule.name == name {
            return Err(VlanmapError::new(
                ErrorKind::NameDuplicate,
                format!(
                    "The VLAN name {} is already in use",
                    display_name(name, ctx)
                ),
            ));
        }
    }
    Ok(())
}

fn parse_id(value: &str, default_edit: bool) -> Result<u16, VlanmapError> {
    let value = value.trim();
    let id: u32 = value.parse().map_err(|_| {
        VlanmapError::new(
            ErrorKind::IdNotNumeric,
            format!("Invalid VLAN ID '{value}', expecting a number"),
        )
    })?;
    if default_edit {
        if id > u32::from(VLAN_ID_MAX) {
            return Err(VlanmapError::new(
                ErrorKind::IdOutOfRangeDefaultEdit,
                format!(
                    "Internet rule VLAN ID {id} out of range 0..={VLAN_ID_MAX}"
                ),
            ));
        }
    } else if id < 1 || id > u32::from(VLAN_ID_MAX) {
        return Err(VlanmapError::new(
            ErrorKind::IdOutOfRange,
            format!("VLAN ID {id} out of range 1..={VLAN_ID_MAX}"),
        ));
    }
    Ok(id as u16)
}

fn parse_priority(value: &str) -> Result<u8, VlanmapError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(0);
    }
    let priority: u8 = value.parse().map_err(|_| {
        VlanmapError::new(
            ErrorKind::PriorityInvalid,
            format!("Invalid priority '{value}', expecting a number"),
        )
    })?;
    if priority > VLAN_PRIORITY_MAX {
        return Err(VlanmapError::new(
            ErrorKind::PriorityInvalid,
            format!(
                "Priority {priority} out of range 0..={VLAN_PRIORITY_MAX}"
            ),
        ));
    }
    Ok(priority)
}

fn check_port_selection(
    wired: WiredPorts,
    wireless: WirelessPorts,
    kind: VlanKind,
    ctx: &DeviceContext,
) -> Result<(), VlanmapError> {
    if wired == WiredPorts::ALL && wireless == WirelessPorts::BOTH_SSIDS {
        return Err(VlanmapError::new(
            ErrorKind::AllPortsReservedCombination,
            "Every wired port plus both SSIDs is reserved for IPTV bridge \
             mode"
                .to_string(),
        ));
    }
    if wired.is_empty()
        && wireless.is_empty()
        && !(ctx.orange_support && kind == VlanKind::Orange)
    {
        return Err(VlanmapError::new(
            ErrorKind::NoPortsSelected,
            "Select at least one wired port or radio".to_string(),
        ));
    }
    Ok(())
}

/// Table-wide port subscription. Wired ports count per bit; radios count
/// by the exact stored encoding, a rule claims SSID1 with mask 1, SSID2
/// with mask 2 or both with mask 3, guest radios never saturate.
fn scan_saturation(
    table: &RuleTable,
    ctx: &DeviceContext,
) -> (bool, bool) {
    let mut ssid1_claimed = false;
    let mut ssid2_claimed = false;
    let mut both_ssids_claimed = false;
    let mut wired_claimed = [false; WIRED_PORT_COUNT];
    for (_, rule) in table.iter_real(ctx) {
        match rule.wireless_ports.raw() {
            1 => ssid1_claimed = true,
            2 => ssid2_claimed = true,
            3 => both_ssids_claimed = true,
            _ => (),
        }
        for (port, claimed) in wired_claimed.iter_mut().enumerate() {
            if rule.wired_ports.contains(port) {
                *claimed = true;
            }
        }
    }
    let wired_saturated = wired_claimed.iter().all(|claimed| *claimed);
    let wireless_saturated =
        (ssid1_claimed && ssid2_claimed) || both_ssids_claimed;
    (wired_saturated, wireless_saturated)
}

/// Candidate facts the conflict scan compares against every other rule.
struct ConflictProbe {
    id: u16,
    priority: u8,
    wired: WiredPorts,
    wireless: WirelessPorts,
    edit_index: Option<usize>,
    default_edit: bool,
}

/// Cross-rule conflict detection. A same-ID collision only blocks while
/// the colliding port class still has headroom left; once every slot of
/// the class is subscribed another rule cannot grab anything new, so the
/// overlap is tolerated. Slots 0 and 1 carry fixed firmware semantics
/// (Internet, first custom VLAN) and get their own collision predicate.
fn check_conflicts(
    table: &RuleTable,
    ctx: &DeviceContext,
    probe: &ConflictProbe,
) -> Result<(), VlanmapError> {
    let id = probe.id;
    let wifi_selected = !probe.wireless.is_empty();
    let (wired_saturated, wireless_saturated) = scan_saturation(table, ctx);

    for (i, rule) in table.iter_real(ctx) {
        if probe.edit_index == Some(i) {
            continue;
        }
        let rule_wireless = !rule.wireless_ports.is_empty();
        let rule_wired = !rule.wired_ports.is_empty();

        let wireless_conflict = if probe.default_edit {
            rule.id == id && rule_wireless && !wireless_saturated
        } else {
            (i <= 1
                && rule.id == id
                && wifi_selected
                && !wireless_saturated)
                || (rule.id == id && wifi_selected && rule_wireless)
        };
        if wireless_conflict {
            return Err(VlanmapError::new(
                ErrorKind::IdWirelessConflict,
                format!(
                    "VLAN ID {id} is already bridged to a wireless \
                     interface by rule '{}'",
                    rule.name
                ),
            ));
        }

        let ids_match = rule.id == id && rule.priority == probe.priority;
        let wired_conflict = if probe.default_edit {
            ids_match && rule_wired && !wired_saturated
        } else {
            (i <= 1
                && ids_match
                && !probe.wired.is_empty()
                && !wired_saturated)
                || (ids_match && !probe.wired.is_empty() && rule_wired)
        };
        if wired_conflict {
            return Err(VlanmapError::new(
                ErrorKind::IdPriorityWiredConflict,
                format!(
                    "VLAN ID {id} with priority {} is already bridged to \
                     a wired port by rule '{}'",
                    probe.priority, rule.name
                ),
            ));
        }
    }
    Ok(())
}
