// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

use crate::{ErrorKind, VlanmapError, WiredPorts, WirelessPorts};

pub const VLAN_ID_MAX: u16 = 4094;
pub const VLAN_PRIORITY_MAX: u8 = 7;
pub const VLAN_NAME_MAX_LEN: usize = 10;

/// Number of whitespace-separated fields a device record must carry:
/// `[unused, name, id, priority, wiredMask, wirelessMask]`, trailing
/// fields ignored.
const RECORD_MIN_FIELDS: usize = 6;

/// One row of the device's VLAN rule table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
#[non_exhaustive]
pub struct VlanRule {
    pub name: String,
    #[serde(deserialize_with = "crate::deserializer::u16_or_string")]
    pub id: u16,
    #[serde(
        default,
        deserialize_with = "crate::deserializer::u8_or_string"
    )]
    pub priority: u8,
    #[serde(default)]
    pub wired_ports: WiredPorts,
    #[serde(default)]
    pub wireless_ports: WirelessPorts,
}

impl VlanRule {
    pub fn new(
        name: String,
        id: u16,
        priority: u8,
        wired_ports: WiredPorts,
        wireless_ports: WirelessPorts,
    ) -> Self {
        Self {
            name,
            id,
            priority,
            wired_ports,
            wireless_ports,
        }
    }

    /// Parse one record of the firmware serialization, a whitespace
    /// separated line in the field order `[unused, name, id, priority,
    /// wiredMask, wirelessMask, ...]`. Malformed records are a contract
    /// violation of the device state, not a user-input verdict.
    pub fn from_record(record: &str) -> Result<Self, VlanmapError> {
        let fields: Vec<&str> = record.split_whitespace().collect();
        if fields.len() < RECORD_MIN_FIELDS {
            return Err(VlanmapError::new(
                ErrorKind::InvalidRecord,
                format!(
                    "VLAN record '{record}' holds {} fields, expecting at \
                     least {RECORD_MIN_FIELDS}",
                    fields.len()
                ),
            ));
        }
        let id: u16 = parse_field(fields[2], "VLAN ID", record)?;
        if id > VLAN_ID_MAX {
            return Err(VlanmapError::new(
                ErrorKind::InvalidRecord,
                format!(
                    "VLAN record '{record}' holds VLAN ID {id}, \
                     exceeding {VLAN_ID_MAX}"
                ),
            ));
        }
        Ok(Self {
            name: fields[1].to_string(),
            id,
            priority: parse_field(fields[3], "priority", record)?,
            wired_ports: WiredPorts::new(parse_field(
                fields[4],
                "wired port mask",
                record,
            )?),
            wireless_ports: WirelessPorts::new(parse_field(
                fields[5],
                "wireless port mask",
                record,
            )?),
        })
    }
}

fn parse_field<T>(
    value: &str,
    what: &str,
    record: &str,
) -> Result<T, VlanmapError>
where
    T: std::str::FromStr,
{
    value.parse().map_err(|_| {
        VlanmapError::new(
            ErrorKind::InvalidRecord,
            format!("Invalid {what} '{value}' in VLAN record '{record}'"),
        )
    })
}
