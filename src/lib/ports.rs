// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

pub const WIRED_PORT_COUNT: usize = 4;
pub const WIRELESS_PORT_COUNT: usize = 4;

/// Wired port membership mask, bit `i` set when LAN port `i + 1` carries
/// the VLAN.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct WiredPorts(
    #[serde(deserialize_with = "crate::deserializer::u8_or_string")] u8,
);

impl WiredPorts {
    /// Every LAN port, `0b1111` on a 4-port device.
    pub const ALL: Self = Self(0b1111);

    pub fn new(mask: u8) -> Self {
        Self(mask)
    }

    pub fn raw(&self) -> u8 {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn contains(&self, port: usize) -> bool {
        (self.0 >> port) & 1 == 1
    }
}

/// Radio membership mask. The device stores SSID1 as bit 0, SSID2 as
/// bit 1, guest SSID1 as bit 2 and guest SSID2 as bit 3.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct WirelessPorts(
    #[serde(deserialize_with = "crate::deserializer::u8_or_string")] u8,
);

impl WirelessPorts {
    pub const SSID1: u8 = 0b0001;
    pub const SSID2: u8 = 0b0010;
    pub const GUEST_SSID1: u8 = 0b0100;
    pub const GUEST_SSID2: u8 = 0b1000;

    /// Both main SSIDs and nothing else. Combined with [WiredPorts::ALL]
    /// this encoding is reserved for the IPTV bridge special case.
    pub const BOTH_SSIDS: Self = Self(Self::SSID1 | Self::SSID2);

    pub fn new(mask: u8) -> Self {
        Self(mask)
    }

    pub fn raw(&self) -> u8 {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn contains(&self, slot: usize) -> bool {
        (self.0 >> slot) & 1 == 1
    }
}

/// One submission of the eight port checkboxes of the VLAN/IPTV form.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
#[non_exhaustive]
pub struct PortSelection {
    /// LAN ports 1 to 4.
    #[serde(default)]
    pub lan: [bool; WIRED_PORT_COUNT],
    #[serde(default)]
    pub ssid1: bool,
    #[serde(default)]
    pub ssid2: bool,
    #[serde(default)]
    pub guest_ssid1: bool,
    #[serde(default)]
    pub guest_ssid2: bool,
}

impl PortSelection {
    pub fn wired(&self) -> WiredPorts {
        let mut mask = 0;
        for (port, checked) in self.lan.iter().enumerate() {
            if *checked {
                mask |= 1 << port;
            }
        }
        WiredPorts::new(mask)
    }

    // The form wires its checkboxes in the order SSID1, guest SSID1,
    // SSID2, guest SSID2, the stored weights stay 1/2/4/8 per radio.
    pub fn wireless(&self) -> WirelessPorts {
        let mut mask = 0;
        if self.ssid1 {
            mask |= WirelessPorts::SSID1;
        }
        if self.guest_ssid1 {
            mask |= WirelessPorts::GUEST_SSID1;
        }
        if self.ssid2 {
            mask |= WirelessPorts::SSID2;
        }
        if self.guest_ssid2 {
            mask |= WirelessPorts::GUEST_SSID2;
        }
        WirelessPorts::new(mask)
    }
}
