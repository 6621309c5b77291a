// SPDX-License-Identifier: Apache-2.0

mod bridge;
mod candidate;
mod check;
mod context;
mod deserializer;
mod enable;
mod error;
mod ports;
mod rule;
mod table;

pub use self::bridge::{check_bridge_ports, BridgeConfig};
pub use self::candidate::{Candidate, SubmitMode, VlanKind};
pub use self::check::{
    check_candidate, CheckedRule, ORANGE_CANONICAL_NAME,
    ORANGE_DISPLAY_NAME, SPAIN_CANONICAL_NAME, SPAIN_DISPLAY_NAME,
};
pub use self::context::DeviceContext;
pub use self::enable::{
    check_enable_list, check_manual_vlan_id, EnableSelection, InternetPorts,
    MAX_ENABLED_RULES,
};
pub use self::error::{ErrorKind, VlanmapError};
pub use self::ports::{
    PortSelection, WiredPorts, WirelessPorts, WIRED_PORT_COUNT,
    WIRELESS_PORT_COUNT,
};
pub use self::rule::{
    VlanRule, VLAN_ID_MAX, VLAN_NAME_MAX_LEN, VLAN_PRIORITY_MAX,
};
pub use self::table::{
    RuleTable, INTERNET_RULE_NAME, INTRANET_RULE_NAME, MAX_CUSTOM_RULES,
    MAX_CUSTOM_RULES_RU,
};

#[cfg(test)]
mod unit_tests;
