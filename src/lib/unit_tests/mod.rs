// SPDX-License-Identifier: Apache-2.0

mod bridge;
mod check;

use crate::{VlanRule, WiredPorts, WirelessPorts};

pub(crate) fn new_rule(
    name: &str,
    id: u16,
    priority: u8,
    wired: u8,
    wireless: u8,
) -> VlanRule {
    VlanRule::new(
        name.to_string(),
        id,
        priority,
        WiredPorts::new(wired),
        WirelessPorts::new(wireless),
    )
}
