// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

use crate::{MAX_CUSTOM_RULES, MAX_CUSTOM_RULES_RU};

/// Deployment-wide switches of the device firmware.
///
/// The management pages keep these as page-level globals; every decision
/// function here takes them explicitly instead.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
#[non_exhaustive]
pub struct DeviceContext {
    /// RU deployment: slot 0 is a real "Intranet" rule instead of the
    /// distinguished Internet rule.
    #[serde(
        default,
        deserialize_with = "crate::deserializer::bool_or_string"
    )]
    pub is_for_ru: bool,
    /// Orange/Spain provider presets available, with display-name aliasing.
    #[serde(
        default,
        deserialize_with = "crate::deserializer::bool_or_string"
    )]
    pub orange_support: bool,
    /// Manual VLAN ID tagging of the bridge group is available.
    #[serde(
        default,
        deserialize_with = "crate::deserializer::bool_or_string"
    )]
    pub manual_vlan_id_support: bool,
}

impl DeviceContext {
    /// First table index iterated as a real rule. Slot 0 only counts under
    /// RU deployments.
    pub fn first_real_index(&self) -> usize {
        if self.is_for_ru {
            0
        } else {
            1
        }
    }

    pub fn max_custom_rules(&self) -> usize {
        if self.is_for_ru {
            MAX_CUSTOM_RULES_RU
        } else {
            MAX_CUSTOM_RULES
        }
    }
}
