// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

use crate::PortSelection;

/// Provider preset of a candidate rule. The orange kinds only matter when
/// the provider feature is active on the device.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "kebab-case")]
#[non_exhaustive]
pub enum VlanKind {
    #[default]
    Standard,
    /// Orange passthrough preset, allowed to carry no port at all.
    Orange,
    OrangeDhcp,
    OrangePppoe,
}

/// Whether the candidate adds a new rule or replaces an existing slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SubmitMode {
    Add,
    #[serde(rename_all = "kebab-case")]
    Edit {
        /// Slot being replaced, excluded from self-conflict checks.
        index: usize,
        /// Editing the distinguished Internet rule: name and ports are
        /// not editable and the ID range widens to 0..=4094.
        #[serde(default)]
        default_internet: bool,
    },
}

/// One submission of the VLAN rule form, fields still in their raw
/// (stringly) shape. Canonicalization happens during the check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
#[non_exhaustive]
pub struct Candidate {
    pub name: String,
    pub id: String,
    /// Blank means priority 0.
    #[serde(default)]
    pub priority: String,
    #[serde(default)]
    pub kind: VlanKind,
    #[serde(default)]
    pub ports: PortSelection,
    pub mode: SubmitMode,
}

impl Candidate {
    pub fn new(name: &str, id: &str, mode: SubmitMode) -> Self {
        Self {
            name: name.to_string(),
            id: id.to_string(),
            priority: String::new(),
            kind: VlanKind::default(),
            ports: PortSelection::default(),
            mode,
        }
    }
}
