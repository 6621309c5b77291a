// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[non_exhaustive]
pub enum ErrorKind {
    /// VLAN name is empty or longer than 10 characters
    NameEmptyOrTooLong,
    /// VLAN name holds a character outside the allowed set
    NameInvalidChar,
    /// Another rule already uses this VLAN name
    NameDuplicate,
    /// VLAN ID is not a decimal number
    IdNotNumeric,
    /// VLAN ID outside of 1..=4094
    IdOutOfRange,
    /// VLAN ID outside of 0..=4094 when editing the Internet rule
    IdOutOfRangeDefaultEdit,
    /// Priority is not a number within 0..=7
    PriorityInvalid,
    /// Every wired port plus both SSIDs is reserved for bridge mode
    AllPortsReservedCombination,
    /// Neither a wired port nor a radio selected
    NoPortsSelected,
    /// Another wireless-bearing rule already carries this VLAN ID
    IdWirelessConflict,
    /// Another wired-bearing rule already carries this VLAN ID and priority
    IdPriorityWiredConflict,
    /// Rule table is full
    TooManyRules,
    /// A port claimed by more than one rule selected for bridging
    PortClassDuplicate,
    /// More than six rules selected for simultaneous bridging
    TooManySelected,
    /// The Internet(or Intranet) rule cannot be deleted
    DeleteProtectedRule,
    /// Internet rule claims no port while other rules exist
    InternetPortsUnassigned,
    /// Device state record or index out of contract
    InvalidRecord,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NameEmptyOrTooLong => "name-empty-or-too-long",
            Self::NameInvalidChar => "name-invalid-char",
            Self::NameDuplicate => "name-duplicate",
            Self::IdNotNumeric => "id-not-numeric",
            Self::IdOutOfRange => "id-out-of-range",
            Self::IdOutOfRangeDefaultEdit => "id-out-of-range-default-edit",
            Self::PriorityInvalid => "priority-invalid",
            Self::AllPortsReservedCombination => {
                "all-ports-reserved-combination"
            }
            Self::NoPortsSelected => "no-ports-selected",
            Self::IdWirelessConflict => "id-wireless-conflict",
            Self::IdPriorityWiredConflict => "id-priority-wired-conflict",
            Self::TooManyRules => "too-many-rules",
            Self::PortClassDuplicate => "port-class-duplicate",
            Self::TooManySelected => "too-many-selected",
            Self::DeleteProtectedRule => "delete-protected-rule",
            Self::InternetPortsUnassigned => "internet-ports-unassigned",
            Self::InvalidRecord => "invalid-record",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// Try not implement From for VlanmapError here unless you are sure this
// error should always convert to certain type of ErrorKind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct VlanmapError {
    pub kind: ErrorKind,
    pub msg: String,
}

impl std::fmt::Display for VlanmapError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.kind, self.msg)
    }
}

impl VlanmapError {
    pub fn new(kind: ErrorKind, msg: String) -> Self {
        Self { kind, msg }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn msg(&self) -> &str {
        self.msg.as_str()
    }
}

impl std::error::Error for VlanmapError {}
