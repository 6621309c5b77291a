// SPDX-License-Identifier: Apache-2.0

use crate::{DeviceContext, ErrorKind, VlanRule, VlanmapError};

/// Highest custom rule slot. Slot 0 stays reserved for the Internet rule.
pub const MAX_CUSTOM_RULES: usize = 10;
/// RU deployments keep one slot back since slot 0 already holds the
/// Intranet rule.
pub const MAX_CUSTOM_RULES_RU: usize = 9;

pub const INTERNET_RULE_NAME: &str = "Internet";
pub const INTRANET_RULE_NAME: &str = "Intranet";

/// Ordered VLAN rule table as loaded from the device. Index 0 is the
/// distinguished Internet slot; whether it is iterated as a real rule
/// depends on [DeviceContext::first_real_index].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RuleTable {
    rules: Vec<VlanRule>,
}

impl RuleTable {
    pub fn new(rules: Vec<VlanRule>) -> Self {
        Self { rules }
    }

    /// Parse the firmware serialization, one record per rule, in slot
    /// order starting at 0.
    pub fn from_records<'a, I>(records: I) -> Result<Self, VlanmapError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let rules = records
            .into_iter()
            .map(VlanRule::from_record)
            .collect::<Result<Vec<_>, _>>()?;
        log::debug!("Loaded VLAN rule table with {} slots", rules.len());
        Ok(Self { rules })
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&VlanRule> {
        self.rules.get(index)
    }

    /// Highest occupied slot index. The firmware tracks this as its rule
    /// count, custom rules occupy slots 1 and up.
    pub fn last_index(&self) -> usize {
        self.rules.len().saturating_sub(1)
    }

    /// Iterate the slots treated as real rules for this deployment.
    pub fn iter_real<'a>(
        &'a self,
        ctx: &DeviceContext,
    ) -> impl Iterator<Item = (usize, &'a VlanRule)> + 'a {
        self.rules
            .iter()
            .enumerate()
            .skip(ctx.first_real_index())
    }

    /// Whether the table still has a free slot for a new custom rule.
    pub fn ensure_add_capacity(
        &self,
        ctx: &DeviceContext,
    ) -> Result<(), VlanmapError> {
        if self.last_index() >= ctx.max_custom_rules() {
            return Err(VlanmapError::new(
                ErrorKind::TooManyRules,
                format!(
                    "Rule table is full, at most {} custom rules supported",
                    ctx.max_custom_rules()
                ),
            ));
        }
        Ok(())
    }

    /// Whether the rule at `index` may be deleted. The Internet rule, and
    /// the Intranet rule under RU deployments, stay protected.
    pub fn check_delete(
        &self,
        index: usize,
        ctx: &DeviceContext,
    ) -> Result<(), VlanmapError> {
        let rule = self.get(index).ok_or_else(|| {
            VlanmapError::new(
                ErrorKind::InvalidRecord,
                format!(
                    "Delete index {index} out of range, table holds {} \
                     slots",
                    self.len()
                ),
            )
        })?;
        if rule.name == INTERNET_RULE_NAME
            || (rule.name == INTRANET_RULE_NAME && ctx.is_for_ru)
        {
            return Err(VlanmapError::new(
                ErrorKind::DeleteProtectedRule,
                format!("The {} rule cannot be deleted", rule.name),
            ));
        }
        Ok(())
    }
}
