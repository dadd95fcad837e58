//! Structural and migration checks on plans.

use crate::domain::role::REQUIRED_GROUPS;
use crate::domain::{DomainError, InstanceGroup, Plan};

/// Checks a plan before (and after) it is mapped onto a deployment.
#[derive(Debug, Clone)]
pub struct PlanValidator {
    required: Vec<String>,
}

impl Default for PlanValidator {
    fn default() -> Self {
        Self::new(REQUIRED_GROUPS)
    }
}

impl PlanValidator {
    /// Validator requiring the given groups, reported in the given order.
    pub fn new<I, S>(required: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            required: required.into_iter().map(Into::into).collect(),
        }
    }

    #[must_use]
    pub fn required_groups(&self) -> &[String] {
        &self.required
    }

    /// Every required group must be declared by the plan.
    ///
    /// # Errors
    ///
    /// [`DomainError::MissingGroups`] listing all missing groups, plus every
    /// group the plan does declare.
    pub fn check_required_groups(&self, plan: &Plan) -> Result<(), DomainError> {
        let missing: Vec<String> = self
            .required
            .iter()
            .filter(|name| !plan.has_group(name))
            .cloned()
            .collect();

        if missing.is_empty() {
            return Ok(());
        }

        Err(DomainError::MissingGroups {
            missing,
            present: plan.group_names().into_iter().map(String::from).collect(),
        })
    }

    /// Required roles may grow or stay the same across a migration, never
    /// shrink. A first deploy has no previous plan and always passes.
    ///
    /// A role the plan does not declare counts as zero instances.
    ///
    /// # Errors
    ///
    /// [`DomainError::PlanShrunk`] for the first required role that loses
    /// instances.
    pub fn check_migration(&self, previous: Option<&Plan>, current: &Plan) -> Result<(), DomainError> {
        let Some(previous) = previous else {
            return Ok(());
        };

        let before = previous.instance_counts();
        let after = current.instance_counts();

        for role in &self.required {
            let previous_count = before.get(role.as_str()).copied().unwrap_or(0);
            let current_count = after.get(role.as_str()).copied().unwrap_or(0);
            if current_count < previous_count {
                return Err(DomainError::PlanShrunk {
                    role: role.clone(),
                    previous: previous_count,
                    current: current_count,
                });
            }
        }

        Ok(())
    }

    /// The mapped primary group must sit on exactly one network.
    ///
    /// # Errors
    ///
    /// [`DomainError::WrongNetworkCount`] naming the group and the count seen.
    pub fn check_network_count(group: &InstanceGroup) -> Result<(), DomainError> {
        match group.networks.len() {
            1 => Ok(()),
            got => Err(DomainError::WrongNetworkCount {
                group: group.name.clone(),
                got,
            }),
        }
    }
}
