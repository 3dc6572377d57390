use std::collections::HashMap;

use crate::core::{Actor, GroupId, LagerwerkError, join_errors};

use super::config::InvoiceConfig;
use super::validation::{ValidationContext, validate_config};

/// Holds the invoice configurations of all groups, one per group.
///
/// Removing a config drops its payment reminder configs with it; they are
/// owned by the config and have no life of their own.
#[derive(Debug, Default)]
pub struct InvoiceConfigRegistry {
    configs: HashMap<GroupId, InvoiceConfig>,
}

impl InvoiceConfigRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the config created with a new group.
    ///
    /// Fails if the group already has one, or if the config carries values
    /// that fail creation-time validation.
    pub fn create(&mut self, config: InvoiceConfig) -> Result<(), LagerwerkError> {
        if self.configs.contains_key(&config.group_id) {
            return Err(LagerwerkError::Config(format!(
                "group {} already has an invoice config",
                config.group_id.0
            )));
        }
        let errors = validate_config(&config, ValidationContext::Create);
        if !errors.is_empty() {
            return Err(LagerwerkError::Validation(join_errors(&errors)));
        }
        self.configs.insert(config.group_id, config);
        Ok(())
    }

    /// Replace a group's config with administrator-edited values.
    ///
    /// Only administrators of the group may update it; the update is blocked
    /// while any validation error remains.
    pub fn update(
        &mut self,
        actor: &Actor,
        config: InvoiceConfig,
    ) -> Result<(), LagerwerkError> {
        if !actor.is_admin_of(config.group_id) {
            return Err(LagerwerkError::AccessDenied(format!(
                "person {} does not administer group {}",
                actor.person.0, config.group_id.0
            )));
        }
        if !self.configs.contains_key(&config.group_id) {
            return Err(LagerwerkError::Config(format!(
                "group {} has no invoice config",
                config.group_id.0
            )));
        }
        let errors = validate_config(&config, ValidationContext::Update);
        if !errors.is_empty() {
            return Err(LagerwerkError::Validation(join_errors(&errors)));
        }
        self.configs.insert(config.group_id, config);
        Ok(())
    }

    pub fn get(&self, group: GroupId) -> Option<&InvoiceConfig> {
        self.configs.get(&group)
    }

    pub fn get_mut(&mut self, group: GroupId) -> Option<&mut InvoiceConfig> {
        self.configs.get_mut(&group)
    }

    /// Remove a group's config together with its reminder configs.
    pub fn remove(&mut self, group: GroupId) -> Option<InvoiceConfig> {
        self.configs.remove(&group)
    }

    pub fn len(&self) -> usize {
        self.configs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.configs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{PersonId, Role};

    fn admin(group: GroupId) -> Actor {
        Actor::new(PersonId(1)).with_role(Role::GroupAdmin(group))
    }

    fn valid_config(group: GroupId) -> InvoiceConfig {
        InvoiceConfig {
            address: Some("Pfadi Muster, 3000 Bern".into()),
            payee: Some("Pfadi Muster".into()),
            account_number: Some("01-162-5".into()),
            iban: Some("CH9300762011623852957".into()),
            ..InvoiceConfig::new(group)
        }
    }

    #[test]
    fn one_config_per_group() {
        let group = GroupId(5);
        let mut registry = InvoiceConfigRegistry::new();
        registry.create(InvoiceConfig::new(group)).unwrap();

        let err = registry.create(InvoiceConfig::new(group)).unwrap_err();
        assert!(matches!(err, LagerwerkError::Config(_)));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn update_requires_group_admin() {
        let group = GroupId(5);
        let mut registry = InvoiceConfigRegistry::new();
        registry.create(InvoiceConfig::new(group)).unwrap();

        let outsider = Actor::new(PersonId(2)).with_role(Role::Member(group));
        let err = registry.update(&outsider, valid_config(group)).unwrap_err();
        assert!(matches!(err, LagerwerkError::AccessDenied(_)));

        registry.update(&admin(group), valid_config(group)).unwrap();
        assert_eq!(registry.get(group).unwrap().payee.as_deref(), Some("Pfadi Muster"));
    }

    #[test]
    fn update_blocked_until_valid() {
        let group = GroupId(5);
        let mut registry = InvoiceConfigRegistry::new();
        registry.create(InvoiceConfig::new(group)).unwrap();

        let incomplete = InvoiceConfig::new(group);
        let err = registry.update(&admin(group), incomplete).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("payee"));
        assert!(message.contains("address"));

        // Old state untouched
        assert!(registry.get(group).unwrap().payee.is_none());
    }

    #[test]
    fn remove_drops_reminders_with_the_config() {
        let group = GroupId(5);
        let mut registry = InvoiceConfigRegistry::new();
        let mut config = InvoiceConfig::new(group);
        config.payment_reminders.push(super::super::PaymentReminderConfig {
            level: 1,
            title: "Zahlungserinnerung".into(),
            text: "Bitte begleichen Sie den offenen Betrag.".into(),
            due_days: 14,
        });
        registry.create(config).unwrap();

        let removed = registry.remove(group).unwrap();
        assert_eq!(removed.payment_reminders.len(), 1);
        assert!(registry.get(group).is_none());
        assert!(registry.is_empty());
    }
}
