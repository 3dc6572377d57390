use serde::{Deserialize, Serialize};

/// Identifier of a person.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PersonId(pub u64);

/// Identifier of a group (local group, cantonal association, national body).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GroupId(pub u64);

/// Identifier of an event (camp, course, supercamp).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EventId(pub u64);

/// A role an acting person holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    /// National-body role; may view any camp application.
    Federation,
    /// Administrator of a group; may edit its invoice configuration.
    GroupAdmin(GroupId),
    /// Plain member of a group.
    Member(GroupId),
}

/// The acting person of an operation, with the roles they hold.
///
/// Record-specific designations (a camp's coach or leader) live on the
/// record itself and are checked against [`Actor::person`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    pub person: PersonId,
    pub roles: Vec<Role>,
}

impl Actor {
    /// An actor without any roles.
    pub fn new(person: PersonId) -> Self {
        Self {
            person,
            roles: Vec::new(),
        }
    }

    /// Add a role (builder-style).
    pub fn with_role(mut self, role: Role) -> Self {
        self.roles.push(role);
        self
    }

    /// Whether the actor holds a national-body role.
    pub fn is_federation(&self) -> bool {
        self.roles.iter().any(|r| matches!(r, Role::Federation))
    }

    /// Whether the actor administers the given group.
    pub fn is_admin_of(&self, group: GroupId) -> bool {
        self.roles
            .iter()
            .any(|r| matches!(r, Role::GroupAdmin(g) if *g == group))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_role_is_group_scoped() {
        let actor = Actor::new(PersonId(1)).with_role(Role::GroupAdmin(GroupId(7)));
        assert!(actor.is_admin_of(GroupId(7)));
        assert!(!actor.is_admin_of(GroupId(8)));
        assert!(!actor.is_federation());
    }

    #[test]
    fn federation_role() {
        let actor = Actor::new(PersonId(2)).with_role(Role::Federation);
        assert!(actor.is_federation());
        assert!(!actor.is_admin_of(GroupId(1)));
    }
}
