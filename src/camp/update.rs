use std::collections::BTreeSet;

use crate::core::Actor;

use super::types::{Camp, EventDate, KNOWN_CONTACT_ATTRS};

/// Form-style partial update of a camp.
///
/// `None` fields are left untouched. Checkpoint flags are carried like any
/// other field but only take effect for the designated person (see
/// [`apply_update`]).
#[derive(Debug, Clone, Default)]
pub struct CampUpdate {
    pub name: Option<String>,
    pub canton: Option<String>,
    pub location: Option<String>,
    pub coordinates: Option<String>,
    pub altitude: Option<String>,
    pub emergency_phone: Option<String>,
    pub landlord: Option<String>,
    pub expected_participants: Option<u32>,
    pub dates: Option<Vec<EventDate>>,

    /// Coach-only checkpoint.
    pub coach_confirmed: Option<bool>,
    // Leader-only checkpoints.
    pub lagerreglement_applied: Option<bool>,
    pub kantonalverband_rules_applied: Option<bool>,
    pub j_s_rules_applied: Option<bool>,

    /// Per-question propagation flags, matched by question id.
    pub question_flags: Vec<QuestionFlagUpdate>,
    /// Replaces the full set when present; entries not re-submitted are
    /// removed.
    pub contact_attrs_passed_on_to_supercamp: Option<BTreeSet<String>>,
}

/// Toggle of one question's `pass_on_to_supercamp` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestionFlagUpdate {
    pub question_id: u64,
    pub pass_on_to_supercamp: bool,
}

/// Apply a partial update with the actor's permissions.
///
/// Checkpoint writes by anyone but the designated coach/leader are dropped
/// silently: the value stays unchanged and no error is raised. All other
/// fields apply unconditionally.
pub fn apply_update(camp: &mut Camp, actor: &Actor, update: CampUpdate) {
    if let Some(name) = update.name {
        camp.name = name;
    }
    if let Some(canton) = update.canton {
        camp.canton = Some(canton);
    }
    if let Some(location) = update.location {
        camp.location = Some(location);
    }
    if let Some(coordinates) = update.coordinates {
        camp.coordinates = Some(coordinates);
    }
    if let Some(altitude) = update.altitude {
        camp.altitude = Some(altitude);
    }
    if let Some(phone) = update.emergency_phone {
        camp.emergency_phone = Some(phone);
    }
    if let Some(landlord) = update.landlord {
        camp.landlord = Some(landlord);
    }
    if let Some(expected) = update.expected_participants {
        camp.expected_participants = Some(expected);
    }
    if let Some(dates) = update.dates {
        camp.dates = dates;
    }

    let campy = camp.kind.campy();

    if campy && camp.coach == Some(actor.person) {
        if let Some(confirmed) = update.coach_confirmed {
            camp.coach_confirmed = confirmed;
        }
    }

    if campy && camp.leader == Some(actor.person) {
        if let Some(applied) = update.lagerreglement_applied {
            camp.lagerreglement_applied = applied;
        }
        if let Some(applied) = update.kantonalverband_rules_applied {
            camp.kantonalverband_rules_applied = applied;
        }
        if let Some(applied) = update.j_s_rules_applied {
            camp.j_s_rules_applied = applied;
        }
    }

    for flag in update.question_flags {
        let question = camp
            .application_questions
            .iter_mut()
            .chain(camp.admin_questions.iter_mut())
            .find(|q| q.id == flag.question_id);
        if let Some(question) = question {
            question.pass_on_to_supercamp = flag.pass_on_to_supercamp;
        }
    }

    if let Some(attrs) = update.contact_attrs_passed_on_to_supercamp {
        // Full-set replacement; unknown attribute names are dropped silently.
        camp.contact_attrs_passed_on_to_supercamp = attrs
            .into_iter()
            .filter(|a| KNOWN_CONTACT_ATTRS.contains(&a.as_str()))
            .collect();
    }
}

impl CampUpdate {
    /// An update setting every checkpoint flag to `value`.
    pub fn all_checkpoints(value: bool) -> Self {
        Self {
            coach_confirmed: Some(value),
            lagerreglement_applied: Some(value),
            kantonalverband_rules_applied: Some(value),
            j_s_rules_applied: Some(value),
            ..Self::default()
        }
    }
}
