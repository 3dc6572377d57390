use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::{EventId, GroupId, PersonId};

/// Kind of event a record represents.
///
/// Camps and campy courses share the application workflow; plain courses
/// and generic events have no camp application at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventKind {
    Camp,
    /// A course whose kind is flagged as camp-like; it files a camp
    /// application like a camp but is not one for supercamp purposes.
    CampyCourse,
    Course,
    Generic,
}

impl EventKind {
    /// Whether the event files a camp application.
    pub fn campy(self) -> bool {
        matches!(self, Self::Camp | Self::CampyCourse)
    }
}

/// A single date entry of an event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventDate {
    pub label: Option<String>,
    pub location: Option<String>,
    pub start_at: Option<NaiveDate>,
    pub finish_at: Option<NaiveDate>,
}

/// An application or administrative question attached to a camp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: u64,
    pub question: String,
    /// Administrative questions are answered by leaders, not participants.
    pub admin: bool,
    /// Whether the question is propagated to a supercamp on merge.
    pub pass_on_to_supercamp: bool,
}

/// Contact attributes that may be passed on to a supercamp.
pub const KNOWN_CONTACT_ATTRS: &[&str] = &[
    "first_name",
    "last_name",
    "nickname",
    "address",
    "email",
    "phone_numbers",
    "social_accounts",
];

/// A camp (or campy course) record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Camp {
    pub id: EventId,
    pub group_id: GroupId,
    pub kind: EventKind,
    pub name: String,
    pub dates: Vec<EventDate>,

    // Application data filed with the cantonal authority
    pub canton: Option<String>,
    pub location: Option<String>,
    pub coordinates: Option<String>,
    pub altitude: Option<String>,
    pub emergency_phone: Option<String>,
    pub landlord: Option<String>,
    pub expected_participants: Option<u32>,

    /// The person coaching the camp; confirms and submits the application.
    pub coach: Option<PersonId>,
    /// The camp leader; owns the checkpoint flags.
    pub leader: Option<PersonId>,

    /// Set by the coach once they reviewed the application.
    pub coach_confirmed: bool,
    // Leader checkpoint flags — writable only by the designated leader.
    pub lagerreglement_applied: bool,
    pub kantonalverband_rules_applied: bool,
    pub j_s_rules_applied: bool,

    /// Date the application was filed; `None` while in draft.
    pub camp_submitted_at: Option<NaiveDate>,

    /// Supercamp this camp is nested under, if any.
    pub parent_id: Option<EventId>,
    pub application_questions: Vec<Question>,
    pub admin_questions: Vec<Question>,
    /// Participant contact attributes shared with the supercamp. Updates
    /// replace the whole set.
    pub contact_attrs_passed_on_to_supercamp: BTreeSet<String>,
}

impl Camp {
    pub fn new(id: EventId, group_id: GroupId, kind: EventKind, name: impl Into<String>) -> Self {
        Self {
            id,
            group_id,
            kind,
            name: name.into(),
            dates: Vec::new(),
            canton: None,
            location: None,
            coordinates: None,
            altitude: None,
            emergency_phone: None,
            landlord: None,
            expected_participants: None,
            coach: None,
            leader: None,
            coach_confirmed: false,
            lagerreglement_applied: false,
            kantonalverband_rules_applied: false,
            j_s_rules_applied: false,
            camp_submitted_at: None,
            parent_id: None,
            application_questions: Vec::new(),
            admin_questions: Vec::new(),
            contact_attrs_passed_on_to_supercamp: BTreeSet::new(),
        }
    }

    /// Whether the application has been filed.
    pub fn camp_submitted(&self) -> bool {
        self.camp_submitted_at.is_some()
    }

    /// Questions flagged for propagation to a supercamp, across both lists.
    pub fn questions_passed_on_to_supercamp(&self) -> impl Iterator<Item = &Question> {
        self.application_questions
            .iter()
            .chain(self.admin_questions.iter())
            .filter(|q| q.pass_on_to_supercamp)
    }
}
