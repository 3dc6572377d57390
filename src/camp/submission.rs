use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::{
    Actor, EventId, GroupId, LagerwerkError, PersonId, ValidationError, is_known_canton_code,
    join_errors,
};

use super::types::{Camp, EventDate};

/// Confirmation mail queued after a successful submission.
///
/// Delivery is the caller's concern (fire-and-forget); `submit` returns
/// exactly one of these per successful call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampSubmissionMail {
    pub event_id: EventId,
    pub group_id: GroupId,
    pub camp_name: String,
    /// The coach (or leader, for coachless campy courses) to confirm to.
    pub recipient: PersonId,
    pub submitted_at: NaiveDate,
}

/// Printable application summary, handed to the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampApplication {
    pub camp_name: String,
    pub canton: Option<String>,
    pub location: Option<String>,
    pub coordinates: Option<String>,
    pub altitude: Option<String>,
    pub dates: Vec<EventDate>,
    pub leader: Option<PersonId>,
    pub coach: Option<PersonId>,
    pub expected_participants: Option<u32>,
}

/// Everything still blocking submission of the application.
/// Returns all violations found (not just the first).
pub fn submission_blockers(camp: &Camp) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    match camp.canton.as_deref().filter(|c| !c.trim().is_empty()) {
        None => errors.push(ValidationError::with_key(
            "canton",
            "must be filled in",
            "blank",
        )),
        Some(canton) if !is_known_canton_code(canton) => {
            errors.push(ValidationError::with_key(
                "canton",
                format!("'{canton}' is not a known canton code"),
                "unknown_canton",
            ));
        }
        Some(_) => {}
    }

    require_present(camp.location.as_deref(), "location", &mut errors);
    require_present(camp.coordinates.as_deref(), "coordinates", &mut errors);
    require_present(camp.altitude.as_deref(), "altitude", &mut errors);
    require_present(camp.emergency_phone.as_deref(), "emergency_phone", &mut errors);
    require_present(camp.landlord.as_deref(), "landlord", &mut errors);

    require_flag(camp.coach_confirmed, "coach_confirmed", &mut errors);
    require_flag(
        camp.lagerreglement_applied,
        "lagerreglement_applied",
        &mut errors,
    );
    require_flag(
        camp.kantonalverband_rules_applied,
        "kantonalverband_rules_applied",
        &mut errors,
    );
    require_flag(camp.j_s_rules_applied, "j_s_rules_applied", &mut errors);

    if camp.expected_participants.is_none() {
        errors.push(ValidationError::with_key(
            "expected_participants",
            "must be filled in",
            "blank",
        ));
    }

    errors
}

/// File the camp application with the cantonal authority.
///
/// Only the camp's coach or leader may submit. While required data is
/// missing, submission is blocked with an itemized error and the
/// submission timestamp stays untouched. Nesting under a supercamp never
/// blocks submission; re-submitting refreshes the timestamp.
pub fn submit(
    camp: &mut Camp,
    actor: &Actor,
    today: NaiveDate,
) -> Result<CampSubmissionMail, LagerwerkError> {
    authorize_submission(camp, actor)?;

    let blockers = submission_blockers(camp);
    if !blockers.is_empty() {
        return Err(LagerwerkError::Submission(join_errors(&blockers)));
    }

    camp.camp_submitted_at = Some(today);
    let recipient = camp.coach.or(camp.leader).unwrap_or(actor.person);
    Ok(CampSubmissionMail {
        event_id: camp.id,
        group_id: camp.group_id,
        camp_name: camp.name.clone(),
        recipient,
        submitted_at: today,
    })
}

/// Render-ready application data for the given actor.
///
/// Coaches, leaders, and national-body roles may view it; anyone else is
/// denied.
pub fn camp_application(camp: &Camp, actor: &Actor) -> Result<CampApplication, LagerwerkError> {
    if !camp.kind.campy() {
        return Err(LagerwerkError::Config(format!(
            "event {} has no camp application",
            camp.id.0
        )));
    }
    let designated = is_coach_or_leader(camp, actor.person);
    if !designated && !actor.is_federation() {
        return Err(LagerwerkError::AccessDenied(format!(
            "person {} may not view the application of camp {}",
            actor.person.0, camp.id.0
        )));
    }
    Ok(CampApplication {
        camp_name: camp.name.clone(),
        canton: camp.canton.clone(),
        location: camp.location.clone(),
        coordinates: camp.coordinates.clone(),
        altitude: camp.altitude.clone(),
        dates: camp.dates.clone(),
        leader: camp.leader,
        coach: camp.coach,
        expected_participants: camp.expected_participants,
    })
}

fn authorize_submission(camp: &Camp, actor: &Actor) -> Result<(), LagerwerkError> {
    if !camp.kind.campy() {
        return Err(LagerwerkError::Config(format!(
            "event {} has no camp application",
            camp.id.0
        )));
    }
    if !is_coach_or_leader(camp, actor.person) {
        return Err(LagerwerkError::AccessDenied(format!(
            "person {} is neither coach nor leader of camp {}",
            actor.person.0, camp.id.0
        )));
    }
    Ok(())
}

fn is_coach_or_leader(camp: &Camp, person: PersonId) -> bool {
    camp.coach == Some(person) || camp.leader == Some(person)
}

fn require_present(value: Option<&str>, field: &str, errors: &mut Vec<ValidationError>) {
    if value.is_none_or(|v| v.trim().is_empty()) {
        errors.push(ValidationError::with_key(
            field,
            "must be filled in",
            "blank",
        ));
    }
}

fn require_flag(value: bool, field: &str, errors: &mut Vec<ValidationError>) {
    if !value {
        errors.push(ValidationError::with_key(
            field,
            "must be confirmed",
            "unconfirmed",
        ));
    }
}
