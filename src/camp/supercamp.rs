//! Nesting camps under a supercamp.
//!
//! A supercamp aggregates several child camps. When a camp is attached, the
//! supercamp's name and date/location suggestions are held in transient
//! session state and offered as prefill on the next edit form — but only
//! for actual camps, never for courses or generic events.

use crate::core::EventId;

use super::types::{Camp, EventDate, EventKind};

/// Transient prefill data carried over from the selected supercamp.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SupercampDraft {
    pub name: Option<String>,
    pub dates: Vec<EventDate>,
}

/// Merge supercamp prefill data into an edit draft.
///
/// Applies only to [`EventKind::Camp`]; courses (campy or not) and generic
/// events are left unchanged.
pub fn merge_draft(camp: &mut Camp, draft: &SupercampDraft) {
    if camp.kind != EventKind::Camp {
        return;
    }
    if let Some(name) = &draft.name {
        camp.name = name.clone();
    }
    camp.dates.extend(draft.dates.iter().cloned());
}

/// Nest a camp under a supercamp.
///
/// Reparenting is independent of the application lifecycle; a camp under a
/// new parent can still be submitted.
pub fn move_to_child_of(camp: &mut Camp, parent: EventId) {
    camp.parent_id = Some(parent);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GroupId;

    fn draft() -> SupercampDraft {
        SupercampDraft {
            name: Some("Hierarchisches Lager: Schekka".into()),
            dates: vec![EventDate {
                location: Some("Linth-Ebene".into()),
                ..EventDate::default()
            }],
        }
    }

    #[test]
    fn merges_for_camp_only() {
        let mut camp = Camp::new(EventId(1), GroupId(1), EventKind::Camp, "Schekka");
        merge_draft(&mut camp, &draft());
        assert_eq!(camp.name, "Hierarchisches Lager: Schekka");
        assert_eq!(camp.dates[0].location.as_deref(), Some("Linth-Ebene"));

        for kind in [EventKind::Course, EventKind::CampyCourse, EventKind::Generic] {
            let mut event = Camp::new(EventId(2), GroupId(1), kind, "Kurs");
            merge_draft(&mut event, &draft());
            assert_eq!(event.name, "Kurs");
            assert!(event.dates.is_empty());
        }
    }

    #[test]
    fn reparenting() {
        let mut camp = Camp::new(EventId(1), GroupId(1), EventKind::Camp, "Schekka");
        assert!(camp.parent_id.is_none());
        move_to_child_of(&mut camp, EventId(99));
        assert_eq!(camp.parent_id, Some(EventId(99)));
    }
}
