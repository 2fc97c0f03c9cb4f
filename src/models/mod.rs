//! Domain data model for the scheduling engine.
//!
//! These types mirror the records the engine ingests from the surrounding
//! application. JSON field names are camelCase for compatibility with data
//! exported from it. Two deliberate quirks are preserved:
//!
//! - [`Timeslot`] keeps its bounds as raw `"H:MM AM/PM"` strings; parsing
//!   (and its silent 120-minute fallback) happens in [`clock`] at the moment
//!   a duration is needed, not at rest.
//! - [`Rehearsal`] embeds full snapshots of its timeslot and actors, taken at
//!   creation time. Later edits to the source records do not propagate.

pub mod clock;
pub mod company;

pub use company::{parse_company_json_str, CompanyData};

use crate::api::{ActorId, RehearsalId, SceneId, TimeslotId};
use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// A company member who can be cast in scenes and booked into timeslots.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Actor {
    pub id: ActorId,
    pub name: String,
    /// Timeslots this actor has marked themselves available for.
    #[serde(default)]
    pub available_timeslots: Vec<TimeslotId>,
    /// Scenes this actor is cast in, by scene id.
    #[serde(default)]
    pub scene_ids: Vec<SceneId>,
}

impl Actor {
    pub fn new(id: impl Into<ActorId>, name: impl Into<String>) -> Self {
        Actor {
            id: id.into(),
            name: name.into(),
            available_timeslots: Vec::new(),
            scene_ids: Vec::new(),
        }
    }

    /// Whether the actor is available for the given timeslot.
    pub fn is_available_for(&self, timeslot: &TimeslotId) -> bool {
        self.available_timeslots.contains(timeslot)
    }

    /// Whether the actor is cast in the given scene.
    pub fn is_cast_in(&self, scene: &SceneId) -> bool {
        self.scene_ids.contains(scene)
    }
}

/// A scene from the production being rehearsed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Scene {
    pub id: SceneId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Head count the scene calls for (informational; casting is tracked on
    /// the actors themselves).
    #[serde(default)]
    pub actors_required: u32,
    #[serde(default)]
    pub location: Option<String>,
    /// Nominal rehearsal length in minutes, if the director set one.
    #[serde(default, rename = "duration")]
    pub duration_minutes: Option<i64>,
    #[serde(default)]
    pub priority: Option<i32>,
}

impl Scene {
    pub fn new(id: impl Into<SceneId>, title: impl Into<String>) -> Self {
        Scene {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            actors_required: 0,
            location: None,
            duration_minutes: None,
            priority: None,
        }
    }
}

/// A fixed weekly window available for scheduling: a weekday plus clock-time
/// bounds such as `"2:00 PM"`–`"4:00 PM"`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Timeslot {
    pub id: TimeslotId,
    #[serde(default)]
    pub label: String,
    #[serde(with = "weekday_name")]
    pub day: Weekday,
    pub start_time: String,
    pub end_time: String,
}

impl Timeslot {
    pub fn new(
        id: impl Into<TimeslotId>,
        day: Weekday,
        start_time: impl Into<String>,
        end_time: impl Into<String>,
    ) -> Self {
        Timeslot {
            id: id.into(),
            label: String::new(),
            day,
            start_time: start_time.into(),
            end_time: end_time.into(),
        }
    }

    /// Slot length in minutes; see [`clock::slot_duration_minutes`] for the
    /// fallback behavior on malformed bounds.
    pub fn duration_minutes(&self) -> i64 {
        clock::slot_duration_minutes(self)
    }
}

/// A scheduled rehearsal.
///
/// The timeslot and actor records are embedded snapshots, not references:
/// this is how the engine's exclusion set (`timeslot.id`) stays meaningful
/// even if the source timeslot is later edited or removed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Rehearsal {
    pub id: RehearsalId,
    pub title: String,
    pub timeslot: Timeslot,
    #[serde(default)]
    pub actors: Vec<Actor>,
    /// Concrete calendar date, once the rehearsal is pinned to one. Auto
    /// generated rehearsals start out undated; the persisting caller sets it.
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub auto_generated: bool,
    /// Carried through from the opportunity that produced this rehearsal.
    #[serde(default)]
    pub efficiency: Option<f64>,
    #[serde(default)]
    pub priority: Option<i32>,
}

/// Serde helper: weekdays as full names (`"Monday"`), parsed case
/// insensitively so `"monday"` and `"MONDAY"` round-trip too.
mod weekday_name {
    use chrono::Weekday;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(day: &Weekday, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(super::weekday_full_name(*day))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Weekday, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse::<Weekday>()
            .map_err(|_| de::Error::custom(format!("unrecognized weekday: {s:?}")))
    }
}

/// Full English name of a weekday, as stored in exported data.
pub fn weekday_full_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_actor_availability_and_casting() {
        let mut actor = Actor::new("a1", "Alice");
        actor.available_timeslots.push(TimeslotId::new("t1"));
        actor.scene_ids.push(SceneId::new("s1"));

        assert!(actor.is_available_for(&TimeslotId::new("t1")));
        assert!(!actor.is_available_for(&TimeslotId::new("t2")));
        assert!(actor.is_cast_in(&SceneId::new("s1")));
        assert!(!actor.is_cast_in(&SceneId::new("s2")));
    }

    #[test]
    fn test_timeslot_json_round_trip() {
        let slot = Timeslot::new("t1", Weekday::Mon, "2:00 PM", "4:00 PM");
        let json = serde_json::to_string(&slot).unwrap();
        assert!(json.contains(r#""day":"Monday""#), "json: {json}");

        let back: Timeslot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, slot);
    }

    #[test]
    fn test_weekday_parses_case_insensitively() {
        let json = r#"{"id":"t1","day":"monday","startTime":"2:00 PM","endTime":"4:00 PM"}"#;
        let slot: Timeslot = serde_json::from_str(json).unwrap();
        assert_eq!(slot.day, Weekday::Mon);

        let json = r#"{"id":"t1","day":"SATURDAY","startTime":"10:00 AM","endTime":"1:00 PM"}"#;
        let slot: Timeslot = serde_json::from_str(json).unwrap();
        assert_eq!(slot.day, Weekday::Sat);
    }

    #[test]
    fn test_weekday_rejects_garbage() {
        let json = r#"{"id":"t1","day":"Mondayish","startTime":"2:00 PM","endTime":"4:00 PM"}"#;
        assert!(serde_json::from_str::<Timeslot>(json).is_err());
    }

    #[test]
    fn test_rehearsal_uses_camel_case_field_names() {
        let rehearsal = Rehearsal {
            id: RehearsalId::new("r1"),
            title: "Act I Rehearsal".to_string(),
            timeslot: Timeslot::new("t1", Weekday::Tue, "6:00 PM", "8:00 PM"),
            actors: vec![Actor::new("a1", "Alice")],
            date: None,
            auto_generated: true,
            efficiency: Some(1.0),
            priority: Some(84),
        };

        let json = serde_json::to_string(&rehearsal).unwrap();
        assert!(json.contains(r#""autoGenerated":true"#));
        assert!(json.contains(r#""availableTimeslots""#));
    }
}
