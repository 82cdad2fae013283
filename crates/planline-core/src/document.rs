//! Persisted JSON document and patch-merge loading.
//!
//! Saving writes every plan field plus a `savedAt` timestamp. Loading is
//! defensive and partial: the document is turned into a [`PlanPatch`] that
//! only carries the fields that were present and well formed, and
//! [`Plan::merged`] applies it on top of the current plan. Fields absent
//! from the document keep their current value.
//!
//! ```rust
//! use jiff::civil::date;
//! use planline_core::{document::PlanPatch, models::Plan};
//!
//! let plan = Plan::new("Before", date(2024, 1, 1));
//! let patch = PlanPatch::from_json(r#"{"name": "After", "numWeeks": "many"}"#)?;
//! let merged = plan.merged(patch);
//!
//! assert_eq!(merged.name, "After");
//! assert_eq!(merged.num_weeks, plan.num_weeks);
//! # Ok::<(), planline_core::PlanlineError>(())
//! ```

use jiff::{civil::Date, Timestamp};
use log::{debug, warn};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::{
    error::{PlanlineError, Result},
    models::{Color, Milestone, MilestoneKind, Plan, Resource, Task, VerticalLine},
};

/// Serialized form of a plan: all plan fields plus the save time.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanDocument<'a> {
    #[serde(flatten)]
    pub plan: &'a Plan,
    pub saved_at: Timestamp,
}

impl<'a> PlanDocument<'a> {
    pub fn new(plan: &'a Plan, saved_at: Timestamp) -> Self {
        Self { plan, saved_at }
    }

    /// Pretty-printed JSON text of the document.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Serializes `plan` with the given save time.
pub fn serialize(plan: &Plan, saved_at: Timestamp) -> Result<String> {
    PlanDocument::new(plan, saved_at).to_json()
}

/// Parses document text into a patch.
///
/// # Errors
///
/// Returns `PlanlineError::InvalidFormat` if the text is not JSON or its top
/// level is not an object.
pub fn deserialize(text: &str) -> Result<PlanPatch> {
    PlanPatch::from_json(text)
}

/// The usable content of a loaded document.
///
/// Every field is optional: `None` means "absent or malformed, keep the
/// current value".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlanPatch {
    pub name: Option<String>,
    pub start_date: Option<Date>,
    pub num_weeks: Option<u32>,
    pub num_lines: Option<u32>,
    pub resources: Option<Vec<Resource>>,
    pub tasks: Option<Vec<Task>>,
    pub milestones: Option<Vec<Milestone>>,
    pub vertical_lines: Option<Vec<VerticalLine>>,
    /// Informational; never merged into the plan
    pub saved_at: Option<Timestamp>,
}

impl PlanPatch {
    /// Parses JSON text into a patch.
    pub fn from_json(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text)
            .map_err(|e| PlanlineError::invalid_format(format!("not a JSON document: {e}")))?;
        Self::from_value(&value)
    }

    /// Builds a patch from an already parsed JSON value.
    pub fn from_value(value: &Value) -> Result<Self> {
        let Value::Object(map) = value else {
            return Err(PlanlineError::invalid_format("expected a JSON object"));
        };

        let patch = Self {
            name: map
                .get("name")
                .and_then(Value::as_str)
                .filter(|name| !name.is_empty())
                .map(str::to_string),
            start_date: map.get("startDate").and_then(parse_date),
            num_weeks: map.get("numWeeks").and_then(parse_count),
            num_lines: map.get("numLines").and_then(parse_count),
            resources: parse_collection(map, "resources", parse_resource),
            tasks: parse_collection(map, "tasks", parse_task),
            milestones: parse_collection(map, "milestones", parse_milestone),
            vertical_lines: parse_collection(map, "verticalLines", parse_vertical_line),
            saved_at: map
                .get("savedAt")
                .and_then(Value::as_str)
                .and_then(|raw| raw.parse().ok()),
        };

        debug!("Parsed plan patch with fields: {:?}", patch.present_fields());
        Ok(patch)
    }

    /// Names of the plan fields this patch overwrites.
    pub fn present_fields(&self) -> Vec<&'static str> {
        [
            ("name", self.name.is_some()),
            ("startDate", self.start_date.is_some()),
            ("numWeeks", self.num_weeks.is_some()),
            ("numLines", self.num_lines.is_some()),
            ("resources", self.resources.is_some()),
            ("tasks", self.tasks.is_some()),
            ("milestones", self.milestones.is_some()),
            ("verticalLines", self.vertical_lines.is_some()),
        ]
        .into_iter()
        .filter_map(|(field, present)| present.then_some(field))
        .collect()
    }

    /// Returns true when merging the patch would change nothing.
    pub fn is_empty(&self) -> bool {
        self.present_fields().is_empty()
    }
}

impl Plan {
    /// Returns a new plan: `self` with every field present in `patch`
    /// replaced. Collections are replaced wholesale, never merged element by
    /// element.
    pub fn merged(&self, patch: PlanPatch) -> Plan {
        let mut next = self.clone();

        if let Some(name) = patch.name {
            next.name = name;
        }
        if let Some(start_date) = patch.start_date {
            next.start_date = start_date;
        }
        if let Some(num_weeks) = patch.num_weeks {
            next.num_weeks = num_weeks;
        }
        if let Some(num_lines) = patch.num_lines {
            next.num_lines = num_lines;
        }
        if let Some(resources) = patch.resources {
            next.resources = resources;
        }
        if let Some(tasks) = patch.tasks {
            next.tasks = tasks;
        }
        if let Some(milestones) = patch.milestones {
            next.milestones = milestones;
        }
        if let Some(vertical_lines) = patch.vertical_lines {
            next.vertical_lines = vertical_lines;
        }

        next
    }
}

fn parse_date(value: &Value) -> Option<Date> {
    value.as_str()?.parse().ok()
}

/// Positive integer that fits a u32; zero and other falsy values are skipped.
fn parse_count(value: &Value) -> Option<u32> {
    value
        .as_u64()
        .filter(|&n| n >= 1)
        .and_then(|n| u32::try_from(n).ok())
}

fn parse_collection<T>(
    map: &Map<String, Value>,
    field: &str,
    parse: fn(&Map<String, Value>) -> Option<T>,
) -> Option<Vec<T>> {
    let items = map.get(field)?.as_array()?;
    let parsed = items
        .iter()
        .enumerate()
        .filter_map(|(index, item)| {
            let entity = item.as_object().and_then(parse);
            if entity.is_none() {
                warn!("Skipping malformed entry {index} in '{field}'");
            }
            entity
        })
        .collect();
    Some(parsed)
}

fn id_of(item: &Map<String, Value>) -> Option<u64> {
    item.get("id").and_then(Value::as_u64)
}

fn name_of(item: &Map<String, Value>) -> String {
    item.get("name")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn parse_resource(item: &Map<String, Value>) -> Option<Resource> {
    Some(Resource {
        id: id_of(item)?,
        name: name_of(item),
        color: item
            .get("color")
            .and_then(Value::as_str)
            .and_then(|raw| raw.parse::<Color>().ok())
            .unwrap_or(Resource::DEFAULT_COLOR),
    })
}

fn parse_task(item: &Map<String, Value>) -> Option<Task> {
    Some(Task {
        id: id_of(item)?,
        name: name_of(item),
        start_date: item.get("startDate").and_then(parse_date)?,
        end_date: item.get("endDate").and_then(parse_date)?,
        resource_id: item.get("resourceId").and_then(Value::as_u64),
        line: item.get("line").and_then(Value::as_i64).unwrap_or(1),
    })
}

fn parse_milestone(item: &Map<String, Value>) -> Option<Milestone> {
    Some(Milestone {
        id: id_of(item)?,
        name: name_of(item),
        date: item.get("date").and_then(parse_date)?,
        kind: item
            .get("type")
            .and_then(Value::as_str)
            .map(MilestoneKind::from)
            .unwrap_or_default(),
        line: item.get("line").and_then(Value::as_i64),
    })
}

fn parse_vertical_line(item: &Map<String, Value>) -> Option<VerticalLine> {
    Some(VerticalLine {
        id: id_of(item)?,
        date: item.get("date").and_then(parse_date)?,
    })
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    fn create_test_plan() -> Plan {
        let mut plan = Plan::new("Release train", date(2024, 1, 1));
        plan.num_weeks = 8;
        plan.num_lines = 3;
        plan.resources.push(Resource {
            id: 1,
            name: "Ops".to_string(),
            color: Color::rgb(0xf1, 0xaa, 0xd0),
        });
        plan.tasks.push(Task {
            id: 2,
            name: "Migrate".to_string(),
            start_date: date(2024, 1, 10),
            end_date: date(2024, 1, 3),
            resource_id: Some(1),
            line: 7,
        });
        plan.tasks.push(Task {
            id: 3,
            name: "Unassigned".to_string(),
            start_date: date(2024, 1, 1),
            end_date: date(2024, 2, 1),
            resource_id: None,
            line: -2,
        });
        plan.milestones.push(Milestone {
            id: 4,
            name: "Freeze".to_string(),
            date: date(2024, 2, 5),
            kind: MilestoneKind::Other("freeze".to_string()),
            line: None,
        });
        plan.milestones.push(Milestone {
            id: 5,
            name: "Launch".to_string(),
            date: date(2024, 2, 12),
            kind: MilestoneKind::Production,
            line: Some(0),
        });
        plan.vertical_lines.push(VerticalLine {
            id: 6,
            date: date(2024, 1, 29),
        });
        plan
    }

    #[test]
    fn test_serialize_includes_saved_at() {
        let saved_at = Timestamp::from_second(1_704_067_200).unwrap();
        let json = serialize(&create_test_plan(), saved_at).unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["savedAt"], "2024-01-01T00:00:00Z");
        assert_eq!(value["name"], "Release train");
        assert_eq!(value["numLines"], 3);
        assert_eq!(value["milestones"][1]["line"], 0);
    }

    #[test]
    fn test_round_trip_reproduces_plan() {
        let plan = create_test_plan();
        let saved_at = Timestamp::from_second(1_704_067_200).unwrap();
        let patch = deserialize(&serialize(&plan, saved_at).unwrap()).unwrap();

        assert_eq!(patch.saved_at, Some(saved_at));
        let other = Plan::new("Something else", date(1999, 12, 31));
        assert_eq!(other.merged(patch), plan);
    }

    #[test]
    fn test_partial_load_only_changes_name() {
        let plan = create_test_plan();
        let patch = deserialize(r#"{"name": "X"}"#).unwrap();
        let merged = plan.merged(patch);

        assert_eq!(merged.name, "X");
        assert_eq!(Plan { name: plan.name.clone(), ..merged }, plan);
    }

    #[test]
    fn test_non_object_is_invalid_format() {
        for text in ["[1, 2]", "42", "\"plan\"", "null", "{not json"] {
            let err = deserialize(text).unwrap_err();
            assert!(
                matches!(err, PlanlineError::InvalidFormat { .. }),
                "{text} gave {err:?}"
            );
        }
    }

    #[test]
    fn test_malformed_fields_are_ignored() {
        let patch = deserialize(
            r#"{
                "name": "",
                "numWeeks": 0,
                "numLines": "5",
                "startDate": "yesterday",
                "resources": {"id": 1},
                "tasks": null,
                "milestones": "none"
            }"#,
        )
        .unwrap();
        assert!(patch.is_empty());
    }

    #[test]
    fn test_malformed_entries_are_dropped() {
        let patch = deserialize(
            r##"{
                "resources": [
                    {"id": 1, "name": "Ok", "color": "#123456"},
                    {"name": "No id"},
                    {"id": 3, "color": "teal"},
                    "junk"
                ],
                "tasks": [
                    {"id": 1, "name": "Ok", "startDate": "2024-01-01", "endDate": "2024-01-08"},
                    {"id": 2, "startDate": "2024-01-01"}
                ]
            }"##,
        )
        .unwrap();

        let resources = patch.resources.unwrap();
        assert_eq!(resources.len(), 2);
        assert_eq!(resources[1].name, "");
        assert_eq!(resources[1].color, Resource::DEFAULT_COLOR);

        let tasks = patch.tasks.unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].line, 1);
        assert_eq!(tasks[0].resource_id, None);
    }

    #[test]
    fn test_empty_array_replaces_collection() {
        let plan = create_test_plan();
        let merged = plan.merged(deserialize(r#"{"tasks": []}"#).unwrap());
        assert!(merged.tasks.is_empty());
        assert_eq!(merged.milestones, plan.milestones);
    }

    #[test]
    fn test_timestamp_ids_are_accepted() {
        let patch = deserialize(r#"{"verticalLines": [{"id": 1712345678901, "date": "2024-04-05"}]}"#)
            .unwrap();
        assert_eq!(patch.vertical_lines.unwrap()[0].id, 1_712_345_678_901);
    }
}
