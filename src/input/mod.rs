pub mod dispatch;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub use dispatch::{handle_action, ActionOutcome};

/// Interaction events relayed by the presentation layer, one at a time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum UserAction {
    ToggleDayRequested { day: u32 },
    CommentSubmitted { text: String },
    EventDropped { id: String, new_date: NaiveDate },
    DateSlotClicked { date: NaiveDate, title: String },
    EventEditRequested { id: String },
    EventEditSaved { id: String, title: String, start: String, color: String },
    EventEditCancelled,
    EventDeleteRequested { id: String },
    PaletteItemDroppedOnDate { category: String, date: NaiveDate },
}

impl UserAction {
    pub fn name(&self) -> &'static str {
        match self {
            UserAction::ToggleDayRequested { .. } => "toggleDayRequested",
            UserAction::CommentSubmitted { .. } => "commentSubmitted",
            UserAction::EventDropped { .. } => "eventDropped",
            UserAction::DateSlotClicked { .. } => "dateSlotClicked",
            UserAction::EventEditRequested { .. } => "eventEditRequested",
            UserAction::EventEditSaved { .. } => "eventEditSaved",
            UserAction::EventEditCancelled => "eventEditCancelled",
            UserAction::EventDeleteRequested { .. } => "eventDeleteRequested",
            UserAction::PaletteItemDroppedOnDate { .. } => "paletteItemDroppedOnDate",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_toggle_action() {
        let action: UserAction = serde_json::from_str(r#"{"type":"toggleDayRequested","day":3}"#).unwrap();
        assert_eq!(action, UserAction::ToggleDayRequested { day: 3 });
    }

    #[test]
    fn parses_drop_with_camel_case_fields() {
        let action: UserAction =
            serde_json::from_str(r#"{"type":"eventDropped","id":"a","newDate":"2024-02-10"}"#).unwrap();
        assert_eq!(
            action,
            UserAction::EventDropped {
                id: "a".to_string(),
                new_date: NaiveDate::from_ymd_opt(2024, 2, 10).unwrap(),
            }
        );
    }

    #[test]
    fn parses_unit_action() {
        let action: UserAction = serde_json::from_str(r#"{"type":"eventEditCancelled"}"#).unwrap();
        assert_eq!(action, UserAction::EventEditCancelled);
    }

    #[test]
    fn rejects_unknown_action() {
        let result: Result<UserAction, _> = serde_json::from_str(r#"{"type":"teleport"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn name_matches_serialized_tag() {
        let action = UserAction::PaletteItemDroppedOnDate {
            category: "เมนูลดน้ำหนัก".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 2, 10).unwrap(),
        };
        let value = serde_json::to_value(&action).unwrap();
        assert_eq!(value["type"], action.name());
    }
}
