use serde::Serialize;

use crate::app::{AppError, AppState, EventForm};
use crate::calendar::CalendarEvent;
use crate::challenge::{Comment, Progress};
use crate::input::UserAction;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum ActionOutcome {
    DayToggled { day: u32, completed: bool, progress: Progress },
    CommentAdded { comment: Comment },
    EventRescheduled { event: CalendarEvent },
    EventCreated { event: CalendarEvent },
    EditOpened { form: EventForm },
    EditSaved { event: CalendarEvent },
    EditCancelled,
    EventDeleted { removed: Option<CalendarEvent> },
}

/// Applies one action. On error nothing has changed.
pub fn handle_action(app: &mut AppState, action: UserAction) -> Result<ActionOutcome, AppError> {
    let name = action.name();
    let result = apply(app, action);

    match &result {
        Ok(_) => tracing::debug!("Applied {}", name),
        Err(e) => tracing::warn!("Rejected {}: {}", name, e),
    }
    result
}

fn apply(app: &mut AppState, action: UserAction) -> Result<ActionOutcome, AppError> {
    match action {
        UserAction::ToggleDayRequested { day } => {
            let completed = app.toggle_day(day)?;
            Ok(ActionOutcome::DayToggled {
                day,
                completed,
                progress: app.get_progress(),
            })
        }
        UserAction::CommentSubmitted { text } => {
            let comment = app.add_comment(&text)?;
            Ok(ActionOutcome::CommentAdded { comment })
        }
        UserAction::EventDropped { id, new_date } => {
            let event = app.reschedule_event(&id, new_date)?;
            Ok(ActionOutcome::EventRescheduled { event })
        }
        UserAction::DateSlotClicked { date, title } => {
            let event = app.create_event_on(date, &title)?;
            Ok(ActionOutcome::EventCreated { event })
        }
        UserAction::EventEditRequested { id } => {
            let form = app.open_edit(&id)?.clone();
            Ok(ActionOutcome::EditOpened { form })
        }
        UserAction::EventEditSaved { id, title, start, color } => {
            let event = app.save_edit(&id, &title, &start, &color)?;
            Ok(ActionOutcome::EditSaved { event })
        }
        UserAction::EventEditCancelled => {
            app.cancel_edit();
            Ok(ActionOutcome::EditCancelled)
        }
        UserAction::EventDeleteRequested { id } => Ok(ActionOutcome::EventDeleted {
            removed: app.delete_event(&id),
        }),
        UserAction::PaletteItemDroppedOnDate { category, date } => {
            let event = app.drop_palette_item(&category, date)?;
            Ok(ActionOutcome::EventCreated { event })
        }
    }
}
