pub mod calendar;
pub mod challenge;
pub mod input;
pub mod storage;
pub mod app;

pub use calendar::{CalendarEvent, CalendarEventStore, EventStart};
pub use challenge::{Challenge, ChallengeProgress};
pub use app::{AppError, AppSettings, AppState, ErrorKind};

pub use input::{handle_action, UserAction};
