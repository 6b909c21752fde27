pub mod definition;
pub mod progress;
pub mod sample;

use thiserror::Error;

pub use definition::{Challenge, ChallengeCategory, ChallengeTask};
pub use progress::{ChallengeProgress, Comment, Progress};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChallengeError {
    #[error("Day {day} is outside the challenge (1..={duration})")]
    DayOutOfRange { day: u32, duration: u32 },
    #[error("Comment text must not be empty")]
    EmptyComment,
    #[error("No comment ids left")]
    CommentIdsExhausted,
    #[error("A challenge needs at least one task")]
    NoTasks,
    #[error("Expected task for day {expected}, found day {found}")]
    TaskOutOfSequence { expected: u32, found: u32 },
}
