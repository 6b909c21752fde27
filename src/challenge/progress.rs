use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::challenge::ChallengeError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Progress {
    pub completed_count: u32,
    pub percent: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: u64,
    pub author: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChallengeProgress {
    duration_days: u32,
    completed: BTreeSet<u32>,
    comments: Vec<Comment>,
    next_comment_id: Option<u64>,
}

impl ChallengeProgress {
    pub fn new(duration_days: u32) -> Self {
        Self {
            duration_days,
            completed: BTreeSet::new(),
            comments: Vec::new(),
            next_comment_id: Some(1),
        }
    }

    /// Seeds the comment log. New ids continue after the highest seeded one.
    pub fn with_comments(mut self, comments: Vec<Comment>) -> Self {
        if let Some(highest) = comments.iter().map(|c| c.id).max() {
            self.next_comment_id = highest
                .checked_add(1)
                .and_then(|next| self.next_comment_id.map(|current| current.max(next)));
        }
        self.comments = comments;
        self
    }

    pub fn duration_days(&self) -> u32 {
        self.duration_days
    }

    pub fn toggle_day(&mut self, day: u32) -> Result<(), ChallengeError> {
        if day == 0 || day > self.duration_days {
            tracing::warn!("Ignoring toggle for out-of-range day {}", day);
            return Err(ChallengeError::DayOutOfRange {
                day,
                duration: self.duration_days,
            });
        }

        if !self.completed.remove(&day) {
            self.completed.insert(day);
        }
        tracing::debug!("Day {} completed: {}", day, self.completed.contains(&day));
        Ok(())
    }

    pub fn is_completed(&self, day: u32) -> bool {
        self.completed.contains(&day)
    }

    pub fn completed_days(&self) -> impl Iterator<Item = u32> + '_ {
        self.completed.iter().copied()
    }

    pub fn progress(&self) -> Progress {
        let completed_count = self.completed.len() as u32;
        let percent = if self.duration_days == 0 {
            0
        } else {
            // round-half-up of 100 * completed / duration
            let completed = u64::from(completed_count);
            let duration = u64::from(self.duration_days);
            ((200 * completed + duration) / (2 * duration)) as u32
        };
        Progress {
            completed_count,
            percent,
        }
    }

    pub fn add_comment(&mut self, author: &str, text: &str) -> Result<&Comment, ChallengeError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ChallengeError::EmptyComment);
        }

        let id = self.next_comment_id.ok_or(ChallengeError::CommentIdsExhausted)?;
        let comment = Comment {
            id,
            author: author.to_string(),
            text: text.to_string(),
        };
        self.next_comment_id = id.checked_add(1);
        tracing::debug!("Comment {} added by {}", comment.id, comment.author);
        self.comments.push(comment);

        Ok(&self.comments[self.comments.len() - 1])
    }

    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }
}
