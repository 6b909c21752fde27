use serde::{Deserialize, Serialize};

use crate::calendar::color::{Category, Color};
use crate::challenge::ChallengeError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeTask {
    pub day: u32,
    pub description: String,
    pub image_ref: String,
}

/// Category as resolved when the challenge is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChallengeCategory {
    Known(Category),
    Unmapped(String),
}

impl ChallengeCategory {
    pub fn resolve(name: &str) -> Self {
        match Category::from_name(name) {
            Some(category) => ChallengeCategory::Known(category),
            None => ChallengeCategory::Unmapped(name.to_string()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            ChallengeCategory::Known(category) => category.name(),
            ChallengeCategory::Unmapped(name) => name,
        }
    }

    pub fn color(&self) -> Color {
        match self {
            ChallengeCategory::Known(category) => category.color(),
            ChallengeCategory::Unmapped(_) => Color::neutral(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Challenge {
    id: String,
    title: String,
    category: ChallengeCategory,
    cover_ref: String,
    tasks: Vec<ChallengeTask>,
}

impl Challenge {
    /// Tasks must be numbered 1..=n in order, one per day, with at least one day.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        category: &str,
        cover_ref: impl Into<String>,
        tasks: Vec<ChallengeTask>,
    ) -> Result<Self, ChallengeError> {
        if tasks.is_empty() {
            return Err(ChallengeError::NoTasks);
        }

        for (index, task) in tasks.iter().enumerate() {
            let expected = index as u32 + 1;
            if task.day != expected {
                return Err(ChallengeError::TaskOutOfSequence {
                    expected,
                    found: task.day,
                });
            }
        }

        Ok(Self {
            id: id.into(),
            title: title.into(),
            category: ChallengeCategory::resolve(category),
            cover_ref: cover_ref.into(),
            tasks,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn category(&self) -> &ChallengeCategory {
        &self.category
    }

    pub fn cover_ref(&self) -> &str {
        &self.cover_ref
    }

    pub fn tasks(&self) -> &[ChallengeTask] {
        &self.tasks
    }

    pub fn duration_days(&self) -> u32 {
        self.tasks.len() as u32
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ChallengeDocument {
    id: String,
    title: String,
    category: String,
    #[serde(default)]
    cover_ref: String,
    tasks: Vec<ChallengeTask>,
}

impl<'de> Deserialize<'de> for Challenge {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let doc = ChallengeDocument::deserialize(deserializer)?;
        Challenge::new(doc.id, doc.title, &doc.category, doc.cover_ref, doc.tasks)
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tasks(days: &[u32]) -> Vec<ChallengeTask> {
        days.iter()
            .map(|&day| ChallengeTask {
                day,
                description: format!("Task {}", day),
                image_ref: format!("/images/task-{}.jpg", day),
            })
            .collect()
    }

    #[test]
    fn builds_challenge_with_contiguous_days() {
        let challenge = Challenge::new("c1", "Walk", "เมนูลดน้ำหนัก", "", tasks(&[1, 2, 3])).unwrap();

        assert_eq!(challenge.duration_days(), 3);
        assert_eq!(challenge.category(), &ChallengeCategory::Known(Category::WeightLoss));
    }

    #[test]
    fn rejects_empty_task_list() {
        let result = Challenge::new("c1", "Walk", "เมนูลดน้ำหนัก", "", Vec::new());
        assert_eq!(result, Err(ChallengeError::NoTasks));
    }

    #[test]
    fn rejects_gap_in_days() {
        let result = Challenge::new("c1", "Walk", "เมนูลดน้ำหนัก", "", tasks(&[1, 3]));
        assert_eq!(result, Err(ChallengeError::TaskOutOfSequence { expected: 2, found: 3 }));
    }

    #[test]
    fn rejects_duplicate_day() {
        let result = Challenge::new("c1", "Walk", "เมนูลดน้ำหนัก", "", tasks(&[1, 1]));
        assert_eq!(result, Err(ChallengeError::TaskOutOfSequence { expected: 2, found: 1 }));
    }

    #[test]
    fn rejects_zero_based_days() {
        let result = Challenge::new("c1", "Walk", "เมนูลดน้ำหนัก", "", tasks(&[0, 1]));
        assert!(result.is_err());
    }

    #[test]
    fn unmapped_category_uses_neutral_color() {
        let challenge = Challenge::new("c1", "Walk", "Gardening", "", tasks(&[1])).unwrap();

        assert_eq!(challenge.category().name(), "Gardening");
        assert_eq!(challenge.category().color(), Color::neutral());
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let challenge = Challenge::new("c1", "Walk", "เมนูลดน้ำหนัก", "/cover.jpg", tasks(&[1])).unwrap();

        let value = serde_json::to_value(&challenge).unwrap();

        assert_eq!(value["coverRef"], "/cover.jpg");
        assert_eq!(value["tasks"][0]["imageRef"], "/images/task-1.jpg");
        assert!(value.get("cover_ref").is_none());
    }

    #[test]
    fn deserialization_enforces_invariants() {
        let json = r#"{
            "id": "c1",
            "title": "Walk",
            "category": "เมนูลดน้ำหนัก",
            "tasks": [
                {"day": 1, "description": "a", "imageRef": "x"},
                {"day": 3, "description": "b", "imageRef": "y"}
            ]
        }"#;

        let result: Result<Challenge, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn deserializes_valid_document() {
        let json = r#"{
            "id": "c1",
            "title": "Walk",
            "category": "เมนูดูแลผิว",
            "tasks": [{"day": 1, "description": "a", "imageRef": "x"}]
        }"#;

        let challenge: Challenge = serde_json::from_str(json).unwrap();
        assert_eq!(challenge.category().color().as_str(), "#f59e0b");
        assert_eq!(challenge.cover_ref(), "");
    }
}
