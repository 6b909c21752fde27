use crate::challenge::{Challenge, ChallengeError, ChallengeTask, Comment};

pub const SAMPLE_CHALLENGE_ID: &str = "weightloss-30d";

/// The demo challenge: a week-long weight-loss plan alternating cardio and clean-eating days.
pub fn sample_challenge() -> Result<Challenge, ChallengeError> {
    let tasks = (0..7u32)
        .map(|i| {
            let day = i + 1;
            let description = if i % 2 == 0 {
                format!("ดื่มน้ำ 2 ลิตร + คาร์ดิโอ 30 นาที (Day {})", day)
            } else {
                format!("อาหารคลีน 3 มื้อ + เวทเทรนนิ่ง (Day {})", day)
            };
            ChallengeTask {
                day,
                description,
                image_ref: format!("/images/task-{}.jpg", (i % 3) + 1),
            }
        })
        .collect();

    Challenge::new(
        SAMPLE_CHALLENGE_ID,
        "30-Day Weight Loss",
        "เมนูลดน้ำหนัก",
        "/images/weightloss-cover.jpg",
        tasks,
    )
}

pub fn sample_comments() -> Vec<Comment> {
    vec![
        Comment {
            id: 1,
            author: "Nut".to_string(),
            text: "เริ่มวันนี้เลยครับ!".to_string(),
        },
        Comment {
            id: 2,
            author: "May".to_string(),
            text: "ชอบเมนูวันที่ 2 มากๆ".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::color::Category;
    use crate::challenge::ChallengeCategory;

    #[test]
    fn sample_challenge_is_a_week_long() {
        let challenge = sample_challenge().unwrap();
        assert_eq!(challenge.duration_days(), 7);
        assert_eq!(challenge.id(), SAMPLE_CHALLENGE_ID);
    }

    #[test]
    fn sample_challenge_is_weight_loss() {
        let challenge = sample_challenge().unwrap();
        assert_eq!(challenge.category(), &ChallengeCategory::Known(Category::WeightLoss));
    }

    #[test]
    fn sample_tasks_alternate() {
        let challenge = sample_challenge().unwrap();
        assert!(challenge.tasks()[0].description.starts_with("ดื่มน้ำ"));
        assert!(challenge.tasks()[1].description.starts_with("อาหารคลีน"));
        assert_eq!(challenge.tasks()[3].image_ref, "/images/task-1.jpg");
    }

    #[test]
    fn sample_comments_have_distinct_ids() {
        let comments = sample_comments();
        assert_eq!(comments.len(), 2);
        assert_ne!(comments[0].id, comments[1].id);
    }
}
