use chrono::{DateTime, Duration, Utc};

/// A poll prompt.
#[derive(Debug, Clone, serde::Serialize, sqlx::FromRow)]
pub struct Question {
    /// The unique identifier for the question.
    pub id: i64,
    /// The prompt shown to voters.
    pub question_text: String,
    /// The time the question was published.
    pub pub_date: DateTime<Utc>,
}

impl Question {
    /// Whether the question was published within the last day.
    ///
    /// False for questions published in the future, and for questions
    /// published exactly one day ago or earlier.
    pub fn was_published_recently(&self) -> bool {
        let now = Utc::now();
        self.pub_date <= now && self.pub_date > now - Duration::days(1)
    }
}
