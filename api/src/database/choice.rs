/// A selectable option under a question.
#[derive(Debug, Clone, serde::Serialize, sqlx::FromRow)]
pub struct Choice {
    /// The unique identifier for the choice.
    pub id: i64,
    /// The question this choice belongs to.
    pub question_id: i64,
    /// The option text shown to voters.
    pub choice_text: String,
    /// The number of votes recorded for this choice.
    pub votes: i64,
}
