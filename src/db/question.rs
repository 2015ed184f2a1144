use color_eyre::Result;
use libsql::params;

use super::helpers::query_all;
use super::models::Question;
use super::Db;

impl Db {
    /// All questions, sorted by id ascending so page boundaries are stable.
    pub async fn list_questions(&self) -> Result<Vec<Question>> {
        query_all(
            &self.conn()?,
            "SELECT id, question, answer, category, difficulty FROM questions ORDER BY id",
            (),
        )
        .await
    }

    pub async fn list_questions_by_category(&self, category_id: i64) -> Result<Vec<Question>> {
        query_all(
            &self.conn()?,
            "SELECT id, question, answer, category, difficulty FROM questions \
             WHERE category = ?1 ORDER BY id",
            params![category_id],
        )
        .await
    }

    /// Case-insensitive substring match on the question text.
    pub async fn search_questions(&self, term: &str) -> Result<Vec<Question>> {
        query_all(
            &self.conn()?,
            "SELECT id, question, answer, category, difficulty FROM questions \
             WHERE question LIKE '%' || ?1 || '%' ORDER BY id",
            params![term],
        )
        .await
    }

    pub async fn insert_question(
        &self,
        question: &str,
        answer: &str,
        category: i64,
        difficulty: i64,
    ) -> Result<Question> {
        let conn = self.conn()?;
        conn.execute(
            "INSERT INTO questions (question, answer, category, difficulty) \
             VALUES (?1, ?2, ?3, ?4)",
            params![question, answer, category, difficulty],
        )
        .await?;
        let id = conn.last_insert_rowid();

        tracing::info!("new question created with id: {id} in category: {category}");
        Ok(Question {
            id,
            question: question.to_owned(),
            answer: answer.to_owned(),
            category,
            difficulty,
        })
    }

    /// Returns `false` when no row matched the id.
    pub async fn delete_question(&self, question_id: i64) -> Result<bool> {
        let affected = self
            .conn()?
            .execute("DELETE FROM questions WHERE id = ?1", params![question_id])
            .await?;

        if affected > 0 {
            tracing::info!("deleted question {question_id}");
        }
        Ok(affected > 0)
    }
}
