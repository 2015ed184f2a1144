use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::db::models::Question;
use crate::names;

/// Category restriction for a quiz round. Id 0 is the ALL sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    Category(i64),
}

impl CategoryFilter {
    pub fn from_id(id: i64) -> Self {
        if id == names::ALL_CATEGORIES {
            Self::All
        } else {
            Self::Category(id)
        }
    }

    pub fn matches(&self, category_id: i64) -> bool {
        match self {
            Self::All => true,
            Self::Category(id) => *id == category_id,
        }
    }
}

/// Outcome of a single quiz draw. `Exhausted` is a normal terminal state,
/// not an error: every question in the filtered pool has been served.
#[derive(Debug, Clone, PartialEq)]
pub enum NextQuestion {
    Question(Question),
    Exhausted,
}

/// Pick one unseen question uniformly at random from the filtered pool.
///
/// The draw is restricted to `pool \ seen`, so selection terminates in one
/// pass over the pool and stays uniform over the remaining candidates.
/// An empty pool behaves like immediate exhaustion.
pub fn next_question<R: Rng + ?Sized>(
    filter: CategoryFilter,
    seen: &HashSet<i64>,
    questions: &[Question],
    rng: &mut R,
) -> NextQuestion {
    let unseen: Vec<&Question> = questions
        .iter()
        .filter(|q| filter.matches(q.category) && !seen.contains(&q.id))
        .collect();

    match unseen.choose(rng) {
        Some(question) => NextQuestion::Question((*question).clone()),
        None => NextQuestion::Exhausted,
    }
}
