/// Questions served per page by the listing endpoints.
pub const QUESTIONS_PER_PAGE: usize = 10;

/// Category id that stands for "no category restriction" in quiz requests.
pub const ALL_CATEGORIES: i64 = 0;

// Difficulty is a bounded ordinal.
pub const MIN_DIFFICULTY: i64 = 1;
pub const MAX_DIFFICULTY: i64 = 5;
