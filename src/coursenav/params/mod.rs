//! Query schemas used by the lesson and admin pages.

pub mod lesson;
pub mod listing;

pub use lesson::{lesson_days, LessonId, LessonParams, LessonQuery, LevelId};
pub use listing::{ListingAction, ListingParams, ListingQuery, Period};
