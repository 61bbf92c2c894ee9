pub mod chapter;
pub mod course;
pub mod interest;

pub use chapter::{Chapter, ChapterInput};
pub use course::{CategoryInput, CourseDetails, UpdateCourseRequest};
pub use interest::Interest;
