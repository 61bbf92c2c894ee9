pub mod course_setup;

pub use course_setup::{CourseSetupModel, SqliteCourseSetupModel};
