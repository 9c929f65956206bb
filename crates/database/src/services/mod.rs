pub mod course;
pub mod course_description;
pub mod professor;
pub mod semester;
pub mod student;
pub mod student_id_card;

pub use course::{CourseService, NewCourse};
pub use course_description::CourseDescriptionService;
pub use professor::ProfessorService;
pub use semester::SemesterService;
pub use student::StudentService;
pub use student_id_card::StudentIdCardService;
