pub mod course;
pub mod course_description;
pub mod professor;
pub mod semester;
pub mod student;
pub mod student_course;
pub mod student_id_card;

// Services refer to entities by their table names.
pub use self::course as courses;
pub use self::course_description as course_descriptions;
pub use self::professor as professors;
pub use self::semester as semesters;
pub use self::student as students;
pub use self::student_course as student_courses;
pub use self::student_id_card as student_id_cards;
