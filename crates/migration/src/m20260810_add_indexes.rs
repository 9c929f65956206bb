use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Indexes on courses foreign keys for faster joins
        manager
            .create_index(
                Index::create()
                    .name("idx_courses_semester_id")
                    .table(Courses::Table)
                    .col(Courses::SemesterId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_courses_professor_id")
                    .table(Courses::Table)
                    .col(Courses::ProfessorId)
                    .to_owned(),
            )
            .await?;

        // Index on student_courses.course_id for course-to-students lookups.
        // Student-to-courses lookups are covered by the unique index on
        // (student_id, course_id); the one-to-one foreign keys are covered
        // by their unique constraints.
        manager
            .create_index(
                Index::create()
                    .name("idx_student_courses_course_id")
                    .table(StudentCourses::Table)
                    .col(StudentCourses::CourseId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Drop indexes in reverse order
        manager
            .drop_index(
                Index::drop()
                    .name("idx_student_courses_course_id")
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(Index::drop().name("idx_courses_professor_id").to_owned())
            .await?;

        manager
            .drop_index(Index::drop().name("idx_courses_semester_id").to_owned())
            .await?;

        Ok(())
    }
}

#[derive(Iden)]
enum Courses {
    Table,
    SemesterId,
    ProfessorId,
}

#[derive(Iden)]
enum StudentCourses {
    Table,
    CourseId,
}
