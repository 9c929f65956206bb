use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create semesters table
        manager
            .create_table(
                Table::create()
                    .table(Semesters::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Semesters::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Semesters::Name).string_len(100).not_null())
                    .to_owned(),
            )
            .await?;

        // Create professors table
        manager
            .create_table(
                Table::create()
                    .table(Professors::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Professors::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Professors::FirstName)
                            .string_len(30)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Professors::LastName)
                            .string_len(30)
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Create courses table
        manager
            .create_table(
                Table::create()
                    .table(Courses::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Courses::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Courses::Name).string_len(255).not_null())
                    .col(ColumnDef::new(Courses::Description).text().not_null())
                    .col(ColumnDef::new(Courses::SemesterId).uuid().not_null())
                    // Nullable so the professor reference can be cleared on delete
                    .col(ColumnDef::new(Courses::ProfessorId).uuid())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-courses-semester_id")
                            .from(Courses::Table, Courses::SemesterId)
                            .to(Semesters::Table, Semesters::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-courses-professor_id")
                            .from(Courses::Table, Courses::ProfessorId)
                            .to(Professors::Table, Professors::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // Create course_descriptions table (one-to-one with courses)
        manager
            .create_table(
                Table::create()
                    .table(CourseDescriptions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CourseDescriptions::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(CourseDescriptions::CourseId)
                            .uuid()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(CourseDescriptions::Description)
                            .text()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-course_descriptions-course_id")
                            .from(CourseDescriptions::Table, CourseDescriptions::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create students table
        manager
            .create_table(
                Table::create()
                    .table(Students::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Students::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Students::FirstName)
                            .string_len(30)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Students::LastName).string_len(30).not_null())
                    .col(
                        ColumnDef::new(Students::ContactInfo)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .to_owned(),
            )
            .await?;

        // Create student_courses junction table (many-to-many)
        manager
            .create_table(
                Table::create()
                    .table(StudentCourses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(StudentCourses::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(StudentCourses::StudentId).uuid().not_null())
                    .col(ColumnDef::new(StudentCourses::CourseId).uuid().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-student_courses-student_id")
                            .from(StudentCourses::Table, StudentCourses::StudentId)
                            .to(Students::Table, Students::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-student_courses-course_id")
                            .from(StudentCourses::Table, StudentCourses::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // An enrollment pair may exist at most once
        manager
            .create_index(
                Index::create()
                    .name("uq_student_courses_student_id_course_id")
                    .table(StudentCourses::Table)
                    .col(StudentCourses::StudentId)
                    .col(StudentCourses::CourseId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Create student_id_cards table (one-to-one with students)
        manager
            .create_table(
                Table::create()
                    .table(StudentIdCards::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(StudentIdCards::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(StudentIdCards::HasCard)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(StudentIdCards::StudentId)
                            .uuid()
                            .not_null()
                            .unique_key(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-student_id_cards-student_id")
                            .from(StudentIdCards::Table, StudentIdCards::StudentId)
                            .to(Students::Table, Students::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Drop tables in reverse order due to foreign key constraints
        manager
            .drop_table(Table::drop().table(StudentIdCards::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(StudentCourses::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Students::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(CourseDescriptions::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Courses::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Professors::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Semesters::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(Iden)]
enum Semesters {
    Table,
    Id,
    Name,
}

#[derive(Iden)]
enum Professors {
    Table,
    Id,
    FirstName,
    LastName,
}

#[derive(Iden)]
enum Courses {
    Table,
    Id,
    Name,
    Description,
    SemesterId,
    ProfessorId,
}

#[derive(Iden)]
enum CourseDescriptions {
    Table,
    Id,
    CourseId,
    Description,
}

#[derive(Iden)]
enum Students {
    Table,
    Id,
    FirstName,
    LastName,
    ContactInfo,
}

#[derive(Iden)]
enum StudentCourses {
    Table,
    Id,
    StudentId,
    CourseId,
}

#[derive(Iden)]
enum StudentIdCards {
    Table,
    Id,
    HasCard,
    StudentId,
}
