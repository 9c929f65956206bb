use crate::entities::{courses, semesters};
use crate::error::ServiceError;
use log::debug;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, DatabaseConnection, EntityTrait, IntoActiveModel,
    ModelTrait, QueryOrder,
};
use uuid::Uuid;

pub struct SemesterService;

impl SemesterService {
    pub async fn create(
        db: &DatabaseConnection,
        name: &str,
    ) -> Result<semesters::Model, ServiceError> {
        let semester = semesters::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(name.to_owned()),
        };
        Ok(semester.insert(db).await?)
    }

    pub async fn get(db: &DatabaseConnection, id: Uuid) -> Result<semesters::Model, ServiceError> {
        semesters::Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| ServiceError::not_found("semester", id))
    }

    pub async fn list(db: &DatabaseConnection) -> Result<Vec<semesters::Model>, ServiceError> {
        Ok(semesters::Entity::find()
            .order_by_asc(semesters::Column::Name)
            .all(db)
            .await?)
    }

    pub async fn rename(
        db: &DatabaseConnection,
        id: Uuid,
        name: &str,
    ) -> Result<semesters::Model, ServiceError> {
        let mut semester = Self::get(db, id).await?.into_active_model();
        semester.name = Set(name.to_owned());
        Ok(semester.update(db).await?)
    }

    /// Deletes the semester. Its courses go with it, along with their
    /// descriptions and enrollment rows (ON DELETE CASCADE in the schema);
    /// enrolled students are untouched.
    pub async fn delete(db: &DatabaseConnection, id: Uuid) -> Result<(), ServiceError> {
        let result = semesters::Entity::delete_by_id(id).exec(db).await?;
        if result.rows_affected == 0 {
            return Err(ServiceError::not_found("semester", id));
        }
        debug!("deleted semester {id} and its courses");
        Ok(())
    }

    /// All courses scheduled in this semester.
    pub async fn courses(
        db: &DatabaseConnection,
        id: Uuid,
    ) -> Result<Vec<courses::Model>, ServiceError> {
        let semester = Self::get(db, id).await?;
        Ok(semester.find_related(courses::Entity).all(db).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{course_descriptions, student_courses};
    use crate::services::{CourseDescriptionService, CourseService, NewCourse, StudentService};
    use crate::test_util::fresh_db;

    #[tokio::test]
    async fn create_and_get() {
        let db = fresh_db().await;

        let created = SemesterService::create(&db, "Winter 2026").await.unwrap();
        let fetched = SemesterService::get(&db, created.id).await.unwrap();

        assert_eq!(fetched, created);
        assert_eq!(fetched.name, "Winter 2026");
    }

    #[tokio::test]
    async fn get_missing_id_fails() {
        let db = fresh_db().await;

        let err = SemesterService::get(&db, Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[tokio::test]
    async fn rename_updates_the_row() {
        let db = fresh_db().await;

        let semester = SemesterService::create(&db, "Sumer 2025").await.unwrap();
        let renamed = SemesterService::rename(&db, semester.id, "Summer 2025")
            .await
            .unwrap();

        assert_eq!(renamed.name, "Summer 2025");
        let fetched = SemesterService::get(&db, semester.id).await.unwrap();
        assert_eq!(fetched.name, "Summer 2025");
    }

    #[tokio::test]
    async fn rename_missing_id_fails() {
        let db = fresh_db().await;

        let err = SemesterService::rename(&db, Uuid::new_v4(), "Fall 2026")
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[tokio::test]
    async fn list_is_sorted_by_name() {
        let db = fresh_db().await;

        SemesterService::create(&db, "Winter 2026").await.unwrap();
        SemesterService::create(&db, "Fall 2026").await.unwrap();

        let names: Vec<String> = SemesterService::list(&db)
            .await
            .unwrap()
            .into_iter()
            .map(|s| s.name)
            .collect();
        assert_eq!(names, vec!["Fall 2026", "Winter 2026"]);
    }

    #[tokio::test]
    async fn delete_missing_id_fails() {
        let db = fresh_db().await;

        let err = SemesterService::delete(&db, Uuid::new_v4())
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[tokio::test]
    async fn delete_cascades_to_courses_and_their_children() {
        let db = fresh_db().await;

        let semester = SemesterService::create(&db, "Summer 2025").await.unwrap();
        let algorithms = CourseService::create(
            &db,
            NewCourse {
                name: "Algorithms".to_owned(),
                description: "Sorting, searching, graphs.".to_owned(),
                semester_id: semester.id,
                professor_id: None,
            },
        )
        .await
        .unwrap();
        let compilers = CourseService::create(
            &db,
            NewCourse {
                name: "Compilers".to_owned(),
                description: "Lexing to codegen.".to_owned(),
                semester_id: semester.id,
                professor_id: None,
            },
        )
        .await
        .unwrap();
        CourseDescriptionService::create(&db, algorithms.id, "Full syllabus.")
            .await
            .unwrap();
        let student = StudentService::create(&db, "Ana", "Lopez", None)
            .await
            .unwrap();
        StudentService::enroll(&db, student.id, algorithms.id)
            .await
            .unwrap();

        SemesterService::delete(&db, semester.id).await.unwrap();

        // Courses referencing the semester are gone
        let err = CourseService::get(&db, algorithms.id).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
        let err = CourseService::get(&db, compilers.id).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));

        // So are their description and enrollment rows
        assert!(
            course_descriptions::Entity::find()
                .all(&db)
                .await
                .unwrap()
                .is_empty()
        );
        assert!(
            student_courses::Entity::find()
                .all(&db)
                .await
                .unwrap()
                .is_empty()
        );

        // The enrolled student survives
        assert!(StudentService::get(&db, student.id).await.is_ok());
    }

    #[tokio::test]
    async fn courses_lists_only_this_semesters_courses() {
        let db = fresh_db().await;

        let summer = SemesterService::create(&db, "Summer 2025").await.unwrap();
        let winter = SemesterService::create(&db, "Winter 2026").await.unwrap();
        let algorithms = CourseService::create(
            &db,
            NewCourse {
                name: "Algorithms".to_owned(),
                description: String::new(),
                semester_id: summer.id,
                professor_id: None,
            },
        )
        .await
        .unwrap();
        CourseService::create(
            &db,
            NewCourse {
                name: "Databases".to_owned(),
                description: String::new(),
                semester_id: winter.id,
                professor_id: None,
            },
        )
        .await
        .unwrap();

        let summer_courses = SemesterService::courses(&db, summer.id).await.unwrap();
        assert_eq!(summer_courses.len(), 1);
        assert_eq!(summer_courses[0].id, algorithms.id);
    }
}
