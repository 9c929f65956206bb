use crate::entities::{courses, professors};
use crate::error::ServiceError;
use log::debug;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, DatabaseConnection, EntityTrait, IntoActiveModel,
    ModelTrait, QueryOrder,
};
use uuid::Uuid;

pub struct ProfessorService;

impl ProfessorService {
    pub async fn create(
        db: &DatabaseConnection,
        first_name: &str,
        last_name: &str,
    ) -> Result<professors::Model, ServiceError> {
        let professor = professors::ActiveModel {
            id: Set(Uuid::new_v4()),
            first_name: Set(first_name.to_owned()),
            last_name: Set(last_name.to_owned()),
        };
        Ok(professor.insert(db).await?)
    }

    pub async fn get(db: &DatabaseConnection, id: Uuid) -> Result<professors::Model, ServiceError> {
        professors::Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| ServiceError::not_found("professor", id))
    }

    pub async fn list(db: &DatabaseConnection) -> Result<Vec<professors::Model>, ServiceError> {
        Ok(professors::Entity::find()
            .order_by_asc(professors::Column::LastName)
            .order_by_asc(professors::Column::FirstName)
            .all(db)
            .await?)
    }

    pub async fn rename(
        db: &DatabaseConnection,
        id: Uuid,
        first_name: &str,
        last_name: &str,
    ) -> Result<professors::Model, ServiceError> {
        let mut professor = Self::get(db, id).await?.into_active_model();
        professor.first_name = Set(first_name.to_owned());
        professor.last_name = Set(last_name.to_owned());
        Ok(professor.update(db).await?)
    }

    /// Deletes the professor. Courses they taught stay in storage with the
    /// professor reference cleared (ON DELETE SET NULL in the schema).
    pub async fn delete(db: &DatabaseConnection, id: Uuid) -> Result<(), ServiceError> {
        let result = professors::Entity::delete_by_id(id).exec(db).await?;
        if result.rows_affected == 0 {
            return Err(ServiceError::not_found("professor", id));
        }
        debug!("deleted professor {id}; their courses keep no professor");
        Ok(())
    }

    /// All courses taught by this professor.
    pub async fn courses(
        db: &DatabaseConnection,
        id: Uuid,
    ) -> Result<Vec<courses::Model>, ServiceError> {
        let professor = Self::get(db, id).await?;
        Ok(professor.find_related(courses::Entity).all(db).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::{CourseService, NewCourse, SemesterService};
    use crate::test_util::fresh_db;

    #[tokio::test]
    async fn create_and_get() {
        let db = fresh_db().await;

        let created = ProfessorService::create(&db, "Grace", "Hopper")
            .await
            .unwrap();
        let fetched = ProfessorService::get(&db, created.id).await.unwrap();

        assert_eq!(fetched, created);
        assert_eq!(fetched.to_string(), "Grace Hopper");
    }

    #[tokio::test]
    async fn get_missing_id_fails() {
        let db = fresh_db().await;

        let err = ProfessorService::get(&db, Uuid::new_v4())
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[tokio::test]
    async fn rename_updates_both_names() {
        let db = fresh_db().await;

        let professor = ProfessorService::create(&db, "Grace", "Hoper").await.unwrap();
        let renamed = ProfessorService::rename(&db, professor.id, "Grace", "Hopper")
            .await
            .unwrap();

        assert_eq!(renamed.to_string(), "Grace Hopper");
    }

    #[tokio::test]
    async fn list_is_sorted_by_last_then_first_name() {
        let db = fresh_db().await;

        ProfessorService::create(&db, "Grace", "Hopper").await.unwrap();
        ProfessorService::create(&db, "Edsger", "Dijkstra")
            .await
            .unwrap();
        ProfessorService::create(&db, "Barbara", "Liskov")
            .await
            .unwrap();

        let names: Vec<String> = ProfessorService::list(&db)
            .await
            .unwrap()
            .iter()
            .map(|p| p.to_string())
            .collect();
        assert_eq!(names, vec!["Edsger Dijkstra", "Grace Hopper", "Barbara Liskov"]);
    }

    #[tokio::test]
    async fn delete_clears_course_references_without_deleting_courses() {
        let db = fresh_db().await;

        let semester = SemesterService::create(&db, "Summer 2025").await.unwrap();
        let professor = ProfessorService::create(&db, "Grace", "Hopper")
            .await
            .unwrap();
        let course = CourseService::create(
            &db,
            NewCourse {
                name: "Compilers".to_owned(),
                description: "Lexing to codegen.".to_owned(),
                semester_id: semester.id,
                professor_id: Some(professor.id),
            },
        )
        .await
        .unwrap();
        assert_eq!(course.professor_id, Some(professor.id));

        ProfessorService::delete(&db, professor.id).await.unwrap();

        let course = CourseService::get(&db, course.id).await.unwrap();
        assert_eq!(course.professor_id, None);
        assert_eq!(course.name, "Compilers");
    }

    #[tokio::test]
    async fn rename_missing_id_fails() {
        let db = fresh_db().await;

        let err = ProfessorService::rename(&db, Uuid::new_v4(), "Grace", "Hopper")
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[tokio::test]
    async fn delete_missing_id_fails() {
        let db = fresh_db().await;

        let err = ProfessorService::delete(&db, Uuid::new_v4())
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[tokio::test]
    async fn courses_lists_only_their_courses() {
        let db = fresh_db().await;

        let semester = SemesterService::create(&db, "Summer 2025").await.unwrap();
        let hopper = ProfessorService::create(&db, "Grace", "Hopper")
            .await
            .unwrap();
        let liskov = ProfessorService::create(&db, "Barbara", "Liskov")
            .await
            .unwrap();
        let compilers = CourseService::create(
            &db,
            NewCourse {
                name: "Compilers".to_owned(),
                description: String::new(),
                semester_id: semester.id,
                professor_id: Some(hopper.id),
            },
        )
        .await
        .unwrap();
        CourseService::create(
            &db,
            NewCourse {
                name: "Type Systems".to_owned(),
                description: String::new(),
                semester_id: semester.id,
                professor_id: Some(liskov.id),
            },
        )
        .await
        .unwrap();

        let taught = ProfessorService::courses(&db, hopper.id).await.unwrap();
        assert_eq!(taught.len(), 1);
        assert_eq!(taught[0].id, compilers.id);
    }
}
