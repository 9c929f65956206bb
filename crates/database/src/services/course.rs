use crate::entities::{courses, professors, semesters, students};
use crate::error::ServiceError;
use log::debug;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, DatabaseConnection, EntityTrait, IntoActiveModel,
    ModelTrait, QueryOrder, SqlErr,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Input for [`CourseService::create`]. A course cannot exist outside a
/// semester, so `semester_id` is mandatory; the professor may be absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCourse {
    pub name: String,
    pub description: String,
    pub semester_id: Uuid,
    pub professor_id: Option<Uuid>,
}

pub struct CourseService;

impl CourseService {
    pub async fn create(
        db: &DatabaseConnection,
        new: NewCourse,
    ) -> Result<courses::Model, ServiceError> {
        if semesters::Entity::find_by_id(new.semester_id)
            .one(db)
            .await?
            .is_none()
        {
            return Err(ServiceError::Validation(format!(
                "course requires an existing semester, {} does not resolve",
                new.semester_id
            )));
        }
        if let Some(professor_id) = new.professor_id
            && professors::Entity::find_by_id(professor_id)
                .one(db)
                .await?
                .is_none()
        {
            return Err(ServiceError::Validation(format!(
                "professor {professor_id} does not resolve"
            )));
        }

        let course = courses::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(new.name),
            description: Set(new.description),
            semester_id: Set(new.semester_id),
            professor_id: Set(new.professor_id),
        };
        match course.insert(db).await {
            Ok(model) => Ok(model),
            // Races between the checks above and the insert end up here
            Err(e) => match e.sql_err() {
                Some(SqlErr::ForeignKeyConstraintViolation(_)) => {
                    Err(ServiceError::Validation(
                        "course references a semester or professor that no longer exists"
                            .to_owned(),
                    ))
                }
                _ => Err(ServiceError::Db(e)),
            },
        }
    }

    pub async fn get(db: &DatabaseConnection, id: Uuid) -> Result<courses::Model, ServiceError> {
        courses::Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| ServiceError::not_found("course", id))
    }

    pub async fn list(db: &DatabaseConnection) -> Result<Vec<courses::Model>, ServiceError> {
        Ok(courses::Entity::find()
            .order_by_asc(courses::Column::Name)
            .all(db)
            .await?)
    }

    pub async fn rename(
        db: &DatabaseConnection,
        id: Uuid,
        name: &str,
    ) -> Result<courses::Model, ServiceError> {
        let mut course = Self::get(db, id).await?.into_active_model();
        course.name = Set(name.to_owned());
        Ok(course.update(db).await?)
    }

    pub async fn rewrite_description(
        db: &DatabaseConnection,
        id: Uuid,
        description: &str,
    ) -> Result<courses::Model, ServiceError> {
        let mut course = Self::get(db, id).await?.into_active_model();
        course.description = Set(description.to_owned());
        Ok(course.update(db).await?)
    }

    pub async fn move_to_semester(
        db: &DatabaseConnection,
        id: Uuid,
        semester_id: Uuid,
    ) -> Result<courses::Model, ServiceError> {
        if semesters::Entity::find_by_id(semester_id)
            .one(db)
            .await?
            .is_none()
        {
            return Err(ServiceError::Validation(format!(
                "course requires an existing semester, {semester_id} does not resolve"
            )));
        }
        let mut course = Self::get(db, id).await?.into_active_model();
        course.semester_id = Set(semester_id);
        Ok(course.update(db).await?)
    }

    pub async fn assign_professor(
        db: &DatabaseConnection,
        id: Uuid,
        professor_id: Uuid,
    ) -> Result<courses::Model, ServiceError> {
        if professors::Entity::find_by_id(professor_id)
            .one(db)
            .await?
            .is_none()
        {
            return Err(ServiceError::Validation(format!(
                "professor {professor_id} does not resolve"
            )));
        }
        let mut course = Self::get(db, id).await?.into_active_model();
        course.professor_id = Set(Some(professor_id));
        Ok(course.update(db).await?)
    }

    /// Leaves the course without a professor. Not an error: the professor
    /// relation is optional.
    pub async fn clear_professor(
        db: &DatabaseConnection,
        id: Uuid,
    ) -> Result<courses::Model, ServiceError> {
        let mut course = Self::get(db, id).await?.into_active_model();
        course.professor_id = Set(None);
        Ok(course.update(db).await?)
    }

    /// Deletes the course. Its description and enrollment rows go with it
    /// (ON DELETE CASCADE in the schema); students and the semester are
    /// untouched.
    pub async fn delete(db: &DatabaseConnection, id: Uuid) -> Result<(), ServiceError> {
        let result = courses::Entity::delete_by_id(id).exec(db).await?;
        if result.rows_affected == 0 {
            return Err(ServiceError::not_found("course", id));
        }
        debug!("deleted course {id} with its description and enrollments");
        Ok(())
    }

    /// All students enrolled in this course.
    pub async fn students(
        db: &DatabaseConnection,
        id: Uuid,
    ) -> Result<Vec<students::Model>, ServiceError> {
        let course = Self::get(db, id).await?;
        Ok(course.find_related(students::Entity).all(db).await?)
    }
}
