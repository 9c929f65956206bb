use crate::entities::{course_descriptions, courses};
use crate::error::ServiceError;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait,
    IntoActiveModel, QueryFilter, SqlErr,
};
use uuid::Uuid;

pub struct CourseDescriptionService;

impl CourseDescriptionService {
    /// Attaches a description to a course. Each course can have at most
    /// one; a second attempt fails with [`ServiceError::Uniqueness`].
    pub async fn create(
        db: &DatabaseConnection,
        course_id: Uuid,
        description: &str,
    ) -> Result<course_descriptions::Model, ServiceError> {
        if courses::Entity::find_by_id(course_id).one(db).await?.is_none() {
            return Err(ServiceError::Validation(format!(
                "course {course_id} does not resolve"
            )));
        }

        let model = course_descriptions::ActiveModel {
            id: Set(Uuid::new_v4()),
            course_id: Set(course_id),
            description: Set(description.to_owned()),
        };
        match model.insert(db).await {
            Ok(model) => Ok(model),
            Err(e) => match e.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => Err(ServiceError::Uniqueness(
                    format!("course {course_id} already has a description"),
                )),
                Some(SqlErr::ForeignKeyConstraintViolation(_)) => Err(ServiceError::Validation(
                    format!("course {course_id} does not resolve"),
                )),
                _ => Err(ServiceError::Db(e)),
            },
        }
    }

    pub async fn get(
        db: &DatabaseConnection,
        id: Uuid,
    ) -> Result<course_descriptions::Model, ServiceError> {
        course_descriptions::Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| ServiceError::not_found("course description", id))
    }

    /// The description attached to a course, if it has one.
    pub async fn for_course(
        db: &DatabaseConnection,
        course_id: Uuid,
    ) -> Result<Option<course_descriptions::Model>, ServiceError> {
        Ok(course_descriptions::Entity::find()
            .filter(course_descriptions::Column::CourseId.eq(course_id))
            .one(db)
            .await?)
    }

    pub async fn rewrite(
        db: &DatabaseConnection,
        id: Uuid,
        description: &str,
    ) -> Result<course_descriptions::Model, ServiceError> {
        let mut model = Self::get(db, id).await?.into_active_model();
        model.description = Set(description.to_owned());
        Ok(model.update(db).await?)
    }

    pub async fn delete(db: &DatabaseConnection, id: Uuid) -> Result<(), ServiceError> {
        let result = course_descriptions::Entity::delete_by_id(id).exec(db).await?;
        if result.rows_affected == 0 {
            return Err(ServiceError::not_found("course description", id));
        }
        Ok(())
    }

    /// Human-readable label, built from the related course's name.
    pub async fn label(db: &DatabaseConnection, id: Uuid) -> Result<String, ServiceError> {
        let (model, course) = course_descriptions::Entity::find_by_id(id)
            .find_also_related(courses::Entity)
            .one(db)
            .await?
            .ok_or_else(|| ServiceError::not_found("course description", id))?;
        let course = course.ok_or_else(|| ServiceError::not_found("course", model.course_id))?;
        Ok(format!("description of {}", course.name))
    }
}
