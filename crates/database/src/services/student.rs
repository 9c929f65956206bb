use crate::entities::{courses, student_courses, students};
use crate::error::ServiceError;
use log::debug;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait,
    IntoActiveModel, ModelTrait, QueryFilter, QueryOrder, SqlErr,
};
use uuid::Uuid;

pub struct StudentService;

impl StudentService {
    /// Registers a student. Contact information is optional and stored
    /// as an empty string when not given.
    pub async fn create(
        db: &DatabaseConnection,
        first_name: &str,
        last_name: &str,
        contact_info: Option<&str>,
    ) -> Result<students::Model, ServiceError> {
        let model = students::ActiveModel {
            id: Set(Uuid::new_v4()),
            first_name: Set(first_name.to_owned()),
            last_name: Set(last_name.to_owned()),
            contact_info: Set(contact_info.unwrap_or_default().to_owned()),
        };
        Ok(model.insert(db).await?)
    }

    pub async fn get(db: &DatabaseConnection, id: Uuid) -> Result<students::Model, ServiceError> {
        students::Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| ServiceError::not_found("student", id))
    }

    pub async fn list(db: &DatabaseConnection) -> Result<Vec<students::Model>, ServiceError> {
        Ok(students::Entity::find()
            .order_by_asc(students::Column::LastName)
            .order_by_asc(students::Column::FirstName)
            .all(db)
            .await?)
    }

    pub async fn rename(
        db: &DatabaseConnection,
        id: Uuid,
        first_name: &str,
        last_name: &str,
    ) -> Result<students::Model, ServiceError> {
        let mut model = Self::get(db, id).await?.into_active_model();
        model.first_name = Set(first_name.to_owned());
        model.last_name = Set(last_name.to_owned());
        Ok(model.update(db).await?)
    }

    pub async fn set_contact_info(
        db: &DatabaseConnection,
        id: Uuid,
        contact_info: &str,
    ) -> Result<students::Model, ServiceError> {
        let mut model = Self::get(db, id).await?.into_active_model();
        model.contact_info = Set(contact_info.to_owned());
        Ok(model.update(db).await?)
    }

    /// Deletes a student together with their id card and enrollments.
    /// Courses the student was enrolled in are left in place.
    pub async fn delete(db: &DatabaseConnection, id: Uuid) -> Result<(), ServiceError> {
        let result = students::Entity::delete_by_id(id).exec(db).await?;
        if result.rows_affected == 0 {
            return Err(ServiceError::not_found("student", id));
        }
        debug!("deleted student {id}");
        Ok(())
    }

    /// Enrolls a student in a course. Enrolling twice is not an error;
    /// the existing enrollment is kept.
    pub async fn enroll(
        db: &DatabaseConnection,
        student_id: Uuid,
        course_id: Uuid,
    ) -> Result<(), ServiceError> {
        let model = student_courses::ActiveModel {
            id: Set(Uuid::new_v4()),
            student_id: Set(student_id),
            course_id: Set(course_id),
        };
        match model.insert(db).await {
            Ok(_) => Ok(()),
            Err(e) => match e.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => {
                    debug!("student {student_id} is already enrolled in course {course_id}");
                    Ok(())
                }
                Some(SqlErr::ForeignKeyConstraintViolation(_)) => {
                    Err(ServiceError::Validation(format!(
                        "student {student_id} or course {course_id} does not resolve"
                    )))
                }
                _ => Err(ServiceError::Db(e)),
            },
        }
    }

    /// Withdraws a student from a course. Withdrawing from a course the
    /// student is not enrolled in does nothing.
    pub async fn withdraw(
        db: &DatabaseConnection,
        student_id: Uuid,
        course_id: Uuid,
    ) -> Result<(), ServiceError> {
        student_courses::Entity::delete_many()
            .filter(student_courses::Column::StudentId.eq(student_id))
            .filter(student_courses::Column::CourseId.eq(course_id))
            .exec(db)
            .await?;
        Ok(())
    }

    pub async fn courses(
        db: &DatabaseConnection,
        id: Uuid,
    ) -> Result<Vec<courses::Model>, ServiceError> {
        let student = Self::get(db, id).await?;
        Ok(student.find_related(courses::Entity).all(db).await?)
    }
}
