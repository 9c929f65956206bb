use crate::entities::{student_id_cards, students};
use crate::error::ServiceError;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait,
    IntoActiveModel, QueryFilter, SqlErr,
};
use uuid::Uuid;

pub struct StudentIdCardService;

impl StudentIdCardService {
    /// Issues an id card record for a student. Each student can have at
    /// most one; a second attempt fails with [`ServiceError::Uniqueness`].
    pub async fn create(
        db: &DatabaseConnection,
        student_id: Uuid,
        has_card: bool,
    ) -> Result<student_id_cards::Model, ServiceError> {
        if students::Entity::find_by_id(student_id).one(db).await?.is_none() {
            return Err(ServiceError::Validation(format!(
                "student {student_id} does not resolve"
            )));
        }

        let model = student_id_cards::ActiveModel {
            id: Set(Uuid::new_v4()),
            student_id: Set(student_id),
            has_card: Set(has_card),
        };
        match model.insert(db).await {
            Ok(model) => Ok(model),
            Err(e) => match e.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => Err(ServiceError::Uniqueness(
                    format!("student {student_id} already has an id card"),
                )),
                Some(SqlErr::ForeignKeyConstraintViolation(_)) => Err(ServiceError::Validation(
                    format!("student {student_id} does not resolve"),
                )),
                _ => Err(ServiceError::Db(e)),
            },
        }
    }

    pub async fn get(
        db: &DatabaseConnection,
        id: Uuid,
    ) -> Result<student_id_cards::Model, ServiceError> {
        student_id_cards::Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| ServiceError::not_found("student id card", id))
    }

    /// The card record for a student, if one has been issued.
    pub async fn for_student(
        db: &DatabaseConnection,
        student_id: Uuid,
    ) -> Result<Option<student_id_cards::Model>, ServiceError> {
        Ok(student_id_cards::Entity::find()
            .filter(student_id_cards::Column::StudentId.eq(student_id))
            .one(db)
            .await?)
    }

    pub async fn set_has_card(
        db: &DatabaseConnection,
        id: Uuid,
        has_card: bool,
    ) -> Result<student_id_cards::Model, ServiceError> {
        let mut model = Self::get(db, id).await?.into_active_model();
        model.has_card = Set(has_card);
        Ok(model.update(db).await?)
    }

    pub async fn delete(db: &DatabaseConnection, id: Uuid) -> Result<(), ServiceError> {
        let result = student_id_cards::Entity::delete_by_id(id).exec(db).await?;
        if result.rows_affected == 0 {
            return Err(ServiceError::not_found("student id card", id));
        }
        Ok(())
    }

    /// Human-readable label, built from the holder's name.
    pub async fn label(db: &DatabaseConnection, id: Uuid) -> Result<String, ServiceError> {
        let (model, student) = student_id_cards::Entity::find_by_id(id)
            .find_also_related(students::Entity)
            .one(db)
            .await?
            .ok_or_else(|| ServiceError::not_found("student id card", id))?;
        let student = student.ok_or_else(|| ServiceError::not_found("student", model.student_id))?;
        Ok(format!("card of {student}"))
    }
}
