use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "students")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub contact_info: String, // free-form, empty when not provided
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::student_course::Entity")]
    StudentCourses,
    #[sea_orm(has_one = "super::student_id_card::Entity")]
    StudentIdCard,
}

impl Related<super::student_course::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StudentCourses.def()
    }
}

impl Related<super::student_id_card::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StudentIdCard.def()
    }
}

// Many-to-many relationship with courses
impl Related<super::course::Entity> for Entity {
    fn to() -> RelationDef {
        super::student_course::Relation::Course.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::student_course::Relation::Student.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Display for Model {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{} {}", self.first_name, self.last_name)
    }
}
