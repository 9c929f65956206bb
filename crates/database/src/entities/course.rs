use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "courses")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub semester_id: Uuid,
    pub professor_id: Option<Uuid>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::semester::Entity",
        from = "Column::SemesterId",
        to = "super::semester::Column::Id"
    )]
    Semester,
    #[sea_orm(
        belongs_to = "super::professor::Entity",
        from = "Column::ProfessorId",
        to = "super::professor::Column::Id"
    )]
    Professor,
    #[sea_orm(has_one = "super::course_description::Entity")]
    CourseDescription,
    #[sea_orm(has_many = "super::student_course::Entity")]
    StudentCourses,
}

impl Related<super::semester::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Semester.def()
    }
}

impl Related<super::professor::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Professor.def()
    }
}

impl Related<super::course_description::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CourseDescription.def()
    }
}

impl Related<super::student_course::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StudentCourses.def()
    }
}

// Many-to-many relationship with students
impl Related<super::student::Entity> for Entity {
    fn to() -> RelationDef {
        super::student_course::Relation::Student.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::student_course::Relation::Course.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Display for Model {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.name)
    }
}
