//! 学生实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "students")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub roll_no: i64,
    pub name: String,
    pub father_name: String,
    pub email: String,
    pub student_class: String,
    pub address: String,
    pub age: i32,
    pub gender: String,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_student(self) -> crate::models::students::entities::Student {
        use crate::models::students::entities::{Gender, Student};
        use chrono::{DateTime, Utc};

        Student {
            id: self.id,
            roll_no: self.roll_no,
            name: self.name,
            father_name: self.father_name,
            email: self.email,
            student_class: self.student_class,
            address: self.address,
            age: self.age,
            gender: self.gender.parse::<Gender>().unwrap_or(Gender::Male),
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
        }
    }
}
