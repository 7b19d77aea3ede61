//! 教师实体
//!
//! `attendance_records` 列以 JSON 数组文本保存嵌入式考勤记录，
//! 与独立的 attendance_records 表并存（见 storage::sea_orm_storage::attendance）。

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "faculty")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub education: String,
    pub university: String,
    pub address: String,
    pub specialization: String,
    pub assigned_class: i32,
    pub assigned_subject: String,
    pub schedule_days: String,
    pub schedule_time: String,
    #[sea_orm(column_type = "Text")]
    pub attendance_records: String,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::attendance_records::Entity")]
    AttendanceRecords,
}

impl Related<super::attendance_records::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AttendanceRecords.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_faculty(self) -> crate::models::faculty::entities::Faculty {
        use crate::models::faculty::entities::{Faculty, Schedule, Specialization};
        use chrono::{DateTime, Utc};

        // 无法解析的历史数据按空数组处理
        let attendance_records =
            serde_json::from_str(&self.attendance_records).unwrap_or_default();

        Faculty {
            id: self.id,
            name: self.name,
            phone: self.phone,
            email: self.email,
            education: self.education,
            university: self.university,
            address: self.address,
            specialization: self
                .specialization
                .parse::<Specialization>()
                .unwrap_or(Specialization::Other),
            assigned_class: self.assigned_class,
            assigned_subject: self.assigned_subject,
            schedule: Schedule {
                days: self.schedule_days,
                time: self.schedule_time,
            },
            attendance_records,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
        }
    }
}
