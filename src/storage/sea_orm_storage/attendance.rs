//! 考勤双存储操作
//!
//! 同一条逻辑记录写两处：教师行的嵌入式 JSON 数组（按教师整读整写）
//! 和独立的 attendance_records 表（可按 id 删除、按教师过滤）。
//! 两处的协调由服务层负责，这里只提供各自的原语。

use super::SeaOrmStorage;
use crate::entity::attendance_records::{ActiveModel, Column, Entity as AttendanceRecords};
use crate::entity::faculty::{
    ActiveModel as FacultyActiveModel, Entity as Faculty,
};
use crate::errors::{AttendanceSystemError, Result};
use crate::models::attendance::entities::AttendanceRecord;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 读取教师行的嵌入式数组
    async fn load_embedded(&self, faculty_id: i64) -> Result<Vec<AttendanceRecord>> {
        let row = Faculty::find_by_id(faculty_id)
            .one(&self.db)
            .await
            .map_err(|e| AttendanceSystemError::database_operation(format!("查询教师失败: {e}")))?
            .ok_or_else(|| {
                AttendanceSystemError::not_found(format!("faculty {faculty_id} not found"))
            })?;

        Ok(serde_json::from_str(&row.attendance_records).unwrap_or_default())
    }

    /// 整体写回教师行的嵌入式数组
    async fn store_embedded(
        &self,
        faculty_id: i64,
        records: &[AttendanceRecord],
    ) -> Result<()> {
        let json = serde_json::to_string(records)?;
        let model = FacultyActiveModel {
            id: Set(faculty_id),
            attendance_records: Set(json),
            ..Default::default()
        };
        model.update(&self.db).await.map_err(|e| {
            AttendanceSystemError::database_operation(format!("写入嵌入式考勤记录失败: {e}"))
        })?;
        Ok(())
    }

    /// 追加记录到嵌入式数组（arrayUnion 语义：完全相同的元素不重复追加）
    pub async fn append_faculty_attendance_impl(
        &self,
        faculty_id: i64,
        record: &AttendanceRecord,
    ) -> Result<bool> {
        let mut records = self.load_embedded(faculty_id).await?;

        // 嵌入式副本不携带独立集合的 id
        let mut embedded = record.clone();
        embedded.id = None;

        if records.contains(&embedded) {
            return Ok(false);
        }

        records.push(embedded);
        self.store_embedded(faculty_id, &records).await?;
        Ok(true)
    }

    /// 补偿删除：移除一个与给定记录完全相同的嵌入式元素
    pub async fn retract_faculty_attendance_impl(
        &self,
        faculty_id: i64,
        record: &AttendanceRecord,
    ) -> Result<bool> {
        let mut records = self.load_embedded(faculty_id).await?;

        let mut embedded = record.clone();
        embedded.id = None;

        match records.iter().position(|r| r == &embedded) {
            Some(index) => {
                records.remove(index);
                self.store_embedded(faculty_id, &records).await?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// 读取嵌入式记录
    pub async fn list_embedded_attendance_impl(
        &self,
        faculty_id: i64,
    ) -> Result<Vec<AttendanceRecord>> {
        self.load_embedded(faculty_id).await
    }

    /// 按 (faculty_id, date) 移除嵌入式记录
    pub async fn remove_embedded_attendance_impl(
        &self,
        faculty_id: i64,
        date: &str,
    ) -> Result<bool> {
        let records = self.load_embedded(faculty_id).await?;
        let before = records.len();

        let remaining: Vec<AttendanceRecord> = records
            .into_iter()
            .filter(|r| !(r.date == date && r.faculty_id == faculty_id))
            .collect();

        if remaining.len() == before {
            return Ok(false);
        }

        self.store_embedded(faculty_id, &remaining).await?;
        Ok(true)
    }

    /// 向独立集合插入记录
    pub async fn insert_attendance_record_impl(
        &self,
        record: &AttendanceRecord,
    ) -> Result<AttendanceRecord> {
        let students = serde_json::to_string(&record.students)?;

        let model = ActiveModel {
            faculty_id: Set(record.faculty_id),
            faculty_name: Set(record.faculty_name.clone()),
            date: Set(record.date.clone()),
            students: Set(students),
            created_at: Set(record.created_at.timestamp()),
            ..Default::default()
        };

        let result = model.insert(&self.db).await.map_err(|e| {
            AttendanceSystemError::database_operation(format!("插入考勤记录失败: {e}"))
        })?;

        Ok(result.into_record())
    }

    /// 按教师查询独立集合
    pub async fn list_attendance_by_faculty_impl(
        &self,
        faculty_id: i64,
    ) -> Result<Vec<AttendanceRecord>> {
        let rows = AttendanceRecords::find()
            .filter(Column::FacultyId.eq(faculty_id))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| {
                AttendanceSystemError::database_operation(format!("查询考勤记录失败: {e}"))
            })?;

        Ok(rows.into_iter().map(|m| m.into_record()).collect())
    }

    /// 按 id 删除独立集合中的记录
    pub async fn delete_attendance_record_impl(&self, record_id: i64) -> Result<bool> {
        let result = AttendanceRecords::delete_by_id(record_id)
            .exec(&self.db)
            .await
            .map_err(|e| {
                AttendanceSystemError::database_operation(format!("删除考勤记录失败: {e}"))
            })?;

        Ok(result.rows_affected > 0)
    }
}
