//! 教师存储操作

use super::SeaOrmStorage;
use crate::entity::faculty::{ActiveModel, Column, Entity as Faculty};
use crate::errors::{AttendanceSystemError, Result};
use crate::models::{
    PaginationInfo,
    faculty::{
        entities::{Faculty as FacultyModel, TeachingAssignment},
        requests::{CreateFacultyRequest, FacultyListQuery},
        responses::FacultyListResponse,
    },
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 创建教师
    pub async fn create_faculty_impl(
        &self,
        req: CreateFacultyRequest,
        assignment: TeachingAssignment,
    ) -> Result<FacultyModel> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            name: Set(req.name),
            phone: Set(req.phone),
            email: Set(req.email),
            education: Set(req.education),
            university: Set(req.university),
            address: Set(req.address),
            specialization: Set(req.specialization.to_string()),
            assigned_class: Set(assignment.assigned_class),
            assigned_subject: Set(assignment.assigned_subject),
            schedule_days: Set(assignment.schedule.days),
            schedule_time: Set(assignment.schedule.time),
            attendance_records: Set("[]".to_string()),
            created_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| AttendanceSystemError::database_operation(format!("创建教师失败: {e}")))?;

        Ok(result.into_faculty())
    }

    /// 通过 ID 获取教师
    pub async fn get_faculty_by_id_impl(&self, faculty_id: i64) -> Result<Option<FacultyModel>> {
        let result = Faculty::find_by_id(faculty_id)
            .one(&self.db)
            .await
            .map_err(|e| AttendanceSystemError::database_operation(format!("查询教师失败: {e}")))?;

        Ok(result.map(|m| m.into_faculty()))
    }

    /// 分页列出教师
    pub async fn list_faculty_with_pagination_impl(
        &self,
        query: FacultyListQuery,
    ) -> Result<FacultyListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Faculty::find();

        // 搜索条件：姓名或科目
        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(
                Condition::any()
                    .add(Column::Name.contains(&escaped))
                    .add(Column::AssignedSubject.contains(&escaped)),
            );
        }

        // 排序
        select = select.order_by_desc(Column::CreatedAt);

        // 分页查询
        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| AttendanceSystemError::database_operation(format!("统计教师总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| AttendanceSystemError::database_operation(format!("统计教师页数失败: {e}")))?;

        let faculty = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| AttendanceSystemError::database_operation(format!("查询教师列表失败: {e}")))?;

        Ok(FacultyListResponse {
            items: faculty.into_iter().map(|m| m.into_faculty()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 删除教师（嵌入式考勤记录随行删除；独立集合靠外键级联）
    pub async fn delete_faculty_impl(&self, faculty_id: i64) -> Result<bool> {
        let result = Faculty::delete_by_id(faculty_id)
            .exec(&self.db)
            .await
            .map_err(|e| AttendanceSystemError::database_operation(format!("删除教师失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
