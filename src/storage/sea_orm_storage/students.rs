//! 学生存储操作

use super::SeaOrmStorage;
use crate::entity::students::{ActiveModel, Column, Entity as Students};
use crate::errors::{AttendanceSystemError, Result};
use crate::models::{
    PaginationInfo,
    students::{
        entities::Student,
        requests::{CreateStudentRequest, StudentListQuery},
        responses::StudentListResponse,
    },
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 创建学生
    pub async fn create_student_impl(
        &self,
        req: CreateStudentRequest,
        roll_no: i64,
    ) -> Result<Student> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            roll_no: Set(roll_no),
            name: Set(req.name),
            father_name: Set(req.father_name),
            email: Set(req.email),
            student_class: Set(req.student_class),
            address: Set(req.address),
            age: Set(req.age),
            gender: Set(req.gender.to_string()),
            created_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| AttendanceSystemError::database_operation(format!("创建学生失败: {e}")))?;

        Ok(result.into_student())
    }

    /// 通过学号获取学生
    pub async fn get_student_by_roll_no_impl(&self, roll_no: i64) -> Result<Option<Student>> {
        let result = Students::find()
            .filter(Column::RollNo.eq(roll_no))
            .one(&self.db)
            .await
            .map_err(|e| AttendanceSystemError::database_operation(format!("查询学生失败: {e}")))?;

        Ok(result.map(|m| m.into_student()))
    }

    /// 分页列出学生
    pub async fn list_students_with_pagination_impl(
        &self,
        query: StudentListQuery,
    ) -> Result<StudentListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Students::find();

        // 搜索条件：姓名/父亲姓名子串，纯数字时额外按学号精确匹配
        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let trimmed = search.trim();
            let escaped = escape_like_pattern(trimmed);
            let mut condition = Condition::any()
                .add(Column::Name.contains(&escaped))
                .add(Column::FatherName.contains(&escaped));
            if let Ok(roll_no) = trimmed.parse::<i64>() {
                condition = condition.add(Column::RollNo.eq(roll_no));
            }
            select = select.filter(condition);
        }

        // 按学号升序，与花名册顺序一致
        select = select.order_by_asc(Column::RollNo);

        // 分页查询
        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| AttendanceSystemError::database_operation(format!("统计学生总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| AttendanceSystemError::database_operation(format!("统计学生页数失败: {e}")))?;

        let students = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| AttendanceSystemError::database_operation(format!("查询学生列表失败: {e}")))?;

        Ok(StudentListResponse {
            items: students.into_iter().map(|m| m.into_student()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 统计学生数（学号分配的基数）
    pub async fn count_students_impl(&self) -> Result<u64> {
        Students::find()
            .count(&self.db)
            .await
            .map_err(|e| AttendanceSystemError::database_operation(format!("统计学生失败: {e}")))
    }

    /// 删除学生
    pub async fn delete_student_impl(&self, id: i64) -> Result<bool> {
        let result = Students::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| AttendanceSystemError::database_operation(format!("删除学生失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
