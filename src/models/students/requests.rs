use crate::models::common::pagination::PaginationQuery;
use serde::Deserialize;
use ts_rs::TS;

use super::entities::Gender;

// 学生查询参数（来自HTTP请求）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct StudentQueryParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub search: Option<String>,
}

// 创建学生请求（注册表单字段，学号由服务端分配）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct CreateStudentRequest {
    pub name: String,
    pub father_name: String,
    pub email: String,
    pub student_class: String,
    pub address: String,
    pub age: i32,
    pub gender: Gender,
}

// 学号查询（花名册查找）
//
// 前端把输入框原样传过来，空串与非数字在服务层处理。
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct RollNoQuery {
    #[serde(default)]
    pub roll_no: String,
}

// 学生列表查询参数（用于存储层）
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct StudentListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub search: Option<String>,
}
