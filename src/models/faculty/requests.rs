use crate::models::common::pagination::PaginationQuery;
use serde::Deserialize;
use ts_rs::TS;

use super::entities::Specialization;

// 教师查询参数（来自HTTP请求）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/faculty.ts")]
pub struct FacultyQueryParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub search: Option<String>,
}

// 创建教师请求（入职表单字段）
//
// 班级、科目与时间表不由请求指定，由分配策略在创建时决定
// （见 services::faculty::assignment）。
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/faculty.ts")]
pub struct CreateFacultyRequest {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub education: String,
    pub university: String,
    pub address: String,
    pub specialization: Specialization,
}

// 教师列表查询参数（用于存储层）
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/faculty.ts")]
pub struct FacultyListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub search: Option<String>,
}
