use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::entities::Faculty;
use crate::models::PaginationInfo;

// 教师列表响应
#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/faculty.ts")]
pub struct FacultyListResponse {
    pub items: Vec<Faculty>,
    pub pagination: PaginationInfo,
}
