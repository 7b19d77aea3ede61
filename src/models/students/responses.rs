use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::entities::Student;
use crate::models::PaginationInfo;

// 学生列表响应
#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct StudentListResponse {
    pub items: Vec<Student>,
    pub pagination: PaginationInfo,
}
