use serde::Serialize;
use ts_rs::TS;

use super::entities::{AttendanceRecord, StatusSummary, StudentAttendance};

// 当前会话视图
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct SessionResponse {
    pub faculty_id: i64,
    pub faculty_name: String,
    pub date: String,
    pub students: Vec<StudentAttendance>,
    pub total: usize,
}

// 历史记录条目：记录本体外加各状态统计
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct HistoryRecord {
    #[serde(flatten)]
    #[ts(flatten)]
    pub record: AttendanceRecord,
    pub summary: StatusSummary,
}

// 核对后的考勤历史（两个存储位置合并去重，按日期倒序）
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct AttendanceHistoryResponse {
    pub faculty_id: i64,
    pub records: Vec<HistoryRecord>,
}
