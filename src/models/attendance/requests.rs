use serde::Deserialize;
use ts_rs::TS;

use super::entities::StudentAttendance;

// 开始（或替换）一次考勤会话
//
// students 仅在编辑历史记录时携带：把过去某天的名单连同日期
// 一并载回会话，重新提交。
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct StartSessionRequest {
    pub faculty_id: i64,
    /// "YYYY-MM-DD"，缺省为今天
    pub date: Option<String>,
    pub students: Option<Vec<StudentAttendance>>,
}

// 按学号向会话添加学生
//
// 输入框原样传入：空串为 no-op，非数字为校验错误。
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct AddStudentRequest {
    #[serde(default)]
    pub roll_no: String,
}

// 修改会话中某个学生的状态
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct UpdateStatusRequest {
    pub status: super::entities::AttendanceStatus,
}

// 会话视图过滤参数
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct SessionQueryParams {
    /// "all" 或单个状态值
    pub status: Option<String>,
    pub search: Option<String>,
}

// 考勤历史查询
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct HistoryQueryParams {
    pub faculty_id: i64,
}

// 删除一条考勤记录
//
// 嵌入式副本按 (faculty_id, date) 匹配；独立集合仅在携带 id 时
// 删除（仅存在于嵌入式数组的老记录没有 id）。
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct DeleteRecordRequest {
    pub faculty_id: i64,
    pub date: String,
    pub id: Option<i64>,
}
