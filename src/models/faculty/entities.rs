use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::attendance::entities::AttendanceRecord;

// 教师专业方向，决定随机分配科目时的候选池
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/faculty.ts")]
pub enum Specialization {
    Science,
    Arts,
    Commerce,
    Other,
}

impl<'de> Deserialize<'de> for Specialization {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            "science" => Ok(Specialization::Science),
            "arts" => Ok(Specialization::Arts),
            "commerce" => Ok(Specialization::Commerce),
            "other" => Ok(Specialization::Other),
            _ => Err(serde::de::Error::custom(format!(
                "无效的专业方向: '{s}'. 支持: science, arts, commerce, other"
            ))),
        }
    }
}

impl std::fmt::Display for Specialization {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Specialization::Science => write!(f, "science"),
            Specialization::Arts => write!(f, "arts"),
            Specialization::Commerce => write!(f, "commerce"),
            Specialization::Other => write!(f, "other"),
        }
    }
}

impl std::str::FromStr for Specialization {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "science" => Ok(Specialization::Science),
            "arts" => Ok(Specialization::Arts),
            "commerce" => Ok(Specialization::Commerce),
            "other" => Ok(Specialization::Other),
            _ => Err(format!("Invalid specialization: {s}")),
        }
    }
}

// 授课时间表（展示字符串，非结构化排课数据）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/faculty.ts")]
pub struct Schedule {
    /// 逗号连接的工作日子集，如 "Monday, Wednesday"
    pub days: String,
    /// "<开始> - <结束>"，12 小时制
    pub time: String,
}

// 分配策略的产出：班级 + 科目 + 时间表
//
// 由 services::faculty::assignment 在创建教师时生成，存储层原样落库。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/faculty.ts")]
pub struct TeachingAssignment {
    pub assigned_class: i32,
    pub assigned_subject: String,
    pub schedule: Schedule,
}

// 教师实体
//
// attendance_records 为嵌入式考勤历史（追加写），与独立 attendance
// 集合并存；两份数据的核对见 services::attendance::history。
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/faculty.ts")]
pub struct Faculty {
    pub id: i64,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub education: String,
    pub university: String,
    pub address: String,
    pub specialization: Specialization,
    pub assigned_class: i32,
    pub assigned_subject: String,
    pub schedule: Schedule,
    #[serde(default)]
    pub attendance_records: Vec<AttendanceRecord>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
