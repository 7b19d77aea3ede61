use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 考勤状态
//
// 历史数据可能带有这四种之外的状态字符串，反序列化时统一归入
// Other 桶参与统计，不视为错误。
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub enum AttendanceStatus {
    Present,
    Absent,
    Late,
    Leave,
    Other,
}

impl<'de> Deserialize<'de> for AttendanceStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(s.parse::<AttendanceStatus>().unwrap_or(AttendanceStatus::Other))
    }
}

impl std::fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AttendanceStatus::Present => write!(f, "present"),
            AttendanceStatus::Absent => write!(f, "absent"),
            AttendanceStatus::Late => write!(f, "late"),
            AttendanceStatus::Leave => write!(f, "leave"),
            AttendanceStatus::Other => write!(f, "other"),
        }
    }
}

impl std::str::FromStr for AttendanceStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "present" => Ok(AttendanceStatus::Present),
            "absent" => Ok(AttendanceStatus::Absent),
            "late" => Ok(AttendanceStatus::Late),
            "leave" => Ok(AttendanceStatus::Leave),
            _ => Err(format!("Unrecognized attendance status: {s}")),
        }
    }
}

// 单个学生的考勤条目
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct StudentAttendance {
    pub student_id: i64,
    pub roll_no: i64,
    pub name: String,
    pub status: AttendanceStatus,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

// 一次考勤记录
//
// 同一条逻辑记录存在两份：教师文档的嵌入式数组（无 id）与独立
// attendance 集合（有 id）。date 为 "YYYY-MM-DD"，是核对去重的
// 自然键。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct AttendanceRecord {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub id: Option<i64>,
    pub faculty_id: i64,
    pub faculty_name: String,
    pub date: String,
    pub students: Vec<StudentAttendance>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

// 单条记录的状态统计
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct StatusSummary {
    pub present: usize,
    pub absent: usize,
    pub late: usize,
    pub leave: usize,
    pub other: usize,
}

impl AttendanceRecord {
    /// 统计某一状态的学生数
    pub fn status_count(&self, status: AttendanceStatus) -> usize {
        self.students.iter().filter(|s| s.status == status).count()
    }

    /// 汇总各状态的学生数
    pub fn status_summary(&self) -> StatusSummary {
        let mut summary = StatusSummary::default();
        for entry in &self.students {
            match entry.status {
                AttendanceStatus::Present => summary.present += 1,
                AttendanceStatus::Absent => summary.absent += 1,
                AttendanceStatus::Late => summary.late += 1,
                AttendanceStatus::Leave => summary.leave += 1,
                AttendanceStatus::Other => summary.other += 1,
            }
        }
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn entry(roll_no: i64, status: AttendanceStatus) -> StudentAttendance {
        StudentAttendance {
            student_id: roll_no,
            roll_no,
            name: format!("student-{roll_no}"),
            status,
            timestamp: Utc::now(),
        }
    }

    fn record(statuses: &[AttendanceStatus]) -> AttendanceRecord {
        AttendanceRecord {
            id: None,
            faculty_id: 1,
            faculty_name: "Ms. Khan".to_string(),
            date: "2024-05-01".to_string(),
            students: statuses
                .iter()
                .enumerate()
                .map(|(i, s)| entry(i as i64 + 1, *s))
                .collect(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_status_count() {
        use AttendanceStatus::*;
        let record = record(&[Present, Present, Absent, Late, Leave, Present]);

        assert_eq!(record.status_count(Present), 3);
        assert_eq!(record.status_count(Absent), 1);
        assert_eq!(record.status_count(Late), 1);
        assert_eq!(record.status_count(Leave), 1);
        assert_eq!(record.status_count(Other), 0);
    }

    #[test]
    fn test_status_summary_matches_counts() {
        use AttendanceStatus::*;
        let record = record(&[Present, Absent, Absent, Other]);
        let summary = record.status_summary();

        assert_eq!(summary.present, 1);
        assert_eq!(summary.absent, 2);
        assert_eq!(summary.other, 1);
        assert_eq!(summary.late, 0);
    }

    #[test]
    fn test_unknown_status_deserializes_into_other_bucket() {
        let json = r#"{
            "student_id": 9,
            "roll_no": 70135209,
            "name": "Bilal",
            "status": "excused",
            "timestamp": "2024-05-01T08:00:00Z"
        }"#;
        let entry: StudentAttendance = serde_json::from_str(json).unwrap();
        assert_eq!(entry.status, AttendanceStatus::Other);
    }

    #[test]
    fn test_embedded_record_serializes_without_id() {
        let record = record(&[AttendanceStatus::Present]);
        let value = serde_json::to_value(&record).unwrap();
        assert!(value.get("id").is_none());

        let standalone = AttendanceRecord {
            id: Some(7),
            ..record
        };
        let value = serde_json::to_value(&standalone).unwrap();
        assert_eq!(value["id"], 7);
    }
}
