//! 进行中的考勤会话
//!
//! 会话是内存中尚未提交的 {学生, 状态} 列表，按登录用户隔离，
//! 不落库。提交后由 services::attendance::submit 写入两个存储位置。

use chrono::{DateTime, Utc};
use serde::Serialize;
use ts_rs::TS;

use super::entities::{AttendanceRecord, AttendanceStatus, StudentAttendance};
use crate::models::students::entities::Student;

#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct AttendanceSession {
    pub faculty_id: i64,
    pub faculty_name: String,
    /// "YYYY-MM-DD"，编辑历史记录时会被回填为过去的日期
    pub date: String,
    entries: Vec<StudentAttendance>,
}

impl AttendanceSession {
    pub fn new(faculty_id: i64, faculty_name: String, date: String) -> Self {
        Self {
            faculty_id,
            faculty_name,
            date,
            entries: Vec::new(),
        }
    }

    /// 预载入历史记录的学生列表（编辑流程），重复学号只保留首个
    pub fn with_entries(
        faculty_id: i64,
        faculty_name: String,
        date: String,
        entries: Vec<StudentAttendance>,
    ) -> Self {
        let mut session = Self::new(faculty_id, faculty_name, date);
        for entry in entries {
            session.add(entry);
        }
        session
    }

    /// 添加一条考勤条目；同一学号已存在时不做任何修改
    pub fn add(&mut self, entry: StudentAttendance) -> bool {
        if self.contains(entry.roll_no) {
            return false;
        }
        self.entries.push(entry);
        true
    }

    /// 按花名册学生添加，默认状态 present
    pub fn add_student(&mut self, student: &Student, now: DateTime<Utc>) -> bool {
        self.add(StudentAttendance {
            student_id: student.id,
            roll_no: student.roll_no,
            name: student.name.clone(),
            status: AttendanceStatus::Present,
            timestamp: now,
        })
    }

    /// 修改某个学生的状态
    pub fn update_status(&mut self, roll_no: i64, status: AttendanceStatus) -> bool {
        match self.entries.iter_mut().find(|e| e.roll_no == roll_no) {
            Some(entry) => {
                entry.status = status;
                true
            }
            None => false,
        }
    }

    /// 从待提交列表移除某个学生
    pub fn remove(&mut self, roll_no: i64) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.roll_no != roll_no);
        self.entries.len() != before
    }

    pub fn contains(&self, roll_no: i64) -> bool {
        self.entries.iter().any(|e| e.roll_no == roll_no)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn entries(&self) -> &[StudentAttendance] {
        &self.entries
    }

    /// 按状态与搜索词过滤（姓名不区分大小写子串，或学号子串）
    pub fn filtered(
        &self,
        status: Option<AttendanceStatus>,
        search: Option<&str>,
    ) -> Vec<StudentAttendance> {
        let search = search.map(|s| s.to_lowercase());
        self.entries
            .iter()
            .filter(|e| status.is_none_or(|s| e.status == s))
            .filter(|e| {
                search.as_deref().is_none_or(|term| {
                    term.is_empty()
                        || e.name.to_lowercase().contains(term)
                        || e.roll_no.to_string().contains(term)
                })
            })
            .cloned()
            .collect()
    }

    /// 固化为一条考勤记录（嵌入式副本，无 id）
    pub fn to_record(&self, created_at: DateTime<Utc>) -> AttendanceRecord {
        AttendanceRecord {
            id: None,
            faculty_id: self.faculty_id,
            faculty_name: self.faculty_name.clone(),
            date: self.date.clone(),
            students: self.entries.clone(),
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::students::entities::Gender;

    fn student(id: i64, roll_no: i64, name: &str) -> Student {
        Student {
            id,
            roll_no,
            name: name.to_string(),
            father_name: "father".to_string(),
            email: format!("{name}@school.pk"),
            student_class: "9th".to_string(),
            address: "addr".to_string(),
            age: 14,
            gender: Gender::Male,
            created_at: Utc::now(),
        }
    }

    fn session() -> AttendanceSession {
        AttendanceSession::new(1, "Ms. Khan".to_string(), "2024-05-01".to_string())
    }

    #[test]
    fn test_add_defaults_to_present() {
        let mut session = session();
        assert!(session.add_student(&student(1, 70135200, "Ahmed"), Utc::now()));
        assert_eq!(session.entries()[0].status, AttendanceStatus::Present);
    }

    #[test]
    fn test_add_is_idempotent_per_roll_no() {
        let mut session = session();
        let now = Utc::now();
        assert!(session.add_student(&student(1, 70135200, "Ahmed"), now));
        // 重复提交同一学号不改变列表
        assert!(!session.add_student(&student(1, 70135200, "Ahmed"), now));
        assert_eq!(session.len(), 1);

        let snapshot = session.entries().to_vec();
        session.add_student(&student(1, 70135200, "Ahmed"), Utc::now());
        assert_eq!(session.entries(), snapshot.as_slice());
    }

    #[test]
    fn test_update_status_and_remove() {
        let mut session = session();
        let now = Utc::now();
        session.add_student(&student(1, 70135200, "Ahmed"), now);
        session.add_student(&student(2, 70135201, "Fatima"), now);

        assert!(session.update_status(70135201, AttendanceStatus::Late));
        assert_eq!(session.entries()[1].status, AttendanceStatus::Late);
        assert!(!session.update_status(99, AttendanceStatus::Absent));

        assert!(session.remove(70135200));
        assert!(!session.remove(70135200));
        assert_eq!(session.len(), 1);
    }

    #[test]
    fn test_filtered_by_status_and_search() {
        let mut session = session();
        let now = Utc::now();
        session.add_student(&student(1, 70135200, "Ahmed"), now);
        session.add_student(&student(2, 70135201, "Fatima"), now);
        session.update_status(70135201, AttendanceStatus::Absent);

        let absents = session.filtered(Some(AttendanceStatus::Absent), None);
        assert_eq!(absents.len(), 1);
        assert_eq!(absents[0].roll_no, 70135201);

        let by_name = session.filtered(None, Some("ahm"));
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].name, "Ahmed");

        let by_roll = session.filtered(None, Some("5201"));
        assert_eq!(by_roll.len(), 1);

        // 空搜索词不过滤
        assert_eq!(session.filtered(None, Some("")).len(), 2);
    }

    #[test]
    fn test_with_entries_dedupes_preloaded_students() {
        let now = Utc::now();
        let entry = StudentAttendance {
            student_id: 1,
            roll_no: 70135200,
            name: "Ahmed".to_string(),
            status: AttendanceStatus::Leave,
            timestamp: now,
        };
        let session = AttendanceSession::with_entries(
            1,
            "Ms. Khan".to_string(),
            "2024-04-02".to_string(),
            vec![entry.clone(), entry.clone()],
        );
        assert_eq!(session.len(), 1);
        // 编辑流程保留历史状态，不重置为 present
        assert_eq!(session.entries()[0].status, AttendanceStatus::Leave);
    }

    #[test]
    fn test_to_record_carries_session_fields() {
        let mut session = session();
        session.add_student(&student(1, 70135200, "Ahmed"), Utc::now());
        let created_at = Utc::now();
        let record = session.to_record(created_at);

        assert_eq!(record.id, None);
        assert_eq!(record.faculty_id, 1);
        assert_eq!(record.date, "2024-05-01");
        assert_eq!(record.students.len(), 1);
        assert_eq!(record.created_at, created_at);
    }
}
