//! 考勤历史核对
//!
//! 同一条逻辑记录可能同时存在于教师文档的嵌入式数组和独立
//! attendance 集合。合并规则：嵌入式在前拼接，按 date 去重，
//! 首个出现者胜出——即使后来者数据更全（沿用既有产品行为，
//! 见 DESIGN.md 的未决问题记录）。

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use chrono::NaiveDate;
use tracing::error;

use super::AttendanceService;
use crate::models::attendance::entities::AttendanceRecord;
use crate::models::attendance::requests::HistoryQueryParams;
use crate::models::attendance::responses::{AttendanceHistoryResponse, HistoryRecord};
use crate::models::{ApiResponse, ErrorCode};

/// 合并两个来源的考勤历史，按 date 去重，先见者胜
pub fn merge_history(
    embedded: Vec<AttendanceRecord>,
    standalone: Vec<AttendanceRecord>,
) -> Vec<AttendanceRecord> {
    let mut merged: Vec<AttendanceRecord> = Vec::new();
    for record in embedded.into_iter().chain(standalone) {
        if !merged.iter().any(|r| r.date == record.date) {
            merged.push(record);
        }
    }
    merged
}

/// 展示顺序：按解析后的日期倒序，无法解析的日期排到最后
pub fn sort_history_desc(records: &mut [AttendanceRecord]) {
    records.sort_by_key(|r| {
        std::cmp::Reverse(
            NaiveDate::parse_from_str(&r.date, "%Y-%m-%d").unwrap_or(NaiveDate::MIN),
        )
    });
}

pub async fn attendance_history(
    service: &AttendanceService,
    request: &HttpRequest,
    query: HistoryQueryParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 嵌入式来源：教师文档
    let embedded = match storage.list_embedded_attendance(query.faculty_id).await {
        Ok(records) => records,
        Err(crate::errors::AttendanceSystemError::NotFound(msg)) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::FacultyNotFound,
                msg,
            )));
        }
        Err(e) => {
            error!("Failed to fetch faculty {}: {}", query.faculty_id, e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to fetch attendance history: {e}"),
                )),
            );
        }
    };

    // 独立来源：attendance 集合
    let standalone = match storage.list_attendance_by_faculty(query.faculty_id).await {
        Ok(records) => records,
        Err(e) => {
            error!(
                "Failed to list attendance for faculty {}: {}",
                query.faculty_id, e
            );
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to list attendance records: {e}"),
                )),
            );
        }
    };

    let mut merged = merge_history(embedded, standalone);
    sort_history_desc(&mut merged);

    let records = merged
        .into_iter()
        .map(|record| {
            let summary = record.status_summary();
            HistoryRecord { record, summary }
        })
        .collect();

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        AttendanceHistoryResponse {
            faculty_id: query.faculty_id,
            records,
        },
        "OK",
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::attendance::entities::{AttendanceStatus, StudentAttendance};
    use chrono::Utc;

    fn entry(roll_no: i64, name: &str) -> StudentAttendance {
        StudentAttendance {
            student_id: roll_no,
            roll_no,
            name: name.to_string(),
            status: AttendanceStatus::Present,
            timestamp: Utc::now(),
        }
    }

    fn record(id: Option<i64>, date: &str, students: Vec<StudentAttendance>) -> AttendanceRecord {
        AttendanceRecord {
            id,
            faculty_id: 1,
            faculty_name: "Ms. Khan".to_string(),
            date: date.to_string(),
            students,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_merge_keeps_first_seen_per_date() {
        // 嵌入式记录只有 A；独立记录同日期且更全（A、B）。
        // 胜出的是拼接顺序里先出现的嵌入式版本。
        let embedded = vec![record(None, "2024-05-01", vec![entry(1, "A")])];
        let standalone = vec![record(
            Some(9),
            "2024-05-01",
            vec![entry(1, "A"), entry(2, "B")],
        )];

        let merged = merge_history(embedded, standalone);

        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].date, "2024-05-01");
        assert_eq!(merged[0].id, None);
        assert_eq!(merged[0].students.len(), 1);
    }

    #[test]
    fn test_merge_preserves_distinct_dates_from_both_sources() {
        let embedded = vec![record(None, "2024-05-01", vec![entry(1, "A")])];
        let standalone = vec![
            record(Some(7), "2024-05-02", vec![entry(2, "B")]),
            record(Some(8), "2024-05-01", vec![entry(3, "C")]), // 重复日期，被丢弃
        ];

        let merged = merge_history(embedded, standalone);

        assert_eq!(merged.len(), 2);
        let dates: Vec<&str> = merged.iter().map(|r| r.date.as_str()).collect();
        assert_eq!(dates, vec!["2024-05-01", "2024-05-02"]);
    }

    #[test]
    fn test_merge_dedupes_within_single_source_too() {
        // 编辑流程会在嵌入式数组里留下同日期的两条记录
        let embedded = vec![
            record(None, "2024-05-01", vec![entry(1, "A")]),
            record(None, "2024-05-01", vec![entry(1, "A"), entry(2, "B")]),
        ];

        let merged = merge_history(embedded, vec![]);

        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].students.len(), 1);
    }

    #[test]
    fn test_sort_descending_by_parsed_date() {
        let mut records = vec![
            record(None, "2024-04-30", vec![]),
            record(None, "2024-05-02", vec![]),
            record(None, "not-a-date", vec![]),
            record(None, "2024-05-01", vec![]),
        ];

        sort_history_desc(&mut records);

        let dates: Vec<&str> = records.iter().map(|r| r.date.as_str()).collect();
        assert_eq!(dates, vec!["2024-05-02", "2024-05-01", "2024-04-30", "not-a-date"]);
    }

    #[test]
    fn test_deleted_record_disappears_from_next_merge() {
        let embedded = vec![
            record(None, "2024-05-01", vec![entry(1, "A")]),
            record(None, "2024-05-02", vec![entry(2, "B")]),
        ];
        let standalone = vec![record(Some(3), "2024-05-02", vec![entry(2, "B")])];

        // 删除 2024-05-02：嵌入式按 (date, faculty_id) 过滤，独立集合按 id
        let embedded_after: Vec<_> = embedded
            .into_iter()
            .filter(|r| !(r.date == "2024-05-02" && r.faculty_id == 1))
            .collect();
        let standalone_after: Vec<_> = standalone
            .into_iter()
            .filter(|r| r.id != Some(3))
            .collect();

        let merged = merge_history(embedded_after, standalone_after);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].date, "2024-05-01");
    }
}
