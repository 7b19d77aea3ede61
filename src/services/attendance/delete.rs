//! 删除考勤记录
//!
//! 两处各删各的：嵌入式数组按 (faculty_id, date) 匹配，独立集合
//! 仅在请求携带 id 时按 id 删除（老的嵌入式记录没有 id，只能按
//! 日期匹配）。两个删除相互独立，没有原子性保证。

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::AttendanceService;
use crate::errors::AttendanceSystemError;
use crate::models::attendance::requests::DeleteRecordRequest;
use crate::models::{ApiResponse, ErrorCode};

pub async fn delete_record(
    service: &AttendanceService,
    request: &HttpRequest,
    data: DeleteRecordRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 删除嵌入式副本
    let removed_embedded = match storage
        .remove_embedded_attendance(data.faculty_id, &data.date)
        .await
    {
        Ok(removed) => removed,
        Err(AttendanceSystemError::NotFound(msg)) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::FacultyNotFound,
                msg,
            )));
        }
        Err(e) => {
            error!("Failed to remove embedded attendance: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::AttendanceDeleteFailed,
                    "Failed to delete attendance record",
                )),
            );
        }
    };

    // 删除独立集合中的记录（仅当有 id）
    let removed_standalone = match data.id {
        Some(record_id) => match storage.delete_attendance_record(record_id).await {
            Ok(removed) => removed,
            Err(e) => {
                // 嵌入式可能已删掉，此处失败会留下单边副本
                error!(
                    "Failed to delete attendance record {} (embedded removed: {}): {}",
                    record_id, removed_embedded, e
                );
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::AttendanceDeleteFailed,
                        "Failed to delete attendance record",
                    )),
                );
            }
        },
        None => false,
    };

    if !removed_embedded && !removed_standalone {
        return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::AttendanceRecordNotFound,
            "Attendance record not found",
        )));
    }

    info!(
        "Attendance record deleted for faculty {} on {} (embedded: {}, standalone: {})",
        data.faculty_id, data.date, removed_embedded, removed_standalone
    );
    Ok(HttpResponse::Ok()
        .json(ApiResponse::<()>::success_empty("Attendance record deleted successfully")))
}
