//! 提交考勤：同一条记录写两处
//!
//! 先做嵌入式数组的 union 追加，再插入独立集合。后半段失败时
//! 对前半段做补偿删除，避免两处数据悄悄分叉；补偿本身失败则把
//! 分叉明确暴露在日志与响应里。

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info, warn};

use super::AttendanceService;
use crate::middlewares::RequireJWT;
use crate::models::{ApiResponse, ErrorCode};

pub async fn submit_attendance(
    service: &AttendanceService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(user_id) = RequireJWT::extract_user_id(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Unauthorized: missing user id",
        )));
    };

    // 快照当前会话；提交成功前不清除
    let record = {
        let Some(session) = service.sessions().get(&user_id) else {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::AttendanceSessionNotStarted,
                "Select a faculty member first",
            )));
        };
        if session.is_empty() {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::AttendanceSessionEmpty,
                "No students in the attendance list",
            )));
        }
        session.to_record(chrono::Utc::now())
    };

    let storage = service.get_storage(request);

    // 第一步：嵌入式数组 union 追加（完全相同的记录不重复追加）
    let appended = match storage
        .append_faculty_attendance(record.faculty_id, &record)
        .await
    {
        Ok(appended) => appended,
        Err(e) => {
            error!("Failed to append embedded attendance: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::AttendanceSubmitFailed,
                    "Failed to submit attendance",
                )),
            );
        }
    };

    // 第二步：独立集合插入；失败则补偿删除第一步的追加
    let stored = match storage.insert_attendance_record(&record).await {
        Ok(stored) => stored,
        Err(e) => {
            error!("Failed to insert attendance record: {}", e);
            if appended {
                match storage
                    .retract_faculty_attendance(record.faculty_id, &record)
                    .await
                {
                    Ok(_) => {
                        warn!(
                            "Compensated embedded attendance for faculty {} on {}",
                            record.faculty_id, record.date
                        );
                    }
                    Err(comp_err) => {
                        // 补偿失败：两处数据已分叉，明确暴露出来
                        error!(
                            "Dual write compensation failed for faculty {} on {}: {}",
                            record.faculty_id, record.date, comp_err
                        );
                        return Ok(HttpResponse::InternalServerError().json(
                            ApiResponse::error_empty(
                                ErrorCode::AttendanceSubmitFailed,
                                "Failed to submit attendance; stores may be inconsistent",
                            ),
                        ));
                    }
                }
            }
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::AttendanceSubmitFailed,
                    "Failed to submit attendance",
                )),
            );
        }
    };

    // 两处都写成功后才清空会话
    service.sessions().remove(&user_id);
    info!(
        "Attendance submitted for faculty {} on {} ({} students)",
        stored.faculty_id,
        stored.date,
        stored.students.len()
    );

    Ok(HttpResponse::Created()
        .json(ApiResponse::success(stored, "Attendance submitted successfully")))
}
