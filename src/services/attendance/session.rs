//! 考勤会话操作
//!
//! 状态机：未选教师 -> 已选教师（标记中）。选中教师即建立会话；
//! 添加/改状态/移除只动内存；提交见 submit。

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::AttendanceService;
use crate::middlewares::RequireJWT;
use crate::models::attendance::entities::{AttendanceStatus, StudentAttendance};
use crate::models::attendance::requests::{
    AddStudentRequest, SessionQueryParams, StartSessionRequest, UpdateStatusRequest,
};
use crate::models::attendance::responses::SessionResponse;
use crate::models::attendance::session::AttendanceSession;
use crate::models::{ApiResponse, ErrorCode};

fn today() -> String {
    chrono::Utc::now().format("%Y-%m-%d").to_string()
}

fn session_response(session: &AttendanceSession, students: Vec<StudentAttendance>) -> SessionResponse {
    SessionResponse {
        faculty_id: session.faculty_id,
        faculty_name: session.faculty_name.clone(),
        date: session.date.clone(),
        total: students.len(),
        students,
    }
}

fn unauthorized() -> HttpResponse {
    HttpResponse::Unauthorized().json(ApiResponse::error_empty(
        ErrorCode::Unauthorized,
        "Unauthorized: missing user id",
    ))
}

fn no_session() -> HttpResponse {
    HttpResponse::BadRequest().json(ApiResponse::error_empty(
        ErrorCode::AttendanceSessionNotStarted,
        "Select a faculty member first",
    ))
}

pub async fn start_session(
    service: &AttendanceService,
    request: &HttpRequest,
    data: StartSessionRequest,
) -> ActixResult<HttpResponse> {
    let Some(user_id) = RequireJWT::extract_user_id(request) else {
        return Ok(unauthorized());
    };
    let storage = service.get_storage(request);

    let date = data.date.unwrap_or_else(today);
    if chrono::NaiveDate::parse_from_str(&date, "%Y-%m-%d").is_err() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Date must be formatted as YYYY-MM-DD",
        )));
    }

    let faculty = match storage.get_faculty_by_id(data.faculty_id).await {
        Ok(Some(faculty)) => faculty,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::FacultyNotFound,
                "Faculty not found",
            )));
        }
        Err(e) => {
            error!("Failed to fetch faculty {}: {}", data.faculty_id, e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to fetch faculty: {e}"),
                )),
            );
        }
    };

    // students 仅编辑历史记录时携带；重新选择教师总是替换旧会话
    let session = match data.students {
        Some(entries) => {
            AttendanceSession::with_entries(faculty.id, faculty.name.clone(), date, entries)
        }
        None => AttendanceSession::new(faculty.id, faculty.name.clone(), date),
    };

    let response = session_response(&session, session.entries().to_vec());
    service.sessions().insert(user_id, session);

    Ok(HttpResponse::Ok().json(ApiResponse::success(response, "Session started")))
}

pub async fn add_student(
    service: &AttendanceService,
    request: &HttpRequest,
    data: AddStudentRequest,
) -> ActixResult<HttpResponse> {
    let Some(user_id) = RequireJWT::extract_user_id(request) else {
        return Ok(unauthorized());
    };
    if !service.sessions().contains_key(&user_id) {
        return Ok(no_session());
    }

    let raw = data.roll_no.trim();

    // 空输入是 no-op：原样返回当前会话
    if raw.is_empty() {
        return match service.sessions().get(&user_id) {
            Some(session) => {
                let response = session_response(&session, session.entries().to_vec());
                Ok(HttpResponse::Ok().json(ApiResponse::success(response, "OK")))
            }
            None => Ok(no_session()),
        };
    }

    let Ok(roll_no) = raw.parse::<i64>() else {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::RollNoInvalid,
            "Roll number must be a number",
        )));
    };

    // 先查花名册，再短暂锁会话，避免跨 await 持有会话引用
    let storage = service.get_storage(request);
    let student = match storage.get_student_by_roll_no(roll_no).await {
        Ok(Some(student)) => student,
        Ok(None) => {
            // 查无此号：不改动会话
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::RollNoNotFound,
                "Student with this roll number not found",
            )));
        }
        Err(e) => {
            error!("Failed to look up roll number {}: {}", roll_no, e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to look up student: {e}"),
                )),
            );
        }
    };

    let Some(mut session) = service.sessions().get_mut(&user_id) else {
        return Ok(no_session());
    };
    // 已在列表中的学号是幂等 no-op
    session.add_student(&student, chrono::Utc::now());

    let response = session_response(&session, session.entries().to_vec());
    Ok(HttpResponse::Ok().json(ApiResponse::success(response, "OK")))
}

pub async fn update_status(
    service: &AttendanceService,
    request: &HttpRequest,
    roll_no: i64,
    data: UpdateStatusRequest,
) -> ActixResult<HttpResponse> {
    let Some(user_id) = RequireJWT::extract_user_id(request) else {
        return Ok(unauthorized());
    };
    let Some(mut session) = service.sessions().get_mut(&user_id) else {
        return Ok(no_session());
    };

    if !session.update_status(roll_no, data.status) {
        return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::RollNoNotFound,
            "Student is not in the attendance list",
        )));
    }

    let response = session_response(&session, session.entries().to_vec());
    Ok(HttpResponse::Ok().json(ApiResponse::success(response, "Status updated")))
}

pub async fn remove_student(
    service: &AttendanceService,
    request: &HttpRequest,
    roll_no: i64,
) -> ActixResult<HttpResponse> {
    let Some(user_id) = RequireJWT::extract_user_id(request) else {
        return Ok(unauthorized());
    };
    let Some(mut session) = service.sessions().get_mut(&user_id) else {
        return Ok(no_session());
    };

    if !session.remove(roll_no) {
        return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::RollNoNotFound,
            "Student is not in the attendance list",
        )));
    }

    let response = session_response(&session, session.entries().to_vec());
    Ok(HttpResponse::Ok().json(ApiResponse::success(response, "Student removed")))
}

pub async fn view_session(
    service: &AttendanceService,
    request: &HttpRequest,
    query: SessionQueryParams,
) -> ActixResult<HttpResponse> {
    let Some(user_id) = RequireJWT::extract_user_id(request) else {
        return Ok(unauthorized());
    };
    let Some(session) = service.sessions().get(&user_id) else {
        return Ok(no_session());
    };

    // "all" 或缺省不过滤；未知状态归入 other 桶
    let status = match query.status.as_deref() {
        None | Some("all") => None,
        Some(s) => Some(s.parse::<AttendanceStatus>().unwrap_or(AttendanceStatus::Other)),
    };

    let students = session.filtered(status, query.search.as_deref());
    let response = session_response(&session, students);
    Ok(HttpResponse::Ok().json(ApiResponse::success(response, "OK")))
}
