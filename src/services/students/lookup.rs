use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::StudentService;
use crate::models::students::requests::RollNoQuery;
use crate::models::{ApiResponse, ErrorCode};

/// 花名册查找：按学号找到唯一学生，或报告未找到
///
/// 输入为表单原始字符串：空串是 no-op（返回 204），非数字是校验
/// 错误，查无此号返回用户可见的提示信息。
pub async fn lookup_student(
    service: &StudentService,
    request: &HttpRequest,
    query: RollNoQuery,
) -> ActixResult<HttpResponse> {
    let raw = query.roll_no.trim();

    // 空输入不做任何事
    if raw.is_empty() {
        return Ok(HttpResponse::NoContent().finish());
    }

    let Ok(roll_no) = raw.parse::<i64>() else {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::RollNoInvalid,
            "Roll number must be a number",
        )));
    };

    let storage = service.get_storage(request);

    match storage.get_student_by_roll_no(roll_no).await {
        Ok(Some(student)) => Ok(HttpResponse::Ok().json(ApiResponse::success(student, "OK"))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::RollNoNotFound,
            "Student with this roll number not found",
        ))),
        Err(e) => {
            error!("Failed to look up student: {}", e);
            Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to look up student: {e}"),
            )))
        }
    }
}
