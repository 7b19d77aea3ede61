use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::FacultyService;
use crate::models::{ApiResponse, ErrorCode};

/// 删除教师：嵌入式考勤记录随教师行一起消失，独立集合的记录由
/// 外键级联删除
pub async fn delete_faculty(
    service: &FacultyService,
    request: &HttpRequest,
    faculty_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_faculty(faculty_id).await {
        Ok(true) => {
            info!("Faculty {} deleted", faculty_id);
            Ok(HttpResponse::Ok().json(ApiResponse::<()>::success_empty("Faculty deleted")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::FacultyNotFound,
            "Faculty not found",
        ))),
        Err(e) => {
            error!("Failed to delete faculty {}: {}", faculty_id, e);
            Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::FacultyDeleteFailed,
                format!("Failed to delete faculty: {e}"),
            )))
        }
    }
}
