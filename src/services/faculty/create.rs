use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::FacultyService;
use crate::models::faculty::requests::CreateFacultyRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::validate_email;

pub async fn create_faculty(
    service: &FacultyService,
    request: &HttpRequest,
    faculty_data: CreateFacultyRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if faculty_data.name.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Faculty name must not be empty",
        )));
    }
    if let Err(msg) = validate_email(&faculty_data.email) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::BadRequest, msg)));
    }

    // 入职即指派班级/科目/时间表
    let assignment = match service.policy().assign(faculty_data.specialization) {
        Ok(assignment) => assignment,
        Err(e) => {
            error!("Assignment policy failed: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::FacultyCreationFailed,
                    "Failed to assign class and schedule",
                )),
            );
        }
    };

    match storage.create_faculty(faculty_data, assignment).await {
        Ok(faculty) => {
            info!(
                "Faculty {} hired: class {}, subject {}",
                faculty.name, faculty.assigned_class, faculty.assigned_subject
            );
            Ok(HttpResponse::Created()
                .json(ApiResponse::success(faculty, "Faculty member added successfully")))
        }
        Err(e) => {
            let msg = format!("Faculty creation failed: {e}");
            error!("{}", msg);
            Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::FacultyCreationFailed,
                msg,
            )))
        }
    }
}
