use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::FacultyService;
use crate::models::faculty::requests::{FacultyListQuery, FacultyQueryParams};
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_faculty(
    service: &FacultyService,
    request: &HttpRequest,
    query: FacultyQueryParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let list_query = FacultyListQuery {
        page: Some(query.pagination.page),
        size: Some(query.pagination.size),
        search: query.search,
    };

    match storage.list_faculty_with_pagination(list_query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(response, "OK"))),
        Err(e) => {
            error!("Failed to list faculty: {}", e);
            Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to list faculty: {e}"),
            )))
        }
    }
}
