use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::faculty::requests::{CreateFacultyRequest, FacultyQueryParams};
use crate::services::FacultyService;
use crate::utils::SafeIdI64;

// 懒加载的全局 FacultyService 实例
static FACULTY_SERVICE: Lazy<FacultyService> = Lazy::new(FacultyService::new_lazy);

// HTTP处理程序
pub async fn list_faculty(
    req: HttpRequest,
    query: web::Query<FacultyQueryParams>,
) -> ActixResult<HttpResponse> {
    FACULTY_SERVICE.list_faculty(&req, query.into_inner()).await
}

pub async fn create_faculty(
    req: HttpRequest,
    faculty_data: web::Json<CreateFacultyRequest>,
) -> ActixResult<HttpResponse> {
    FACULTY_SERVICE
        .create_faculty(&req, faculty_data.into_inner())
        .await
}

pub async fn delete_faculty(req: HttpRequest, faculty_id: SafeIdI64) -> ActixResult<HttpResponse> {
    FACULTY_SERVICE.delete_faculty(&req, faculty_id.0).await
}

// 配置路由
pub fn configure_faculty_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/faculty")
            .wrap(middlewares::RequireJWT)
            .route("", web::get().to(list_faculty))
            .route("", web::post().to(create_faculty))
            .route("/{id}", web::delete().to(delete_faculty)),
    );
}
