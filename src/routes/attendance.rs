use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::attendance::requests::{
    AddStudentRequest, DeleteRecordRequest, HistoryQueryParams, SessionQueryParams,
    StartSessionRequest, UpdateStatusRequest,
};
use crate::services::AttendanceService;
use crate::utils::SafeRollNoI64;

// 懒加载的全局 AttendanceService 实例（持有各用户的进行中会话）
static ATTENDANCE_SERVICE: Lazy<AttendanceService> = Lazy::new(AttendanceService::new_lazy);

// HTTP处理程序
pub async fn start_session(
    req: HttpRequest,
    data: web::Json<StartSessionRequest>,
) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE.start_session(&req, data.into_inner()).await
}

pub async fn view_session(
    req: HttpRequest,
    query: web::Query<SessionQueryParams>,
) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE.view_session(&req, query.into_inner()).await
}

pub async fn add_student(
    req: HttpRequest,
    data: web::Json<AddStudentRequest>,
) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE.add_student(&req, data.into_inner()).await
}

pub async fn update_status(
    req: HttpRequest,
    roll_no: SafeRollNoI64,
    data: web::Json<UpdateStatusRequest>,
) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE
        .update_status(&req, roll_no.0, data.into_inner())
        .await
}

pub async fn remove_student(
    req: HttpRequest,
    roll_no: SafeRollNoI64,
) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE.remove_student(&req, roll_no.0).await
}

pub async fn submit_attendance(req: HttpRequest) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE.submit(&req).await
}

pub async fn attendance_history(
    req: HttpRequest,
    query: web::Query<HistoryQueryParams>,
) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE.history(&req, query.into_inner()).await
}

pub async fn delete_record(
    req: HttpRequest,
    data: web::Json<DeleteRecordRequest>,
) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE.delete_record(&req, data.into_inner()).await
}

// 配置路由
pub fn configure_attendance_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/attendance")
            .wrap(middlewares::RequireJWT)
            .route("/session", web::post().to(start_session))
            .route("/session", web::get().to(view_session))
            .route("/session/students", web::post().to(add_student))
            .route("/session/students/{roll_no}", web::put().to(update_status))
            .route(
                "/session/students/{roll_no}",
                web::delete().to(remove_student),
            )
            .route("/submit", web::post().to(submit_attendance))
            .route("/history", web::get().to(attendance_history))
            .route("/records", web::delete().to(delete_record)),
    );
}
