use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use serde::Serialize;
use ts_rs::TS;

use crate::models::{ApiResponse, AppStartTime};

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/system.ts")]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: i64,
}

pub struct SystemService;

impl SystemService {
    pub fn new_lazy() -> Self {
        Self
    }

    // 健康检查：版本与运行时长
    pub async fn health(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        let uptime_seconds = request
            .app_data::<web::Data<AppStartTime>>()
            .map(|start| {
                chrono::Utc::now()
                    .signed_duration_since(start.start_datetime)
                    .num_seconds()
            })
            .unwrap_or_default();

        let response = HealthResponse {
            status: "ok".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            uptime_seconds,
        };

        Ok(HttpResponse::Ok().json(ApiResponse::success(response, "OK")))
    }
}
