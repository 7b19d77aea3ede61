//! 路径参数安全提取器
//!
//! 非法路径参数直接返回带统一响应体的 400，而不是 actix 默认的
//! 纯文本错误。

use actix_web::dev::Payload;
use actix_web::error::InternalError;
use actix_web::{FromRequest, HttpRequest, HttpResponse};
use futures_util::future::{Ready, ready};

use crate::models::{ApiResponse, ErrorCode};

fn parse_path_i64(req: &HttpRequest, name: &str) -> Result<i64, actix_web::Error> {
    match req
        .match_info()
        .get(name)
        .and_then(|v| v.parse::<i64>().ok())
    {
        Some(v) if v > 0 => Ok(v),
        _ => {
            let response = HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::BadRequest,
                format!("Invalid {name} in path"),
            ));
            Err(InternalError::from_response(format!("invalid path parameter: {name}"), response)
                .into())
        }
    }
}

/// 正整数 ID 路径参数
pub struct SafeIdI64(pub i64);

impl FromRequest for SafeIdI64 {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(parse_path_i64(req, "id").map(SafeIdI64))
    }
}

/// 学号路径参数
pub struct SafeRollNoI64(pub i64);

impl FromRequest for SafeRollNoI64 {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(parse_path_i64(req, "roll_no").map(SafeRollNoI64))
    }
}
