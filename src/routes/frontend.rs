//! 前端静态资源路由
//!
//! 使用 rust-embed 嵌入前端构建产物（首页/营销页与各表单页面），
//! 未匹配的路径回退到 index.html，由前端路由接管——即浏览器端
//! "未知路径跳转首页" 的语义。

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use rust_embed::Embed;
use std::path::Path;

/// 嵌入前端静态资源
/// 编译时从 frontend/dist/ 目录读取文件
#[derive(Embed)]
#[folder = "frontend/dist/"]
struct FrontendAssets;

/// 获取文件的 MIME 类型
fn get_mime_type(path: &str) -> &'static str {
    let ext = Path::new(path)
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("");

    match ext {
        "html" => "text/html; charset=utf-8",
        "js" | "mjs" => "application/javascript; charset=utf-8",
        "css" => "text/css; charset=utf-8",
        "json" => "application/json; charset=utf-8",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "svg" => "image/svg+xml",
        "ico" => "image/x-icon",
        "woff" => "font/woff",
        "woff2" => "font/woff2",
        "ttf" => "font/ttf",
        "webp" => "image/webp",
        "txt" => "text/plain; charset=utf-8",
        "map" => "application/json",
        _ => "application/octet-stream",
    }
}

/// 带内容 hash 的静态资源可以长期缓存
fn should_cache(path: &str) -> bool {
    let ext = Path::new(path)
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("");

    matches!(
        ext,
        "js" | "css" | "woff" | "woff2" | "ttf" | "png" | "jpg" | "jpeg" | "gif" | "svg" | "webp"
    )
}

fn serve_asset(path: &str) -> Option<HttpResponse> {
    let asset = FrontendAssets::get(path)?;

    let mut builder = HttpResponse::Ok();
    builder.content_type(get_mime_type(path));
    if should_cache(path) {
        builder.insert_header(("Cache-Control", "public, max-age=31536000, immutable"));
    }
    Some(builder.body(asset.data.into_owned()))
}

/// SPA fallback：未知路径统一回到 index.html
async fn spa_handler(req: HttpRequest) -> ActixResult<HttpResponse> {
    let path = req.path().trim_start_matches('/');

    // API 路径不做 SPA 回退
    if path.starts_with("api/") {
        return Ok(HttpResponse::NotFound().finish());
    }

    if !path.is_empty()
        && let Some(response) = serve_asset(path)
    {
        return Ok(response);
    }

    match serve_asset("index.html") {
        Some(response) => Ok(response),
        None => Ok(HttpResponse::NotFound().body("index.html not found")),
    }
}

// 配置路由（放在最后作为 fallback）
pub fn configure_frontend_routes(cfg: &mut web::ServiceConfig) {
    cfg.default_service(web::route().to(spa_handler));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mime_types() {
        assert_eq!(get_mime_type("index.html"), "text/html; charset=utf-8");
        assert_eq!(
            get_mime_type("assets/app.js"),
            "application/javascript; charset=utf-8"
        );
        assert_eq!(get_mime_type("favicon.ico"), "image/x-icon");
        assert_eq!(get_mime_type("unknown.bin"), "application/octet-stream");
    }

    #[test]
    fn test_cache_policy() {
        assert!(should_cache("assets/app.1a2b3c.js"));
        assert!(should_cache("logo.svg"));
        assert!(!should_cache("index.html"));
    }
}
