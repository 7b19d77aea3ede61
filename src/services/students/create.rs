use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::StudentService;
use crate::models::students::requests::CreateStudentRequest;
use crate::models::{ApiResponse, ErrorCode};

/// 顺序分配学号：起始学号 + 当前学生数
///
/// 与原有系统保持一致：该方案在并发注册下可能产生冲突，届时由
/// roll_no 的唯一约束拒绝后写（见 DESIGN.md 的未决问题记录）。
pub fn next_roll_no(base_roll_no: i64, current_count: u64) -> i64 {
    base_roll_no + current_count as i64
}

pub async fn create_student(
    service: &StudentService,
    request: &HttpRequest,
    student_data: CreateStudentRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let config = service.get_config();

    if student_data.name.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Student name must not be empty",
        )));
    }
    if !(5..=25).contains(&student_data.age) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Age must be between 5 and 25",
        )));
    }

    // 学号基数 = 当前学生数
    let count = match storage.count_students().await {
        Ok(count) => count,
        Err(e) => {
            error!("Failed to count students: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::StudentCreationFailed,
                    "Failed to allocate roll number",
                )),
            );
        }
    };
    let roll_no = next_roll_no(config.enrollment.base_roll_no, count);

    match storage.create_student(student_data, roll_no).await {
        Ok(student) => {
            info!(
                "Student {} enrolled with roll number {}",
                student.name, student.roll_no
            );
            Ok(HttpResponse::Created()
                .json(ApiResponse::success(student, "Student enrolled successfully")))
        }
        Err(e) => {
            let msg = format!("Student enrollment failed: {e}");
            error!("{}", msg);
            Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::StudentCreationFailed,
                msg,
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roll_numbers_are_sequential_from_base() {
        // 已有 3 名学生时，第 4 名拿到 base + 3
        assert_eq!(next_roll_no(70135200, 3), 70135203);
        assert_eq!(next_roll_no(70135200, 0), 70135200);
    }
}
