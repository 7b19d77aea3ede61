pub mod assignment;
pub mod create;
pub mod delete;
pub mod list;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::faculty::requests::{CreateFacultyRequest, FacultyQueryParams};
use crate::storage::Storage;
use assignment::{AssignmentPolicy, RandomAssignmentPolicy};

pub struct FacultyService {
    storage: Option<Arc<dyn Storage>>,
    // 可替换的排课策略；当前实现为占位用的随机分配
    assignment_policy: Box<dyn AssignmentPolicy>,
}

impl FacultyService {
    pub fn new_lazy() -> Self {
        Self {
            storage: None,
            assignment_policy: Box::new(RandomAssignmentPolicy),
        }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    pub(crate) fn policy(&self) -> &dyn AssignmentPolicy {
        self.assignment_policy.as_ref()
    }

    // 教师入职
    pub async fn create_faculty(
        &self,
        request: &HttpRequest,
        faculty_data: CreateFacultyRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_faculty(self, request, faculty_data).await
    }

    // 获取教师列表
    pub async fn list_faculty(
        &self,
        request: &HttpRequest,
        query: FacultyQueryParams,
    ) -> ActixResult<HttpResponse> {
        list::list_faculty(self, request, query).await
    }

    // 删除教师
    pub async fn delete_faculty(
        &self,
        request: &HttpRequest,
        faculty_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_faculty(self, request, faculty_id).await
    }
}
