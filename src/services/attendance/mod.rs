pub mod delete;
pub mod history;
pub mod session;
pub mod submit;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use dashmap::DashMap;
use std::sync::Arc;

use crate::models::attendance::requests::{
    AddStudentRequest, DeleteRecordRequest, HistoryQueryParams, SessionQueryParams,
    StartSessionRequest, UpdateStatusRequest,
};
use crate::models::attendance::session::AttendanceSession;
use crate::storage::Storage;

pub struct AttendanceService {
    storage: Option<Arc<dyn Storage>>,
    // 每个登录用户一份进行中的考勤会话，纯内存，不落库
    sessions: DashMap<i64, AttendanceSession>,
}

impl AttendanceService {
    pub fn new_lazy() -> Self {
        Self {
            storage: None,
            sessions: DashMap::new(),
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

    pub(crate) fn sessions(&self) -> &DashMap<i64, AttendanceSession> {
        &self.sessions
    }

    // 选中教师，开始（或替换）一次考勤会话
    pub async fn start_session(
        &self,
        request: &HttpRequest,
        data: StartSessionRequest,
    ) -> ActixResult<HttpResponse> {
        session::start_session(self, request, data).await
    }

    // 按学号向会话添加学生
    pub async fn add_student(
        &self,
        request: &HttpRequest,
        data: AddStudentRequest,
    ) -> ActixResult<HttpResponse> {
        session::add_student(self, request, data).await
    }

    // 修改会话内某个学生的状态
    pub async fn update_status(
        &self,
        request: &HttpRequest,
        roll_no: i64,
        data: UpdateStatusRequest,
    ) -> ActixResult<HttpResponse> {
        session::update_status(self, request, roll_no, data).await
    }

    // 从会话移除某个学生
    pub async fn remove_student(
        &self,
        request: &HttpRequest,
        roll_no: i64,
    ) -> ActixResult<HttpResponse> {
        session::remove_student(self, request, roll_no).await
    }

    // 查看当前会话（支持状态过滤与搜索）
    pub async fn view_session(
        &self,
        request: &HttpRequest,
        query: SessionQueryParams,
    ) -> ActixResult<HttpResponse> {
        session::view_session(self, request, query).await
    }

    // 提交会话（双写）
    pub async fn submit(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        submit::submit_attendance(self, request).await
    }

    // 核对后的考勤历史
    pub async fn history(
        &self,
        request: &HttpRequest,
        query: HistoryQueryParams,
    ) -> ActixResult<HttpResponse> {
        history::attendance_history(self, request, query).await
    }

    // 删除历史记录（两处独立删除）
    pub async fn delete_record(
        &self,
        request: &HttpRequest,
        data: DeleteRecordRequest,
    ) -> ActixResult<HttpResponse> {
        delete::delete_record(self, request, data).await
    }
}
