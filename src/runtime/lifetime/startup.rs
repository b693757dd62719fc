use std::sync::Arc;

use actix_web::web;
use tracing::{debug, warn};

use crate::config::AppConfig;
use crate::errors::Result;
use crate::services::{AssignmentService, ClassService, StudentService};
use crate::storage::{Storage, create_storage};

/// 启动上下文：存储只创建一次，各服务通过构造函数注入同一个实例
pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
    pub student_service: web::Data<StudentService>,
    pub class_service: web::Data<ClassService>,
    pub assignment_service: web::Data<AssignmentService>,
}

impl StartupContext {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self {
            student_service: web::Data::new(StudentService::new(storage.clone())),
            class_service: web::Data::new(ClassService::new(storage.clone())),
            assignment_service: web::Data::new(AssignmentService::new(storage.clone())),
            storage,
        }
    }
}

/// 准备服务器启动的上下文
/// 包括存储连接、数据库迁移和服务构造
pub async fn prepare_server_startup() -> Result<StartupContext> {
    let config = AppConfig::get();

    let storage = create_storage(&config.database).await?;
    warn!("Storage backend initialized and migrations completed");

    let context = StartupContext::new(storage);
    debug!("Services constructed");

    Ok(context)
}
