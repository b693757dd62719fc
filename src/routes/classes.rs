use actix_web::{HttpResponse, Result as ActixResult, web};
use serde_json::Value;

use crate::models::ApiResponse;
use crate::models::classes::requests::{ClassId, CreateClassDto, EnrollStudentDto};
use crate::services::ClassService;

// HTTP处理程序
pub async fn create_class(
    service: web::Data<ClassService>,
    body: web::Json<Value>,
) -> ActixResult<HttpResponse> {
    let dto = CreateClassDto::from_request(&body)?;
    let class = service.create_class(dto).await?;
    Ok(HttpResponse::Created().json(ApiResponse::success(class)))
}

pub async fn list_class_assignments(
    service: web::Data<ClassService>,
    id: web::Path<String>,
) -> ActixResult<HttpResponse> {
    let id = ClassId::from_request_params(&id)?;
    let assignments = service.list_class_assignments(id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(assignments)))
}

pub async fn enroll_student(
    service: web::Data<ClassService>,
    body: web::Json<Value>,
) -> ActixResult<HttpResponse> {
    let dto = EnrollStudentDto::from_request(&body)?;
    let enrollment = service.enroll_student(dto).await?;
    Ok(HttpResponse::Created().json(ApiResponse::success(enrollment)))
}

// 配置路由
pub fn configure_class_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/class")
            .service(web::resource("").route(web::post().to(create_class)))
            .service(
                // 选课同时接受 GET 与 POST，参数都在请求体中
                web::resource("/enrollments")
                    .route(web::get().to(enroll_student))
                    .route(web::post().to(enroll_student)),
            )
            .service(web::resource("/{id}/assignments").route(web::get().to(list_class_assignments))),
    );
}
