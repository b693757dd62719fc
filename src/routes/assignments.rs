use actix_web::{HttpResponse, Result as ActixResult, web};
use serde_json::Value;

use crate::models::ApiResponse;
use crate::models::assignments::requests::{
    AssignStudentDto, AssignmentId, CreateAssignmentDto, GradeAssignmentDto, SubmitAssignmentDto,
};
use crate::services::AssignmentService;

// HTTP处理程序
pub async fn create_assignment(
    service: web::Data<AssignmentService>,
    body: web::Json<Value>,
) -> ActixResult<HttpResponse> {
    let dto = CreateAssignmentDto::from_request(&body)?;
    let assignment = service.create_assignment(dto).await?;
    Ok(HttpResponse::Created().json(ApiResponse::success(assignment)))
}

pub async fn get_assignment(
    service: web::Data<AssignmentService>,
    id: web::Path<String>,
) -> ActixResult<HttpResponse> {
    let id = AssignmentId::from_request_params(&id)?;
    let assignment = service.get_assignment(id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(assignment)))
}

pub async fn assign_student(
    service: web::Data<AssignmentService>,
    body: web::Json<Value>,
) -> ActixResult<HttpResponse> {
    let dto = AssignStudentDto::from_request(&body)?;
    let task = service.assign_student(dto).await?;
    Ok(HttpResponse::Created().json(ApiResponse::success(task)))
}

pub async fn submit_assignment(
    service: web::Data<AssignmentService>,
    body: web::Json<Value>,
) -> ActixResult<HttpResponse> {
    let dto = SubmitAssignmentDto::from_request(&body)?;
    let task = service.submit_assignment(dto).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(task)))
}

pub async fn grade_assignment(
    service: web::Data<AssignmentService>,
    body: web::Json<Value>,
) -> ActixResult<HttpResponse> {
    let dto = GradeAssignmentDto::from_request(&body)?;
    let task = service.grade_assignment(dto).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(task)))
}

// 配置路由
pub fn configure_assignment_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/assignment")
            .service(web::resource("").route(web::post().to(create_assignment)))
            // 固定路径放在 /{id} 之前
            .service(web::resource("/assign").route(web::post().to(assign_student)))
            .service(web::resource("/submit").route(web::post().to(submit_assignment)))
            .service(web::resource("/grade").route(web::post().to(grade_assignment)))
            .service(web::resource("/{id}").route(web::get().to(get_assignment))),
    );
}
