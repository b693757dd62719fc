use actix_web::{HttpResponse, Result as ActixResult, web};
use serde_json::Value;

use crate::models::ApiResponse;
use crate::models::students::requests::{CreateStudentDto, StudentId};
use crate::services::StudentService;

// HTTP处理程序
pub async fn create_student(
    service: web::Data<StudentService>,
    body: web::Json<Value>,
) -> ActixResult<HttpResponse> {
    let dto = CreateStudentDto::from_request(&body)?;
    let student = service.create_student(dto).await?;
    Ok(HttpResponse::Created().json(ApiResponse::success(student)))
}

pub async fn list_students(service: web::Data<StudentService>) -> ActixResult<HttpResponse> {
    let students = service.list_students().await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(students)))
}

pub async fn get_student(
    service: web::Data<StudentService>,
    id: web::Path<String>,
) -> ActixResult<HttpResponse> {
    let id = StudentId::from_request_params(&id)?;
    let student = service.get_student(id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(student)))
}

pub async fn list_student_assignments(
    service: web::Data<StudentService>,
    id: web::Path<String>,
) -> ActixResult<HttpResponse> {
    let id = StudentId::from_request_params(&id)?;
    let assignments = service.list_student_assignments(id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(assignments)))
}

pub async fn list_student_grades(
    service: web::Data<StudentService>,
    id: web::Path<String>,
) -> ActixResult<HttpResponse> {
    let id = StudentId::from_request_params(&id)?;
    let grades = service.list_student_grades(id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(grades)))
}

// 配置路由
pub fn configure_student_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/student")
            .service(
                web::resource("")
                    .route(web::get().to(list_students))
                    .route(web::post().to(create_student)),
            )
            .service(web::resource("/{id}/assignments").route(web::get().to(list_student_assignments)))
            .service(web::resource("/{id}/grades").route(web::get().to(list_student_grades)))
            .service(web::resource("/{id}").route(web::get().to(get_student))),
    );
}

#[cfg(test)]
mod tests {
    use actix_web::{App, http::StatusCode, middleware::NormalizePath, test};
    use serde_json::{Value, json};

    use crate::routes::test_support::{ABSENT_ID, PAYLOAD_LIMIT, app_config};
    use crate::utils::is_uuid;

    #[actix_web::test]
    async fn test_create_student_returns_envelope() {
        let app = test::init_service(App::new().configure(app_config().await)).await;

        let req = test::TestRequest::post()
            .uri("/student")
            .set_json(json!({ "name": "Ada" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["error"], Value::Null);
        assert_eq!(body["data"]["name"], "Ada");
        assert!(is_uuid(body["data"]["id"].as_str().unwrap()));
    }

    #[actix_web::test]
    async fn test_create_student_missing_name() {
        let app = test::init_service(App::new().configure(app_config().await)).await;

        let req = test::TestRequest::post()
            .uri("/student")
            .set_json(json!({ "nickname": "Ada" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["data"], Value::Null);
        assert_eq!(body["error"]["code"], "ValidationError");
        assert_eq!(body["error"]["message"], "Missing fields: name");
    }

    #[actix_web::test]
    async fn test_malformed_json_is_validation_error() {
        let app = test::init_service(App::new().configure(app_config().await)).await;

        let req = test::TestRequest::post()
            .uri("/student")
            .insert_header(("content-type", "application/json"))
            .set_payload("{not json")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "ValidationError");
    }

    #[actix_web::test]
    async fn test_get_student_bad_and_absent_id() {
        let app = test::init_service(App::new().configure(app_config().await)).await;

        let req = test::TestRequest::get().uri("/student/not-a-uuid").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "ValidationError");

        let req = test::TestRequest::get()
            .uri(&format!("/student/{ABSENT_ID}"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "StudentNotFound");

        let req = test::TestRequest::get()
            .uri(&format!("/student/{ABSENT_ID}/grades"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_list_and_get_student() {
        let app = test::init_service(App::new().configure(app_config().await)).await;

        for name in ["Bob", "Ada"] {
            let req = test::TestRequest::post()
                .uri("/student")
                .set_json(json!({ "name": name }))
                .to_request();
            test::call_service(&app, req).await;
        }

        let req = test::TestRequest::get().uri("/student").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        let students = body["data"].as_array().unwrap();
        assert_eq!(students.len(), 2);
        assert_eq!(students[0]["name"], "Ada");
        assert_eq!(students[1]["name"], "Bob");

        let id = students[0]["id"].as_str().unwrap();
        let req = test::TestRequest::get()
            .uri(&format!("/student/{id}"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["id"], id);
        assert_eq!(body["data"]["classes"], json!([]));
        assert_eq!(body["data"]["assignments"], json!([]));
    }

    #[actix_web::test]
    async fn test_oversized_body_rejected() {
        let app = test::init_service(App::new().configure(app_config().await)).await;

        let req = test::TestRequest::post()
            .uri("/student")
            .set_json(json!({ "name": "x".repeat(PAYLOAD_LIMIT) }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"]["code"], "ValidationError");
        assert_eq!(body["error"]["message"], "Request body is too large");
    }

    #[actix_web::test]
    async fn test_trailing_slash_reaches_collection() {
        let app = test::init_service(
            App::new()
                .wrap(NormalizePath::trim())
                .configure(app_config().await),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/student/")
            .set_json(json!({ "name": "Ada" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let req = test::TestRequest::get().uri("/student/").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"].as_array().map(|a| a.len()), Some(1));
    }
}
