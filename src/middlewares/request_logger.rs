/*!
 * 请求日志中间件
 *
 * 每个请求结束后通过 tracing 输出一条访问日志：方法、路径、状态码和耗时。
 * 4xx 记为 info，5xx 记为 warn，其余为 debug。
 *
 * ## 使用方法
 *
 * ```rust,ignore
 * use actix_web::App;
 * use crate::middlewares::RequestLogger;
 *
 * App::new().wrap(RequestLogger)
 * ```
 */

use actix_service::{Service, Transform};
use actix_web::{
    Error,
    dev::{ServiceRequest, ServiceResponse},
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use std::{rc::Rc, time::Instant};
use tracing::{debug, info, warn};

#[derive(Clone)]
pub struct RequestLogger;

impl<S, B> Transform<S, ServiceRequest> for RequestLogger
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = RequestLoggerMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequestLoggerMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct RequestLoggerMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for RequestLoggerMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(
        &self,
        ctx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let srv = self.service.clone();
        let method = req.method().clone();
        let path = req.path().to_string();
        let started = Instant::now();

        Box::pin(async move {
            let res = srv.call(req).await?;
            let status = res.status();
            let elapsed_ms = started.elapsed().as_millis();

            if status.is_server_error() {
                warn!("{} {} -> {} ({} ms)", method, path, status.as_u16(), elapsed_ms);
            } else if status.is_client_error() {
                info!("{} {} -> {} ({} ms)", method, path, status.as_u16(), elapsed_ms);
            } else {
                debug!("{} {} -> {} ({} ms)", method, path, status.as_u16(), elapsed_ms);
            }

            Ok(res)
        })
    }
}
