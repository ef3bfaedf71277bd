use crate::store::{PolicyStore, RequestContext};
use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    Error, HttpMessage,
};
use futures::future::{ready, LocalBoxFuture, Ready};
use std::{rc::Rc, sync::Arc};

pub type ContextSelector = Arc<dyn Fn(&ServiceRequest) -> RequestContext + Send + Sync>;

/// Header-emitting middleware. Selects the request's context, then writes
/// the compiled header pairs for that context onto the response.
#[derive(Clone)]
pub struct CspManager {
    store: Arc<PolicyStore>,
    selector: ContextSelector,
}

impl CspManager {
    pub fn new(store: Arc<PolicyStore>) -> Self {
        Self {
            store,
            selector: Arc::new(|_| RequestContext::Frontend),
        }
    }

    /// Replaces the context selector. An explicit `RequestContext` in the
    /// request extensions still wins over the selector.
    pub fn with_selector<F>(mut self, selector: F) -> Self
    where
        F: Fn(&ServiceRequest) -> RequestContext + Send + Sync + 'static,
    {
        self.selector = Arc::new(selector);
        self
    }

    #[inline]
    pub fn store(&self) -> Arc<PolicyStore> {
        self.store.clone()
    }
}

/// Selector mapping requests under `admin_prefix` to the admin context and
/// everything else to the anonymous frontend context.
pub fn path_selector(
    admin_prefix: &'static str,
) -> impl Fn(&ServiceRequest) -> RequestContext + Send + Sync + 'static {
    move |req| {
        if req.path().starts_with(admin_prefix) {
            RequestContext::Admin
        } else {
            RequestContext::Frontend
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for CspManager
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = CspManagerService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(CspManagerService {
            service: Rc::new(service),
            store: self.store.clone(),
            selector: self.selector.clone(),
        }))
    }
}

pub struct CspManagerService<S> {
    service: Rc<S>,
    store: Arc<PolicyStore>,
    selector: ContextSelector,
}

impl<S, B> Service<ServiceRequest> for CspManagerService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let store = self.store.clone();

        let context = req
            .extensions()
            .get::<RequestContext>()
            .copied()
            .unwrap_or_else(|| (self.selector)(&req));

        Box::pin(async move {
            let mut res = service.call(req).await?;

            let compiled = store.headers_for(context);
            log::debug!(
                "context {}: emitting {} header(s)",
                context,
                compiled.len()
            );

            let headers = res.headers_mut();
            for (name, value) in compiled.iter() {
                headers.insert(name.clone(), value.clone());
            }

            Ok(res)
        })
    }
}

#[inline]
pub fn csp_manager(store: Arc<PolicyStore>) -> CspManager {
    CspManager::new(store)
}
