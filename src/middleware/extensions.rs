use crate::store::RequestContext;
use actix_web::HttpMessage;

/// Lets an upstream auth layer pin the request's context before the CSP
/// middleware runs, overriding its selector.
pub trait CspManagerExt {
    fn set_request_context(&self, context: RequestContext);
    fn request_context(&self) -> Option<RequestContext>;
}

impl<T> CspManagerExt for T
where
    T: HttpMessage,
{
    fn set_request_context(&self, context: RequestContext) {
        self.extensions_mut().insert(context);
    }

    fn request_context(&self) -> Option<RequestContext> {
        self.extensions().get::<RequestContext>().copied()
    }
}
