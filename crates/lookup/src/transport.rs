use {
    crate::error::TransportError,
    async_trait::async_trait,
    bytes::Bytes,
    futures::future::BoxFuture,
    http::{Request, Response},
    std::{fmt::Debug, sync::Arc},
};
pub use local::LocalTransport;
#[cfg(feature = "reqwest")]
pub use remote::{HttpClientConfig, HttpTransport};

mod local;
#[cfg(feature = "reqwest")]
mod remote;

/// Pending response body. Resolving it may fail independently of the request
/// itself, e.g. when the connection drops mid-transfer.
pub type ResponseBody = BoxFuture<'static, Result<Bytes, TransportError>>;

/// Response extension carrying the reason phrase of the status line, when
/// the server sent one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReasonPhrase(pub String);

/// HTTP transport used to reach the lookup service.
#[async_trait]
pub trait Transport: 'static + Send + Sync + Debug {
    /// Sends the request, resolving once the response head has been received.
    async fn send(&self, request: Request<()>) -> Result<Response<ResponseBody>, TransportError>;
}

#[async_trait]
impl<T> Transport for Arc<T>
where
    T: Transport + ?Sized,
{
    async fn send(&self, request: Request<()>) -> Result<Response<ResponseBody>, TransportError> {
        self.as_ref().send(request).await
    }
}
