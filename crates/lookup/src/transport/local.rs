use {
    super::{ResponseBody, Transport},
    crate::error::TransportError,
    async_trait::async_trait,
    bytes::Bytes,
    http::{Request, Response},
    std::{fmt, sync::Arc, time::Duration},
};

type Handler = dyn Fn(&Request<()>) -> Response<Bytes> + Send + Sync;

/// Local transport that answers requests in-process, without touching the
/// network.
#[derive(Clone)]
pub struct LocalTransport {
    handler: Arc<Handler>,
    latency: Option<Duration>,
}

impl LocalTransport {
    pub fn new<F>(handler: F) -> Self
    where
        F: Fn(&Request<()>) -> Response<Bytes> + Send + Sync + 'static,
    {
        Self {
            handler: Arc::new(handler),
            latency: None,
        }
    }

    /// Delays every response by `latency`.
    pub fn latency(self, latency: Duration) -> Self {
        Self {
            handler: self.handler,
            latency: Some(latency),
        }
    }
}

impl fmt::Debug for LocalTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocalTransport")
            .field("latency", &self.latency)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl Transport for LocalTransport {
    async fn send(&self, request: Request<()>) -> Result<Response<ResponseBody>, TransportError> {
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }

        let (parts, body) = (self.handler)(&request).into_parts();
        let body: ResponseBody = Box::pin(futures::future::ready(Ok::<_, TransportError>(body)));

        Ok(Response::from_parts(parts, body))
    }
}
