#[cfg(feature = "reqwest")]
use crate::transport::{HttpClientConfig, HttpTransport};
use {
    crate::{
        error::{LookupError, LookupResult, TransportError},
        record::LookupRecord,
        transport::{ReasonPhrase, Transport},
    },
    context::{Context, FutureExt},
    http::{Request, StatusCode},
    std::sync::Arc,
    tracing::debug,
};

pub const DEFAULT_BASE_URL: &str = "https://ipinfo.io";

#[derive(Debug, Clone)]
pub struct LookupClient {
    base_url: String,
    transport: Arc<dyn Transport>,
}

impl LookupClient {
    #[cfg(feature = "reqwest")]
    pub fn new() -> LookupResult<Self> {
        Self::with_config(Default::default())
    }

    #[cfg(feature = "reqwest")]
    pub fn with_config(config: HttpClientConfig) -> LookupResult<Self> {
        Ok(Self::with_transport(HttpTransport::with_config(config)?))
    }

    pub fn with_transport(transport: impl Transport) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            transport: Arc::new(transport),
        }
    }

    /// Overrides the service endpoint. Default is [`DEFAULT_BASE_URL`].
    pub fn base_url(self, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();

        Self {
            base_url,
            transport: self.transport,
        }
    }

    /// Looks up information about the given IP address.
    ///
    /// The address is inserted into the request path as is. Both the request
    /// and the response body transfer are aborted once `ctx` is canceled or
    /// its deadline expires.
    pub async fn lookup(&self, ctx: &Context, ip: &str) -> LookupResult<LookupRecord> {
        let request = Request::get(format!("{}/{ip}", self.base_url)).body(())?;

        let body = async {
            let resp = self.transport.send(request).await?;
            let status = resp.status();

            if status != StatusCode::OK {
                debug!(%status, ip, "lookup rejected by service");

                // Prefer the phrase the server sent over the canonical one.
                let reason = resp
                    .extensions()
                    .get::<ReasonPhrase>()
                    .map(|reason| reason.0.clone())
                    .or_else(|| status.canonical_reason().map(str::to_owned));

                return Err(LookupError::Status {
                    code: status,
                    reason,
                });
            }

            resp.into_body().await.map_err(|err| match err {
                TransportError::Network(err) => LookupError::Body(err),
                err => err.into(),
            })
        }
        .with_context(ctx.clone())
        .await
        .map_err(TransportError::from)??;

        let record: LookupRecord = serde_json::from_slice(&body)?;

        if let Err(err) = record.validate() {
            debug!(%err, ip, "incomplete lookup response");
            return Err(err.into());
        }

        Ok(record)
    }
}
