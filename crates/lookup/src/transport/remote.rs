use {
    super::{ReasonPhrase, ResponseBody, Transport},
    crate::error::TransportError,
    async_trait::async_trait,
    http::{Request, Response},
    std::time::Duration,
};

/// HTTP client configuration.
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Total time allowed for a single request, on top of whatever deadline
    /// the lookup context carries.
    ///
    /// `None` disables the timeout. Default is `None`.
    pub timeout: Option<Duration>,

    /// Connection keep-alive timeout after being returned to the pool.
    ///
    /// `None` disables the timeout. Default is 90 seconds.
    pub pool_idle_timeout: Option<Duration>,

    /// Maximum number of idle connections to keep alive.
    ///
    /// Default is unlimited.
    pub pool_max_idle: usize,

    /// Value of the `User-Agent` header. Default is no header.
    pub user_agent: Option<String>,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        // These defaults are taken from `reqwest` default config.
        Self {
            timeout: None,
            pool_idle_timeout: Some(Duration::from_secs(90)),
            pool_max_idle: usize::MAX,
            user_agent: None,
        }
    }
}

/// [`Transport`] backed by a [`reqwest::Client`].
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http_client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self, TransportError> {
        Self::with_config(Default::default())
    }

    pub fn with_config(config: HttpClientConfig) -> Result<Self, TransportError> {
        let mut builder = reqwest::Client::builder()
            .pool_idle_timeout(config.pool_idle_timeout)
            .pool_max_idle_per_host(config.pool_max_idle);

        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        if let Some(user_agent) = config.user_agent {
            builder = builder.user_agent(user_agent);
        }

        Ok(Self {
            http_client: builder.build()?,
        })
    }
}

impl From<reqwest::Client> for HttpTransport {
    fn from(http_client: reqwest::Client) -> Self {
        Self { http_client }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: Request<()>) -> Result<Response<ResponseBody>, TransportError> {
        let (parts, ()) = request.into_parts();

        let resp = self
            .http_client
            .request(parts.method, parts.uri.to_string())
            .headers(parts.headers)
            .send()
            .await?;

        let status = resp.status();
        let headers = resp.headers().clone();
        let reason = resp
            .extensions()
            .get::<hyper::ext::ReasonPhrase>()
            .map(|reason| ReasonPhrase(String::from_utf8_lossy(reason.as_bytes()).into_owned()));
        let body: ResponseBody =
            Box::pin(async move { resp.bytes().await.map_err(TransportError::from) });

        let mut response = Response::new(body);
        *response.status_mut() = status;
        *response.headers_mut() = headers;

        if let Some(reason) = reason {
            response.extensions_mut().insert(reason);
        }

        Ok(response)
    }
}
