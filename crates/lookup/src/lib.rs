//! Client for the [ipinfo.io](https://ipinfo.io) IP lookup service.
//!
//! A lookup resolves an IP address to its reverse DNS hostname and a few
//! descriptive fields. The hostname can then be classified with
//! [`LookupRecord::is_ec2()`], [`LookupRecord::is_gcp()`] and
//! [`LookupRecord::is_google_bot()`].
//!
//! The HTTP transport is injected when building the [`LookupClient`], which
//! allows substituting it with [`LocalTransport`] in tests.
pub use {
    client::{LookupClient, DEFAULT_BASE_URL},
    context,
    error::{BoxError, LookupError, LookupResult, TransportError},
    record::{LookupRecord, RequiredField, ValidationError},
    transport::{LocalTransport, ReasonPhrase, ResponseBody, Transport},
};
#[cfg(feature = "reqwest")]
pub use transport::{HttpClientConfig, HttpTransport};

pub mod classify;
mod client;
mod error;
mod record;
pub mod transport;
