use std::fs::File;
use std::io::Read;

use url::Url;

use crate::error::{FetchError, Result};

/// Blocking byte source for a URL.
///
/// Implementations open the resource and hand back a reader over its body.
/// Redirects, proxies and status mapping are the implementation's concern.
///
/// # Implementations
///
/// - [`ReqwestClient`]: `http`/`https` through `reqwest::blocking`
/// - [`FileClient`]: `file://` URLs on the local filesystem
/// - [`SchemeClient`]: picks one of the above by URL scheme
pub trait Client {
    fn open(&self, url: &Url) -> Result<Box<dyn Read>>;
}

impl<C: Client + ?Sized> Client for &C {
    fn open(&self, url: &Url) -> Result<Box<dyn Read>> {
        (**self).open(url)
    }
}

/// Reads `file://` URLs from disk.
#[derive(Clone, Copy, Debug, Default)]
pub struct FileClient;

impl Client for FileClient {
    fn open(&self, url: &Url) -> Result<Box<dyn Read>> {
        let path = url
            .to_file_path()
            .map_err(|()| FetchError::NotAFilePath(url.to_string()))?;
        let file = File::open(&path).map_err(|source| FetchError::Open { path, source })?;
        Ok(Box::new(file))
    }
}

/// Settings applied when building the HTTP client.
#[derive(Clone, Debug)]
pub struct ClientOptions {
    pub user_agent: String,
    pub http_proxy: Option<Url>,
    pub https_proxy: Option<Url>,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            user_agent: concat!("tutorial-fetch/", env!("CARGO_PKG_VERSION")).to_string(),
            http_proxy: None,
            https_proxy: None,
        }
    }
}

impl ClientOptions {
    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    #[must_use]
    pub fn http_proxy(mut self, proxy: Option<Url>) -> Self {
        self.http_proxy = proxy;
        self
    }

    #[must_use]
    pub fn https_proxy(mut self, proxy: Option<Url>) -> Self {
        self.https_proxy = proxy;
        self
    }
}

#[cfg(feature = "reqwest")]
mod reqwest_impl {
    use super::*;

    /// HTTP client backed by `reqwest::blocking`.
    ///
    /// Any non-2xx response is turned into [`FetchError::HttpStatus`] so an
    /// error page never ends up in the cache.
    pub struct ReqwestClient {
        client: reqwest::blocking::Client,
    }

    impl ReqwestClient {
        pub fn new() -> Result<Self> {
            Self::with_options(ClientOptions::default())
        }

        pub fn with_options(options: ClientOptions) -> Result<Self> {
            let mut builder = reqwest::blocking::Client::builder().user_agent(options.user_agent);

            if let Some(proxy) = options.https_proxy {
                builder = builder
                    .proxy(reqwest::Proxy::https(proxy.as_str()).map_err(FetchError::ClientBuild)?);
            }
            if let Some(proxy) = options.http_proxy {
                builder = builder
                    .proxy(reqwest::Proxy::http(proxy.as_str()).map_err(FetchError::ClientBuild)?);
            }

            let client = builder.build().map_err(FetchError::ClientBuild)?;
            Ok(Self { client })
        }
    }

    impl Client for ReqwestClient {
        fn open(&self, url: &Url) -> Result<Box<dyn Read>> {
            let response = self
                .client
                .get(url.clone())
                .send()
                .map_err(|source| FetchError::Request {
                    url: url.to_string(),
                    source,
                })?;

            let status = response.status();
            if !status.is_success() {
                return Err(FetchError::HttpStatus {
                    url: url.to_string(),
                    status: status.as_u16(),
                });
            }

            tracing::debug!(%url, content_length = ?response.content_length(), "response received");
            Ok(Box::new(response))
        }
    }
}

#[cfg(feature = "reqwest")]
pub use reqwest_impl::ReqwestClient;

/// Dispatches on the URL scheme.
pub struct SchemeClient {
    file: FileClient,
    #[cfg(feature = "reqwest")]
    http: ReqwestClient,
}

impl SchemeClient {
    pub fn new() -> Result<Self> {
        Self::with_options(ClientOptions::default())
    }

    #[cfg_attr(not(feature = "reqwest"), allow(unused_variables))]
    pub fn with_options(options: ClientOptions) -> Result<Self> {
        Ok(Self {
            file: FileClient,
            #[cfg(feature = "reqwest")]
            http: ReqwestClient::with_options(options)?,
        })
    }
}

impl Client for SchemeClient {
    fn open(&self, url: &Url) -> Result<Box<dyn Read>> {
        match url.scheme() {
            "file" => self.file.open(url),
            #[cfg(feature = "reqwest")]
            "http" | "https" => self.http.open(url),
            other => Err(FetchError::UnsupportedScheme(other.to_string())),
        }
    }
}
