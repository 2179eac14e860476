//! HTTP transport abstraction
//!
//! The orchestrator's retry state machine takes its network capability
//! as a parameter so the (url, strategy, cycle) logic is testable with
//! scripted transports and no sockets. `ReqwestTransport` is the
//! production implementation.

use crate::{Error, Result};
use std::time::Duration;

const USER_AGENT: &str = concat!("brewsight/", env!("CARGO_PKG_VERSION"));

/// Minimal view of an HTTP response: status plus body text.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// One HTTP exchange at a time, GET with a fixed header set or a
/// form-encoded POST.
///
/// Implementations report transport-level failures as `Error::Network`;
/// non-2xx statuses are returned as responses, not errors, because the
/// orchestrator treats specific statuses differently.
pub trait Transport {
    fn get(
        &self,
        url: &str,
        headers: &[(&str, &str)],
    ) -> impl std::future::Future<Output = Result<HttpResponse>> + Send;

    fn post_form(
        &self,
        url: &str,
        form: &[(String, String)],
    ) -> impl std::future::Future<Output = Result<HttpResponse>> + Send;
}

/// Production transport backed by a shared `reqwest::Client`.
///
/// No client-level timeout; the orchestrator applies its own
/// per-attempt deadline so test doubles are covered by the same rule.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .connect_timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| Error::Network(e.to_string()))?;
        Ok(Self { client })
    }
}

impl Transport for ReqwestTransport {
    async fn get(&self, url: &str, headers: &[(&str, &str)]) -> Result<HttpResponse> {
        let mut request = self.client.get(url);
        for (name, value) in headers {
            request = request.header(*name, *value);
        }

        let response = request
            .send()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;

        Ok(HttpResponse { status, body })
    }

    async fn post_form(&self, url: &str, form: &[(String, String)]) -> Result<HttpResponse> {
        let response = self
            .client
            .post(url)
            .form(form)
            .send()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;

        Ok(HttpResponse { status, body })
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! Scripted transport for exercising the orchestrator state machine
    //! without sockets.

    use super::{HttpResponse, Transport};
    use crate::{Error, Result};
    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Copy)]
    pub(crate) enum Reply {
        Status(u16, &'static str),
        NetworkError,
        /// Never resolves; forces the per-attempt timeout to fire
        Hang,
    }

    /// Pops one scripted reply per call; behaves as a network error
    /// once the script is exhausted.
    pub(crate) struct ScriptedTransport {
        replies: Mutex<VecDeque<Reply>>,
        calls: Arc<AtomicUsize>,
        last_form: Mutex<Option<Vec<(String, String)>>>,
    }

    impl ScriptedTransport {
        pub(crate) fn new(replies: Vec<Reply>) -> Self {
            Self {
                replies: Mutex::new(replies.into()),
                calls: Arc::new(AtomicUsize::new(0)),
                last_form: Mutex::new(None),
            }
        }

        pub(crate) fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        /// Handle usable after the transport has been moved into an
        /// orchestrator or assembler.
        pub(crate) fn counter(&self) -> Arc<AtomicUsize> {
            Arc::clone(&self.calls)
        }

        /// Form pairs from the most recent `post_form` call.
        pub(crate) fn last_form(&self) -> Option<Vec<(String, String)>> {
            self.last_form.lock().unwrap().clone()
        }

        fn next_reply(&self) -> Reply {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let mut replies = self.replies.lock().unwrap();
            replies.pop_front().unwrap_or(Reply::NetworkError)
        }

        async fn resolve(&self, reply: Reply) -> Result<HttpResponse> {
            match reply {
                Reply::Status(status, body) => Ok(HttpResponse {
                    status,
                    body: body.to_string(),
                }),
                Reply::NetworkError => Err(Error::Network("connection refused".to_string())),
                Reply::Hang => {
                    std::future::pending::<()>().await;
                    unreachable!()
                }
            }
        }
    }

    impl Transport for ScriptedTransport {
        async fn get(&self, _url: &str, _headers: &[(&str, &str)]) -> Result<HttpResponse> {
            let reply = self.next_reply();
            self.resolve(reply).await
        }

        async fn post_form(&self, _url: &str, form: &[(String, String)]) -> Result<HttpResponse> {
            *self.last_form.lock().unwrap() = Some(form.to_vec());
            let reply = self.next_reply();
            self.resolve(reply).await
        }
    }
}
