//! Client layer: orchestrates transport calls and maps transport ↔ domain.

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

use crate::domain::{
    GatewayErrorCode, IncomingMessage, IncomingQuery, Login, MessageId, MessageStatus, Operation,
    Password, PhoneOperator, RawPhoneNumber, SendMessages, SenderId, StatusQuery,
    ValidationError,
};
use crate::transport::{DateParseError, Envelope, TransportError};

const DEFAULT_BASE_URL: &str = "https://smsc.ru/sys/";

/// Boxed future returned by the pluggable [`HttpTransport`] and [`RequestThrottle`] hooks.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Raw HTTP reply handed back by an [`HttpTransport`].
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Performs a form-encoded POST and returns the raw reply.
///
/// Timeouts and cancellation are the transport's business; the default
/// implementation exposes them through [`SmscClientBuilder::timeout`].
pub trait HttpTransport: Send + Sync {
    fn post_form<'a>(
        &'a self,
        url: &'a str,
        params: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn post_form<'a>(
        &'a self,
        url: &'a str,
        params: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let response = self.client.post(url).form(&params).send().await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}

/// Hook awaited before every gateway call.
///
/// SMSC enforces its call-frequency limits server-side (3 status queries per
/// minute per message, 100 operator lookups per minute, duplicate sends within
/// 60 seconds are banned). The client never paces itself; install a throttle to do so.
pub trait RequestThrottle: Send + Sync {
    fn acquire<'a>(&'a self, operation: Operation) -> BoxFuture<'a, ()>;
}

#[derive(Debug, Clone)]
/// Account credentials and the sender id used for outgoing messages.
pub struct Credentials {
    login: Login,
    password: Password,
    sender: SenderId,
}

impl Credentials {
    /// Validate and bundle the three configuration values.
    pub fn new(
        login: impl Into<String>,
        password: impl Into<String>,
        sender: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            login: Login::new(login)?,
            password: Password::new(password)?,
            sender: SenderId::new(sender)?,
        })
    }

    pub fn login(&self) -> &Login {
        &self.login
    }

    pub fn sender(&self) -> &SenderId {
        &self.sender
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`SmscClient`].
///
/// Transport failures (`Transport`, `HttpStatus`, `EmptyResponse`) mean no usable
/// reply was obtained. `Gateway` means SMSC answered and refused; branch on
/// [`GatewayErrorCode::is_retryable`] to tell temporary bans from permanent errors.
pub enum SmscError {
    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// Non-successful HTTP status code returned by the server.
    #[error("unexpected HTTP status: {status}")]
    HttpStatus { status: u16, body: Option<String> },

    /// The server answered with an empty body.
    #[error("empty server response")]
    EmptyResponse,

    /// Response body is not JSON, or not the shape the operation expects.
    #[error("malformed response: {0}")]
    MalformedResponse(#[source] Box<dyn StdError + Send + Sync>),

    /// SMSC reported `error_code`/`error`.
    #[error("gateway error {code}: {message}")]
    Gateway {
        code: GatewayErrorCode,
        message: String,
    },

    /// A timestamp in the response did not match the gateway date layout.
    #[error("date parse error: {0}")]
    DateParse(#[from] DateParseError),

    /// One of the domain constructors rejected an invalid value.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl SmscError {
    /// `true` when no usable response was obtained at all.
    pub fn is_transport_failure(&self) -> bool {
        matches!(
            self,
            Self::Transport(_) | Self::HttpStatus { .. } | Self::EmptyResponse
        )
    }

    /// The gateway error code, if SMSC reported one.
    pub fn gateway_code(&self) -> Option<GatewayErrorCode> {
        match self {
            Self::Gateway { code, .. } => Some(*code),
            _ => None,
        }
    }
}

impl From<TransportError> for SmscError {
    fn from(value: TransportError) -> Self {
        match value {
            TransportError::Date(err) => Self::DateParse(err),
            other => Self::MalformedResponse(Box::new(other)),
        }
    }
}

#[derive(Clone)]
/// Builder for [`SmscClient`].
///
/// Use this when you need to customize the base URL, timeout, user-agent, the
/// transport itself, or install a [`RequestThrottle`].
pub struct SmscClientBuilder {
    credentials: Credentials,
    base_url: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    transport: Option<Arc<dyn HttpTransport>>,
    throttle: Option<Arc<dyn RequestThrottle>>,
}

impl SmscClientBuilder {
    /// Create a builder with the default base URL and no timeout/user-agent override.
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: None,
            user_agent: None,
            transport: None,
            throttle: None,
        }
    }

    /// Override the API base path (`https://smsc.ru/sys/` by default).
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    ///
    /// Ignored when a custom transport is installed.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    ///
    /// Ignored when a custom transport is installed.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Replace the built-in reqwest transport.
    pub fn transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Install a hook awaited before every call.
    pub fn throttle(mut self, throttle: Arc<dyn RequestThrottle>) -> Self {
        self.throttle = Some(throttle);
        self
    }

    /// Build a [`SmscClient`].
    pub fn build(self) -> Result<SmscClient, SmscError> {
        let base_url = normalize_base_url(&self.base_url)?;

        let http = match self.transport {
            Some(transport) => transport,
            None => {
                let mut builder = reqwest::Client::builder();
                if let Some(timeout) = self.timeout {
                    builder = builder.timeout(timeout);
                }
                if let Some(user_agent) = self.user_agent {
                    builder = builder.user_agent(user_agent);
                }
                let client = builder
                    .build()
                    .map_err(|err| SmscError::Transport(Box::new(err)))?;
                Arc::new(ReqwestTransport { client })
            }
        };

        Ok(SmscClient {
            credentials: self.credentials,
            base_url,
            http,
            throttle: self.throttle,
        })
    }
}

fn normalize_base_url(input: &str) -> Result<Url, ValidationError> {
    let invalid = || ValidationError::InvalidBaseUrl {
        input: input.to_owned(),
    };

    let mut url = Url::parse(input.trim()).map_err(|_| invalid())?;
    if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
        return Err(invalid());
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

#[derive(Clone)]
/// High-level SMSC client.
///
/// Every public method is one POST to `<base>/<script>.php` with `fmt=3`,
/// `login` and the MD5 digest of the password appended, followed by decoding
/// of the JSON reply. Nothing is retried or cached.
pub struct SmscClient {
    credentials: Credentials,
    base_url: Url,
    http: Arc<dyn HttpTransport>,
    throttle: Option<Arc<dyn RequestThrottle>>,
}

impl SmscClient {
    /// Create a client using the default base URL and transport.
    ///
    /// For more customization, use [`SmscClient::builder`].
    pub fn new(credentials: Credentials) -> Result<Self, SmscError> {
        SmscClientBuilder::new(credentials).build()
    }

    /// Start building a client with custom settings.
    pub fn builder(credentials: Credentials) -> SmscClientBuilder {
        SmscClientBuilder::new(credentials)
    }

    /// Send one text to one or more phones. Returns the id SMSC assigned.
    ///
    /// A reply without a usable `id` yields `MessageId(0)` instead of an error.
    pub async fn send(&self, request: &SendMessages) -> Result<MessageId, SmscError> {
        let params = crate::transport::encode_send_form(request, &self.credentials.sender);
        let document = self.execute(Operation::Send, params).await?;
        Ok(crate::transport::decode_send_response(document)?)
    }

    /// Validate a number with an HLR probe. `true` when SMSC issued an id.
    pub async fn check_number(&self, phone: &RawPhoneNumber) -> Result<bool, SmscError> {
        let params = crate::transport::encode_check_number_form(phone);
        let document = self.execute(Operation::CheckNumber, params).await?;
        let id = crate::transport::decode_send_response(document)?;
        Ok(id.is_issued())
    }

    /// List messages received within the last `hours` hours (at most 70).
    pub async fn get_incoming_messages(
        &self,
        hours: u32,
    ) -> Result<Vec<IncomingMessage>, SmscError> {
        let params = crate::transport::encode_incoming_form(IncomingQuery::new(hours));
        let document = self.execute(Operation::GetIncomingMessages, params).await?;
        Ok(crate::transport::decode_incoming_response(document)?)
    }

    /// Current account balance.
    pub async fn get_balance(&self) -> Result<f64, SmscError> {
        let params = crate::transport::encode_get_balance_form();
        let document = self.execute(Operation::GetBalance, params).await?;
        Ok(crate::transport::decode_balance_response(document)?)
    }

    /// Delivery status of a previously sent message.
    pub async fn get_status(&self, query: &StatusQuery) -> Result<MessageStatus, SmscError> {
        let params = crate::transport::encode_status_form(query);
        let document = self.execute(Operation::GetStatus, params).await?;
        Ok(crate::transport::decode_status_response(query, document)?)
    }

    /// Operator and region serving a phone number.
    pub async fn get_phone_operator(
        &self,
        phone: &RawPhoneNumber,
    ) -> Result<PhoneOperator, SmscError> {
        let params = crate::transport::encode_phone_operator_form(phone);
        let document = self.execute(Operation::GetPhoneOperator, params).await?;
        Ok(crate::transport::decode_phone_operator_response(document)?)
    }

    fn endpoint_url(&self, operation: Operation) -> Result<Url, SmscError> {
        self.base_url
            .join(operation.endpoint())
            .map_err(|_| {
                SmscError::Validation(ValidationError::InvalidBaseUrl {
                    input: self.base_url.to_string(),
                })
            })
    }

    async fn execute(
        &self,
        operation: Operation,
        mut params: Vec<(String, String)>,
    ) -> Result<Value, SmscError> {
        params.extend(crate::transport::encode_common_form(
            &self.credentials.login,
            &self.credentials.password,
        ));
        let url = self.endpoint_url(operation)?;

        if let Some(throttle) = self.throttle.as_ref() {
            throttle.acquire(operation).await;
        }

        debug!(operation = operation.as_str(), url = %url, "dispatching SMSC request");

        let response = self
            .http
            .post_form(url.as_str(), params)
            .await
            .map_err(SmscError::Transport)?;

        if !(200..=299).contains(&response.status) {
            warn!(
                operation = operation.as_str(),
                status = response.status,
                "SMSC returned non-success HTTP status"
            );
            let body = if response.body.trim().is_empty() {
                None
            } else {
                Some(response.body)
            };
            return Err(SmscError::HttpStatus {
                status: response.status,
                body,
            });
        }

        if response.body.trim().is_empty() {
            warn!(operation = operation.as_str(), "SMSC returned an empty body");
            return Err(SmscError::EmptyResponse);
        }

        let envelope = crate::transport::decode_envelope(&response.body).map_err(|err| {
            warn!(operation = operation.as_str(), error = %err, "SMSC response is not JSON");
            SmscError::MalformedResponse(Box::new(err))
        })?;

        match envelope {
            Envelope::Error { code, message } => {
                warn!(
                    operation = operation.as_str(),
                    code = code.as_i32(),
                    error = %message,
                    "SMSC reported an error"
                );
                Err(SmscError::Gateway { code, message })
            }
            Envelope::Success(document) => {
                debug!(operation = operation.as_str(), "SMSC request succeeded");
                Ok(document)
            }
        }
    }
}
