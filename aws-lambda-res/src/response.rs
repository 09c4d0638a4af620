use crate::errors::{ResponseError, ResponseResult};

use aws_lambda_events::event::apigw::ApiGatewayProxyResponse;
use aws_lambda_events::http::{HeaderMap, HeaderName, HeaderValue};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Response record consumed by the API Gateway proxy integration.
///
/// Serializes with the exact camelCase field names the integration layer
/// expects, so the JSON form of this struct is the wire contract.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    pub is_base64_encoded: bool,
    pub status_code: i64,
    pub headers: HashMap<String, String>,
    pub body: Option<String>,
}

/// Create a builder for the given status code.
///
/// Curried entry point: fix the status first, supply body and headers per
/// response afterwards.
pub fn response(status_code: i64) -> ResponseBuilder {
    ResponseBuilder::new(status_code)
}

/// Status-code-holding builder returned by [`response`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResponseBuilder {
    status_code: i64,
}

impl ResponseBuilder {
    pub fn new(status_code: i64) -> Self {
        Self { status_code }
    }

    /// Build a [`Response`] from a serializable body and optional headers.
    ///
    /// A `None` body stays `null` on the wire; any other body is
    /// JSON-serialized to a string. The builder never base64-encodes.
    pub fn with<T: Serialize>(
        &self,
        body: Option<&T>,
        headers: Option<HashMap<String, String>>,
    ) -> ResponseResult<Response> {
        let body = match body {
            Some(value) => Some(serde_json::to_string(value)?),
            None => None,
        };
        Ok(Response {
            is_base64_encoded: false,
            status_code: self.status_code,
            headers: headers.unwrap_or_default(),
            body,
        })
    }

    /// Build a body-less [`Response`], optionally with headers.
    pub fn empty(&self, headers: Option<HashMap<String, String>>) -> Response {
        Response {
            is_base64_encoded: false,
            status_code: self.status_code,
            headers: headers.unwrap_or_default(),
            body: None,
        }
    }

    pub fn status_code(&self) -> i64 {
        self.status_code
    }
}

pub fn ok() -> ResponseBuilder {
    ResponseBuilder::new(200)
}

pub fn created() -> ResponseBuilder {
    ResponseBuilder::new(201)
}

pub fn no_content() -> ResponseBuilder {
    ResponseBuilder::new(204)
}

pub fn bad_request() -> ResponseBuilder {
    ResponseBuilder::new(400)
}

pub fn unauthorized() -> ResponseBuilder {
    ResponseBuilder::new(401)
}

pub fn forbidden() -> ResponseBuilder {
    ResponseBuilder::new(403)
}

pub fn not_found() -> ResponseBuilder {
    ResponseBuilder::new(404)
}

pub fn internal_server_error() -> ResponseBuilder {
    ResponseBuilder::new(500)
}

impl TryFrom<Response> for ApiGatewayProxyResponse {
    type Error = ResponseError;

    /// Convert into the event type `lambda_runtime` handlers return.
    ///
    /// Fails when a header name is not a valid HTTP token or a header
    /// value contains invalid bytes.
    fn try_from(response: Response) -> ResponseResult<Self> {
        let mut headers = HeaderMap::with_capacity(response.headers.len());
        for (name, value) in &response.headers {
            let name = HeaderName::try_from(name.as_str())
                .map_err(|_| ResponseError::InvalidHeaderName(name.clone()))?;
            let value = HeaderValue::try_from(value.as_str())
                .map_err(|_| ResponseError::InvalidHeaderValue(name.to_string()))?;
            headers.insert(name, value);
        }
        Ok(ApiGatewayProxyResponse {
            status_code: response.status_code,
            headers,
            body: response.body.map(Into::into),
            is_base64_encoded: response.is_base64_encoded,
            ..Default::default()
        })
    }
}
