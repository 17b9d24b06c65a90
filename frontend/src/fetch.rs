#![allow(clippy::future_not_send)]

use gloo_utils::format::JsValueSerdeExt;
use shared::{PartyRequest, PartySubmission, SinkFailure};
use std::{
    error::Error,
    fmt::{self, Debug, Display, Formatter},
};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

/// Something wrong has occurred while talking to the form sink.
#[derive(Debug)]
pub enum FetchError {
    JsonError(JsValue),
    SerdeError(serde_json::error::Error),
    /// The sink answered with a non-OK status; carries the message
    /// extracted from its response body.
    Rejected(String),
}
impl Display for FetchError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Self::JsonError(e) => Debug::fmt(e, f),
            Self::SerdeError(e) => Debug::fmt(e, f),
            Self::Rejected(e) => f.write_str(e),
        }
    }
}
impl Error for FetchError {}

impl From<JsValue> for FetchError {
    fn from(v: JsValue) -> Self {
        Self::JsonError(v)
    }
}
impl From<serde_json::error::Error> for FetchError {
    fn from(v: serde_json::error::Error) -> Self {
        Self::SerdeError(v)
    }
}

/// POST the completed request to the form sink.
///
/// # Errors
///
/// `Rejected` when the sink answers with a non-OK status, any other
/// variant when the request never made it through.
pub async fn submit_party_request(
    endpoint: &str,
    request: PartyRequest,
) -> Result<(), FetchError> {
    let body = serde_json::to_string(&PartySubmission::new(request))?;
    let body = JsValue::from_str(&body);

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_body(&body);

    let request = Request::new_with_str_and_init(endpoint, &opts)?;
    request.headers().set("content-type", "application/json")?;
    request.headers().set("accept", "application/json")?;

    let window = gloo_utils::window();
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    // an unreadable body must not fail the submission itself
    let failure = read_failure_body(&resp).await;

    if resp.ok() {
        Ok(())
    } else {
        Err(FetchError::Rejected(failure.message()))
    }
}

async fn read_failure_body(resp: &Response) -> SinkFailure {
    let Ok(promise) = resp.json() else {
        return SinkFailure::default();
    };

    match JsFuture::from(promise).await {
        Ok(json) => JsValueSerdeExt::into_serde(&json).unwrap_or_default(),
        Err(_) => SinkFailure::default(),
    }
}
