use crate::trivia::api::parse_body;
use crate::trivia::{FetchError, FetchOutcome};

#[cfg(not(target_arch = "wasm32"))]
pub fn fetch_questions(url: &str, expected: usize) -> FetchOutcome {
    let client = reqwest::blocking::Client::new();
    let response = client
        .get(url)
        .header(reqwest::header::ACCEPT, "application/json")
        .send()
        .map_err(|err| FetchError::Network(err.to_string()))?;

    if !response.status().is_success() {
        return Err(FetchError::Status(response.status().as_u16()));
    }

    let body = response
        .text()
        .map_err(|err| FetchError::Network(err.to_string()))?;
    parse_body(&body, expected, &mut rand::rng())
}

#[cfg(target_arch = "wasm32")]
pub async fn fetch_questions(url: &str, expected: usize) -> FetchOutcome {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::JsValue;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{Request, RequestInit, RequestMode, Response};

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let window =
        web_sys::window().ok_or_else(|| FetchError::Network("no window in wasm context".into()))?;

    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|err| FetchError::Network(format!("could not build request: {err:?}")))?;

    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|err| FetchError::Network(format!("{err:?}")))?;

    let response: Response = resp_value
        .dyn_into()
        .map_err(|_| FetchError::Network("fetch did not yield a Response".into()))?;

    if !response.ok() {
        return Err(FetchError::Status(response.status()));
    }

    let text_js = match response.text() {
        Ok(promise) => JsFuture::from(promise).await,
        Err(err) => Err(err),
    };
    let body = text_js
        .and_then(|v| {
            v.as_string()
                .ok_or_else(|| JsValue::from_str("response.text() did not return a string"))
        })
        .map_err(|err| FetchError::Network(format!("could not read body: {err:?}")))?;

    parse_body(&body, expected, &mut rand::rng())
}
