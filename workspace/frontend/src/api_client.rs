pub mod prediction;

use common::ClientError;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::settings;

fn api_url(endpoint: &str) -> String {
    settings::get_settings().api_url(endpoint)
}

/// Common GET request handler
pub async fn get<T>(endpoint: &str) -> Result<T, ClientError>
where
    T: DeserializeOwned,
{
    let url = api_url(endpoint);
    log::debug!("GET request to: {}", url);

    let response = Request::get(&url).send().await.map_err(|e| {
        let error = ClientError::Network(e.to_string());
        log::error!("GET {} - {}", endpoint, error);
        error
    })?;

    decode("GET", endpoint, response).await
}

/// Common POST request handler, sending `body` as JSON
pub async fn post<T, B>(endpoint: &str, body: &B) -> Result<T, ClientError>
where
    T: DeserializeOwned,
    B: Serialize,
{
    let url = api_url(endpoint);
    log::debug!("POST request to: {}", url);

    let response = Request::post(&url)
        .json(body)
        .map_err(|e| {
            let error = ClientError::Encode(e.to_string());
            log::error!("POST {} - {}", endpoint, error);
            error
        })?
        .send()
        .await
        .map_err(|e| {
            let error = ClientError::Network(e.to_string());
            log::error!("POST {} - {}", endpoint, error);
            error
        })?;

    decode("POST", endpoint, response).await
}

async fn decode<T>(method: &str, endpoint: &str, response: Response) -> Result<T, ClientError>
where
    T: DeserializeOwned,
{
    let status = response.status();
    // The body of a rejected request is never read
    let body = if response.ok() {
        log::trace!("{} {} - Response received, parsing JSON", method, endpoint);
        response.text().await.map_err(|e| {
            let error = ClientError::Network(e.to_string());
            log::error!("{} {} - {}", method, endpoint, error);
            error
        })?
    } else {
        String::new()
    };

    match parse_response(status, &body) {
        Ok(data) => {
            log::info!("{} {} - Success", method, endpoint);
            Ok(data)
        }
        Err(error @ ClientError::Request { .. }) => {
            log::warn!("{} {} - {}", method, endpoint, error);
            Err(error)
        }
        Err(error) => {
            log::error!("{} {} - {}", method, endpoint, error);
            Err(error)
        }
    }
}

/// Maps a status code and body to the decoded value or a [`ClientError`].
pub(crate) fn parse_response<T>(status: u16, body: &str) -> Result<T, ClientError>
where
    T: DeserializeOwned,
{
    if !(200..300).contains(&status) {
        return Err(ClientError::Request { status });
    }
    Ok(serde_json::from_str(body)?)
}
