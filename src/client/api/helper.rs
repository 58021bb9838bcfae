use crate::{client::model::error::ApiError, model::api::ErrorDto};
use reqwasm::http::{Request, RequestCredentials, Response};
use serde::de::DeserializeOwned;

/// Parses a JSON success body, or turns a non-2xx response into an [`ApiError`].
pub async fn parse_response<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status() as u64;

    if !(200..300).contains(&status) {
        return Err(error_from_response(status, response).await);
    }

    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::new(500, format!("Resposta inválida do servidor: {}", e)))
}

/// Same as [`parse_response`] for endpoints answering 204 No Content.
pub async fn parse_empty_response(response: Response) -> Result<(), ApiError> {
    let status = response.status() as u64;

    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(error_from_response(status, response).await)
    }
}

/// The server's `ErrorDto` message when there is one, the raw body otherwise.
async fn error_from_response(status: u64, response: Response) -> ApiError {
    let message = match response.json::<ErrorDto>().await {
        Ok(error_dto) => error_dto.error,
        Err(_) => response
            .text()
            .await
            .ok()
            .filter(|text| !text.trim().is_empty())
            .unwrap_or_else(|| "Erro desconhecido".to_string()),
    };

    ApiError::new(status, message)
}

pub fn get(url: &str) -> Request {
    Request::get(url).credentials(RequestCredentials::Include)
}

pub fn post(url: &str) -> Request {
    Request::post(url)
        .credentials(RequestCredentials::Include)
        .header("Content-Type", "application/json")
}

pub fn put(url: &str) -> Request {
    Request::put(url)
        .credentials(RequestCredentials::Include)
        .header("Content-Type", "application/json")
}

pub fn delete(url: &str) -> Request {
    Request::delete(url).credentials(RequestCredentials::Include)
}

/// Sends the request, reporting network failures as status 0.
pub async fn send_request(request: Request) -> Result<Response, ApiError> {
    request
        .send()
        .await
        .map_err(|e| ApiError::new(0, format!("Falha de conexão com o servidor: {}", e)))
}

pub fn serialize_json<T: serde::Serialize>(payload: &T) -> Result<String, ApiError> {
    serde_json::to_string(payload)
        .map_err(|e| ApiError::new(500, format!("Falha ao montar a requisição: {}", e)))
}
