//! HTTP Task API
//!
//! `TaskApi` over reqwest. On wasm32 reqwest drives the browser fetch API.

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use reqwest::{Client, Method, Response};

use super::{ApiError, ApiResult, TaskApi};
use crate::config::ApiConfig;
use crate::models::Task;

const LIST_PATH: &str = "/api/todos";
const GET_PATH: &str = "/api/get_todo";
const CREATE_PATH: &str = "/api/todo";
const UPDATE_PATH: &str = "/api/update_todo";
const DELETE_PATH: &str = "/api/remove_todo";

/// Characters that must be escaped inside a single path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'\\')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Build `{prefix}/{title}` with the title escaped as one path segment
///
/// Escaping keeps spaces, `?`, `#` and `%` inside the segment. A backend
/// that decodes `%2F` before routing still cannot match titles containing `/`.
pub fn title_path(prefix: &str, title: &str) -> String {
    format!("{}/{}", prefix, utf8_percent_encode(title, PATH_SEGMENT))
}

/// Task backend reached over HTTP
#[derive(Debug, Clone)]
pub struct HttpTaskApi {
    client: Client,
    config: ApiConfig,
}

impl HttpTaskApi {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// Issue one request and reject non-success statuses
    async fn send(&self, method: Method, path: &str, body: Option<&Task>) -> ApiResult<Response> {
        let url = self.config.endpoint(path);
        let mut request = self.client.request(method.clone(), &url);
        if let Some(task) = body {
            request = request.json(task);
        }

        let response = request
            .send()
            .await
            .map_err(|source| ApiError::Transport { url: url.clone(), source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                method: method.to_string(),
                url,
                status: status.as_u16(),
            });
        }
        Ok(response)
    }
}

async fn decode<T: serde::de::DeserializeOwned>(response: Response) -> ApiResult<T> {
    let url = response.url().to_string();
    response
        .json::<T>()
        .await
        .map_err(|source| ApiError::Decode { url, source })
}

#[async_trait(?Send)]
impl TaskApi for HttpTaskApi {
    async fn list_tasks(&self) -> ApiResult<Vec<Task>> {
        let response = self.send(Method::GET, LIST_PATH, None).await?;
        decode(response).await
    }

    async fn get_task(&self, title: &str) -> ApiResult<Task> {
        let response = self.send(Method::GET, &title_path(GET_PATH, title), None).await?;
        decode(response).await
    }

    async fn create_task(&self, task: &Task) -> ApiResult<u16> {
        let response = self.send(Method::POST, CREATE_PATH, Some(task)).await?;
        Ok(response.status().as_u16())
    }

    async fn update_task(&self, task: &Task) -> ApiResult<u16> {
        let response = self.send(Method::PUT, UPDATE_PATH, Some(task)).await?;
        Ok(response.status().as_u16())
    }

    async fn delete_task(&self, title: &str) -> ApiResult<u16> {
        let response = self.send(Method::DELETE, &title_path(DELETE_PATH, title), None).await?;
        Ok(response.status().as_u16())
    }
}
