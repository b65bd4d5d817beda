// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON client for the hub endpoints.

use std::time::Duration;

use hub_core::protocol::{
    delete_student_path, ADD_STUDENT_PATH, LIST_STUDENTS_PATH, SEARCH_SUGGESTIONS_PATH,
    SUBSCRIBE_PATH,
};
use hub_core::{decode_collection, Collection, ItemId, NewStudent, StatusReply};
use hub_sync::{FetchError, FetchResult};
use reqwest::{RequestBuilder, Response, StatusCode};
use tracing::{debug, info};

use crate::config::Config;
use crate::error::Result;

/// Client for the hub server. Cheap to clone.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Builds a client from the effective configuration.
    pub fn new(config: &Config) -> Result<Self> {
        Self::with_base_url(config.base_url(), config.timeout())
    }

    pub fn with_base_url(base_url: &str, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("hub/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(ApiClient {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// `GET /search_suggestions?q=<query>`.
    pub async fn search_suggestions(&self, query: &str) -> FetchResult<Collection> {
        let request = self
            .http
            .get(self.url(SEARCH_SUGGESTIONS_PATH))
            .query(&[("q", query)]);
        self.get_collection(SEARCH_SUGGESTIONS_PATH, request).await
    }

    /// `GET /list_students`.
    pub async fn list_students(&self) -> FetchResult<Collection> {
        let request = self.http.get(self.url(LIST_STUDENTS_PATH));
        self.get_collection(LIST_STUDENTS_PATH, request).await
    }

    /// `POST /add_student` with a JSON body.
    pub async fn add_student(&self, student: &NewStudent) -> FetchResult<StatusReply> {
        let request = self.http.post(self.url(ADD_STUDENT_PATH)).json(student);
        self.post_for_reply(ADD_STUDENT_PATH, request).await
    }

    /// `POST /delete_student/<id>`.
    pub async fn delete_student(&self, id: &ItemId) -> FetchResult<StatusReply> {
        let path = delete_student_path(id);
        let request = self.http.post(self.url(&path));
        self.post_for_reply(&path, request).await
    }

    /// `POST /subscribe` with a urlencoded `email` field.
    pub async fn subscribe(&self, email: &str) -> FetchResult<StatusReply> {
        let request = self
            .http
            .post(self.url(SUBSCRIBE_PATH))
            .form(&[("email", email)]);
        self.post_for_reply(SUBSCRIBE_PATH, request).await
    }

    async fn get_collection(&self, path: &str, request: RequestBuilder) -> FetchResult<Collection> {
        info!("GET {}", path);
        let response = send(request).await?;
        let status = response.status();
        if !status.is_success() {
            return Err(status_error(path, status));
        }
        let body = read_body(response).await?;
        Ok(decode_collection(&body)?)
    }

    /// Sends a mutation and decodes its `{status, message}` reply.
    ///
    /// An error status whose body is still a reply is returned as that
    /// (failed) reply; only an undecodable error body is a transport error.
    async fn post_for_reply(&self, path: &str, request: RequestBuilder) -> FetchResult<StatusReply> {
        info!("POST {}", path);
        let response = send(request).await?;
        let status = response.status();
        let body = read_body(response).await?;

        match StatusReply::from_slice(&body) {
            Ok(reply) => {
                debug!(%status, success = reply.is_success(), "reply from {}", path);
                Ok(reply)
            }
            Err(_) if !status.is_success() => Err(status_error(path, status)),
            Err(e) => Err(e.into()),
        }
    }
}

async fn send(request: RequestBuilder) -> FetchResult<Response> {
    request
        .send()
        .await
        .map_err(|e| FetchError::Transport(e.to_string()))
}

async fn read_body(response: Response) -> FetchResult<Vec<u8>> {
    response
        .bytes()
        .await
        .map(|b| b.to_vec())
        .map_err(|e| FetchError::Transport(e.to_string()))
}

fn status_error(path: &str, status: StatusCode) -> FetchError {
    FetchError::Transport(format!("{path} returned {status}"))
}
