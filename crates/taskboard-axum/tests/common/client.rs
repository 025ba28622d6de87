//! In-process HTTP client bound to a [`TestHarness`].
//!
//! Every client owns its own router, wired over the harness pool. Nothing is
//! registered globally, so one case's wiring cannot leak into the next.

// Not every test binary uses every helper.
#![allow(dead_code)]

use std::future::Future;

use anyhow::Result;
use axum::Router;
use axum::body::{Body, Bytes};
use axum::http::{Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tower::ServiceExt;

use taskboard_axum::{AxumContext, CorsConfig, create_router};
use taskboard_db::TestHarness;

/// Sends requests straight into a router without binding a socket.
#[derive(Clone)]
pub struct TestClient {
    app: Router,
}

impl TestClient {
    /// Build a fresh application over the harness's store.
    pub fn new(harness: &TestHarness) -> Self {
        let ctx = AxumContext::from_pool(harness.pool().clone());
        Self {
            app: create_router(ctx, &CorsConfig::AllowAll),
        }
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.send(Method::GET, uri, Body::empty(), None).await
    }

    pub async fn delete(&self, uri: &str) -> TestResponse {
        self.send(Method::DELETE, uri, Body::empty(), None).await
    }

    pub async fn post_json<B: Serialize>(&self, uri: &str, body: &B) -> TestResponse {
        self.send_json(Method::POST, uri, body).await
    }

    pub async fn put_json<B: Serialize>(&self, uri: &str, body: &B) -> TestResponse {
        self.send_json(Method::PUT, uri, body).await
    }

    pub async fn patch_json<B: Serialize>(&self, uri: &str, body: &B) -> TestResponse {
        self.send_json(Method::PATCH, uri, body).await
    }

    /// Send a raw body as `application/json`, valid or not.
    pub async fn post_raw(&self, uri: &str, body: &'static str) -> TestResponse {
        self.send(Method::POST, uri, Body::from(body), Some("application/json"))
            .await
    }

    async fn send_json<B: Serialize>(&self, method: Method, uri: &str, body: &B) -> TestResponse {
        let bytes = serde_json::to_vec(body).expect("serialize request body");
        self.send(method, uri, Body::from(bytes), Some("application/json"))
            .await
    }

    async fn send(
        &self,
        method: Method,
        uri: &str,
        body: Body,
        content_type: Option<&str>,
    ) -> TestResponse {
        let mut request = Request::builder().method(method).uri(uri);
        if let Some(content_type) = content_type {
            request = request.header(header::CONTENT_TYPE, content_type);
        }
        let request = request.body(body).expect("build request");

        let response = self
            .app
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");
        let status = response.status();
        let body = response
            .into_body()
            .collect()
            .await
            .expect("read response body")
            .to_bytes();

        TestResponse { status, body }
    }
}

/// A fully buffered response.
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Bytes,
}

impl TestResponse {
    pub fn json<T: DeserializeOwned>(&self) -> T {
        serde_json::from_slice(&self.body).unwrap_or_else(|e| {
            panic!(
                "response body is not the expected JSON ({e}): {}",
                self.text()
            )
        })
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Run one case with a freshly reset store and its own client.
///
/// The client is dropped when the case finishes.
pub async fn with_client<'a, F, Fut, T>(harness: &'a TestHarness, case: F) -> Result<T>
where
    F: FnOnce(TestClient, &'a TestHarness) -> Fut,
    Fut: Future<Output = Result<T>>,
{
    harness
        .run_case(|h| case(TestClient::new(h), h))
        .await
}
