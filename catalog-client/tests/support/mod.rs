// catalog-client/tests/support/mod.rs
// In-memory transport that records every request

#![allow(dead_code)]

use async_trait::async_trait;
use catalog_client::{CatalogClient, ClientError, ClientResult, HttpClient};
use http::{Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Mutex;

#[derive(Debug, Clone)]
pub enum Reply {
    Json(Value),
    Status(StatusCode, Option<String>),
}

#[derive(Debug, Clone)]
pub struct Call {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

#[derive(Debug, Default)]
pub struct MockHttp {
    routes: Mutex<HashMap<(Method, String), Reply>>,
    calls: Mutex<Vec<Call>>,
}

impl MockHttp {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn json(&self, method: Method, path: &str, value: Value) -> &Self {
        self.routes
            .lock()
            .unwrap()
            .insert((method, path.to_string()), Reply::Json(value));
        self
    }

    pub fn fail(&self, method: Method, path: &str, status: StatusCode) -> &Self {
        self.routes
            .lock()
            .unwrap()
            .insert((method, path.to_string()), Reply::Status(status, None));
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn count(&self, method: Method, path: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.method == method && c.path == path)
            .count()
    }

    /// Request lines in call order, e.g. "GET categories/3"
    pub fn log(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|c| format!("{} {}", c.method, c.path))
            .collect()
    }

    fn reply<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, &str)],
        body: Option<Value>,
    ) -> ClientResult<T> {
        self.calls.lock().unwrap().push(Call {
            method: method.clone(),
            path: path.to_string(),
            query: query
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            body,
        });
        let reply = self
            .routes
            .lock()
            .unwrap()
            .get(&(method, path.to_string()))
            .cloned()
            .unwrap_or(Reply::Status(StatusCode::NOT_FOUND, None));
        match reply {
            Reply::Json(value) => Ok(serde_json::from_value(value)?),
            Reply::Status(status, message) => Err(ClientError::from_response(status, message)),
        }
    }
}

#[async_trait]
impl HttpClient for MockHttp {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        self.reply(Method::GET, path, &[], None)
    }

    async fn get_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> ClientResult<T> {
        self.reply(Method::GET, path, query, None)
    }

    async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let body = serde_json::to_value(body)?;
        self.reply(Method::POST, path, &[], Some(body))
    }

    async fn put<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let body = serde_json::to_value(body)?;
        self.reply(Method::PUT, path, &[], Some(body))
    }

    async fn delete(&self, path: &str) -> ClientResult<()> {
        self.reply::<Value>(Method::DELETE, path, &[], None)?;
        Ok(())
    }
}

pub fn client() -> CatalogClient<MockHttp> {
    CatalogClient::new(MockHttp::new())
}

/// `GET categories/{id}` fixture
pub fn category(id: i64, name: &str, parent_id: Option<i64>) -> Value {
    serde_json::json!({ "id": id, "name": name, "parentId": parent_id, "children": [] })
}

/// One category-attribute link fixture
pub fn link(id: i64, category_id: i64, attribute_id: i64, name: &str) -> Value {
    serde_json::json!({
        "id": id,
        "categoryId": category_id,
        "attributeId": attribute_id,
        "attributeName": name,
        "attributeType": "STRING",
        "required": false,
        "categoryName": format!("category-{}", category_id),
        "inherited": false
    })
}
