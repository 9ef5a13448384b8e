//! Entity Client
//!
//! Typed CRUD over a REST collection endpoint (`/{collection}` and
//! `/{collection}/{id}`). The response envelope is unwrapped here, per endpoint,
//! so callers only ever see entities.

use async_trait::async_trait;
use contracts::domain::common::{ApiEnvelope, Entity, EntityId};
use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use std::fmt;
use std::marker::PhantomData;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    Get,
    Create,
    Update,
    Remove,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::List => "list",
            Operation::Get => "get",
            Operation::Create => "create",
            Operation::Update => "update",
            Operation::Remove => "remove",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RemoteCause {
    #[error("failed to send request: {0}")]
    Transport(String),

    #[error("HTTP {status}")]
    Status { status: u16, body: String },

    #[error("failed to serialize request: {0}")]
    Encode(String),

    #[error("failed to parse response: {0}")]
    Decode(String),
}

/// Any transport failure or non-2xx response.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{operation} {entity_kind} failed: {cause}")]
pub struct RemoteError {
    pub operation: Operation,
    pub entity_kind: &'static str,
    #[source]
    pub cause: RemoteCause,
}

/// How a given endpoint shapes its response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseShape {
    /// `{status, message, payload}`
    Enveloped,
    /// The entity (or list) itself.
    Bare,
}

/// Explicit unwrap rule for every endpoint of one collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndpointRules {
    pub list: ResponseShape,
    pub get: ResponseShape,
    pub create: ResponseShape,
    pub update: ResponseShape,
    pub remove: ResponseShape,
}

impl Default for EndpointRules {
    fn default() -> Self {
        Self {
            list: ResponseShape::Enveloped,
            get: ResponseShape::Bare,
            create: ResponseShape::Bare,
            update: ResponseShape::Bare,
            remove: ResponseShape::Bare,
        }
    }
}

impl EndpointRules {
    pub fn shape(&self, operation: Operation) -> ResponseShape {
        match operation {
            Operation::List => self.list,
            Operation::Get => self.get,
            Operation::Create => self.create,
            Operation::Update => self.update,
            Operation::Remove => self.remove,
        }
    }
}

pub fn decode_body<R: DeserializeOwned>(
    body: &str,
    shape: ResponseShape,
) -> Result<R, serde_json::Error> {
    match shape {
        ResponseShape::Bare => serde_json::from_str(body),
        ResponseShape::Enveloped => {
            serde_json::from_str::<ApiEnvelope<R>>(body).map(ApiEnvelope::into_payload)
        }
    }
}

/// Like [`decode_body`], but an empty body or `null` payload yields `None`.
pub fn decode_optional<R: DeserializeOwned>(
    body: &str,
    shape: ResponseShape,
) -> Result<Option<R>, serde_json::Error> {
    if body.trim().is_empty() {
        return Ok(None);
    }
    decode_body::<Option<R>>(body, shape)
}

#[async_trait(?Send)]
pub trait EntityClient {
    type Entity: Entity;

    async fn list(&self) -> Result<Vec<Self::Entity>, RemoteError>;

    async fn get(&self, id: EntityId) -> Result<Self::Entity, RemoteError>;

    /// Returns the entity as assigned by the server, including its new `id`.
    async fn create(
        &self,
        new: &<Self::Entity as Entity>::New,
    ) -> Result<Self::Entity, RemoteError>;

    /// Returns the entity as the server stored it, which may differ from the request.
    async fn update(&self, entity: &Self::Entity) -> Result<Self::Entity, RemoteError>;

    async fn remove(&self, id: EntityId) -> Result<Option<Self::Entity>, RemoteError>;
}

/// `gloo-net` implementation against `{base_url}/{collection}`.
#[derive(Debug, Clone)]
pub struct HttpEntityClient<T> {
    base_url: String,
    rules: EndpointRules,
    _entity: PhantomData<fn() -> T>,
}

impl<T: Entity> HttpEntityClient<T> {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            rules: EndpointRules::default(),
            _entity: PhantomData,
        }
    }

    pub fn with_rules(mut self, rules: EndpointRules) -> Self {
        self.rules = rules;
        self
    }

    pub fn rules(&self) -> EndpointRules {
        self.rules
    }

    pub fn collection_url(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            T::collection_name()
        )
    }

    pub fn item_url(&self, id: EntityId) -> String {
        format!("{}/{}", self.collection_url(), id)
    }

    fn fail(&self, operation: Operation, cause: RemoteCause) -> RemoteError {
        let error = RemoteError {
            operation,
            entity_kind: T::element_name(),
            cause,
        };
        log::error!("{}", error);
        error
    }

    /// Sends the request and returns the raw body of a 2xx response.
    async fn execute(
        &self,
        operation: Operation,
        request: Result<Request, gloo_net::Error>,
    ) -> Result<String, RemoteError> {
        let request = request.map_err(|e| self.fail(operation, RemoteCause::Encode(e.to_string())))?;
        let response = request
            .send()
            .await
            .map_err(|e| self.fail(operation, RemoteCause::Transport(e.to_string())))?;

        let status = response.status();
        let ok = response.ok();
        let body = response
            .text()
            .await
            .map_err(|e| self.fail(operation, RemoteCause::Transport(e.to_string())))?;

        if !ok {
            return Err(self.fail(operation, RemoteCause::Status { status, body }));
        }
        log::debug!("{} {} -> HTTP {}", operation, T::element_name(), status);
        Ok(body)
    }

    fn decode<R: DeserializeOwned>(&self, operation: Operation, body: &str) -> Result<R, RemoteError> {
        decode_body(body, self.rules.shape(operation))
            .map_err(|e| self.fail(operation, RemoteCause::Decode(e.to_string())))
    }
}

#[async_trait(?Send)]
impl<T: Entity> EntityClient for HttpEntityClient<T> {
    type Entity = T;

    async fn list(&self) -> Result<Vec<T>, RemoteError> {
        let request = Request::get(&self.collection_url())
            .header("Accept", "application/json")
            .build();
        let body = self.execute(Operation::List, request).await?;
        self.decode(Operation::List, &body)
    }

    async fn get(&self, id: EntityId) -> Result<T, RemoteError> {
        let request = Request::get(&self.item_url(id))
            .header("Accept", "application/json")
            .build();
        let body = self.execute(Operation::Get, request).await?;
        self.decode(Operation::Get, &body)
    }

    async fn create(&self, new: &T::New) -> Result<T, RemoteError> {
        let request = Request::post(&self.collection_url())
            .header("Accept", "application/json")
            .json(new);
        let body = self.execute(Operation::Create, request).await?;
        self.decode(Operation::Create, &body)
    }

    async fn update(&self, entity: &T) -> Result<T, RemoteError> {
        let request = Request::patch(&self.item_url(entity.id()))
            .header("Accept", "application/json")
            .json(entity);
        let body = self.execute(Operation::Update, request).await?;
        self.decode(Operation::Update, &body)
    }

    async fn remove(&self, id: EntityId) -> Result<Option<T>, RemoteError> {
        let request = Request::delete(&self.item_url(id))
            .header("Accept", "application/json")
            .build();
        let body = self.execute(Operation::Remove, request).await?;
        decode_optional(&body, self.rules.shape(Operation::Remove))
            .map_err(|e| self.fail(Operation::Remove, RemoteCause::Decode(e.to_string())))
    }
}
