//! Firestore REST client
//!
//! Implements [`DocumentStore`] over the Firestore v1 REST API:
//! listing a collection's documents (page-token driven, full snapshot) and
//! listing a document's subcollection ids. Firestore's typed value JSON is
//! decoded into [`SampledValue`] here, once, at the store boundary.

use super::{CollectionRef, Document, DocumentStore};
use crate::auth::{Authenticator, ServiceAccount};
use crate::error::{Error, Result};
use crate::value::SampledValue;
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::Deserialize;
use serde_json::json;
use std::collections::BTreeMap;
use std::sync::Arc;
use url::Url;

/// Production Firestore endpoint
pub const DEFAULT_BASE_URL: &str = "https://firestore.googleapis.com";

/// Documents fetched per page; the snapshot is drained regardless
const PAGE_SIZE: u32 = 300;

/// Firestore-backed document store
pub struct FirestoreStore {
    client: Client,
    /// Base endpoint without a trailing slash
    base_url: String,
    /// `projects/{project}/databases/(default)/documents`
    root: String,
    /// Absent for emulator/mock endpoints
    auth: Option<Arc<Authenticator>>,
}

impl FirestoreStore {
    /// Create a store for the project named in a service account credential
    pub fn new(account: ServiceAccount) -> Result<Self> {
        let root = document_root(&account.project_id);
        Ok(Self {
            client: Client::new(),
            base_url: validate_base_url(DEFAULT_BASE_URL)?,
            root,
            auth: Some(Arc::new(Authenticator::new(account))),
        })
    }

    /// Create an unauthenticated store against a custom endpoint
    /// (Firestore emulator or a mock server)
    pub fn unauthenticated(base_url: &str, project_id: &str) -> Result<Self> {
        Ok(Self {
            client: Client::new(),
            base_url: validate_base_url(base_url)?,
            root: document_root(project_id),
            auth: None,
        })
    }

    /// Mint a token if this store is authenticated; used by `check`
    pub async fn verify_access(&self) -> Result<()> {
        if let Some(auth) = &self.auth {
            auth.access_token().await?;
        }
        Ok(())
    }

    async fn authorize(&self, req: RequestBuilder) -> Result<RequestBuilder> {
        match &self.auth {
            Some(auth) => {
                let token = auth.access_token().await?;
                Ok(req.bearer_auth(token))
            }
            None => Ok(req),
        }
    }

    async fn send(&self, req: RequestBuilder, path: &str) -> Result<serde_json::Value> {
        let response = self.authorize(req).await?.send().await.map_err(Error::Http)?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::store(path, format!("HTTP {status}: {body}")));
        }

        response.json().await.map_err(Error::Http)
    }

    fn resource_url(&self, relative_path: &str) -> String {
        format!("{}/v1/{}/{relative_path}", self.base_url, self.root)
    }

    /// Relative path of a document from its full resource name
    fn relative_path(&self, resource_name: &str) -> String {
        resource_name
            .strip_prefix(&format!("{}/", self.root))
            .unwrap_or(resource_name)
            .to_string()
    }
}

#[async_trait]
impl DocumentStore for FirestoreStore {
    async fn fetch_documents(&self, collection_path: &str) -> Result<Vec<Document>> {
        let url = self.resource_url(collection_path);
        let mut documents = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let mut req = self
                .client
                .get(&url)
                .query(&[("pageSize", PAGE_SIZE.to_string())]);
            if let Some(token) = &page_token {
                req = req.query(&[("pageToken", token)]);
            }

            let body = self.send(req, collection_path).await?;
            let page: ListDocumentsResponse =
                serde_json::from_value(body).map_err(Error::JsonParse)?;

            for doc in page.documents {
                let path = self.relative_path(&doc.name);
                let id = path.rsplit('/').next().unwrap_or_default().to_string();
                let fields = doc
                    .fields
                    .into_iter()
                    .map(|(name, value)| (name, decode_value(value)))
                    .collect();
                documents.push(Document { id, path, fields });
            }

            match page.next_page_token {
                Some(token) if !token.is_empty() => page_token = Some(token),
                _ => break,
            }
        }

        Ok(documents)
    }

    async fn list_child_collections(&self, document: &Document) -> Result<Vec<CollectionRef>> {
        let url = format!("{}:listCollectionIds", self.resource_url(&document.path));
        let mut children = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let mut body = json!({ "pageSize": PAGE_SIZE });
            if let Some(token) = &page_token {
                body["pageToken"] = json!(token);
            }

            let req = self.client.post(&url).json(&body);
            let response = self.send(req, &document.path).await?;
            let page: ListCollectionIdsResponse =
                serde_json::from_value(response).map_err(Error::JsonParse)?;

            children.extend(
                page.collection_ids
                    .iter()
                    .map(|id| document.child_collection(id)),
            );

            match page.next_page_token {
                Some(token) if !token.is_empty() => page_token = Some(token),
                _ => break,
            }
        }

        Ok(children)
    }
}

fn document_root(project_id: &str) -> String {
    format!("projects/{project_id}/databases/(default)/documents")
}

fn validate_base_url(base_url: &str) -> Result<String> {
    let url = Url::parse(base_url)?;
    Ok(url.as_str().trim_end_matches('/').to_string())
}

// ============================================================================
// Wire types
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListDocumentsResponse {
    #[serde(default)]
    documents: Vec<RestDocument>,
    next_page_token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RestDocument {
    name: String,
    #[serde(default)]
    fields: BTreeMap<String, FireValue>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListCollectionIdsResponse {
    #[serde(default)]
    collection_ids: Vec<String>,
    next_page_token: Option<String>,
}

/// Firestore's externally tagged value encoding
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
enum FireValue {
    NullValue(serde_json::Value),
    BooleanValue(bool),
    /// Encoded as a decimal string on the wire
    IntegerValue(String),
    DoubleValue(f64),
    TimestampValue(String),
    StringValue(String),
    BytesValue(String),
    ReferenceValue(String),
    GeoPointValue(GeoPoint),
    ArrayValue(ArrayPayload),
    MapValue(MapPayload),
}

#[derive(Debug, Clone, Deserialize)]
struct GeoPoint {
    #[serde(default)]
    latitude: f64,
    #[serde(default)]
    longitude: f64,
}

#[derive(Debug, Clone, Deserialize)]
struct ArrayPayload {
    #[serde(default)]
    values: Vec<FireValue>,
}

#[derive(Debug, Clone, Deserialize)]
struct MapPayload {
    #[serde(default)]
    fields: BTreeMap<String, FireValue>,
}

/// Decode one wire value into the coarse sampled-value categories.
///
/// Integer and double both become `Number` (no width inference); timestamps,
/// references and bytes observe as strings; geo points observe as their
/// latitude/longitude object shape.
fn decode_value(value: FireValue) -> SampledValue {
    match value {
        FireValue::NullValue(_) => SampledValue::Null,
        FireValue::BooleanValue(b) => SampledValue::Bool(b),
        FireValue::IntegerValue(s) => SampledValue::Number(s.parse().unwrap_or(0.0)),
        FireValue::DoubleValue(f) => SampledValue::Number(f),
        FireValue::TimestampValue(s)
        | FireValue::StringValue(s)
        | FireValue::BytesValue(s)
        | FireValue::ReferenceValue(s) => SampledValue::Str(s),
        FireValue::GeoPointValue(point) => SampledValue::Map(vec![
            ("latitude".to_string(), SampledValue::Number(point.latitude)),
            (
                "longitude".to_string(),
                SampledValue::Number(point.longitude),
            ),
        ]),
        FireValue::ArrayValue(array) => {
            SampledValue::Array(array.values.into_iter().map(decode_value).collect())
        }
        FireValue::MapValue(map) => SampledValue::Map(
            map.fields
                .into_iter()
                .map(|(name, value)| (name, decode_value(value)))
                .collect(),
        ),
    }
}
