use crate::models::ProductId;
use mongodb::bson::{self, doc, Bson, Document};
use serde::Deserialize;
use serde_json::{Map, Value};
use service_core::error::AppError;

pub const INVALID_PRODUCT_DATA: &str =
    "Dados inválidos! O campo 'name' deve ser uma string e o campo 'price' deve ser um número.";

/// Create body. `name` and `price` are kept as raw JSON values and checked at
/// runtime, so the rest of the document stays schemaless: every other field
/// the client sends lands in `extra` and is stored verbatim.
#[derive(Debug, Deserialize)]
pub struct CreateProductPayload {
    #[serde(default)]
    pub name: Value,
    #[serde(default)]
    pub price: Value,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CreateProductPayload {
    pub fn validate(&self) -> Result<(), AppError> {
        validate_name_and_price(&self.name, &self.price)
    }

    /// The document stored under the minted id: `name`, `price`, then the
    /// extra fields exactly as sent. `_id` is the store key, so a client
    /// field of that name cannot override it.
    pub fn into_document(self, id: &ProductId) -> Result<Document, AppError> {
        let mut fields = Map::new();
        fields.insert("name".to_string(), self.name);
        fields.insert("price".to_string(), self.price);
        fields.extend(self.extra);

        let mut document =
            bson::to_document(&fields).map_err(|e| AppError::InternalError(e.into()))?;
        document.insert("_id", id.as_str());
        Ok(document)
    }
}

/// Update body has a fixed shape: `name`, `price` and `category` only.
/// Anything else the client sends is dropped, not merged.
#[derive(Debug, Deserialize)]
pub struct UpdateProductPayload {
    #[serde(default)]
    pub name: Value,
    #[serde(default)]
    pub price: Value,
    #[serde(default)]
    pub category: Value,
}

impl UpdateProductPayload {
    pub fn validate(&self) -> Result<(), AppError> {
        validate_name_and_price(&self.name, &self.price)
    }

    /// Field-level `$set` of the updatable fields. Fields written at create
    /// time and not named here persist untouched. An absent (or null)
    /// `category` is left out of the update entirely.
    pub fn into_update(self) -> Result<Document, AppError> {
        let mut set = doc! {
            "name": json_to_bson(self.name)?,
            "price": json_to_bson(self.price)?,
        };
        if !self.category.is_null() {
            set.insert("category", json_to_bson(self.category)?);
        }
        Ok(doc! { "$set": set })
    }
}

/// The type check is the whole validation: `"10"` is rejected as a price
/// even though it would parse, and a missing field fails the same way.
/// JSON cannot encode NaN, so `is_number` needs no numeric-ness follow-up.
fn validate_name_and_price(name: &Value, price: &Value) -> Result<(), AppError> {
    if !name.is_string() || !price.is_number() {
        return Err(AppError::BadRequest(INVALID_PRODUCT_DATA.to_string()));
    }
    Ok(())
}

fn json_to_bson(value: Value) -> Result<Bson, AppError> {
    bson::to_bson(&value).map_err(|e| AppError::InternalError(e.into()))
}

/// Wire shape of a stored product: `{id, ...fields}`. The `_id` key becomes
/// `id`, unless the document carries a field literally named `id`, which
/// keeps its stored value.
pub fn product_body(mut document: Document) -> Value {
    let id = document
        .remove("_id")
        .map(|id| match id {
            Bson::String(id) => id,
            other => other.to_string(),
        })
        .unwrap_or_default();

    let mut body = Map::new();
    body.insert("id".to_string(), Value::String(id));
    if let Value::Object(fields) = Bson::Document(document).into_relaxed_extjson() {
        for (key, value) in fields {
            body.insert(key, value);
        }
    }
    Value::Object(body)
}
