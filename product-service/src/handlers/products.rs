use crate::dtos::{product_body, CreateProductPayload, UpdateProductPayload};
use crate::models::ProductId;
use crate::startup::AppState;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use futures::stream::TryStreamExt;
use mongodb::bson::doc;
use mongodb::options::ReplaceOptions;
use serde_json::{json, Value};
use service_core::error::AppError;

pub async fn list_products(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let mut cursor = state
        .db
        .products()
        .find(doc! {}, None)
        .await
        .map_err(|e| AppError::store("Erro ao obter os produtos!", e))?;

    let mut products = Vec::new();
    while let Some(document) = cursor
        .try_next()
        .await
        .map_err(|e| AppError::store("Erro ao obter os produtos!", e))?
    {
        products.push(product_body(document));
    }

    Ok(Json(Value::Array(products)))
}

pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let document = state
        .db
        .products()
        .find_one(doc! { "_id": &id }, None)
        .await
        .map_err(|e| AppError::store("Erro ao obter o produto!", e))?
        .ok_or_else(|| AppError::NotFound("Produto não encontrado!".to_string()))?;

    Ok(Json(product_body(document)))
}

pub async fn create_product(
    State(state): State<AppState>,
    Json(payload): Json<CreateProductPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let id = ProductId::generate();
    let document = payload.into_document(&id)?;

    // Create-or-overwrite at the minted id; collisions are not checked.
    state
        .db
        .products()
        .replace_one(
            doc! { "_id": id.as_str() },
            document,
            ReplaceOptions::builder().upsert(true).build(),
        )
        .await
        .map_err(|e| AppError::store("Erro ao criar o produto!", e))?;

    tracing::info!(product_id = %id, "Product created");

    Ok(Json(json!({
        "message": "Produto criado com sucesso!",
        "id": id.as_str(),
    })))
}

pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateProductPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let update = payload.into_update()?;

    // No existence check; an unknown id matches nothing and still succeeds.
    state
        .db
        .products()
        .update_one(doc! { "_id": &id }, update, None)
        .await
        .map_err(|e| AppError::store("Erro ao atualizar o produto!", e))?;

    Ok(Json(json!({ "message": "Produto atualizado com sucesso!" })))
}

pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state
        .db
        .products()
        .delete_one(doc! { "_id": &id }, None)
        .await
        .map_err(|e| AppError::store("Erro ao deletar o produto!", e))?;

    Ok(Json(json!({ "message": "Produto deletado com sucesso!" })))
}
