use crate::{
    abstract_trait::product::{DynProductCommandRepository, DynProductQueryRepository},
    domain::{
        requests::product::{CreateProductRequest, UpdateProductRequest},
        response::{api::MessageResponse, product::ProductResponse},
    },
    middleware::validate::SimpleValidatedJson,
    state::AppState,
};
use axum::{
    Json,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post, put},
};
use shared::errors::HttpError;
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/products",
    tag = "Product",
    responses(
        (status = 200, description = "List of products", body = Vec<ProductResponse>),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_products(
    Extension(repository): Extension<DynProductQueryRepository>,
) -> Result<impl IntoResponse, HttpError> {
    let products = repository.find_all().await?;
    let response: Vec<ProductResponse> = products.into_iter().map(ProductResponse::from).collect();
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/products/{id}",
    tag = "Product",
    params(("id" = String, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product details", body = ProductResponse),
        (status = 404, description = "Product not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_product(
    Extension(repository): Extension<DynProductQueryRepository>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    let product = repository.find_by_id(&id).await?;
    Ok((StatusCode::OK, Json(ProductResponse::from(product))))
}

#[utoipa::path(
    post,
    path = "/products",
    tag = "Product",
    request_body = CreateProductRequest,
    responses(
        (status = 201, description = "Product created", body = MessageResponse),
        (status = 400, description = "Malformed body"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn create_product(
    Extension(repository): Extension<DynProductCommandRepository>,
    SimpleValidatedJson(body): SimpleValidatedJson<CreateProductRequest>,
) -> Result<impl IntoResponse, HttpError> {
    repository.create_product(&body).await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Product created")),
    ))
}

#[utoipa::path(
    put,
    path = "/products/{id}",
    tag = "Product",
    params(("id" = String, Path, description = "Product ID")),
    request_body = UpdateProductRequest,
    responses(
        (status = 200, description = "Product updated", body = MessageResponse),
        (status = 400, description = "Malformed body"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn update_product(
    Extension(repository): Extension<DynProductCommandRepository>,
    Path(id): Path<String>,
    SimpleValidatedJson(mut body): SimpleValidatedJson<UpdateProductRequest>,
) -> Result<impl IntoResponse, HttpError> {
    body.id = id;
    repository.update_product(&body).await?;
    Ok((StatusCode::OK, Json(MessageResponse::new("Product updated"))))
}

#[utoipa::path(
    delete,
    path = "/products/{id}",
    tag = "Product",
    params(("id" = String, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product deleted", body = MessageResponse),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn delete_product(
    Extension(repository): Extension<DynProductCommandRepository>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    repository.delete_product(&id).await?;
    Ok((StatusCode::OK, Json(MessageResponse::new("Product deleted"))))
}

pub fn product_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/products", get(get_products))
        .route("/products/{id}", get(get_product))
        .route("/products", post(create_product))
        .route("/products/{id}", put(update_product))
        .route("/products/{id}", delete(delete_product))
        .layer(Extension(app_state.di_container.product_query.clone()))
        .layer(Extension(app_state.di_container.product_command.clone()))
}
