use crate::{
    abstract_trait::order::{DynOrderCommandRepository, DynOrderQueryRepository},
    domain::{
        requests::order::{CreateOrderRequest, UpdateOrderRequest},
        response::{api::MessageResponse, order::OrderResponse},
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
    path = "/orders",
    tag = "Order",
    responses(
        (status = 200, description = "List of orders with their items", body = Vec<OrderResponse>),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_orders(
    Extension(repository): Extension<DynOrderQueryRepository>,
) -> Result<impl IntoResponse, HttpError> {
    let orders = repository.find_all().await?;
    let response: Vec<OrderResponse> = orders.into_iter().map(OrderResponse::from).collect();
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/orders/{id}",
    tag = "Order",
    params(("id" = String, Path, description = "Order ID")),
    responses(
        (status = 200, description = "Order details", body = OrderResponse),
        (status = 404, description = "Order not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_order(
    Extension(repository): Extension<DynOrderQueryRepository>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    let order = repository.find_by_id(&id).await?;
    Ok((StatusCode::OK, Json(OrderResponse::from(order))))
}

#[utoipa::path(
    post,
    path = "/orders",
    tag = "Order",
    request_body = CreateOrderRequest,
    responses(
        (status = 201, description = "Order created", body = MessageResponse),
        (status = 400, description = "Malformed body"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn create_order(
    Extension(repository): Extension<DynOrderCommandRepository>,
    SimpleValidatedJson(body): SimpleValidatedJson<CreateOrderRequest>,
) -> Result<impl IntoResponse, HttpError> {
    repository.create_order(&body).await?;
    Ok((StatusCode::CREATED, Json(MessageResponse::new("Order created"))))
}

#[utoipa::path(
    put,
    path = "/orders/{id}",
    tag = "Order",
    params(("id" = String, Path, description = "Order ID")),
    request_body = UpdateOrderRequest,
    responses(
        (status = 200, description = "Order updated", body = MessageResponse),
        (status = 400, description = "Malformed body"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn update_order(
    Extension(repository): Extension<DynOrderCommandRepository>,
    Path(id): Path<String>,
    SimpleValidatedJson(mut body): SimpleValidatedJson<UpdateOrderRequest>,
) -> Result<impl IntoResponse, HttpError> {
    body.id = id;
    repository.update_order(&body).await?;
    Ok((StatusCode::OK, Json(MessageResponse::new("Order updated"))))
}

#[utoipa::path(
    delete,
    path = "/orders/{id}",
    tag = "Order",
    params(("id" = String, Path, description = "Order ID")),
    responses(
        (status = 200, description = "Order deleted", body = MessageResponse),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn delete_order(
    Extension(repository): Extension<DynOrderCommandRepository>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    repository.delete_order(&id).await?;
    Ok((StatusCode::OK, Json(MessageResponse::new("Order deleted"))))
}

pub fn order_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/orders", get(get_orders))
        .route("/orders/{id}", get(get_order))
        .route("/orders", post(create_order))
        .route("/orders/{id}", put(update_order))
        .route("/orders/{id}", delete(delete_order))
        .layer(Extension(app_state.di_container.order_query.clone()))
        .layer(Extension(app_state.di_container.order_command.clone()))
}
