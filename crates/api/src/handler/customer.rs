use crate::{
    abstract_trait::customer::{DynCustomerCommandRepository, DynCustomerQueryRepository},
    domain::{
        requests::customer::{CreateCustomerRequest, UpdateCustomerRequest},
        response::{api::MessageResponse, customer::CustomerResponse},
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
    path = "/customers",
    tag = "Customer",
    responses(
        (status = 200, description = "List of customers", body = Vec<CustomerResponse>),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_customers(
    Extension(repository): Extension<DynCustomerQueryRepository>,
) -> Result<impl IntoResponse, HttpError> {
    let customers = repository.find_all().await?;
    let response: Vec<CustomerResponse> =
        customers.into_iter().map(CustomerResponse::from).collect();
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/customers/{id}",
    tag = "Customer",
    params(("id" = String, Path, description = "Customer ID")),
    responses(
        (status = 200, description = "Customer details", body = CustomerResponse),
        (status = 404, description = "Customer not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_customer(
    Extension(repository): Extension<DynCustomerQueryRepository>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    let customer = repository.find_by_id(&id).await?;
    Ok((StatusCode::OK, Json(CustomerResponse::from(customer))))
}

#[utoipa::path(
    post,
    path = "/customers",
    tag = "Customer",
    request_body = CreateCustomerRequest,
    responses(
        (status = 201, description = "Customer created", body = MessageResponse),
        (status = 400, description = "Malformed body"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn create_customer(
    Extension(repository): Extension<DynCustomerCommandRepository>,
    SimpleValidatedJson(body): SimpleValidatedJson<CreateCustomerRequest>,
) -> Result<impl IntoResponse, HttpError> {
    repository.create_customer(&body).await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Customer created")),
    ))
}

#[utoipa::path(
    put,
    path = "/customers/{id}",
    tag = "Customer",
    params(("id" = String, Path, description = "Customer ID")),
    request_body = UpdateCustomerRequest,
    responses(
        (status = 200, description = "Customer updated", body = MessageResponse),
        (status = 400, description = "Malformed body"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn update_customer(
    Extension(repository): Extension<DynCustomerCommandRepository>,
    Path(id): Path<String>,
    SimpleValidatedJson(mut body): SimpleValidatedJson<UpdateCustomerRequest>,
) -> Result<impl IntoResponse, HttpError> {
    body.id = id;
    repository.update_customer(&body).await?;
    Ok((StatusCode::OK, Json(MessageResponse::new("Customer updated"))))
}

#[utoipa::path(
    delete,
    path = "/customers/{id}",
    tag = "Customer",
    params(("id" = String, Path, description = "Customer ID")),
    responses(
        (status = 200, description = "Customer deleted", body = MessageResponse),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn delete_customer(
    Extension(repository): Extension<DynCustomerCommandRepository>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    repository.delete_customer(&id).await?;
    Ok((StatusCode::OK, Json(MessageResponse::new("Customer deleted"))))
}

pub fn customer_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/customers", get(get_customers))
        .route("/customers/{id}", get(get_customer))
        .route("/customers", post(create_customer))
        .route("/customers/{id}", put(update_customer))
        .route("/customers/{id}", delete(delete_customer))
        .layer(Extension(app_state.di_container.customer_query.clone()))
        .layer(Extension(app_state.di_container.customer_command.clone()))
}
