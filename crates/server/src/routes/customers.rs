//! Customer CRUD endpoints (JSON API).
//!
//! Wire DTOs and the boundary validation pass live here. Raw payloads are
//! validated into the typed inputs the service consumes; field names on the
//! wire are camelCase and dates are ISO `YYYY-MM-DD`.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use clientele_core::{CustomerId, CustomerName, CustomerNameError, Email, EmailError, Tier};

use crate::error::{AppError, Result};
use crate::models::{CustomerUpdate, NewCustomer};
use crate::services::TieredCustomer;
use crate::state::AppState;

// ============================================================================
// Wire types
// ============================================================================

/// Request body for creating a customer.
///
/// Unknown fields are rejected. The `id` field exists only to catch callers
/// trying to choose their own id; any value there fails validation.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateCustomerRequest {
    pub id: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub annual_spend: Option<Decimal>,
    pub last_purchase_date: Option<NaiveDate>,
}

/// Request body for partially updating a customer.
///
/// Absent fields leave the stored values unchanged. Unknown fields are
/// ignored here, unlike on create.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCustomerRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub annual_spend: Option<Decimal>,
    pub last_purchase_date: Option<NaiveDate>,
}

/// A customer as presented on the wire, tier included.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerResponse {
    pub id: CustomerId,
    pub name: CustomerName,
    pub email: Email,
    pub annual_spend: Option<Decimal>,
    pub last_purchase_date: Option<NaiveDate>,
    pub tier: Tier,
}

impl From<TieredCustomer> for CustomerResponse {
    fn from(tiered: TieredCustomer) -> Self {
        Self {
            id: tiered.customer.id,
            name: tiered.customer.name,
            email: tiered.customer.email,
            annual_spend: tiered.customer.annual_spend,
            last_purchase_date: tiered.customer.last_purchase_date,
            tier: tiered.tier,
        }
    }
}

/// Acknowledgement body for a successful delete.
#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub message: String,
}

/// Query parameters for the list endpoint. `name` wins if both are given.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub name: Option<String>,
    pub email: Option<String>,
}

// ============================================================================
// Boundary validation
// ============================================================================

/// Rejections produced by the validation pass. All map to 400.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("the 'id' field must not be included in the request body")]
    IdNotAllowed,
    #[error("customer 'name' is required")]
    MissingName,
    #[error("customer 'email' is required")]
    MissingEmail,
    #[error("invalid name: {0}")]
    Name(#[from] CustomerNameError),
    #[error("invalid email: {0}")]
    Email(#[from] EmailError),
    #[error("'annualSpend' must not be negative")]
    NegativeSpend,
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        Self::BadRequest(err.to_string())
    }
}

fn validate_spend(spend: Option<Decimal>) -> std::result::Result<Option<Decimal>, ValidationError> {
    if spend.is_some_and(|s| s < Decimal::ZERO) {
        return Err(ValidationError::NegativeSpend);
    }
    Ok(spend)
}

impl TryFrom<CreateCustomerRequest> for NewCustomer {
    type Error = ValidationError;

    fn try_from(payload: CreateCustomerRequest) -> std::result::Result<Self, Self::Error> {
        if payload.id.is_some() {
            return Err(ValidationError::IdNotAllowed);
        }

        let name = payload.name.ok_or(ValidationError::MissingName)?;
        let name = CustomerName::parse(&name)?;
        let email = payload.email.ok_or(ValidationError::MissingEmail)?;
        let email = Email::parse(&email)?;
        let annual_spend = validate_spend(payload.annual_spend)?;

        Ok(Self {
            name,
            email,
            annual_spend,
            last_purchase_date: payload.last_purchase_date,
        })
    }
}

impl TryFrom<UpdateCustomerRequest> for CustomerUpdate {
    type Error = ValidationError;

    fn try_from(payload: UpdateCustomerRequest) -> std::result::Result<Self, Self::Error> {
        let name = payload
            .name
            .as_deref()
            .map(CustomerName::parse)
            .transpose()?;
        let email = payload.email.as_deref().map(Email::parse).transpose()?;
        let annual_spend = validate_spend(payload.annual_spend)?;

        Ok(Self {
            name,
            email,
            annual_spend,
            last_purchase_date: payload.last_purchase_date,
        })
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// Create a new customer.
///
/// POST /customers
///
/// # Errors
///
/// 400 if the payload supplies an id, omits name or email, or carries a
/// malformed name, email, or negative spend.
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<CreateCustomerRequest>,
) -> Result<(StatusCode, Json<CustomerResponse>)> {
    let new: NewCustomer = payload.try_into()?;
    let created = state.customers().create(new).await?;
    Ok((StatusCode::CREATED, Json(created.into())))
}

/// List customers, optionally filtered by exact name or email.
///
/// GET /customers[?name=|?email=]
///
/// Zero matches yields an empty array, never an error.
///
/// # Errors
///
/// 400 if the `email` parameter is malformed.
pub async fn index(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<CustomerResponse>>> {
    let customers = if let Some(name) = params.name.as_deref() {
        state.customers().list_by_name(name).await?
    } else if let Some(email) = params.email.as_deref() {
        let email =
            Email::parse(email).map_err(|e| AppError::BadRequest(format!("invalid email: {e}")))?;
        state.customers().list_by_email(&email).await?
    } else {
        state.customers().list().await?
    };

    Ok(Json(
        customers.into_iter().map(CustomerResponse::from).collect(),
    ))
}

/// Get a customer by id.
///
/// GET /customers/{id}
///
/// # Errors
///
/// 404 if no customer has this id.
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<CustomerId>,
) -> Result<Json<CustomerResponse>> {
    let customer = state.customers().get(id).await?;
    Ok(Json(customer.into()))
}

/// Partially update a customer.
///
/// PUT /customers/{id}
///
/// # Errors
///
/// 404 if no customer has this id; 400 if a supplied field is malformed.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<CustomerId>,
    Json(payload): Json<UpdateCustomerRequest>,
) -> Result<Json<CustomerResponse>> {
    let changes: CustomerUpdate = payload.try_into()?;
    let updated = state.customers().update(id, changes).await?;
    Ok(Json(updated.into()))
}

/// Delete a customer by id.
///
/// DELETE /customers/{id}
///
/// # Errors
///
/// 404 if no customer has this id.
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<CustomerId>,
) -> Result<Json<DeleteResponse>> {
    state.customers().delete(id).await?;
    Ok(Json(DeleteResponse {
        message: "Customer deleted successfully".to_owned(),
    }))
}
