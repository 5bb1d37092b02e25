//! HTTP handlers and their request/response DTOs.
//!
//! Handlers are thin: parse the request, hand the form to the matching
//! portal view, serialize the result. All failure mapping lives in
//! [`ApiError`].

use axum::extract::multipart::Field;
use axum::extract::{Multipart, Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tiffin_portal::{
    AddHotelForm, AddMenuItemForm, ImageUpload, PlaceOrderForm, RegisterForm,
};
use tiffin_types::{
    Customer, CustomerId, Hotel, MenuItem, MenuItemId, Order, OrderId, OwnerId, Role,
};

use crate::error::ApiError;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// DTOs
// ---------------------------------------------------------------------------

#[derive(Serialize, Deserialize)]
pub struct RoleResponse {
    pub tag: String,
    pub role: Role,
}

#[derive(Serialize, Deserialize)]
pub struct AddHotelRequest {
    pub name: String,
    pub description: String,
    pub owner_email: String,
    pub owner_password: String,
}

#[derive(Serialize, Deserialize)]
pub struct AddHotelResponse {
    pub owner_id: OwnerId,
    #[serde(flatten)]
    pub hotel: Hotel,
}

#[derive(Serialize, Deserialize)]
pub struct HotelRecord {
    pub owner_id: OwnerId,
    #[serde(flatten)]
    pub hotel: Hotel,
}

#[derive(Serialize, Deserialize)]
pub struct MenuRecord {
    pub id: MenuItemId,
    #[serde(flatten)]
    pub item: MenuItem,
}

#[derive(Serialize, Deserialize)]
pub struct OrderRecord {
    pub id: OrderId,
    #[serde(flatten)]
    pub order: Order,
}

#[derive(Deserialize)]
pub struct OwnerOrdersParams {
    pub owner_id: String,
}

#[derive(Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub mobile: String,
    pub village: String,
    pub address: String,
}

#[derive(Serialize, Deserialize)]
pub struct RegisterResponse {
    pub customer_id: CustomerId,
    #[serde(flatten)]
    pub customer: Customer,
}

#[derive(Serialize, Deserialize)]
pub struct PlaceOrderRequest {
    pub hotel_id: String,
    pub item: String,
    pub price: f64,
    pub mobile: String,
}

// ---------------------------------------------------------------------------
// Service endpoints
// ---------------------------------------------------------------------------

pub async fn health_handler() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

pub async fn info_handler() -> Json<Value> {
    Json(json!({
        "name": "tiffin-server",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Resolve an operator role tag. Unrecognized tags resolve to the customer
/// role rather than an error.
pub async fn resolve_role_handler(Path(tag): Path<String>) -> Json<RoleResponse> {
    let role = Role::from_tag(&tag);
    Json(RoleResponse { tag, role })
}

// ---------------------------------------------------------------------------
// Admin
// ---------------------------------------------------------------------------

pub async fn add_hotel_handler(
    State(state): State<AppState>,
    Json(req): Json<AddHotelRequest>,
) -> Result<(StatusCode, Json<AddHotelResponse>), ApiError> {
    let (owner_id, hotel) = state
        .portal
        .admin()
        .add_hotel(AddHotelForm {
            name: req.name,
            description: req.description,
            owner_email: req.owner_email,
            owner_password: req.owner_password,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(AddHotelResponse { owner_id, hotel })))
}

pub async fn list_orders_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<OrderRecord>>, ApiError> {
    let orders = state.portal.admin().list_orders()?;
    Ok(Json(
        orders
            .into_iter()
            .map(|(id, order)| OrderRecord { id, order })
            .collect(),
    ))
}

// ---------------------------------------------------------------------------
// Hotel owner
// ---------------------------------------------------------------------------

async fn text_field(field: Field<'_>) -> Result<String, ApiError> {
    field
        .text()
        .await
        .map_err(|e| ApiError::Multipart(e.to_string()))
}

/// Add a menu item from a multipart form with fields `owner_id`, `name`,
/// `price`, and `image` (the file part, carrying its content type).
pub async fn add_menu_item_handler(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<MenuRecord>), ApiError> {
    let mut owner_id = None;
    let mut name = None;
    let mut price = None;
    let mut image = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::Multipart(e.to_string()))?
    {
        let field_name = field.name().unwrap_or_default().to_string();
        match field_name.as_str() {
            "owner_id" => owner_id = Some(text_field(field).await?),
            "name" => name = Some(text_field(field).await?),
            "price" => {
                let raw = text_field(field).await?;
                let parsed = raw.trim().parse::<f64>().map_err(|e| {
                    ApiError::InvalidField {
                        field: "price",
                        reason: e.to_string(),
                    }
                })?;
                price = Some(parsed);
            }
            "image" => {
                let content_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::Multipart(e.to_string()))?
                    .to_vec();
                image = Some(ImageUpload {
                    bytes,
                    content_type,
                });
            }
            // Unknown parts are ignored, matching the form's tolerance.
            _ => {}
        }
    }

    let form = AddMenuItemForm {
        owner_id: owner_id.ok_or(ApiError::MissingField("owner_id"))?,
        name: name.ok_or(ApiError::MissingField("name"))?,
        price: price.ok_or(ApiError::MissingField("price"))?,
        image: image.ok_or(ApiError::MissingField("image"))?,
    };

    let (id, item) = state.portal.owner().add_menu_item(form).await?;
    Ok((StatusCode::CREATED, Json(MenuRecord { id, item })))
}

pub async fn owner_orders_handler(
    State(state): State<AppState>,
    Query(params): Query<OwnerOrdersParams>,
) -> Result<Json<Vec<OrderRecord>>, ApiError> {
    let orders = state.portal.owner().orders(&params.owner_id)?;
    Ok(Json(
        orders
            .into_iter()
            .map(|(id, order)| OrderRecord { id, order })
            .collect(),
    ))
}

pub async fn confirm_order_handler(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
) -> Result<Json<OrderRecord>, ApiError> {
    let id = OrderId::parse(&order_id)?;
    let order = state.portal.owner().confirm_order(&id)?;
    Ok(Json(OrderRecord { id, order }))
}

// ---------------------------------------------------------------------------
// Customer
// ---------------------------------------------------------------------------

pub async fn register_handler(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>), ApiError> {
    let (customer_id, customer) = state.portal.customer().register(RegisterForm {
        name: req.name,
        mobile: req.mobile,
        village: req.village,
        address: req.address,
    })?;
    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            customer_id,
            customer,
        }),
    ))
}

pub async fn browse_hotels_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<HotelRecord>>, ApiError> {
    let hotels = state.portal.customer().browse_hotels()?;
    Ok(Json(
        hotels
            .into_iter()
            .map(|(owner_id, hotel)| HotelRecord { owner_id, hotel })
            .collect(),
    ))
}

pub async fn browse_menu_handler(
    State(state): State<AppState>,
    Path(hotel_id): Path<String>,
) -> Result<Json<Vec<MenuRecord>>, ApiError> {
    let menu = state.portal.customer().browse_menu(&hotel_id)?;
    Ok(Json(
        menu.into_iter()
            .map(|(id, item)| MenuRecord { id, item })
            .collect(),
    ))
}

pub async fn place_order_handler(
    State(state): State<AppState>,
    Json(req): Json<PlaceOrderRequest>,
) -> Result<(StatusCode, Json<OrderRecord>), ApiError> {
    let (id, order) = state.portal.customer().place_order(PlaceOrderForm {
        hotel_id: req.hotel_id,
        item: req.item,
        price: req.price,
        mobile: req.mobile,
    })?;
    Ok((StatusCode::CREATED, Json(OrderRecord { id, order })))
}
