use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::cart::errors::CartError;
use business::domain::cart::model::Cart;
use business::domain::cart::use_cases::add::{AddToCartParams, AddToCartUseCase};
use business::domain::cart::use_cases::clear::ClearCartUseCase;
use business::domain::cart::use_cases::decrement::{
    DecrementCartItemParams, DecrementCartItemUseCase,
};
use business::domain::cart::use_cases::get::GetCartUseCase;
use business::domain::cart::use_cases::increment::{
    IncrementCartItemParams, IncrementCartItemUseCase,
};
use business::domain::cart::use_cases::remove::{RemoveFromCartParams, RemoveFromCartUseCase};
use business::domain::cart::use_cases::set_quantity::{
    SetCartItemQuantityParams, SetCartItemQuantityUseCase,
};
use business::domain::shared::value_objects::ProductId;

use crate::api::cart::dto::{AddToCartRequest, CartResponse, SetQuantityRequest};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct CartApi {
    get_use_case: Arc<dyn GetCartUseCase>,
    add_use_case: Arc<dyn AddToCartUseCase>,
    remove_use_case: Arc<dyn RemoveFromCartUseCase>,
    set_quantity_use_case: Arc<dyn SetCartItemQuantityUseCase>,
    increment_use_case: Arc<dyn IncrementCartItemUseCase>,
    decrement_use_case: Arc<dyn DecrementCartItemUseCase>,
    clear_use_case: Arc<dyn ClearCartUseCase>,
}

impl CartApi {
    pub fn new(
        get_use_case: Arc<dyn GetCartUseCase>,
        add_use_case: Arc<dyn AddToCartUseCase>,
        remove_use_case: Arc<dyn RemoveFromCartUseCase>,
        set_quantity_use_case: Arc<dyn SetCartItemQuantityUseCase>,
        increment_use_case: Arc<dyn IncrementCartItemUseCase>,
        decrement_use_case: Arc<dyn DecrementCartItemUseCase>,
        clear_use_case: Arc<dyn ClearCartUseCase>,
    ) -> Self {
        Self {
            get_use_case,
            add_use_case,
            remove_use_case,
            set_quantity_use_case,
            increment_use_case,
            decrement_use_case,
            clear_use_case,
        }
    }

    fn respond(result: Result<Cart, CartError>) -> CartMutationResponse {
        match result {
            Ok(cart) => CartMutationResponse::Ok(Json(cart.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CartMutationResponse::BadRequest(json),
                    409 => CartMutationResponse::Conflict(json),
                    _ => CartMutationResponse::InternalError(json),
                }
            }
        }
    }
}

/// Shopping cart API
///
/// Every mutation is persisted before the response is sent. Operations on a
/// product that is not in the cart leave it unchanged. While a checkout is
/// settling, mutations answer 409 and the cart stays as it was.
#[OpenApi]
impl CartApi {
    /// Get the cart
    ///
    /// Returns the lines with their total and item count.
    #[oai(path = "/cart", method = "get", tag = "ApiTags::Cart")]
    async fn get(&self) -> Json<CartResponse> {
        Json(self.get_use_case.execute().into())
    }

    /// Add a product
    ///
    /// Merges into the existing line for the same product id.
    #[oai(path = "/cart/items", method = "post", tag = "ApiTags::Cart")]
    async fn add(&self, body: Json<AddToCartRequest>) -> CartMutationResponse {
        let product = match body.0.product.into_domain() {
            Ok(product) => product,
            Err(err) => {
                let (_status, json) = err.into_error_response();
                return CartMutationResponse::BadRequest(json);
            }
        };

        Self::respond(self.add_use_case.execute(AddToCartParams {
            product,
            quantity: body.0.quantity.unwrap_or(1),
        }))
    }

    /// Set a line quantity
    #[oai(path = "/cart/items/:id", method = "put", tag = "ApiTags::Cart")]
    async fn set_quantity(
        &self,
        id: Path<i64>,
        body: Json<SetQuantityRequest>,
    ) -> CartMutationResponse {
        Self::respond(
            self.set_quantity_use_case
                .execute(SetCartItemQuantityParams {
                    product_id: ProductId::new(id.0),
                    quantity: body.0.quantity,
                }),
        )
    }

    /// Remove a line
    #[oai(path = "/cart/items/:id", method = "delete", tag = "ApiTags::Cart")]
    async fn remove(&self, id: Path<i64>) -> CartMutationResponse {
        Self::respond(self.remove_use_case.execute(RemoveFromCartParams {
            product_id: ProductId::new(id.0),
        }))
    }

    /// Add one unit to a line
    #[oai(
        path = "/cart/items/:id/increment",
        method = "post",
        tag = "ApiTags::Cart"
    )]
    async fn increment(&self, id: Path<i64>) -> CartMutationResponse {
        Self::respond(self.increment_use_case.execute(IncrementCartItemParams {
            product_id: ProductId::new(id.0),
        }))
    }

    /// Take one unit from a line
    ///
    /// A line at quantity 1 is removed.
    #[oai(
        path = "/cart/items/:id/decrement",
        method = "post",
        tag = "ApiTags::Cart"
    )]
    async fn decrement(&self, id: Path<i64>) -> CartMutationResponse {
        Self::respond(self.decrement_use_case.execute(DecrementCartItemParams {
            product_id: ProductId::new(id.0),
        }))
    }

    /// Empty the cart
    #[oai(path = "/cart", method = "delete", tag = "ApiTags::Cart")]
    async fn clear(&self) -> ClearCartResponse {
        match self.clear_use_case.execute() {
            Ok(()) => ClearCartResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    409 => ClearCartResponse::Conflict(json),
                    _ => ClearCartResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CartMutationResponse {
    #[oai(status = 200)]
    Ok(Json<CartResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum ClearCartResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
