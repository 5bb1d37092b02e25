use tiffin_types::{OrderId, OrderStatus, OwnerId};

/// Errors from structured store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The requested order does not exist.
    #[error("order not found: {0}")]
    OrderNotFound(OrderId),

    /// The requested hotel does not exist.
    #[error("hotel not found: {0}")]
    HotelNotFound(OwnerId),

    /// A conditional status transition found a different current status.
    #[error("order {id}: expected status {expected}, found {actual}")]
    StatusConflict {
        id: OrderId,
        expected: OrderStatus,
        actual: OrderStatus,
    },

    /// The requested transition is not legal regardless of timing.
    #[error("order {id}: illegal transition {from} -> {to}")]
    IllegalTransition {
        id: OrderId,
        from: OrderStatus,
        to: OrderStatus,
    },

    /// The storage backend is unreachable or unusable.
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
