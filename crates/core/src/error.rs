use crate::types::BuyerId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: BuyerId },

    #[error("Forbidden: {0}")]
    Forbidden(String),
}
