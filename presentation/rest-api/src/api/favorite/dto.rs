use poem_openapi::Object;
use uuid::Uuid;

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct AddFavoriteRequest {
    pub product_id: Uuid,
}
