use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct StatsDto {
    pub courses: u64,
    pub lectures: u64,
    pub users: u64,
    pub workshops: u64,
}
