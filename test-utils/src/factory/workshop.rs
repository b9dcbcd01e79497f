//! Workshop factory for creating test workshop entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a workshop with default values.
pub async fn create_workshop(db: &DatabaseConnection) -> Result<entity::workshop::Model, DbErr> {
    let id = next_id();

    entity::workshop::ActiveModel {
        title: ActiveValue::Set(format!("Workshop {}", id)),
        description: ActiveValue::Set("Test workshop description".to_string()),
        image: ActiveValue::Set(None),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
