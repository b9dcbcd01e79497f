//! Workshop repository. Workshops are only counted for stats.

use sea_orm::{ConnectionTrait, DbErr, EntityTrait, PaginatorTrait};

pub struct WorkshopRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> WorkshopRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Workshop::find().count(self.db).await
    }
}
