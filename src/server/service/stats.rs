use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        course::CourseRepository, lecture::LectureRepository, user::UserRepository,
        workshop::WorkshopRepository,
    },
    error::AppError,
    model::stats::Stats,
};

pub struct StatsService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StatsService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Counts courses, lectures, users and workshops.
    ///
    /// The counts are independent queries and may observe different moments when
    /// writes happen concurrently.
    pub async fn get_all(&self) -> Result<Stats, AppError> {
        Ok(Stats {
            courses: CourseRepository::new(self.db).count().await?,
            lectures: LectureRepository::new(self.db).count().await?,
            users: UserRepository::new(self.db).count().await?,
            workshops: WorkshopRepository::new(self.db).count().await?,
        })
    }
}
