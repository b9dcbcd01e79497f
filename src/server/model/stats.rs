use crate::model::stats::StatsDto;

/// Row counts across the main collections.
///
/// Each count is taken by its own query, so the four numbers are not a
/// point-in-time snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    pub courses: u64,
    pub lectures: u64,
    pub users: u64,
    pub workshops: u64,
}

impl Stats {
    pub fn into_dto(self) -> StatsDto {
        StatsDto {
            courses: self.courses,
            lectures: self.lectures,
            users: self.users,
            workshops: self.workshops,
        }
    }
}
