use super::{exists, form, write_asset};
use crate::server::{
    data::{asset::AssetStore, lecture::LectureRepository},
    error::{validation::ValidationError, AppError},
    model::asset::{AssetRemoval, StagedAsset},
    service::{course::CourseService, lecture::LectureService},
};
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod race;
