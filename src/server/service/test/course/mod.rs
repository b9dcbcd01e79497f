use super::{exists, form, write_asset};
use crate::server::{
    data::{
        asset::AssetStore, course::CourseRepository, lecture::LectureRepository,
        subscription::SubscriptionRepository,
    },
    error::{validation::ValidationError, AppError},
    model::{asset::StagedAsset, course::CascadeOutcome},
    service::course::CourseService,
};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;

fn complete_form() -> std::collections::HashMap<String, String> {
    form(&[
        ("title", "Rust for Services"),
        ("description", "Build web backends"),
        ("createdBy", "Ferris"),
        ("duration", "12"),
        ("price", "49.5"),
        ("category", "Programming"),
    ])
}
