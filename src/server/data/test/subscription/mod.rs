use crate::server::data::subscription::SubscriptionRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_course_ids_for_user;
mod remove_course_from_all;
