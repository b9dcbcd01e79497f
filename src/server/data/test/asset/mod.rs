use crate::server::{data::asset::AssetStore, model::asset::AssetRemoval};
use std::path::Path;
use test_utils::builder::TestBuilder;

mod delete_all;
