use crate::{
    model::user::UpdateProfileDto,
    server::{
        error::AppError,
        model::user::{Role, UpdateProfileParam, UpdateRoleParam},
        service::user::UserService,
    },
};
use test_utils::{builder::TestBuilder, factory};

mod get_all_except;
mod update_profile;
