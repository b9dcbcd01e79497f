pub use super::course::Entity as Course;
pub use super::lecture::Entity as Lecture;
pub use super::user::Entity as User;
pub use super::user_subscription::Entity as UserSubscription;
pub use super::workshop::Entity as Workshop;
