mod user;

pub use user::{SignUpOption, User, UserStatus};
