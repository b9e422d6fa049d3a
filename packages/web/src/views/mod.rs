mod layouts;
pub use layouts::{AdminLayout, ClientLayout, RoleFrame, StaffLayout};

mod home;
pub use home::Home;

mod login;
pub use login::Login;

mod signup;
pub use signup::Signup;

mod password;
pub use password::{ForgotPassword, ResetPassword};

mod dashboard;
pub use dashboard::Dashboard;

mod not_found;
pub use not_found::NotFound;

pub mod admin;
pub mod client;
pub mod staff;
