mod dashboard;
pub use dashboard::ClientDashboard;

mod appointments;
pub use appointments::ClientAppointments;

mod schedule;
pub use schedule::Schedule;

mod notifications;
pub use notifications::ClientNotifications;

mod history;
pub use history::ClientHistory;
