mod dashboard;
pub use dashboard::StaffDashboard;

mod appointments;
pub use appointments::StaffAppointments;

mod hours;
pub use hours::StaffHours;

mod performance;
pub use performance::StaffPerformance;

mod feedback;
pub use feedback::StaffFeedback;
