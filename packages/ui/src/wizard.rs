//! # Booking wizard state
//!
//! A fixed four-step linear form:
//!
//! 1. appointment type
//! 2. date and time slot
//! 3. office location
//! 4. review, optional notes, submit
//!
//! [`BookingWizard::next`] refuses to leave a step whose inputs are missing.
//! [`BookingWizard::request`] turns a completed wizard into the API payload,
//! converting the 12-hour slot label into the API's 24-hour time.

use api::models::AppointmentRequest;

use crate::time::to_24_hour;

pub const STEP_COUNT: u8 = 4;

pub struct AppointmentType {
    pub id: &'static str,
    pub label: &'static str,
    pub description: &'static str,
}

pub struct Office {
    pub id: &'static str,
    pub name: &'static str,
    pub address: &'static str,
}

pub static APPOINTMENT_TYPES: [AppointmentType; 6] = [
    AppointmentType {
        id: "tax-consultation",
        label: "Tax Consultation",
        description: "Get expert advice on tax matters",
    },
    AppointmentType {
        id: "license-renewal",
        label: "License Renewal",
        description: "Renew your business license",
    },
    AppointmentType {
        id: "compliance-review",
        label: "Compliance Review",
        description: "Review compliance status",
    },
    AppointmentType {
        id: "annual-filing",
        label: "Annual Filing",
        description: "Submit your annual filing",
    },
    AppointmentType {
        id: "document-submission",
        label: "Document Submission",
        description: "Submit required documents",
    },
    AppointmentType {
        id: "audit-meeting",
        label: "Audit Meeting",
        description: "Discuss audit matters",
    },
];

pub static OFFICE_LOCATIONS: [Office; 4] = [
    Office {
        id: "kicukiro",
        name: "Kicukiro Office",
        address: "Kicukiro, Kigali",
    },
    Office {
        id: "main",
        name: "Main Office",
        address: "Central Business District, Kigali",
    },
    Office {
        id: "north",
        name: "Northern Office",
        address: "Northern Region, Rwanda",
    },
    Office {
        id: "south",
        name: "Southern Office",
        address: "Southern Region, Rwanda",
    },
];

pub const TIME_SLOTS: [&str; 18] = [
    "08:00 AM", "08:30 AM", "09:00 AM", "09:30 AM", "10:00 AM", "10:30 AM",
    "11:00 AM", "11:30 AM", "12:00 PM", "01:00 PM", "01:30 PM", "02:00 PM",
    "02:30 PM", "03:00 PM", "03:30 PM", "04:00 PM", "04:30 PM", "05:00 PM",
];

/// Advancing was refused because the current step is missing input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Please complete step {step}: all fields are required to proceed")]
pub struct StepIncomplete {
    pub step: u8,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BookingWizard {
    step: u8,
    pub appointment_type: Option<&'static str>,
    pub date: String,
    pub time: Option<&'static str>,
    pub office: Option<&'static str>,
    pub notes: String,
}

impl Default for BookingWizard {
    fn default() -> Self {
        Self {
            step: 1,
            appointment_type: None,
            date: String::new(),
            time: None,
            office: None,
            notes: String::new(),
        }
    }
}

impl BookingWizard {
    pub fn step(&self) -> u8 {
        self.step
    }

    pub fn is_step_complete(&self) -> bool {
        match self.step {
            1 => self.appointment_type.is_some(),
            2 => !self.date.trim().is_empty() && self.time.is_some(),
            3 => self.office.is_some(),
            _ => true,
        }
    }

    pub fn next(&mut self) -> Result<u8, StepIncomplete> {
        if !self.is_step_complete() {
            return Err(StepIncomplete { step: self.step });
        }
        self.step = (self.step + 1).min(STEP_COUNT);
        Ok(self.step)
    }

    pub fn previous(&mut self) -> u8 {
        self.step = self.step.saturating_sub(1).max(1);
        self.step
    }

    pub fn select_type(&mut self, id: &str) {
        self.appointment_type = APPOINTMENT_TYPES.iter().find(|t| t.id == id).map(|t| t.id);
    }

    pub fn select_time(&mut self, slot: &str) {
        self.time = TIME_SLOTS.iter().copied().find(|s| *s == slot);
    }

    pub fn select_office(&mut self, id: &str) {
        self.office = OFFICE_LOCATIONS.iter().find(|o| o.id == id).map(|o| o.id);
    }

    pub fn type_label(&self) -> &'static str {
        self.appointment_type
            .and_then(|id| APPOINTMENT_TYPES.iter().find(|t| t.id == id))
            .map_or("", |t| t.label)
    }

    pub fn office_name(&self) -> &'static str {
        self.office
            .and_then(|id| OFFICE_LOCATIONS.iter().find(|o| o.id == id))
            .map_or("", |o| o.name)
    }

    /// The payload to submit, or `None` while any required field is missing.
    pub fn request(&self) -> Option<AppointmentRequest> {
        self.appointment_type?;
        self.office?;
        if self.date.trim().is_empty() {
            return None;
        }
        let notes = self.notes.trim();
        Some(AppointmentRequest {
            appointment_type: self.type_label().to_string(),
            date: self.date.trim().to_string(),
            time: to_24_hour(self.time?)?,
            location: self.office_name().to_string(),
            notes: (!notes.is_empty()).then(|| notes.to_string()),
            staff_id: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_sizes() {
        assert_eq!(APPOINTMENT_TYPES.len(), 6);
        assert_eq!(OFFICE_LOCATIONS.len(), 4);
        assert_eq!(TIME_SLOTS.len(), 18);
        assert!(TIME_SLOTS.iter().all(|s| to_24_hour(s).is_some()));
    }

    #[test]
    fn test_each_step_gates_advancing() {
        let mut wizard = BookingWizard::default();
        assert_eq!(wizard.next(), Err(StepIncomplete { step: 1 }));

        wizard.select_type("audit-meeting");
        assert_eq!(wizard.next(), Ok(2));

        wizard.date = "2025-06-10".into();
        assert_eq!(wizard.next(), Err(StepIncomplete { step: 2 }));
        wizard.date.clear();
        wizard.select_time("02:30 PM");
        assert_eq!(wizard.next(), Err(StepIncomplete { step: 2 }));
        wizard.date = "2025-06-10".into();
        assert_eq!(wizard.next(), Ok(3));

        assert_eq!(wizard.next(), Err(StepIncomplete { step: 3 }));
        wizard.select_office("north");
        assert_eq!(wizard.next(), Ok(4));

        assert!(wizard.is_step_complete());
        assert_eq!(wizard.next(), Ok(4));
    }

    #[test]
    fn test_previous_stops_at_first_step() {
        let mut wizard = BookingWizard::default();
        assert_eq!(wizard.previous(), 1);
        wizard.select_type("annual-filing");
        wizard.next().unwrap();
        assert_eq!(wizard.previous(), 1);
        assert_eq!(wizard.previous(), 1);
    }

    #[test]
    fn test_unknown_selections_are_ignored() {
        let mut wizard = BookingWizard::default();
        wizard.select_type("haircut");
        wizard.select_time("07:00 AM");
        wizard.select_office("moon");
        assert!(wizard.appointment_type.is_none());
        assert!(wizard.time.is_none());
        assert!(wizard.office.is_none());
    }

    #[test]
    fn test_request_uses_labels_and_24_hour_time() {
        let mut wizard = BookingWizard::default();
        assert!(wizard.request().is_none());

        wizard.select_type("tax-consultation");
        wizard.date = "2025-06-10".into();
        wizard.select_time("02:30 PM");
        wizard.select_office("main");
        wizard.notes = "  bring receipts ".into();

        let req = wizard.request().unwrap();
        assert_eq!(req.appointment_type, "Tax Consultation");
        assert_eq!(req.time, "14:30");
        assert_eq!(req.location, "Main Office");
        assert_eq!(req.notes.as_deref(), Some("bring receipts"));

        wizard.notes = "   ".into();
        assert!(wizard.request().unwrap().notes.is_none());
    }
}
