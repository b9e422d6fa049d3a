//! # Client-side search and filtering
//!
//! Every list screen narrows its locally loaded list with a free-text query
//! plus one categorical filter. Both are pure functions of their inputs:
//!
//! - the query is trimmed and matched case-insensitively as a substring of any
//!   of the screen's searchable fields (an empty query matches everything);
//! - the categorical filter is an equality test, where `all` (or `None`)
//!   passes every item.
//!
//! Nothing here talks to the server.

use chrono::{Duration, NaiveDate};

use api::models::{
    AppointmentResponse, AppointmentStatus, ClientResponse, Feedback, NotificationResponse,
    StaffResponse,
};

use crate::time::parse_date;

pub const ALL: &str = "all";

/// True when `query` is empty or is contained in one of `fields`.
pub fn matches_query<'a>(query: &str, fields: impl IntoIterator<Item = &'a str>) -> bool {
    let needle = query.trim().to_lowercase();
    needle.is_empty()
        || fields
            .into_iter()
            .any(|field| field.to_lowercase().contains(&needle))
}

/// `all` passes everything; otherwise case-insensitive equality.
pub fn matches_choice(choice: &str, value: &str) -> bool {
    choice == ALL || choice.eq_ignore_ascii_case(value)
}

/// Status picked in a status `<select>`; `None` means all.
pub fn parse_status_filter(value: &str) -> Option<AppointmentStatus> {
    AppointmentStatus::FILTERABLE
        .into_iter()
        .find(|s| s.as_str() == value)
}

fn matches_status(filter: Option<AppointmentStatus>, status: AppointmentStatus) -> bool {
    filter.map_or(true, |wanted| wanted == status)
}

pub fn count_status(list: &[AppointmentResponse], status: AppointmentStatus) -> usize {
    list.iter().filter(|a| a.status == status).count()
}

/// Appointments dated from `from` up to and including `days` days later.
pub fn count_dated_within(list: &[AppointmentResponse], from: NaiveDate, days: i64) -> usize {
    let until = from + Duration::days(days);
    list.iter()
        .filter_map(|a| parse_date(&a.date))
        .filter(|d| *d >= from && *d <= until)
        .count()
}

/// Client's own appointments, searched by type and office.
pub fn client_appointments(
    list: &[AppointmentResponse],
    query: &str,
    status: Option<AppointmentStatus>,
) -> Vec<AppointmentResponse> {
    list.iter()
        .filter(|a| matches_status(status, a.status))
        .filter(|a| matches_query(query, [a.appointment_type.as_str(), a.location.as_str()]))
        .cloned()
        .collect()
}

/// Staff queue, searched by client, service and location.
pub fn staff_appointments(
    list: &[AppointmentResponse],
    query: &str,
    status: Option<AppointmentStatus>,
) -> Vec<AppointmentResponse> {
    list.iter()
        .filter(|a| matches_status(status, a.status))
        .filter(|a| {
            matches_query(
                query,
                [
                    a.client_name.as_deref().unwrap_or_default(),
                    a.appointment_type.as_str(),
                    a.location.as_str(),
                ],
            )
        })
        .cloned()
        .collect()
}

/// Admin overview, searched by client name, client phone and type.
pub fn admin_appointments(
    list: &[AppointmentResponse],
    query: &str,
    status: Option<AppointmentStatus>,
) -> Vec<AppointmentResponse> {
    list.iter()
        .filter(|a| matches_status(status, a.status))
        .filter(|a| {
            matches_query(
                query,
                [
                    a.client_name.as_deref().unwrap_or_default(),
                    a.client_phone.as_deref().unwrap_or_default(),
                    a.appointment_type.as_str(),
                ],
            )
        })
        .cloned()
        .collect()
}

/// Staff directory, searched by name, e-mail and phone.
pub fn staff_members(list: &[StaffResponse], query: &str, department: &str) -> Vec<StaffResponse> {
    list.iter()
        .filter(|s| matches_choice(department, s.department.as_deref().unwrap_or_default()))
        .filter(|s| {
            matches_query(
                query,
                [
                    s.full_name.as_str(),
                    s.email.as_str(),
                    s.phone.as_deref().unwrap_or_default(),
                ],
            )
        })
        .cloned()
        .collect()
}

/// Distinct, sorted department names present in a staff list.
pub fn staff_departments(list: &[StaffResponse]) -> Vec<String> {
    let mut names: Vec<String> = list
        .iter()
        .filter_map(|s| s.department.clone())
        .filter(|d| !d.trim().is_empty())
        .collect();
    names.sort();
    names.dedup();
    names
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveFilter {
    #[default]
    All,
    Active,
    Inactive,
}

impl ActiveFilter {
    pub const ALL: [ActiveFilter; 3] = [ActiveFilter::All, ActiveFilter::Active, ActiveFilter::Inactive];

    pub fn as_str(&self) -> &'static str {
        match self {
            ActiveFilter::All => ALL,
            ActiveFilter::Active => "active",
            ActiveFilter::Inactive => "inactive",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ActiveFilter::All => "All",
            ActiveFilter::Active => "Active",
            ActiveFilter::Inactive => "Inactive",
        }
    }

    pub fn parse(value: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|f| f.as_str() == value)
            .unwrap_or_default()
    }

    pub fn accepts(&self, active: bool) -> bool {
        match self {
            ActiveFilter::All => true,
            ActiveFilter::Active => active,
            ActiveFilter::Inactive => !active,
        }
    }
}

/// Client accounts, searched by name, e-mail and phone.
pub fn clients(list: &[ClientResponse], query: &str, filter: ActiveFilter) -> Vec<ClientResponse> {
    list.iter()
        .filter(|c| filter.accepts(c.active))
        .filter(|c| {
            matches_query(
                query,
                [
                    c.full_name.as_str(),
                    c.email.as_str(),
                    c.phone.as_deref().unwrap_or_default(),
                ],
            )
        })
        .cloned()
        .collect()
}

pub fn notifications(list: &[NotificationResponse], kind: &str) -> Vec<NotificationResponse> {
    list.iter()
        .filter(|n| matches_choice(kind, &n.kind))
        .cloned()
        .collect()
}

pub fn count_kind(list: &[NotificationResponse], kind: &str) -> usize {
    list.iter().filter(|n| n.kind == kind).count()
}

/// Feedback with exactly `rating` stars, or all of it.
pub fn feedback(list: &[Feedback], rating: Option<u8>) -> Vec<Feedback> {
    list.iter()
        .filter(|f| rating.map_or(true, |r| f.rating == r))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(name: &str, email: &str, active: bool) -> ClientResponse {
        ClientResponse {
            id: name.to_lowercase(),
            full_name: name.into(),
            email: email.into(),
            phone: Some("+250788000000".into()),
            active,
            created_at: "2025-01-01".into(),
            appointments: 0,
        }
    }

    fn appointment(id: &str, kind: &str, location: &str, status: AppointmentStatus) -> AppointmentResponse {
        AppointmentResponse {
            id: id.into(),
            service_id: None,
            service_name: None,
            department_id: None,
            department_name: None,
            appointment_type: kind.into(),
            date: "2025-03-04".into(),
            time: "09:00".into(),
            location: location.into(),
            status,
            client_name: Some("Jean Habimana".into()),
            client_email: None,
            client_phone: Some("0788123456".into()),
            staff_name: None,
            staff_email: None,
        }
    }

    #[test]
    fn test_active_filter_ignores_query_casing() {
        let list = vec![
            client("Jean", "jean@example.rw", true),
            client("Marie", "marie@example.rw", false),
        ];
        for query in ["", "JEAN", "jean", "Example.RW"] {
            let out = clients(&list, query, ActiveFilter::Active);
            assert_eq!(out.len(), 1, "query {query:?}");
            assert_eq!(out[0].full_name, "Jean");
        }
        assert_eq!(clients(&list, "marie", ActiveFilter::Inactive).len(), 1);
        assert_eq!(clients(&list, "", ActiveFilter::All).len(), 2);
        assert!(clients(&list, "nobody", ActiveFilter::All).is_empty());
    }

    #[test]
    fn test_count_dated_within_is_inclusive() {
        let mut list = vec![
            appointment("1", "Tax", "Main", AppointmentStatus::Pending),
            appointment("2", "Tax", "Main", AppointmentStatus::Pending),
            appointment("3", "Tax", "Main", AppointmentStatus::Pending),
        ];
        list[1].date = "2025-03-11".into();
        list[2].date = "2025-03-12".into();
        let from = NaiveDate::from_ymd_opt(2025, 3, 4).unwrap();
        assert_eq!(count_dated_within(&list, from, 0), 1);
        assert_eq!(count_dated_within(&list, from, 7), 2);
        list[0].date = "garbage".into();
        assert_eq!(count_dated_within(&list, from, 7), 1);
    }

    #[test]
    fn test_query_is_trimmed_substring() {
        assert!(matches_query("  tax ", ["Tax Consultation"]));
        assert!(matches_query("", ["anything"]));
        assert!(!matches_query("audit", ["Tax Consultation", "Main Office"]));
    }

    #[test]
    fn test_client_appointments_status_and_search() {
        let list = vec![
            appointment("1", "Tax Consultation", "Main Office", AppointmentStatus::Confirmed),
            appointment("2", "License Renewal", "Kicukiro Office", AppointmentStatus::Pending),
            appointment("3", "Audit Meeting", "Main Office", AppointmentStatus::Unknown),
        ];
        assert_eq!(client_appointments(&list, "main", None).len(), 2);
        assert_eq!(
            client_appointments(&list, "main", parse_status_filter("confirmed"))[0].id,
            "1"
        );
        assert!(client_appointments(&list, "", parse_status_filter("cancelled")).is_empty());
        assert_eq!(parse_status_filter(ALL), None);
        assert_eq!(parse_status_filter("unknown"), None);
        assert_eq!(count_status(&list, AppointmentStatus::Pending), 1);
    }

    #[test]
    fn test_admin_search_covers_phone() {
        let list = vec![appointment("1", "Audit Meeting", "Main Office", AppointmentStatus::Pending)];
        assert_eq!(admin_appointments(&list, "0788123", None).len(), 1);
        assert_eq!(staff_appointments(&list, "habimana", None).len(), 1);
        assert!(staff_appointments(&list, "0788123", None).is_empty());
    }

    #[test]
    fn test_unnamed_client_not_matched_by_placeholder() {
        let mut list = vec![
            appointment("1", "Audit Meeting", "Main Office", AppointmentStatus::Pending),
            appointment("2", "Tax Consultation", "Main Office", AppointmentStatus::Pending),
        ];
        list[1].client_name = None;
        assert_eq!(list[1].client_label(), "Client");
        let staff = staff_appointments(&list, "client", None);
        assert!(staff.is_empty());
        assert!(admin_appointments(&list, "CLIENT", None).is_empty());
        assert_eq!(admin_appointments(&list, "", None).len(), 2);
    }

    #[test]
    fn test_staff_department_filter() {
        let staff = |name: &str, dept: Option<&str>| StaffResponse {
            id: name.into(),
            full_name: name.into(),
            email: format!("{}@example.rw", name.to_lowercase()),
            department: dept.map(Into::into),
            phone: None,
            status: "active".into(),
            appointments_handled: 0,
        };
        let list = vec![
            staff("Alice", Some("Customs")),
            staff("Bob", Some("Domestic Taxes")),
            staff("Carol", None),
            staff("Dan", Some("Customs")),
        ];
        assert_eq!(staff_members(&list, "", "Customs").len(), 2);
        assert_eq!(staff_members(&list, "bob@", ALL).len(), 1);
        assert_eq!(staff_departments(&list), vec!["Customs", "Domestic Taxes"]);
    }

    #[test]
    fn test_notification_and_feedback_filters() {
        let note = |id: &str, kind: &str| NotificationResponse {
            id: id.into(),
            kind: kind.into(),
            title: "t".into(),
            message: "m".into(),
            read: false,
            created_at: String::new(),
        };
        let list = vec![note("1", "reminder"), note("2", "alert"), note("3", "reminder")];
        assert_eq!(notifications(&list, "reminder").len(), 2);
        assert_eq!(notifications(&list, ALL).len(), 3);
        assert_eq!(count_kind(&list, "alert"), 1);

        let fb = |rating| Feedback {
            client: "c".into(),
            rating,
            comment: String::new(),
            date: "2025-01-01".into(),
        };
        let list = vec![fb(5), fb(4), fb(5)];
        assert_eq!(feedback(&list, Some(5)).len(), 2);
        assert_eq!(feedback(&list, None).len(), 3);
    }
}
