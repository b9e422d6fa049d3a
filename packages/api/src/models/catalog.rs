//! Departments and the service catalog.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DepartmentType {
    #[default]
    #[serde(rename = "OPERATIONAL", alias = "operational")]
    Operational,
    #[serde(rename = "SUPPORT", alias = "support")]
    Support,
}

impl DepartmentType {
    pub const ALL: [DepartmentType; 2] = [DepartmentType::Operational, DepartmentType::Support];

    pub fn as_str(&self) -> &'static str {
        match self {
            DepartmentType::Operational => "operational",
            DepartmentType::Support => "support",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DepartmentType::Operational => "Operational",
            DepartmentType::Support => "Support",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(value))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DepartmentResponse {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub kind: DepartmentType,
    #[serde(default)]
    pub active: bool,
}

/// Create/update body. The API expects the upper-case type name.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct DepartmentRequest {
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: DepartmentType,
}

impl From<&DepartmentResponse> for DepartmentRequest {
    fn from(d: &DepartmentResponse) -> Self {
        Self {
            name: d.name.clone(),
            description: d.description.clone().unwrap_or_default(),
            kind: d.kind,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ServiceResponse {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub department_id: String,
    #[serde(default)]
    pub department_name: Option<String>,
    #[serde(default)]
    pub requirements: Option<String>,
    #[serde(default)]
    pub active: bool,
}

#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ServiceRequest {
    pub name: String,
    pub description: String,
    pub department_id: String,
    pub requirements: String,
    pub active: bool,
}

impl From<&ServiceResponse> for ServiceRequest {
    fn from(s: &ServiceResponse) -> Self {
        Self {
            name: s.name.clone(),
            description: s.description.clone().unwrap_or_default(),
            department_id: s.department_id.clone(),
            requirements: s.requirements.clone().unwrap_or_default(),
            active: s.active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_department_type_case_mapping() {
        let json = r#"{"id":"d1","name":"Taxpayer Services","description":null,"type":"support","active":true}"#;
        let dept: DepartmentResponse = serde_json::from_str(json).unwrap();
        assert_eq!(dept.kind, DepartmentType::Support);

        let body = serde_json::to_value(DepartmentRequest::from(&dept)).unwrap();
        assert_eq!(body["type"], "SUPPORT");
        assert_eq!(body["description"], "");
        assert_eq!(DepartmentType::parse("Operational"), Some(DepartmentType::Operational));
        assert_eq!(DepartmentType::parse("other"), None);
    }

    #[test]
    fn test_service_request_from_response() {
        let json = r#"{"id":"s1","name":"VAT Filing","description":"Monthly","departmentId":"d1","departmentName":"Domestic Taxes","requirements":null,"active":true}"#;
        let service: ServiceResponse = serde_json::from_str(json).unwrap();
        let body = serde_json::to_value(ServiceRequest::from(&service)).unwrap();
        assert_eq!(body["departmentId"], "d1");
        assert_eq!(body["requirements"], "");
        assert_eq!(body["active"], true);
    }
}
