use serde::{Deserialize, Serialize};

/// A read-only employee record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub first_name: String,
    pub surname: String,
    pub employee_number: u32,
}

/// The fixed employee directory served by `/employees`.
pub fn directory() -> Vec<Employee> {
    vec![Employee {
        first_name: "Jakub".to_string(),
        surname: "Stas".to_string(),
        employee_number: 1,
    }]
}
