//! Add/edit form model and client-side validation

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use shared::models::{Department, Employee, EmployeeCreate, EmployeeUpdate};
use validator::ValidateEmail;

pub const NAME_MAX_CHARS: usize = 50;

static PHONE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+]?[(]?[0-9]{1,4}[)]?[-\s.]?[(]?[0-9]{1,4}[)]?[-\s.]?[0-9]{1,9}$")
        .expect("valid phone regex")
});

/// Raw form input, as typed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Empty until a department is picked
    pub department: String,
    /// Optional; blank means "no phone"
    pub phone: String,
}

/// Field name (camelCase, as on the wire) → first failing rule's message
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    fields: BTreeMap<&'static str, &'static str>,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&'static str> {
        self.fields.get(field).copied()
    }

    pub fn fields(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.fields.iter().map(|(k, v)| (*k, *v))
    }

    fn add(&mut self, field: &'static str, message: &'static str) {
        self.fields.entry(field).or_insert(message);
    }
}

impl EmployeeForm {
    /// Pre-fill an edit form
    pub fn from_employee(employee: &Employee) -> Self {
        Self {
            first_name: employee.first_name.clone(),
            last_name: employee.last_name.clone(),
            email: employee.email.clone(),
            department: employee.department.as_str().to_string(),
            phone: employee.phone.clone().unwrap_or_default(),
        }
    }

    pub fn validate(&self) -> Result<Department, FormErrors> {
        let mut errors = FormErrors::default();

        check_name(&mut errors, "firstName", &self.first_name, "First name is required");
        check_name(&mut errors, "lastName", &self.last_name, "Last name is required");

        if self.email.is_empty() {
            errors.add("email", "Email is required");
        } else if !self.email.validate_email() {
            errors.add("email", "Invalid email format");
        }

        let department = if self.department.is_empty() {
            errors.add("department", "Department is required");
            None
        } else {
            match self.department.parse::<Department>() {
                Ok(department) => Some(department),
                Err(_) => {
                    errors.add("department", "Invalid department");
                    None
                }
            }
        };

        if !self.phone.is_empty() && !PHONE_PATTERN.is_match(&self.phone) {
            errors.add("phone", "Invalid phone format");
        }

        match department {
            Some(department) if errors.is_empty() => Ok(department),
            _ => Err(errors),
        }
    }

    /// Create payload; a blank phone is omitted
    pub fn to_create(&self) -> Result<EmployeeCreate, FormErrors> {
        let department = self.validate()?;
        Ok(EmployeeCreate {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            department,
            phone: self.phone_value(),
        })
    }

    /// Update payload carrying every field; a blank phone clears it
    pub fn to_update(&self) -> Result<EmployeeUpdate, FormErrors> {
        let department = self.validate()?;
        Ok(EmployeeUpdate {
            first_name: Some(self.first_name.clone()),
            last_name: Some(self.last_name.clone()),
            email: Some(self.email.clone()),
            department: Some(department),
            phone: Some(self.phone_value()),
        })
    }

    fn phone_value(&self) -> Option<String> {
        (!self.phone.is_empty()).then(|| self.phone.clone())
    }
}

fn check_name(errors: &mut FormErrors, field: &'static str, value: &str, required: &'static str) {
    if value.is_empty() {
        errors.add(field, required);
    } else if value.chars().count() > NAME_MAX_CHARS {
        errors.add(field, "Maximum 50 characters");
    }
}
