//! Table projections and delete confirmation.
//!
//! Rows are plain data built from the filtered list; the only state a table owns
//! is the record waiting for delete confirmation.

use crate::{
    core::colors::{Badge, FALLBACK_COLOR},
    entities::{Department, Employee, ShiftType},
};

/// Smallest viewport a column is shown on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Breakpoint {
    Always,
    Small,
    Medium,
    Large,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub header: &'static str,
    pub visible_from: Breakpoint,
}

const fn column(header: &'static str, visible_from: Breakpoint) -> Column {
    Column {
        header,
        visible_from,
    }
}

pub const EMPLOYEE_COLUMNS: &[Column] = &[
    column("Name", Breakpoint::Always),
    column("Email", Breakpoint::Medium),
    column("Department", Breakpoint::Always),
    column("Status", Breakpoint::Small),
    column("Color", Breakpoint::Large),
    column("Actions", Breakpoint::Always),
];

pub const DEPARTMENT_COLUMNS: &[Column] = &[
    column("Name", Breakpoint::Always),
    column("Description", Breakpoint::Small),
    column("Employees", Breakpoint::Medium),
    column("Color", Breakpoint::Large),
    column("Actions", Breakpoint::Always),
];

pub const SHIFT_TYPE_COLUMNS: &[Column] = &[
    column("Name", Breakpoint::Always),
    column("Description", Breakpoint::Small),
    column("Color", Breakpoint::Large),
    column("Actions", Breakpoint::Always),
];

/// Columns shown at `viewport`.
#[must_use]
pub fn visible_columns(columns: &[Column], viewport: Breakpoint) -> Vec<&'static str> {
    columns
        .iter()
        .filter(|column| column.visible_from <= viewport)
        .map(|column| column.header)
        .collect()
}

const EMPLOYEE_BADGE_COLOR: &str = "#16a34a";
const ADMIN_BADGE_COLOR: &str = "#2563eb";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeRow {
    pub id: i64,
    pub name: String,
    pub email: String,
    /// `None` when the employee has no department.
    pub department: Option<Badge>,
    pub status: Vec<Badge>,
    pub color: Badge,
}

/// Builds employee rows, resolving department names and colors from `departments`.
#[must_use]
pub fn employee_rows(employees: &[&Employee], departments: &[Department]) -> Vec<EmployeeRow> {
    employees
        .iter()
        .map(|employee| {
            let department = employee.department_id.map(|id| {
                let found = departments.iter().find(|d| d.id == id);
                Badge::new(
                    found.map_or("", |d| d.name.as_str()),
                    found.map_or(FALLBACK_COLOR, |d| d.color.as_str()),
                )
            });
            let mut status = vec![Badge::new("Employee", EMPLOYEE_BADGE_COLOR)];
            if employee.is_admin {
                status.push(Badge::new("Admin", ADMIN_BADGE_COLOR));
            }
            EmployeeRow {
                id: employee.id,
                name: employee.full_name(),
                email: employee.email.clone(),
                department,
                status,
                color: Badge::for_color(&employee.color),
            }
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepartmentRow {
    pub id: i64,
    pub name: String,
    /// `-` when there is no description.
    pub description: String,
    pub employee_count: usize,
    pub color: Badge,
}

#[must_use]
pub fn department_rows(departments: &[&Department]) -> Vec<DepartmentRow> {
    departments
        .iter()
        .map(|department| DepartmentRow {
            id: department.id,
            name: department.name.clone(),
            description: if department.description.is_empty() {
                "-".to_string()
            } else {
                department.description.clone()
            },
            employee_count: department.employee_count(),
            color: Badge::for_color(&department.color),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShiftTypeRow {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub color: Badge,
}

#[must_use]
pub fn shift_type_rows(shift_types: &[&ShiftType]) -> Vec<ShiftTypeRow> {
    shift_types
        .iter()
        .map(|shift_type| ShiftTypeRow {
            id: shift_type.id,
            name: shift_type.name.clone(),
            description: shift_type.description.clone(),
            color: Badge::for_color(&shift_type.color),
        })
        .collect()
}

/// Title and body of a delete confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub title: &'static str,
    pub description: String,
}

/// Records that can be deleted from a table.
pub trait Deletable {
    fn delete_prompt(&self) -> Prompt;
}

impl Deletable for Employee {
    fn delete_prompt(&self) -> Prompt {
        Prompt {
            title: "Delete employee",
            description: "Do you really want to delete this employee? This action cannot be undone."
                .to_string(),
        }
    }
}

impl Deletable for Department {
    fn delete_prompt(&self) -> Prompt {
        let description = match self.employee_count() {
            0 => "Do you really want to delete this department?".to_string(),
            count => format!(
                "This department still has {count} employees. Deleting it detaches them from the department."
            ),
        };
        Prompt {
            title: "Delete department",
            description,
        }
    }
}

impl Deletable for ShiftType {
    fn delete_prompt(&self) -> Prompt {
        Prompt {
            title: "Delete shift type",
            description:
                "Do you really want to delete this shift type? This action cannot be undone."
                    .to_string(),
        }
    }
}

/// The record waiting for the user to confirm or cancel its deletion.
#[derive(Debug, Clone)]
pub struct DeleteConfirmation<T> {
    pending: Option<T>,
}

impl<T> Default for DeleteConfirmation<T> {
    fn default() -> Self {
        Self { pending: None }
    }
}

impl<T: Deletable> DeleteConfirmation<T> {
    /// Asks for confirmation before deleting `item`.
    pub fn request(&mut self, item: T) {
        self.pending = Some(item);
    }

    /// Hands out the pending record and clears the prompt.
    pub fn confirm(&mut self) -> Option<T> {
        self.pending.take()
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    #[must_use]
    pub const fn pending(&self) -> Option<&T> {
        self.pending.as_ref()
    }

    /// Prompt for the pending record, if any.
    #[must_use]
    pub fn prompt(&self) -> Option<Prompt> {
        self.pending.as_ref().map(Deletable::delete_prompt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{department, department_with_employees, employee, shift_type};

    #[test]
    fn test_department_with_employees_warns_about_detaching() {
        let mut confirmation = DeleteConfirmation::default();
        confirmation.request(department_with_employees(1, "HR", 3));

        let prompt = confirmation.prompt().unwrap_or_else(|| panic!("prompt expected"));
        assert!(prompt.description.contains('3'));
        assert!(prompt.description.contains("detaches"));
    }

    #[test]
    fn test_empty_department_gets_generic_text() {
        let prompt = department(2, "IT").delete_prompt();
        assert_eq!(
            prompt.description,
            "Do you really want to delete this department?"
        );
    }

    #[test]
    fn test_confirm_hands_out_item_and_clears() {
        let mut confirmation = DeleteConfirmation::default();
        confirmation.request(shift_type(1, "Early", "06-14"));
        assert!(confirmation.pending().is_some());

        let confirmed = confirmation.confirm();
        assert_eq!(confirmed.map(|s| s.id), Some(1));
        assert!(confirmation.pending().is_none());
        assert!(confirmation.confirm().is_none());
    }

    #[test]
    fn test_cancel_clears_without_deleting() {
        let mut confirmation = DeleteConfirmation::default();
        confirmation.request(employee(1, "Ada", "Lovelace", "ada@example.com", None));
        confirmation.cancel();
        assert!(confirmation.prompt().is_none());
        assert!(confirmation.confirm().is_none());
    }

    #[test]
    fn test_employee_rows_resolve_department_and_status() {
        let departments = vec![department(1, "HR")];
        let mut ada = employee(1, "Ada", "Lovelace", "ada@example.com", Some(1));
        ada.is_admin = true;
        let alan = employee(2, "Alan", "Turing", "alan@example.com", None);
        let ghost = employee(3, "Ghost", "Writer", "ghost@example.com", Some(9));

        let rows = employee_rows(&[&ada, &alan, &ghost], &departments);
        assert_eq!(rows[0].name, "Ada Lovelace");
        assert_eq!(rows[0].department, Some(Badge::new("HR", "#ef4444")));
        assert_eq!(rows[0].status.len(), 2);
        assert_eq!(rows[0].color.label, "Blue");
        assert_eq!(rows[1].department, None);
        assert_eq!(rows[1].status, vec![Badge::new("Employee", EMPLOYEE_BADGE_COLOR)]);
        assert_eq!(rows[2].department, Some(Badge::new("", FALLBACK_COLOR)));
    }

    #[test]
    fn test_department_rows_fill_in_blank_description() {
        let hr = department_with_employees(1, "HR", 2);
        let rows = department_rows(&[&hr]);
        assert_eq!(rows[0].description, "-");
        assert_eq!(rows[0].employee_count, 2);
        assert_eq!(rows[0].color.label, "Red");
    }

    #[test]
    fn test_columns_hide_below_breakpoint() {
        assert_eq!(
            visible_columns(SHIFT_TYPE_COLUMNS, Breakpoint::Always),
            vec!["Name", "Actions"]
        );
        assert_eq!(
            visible_columns(EMPLOYEE_COLUMNS, Breakpoint::Medium),
            vec!["Name", "Email", "Department", "Status", "Actions"]
        );
        assert_eq!(visible_columns(DEPARTMENT_COLUMNS, Breakpoint::Large).len(), 5);
    }
}
