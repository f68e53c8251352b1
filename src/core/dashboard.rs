//! Dashboard summary: headline counts, the weekly hours series and the
//! employees-per-department pie.

use crate::{
    api::Backend,
    entities::{Department, Employee},
};
use tracing::error;

/// One point of the weekly hours chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayHours {
    pub day: &'static str,
    pub hours: u32,
}

/// Fixed weekly series shown on the dashboard.
pub const WEEKLY_HOURS: [DayHours; 5] = [
    DayHours { day: "Mo", hours: 8 },
    DayHours { day: "Di", hours: 6 },
    DayHours { day: "Mi", hours: 7 },
    DayHours { day: "Do", hours: 8 },
    DayHours { day: "Fr", hours: 4 },
];

/// Fill colors of the pie, cycled by slice index.
pub const PIE_COLORS: [&str; 3] = ["#0088FE", "#00C49F", "#FFBB28"];

#[must_use]
pub const fn slice_color(index: usize) -> &'static str {
    PIE_COLORS[index % PIE_COLORS.len()]
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieSlice {
    pub name: String,
    pub value: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardSummary {
    pub employees: usize,
    pub departments: usize,
    /// Employees per department, rounded half up; 0 without departments.
    pub average_per_department: usize,
}

/// Employees per department, in department order.
#[must_use]
pub fn pie_data(employees: &[Employee], departments: &[Department]) -> Vec<PieSlice> {
    departments
        .iter()
        .map(|department| PieSlice {
            name: department.name.clone(),
            value: employees
                .iter()
                .filter(|e| e.department_id == Some(department.id))
                .count(),
        })
        .collect()
}

#[must_use]
pub const fn summarize(employees: usize, departments: usize) -> DashboardSummary {
    let average_per_department = if departments == 0 {
        0
    } else {
        (2 * employees + departments) / (2 * departments)
    };
    DashboardSummary {
        employees,
        departments,
        average_per_department,
    }
}

#[derive(Debug)]
pub struct Dashboard<'b, B: Backend> {
    backend: &'b B,
    employees: Vec<Employee>,
    departments: Vec<Department>,
    loading: bool,
}

impl<'b, B: Backend> Dashboard<'b, B> {
    #[must_use]
    pub const fn new(backend: &'b B) -> Self {
        Self {
            backend,
            employees: Vec::new(),
            departments: Vec::new(),
            loading: true,
        }
    }

    /// Loads employees and departments together; a failure of either keeps the
    /// previous data.
    pub async fn load(&mut self) -> bool {
        let fetched = tokio::try_join!(
            self.backend.list::<Employee>(),
            self.backend.list::<Department>()
        );
        self.loading = false;
        match fetched {
            Ok((employees, departments)) => {
                self.employees = employees;
                self.departments = departments;
                true
            }
            Err(e) => {
                error!("Failed to load dashboard data: {}", e);
                false
            }
        }
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn summary(&self) -> DashboardSummary {
        summarize(self.employees.len(), self.departments.len())
    }

    #[must_use]
    pub const fn weekly_hours(&self) -> &'static [DayHours] {
        &WEEKLY_HOURS
    }

    #[must_use]
    pub fn pie_data(&self) -> Vec<PieSlice> {
        pie_data(&self.employees, &self.departments)
    }
}
