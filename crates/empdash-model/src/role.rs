//! Logical column roles and the mapping from roles to source columns.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Employee attribute the pipeline tries to locate among arbitrary column names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Role {
    Salary,
    Department,
    Age,
    Experience,
    Performance,
}

impl Role {
    /// All roles in detection order.
    ///
    /// A column name is tested against each role's [`keyword`](Role::keyword)
    /// in this order and is assigned to the first role whose keyword it
    /// contains.
    pub const ALL: [Role; 5] = [
        Role::Salary,
        Role::Department,
        Role::Age,
        Role::Experience,
        Role::Performance,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Salary => "Salary",
            Role::Department => "Department",
            Role::Age => "Age",
            Role::Experience => "Experience",
            Role::Performance => "Performance",
        }
    }

    /// Lower-case keyword matched against column names.
    pub fn keyword(&self) -> &'static str {
        match self {
            Role::Salary => "salary",
            Role::Department => "department",
            Role::Age => "age",
            Role::Experience => "experience",
            Role::Performance => "performance",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Resolved source column for each role.
///
/// Unresolved roles are `None`. Built once per loaded table and not
/// mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleMapping {
    pub salary: Option<String>,
    pub department: Option<String>,
    pub age: Option<String>,
    pub experience: Option<String>,
    pub performance: Option<String>,
}

impl RoleMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Column resolved for `role`, if any.
    pub fn get(&self, role: Role) -> Option<&str> {
        self.slot(role).as_deref()
    }

    /// Records `column` for `role`, returning the column it replaced.
    pub fn assign(&mut self, role: Role, column: impl Into<String>) -> Option<String> {
        self.slot_mut(role).replace(column.into())
    }

    pub fn contains(&self, role: Role) -> bool {
        self.slot(role).is_some()
    }

    /// Number of resolved roles.
    pub fn len(&self) -> usize {
        Role::ALL.iter().filter(|role| self.contains(**role)).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Resolved `(role, column)` pairs in detection order.
    pub fn resolved(&self) -> impl Iterator<Item = (Role, &str)> + '_ {
        Role::ALL
            .into_iter()
            .filter_map(|role| self.get(role).map(|column| (role, column)))
    }

    fn slot(&self, role: Role) -> &Option<String> {
        match role {
            Role::Salary => &self.salary,
            Role::Department => &self.department,
            Role::Age => &self.age,
            Role::Experience => &self.experience,
            Role::Performance => &self.performance,
        }
    }

    fn slot_mut(&mut self, role: Role) -> &mut Option<String> {
        match role {
            Role::Salary => &mut self.salary,
            Role::Department => &mut self.department,
            Role::Age => &mut self.age,
            Role::Experience => &mut self.experience,
            Role::Performance => &mut self.performance,
        }
    }
}

impl fmt::Display for RoleMapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, role) in Role::ALL.iter().enumerate() {
            if idx > 0 {
                writeln!(f)?;
            }
            write!(f, "{}: {}", role, self.get(*role).unwrap_or("-"))?;
        }
        Ok(())
    }
}
