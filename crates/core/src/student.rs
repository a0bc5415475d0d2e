use std::fmt::{Display, Formatter};

/// A single student record. `id` is the unique key within a roster; the other
/// fields are free-form text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    pub name: String,
    pub phone: String,
    pub id: String,
    pub department: String,
}

impl Student {
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        id: impl Into<String>,
        department: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            id: id.into(),
            department: department.into(),
        }
    }
}

impl Display for Student {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(formatter, "  Name       : {}", self.name)?;
        writeln!(formatter, "  Phone      : {}", self.phone)?;
        writeln!(formatter, "  ID         : {}", self.id)?;
        write!(formatter, "  Department : {}", self.department)
    }
}

/// A partial update for an existing record. A field that is `None` or blank is
/// left unchanged; the ID of a record can never be changed.
#[derive(Debug, Clone, Default)]
pub struct StudentUpdate {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub department: Option<String>,
}

impl StudentUpdate {
    /// Returns true if no field would change.
    pub fn is_empty(&self) -> bool {
        fn blank(field: &Option<String>) -> bool {
            field.as_deref().map_or(true, |value| value.trim().is_empty())
        }

        blank(&self.name) && blank(&self.phone) && blank(&self.department)
    }

    pub(crate) fn apply_to(&self, student: &mut Student) {
        fn apply(field: &Option<String>, target: &mut String) {
            if let Some(value) = field {
                if !value.trim().is_empty() {
                    target.clone_from(value);
                }
            }
        }

        apply(&self.name, &mut student.name);
        apply(&self.phone, &mut student.phone);
        apply(&self.department, &mut student.department);
    }
}
