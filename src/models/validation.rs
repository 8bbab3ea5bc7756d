use std::fmt;

/// Form fields a validation error can be attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Ian,
    Activity,
    Object,
    /// Cross-field check over the five day flags.
    Days,
}

impl Field {
    pub fn name(&self) -> &'static str {
        match self {
            Field::Ian => "ian",
            Field::Activity => "activity",
            Field::Object => "object",
            Field::Days => "days",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub message: String,
}

/// Every field that failed, in form order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn push(&mut self, field: Field, message: impl Into<String>) {
        self.0.push(FieldError {
            field,
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn has(&self, field: Field) -> bool {
        self.0.iter().any(|e| e.field == field)
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, e) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "  - {}: {}", e.field.name(), e.message)?;
        }
        Ok(())
    }
}
