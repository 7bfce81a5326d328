use crate::{
    client::{
        form::{FieldErrors, RecordDraft},
        validation,
    },
    model::{
        auth::{RegisterDto, Role},
        Choice,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum RegisterField {
    Name,
    Email,
    Password,
    Role,
}

impl RegisterField {
    pub fn name(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Password => "password",
            Self::Role => "role",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RegisterDraft {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: String,
}

impl Default for RegisterDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            password: String::new(),
            role: Role::default().value().to_string(),
        }
    }
}

impl RecordDraft for RegisterDraft {
    type Field = RegisterField;
    type Output = RegisterDto;

    fn set(&mut self, field: RegisterField, value: String) {
        match field {
            RegisterField::Name => self.name = value,
            RegisterField::Email => self.email = value,
            RegisterField::Password => self.password = value,
            RegisterField::Role => self.role = value,
        }
    }

    fn validate(&self) -> Result<RegisterDto, FieldErrors<RegisterField>> {
        let mut errors = FieldErrors::new();

        if validation::is_blank(&self.name) {
            errors.insert(RegisterField::Name, "Full name is required".to_string());
        }

        if validation::is_blank(&self.email) {
            errors.insert(RegisterField::Email, "Email is required".to_string());
        } else if !validation::is_email(&self.email) {
            errors.insert(
                RegisterField::Email,
                "Please enter a valid email".to_string(),
            );
        }

        if self.password.is_empty() {
            errors.insert(RegisterField::Password, "Password is required".to_string());
        }

        let role = validation::parse_choice::<Role>(&self.role);
        if role.is_none() {
            errors.insert(RegisterField::Role, "Please select a role".to_string());
        }

        match role {
            Some(role) if errors.is_empty() => Ok(RegisterDto {
                name: self.name.trim().to_string(),
                email: self.email.trim().to_string(),
                password: self.password.clone(),
                role,
            }),
            _ => Err(errors),
        }
    }
}
