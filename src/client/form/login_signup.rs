use crate::{
    client::{
        form::{FieldErrors, RecordDraft},
        validation,
    },
    model::{
        format::to_datetime_local,
        login_signup::{EventStatus, EventType, LoginSignupEventDto, NewLoginSignupEventDto},
        Choice,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LoginSignupField {
    UserId,
    EventType,
    EventDate,
    IpAddress,
    UserAgent,
    Status,
}

impl LoginSignupField {
    pub fn name(self) -> &'static str {
        match self {
            Self::UserId => "user_id",
            Self::EventType => "event_type",
            Self::EventDate => "event_date",
            Self::IpAddress => "ip_address",
            Self::UserAgent => "user_agent",
            Self::Status => "status",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct LoginSignupDraft {
    pub user_id: String,
    pub event_type: String,
    pub event_date: String,
    pub ip_address: String,
    pub user_agent: String,
    pub status: String,
}

impl LoginSignupDraft {
    pub fn from_record(record: &LoginSignupEventDto) -> Self {
        Self {
            user_id: record.user_id.clone(),
            event_type: record.event_type.value().to_string(),
            event_date: to_datetime_local(&record.event_date),
            ip_address: record.ip_address.clone(),
            user_agent: record.user_agent.clone(),
            status: record.status.value().to_string(),
        }
    }

    /// A new draft with the event type chosen up front.
    pub fn with_event_type(event_type: EventType) -> Self {
        Self {
            event_type: event_type.value().to_string(),
            ..Self::default()
        }
    }
}

impl RecordDraft for LoginSignupDraft {
    type Field = LoginSignupField;
    type Output = NewLoginSignupEventDto;

    fn set(&mut self, field: LoginSignupField, value: String) {
        match field {
            LoginSignupField::UserId => self.user_id = value,
            LoginSignupField::EventType => self.event_type = value,
            LoginSignupField::EventDate => self.event_date = value,
            LoginSignupField::IpAddress => self.ip_address = value,
            LoginSignupField::UserAgent => self.user_agent = value,
            LoginSignupField::Status => self.status = value,
        }
    }

    fn validate(&self) -> Result<NewLoginSignupEventDto, FieldErrors<LoginSignupField>> {
        let mut errors = FieldErrors::new();

        if validation::is_blank(&self.user_id) {
            errors.insert(LoginSignupField::UserId, "User ID is required".to_string());
        }

        let event_type = validation::parse_choice::<EventType>(&self.event_type);
        if self.event_type.is_empty() {
            errors.insert(
                LoginSignupField::EventType,
                "Event type is required".to_string(),
            );
        } else if event_type.is_none() {
            errors.insert(
                LoginSignupField::EventType,
                "Please select a valid event type".to_string(),
            );
        }

        let event_date = validation::parse_date(&self.event_date);
        if self.event_date.is_empty() {
            errors.insert(
                LoginSignupField::EventDate,
                "Event date is required".to_string(),
            );
        } else if event_date.is_none() {
            errors.insert(
                LoginSignupField::EventDate,
                "Please enter a valid date".to_string(),
            );
        }

        if validation::is_blank(&self.ip_address) {
            errors.insert(
                LoginSignupField::IpAddress,
                "IP address is required".to_string(),
            );
        } else if !validation::is_ipv4(&self.ip_address) {
            errors.insert(
                LoginSignupField::IpAddress,
                "Please enter a valid IP address".to_string(),
            );
        }

        let status = validation::parse_choice::<EventStatus>(&self.status);
        if self.status.is_empty() {
            errors.insert(LoginSignupField::Status, "Status is required".to_string());
        } else if status.is_none() {
            errors.insert(
                LoginSignupField::Status,
                "Please select a valid status".to_string(),
            );
        }

        match (event_type, event_date, status) {
            (Some(event_type), Some(event_date), Some(status)) if errors.is_empty() => {
                Ok(NewLoginSignupEventDto {
                    user_id: self.user_id.trim().to_string(),
                    event_type,
                    event_date,
                    ip_address: self.ip_address.clone(),
                    user_agent: self.user_agent.trim().to_string(),
                    status,
                })
            }
            _ => Err(errors),
        }
    }
}
