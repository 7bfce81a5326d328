use crate::{
    client::{
        form::{FieldErrors, RecordDraft},
        validation,
    },
    model::{
        format::to_datetime_local,
        website_visit::{NewWebsiteVisitDto, WebsiteVisitDto},
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum WebsiteVisitField {
    UserId,
    PageUrl,
    VisitDate,
    DurationSeconds,
}

impl WebsiteVisitField {
    pub fn name(self) -> &'static str {
        match self {
            Self::UserId => "user_id",
            Self::PageUrl => "page_url",
            Self::VisitDate => "visit_date",
            Self::DurationSeconds => "duration_seconds",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct WebsiteVisitDraft {
    pub user_id: String,
    pub page_url: String,
    pub visit_date: String,
    pub duration_seconds: String,
}

impl WebsiteVisitDraft {
    /// Pre-fills the draft for editing an existing visit.
    pub fn from_record(record: &WebsiteVisitDto) -> Self {
        Self {
            user_id: record.user_id.clone(),
            page_url: record.page_url.clone(),
            visit_date: to_datetime_local(&record.visit_date),
            duration_seconds: record.duration_seconds.to_string(),
        }
    }
}

impl RecordDraft for WebsiteVisitDraft {
    type Field = WebsiteVisitField;
    type Output = NewWebsiteVisitDto;

    fn set(&mut self, field: WebsiteVisitField, value: String) {
        match field {
            WebsiteVisitField::UserId => self.user_id = value,
            WebsiteVisitField::PageUrl => self.page_url = value,
            WebsiteVisitField::VisitDate => self.visit_date = value,
            WebsiteVisitField::DurationSeconds => self.duration_seconds = value,
        }
    }

    fn validate(&self) -> Result<NewWebsiteVisitDto, FieldErrors<WebsiteVisitField>> {
        let mut errors = FieldErrors::new();

        if validation::is_blank(&self.user_id) {
            errors.insert(WebsiteVisitField::UserId, "User ID is required".to_string());
        }

        if validation::is_blank(&self.page_url) {
            errors.insert(WebsiteVisitField::PageUrl, "Page URL is required".to_string());
        } else if !validation::is_http_url(&self.page_url) {
            errors.insert(
                WebsiteVisitField::PageUrl,
                "Please enter a valid URL".to_string(),
            );
        }

        let visit_date = validation::parse_date(&self.visit_date);
        if self.visit_date.is_empty() {
            errors.insert(
                WebsiteVisitField::VisitDate,
                "Visit date is required".to_string(),
            );
        } else if visit_date.is_none() {
            errors.insert(
                WebsiteVisitField::VisitDate,
                "Please enter a valid date".to_string(),
            );
        }

        let duration_seconds = validation::parse_positive_int(&self.duration_seconds);
        if self.duration_seconds.is_empty() {
            errors.insert(
                WebsiteVisitField::DurationSeconds,
                "Duration is required".to_string(),
            );
        } else if duration_seconds.is_none() {
            errors.insert(
                WebsiteVisitField::DurationSeconds,
                "Duration must be a positive number".to_string(),
            );
        }

        match (visit_date, duration_seconds) {
            (Some(visit_date), Some(duration_seconds)) if errors.is_empty() => {
                Ok(NewWebsiteVisitDto {
                    user_id: self.user_id.trim().to_string(),
                    page_url: self.page_url.trim().to_string(),
                    visit_date,
                    duration_seconds,
                })
            }
            _ => Err(errors),
        }
    }
}
