use crate::{
    client::{
        form::{FieldErrors, RecordDraft},
        validation,
    },
    model::{
        format::to_datetime_local,
        store_visit::{NewStoreVisitDto, StoreVisitDto, VisitPurpose},
        Choice,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum StoreVisitField {
    UserId,
    StoreName,
    Location,
    VisitDate,
    VisitPurpose,
    Notes,
}

impl StoreVisitField {
    pub fn name(self) -> &'static str {
        match self {
            Self::UserId => "user_id",
            Self::StoreName => "store_name",
            Self::Location => "location",
            Self::VisitDate => "visit_date",
            Self::VisitPurpose => "visit_purpose",
            Self::Notes => "notes",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct StoreVisitDraft {
    pub user_id: String,
    pub store_name: String,
    pub location: String,
    pub visit_date: String,
    pub visit_purpose: String,
    pub notes: String,
}

impl StoreVisitDraft {
    pub fn from_record(record: &StoreVisitDto) -> Self {
        Self {
            user_id: record.user_id.clone(),
            store_name: record.store_name.clone(),
            location: record.location.clone(),
            visit_date: to_datetime_local(&record.visit_date),
            visit_purpose: record.visit_purpose.value().to_string(),
            notes: record.notes.clone().unwrap_or_default(),
        }
    }
}

impl RecordDraft for StoreVisitDraft {
    type Field = StoreVisitField;
    type Output = NewStoreVisitDto;

    fn set(&mut self, field: StoreVisitField, value: String) {
        match field {
            StoreVisitField::UserId => self.user_id = value,
            StoreVisitField::StoreName => self.store_name = value,
            StoreVisitField::Location => self.location = value,
            StoreVisitField::VisitDate => self.visit_date = value,
            StoreVisitField::VisitPurpose => self.visit_purpose = value,
            StoreVisitField::Notes => self.notes = value,
        }
    }

    fn validate(&self) -> Result<NewStoreVisitDto, FieldErrors<StoreVisitField>> {
        let mut errors = FieldErrors::new();

        let required = [
            (StoreVisitField::UserId, &self.user_id, "User ID is required"),
            (StoreVisitField::StoreName, &self.store_name, "Store name is required"),
            (StoreVisitField::Location, &self.location, "Location is required"),
        ];
        for (field, value, message) in required {
            if validation::is_blank(value) {
                errors.insert(field, message.to_string());
            }
        }

        let visit_date = validation::parse_date(&self.visit_date);
        if self.visit_date.is_empty() {
            errors.insert(StoreVisitField::VisitDate, "Visit date is required".to_string());
        } else if visit_date.is_none() {
            errors.insert(
                StoreVisitField::VisitDate,
                "Please enter a valid date".to_string(),
            );
        }

        let visit_purpose = validation::parse_choice::<VisitPurpose>(&self.visit_purpose);
        if self.visit_purpose.is_empty() {
            errors.insert(
                StoreVisitField::VisitPurpose,
                "Visit purpose is required".to_string(),
            );
        } else if visit_purpose.is_none() {
            errors.insert(
                StoreVisitField::VisitPurpose,
                "Please select a valid visit purpose".to_string(),
            );
        }

        match (visit_date, visit_purpose) {
            (Some(visit_date), Some(visit_purpose)) if errors.is_empty() => Ok(NewStoreVisitDto {
                user_id: self.user_id.trim().to_string(),
                store_name: self.store_name.trim().to_string(),
                location: self.location.trim().to_string(),
                visit_date,
                visit_purpose,
                notes: Some(self.notes.trim())
                    .filter(|notes| !notes.is_empty())
                    .map(str::to_string),
            }),
            _ => Err(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> StoreVisitDraft {
        StoreVisitDraft {
            user_id: "u-1".to_string(),
            store_name: "Main Street".to_string(),
            location: "Springfield".to_string(),
            visit_date: "2024-03-09T14:00".to_string(),
            visit_purpose: "inquiry".to_string(),
            notes: "  ".to_string(),
        }
    }

    #[test]
    fn test_valid_draft() {
        let visit = valid_draft().validate().unwrap();

        assert_eq!(visit.visit_purpose, VisitPurpose::Inquiry);
        assert_eq!(visit.notes, None);
        assert_eq!(visit.store_name, "Main Street");
    }

    #[test]
    fn test_purpose_must_be_declared_option() {
        let draft = StoreVisitDraft {
            visit_purpose: "browsing".to_string(),
            ..valid_draft()
        };

        let errors = draft.validate().unwrap_err();
        assert_eq!(
            errors[&StoreVisitField::VisitPurpose],
            "Please select a valid visit purpose"
        );
    }

    #[test]
    fn test_missing_fields() {
        let errors = StoreVisitDraft::default().validate().unwrap_err();

        assert_eq!(errors.len(), 5);
        assert!(!errors.contains_key(&StoreVisitField::Notes));
        assert_eq!(errors[&StoreVisitField::VisitPurpose], "Visit purpose is required");
    }

    #[test]
    fn test_notes_are_kept_when_present() {
        let draft = StoreVisitDraft {
            notes: "Asked about the loyalty programme".to_string(),
            ..valid_draft()
        };

        let visit = draft.validate().unwrap();
        assert_eq!(visit.notes.as_deref(), Some("Asked about the loyalty programme"));
    }
}
