//! Declarative builder for table datasets.

use salesboard::model::{
    login_signup::{EventType, LoginSignupEventDto},
    store_visit::StoreVisitDto,
    website_visit::WebsiteVisitDto,
};

use crate::fixtures::factory;

/// Builder for a dataset of one record type.
///
/// Ids are assigned sequentially from 1 in the order rows are added, so the built dataset is
/// always in id order before any sorting.
pub struct RowsBuilder<R> {
    rows: Vec<R>,
    make: Box<dyn Fn(i64) -> R>,
}

impl RowsBuilder<WebsiteVisitDto> {
    pub fn website_visits() -> Self {
        Self::new(factory::mock_website_visit)
    }
}

impl RowsBuilder<StoreVisitDto> {
    pub fn store_visits() -> Self {
        Self::new(factory::mock_store_visit)
    }
}

impl RowsBuilder<LoginSignupEventDto> {
    /// Events alternate between login (odd ids) and signup (even ids).
    pub fn login_signup_events() -> Self {
        Self::new(|id| {
            let event_type = if id % 2 == 0 {
                EventType::Signup
            } else {
                EventType::Login
            };
            factory::mock_login_signup_event(id, event_type)
        })
    }
}

impl<R> RowsBuilder<R> {
    /// Create a builder from a factory taking the next id.
    pub fn new(make: impl Fn(i64) -> R + 'static) -> Self {
        Self {
            rows: Vec::new(),
            make: Box::new(make),
        }
    }

    fn next_id(&self) -> i64 {
        self.rows.len() as i64 + 1
    }

    /// Append `count` factory rows.
    pub fn with_rows(mut self, count: usize) -> Self {
        for _ in 0..count {
            let row = (self.make)(self.next_id());
            self.rows.push(row);
        }
        self
    }

    /// Append one factory row customized by `edit`.
    pub fn with_row(mut self, edit: impl FnOnce(&mut R)) -> Self {
        let mut row = (self.make)(self.next_id());
        edit(&mut row);
        self.rows.push(row);
        self
    }

    pub fn build(self) -> Vec<R> {
        self.rows
    }
}
