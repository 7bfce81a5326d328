use serde::{de::DeserializeOwned, Serialize};

use crate::{
    client::table::{RowId, TableRow},
    model::{
        login_signup::{LoginSignupEventDto, NewLoginSignupEventDto},
        store_visit::{NewStoreVisitDto, StoreVisitDto},
        website_visit::{NewWebsiteVisitDto, WebsiteVisitDto},
    },
};

/// A record type served as a REST collection.
pub trait Resource: TableRow + DeserializeOwned {
    /// Collection path, e.g. `/api/website-visits`.
    const PATH: &'static str;
    /// Name of one record, used in messages.
    const SINGULAR: &'static str;
    /// Name of the collection, used in messages.
    const PLURAL: &'static str;

    /// Body of create and update requests.
    type Payload: Serialize + Clone + PartialEq + 'static;

    /// Path of a single record.
    fn item_path(id: RowId) -> String {
        format!("{}/{}", Self::PATH, id)
    }
}

impl Resource for WebsiteVisitDto {
    const PATH: &'static str = "/api/website-visits";
    const SINGULAR: &'static str = "website visit";
    const PLURAL: &'static str = "website visits";
    type Payload = NewWebsiteVisitDto;
}

impl Resource for StoreVisitDto {
    const PATH: &'static str = "/api/store-visits";
    const SINGULAR: &'static str = "store visit";
    const PLURAL: &'static str = "store visits";
    type Payload = NewStoreVisitDto;
}

impl Resource for LoginSignupEventDto {
    const PATH: &'static str = "/api/login-signup";
    const SINGULAR: &'static str = "login/signup event";
    const PLURAL: &'static str = "login/signup events";
    type Payload = NewLoginSignupEventDto;
}

impl TableRow for WebsiteVisitDto {
    fn row_id(&self) -> RowId {
        self.id
    }
}

impl TableRow for StoreVisitDto {
    fn row_id(&self) -> RowId {
        self.id
    }
}

impl TableRow for LoginSignupEventDto {
    fn row_id(&self) -> RowId {
        self.id
    }
}
