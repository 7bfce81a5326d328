use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaRightToBracket, FaUserPlus};
use dioxus_free_icons::Icon;

use crate::{
    client::{
        components::{
            login_signup::{LoginSignupForm, LoginSignupTable},
            ui::{ErrorBanner, LoadingSpinner, Modal},
            Page,
        },
        table::{RowId, TableRow},
        util::{use_records, EditTarget},
    },
    model::login_signup::{EventType, LoginSignupEventDto, NewLoginSignupEventDto},
};

#[component]
pub fn LoginSignup() -> Element {
    let records = use_records::<LoginSignupEventDto>();
    let mut collection = records.collection;
    let mut editor = use_signal(|| Option::<EditTarget<LoginSignupEventDto>>::None);
    let mut preset = use_signal(|| Option::<EventType>::None);

    let events = collection.read().records().to_vec();
    let initial_load = collection.read().is_initial_load();
    let errors = collection.read().errors();
    let target = editor();
    let modal_title = match (&target, preset()) {
        (Some(EditTarget::Existing(_)), _) => "Edit Event",
        (_, Some(EventType::Login)) => "Record Login",
        (_, Some(EventType::Signup)) => "Record Signup",
        _ => "Record Event",
    };

    let mut open_new = move |event_type: EventType| {
        preset.set(Some(event_type));
        editor.set(Some(EditTarget::New));
    };

    rsx!(
        Title { "Login & Signup | Sales Dashboard" }
        Meta {
            name: "description",
            content: "Login and signup events recorded for the sales lifecycle."
        }
        Page {
            title: "Login & Signup Tracking",
            description: "Authentication events of your users",
            actions: rsx!(
                button {
                    class: "btn btn-primary flex gap-2",
                    onclick: move |_| open_new(EventType::Login),
                    Icon { width: 14, height: 14, icon: FaRightToBracket }
                    "Record Login"
                }
                button {
                    class: "btn btn-outline flex gap-2",
                    onclick: move |_| open_new(EventType::Signup),
                    Icon { width: 14, height: 14, icon: FaUserPlus }
                    "Record Signup"
                }
            ),
            ErrorBanner {
                errors: errors,
                on_dismiss: move |_| collection.write().dismiss_errors(),
            }
            if initial_load {
                LoadingSpinner {}
            } else {
                LoginSignupTable {
                    events: events,
                    state: records.table,
                    on_edit: move |event: LoginSignupEventDto| {
                        preset.set(None);
                        editor.set(Some(EditTarget::Existing(event)));
                    },
                    on_delete: move |event: LoginSignupEventDto| records.delete_many(vec![event.row_id()]),
                    on_delete_selected: move |ids: Vec<RowId>| records.delete_many(ids),
                }
            }
        }
        Modal {
            open: target.is_some(),
            title: modal_title,
            on_close: move |_| editor.set(None),
            if let Some(target) = target.clone() {
                LoginSignupForm {
                    initial: target.record(),
                    event_type: preset(),
                    on_submit: move |payload: NewLoginSignupEventDto| {
                        records.save(target.id(), payload, move || editor.set(None));
                    },
                    on_cancel: move |_| editor.set(None),
                }
            }
        }
    )
}
