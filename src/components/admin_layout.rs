//! Admin layout wrapper with auth protection

use dioxus::prelude::*;

use super::AdminNav;
use crate::auth::use_auth;
use crate::routes::{Redirect, Route};

/// Shell for the `/admin` routes: session guard, sidebar and content outlet
#[component]
pub fn AdminLayout() -> Element {
    let auth = use_auth();

    // Redirect if not signed in
    if !auth.is_authenticated() {
        return rsx! {
            Redirect { to: Route::Login {} }
        };
    }

    // Only admins and managers may enter the console
    if !auth.can_manage() {
        return rsx! {
            Redirect { to: Route::Home {} }
        };
    }

    rsx! {
        div { class: "admin-shell",
            AdminNav {}
            main { class: "admin-shell__content", Outlet::<Route> {} }
        }
    }
}
