//! Route definitions for the application

use dioxus::prelude::*;

use crate::components::AdminLayout;
use crate::pages::admin::{
    AdminDashboard, AdminRooms, AdminServices, AdminShifts, AdminStaff, AdminStaffDetail,
    AdminStaffEdit,
};
use crate::pages::public::{ForgotPassword, Home, Login, NotFound, Register};

/// All application routes
#[derive(Clone, Debug, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    // Public routes
    #[route("/")]
    Home {},

    #[route("/login")]
    Login {},

    #[route("/register")]
    Register {},

    #[route("/forgot-password")]
    ForgotPassword {},

    // Admin console
    #[nest("/admin")]
        #[layout(AdminLayout)]
            #[route("/")]
            AdminDashboard {},

            #[route("/rooms")]
            AdminRooms {},

            #[route("/services")]
            AdminServices {},

            #[route("/staff")]
            AdminStaff {},

            #[route("/staff/:id")]
            AdminStaffDetail { id: String },

            #[route("/staff/:id/edit")]
            AdminStaffEdit { id: String },

            #[route("/shifts")]
            AdminShifts {},
        #[end_layout]
    #[end_nest]

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

/// Renders nothing and swaps the current history entry for `to`, so the
/// page being guarded never stays reachable via the back button.
#[component]
pub fn Redirect(to: Route) -> Element {
    let navigator = use_navigator();
    use_effect(move || {
        navigator.replace(to.clone());
    });
    rsx! {}
}

/// Post-login landing route per role. Staff roles have no console of their
/// own here, so everyone except admins and managers lands on the home page.
pub fn route_for_role(role: &str) -> Route {
    match role {
        "admin" | "manager" => Route::AdminDashboard {},
        _ => Route::Home {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admins_and_managers_land_on_the_console() {
        assert_eq!(route_for_role("admin"), Route::AdminDashboard {});
        assert_eq!(route_for_role("manager"), Route::AdminDashboard {});
    }

    #[test]
    fn other_roles_land_on_home() {
        assert_eq!(route_for_role("dentist"), Route::Home {});
        assert_eq!(route_for_role("patient"), Route::Home {});
        assert_eq!(route_for_role(""), Route::Home {});
    }

    #[test]
    fn staff_routes_render_their_paths() {
        assert_eq!(
            Route::AdminStaffDetail { id: "u1".into() }.to_string(),
            "/admin/staff/u1"
        );
        assert_eq!(
            Route::AdminStaffEdit { id: "u1".into() }.to_string(),
            "/admin/staff/u1/edit"
        );
        assert_eq!(Route::Login {}.to_string(), "/login");
    }
}
