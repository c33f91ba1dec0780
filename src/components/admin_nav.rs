//! Admin sidebar navigation

use dioxus::prelude::*;

use crate::auth::{use_auth, use_session};
use crate::routes::Route;

#[component]
pub fn AdminNav() -> Element {
    let auth = use_auth();
    let session = use_session();
    let navigator = use_navigator();

    let user_name = auth.display_name();

    let handle_logout = move |_| {
        auth.log_out(&session);
        navigator.push(Route::Login {});
    };

    rsx! {
        aside { class: "admin-nav",
            Link { to: Route::AdminDashboard {}, class: "admin-nav__brand", "Smile Dental" }
            nav { class: "admin-nav__menu",
                NavItem { to: Route::AdminDashboard {}, label: "Tổng quan" }
                NavItem { to: Route::AdminRooms {}, label: "Phòng khám" }
                NavItem { to: Route::AdminServices {}, label: "Dịch vụ" }
                NavItem { to: Route::AdminStaff {}, label: "Nhân viên" }
                NavItem { to: Route::AdminShifts {}, label: "Ca làm việc" }
            }
            div { class: "admin-nav__footer",
                span { class: "admin-nav__user", "{user_name}" }
                button { class: "btn btn--ghost", onclick: handle_logout, "Đăng xuất" }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct NavItemProps {
    to: Route,
    label: &'static str,
}

#[component]
fn NavItem(props: NavItemProps) -> Element {
    let route = use_route::<Route>();
    let is_active = route == props.to;

    rsx! {
        Link {
            to: props.to.clone(),
            class: if is_active {
                "admin-nav__link admin-nav__link--active"
            } else {
                "admin-nav__link"
            },
            "{props.label}"
        }
    }
}
