//! Admin dashboard with live counts per managed resource

use dioxus::prelude::*;

use crate::api::{rooms as rooms_api, services as services_api, shifts as shifts_api,
    staff as staff_api, use_api};
use crate::auth::use_auth;
use crate::components::LoadingSpinner;
use crate::routes::Route;

struct DashboardStats {
    rooms: Option<u64>,
    services: Option<u64>,
    staff: Option<u64>,
    shifts: Option<u64>,
}

fn count_caption(count: Option<u64>) -> String {
    match count {
        Some(count) => count.to_string(),
        None => "-".to_string(),
    }
}

/// Admin dashboard page
#[component]
pub fn AdminDashboard() -> Element {
    let auth = use_auth();
    let api = use_api();

    // Each backend is polled independently; a service being down should not
    // blank the whole dashboard.
    let stats = use_resource(move || {
        let api = api.clone();
        async move {
            let rooms = rooms_api::list(&api.rooms, 1, 1)
                .await
                .map(|list| list.total)
                .ok();
            let services = services_api::list(&api.services, 1, 1)
                .await
                .map(|list| list.total)
                .ok();
            let staff = staff_api::list(&api.core, 1, 1)
                .await
                .map(|list| list.total)
                .ok();
            let shifts = shifts_api::list(&api.shifts)
                .await
                .map(|shifts| shifts.len() as u64)
                .ok();
            DashboardStats {
                rooms,
                services,
                staff,
                shifts,
            }
        }
    });

    let display_name = auth.display_name();

    rsx! {
        div { class: "dashboard",
            div { class: "dashboard__head",
                h1 { "Tổng quan" }
                p { "Chào mừng trở lại, {display_name}" }
            }
            match &*stats.read() {
                Some(stats) => {
                    let rooms = count_caption(stats.rooms);
                    let services = count_caption(stats.services);
                    let staff = count_caption(stats.staff);
                    let shifts = count_caption(stats.shifts);
                    rsx! {
                        div { class: "dashboard__grid",
                            div { class: "stat-card",
                                div { class: "stat-card__head",
                                    span { class: "stat-card__title", "Phòng khám" }
                                    span { class: "stat-card__value", "{rooms}" }
                                }
                                p { class: "stat-card__caption", "Phòng khám hiện có" }
                                Link { to: Route::AdminRooms {}, class: "stat-card__link", "Quản lý" }
                            }
                            div { class: "stat-card",
                                div { class: "stat-card__head",
                                    span { class: "stat-card__title", "Dịch vụ" }
                                    span { class: "stat-card__value", "{services}" }
                                }
                                p { class: "stat-card__caption", "Dịch vụ đang cung cấp" }
                                Link { to: Route::AdminServices {}, class: "stat-card__link", "Quản lý" }
                            }
                            div { class: "stat-card",
                                div { class: "stat-card__head",
                                    span { class: "stat-card__title", "Nhân viên" }
                                    span { class: "stat-card__value", "{staff}" }
                                }
                                p { class: "stat-card__caption", "Nhân viên trong hệ thống" }
                                Link { to: Route::AdminStaff {}, class: "stat-card__link", "Quản lý" }
                            }
                            div { class: "stat-card",
                                div { class: "stat-card__head",
                                    span { class: "stat-card__title", "Ca làm việc" }
                                    span { class: "stat-card__value", "{shifts}" }
                                }
                                p { class: "stat-card__caption", "Ca làm việc đã cấu hình" }
                                Link { to: Route::AdminShifts {}, class: "stat-card__link", "Quản lý" }
                            }
                        }
                    }
                }
                None => rsx! {
                    LoadingSpinner {}
                },
            }
        }
    }
}
