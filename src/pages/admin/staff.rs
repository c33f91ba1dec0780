//! Staff management screen

use dioxus::prelude::*;

use crate::api::{staff as staff_api, use_api};
use crate::components::{EmptyState, LoadingSpinner, PageState, Pagination};
use crate::routes::Route;
use crate::types::{
    format_display_date, format_phone, gender_label, role_label, staff_kind_label, User,
};

/// Role filter choices, in the order the backend knows them.
const ROLE_OPTIONS: [(&str, &str); 6] = [
    ("admin", "Quản trị viên"),
    ("dentist", "Bác sĩ"),
    ("nurse", "Y tá"),
    ("receptionist", "Lễ tân"),
    ("manager", "Quản lý"),
    ("patient", "Bệnh nhân"),
];

/// Staff list with role filter, name/email search and pagination
#[component]
pub fn AdminStaff() -> Element {
    let api = use_api();

    let mut page = use_signal(|| 1u32);
    let mut limit = use_signal(|| 10u32);
    let mut role_filter = use_signal(String::new);
    let mut search_term = use_signal(String::new);
    let mut active_search = use_signal(String::new);

    let mut staff = use_resource({
        let api = api.clone();
        move || {
            let api = api.clone();
            async move {
                let keyword = active_search();
                let role = role_filter();
                let page = page();
                let limit = limit();
                // A name/email search takes precedence over the role filter
                if !keyword.trim().is_empty() {
                    staff_api::search(&api.core, &keyword, page, limit).await
                } else if !role.is_empty() {
                    staff_api::list_by_role(&api.core, &role, page, limit).await
                } else {
                    staff_api::list(&api.core, page, limit).await
                }
            }
        }
    });

    let mut run_search = move || {
        page.set(1);
        active_search.set(search_term());
        staff.restart();
    };

    rsx! {
        div { class: "page",
            div { class: "card",
                div { class: "page__toolbar",
                    select {
                        class: "field__input page__filter",
                        value: "{role_filter}",
                        onchange: move |event| {
                            role_filter.set(event.value());
                            page.set(1);
                            staff.restart();
                        },
                        option { value: "", "Lọc theo vai trò" }
                        for (value, label) in ROLE_OPTIONS {
                            option { value: "{value}", selected: role_filter() == value, "{label}" }
                        }
                    }
                    div { class: "search-box",
                        input {
                            r#type: "text",
                            placeholder: "Tìm kiếm theo tên hoặc email",
                            value: "{search_term}",
                            oninput: move |event| search_term.set(event.value()),
                            onkeydown: move |event| {
                                if event.key() == Key::Enter {
                                    run_search();
                                }
                            },
                        }
                        button { class: "btn btn--primary", onclick: move |_| run_search(), "Tìm kiếm" }
                        button { class: "btn btn--ghost", onclick: move |_| staff.restart(), "Làm mới" }
                    }
                }
                match &*staff.read() {
                    Some(Ok(list)) if !list.users.is_empty() => {
                        let state = PageState::from_response(page(), limit(), list.page, list.limit, list.total);
                        rsx! {
                            div { class: "table-wrap",
                                table { class: "table",
                                    thead {
                                        tr {
                                            th { "Họ và tên" }
                                            th { "Vai trò" }
                                            th { "Loại" }
                                            th { "Giới tính" }
                                            th { "Số điện thoại" }
                                            th { "Ngày sinh" }
                                            th { "Trạng thái" }
                                            th { "Thao tác" }
                                        }
                                    }
                                    tbody {
                                        for user in list.users.iter() {
                                            StaffRow { key: "{user.id:?}", user: user.clone() }
                                        }
                                    }
                                }
                            }
                            Pagination {
                                state: state,
                                on_page: move |next| page.set(next),
                                on_limit: move |next| {
                                    limit.set(next);
                                    page.set(1);
                                },
                            }
                        }
                    }
                    Some(Ok(_)) => rsx! {
                        EmptyState { message: "Không có nhân viên nào" }
                    },
                    Some(Err(err)) => {
                        let message = err.message_or("Lỗi khi tải danh sách nhân viên");
                        rsx! {
                            div { class: "error-state", "{message}" }
                        }
                    }
                    None => rsx! {
                        LoadingSpinner {}
                    },
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct StaffRowProps {
    user: User,
}

#[component]
fn StaffRow(props: StaffRowProps) -> Element {
    let user = props.user;
    let id = user.id.clone().unwrap_or_default();
    let name = user.display_name();
    let initial = name
        .chars()
        .next()
        .map(|first| first.to_uppercase().to_string())
        .unwrap_or_else(|| "?".to_string());
    let email = user.email.clone().unwrap_or_default();
    let role = role_label(&user.role_key()).to_string();
    let kind = staff_kind_label(user.kind.as_deref().unwrap_or("")).to_string();
    let gender = gender_label(user.gender.as_deref().unwrap_or("")).to_string();
    let phone = user
        .phone
        .as_deref()
        .map(format_phone)
        .unwrap_or_else(|| "N/A".to_string());
    let birth_date = user
        .date_of_birth
        .as_deref()
        .and_then(format_display_date)
        .unwrap_or_else(|| "N/A".to_string());
    let active = user.is_active == Some(true);
    let (status_class, status_label) = if active {
        ("tag tag--success", "Hoạt động")
    } else {
        ("tag tag--muted", "Không hoạt động")
    };

    rsx! {
        tr {
            td {
                div { class: "staff-cell",
                    span { class: "staff-cell__avatar", "{initial}" }
                    div {
                        span { class: "table__strong", "{name}" }
                        div { class: "staff-cell__email", "{email}" }
                    }
                }
            }
            td {
                span { class: "tag tag--info", "{role}" }
            }
            td {
                span { class: "tag tag--info", "{kind}" }
            }
            td {
                span { class: "tag tag--muted", "{gender}" }
            }
            td { "{phone}" }
            td { "{birth_date}" }
            td {
                span { class: "{status_class}", "{status_label}" }
            }
            td {
                div { class: "table__actions",
                    Link {
                        to: Route::AdminStaffDetail { id: id.clone() },
                        class: "btn btn--ghost btn--small",
                        "Xem chi tiết"
                    }
                    Link {
                        to: Route::AdminStaffEdit { id: id.clone() },
                        class: "btn btn--outline btn--small",
                        "Chỉnh sửa"
                    }
                }
            }
        }
    }
}
