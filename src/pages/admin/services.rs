//! Service-catalog management screen

use dioxus::prelude::*;

use crate::api::services::{self as services_api, ServicePayload};
use crate::api::use_api;
use crate::components::{use_toast, EmptyState, LoadingSpinner, PageState, Pagination};
use crate::types::{format_display_date, format_vnd, Service, ServiceKind};

/// Service list with search, create/edit form and status toggling
#[component]
pub fn AdminServices() -> Element {
    let api = use_api();
    let toast = use_toast();

    let mut page = use_signal(|| 1u32);
    let mut limit = use_signal(|| 10u32);
    let mut search_term = use_signal(String::new);
    let mut active_search = use_signal(String::new);

    let mut show_form = use_signal(|| false);
    let mut editing = use_signal(|| None::<Service>);
    let mut form_name = use_signal(String::new);
    let mut form_kind = use_signal(String::new);
    let mut form_duration = use_signal(String::new);
    let mut form_price = use_signal(String::new);
    let mut form_description = use_signal(String::new);
    let mut form_require_exam = use_signal(|| false);

    let mut services = use_resource({
        let api = api.clone();
        move || {
            let api = api.clone();
            async move {
                let keyword = active_search();
                let page = page();
                let limit = limit();
                if keyword.trim().is_empty() {
                    services_api::list(&api.services, page, limit).await
                } else {
                    services_api::search(&api.services, &keyword, page, limit).await
                }
            }
        }
    });

    let mut run_search = move || {
        page.set(1);
        active_search.set(search_term());
        services.restart();
    };

    let mut close_form = move || {
        show_form.set(false);
        editing.set(None);
        form_name.set(String::new());
        form_kind.set(String::new());
        form_duration.set(String::new());
        form_price.set(String::new());
        form_description.set(String::new());
        form_require_exam.set(false);
    };

    let open_create = move |_| {
        editing.set(None);
        form_name.set(String::new());
        form_kind.set(String::new());
        form_duration.set(String::new());
        form_price.set(String::new());
        form_description.set(String::new());
        form_require_exam.set(false);
        show_form.set(true);
    };

    let open_edit = move |service: Service| {
        form_name.set(service.name.clone());
        form_kind.set(
            match service.kind {
                ServiceKind::Exam => "exam",
                ServiceKind::Treatment => "treatment",
                ServiceKind::Other => "",
            }
            .to_string(),
        );
        form_duration.set(service.duration.to_string());
        form_price.set(service.price.to_string());
        form_description.set(service.description.clone().unwrap_or_default());
        form_require_exam.set(service.require_exam_first);
        editing.set(Some(service));
        show_form.set(true);
    };

    let handle_form_submit = {
        let api = api.clone();
        move |_: FormEvent| {
            let name = form_name().trim().to_string();
            if name.is_empty() {
                toast.error("Vui lòng nhập tên dịch vụ!");
                return;
            }
            let kind = match form_kind().as_str() {
                "exam" => ServiceKind::Exam,
                "treatment" => ServiceKind::Treatment,
                _ => {
                    toast.error("Vui lòng chọn loại dịch vụ!");
                    return;
                }
            };
            let duration = match form_duration().trim().parse::<u32>() {
                Ok(duration) if duration >= 1 => duration,
                _ => {
                    toast.error("Vui lòng nhập thời gian!");
                    return;
                }
            };
            let price = match form_price().trim().parse::<u64>() {
                Ok(price) => price,
                Err(_) => {
                    toast.error("Vui lòng nhập giá!");
                    return;
                }
            };
            let payload = ServicePayload {
                name,
                kind,
                duration,
                price,
                description: form_description().trim().to_string(),
                require_exam_first: form_require_exam(),
            };
            let editing_id = editing().map(|service| service.id);
            let creating = editing_id.is_none();
            let api = api.clone();
            spawn(async move {
                let outcome = match editing_id {
                    Some(id) => services_api::update(&api.services, &id, &payload)
                        .await
                        .map(|_| "Cập nhật dịch vụ thành công!")
                        .map_err(|err| err.message_or("Có lỗi xảy ra khi cập nhật dịch vụ!")),
                    None => services_api::create(&api.services, &payload)
                        .await
                        .map(|_| "Tạo dịch vụ thành công!")
                        .map_err(|err| err.message_or("Có lỗi xảy ra khi tạo dịch vụ!")),
                };
                match outcome {
                    Ok(message) => {
                        toast.success(message);
                        show_form.set(false);
                        editing.set(None);
                        if creating {
                            page.set(1);
                        }
                        services.restart();
                    }
                    Err(message) => toast.error(message),
                }
            });
        }
    };

    let form_title = if editing().is_some() {
        "Cập nhật dịch vụ"
    } else {
        "Thêm dịch vụ mới"
    };
    let submit_label = if editing().is_some() { "Cập nhật" } else { "Tạo mới" };

    rsx! {
        div { class: "page",
            div { class: "card",
                div { class: "page__toolbar",
                    button { class: "btn btn--primary", onclick: open_create, "Thêm dịch vụ" }
                    div { class: "search-box",
                        input {
                            r#type: "text",
                            placeholder: "Tìm kiếm dịch vụ theo tên",
                            value: "{search_term}",
                            oninput: move |event| search_term.set(event.value()),
                            onkeydown: move |event| {
                                if event.key() == Key::Enter {
                                    run_search();
                                }
                            },
                        }
                        button { class: "btn btn--ghost", onclick: move |_| run_search(), "Tìm kiếm" }
                    }
                }
                match &*services.read() {
                    Some(Ok(list)) if !list.services.is_empty() => {
                        let state = PageState::from_response(page(), limit(), list.page, list.limit, list.total);
                        rsx! {
                            div { class: "table-wrap",
                                table { class: "table",
                                    thead {
                                        tr {
                                            th { "Tên dịch vụ" }
                                            th { "Mô tả" }
                                            th { "Loại" }
                                            th { "Thời gian" }
                                            th { "Giá" }
                                            th { "Trạng thái" }
                                            th { "Ngày tạo" }
                                            th { "Thao tác" }
                                        }
                                    }
                                    tbody {
                                        for service in list.services.iter() {
                                            ServiceRow {
                                                key: "{service.id}",
                                                service: service.clone(),
                                                on_edit: open_edit,
                                                on_changed: move |_| services.restart(),
                                            }
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
                        EmptyState { message: "Không có dịch vụ nào" }
                    },
                    Some(Err(err)) => {
                        let message = err.message_or("Có lỗi xảy ra khi tải danh sách dịch vụ!");
                        rsx! {
                            div { class: "error-state", "{message}" }
                        }
                    }
                    None => rsx! {
                        LoadingSpinner {}
                    },
                }
            }
            if show_form() {
                div { class: "modal-backdrop", onclick: move |_| close_form(),
                    div {
                        class: "modal",
                        onclick: move |event| event.stop_propagation(),
                        h3 { class: "modal__title", "{form_title}" }
                        form { class: "modal__form", onsubmit: handle_form_submit,
                            div { class: "field",
                                label { class: "field__label", "Tên dịch vụ" }
                                input {
                                    class: "field__input",
                                    placeholder: "Nhập tên dịch vụ",
                                    value: "{form_name}",
                                    oninput: move |event| form_name.set(event.value()),
                                }
                            }
                            div { class: "field",
                                label { class: "field__label", "Loại dịch vụ" }
                                select {
                                    class: "field__input",
                                    value: "{form_kind}",
                                    onchange: move |event| form_kind.set(event.value()),
                                    option { value: "", "Chọn loại dịch vụ" }
                                    option { value: "exam", selected: form_kind() == "exam", "Khám" }
                                    option { value: "treatment", selected: form_kind() == "treatment", "Điều trị" }
                                }
                            }
                            div { class: "field-group",
                                div { class: "field field--grow",
                                    label { class: "field__label", "Thời gian (phút)" }
                                    input {
                                        class: "field__input",
                                        r#type: "number",
                                        min: "1",
                                        placeholder: "Nhập thời gian",
                                        value: "{form_duration}",
                                        oninput: move |event| form_duration.set(event.value()),
                                    }
                                }
                                div { class: "field field--grow",
                                    label { class: "field__label", "Giá" }
                                    input {
                                        class: "field__input",
                                        r#type: "number",
                                        min: "0",
                                        placeholder: "Nhập giá",
                                        value: "{form_price}",
                                        oninput: move |event| form_price.set(event.value()),
                                    }
                                }
                            }
                            div { class: "field",
                                label { class: "field__label", "Mô tả" }
                                textarea {
                                    class: "field__input",
                                    rows: "3",
                                    placeholder: "Nhập mô tả dịch vụ",
                                    value: "{form_description}",
                                    oninput: move |event| form_description.set(event.value()),
                                }
                            }
                            label { class: "field__checkbox",
                                input {
                                    r#type: "checkbox",
                                    checked: form_require_exam(),
                                    onchange: move |event| form_require_exam.set(event.checked()),
                                }
                                "Yêu cầu khám trước"
                            }
                            div { class: "modal__actions",
                                button { class: "btn btn--ghost", r#type: "button", onclick: move |_| close_form(), "Hủy" }
                                button { class: "btn btn--primary", r#type: "submit", "{submit_label}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct ServiceRowProps {
    service: Service,
    on_edit: EventHandler<Service>,
    on_changed: EventHandler<()>,
}

#[component]
fn ServiceRow(props: ServiceRowProps) -> Element {
    let api = use_api();
    let toast = use_toast();
    let on_edit = props.on_edit;
    let on_changed = props.on_changed;

    let handle_edit = {
        let service = props.service.clone();
        move |_| on_edit.call(service.clone())
    };

    let handle_toggle = {
        let api = api.clone();
        let service = props.service.clone();
        move |_| {
            let api = api.clone();
            let service = service.clone();
            spawn(async move {
                let (action, action_title) = if service.is_active {
                    ("tạm ngưng", "Tạm ngưng")
                } else {
                    ("kích hoạt", "Kích hoạt")
                };
                match services_api::toggle_status(&api.services, &service.id).await {
                    Ok(_) => {
                        toast.success(format!("{} dịch vụ thành công!", action_title));
                        on_changed.call(());
                    }
                    Err(err) => toast.error(
                        err.message_or(&format!("Có lỗi xảy ra khi {} dịch vụ!", action)),
                    ),
                }
            });
        }
    };

    let service = props.service;
    let kind_label = service.kind.label();
    let kind_class = match service.kind {
        ServiceKind::Exam => "tag tag--success",
        _ => "tag tag--info",
    };
    let price = format_vnd(service.price);
    let description = service.description.clone().unwrap_or_default();
    let created = service
        .created_at
        .as_deref()
        .and_then(format_display_date)
        .unwrap_or_else(|| "N/A".to_string());
    let (status_class, status_label) = if service.is_active {
        ("tag tag--success", "Hoạt động")
    } else {
        ("tag tag--muted", "Không hoạt động")
    };
    let toggle_label = if service.is_active { "Tạm ngưng" } else { "Kích hoạt" };

    rsx! {
        tr {
            td {
                span { class: "table__strong", "{service.name}" }
            }
            td { class: "table__ellipsis", title: "{description}", "{description}" }
            td {
                span { class: "{kind_class}", "{kind_label}" }
            }
            td {
                span { class: "tag tag--success", "{service.duration} phút" }
            }
            td {
                span { class: "table__price", "{price}" }
            }
            td {
                span { class: "{status_class}", "{status_label}" }
            }
            td { "{created}" }
            td {
                div { class: "table__actions",
                    button { class: "btn btn--ghost btn--small", onclick: handle_edit, "Sửa" }
                    button { class: "btn btn--outline btn--small", onclick: handle_toggle, "{toggle_label}" }
                }
            }
        }
    }
}
