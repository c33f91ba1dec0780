//! Work-shift management screen

use dioxus::prelude::*;

use crate::api::shifts::{self as shifts_api, ShiftPayload};
use crate::api::use_api;
use crate::components::{use_toast, EmptyState, LoadingSpinner};
use crate::types::Shift;

/// "HH:MM" from the two number inputs. Empty or out-of-range hours mean the
/// time has not been chosen; a missing minute defaults to zero.
fn make_time(hour: &str, minute: &str) -> Option<String> {
    let hour: u32 = hour.trim().parse().ok()?;
    let minute: u32 = minute.trim().parse().unwrap_or(0);
    if hour > 23 || minute > 59 {
        return None;
    }
    Some(format!("{:02}:{:02}", hour, minute))
}

/// "4h 30m" style length of a shift, blank when either end is malformed.
fn duration_caption(start: &str, end: &str) -> String {
    fn minutes(value: &str) -> Option<i64> {
        let (hour, minute) = value.split_once(':')?;
        Some(hour.trim().parse::<i64>().ok()? * 60 + minute.trim().parse::<i64>().ok()?)
    }
    match (minutes(start), minutes(end)) {
        (Some(start), Some(end)) if end >= start => {
            format!("{}h {}m", (end - start) / 60, (end - start) % 60)
        }
        _ => String::new(),
    }
}

/// Shift list with search, inline create/edit form and status toggling
#[component]
pub fn AdminShifts() -> Element {
    let api = use_api();
    let toast = use_toast();

    let mut search_term = use_signal(String::new);
    let mut active_search = use_signal(String::new);

    let mut show_form = use_signal(|| false);
    let mut editing = use_signal(|| None::<Shift>);
    let mut form_name = use_signal(String::new);
    let mut start_hour = use_signal(String::new);
    let mut start_minute = use_signal(String::new);
    let mut end_hour = use_signal(String::new);
    let mut end_minute = use_signal(String::new);
    let mut form_active = use_signal(|| true);

    let mut shifts = use_resource({
        let api = api.clone();
        move || {
            let api = api.clone();
            async move {
                let keyword = active_search();
                if keyword.trim().is_empty() {
                    shifts_api::list(&api.shifts).await
                } else {
                    shifts_api::search(&api.shifts, &keyword).await
                }
            }
        }
    });

    let mut run_search = move || {
        active_search.set(search_term());
        shifts.restart();
    };

    let mut refresh = move || {
        search_term.set(String::new());
        active_search.set(String::new());
        shifts.restart();
    };

    let mut reset_form = move || {
        editing.set(None);
        form_name.set(String::new());
        start_hour.set(String::new());
        start_minute.set(String::new());
        end_hour.set(String::new());
        end_minute.set(String::new());
        form_active.set(true);
    };

    let mut close_form = move || {
        show_form.set(false);
        reset_form();
    };

    let open_create = move |_| {
        reset_form();
        show_form.set(true);
    };

    let open_edit = move |shift: Shift| {
        form_name.set(shift.name.clone());
        if let Some((hour, minute)) = shift.start_time.split_once(':') {
            start_hour.set(hour.to_string());
            start_minute.set(minute.to_string());
        }
        if let Some((hour, minute)) = shift.end_time.split_once(':') {
            end_hour.set(hour.to_string());
            end_minute.set(minute.to_string());
        }
        form_active.set(shift.is_active);
        editing.set(Some(shift));
        show_form.set(true);
    };

    let handle_form_submit = {
        let api = api.clone();
        move |_: FormEvent| {
            let name = form_name().trim().to_string();
            if name.is_empty() {
                toast.error("Vui lòng nhập tên ca làm việc!");
                return;
            }
            let Some(start_time) = make_time(&start_hour(), &start_minute()) else {
                toast.error("Vui lòng chọn giờ bắt đầu!");
                return;
            };
            let Some(end_time) = make_time(&end_hour(), &end_minute()) else {
                toast.error("Vui lòng chọn giờ kết thúc!");
                return;
            };
            if start_time >= end_time {
                toast.error("Giờ bắt đầu phải nhỏ hơn giờ kết thúc!");
                return;
            }
            let payload = ShiftPayload {
                name,
                start_time,
                end_time,
            };
            let editing_id = editing().map(|shift| shift.id);
            let api = api.clone();
            spawn(async move {
                let outcome = match editing_id {
                    Some(id) => shifts_api::update(&api.shifts, &id, &payload)
                        .await
                        .map(|_| "Cập nhật ca làm việc thành công!")
                        .map_err(|err| {
                            err.message_or("Có lỗi xảy ra khi cập nhật ca làm việc!")
                        }),
                    None => shifts_api::create(&api.shifts, &payload)
                        .await
                        .map(|_| "Tạo ca làm việc thành công!")
                        .map_err(|err| err.message_or("Có lỗi xảy ra khi tạo ca làm việc!")),
                };
                match outcome {
                    Ok(message) => {
                        toast.success(message);
                        show_form.set(false);
                        editing.set(None);
                        form_name.set(String::new());
                        start_hour.set(String::new());
                        start_minute.set(String::new());
                        end_hour.set(String::new());
                        end_minute.set(String::new());
                        form_active.set(true);
                        shifts.restart();
                    }
                    Err(message) => toast.error(message),
                }
            });
        }
    };

    let total = match &*shifts.read() {
        Some(Ok(list)) => list.len(),
        _ => 0,
    };
    let form_title = if editing().is_some() {
        "Cập nhật ca làm việc"
    } else {
        "Tạo ca làm việc mới"
    };
    let submit_label = if editing().is_some() { "Cập nhật" } else { "Tạo mới" };

    rsx! {
        div { class: "page",
            div { class: "card page__toolbar",
                h2 { class: "page__title", "Quản lý ca làm việc" }
                div { class: "page__toolbar-group",
                    span { class: "total-count", "Tổng: {total} ca" }
                    button { class: "btn btn--primary", onclick: open_create, "Tạo ca mới" }
                }
            }
            if show_form() {
                div { class: "card form-section",
                    h3 { class: "modal__title", "{form_title}" }
                    form { onsubmit: handle_form_submit,
                        div { class: "field-group",
                            div { class: "field field--grow",
                                label { class: "field__label", "Tên ca làm việc *" }
                                input {
                                    class: "field__input",
                                    placeholder: "Ví dụ: Ca sáng, Ca chiều...",
                                    value: "{form_name}",
                                    oninput: move |event| form_name.set(event.value()),
                                }
                            }
                            div { class: "field",
                                label { class: "field__label", "Trạng thái" }
                                select {
                                    class: "field__input",
                                    disabled: editing().is_some(),
                                    value: "{form_active}",
                                    onchange: move |event| form_active.set(event.value() == "true"),
                                    option { value: "true", selected: form_active(), "Hoạt động" }
                                    option { value: "false", selected: !form_active(), "Tạm dừng" }
                                }
                            }
                        }
                        div { class: "field-group",
                            div { class: "field",
                                label { class: "field__label", "Giờ bắt đầu *" }
                                div { class: "time-inputs",
                                    input {
                                        class: "field__input",
                                        r#type: "number",
                                        min: "0",
                                        max: "23",
                                        placeholder: "Giờ",
                                        value: "{start_hour}",
                                        oninput: move |event| start_hour.set(event.value()),
                                    }
                                    span { class: "time-inputs__sep", ":" }
                                    input {
                                        class: "field__input",
                                        r#type: "number",
                                        min: "0",
                                        max: "59",
                                        placeholder: "Phút",
                                        value: "{start_minute}",
                                        oninput: move |event| start_minute.set(event.value()),
                                    }
                                }
                            }
                            div { class: "field",
                                label { class: "field__label", "Giờ kết thúc *" }
                                div { class: "time-inputs",
                                    input {
                                        class: "field__input",
                                        r#type: "number",
                                        min: "0",
                                        max: "23",
                                        placeholder: "Giờ",
                                        value: "{end_hour}",
                                        oninput: move |event| end_hour.set(event.value()),
                                    }
                                    span { class: "time-inputs__sep", ":" }
                                    input {
                                        class: "field__input",
                                        r#type: "number",
                                        min: "0",
                                        max: "59",
                                        placeholder: "Phút",
                                        value: "{end_minute}",
                                        oninput: move |event| end_minute.set(event.value()),
                                    }
                                }
                            }
                        }
                        div { class: "modal__actions",
                            button { class: "btn btn--ghost", r#type: "button", onclick: move |_| close_form(), "Hủy" }
                            button { class: "btn btn--primary", r#type: "submit", "{submit_label}" }
                        }
                    }
                }
            }
            div { class: "card search-section",
                div { class: "search-box",
                    input {
                        r#type: "text",
                        placeholder: "Tìm kiếm ca làm việc theo tên...",
                        value: "{search_term}",
                        oninput: move |event| search_term.set(event.value()),
                        onkeydown: move |event| {
                            if event.key() == Key::Enter {
                                run_search();
                            }
                        },
                    }
                    button { class: "btn btn--primary", onclick: move |_| run_search(), "Tìm kiếm" }
                    button { class: "btn btn--ghost", onclick: move |_| refresh(), "Làm mới" }
                }
            }
            div { class: "card",
                match &*shifts.read() {
                    Some(Ok(list)) if !list.is_empty() => rsx! {
                        div { class: "table-wrap",
                            table { class: "table",
                                thead {
                                    tr {
                                        th { "Tên ca" }
                                        th { "Giờ bắt đầu" }
                                        th { "Giờ kết thúc" }
                                        th { "Thời gian" }
                                        th { "Trạng thái" }
                                        th { "Thao tác" }
                                    }
                                }
                                tbody {
                                    for shift in list.iter() {
                                        ShiftRow {
                                            key: "{shift.id}",
                                            shift: shift.clone(),
                                            on_edit: open_edit,
                                            on_changed: move |_| shifts.restart(),
                                        }
                                    }
                                }
                            }
                        }
                    },
                    Some(Ok(_)) => rsx! {
                        EmptyState { message: "Không có dữ liệu" }
                    },
                    Some(Err(err)) => {
                        let message = err.message_or("Có lỗi xảy ra khi tải danh sách ca làm việc!");
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
struct ShiftRowProps {
    shift: Shift,
    on_edit: EventHandler<Shift>,
    on_changed: EventHandler<()>,
}

#[component]
fn ShiftRow(props: ShiftRowProps) -> Element {
    let api = use_api();
    let toast = use_toast();
    let on_edit = props.on_edit;
    let on_changed = props.on_changed;

    let handle_edit = {
        let shift = props.shift.clone();
        move |_| on_edit.call(shift.clone())
    };

    let handle_toggle = {
        let api = api.clone();
        let id = props.shift.id.clone();
        move |_| {
            let api = api.clone();
            let id = id.clone();
            spawn(async move {
                match shifts_api::toggle_status(&api.shifts, &id).await {
                    Ok(_) => {
                        toast.success("Cập nhật trạng thái thành công!");
                        on_changed.call(());
                    }
                    Err(err) => toast
                        .error(err.message_or("Có lỗi xảy ra khi cập nhật trạng thái!")),
                }
            });
        }
    };

    let shift = props.shift;
    let duration = duration_caption(&shift.start_time, &shift.end_time);
    let (status_class, status_label) = if shift.is_active {
        ("tag tag--success", "Đang hoạt động")
    } else {
        ("tag tag--muted", "Đã hủy")
    };
    let toggle_label = if shift.is_active { "Tạm ngưng" } else { "Kích hoạt" };

    rsx! {
        tr {
            td {
                span { class: "table__strong", "{shift.name}" }
            }
            td { "{shift.start_time}" }
            td { "{shift.end_time}" }
            td {
                span { class: "tag tag--info", "{duration}" }
            }
            td {
                span { class: "{status_class}", "{status_label}" }
            }
            td {
                div { class: "table__actions",
                    button { class: "btn btn--ghost btn--small", onclick: handle_edit, "Cập nhật" }
                    button { class: "btn btn--outline btn--small", onclick: handle_toggle, "{toggle_label}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn make_time_pads_and_defaults_minutes() {
        assert_eq!(make_time("8", "5").as_deref(), Some("08:05"));
        assert_eq!(make_time("8", "").as_deref(), Some("08:00"));
        assert_eq!(make_time("", "30"), None);
        assert_eq!(make_time("24", "0"), None);
        assert_eq!(make_time("8", "60"), None);
    }

    #[test]
    fn duration_caption_subtracts_times() {
        assert_eq!(duration_caption("08:00", "12:30"), "4h 30m");
        assert_eq!(duration_caption("08:00", "08:00"), "0h 0m");
        assert_eq!(duration_caption("junk", "12:30"), "");
        assert_eq!(duration_caption("13:00", "12:00"), "");
    }
}
