//! Room management screen

use dioxus::prelude::*;

use crate::api::rooms::{self as rooms_api, RoomPayload, SubRoomInput};
use crate::api::use_api;
use crate::components::{use_toast, EmptyState, LoadingSpinner, PageState, Pagination};
use crate::types::{format_display_date, Room};

/// Room list with search, create/edit form and status toggling
#[component]
pub fn AdminRooms() -> Element {
    let api = use_api();
    let toast = use_toast();

    let mut page = use_signal(|| 1u32);
    let mut limit = use_signal(|| 10u32);
    let mut search_term = use_signal(String::new);
    let mut active_search = use_signal(String::new);

    let mut show_form = use_signal(|| false);
    let mut editing = use_signal(|| None::<Room>);
    let mut form_name = use_signal(String::new);
    let mut form_rows = use_signal(Vec::<SubRoomInput>::new);

    let mut rooms = use_resource({
        let api = api.clone();
        move || {
            let api = api.clone();
            async move {
                let keyword = active_search();
                let page = page();
                let limit = limit();
                if keyword.trim().is_empty() {
                    rooms_api::list(&api.rooms, page, limit).await
                } else {
                    rooms_api::search(&api.rooms, &keyword, page, limit).await
                }
            }
        }
    });

    let mut run_search = move || {
        page.set(1);
        active_search.set(search_term());
        rooms.restart();
    };

    let mut close_form = move || {
        show_form.set(false);
        editing.set(None);
        form_name.set(String::new());
        form_rows.set(Vec::new());
    };

    let open_create = move |_| {
        editing.set(None);
        form_name.set(String::new());
        form_rows.set(Vec::new());
        show_form.set(true);
    };

    let open_edit = move |room: Room| {
        form_name.set(room.name.clone());
        form_rows.set(
            room.sub_rooms
                .iter()
                .map(|sub| SubRoomInput {
                    name: sub.name.clone(),
                    max_doctors: sub.max_doctors,
                    max_nurses: sub.max_nurses,
                })
                .collect(),
        );
        editing.set(Some(room));
        show_form.set(true);
    };

    let add_row = move |_| {
        form_rows.write().push(SubRoomInput {
            name: String::new(),
            max_doctors: 1,
            max_nurses: 1,
        });
    };

    let handle_form_submit = {
        let api = api.clone();
        move |_: FormEvent| {
            let name = form_name().trim().to_string();
            if name.is_empty() {
                toast.error("Vui lòng nhập tên phòng khám!");
                return;
            }
            let payload = RoomPayload {
                name,
                sub_rooms: rooms_api::prepare_sub_rooms(&form_rows()),
            };
            let editing_id = editing().map(|room| room.id);
            let creating = editing_id.is_none();
            let api = api.clone();
            spawn(async move {
                let outcome = match editing_id {
                    Some(id) => rooms_api::update(&api.rooms, &id, &payload)
                        .await
                        .map(|_| "Cập nhật phòng khám thành công!")
                        .map_err(|err| {
                            err.message_or("Có lỗi xảy ra khi cập nhật phòng khám!")
                        }),
                    None => rooms_api::create(&api.rooms, &payload)
                        .await
                        .map(|_| "Tạo phòng khám thành công!")
                        .map_err(|err| err.message_or("Có lỗi xảy ra khi tạo phòng khám!")),
                };
                match outcome {
                    Ok(message) => {
                        toast.success(message);
                        show_form.set(false);
                        editing.set(None);
                        // New rows land on the first page; edits keep the page
                        if creating {
                            page.set(1);
                        }
                        rooms.restart();
                    }
                    Err(message) => toast.error(message),
                }
            });
        }
    };

    let form_title = if editing().is_some() {
        "Cập nhật phòng khám"
    } else {
        "Thêm phòng khám mới"
    };
    let submit_label = if editing().is_some() { "Cập nhật" } else { "Tạo mới" };

    rsx! {
        div { class: "page",
            div { class: "card",
                div { class: "page__toolbar",
                    button { class: "btn btn--primary", onclick: open_create, "Thêm phòng khám" }
                    div { class: "search-box",
                        input {
                            r#type: "text",
                            placeholder: "Tìm kiếm phòng khám...",
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
                match &*rooms.read() {
                    Some(Ok(list)) if !list.rooms.is_empty() => {
                        let state = PageState::from_response(page(), limit(), list.page, list.limit, list.total);
                        rsx! {
                            div { class: "table-wrap",
                                table { class: "table",
                                    thead {
                                        tr {
                                            th { "Tên phòng khám" }
                                            th { "Số ghế khám" }
                                            th { "Tổng nha sĩ" }
                                            th { "Tổng y tá" }
                                            th { "Trạng thái" }
                                            th { "Ngày tạo" }
                                            th { "Thao tác" }
                                        }
                                    }
                                    tbody {
                                        for room in list.rooms.iter() {
                                            RoomRow {
                                                key: "{room.id}",
                                                room: room.clone(),
                                                on_edit: open_edit,
                                                on_changed: move |_| rooms.restart(),
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
                        EmptyState { message: "Không có phòng khám nào" }
                    },
                    Some(Err(err)) => {
                        let message = err.message_or("Có lỗi xảy ra khi tải danh sách phòng khám!");
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
                                label { class: "field__label", "Tên phòng khám" }
                                input {
                                    class: "field__input",
                                    placeholder: "Nhập tên phòng khám",
                                    value: "{form_name}",
                                    oninput: move |event| form_name.set(event.value()),
                                }
                            }
                            div { class: "sub-rooms",
                                for (index, row) in form_rows().into_iter().enumerate() {
                                    div { class: "sub-rooms__row",
                                        div { class: "field",
                                            label { class: "field__label", "Tên ghế khám" }
                                            input {
                                                class: "field__input",
                                                placeholder: "Nhập tên ghế khám",
                                                value: "{row.name}",
                                                oninput: move |event| form_rows.write()[index].name = event.value(),
                                            }
                                        }
                                        div { class: "field",
                                            label { class: "field__label", "Số lượng nha sĩ tối đa" }
                                            input {
                                                class: "field__input",
                                                r#type: "number",
                                                min: "0",
                                                value: "{row.max_doctors}",
                                                oninput: move |event| {
                                                    form_rows.write()[index].max_doctors = event.value().parse().unwrap_or(0);
                                                },
                                            }
                                        }
                                        div { class: "field",
                                            label { class: "field__label", "Số lượng y tá tối đa" }
                                            input {
                                                class: "field__input",
                                                r#type: "number",
                                                min: "0",
                                                value: "{row.max_nurses}",
                                                oninput: move |event| {
                                                    form_rows.write()[index].max_nurses = event.value().parse().unwrap_or(0);
                                                },
                                            }
                                        }
                                        button {
                                            class: "btn btn--danger",
                                            r#type: "button",
                                            onclick: move |_| {
                                                form_rows.write().remove(index);
                                            },
                                            "Xóa"
                                        }
                                    }
                                }
                                button { class: "btn btn--ghost", r#type: "button", onclick: add_row, "Thêm ghế khám" }
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
struct RoomRowProps {
    room: Room,
    on_edit: EventHandler<Room>,
    on_changed: EventHandler<()>,
}

#[component]
fn RoomRow(props: RoomRowProps) -> Element {
    let api = use_api();
    let toast = use_toast();
    let on_edit = props.on_edit;
    let on_changed = props.on_changed;

    let handle_edit = {
        let room = props.room.clone();
        move |_| on_edit.call(room.clone())
    };

    let handle_toggle = {
        let api = api.clone();
        let room = props.room.clone();
        move |_| {
            let api = api.clone();
            let room = room.clone();
            spawn(async move {
                let (action, action_title) = if room.is_active {
                    ("tạm ngưng", "Tạm ngưng")
                } else {
                    ("kích hoạt", "Kích hoạt")
                };
                match rooms_api::toggle_status(&api.rooms, &room.id).await {
                    Ok(_) => {
                        toast.success(format!("{} phòng khám thành công!", action_title));
                        on_changed.call(());
                    }
                    Err(err) => toast.error(
                        err.message_or(&format!("Có lỗi xảy ra khi {} phòng khám!", action)),
                    ),
                }
            });
        }
    };

    let room = props.room;
    let chair_count = room.sub_rooms.len();
    let total_doctors = room.total_doctors();
    let total_nurses = room.total_nurses();
    let created = room
        .created_at
        .as_deref()
        .and_then(format_display_date)
        .unwrap_or_else(|| "N/A".to_string());
    let (status_class, status_label) = if room.is_active {
        ("tag tag--success", "Hoạt động")
    } else {
        ("tag tag--muted", "Không hoạt động")
    };
    let toggle_label = if room.is_active { "Tạm ngưng" } else { "Kích hoạt" };

    rsx! {
        tr {
            td {
                div { class: "room-name",
                    span { class: "room-name__title", "{room.name}" }
                    for sub in room.sub_rooms.iter() {
                        div { class: "room-name__sub",
                            "{sub.name} (BS: {sub.max_doctors}, YT: {sub.max_nurses})"
                        }
                    }
                }
            }
            td {
                span { class: "tag tag--info", "{chair_count}" }
            }
            td {
                span { class: "tag tag--success", "{total_doctors}" }
            }
            td {
                span { class: "tag tag--info", "{total_nurses}" }
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
