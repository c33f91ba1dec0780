//! Table pagination state and controls

use dioxus::prelude::*;

/// Page-size choices every list screen offers.
pub const PAGE_SIZE_OPTIONS: [u32; 3] = [2, 5, 10];

/// Client-side view of one paginated listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    /// 1-based current page
    pub page: u32,
    pub limit: u32,
    pub total: u64,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            page: 1,
            limit: 10,
            total: 0,
        }
    }
}

impl PageState {
    /// Merge the paging echo from a list response with what was requested.
    /// The services echo the effective page and limit; zero means the field
    /// was missing from the response.
    pub fn from_response(
        requested_page: u32,
        requested_limit: u32,
        page: u32,
        limit: u32,
        total: u64,
    ) -> Self {
        Self {
            page: if page > 0 { page } else { requested_page.max(1) },
            limit: if limit > 0 {
                limit
            } else {
                requested_limit.max(1)
            },
            total,
        }
    }

    pub fn total_pages(&self) -> u32 {
        if self.total == 0 || self.limit == 0 {
            return 1;
        }
        self.total.div_ceil(self.limit as u64) as u32
    }

    pub fn clamp_page(&self, page: u32) -> u32 {
        page.clamp(1, self.total_pages())
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }

    /// Range caption, e.g. "11-20 của 45".
    pub fn range_caption(&self) -> String {
        if self.total == 0 {
            return "0-0 của 0".to_string();
        }
        let start = (self.page.max(1) as u64 - 1) * self.limit as u64 + 1;
        let end = (start + self.limit as u64 - 1).min(self.total);
        format!("{}-{} của {}", start, end, self.total)
    }
}

#[component]
pub fn Pagination(
    state: PageState,
    on_page: EventHandler<u32>,
    on_limit: EventHandler<u32>,
) -> Element {
    let caption = state.range_caption();
    let total_pages = state.total_pages();

    rsx! {
        div { class: "pagination",
            span { class: "pagination__caption", "{caption}" }
            div { class: "pagination__controls",
                button {
                    class: "btn btn--ghost",
                    disabled: !state.has_prev(),
                    onclick: move |_| on_page.call(state.clamp_page(state.page.saturating_sub(1))),
                    "Trước"
                }
                span { class: "pagination__page", "Trang {state.page}/{total_pages}" }
                button {
                    class: "btn btn--ghost",
                    disabled: !state.has_next(),
                    onclick: move |_| on_page.call(state.clamp_page(state.page + 1)),
                    "Sau"
                }
                select {
                    class: "pagination__size",
                    value: "{state.limit}",
                    onchange: move |event| {
                        if let Ok(limit) = event.value().parse::<u32>() {
                            on_limit.call(limit);
                        }
                    },
                    for option in PAGE_SIZE_OPTIONS {
                        option {
                            value: "{option}",
                            selected: state.limit == option,
                            "{option} / trang"
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_rounds_up() {
        let state = PageState {
            page: 1,
            limit: 10,
            total: 45,
        };
        assert_eq!(state.total_pages(), 5);

        let exact = PageState {
            page: 1,
            limit: 10,
            total: 20,
        };
        assert_eq!(exact.total_pages(), 2);
    }

    #[test]
    fn empty_listing_still_has_one_page() {
        let state = PageState {
            page: 1,
            limit: 10,
            total: 0,
        };
        assert_eq!(state.total_pages(), 1);
        assert!(!state.has_prev());
        assert!(!state.has_next());
    }

    #[test]
    fn clamp_page_stays_in_range() {
        let state = PageState {
            page: 3,
            limit: 10,
            total: 45,
        };
        assert_eq!(state.clamp_page(0), 1);
        assert_eq!(state.clamp_page(3), 3);
        assert_eq!(state.clamp_page(99), 5);
    }

    #[test]
    fn range_caption_covers_first_middle_and_last_pages() {
        let first = PageState {
            page: 1,
            limit: 10,
            total: 45,
        };
        assert_eq!(first.range_caption(), "1-10 của 45");

        let middle = PageState {
            page: 2,
            limit: 10,
            total: 45,
        };
        assert_eq!(middle.range_caption(), "11-20 của 45");

        let last = PageState {
            page: 5,
            limit: 10,
            total: 45,
        };
        assert_eq!(last.range_caption(), "41-45 của 45");

        let empty = PageState {
            page: 1,
            limit: 10,
            total: 0,
        };
        assert_eq!(empty.range_caption(), "0-0 của 0");
    }

    #[test]
    fn from_response_prefers_the_echoed_paging() {
        let state = PageState::from_response(3, 10, 2, 5, 12);
        assert_eq!(state.page, 2);
        assert_eq!(state.limit, 5);
        assert_eq!(state.total, 12);
    }

    #[test]
    fn from_response_falls_back_to_the_request() {
        let state = PageState::from_response(3, 10, 0, 0, 12);
        assert_eq!(state.page, 3);
        assert_eq!(state.limit, 10);

        let degenerate = PageState::from_response(0, 0, 0, 0, 0);
        assert_eq!(degenerate.page, 1);
        assert_eq!(degenerate.limit, 1);
    }
}
