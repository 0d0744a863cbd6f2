use leptos::prelude::window_event_listener;
use leptos::prelude::*;

#[derive(Debug, Clone, Copy)]
pub struct NavItem {
    pub href: &'static str,
    pub title: &'static str,
}

/// Top-level console sections rendered into the header nav.
pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { href: "/", title: "Home" },
    NavItem { href: "/reports", title: "Reports" },
    NavItem { href: "/queries", title: "Queries" },
    NavItem { href: "/settings", title: "Settings" },
];

/// Index of the nav entry to highlight for `path`.
///
/// Entries are scanned in order and the last one whose href is a prefix of
/// the path wins, so at most one entry is ever highlighted.
pub fn active_nav_index(path: &str, items: &[NavItem]) -> Option<usize> {
    let mut active = None;
    for (i, item) in items.iter().enumerate() {
        if path.starts_with(item.href) {
            active = Some(i);
        }
    }
    active
}

/// Header navigation: internal links handled in-app via the history API.
#[component]
pub fn NavMenu() -> impl IntoView {
    let current_path = RwSignal::new(current_pathname());

    // Keep the highlight in sync with browser back/forward.
    let _ = window_event_listener(leptos::ev::popstate, move |_| {
        current_path.set(current_pathname());
    });

    let active = Memo::new(move |_| active_nav_index(&current_path.get(), NAV_ITEMS));

    view! {
        <nav class="header__nav">
            {NAV_ITEMS.iter().enumerate().map(|(i, item)| {
                let href = item.href;
                view! {
                    <a
                        class="nav"
                        class:active=move || active.get() == Some(i)
                        href=href
                        on:click=move |ev: leptos::ev::MouseEvent| {
                            ev.prevent_default();
                            navigate_to(href);
                            current_path.set(current_pathname());
                        }
                    >
                        {item.title}
                    </a>
                }
            }).collect_view()}
        </nav>
    }
}

fn current_pathname() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// Push an internal navigation onto the history stack without a page load.
fn navigate_to(href: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ =
                history.push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(href));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ITEMS: &[NavItem] = &[
        NavItem { href: "/", title: "Home" },
        NavItem { href: "/dashboard", title: "Dashboard" },
    ];

    #[test]
    fn test_later_match_beats_earlier() {
        assert_eq!(active_nav_index("/dashboard/x", ITEMS), Some(1));
        assert_eq!(active_nav_index("/dashboard", ITEMS), Some(1));
    }

    #[test]
    fn test_root_prefix_matches_everything() {
        assert_eq!(active_nav_index("/anything", ITEMS), Some(0));
        assert_eq!(active_nav_index("/", ITEMS), Some(0));
    }

    #[test]
    fn test_no_match() {
        let items = &[NavItem { href: "/reports", title: "Reports" }];
        assert_eq!(active_nav_index("/queries", items), None);
    }

    #[test]
    fn test_last_match_wins_not_best_match() {
        // Scanned in order, so a later broad prefix overrides an earlier
        // longer one.
        let items = &[
            NavItem { href: "/dashboard", title: "Dashboard" },
            NavItem { href: "/", title: "Home" },
        ];
        assert_eq!(active_nav_index("/dashboard/x", items), Some(1));
    }
}
