use leptos::prelude::window_event_listener;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::layout::header::nav::NavMenu;
use crate::layout::modal_service::ModalService;
use crate::shared::icons;
use crate::system::session::context::use_session;

/// Page header: navigation, current user and namespace, namespace switching.
///
/// Hidden until the session config has been read. The user area doubles as a
/// dropdown whose `open` state is closed by any click landing outside it.
#[component]
pub fn Header() -> impl IntoView {
    let session = use_session();
    let modal = use_context::<ModalService>().expect("ModalService not provided in context");

    let dropdown_open = RwSignal::new(false);

    // Window-level listener, removed when this component's owner is
    // disposed. Clicks inside a `.dropdown` ancestor chain are ignored so
    // the toggle handler keeps control of those.
    let _ = window_event_listener(leptos::ev::click, move |ev: leptos::ev::MouseEvent| {
        let inside_dropdown = ev
            .target()
            .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
            .and_then(|el| el.closest(".dropdown").ok().flatten())
            .is_some();

        if !inside_dropdown {
            dropdown_open.set(false);
        }
    });

    let userid = move || {
        session
            .current_user
            .get()
            .map(|user| user.userid)
            .unwrap_or_default()
    };
    let namespace = move || {
        session
            .current_user
            .get()
            .map(|user| user.namespace)
            .unwrap_or_default()
    };

    view! {
        <header
            id="zbase_header"
            class="header"
            class:hidden=move || session.current_user.get().is_none()
        >
            <span class="header__brand">"zbase"</span>

            <NavMenu />

            <div
                class="dropdown"
                class:open=move || dropdown_open.get()
                on:click=move |_| dropdown_open.update(|open| *open = !*open)
            >
                <div class="dropdown__summary">
                    <span class="userid_info">{userid}</span>
                    <span class="namespace_info">{namespace}</span>
                    {icons::icon("chevron-down")}
                </div>
                <ul class="dropdown__menu">
                    <li
                        class="change_namespace"
                        on:click=move |ev: leptos::ev::MouseEvent| {
                            ev.stop_propagation();
                            dropdown_open.set(false);
                            modal.show();
                        }
                    >
                        "Change namespace..."
                    </li>
                </ul>
            </div>
        </header>
    }
}
