use crate::layout::modal_service::ModalService;
use crate::layout::Shell;
use crate::system::session::context::SessionProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide ModalService for centralized modal management
    provide_context(ModalService::new());

    view! {
        <SessionProvider>
            <Shell>
                // Page content is mounted here by the host application.
                <section class="page"></section>
            </Shell>
        </SessionProvider>
    }
}
