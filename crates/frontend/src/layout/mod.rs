pub mod header;
pub mod modal_service;

use leptos::prelude::*;

use header::namespace_modal::NamespaceSwitcher;
use header::Header;
use modal_service::Modal;

/// Application shell: header above the content slot, modal layer on top.
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <Header />
        <main class="main-content">
            {children()}
        </main>
        <Modal>
            <NamespaceSwitcher />
        </Modal>
    }
}
