use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::layout::modal_service::ModalService;
use crate::system::session::api;
use crate::system::session::context::use_session;

/// Body of the namespace-switch dialog.
///
/// Fetches the switchable namespaces when the dialog opens and posts the
/// change request when an entry is clicked.
#[component]
pub fn NamespaceSwitcher() -> impl IntoView {
    let session = use_session();
    let modal = use_context::<ModalService>().expect("ModalService not provided in context");

    let namespaces = RwSignal::new(Option::<Vec<String>>::None);
    let error_message = RwSignal::new(Option::<String>::None);

    spawn_local(async move {
        match api::available_namespaces().await {
            Ok(list) => namespaces.set(Some(list)),
            Err(e) => error_message.set(Some(e)),
        }
    });

    let select_namespace = move |namespace: String| {
        spawn_local(async move {
            match api::set_namespace(&namespace).await {
                Ok(()) => {
                    log!("Sent namespace change request: {}", namespace);
                    session.set_namespace(&namespace);
                    modal.hide();
                }
                Err(e) => error_message.set(Some(e)),
            }
        });
    };

    view! {
        <div class="namespace_prompt">
            <h3>"Switch namespace"</h3>

            <Show when=move || error_message.get().is_some()>
                <div class="error-message">
                    {move || error_message.get().unwrap_or_default()}
                </div>
            </Show>

            {move || match namespaces.get() {
                Some(list) => view! {
                    <ul class="namespace_list">
                        {list.into_iter().map(|namespace| {
                            let label = namespace.clone();
                            let attr_value = namespace.clone();
                            view! {
                                <li
                                    data-namespace=attr_value
                                    on:click=move |_| select_namespace(namespace.clone())
                                >
                                    {label}
                                </li>
                            }
                        }).collect_view()}
                    </ul>
                }.into_any(),
                None => view! {
                    <div class="namespace_list--loading">"Loading namespaces..."</div>
                }.into_any(),
            }}
        </div>
    }
}
