use leptos::prelude::*;

use crate::shared::icons;

/// Centralized open/closed state for the modal layer.
#[derive(Clone, Copy)]
pub struct ModalService {
    is_visible: RwSignal<bool>,
}

impl ModalService {
    pub fn new() -> Self {
        Self {
            is_visible: RwSignal::new(false),
        }
    }

    /// Show the modal
    pub fn show(&self) {
        self.is_visible.set(true);
    }

    /// Hide the modal
    pub fn hide(&self) {
        self.is_visible.set(false);
    }

    /// Check whether the modal is open
    pub fn is_open(&self) -> bool {
        self.is_visible.get()
    }
}

/// Overlay dialog component.
///
/// Content is rebuilt on every open and torn down on close. A click on the
/// overlay or the close button hides the dialog; clicks inside the content
/// do not.
///
/// Usage:
/// ```ignore
/// let modal = use_context::<ModalService>().unwrap();
/// modal.show();
///
/// view! {
///     <Modal>
///         <MyComponent />
///     </Modal>
/// }
/// ```
#[component]
pub fn Modal(children: ChildrenFn) -> impl IntoView {
    let modal = use_context::<ModalService>().expect("ModalService not provided in context");

    view! {
        {move || {
            if modal.is_visible.get() {
                view! {
                    <div
                        class="z-modal__overlay"
                        on:click=move |_| modal.hide()
                    >
                        <div
                            class="z-modal"
                            on:click=|e| e.stop_propagation()
                        >
                            <button
                                class="z-modal__close"
                                aria-label="Close"
                                on:click=move |_| modal.hide()
                            >
                                {icons::icon("x")}
                            </button>
                            {children()}
                        </div>
                    </div>
                }.into_any()
            } else {
                view! { <></> }.into_any()
            }
        }}
    }
}
