//! Shared notice area with success/error styling and auto-hide.
//!
//! DESIGN
//! ======
//! One cancellable timer handle is kept per area; arming a new notice drops
//! the previous timeout, and the generation token makes a timer that
//! already fired a no-op against any newer notice.

use leptos::prelude::*;

use crate::state::notice::NoticeState;

/// The message area below the signup form.
#[component]
pub fn MessageArea() -> impl IntoView {
    let notice = expect_context::<RwSignal<NoticeState>>();

    #[cfg(feature = "csr")]
    {
        use std::cell::RefCell;

        use gloo_timers::callback::Timeout;

        use crate::state::notice::NOTICE_TIMEOUT_MS;

        let pending: RefCell<Option<Timeout>> = RefCell::new(None);
        Effect::new(move || {
            let state = notice.get();
            if !state.visible {
                return;
            }
            let token = state.generation();
            let timeout = Timeout::new(NOTICE_TIMEOUT_MS, move || {
                notice.update(|n| n.hide(token));
            });
            // Replacing the handle drops, and thereby cancels, any pending hide.
            *pending.borrow_mut() = Some(timeout);
        });
    }

    view! {
        <div
            id="message"
            class=move || {
                let state = notice.get();
                if state.visible { state.kind.css_class() } else { "hidden" }
            }
        >
            {move || notice.get().text}
        </div>
    }
}
