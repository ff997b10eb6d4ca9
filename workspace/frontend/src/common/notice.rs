use compute::notice::NoticeBoard;
use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::settings::get_settings;

/// Current notice plus the callback that posts a new one.
#[derive(Clone, PartialEq)]
pub struct NoticeHandle {
    pub message: Option<String>,
    pub trigger_log: Callback<String>,
}

/// Transient logging notice owned by the calling component.
///
/// The board lives in a mutable ref so timers see the latest generation,
/// and the visible message is mirrored into state to trigger re-renders.
#[hook]
pub fn use_notice() -> NoticeHandle {
    let board = use_mut_ref(|| NoticeBoard::with_clear_after(get_settings().notice_duration()));
    let message = use_state(|| None::<String>);

    let trigger_log = {
        let board = board.clone();
        let message = message.clone();

        Callback::from(move |kind: String| {
            log::debug!("Log action triggered: {}", kind);

            let pending = board.borrow_mut().trigger_log(&kind);
            message.set(board.borrow().message().map(str::to_owned));

            let millis = u32::try_from(pending.after.as_millis()).unwrap_or(u32::MAX);
            let board = board.clone();
            let message = message.clone();
            let timeout_handle = Timeout::new(millis, move || {
                if board.borrow_mut().clear(pending.generation) {
                    log::trace!("Notice {} expired", pending.generation);
                    message.set(None);
                }
            });
            timeout_handle.forget();
        })
    };

    NoticeHandle {
        message: (*message).clone(),
        trigger_log,
    }
}

#[derive(Properties, PartialEq)]
pub struct NoticeBannerProps {
    pub message: String,
}

#[function_component(NoticeBanner)]
pub fn notice_banner(props: &NoticeBannerProps) -> Html {
    html! {
        <div role="status" class="alert alert-success mb-4 justify-center shadow-sm">
            <i class="fas fa-check-circle"></i>
            <span>{&props.message}</span>
        </div>
    }
}
