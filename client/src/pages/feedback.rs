//! Landing page hosting the feedback board.

use leptos::prelude::*;

use crate::components::feedback_board::FeedbackBoard;

#[component]
pub fn FeedbackPage() -> impl IntoView {
    view! {
        <main class="feedback-page">
            <h1 class="feedback-page__title">"Code Review Feedback"</h1>
            <FeedbackBoard/>
        </main>
    }
}
