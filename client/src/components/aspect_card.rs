//! Card with vote buttons and animated counts for one aspect.

use leptos::prelude::*;
use votes::view::{AspectCard as CardView, Role, button_label, count_caption, test_id};
use votes::{Aspect, Direction, VoteBoard};

/// Heading, upvote/downvote buttons, and both counts for `aspect`.
///
/// Every button and count carries a `data-testid` derived from its role and
/// the aspect index so UI tests can target it directly.
#[component]
pub fn AspectCard(aspect: Aspect, board: RwSignal<VoteBoard>, on_vote: Callback<(usize, Direction)>) -> impl IntoView {
    let index = aspect.index();
    let card = Memo::new(move |_| board.with(|b| CardView::new(b, aspect)));

    view! {
        <div class="vote-card">
            <h2 class="vote-card__title">{aspect.label()}</h2>
            <div class="vote-card__actions">
                <VoteButton index=index direction=Direction::Up on_vote=on_vote/>
                <VoteButton index=index direction=Direction::Down on_vote=on_vote/>
            </div>
            <VoteCount index=index direction=Direction::Up card=card/>
            <VoteCount index=index direction=Direction::Down card=card/>
        </div>
    }
}

#[component]
fn VoteButton(index: usize, direction: Direction, on_vote: Callback<(usize, Direction)>) -> impl IntoView {
    let class = match direction {
        Direction::Up => "vote-card__button",
        Direction::Down => "vote-card__button vote-card__button--danger",
    };

    view! {
        <button
            class=class
            data-testid=test_id(direction, Role::Button, index)
            on:click=move |_| on_vote.run((index, direction))
        >
            {button_label(direction)}
        </button>
    }
}

#[component]
fn VoteCount(index: usize, direction: Direction, card: Memo<CardView>) -> impl IntoView {
    let class = move || card.with(|c| c.count(direction).class.clone());
    let count = move || card.with(|c| c.count(direction).count);

    view! {
        <p class=class data-testid=test_id(direction, Role::Count, index)>
            {count_caption(direction)}
            " "
            <strong>{count}</strong>
        </p>
    }
}
