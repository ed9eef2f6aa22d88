use super::*;

// =============================================================
// Identifiers
// =============================================================

#[test]
fn test_ids_follow_role_and_index() {
    assert_eq!(test_id(Direction::Up, Role::Button, 2), "upvote-btn-2");
    assert_eq!(test_id(Direction::Down, Role::Button, 0), "downvote-btn-0");
    assert_eq!(test_id(Direction::Up, Role::Count, 4), "upvote-count-4");
    assert_eq!(test_id(Direction::Down, Role::Count, 3), "downvote-count-3");
}

#[test]
fn all_ids_are_unique() {
    let view = BoardView::from_board(&VoteBoard::new());
    let mut ids = view
        .cards
        .iter()
        .flat_map(|card| {
            [&card.upvote, &card.downvote]
                .into_iter()
                .flat_map(|c| [c.button_id.clone(), c.count_id.clone()])
        })
        .collect::<Vec<_>>();
    let total = ids.len();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), total);
    assert_eq!(total, Aspect::ALL.len() * 4);
}

// =============================================================
// Board view
// =============================================================

#[test]
fn fresh_view_lists_aspects_in_order_with_zero_counts() {
    let view = BoardView::from_board(&VoteBoard::new());
    let labels = view.cards.iter().map(|c| c.label).collect::<Vec<_>>();
    assert_eq!(labels, ["Readability", "Performance", "Security", "Documentation", "Testing"]);
    for card in &view.cards {
        assert_eq!(card.upvote.count, 0);
        assert_eq!(card.downvote.count, 0);
        assert_eq!(card.upvote.class, COUNT_CLASS);
        assert!(!card.downvote.animating);
    }
}

#[test]
fn upvoting_testing_updates_only_its_card() {
    let mut board = VoteBoard::new();
    board.upvote(4).expect("vote");
    let view = BoardView::from_board(&board);

    assert_eq!(view.cards[4].upvote.count, 1);
    assert_eq!(view.cards[4].upvote.count_id, "upvote-count-4");
    for card in &view.cards[..4] {
        assert_eq!(card.upvote.count, 0);
    }
}

#[test]
fn animate_class_tracks_flag() {
    let mut board = VoteBoard::new();
    let reset = board.downvote(1).expect("vote");
    let card = AspectCard::new(&board, Aspect::Performance);
    assert!(card.downvote.class.split(' ').any(|c| c == ANIMATE_CLASS));
    assert!(!card.upvote.class.contains(ANIMATE_CLASS));

    board.expire(reset);
    let card = AspectCard::new(&board, Aspect::Performance);
    assert!(!card.count(Direction::Down).class.contains(ANIMATE_CLASS));
    assert_eq!(card.count(Direction::Down).count, 1);
}

#[test]
fn labels_and_captions() {
    assert_eq!(button_label(Direction::Up), "\u{1F44D} Upvote");
    assert_eq!(button_label(Direction::Down), "\u{1F44E} Downvote");
    assert_eq!(count_caption(Direction::Up), "Upvotes:");
    assert_eq!(count_caption(Direction::Down), "Downvotes:");
}

#[test]
fn view_serializes_with_ids() {
    let view = BoardView::from_board(&VoteBoard::new());
    let json = serde_json::to_value(&view).expect("serialize");
    assert_eq!(json["cards"][0]["upvote"]["button_id"], "upvote-btn-0");
    assert_eq!(json["cards"][2]["aspect"], "security");
}
