use attendance_poll_bot::poll::{
    render_markup, render_text, Poll, PollView, PollVotes, Vote, VoteKind, VoteOption,
};
use teloxide::types::InlineKeyboardButtonKind;

fn vote(uid: i64, name: &str, kind: VoteKind) -> Vote {
    Vote {
        uid,
        display_name: name.to_string(),
        kind,
    }
}

fn view(text: &str, votes: Vec<Vote>) -> PollView {
    PollView {
        poll: Poll {
            id: 7,
            text: text.to_string(),
        },
        votes: PollVotes::from_ordered(votes),
    }
}

#[test]
fn test_render_one_vote_per_side() {
    let view = view(
        "Trip",
        vec![
            vote(100, "Alice", VoteKind::Pro),
            vote(200, "Bob", VoteKind::Cons),
        ],
    );

    assert_eq!(
        render_text(&view),
        "Trip\n\n`+ `\\(1\\)\n`└` [Alice](tg://user?id=100)\n\n`-`\n`└` [Bob](tg://user?id=200)\n\n"
    );
}

#[test]
fn test_render_empty_poll() {
    assert_eq!(render_text(&view("Trip", vec![])), "Trip\n\n`+ `\n\n`-`\n\n");
}

#[test]
fn test_render_branches_before_corner() {
    let view = view(
        "Football",
        vec![
            vote(100, "Alice", VoteKind::Pro),
            vote(200, "Bob", VoteKind::Pro),
        ],
    );
    let text = render_text(&view);

    assert!(text.contains("`+ `\\(2\\)\n`├` [Alice](tg://user?id=100)\n`└` [Bob](tg://user?id=200)\n"));
}

#[test]
fn test_render_proxy_vote_line() {
    let view = view("Football", vec![vote(100, "Alice", VoteKind::PlusOne)]);
    let text = render_text(&view);

    assert!(text.contains("`└` \\+1 \\(from [Alice](tg://user?id=100)\\)\n"));
}

#[test]
fn test_render_escapes_text_and_names() {
    let view = view("Game (5x5)!", vec![vote(100, "Mr_X", VoteKind::Cons)]);
    let text = render_text(&view);

    assert!(text.starts_with("Game \\(5x5\\)\\!\n\n"));
    assert!(text.contains("[Mr\\_X](tg://user?id=100)"));
    // Nobody attending: no count after the plus header.
    assert!(text.contains("`+ `\n\n`-`\n"));
}

#[test]
fn test_markup_layout() {
    let markup = render_markup(7);
    let rows = &markup.inline_keyboard;

    let shape: Vec<usize> = rows.iter().map(Vec::len).collect();
    assert_eq!(shape, vec![2, 1, 1, 1]);

    let expected = [
        (0, 0, VoteOption::MeToo, "7:me_too"),
        (0, 1, VoteOption::MeNot, "7:me_not"),
        (1, 0, VoteOption::PlusOne, "7:plus_one"),
        (2, 0, VoteOption::MinusOne, "7:minus_one"),
    ];
    for (row, col, option, data) in expected {
        let button = &rows[row][col];
        assert_eq!(button.text, option.label());
        match &button.kind {
            InlineKeyboardButtonKind::CallbackData(actual) => assert_eq!(actual, data),
            other => panic!("expected callback button, got {other:?}"),
        }
    }

    match &rows[3][0].kind {
        InlineKeyboardButtonKind::SwitchInlineQuery(query) => assert_eq!(query, "7"),
        other => panic!("expected share button, got {other:?}"),
    }
}
