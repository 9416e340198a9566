use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};

use super::{PollId, PollView, Vote, VoteOption};
use crate::utils::markdown::{code, escape_markdown, user_mention};

const BRANCH: &str = "├";
const CORNER: &str = "└";

/// Tree glyphs for a section of `size` lines: branches, then one corner.
fn tree_prefixes(size: usize) -> impl Iterator<Item = &'static str> {
    (0..size).map(move |i| if i + 1 == size { CORNER } else { BRANCH })
}

fn count_suffix(votes: &[Vote]) -> String {
    if votes.is_empty() {
        String::new()
    } else {
        escape_markdown(&format!("({})", votes.len()))
    }
}

fn show_vote(vote: &Vote) -> String {
    let mention = user_mention(vote.uid, &vote.display_name);
    if vote.is_proxy() {
        format!("{} {}{}", escape_markdown("+1 (from"), mention, escape_markdown(")"))
    } else {
        mention
    }
}

fn push_section(text: &mut String, votes: &[Vote]) {
    for (prefix, vote) in tree_prefixes(votes.len()).zip(votes) {
        text.push_str(&format!("{} {}\n", code(prefix), show_vote(vote)));
    }
}

/// Renders the poll message body as MarkdownV2.
pub fn render_text(view: &PollView) -> String {
    tracing::debug!("Rendering text for poll {}", view.poll.id);

    let votes = &view.votes;
    let mut text = escape_markdown(&view.poll.text);
    text.push_str("\n\n");

    text.push_str(&format!("{}{}\n", code("+ "), count_suffix(&votes.attending)));
    push_section(&mut text, &votes.attending);

    text.push_str(&format!("\n{}\n", code("-")));
    push_section(&mut text, &votes.not_attending);

    text.push('\n');
    text
}

/// Routing key carried by a vote button.
pub fn callback_data(poll_id: PollId, option: VoteOption) -> String {
    format!("{}:{}", poll_id, option.id())
}

/// Splits callback data into the poll id and the raw option id. The option
/// id is left unchecked so the store can reject it.
pub fn split_callback(data: &str) -> Option<(PollId, &str)> {
    let (poll_id, option_id) = data.split_once(':')?;
    let poll_id = poll_id.parse().ok()?;
    Some((poll_id, option_id))
}

/// Vote buttons: in/out on the first row, +1 and -1 each on their own row,
/// then a share button that offers the poll through inline mode.
pub fn render_markup(poll_id: PollId) -> InlineKeyboardMarkup {
    tracing::debug!("Rendering markup for poll {}", poll_id);

    let button = |option: VoteOption| {
        InlineKeyboardButton::callback(option.label(), callback_data(poll_id, option))
    };

    InlineKeyboardMarkup::new(vec![
        vec![button(VoteOption::MeToo), button(VoteOption::MeNot)],
        vec![button(VoteOption::PlusOne)],
        vec![button(VoteOption::MinusOne)],
        vec![InlineKeyboardButton::switch_inline_query(
            "Share",
            poll_id.to_string(),
        )],
    ])
}
