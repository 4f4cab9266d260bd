//! Reply texts shown to players.

use std::fmt::Write;

use hotpotato::prelude::*;

pub fn toss_success(actor: &str, target: &str, rsp: &TossResponse) -> String {
    let mut out = match (rsp.turn == 1, actor == target) {
        (true, true) => format!(
            "@{actor} grabbed a **{}** fresh out of the oven but forgot to toss it! 🙈",
            rsp.potato
        ),
        (true, false) => format!(
            "@{actor} grabbed a **{}** fresh out of the oven and tossed it to @{target}!",
            rsp.potato
        ),
        (false, true) => {
            format!("@{actor} tried to juggle the **{}** like a fool 😵‍💫", rsp.potato)
        }
        (false, false) => format!("@{actor} tossed the **{}** to @{target}!", rsp.potato),
    };
    if rsp.exploded {
        push_explosion(&mut out, rsp.potato, target);
    }
    out
}

pub fn toss_invalid_target(target: &str) -> String {
    format!("You can't toss a potato to @{target}. Try someone else!")
}

pub fn toss_not_holder(holder: &UserId) -> String {
    format!("You can't toss the potato as @{holder} is currently holding it!")
}

pub fn steal_success(actor: &str, target: &str, rsp: &StealResponse) -> String {
    let mut out = format!("@{actor} stole the **{}** from @{target}!", rsp.potato);
    if rsp.exploded {
        push_explosion(&mut out, rsp.potato, actor);
    }
    out
}

pub fn steal_invalid_target(target: &str) -> String {
    format!("You can't steal a potato from @{target}. Try someone else!")
}

pub fn steal_not_holder(target: &str, holder: &UserId) -> String {
    format!(
        "You can't steal the potato from @{target} as @{holder} is currently holding it!"
    )
}

pub fn steal_from_self() -> String {
    "You can't steal the potato from yourself!".to_string()
}

pub fn cook_success(actor: &str, rsp: &CookResponse) -> String {
    let mut out = format!(
        "@{actor} cooked the **{}** and made it hotter! 🔥 (heat level {})",
        rsp.potato, rsp.heat_level
    );
    if rsp.exploded {
        push_explosion(&mut out, rsp.potato, actor);
    }
    out
}

pub fn cook_not_holder(holder: &UserId) -> String {
    format!("You can't cook the potato as @{holder} is currently holding it!")
}

pub fn where_success(rsp: &GetHolderResponse) -> String {
    format!(
        "The **{}** is currently being held by @{} (turn {}, heat level {})",
        rsp.potato, rsp.holder, rsp.turn, rsp.heat_level
    )
}

pub fn leaderboard_success(rsp: &GetLeaderboardResponse) -> String {
    let mut out = String::from("**🥁 __Deaths by Hot 🔥 Potato 🥔 Leaderboard__ 🥁**");
    out.push_str(
        "\nHere are the losers who have had the most hot potatoes explode in their faces 🤢\n",
    );

    if rsp.leaderboard.is_empty() {
        out.push_str(
            "\n*😇 It seems like no one has died yet, time to start tossing some potatoes! 🔥🥔*",
        );
        return out;
    }

    for (i, entry) in rsp.leaderboard.iter().enumerate() {
        let _ = write!(
            out,
            "\n{} @{} - {} deaths",
            rank_badge(i + 1),
            entry.user,
            entry.count
        );
    }
    out
}

pub fn no_ongoing_game() -> String {
    "There doesn't seem to be an ongoing game in this channel. Start one by tossing a potato!"
        .to_string()
}

pub fn unexpected_error() -> String {
    "I am having difficulty processing your request right now. Please try again later."
        .to_string()
}

fn push_explosion(out: &mut String, potato: Potato, victim: &str) {
    let _ = write!(
        out,
        "\nOh no, the **{potato}** exploded in @{victim}'s face! 🤢 💥"
    );
}

fn rank_badge(rank: usize) -> &'static str {
    match rank {
        1 => "🥇",
        2 => "🥈",
        3 => "🥉",
        4 => "4️⃣",
        5 => "5️⃣",
        6 => "6️⃣",
        7 => "7️⃣",
        8 => "8️⃣",
        9 => "9️⃣",
        10 => "🔟",
        _ => "❗️",
    }
}
