//! Death counters to ranking.

use hotpotato_protocol::UserDeaths;
use hotpotato_store::DeathCounter;

/// Ranks users by death count, most deaths first.
///
/// Ties keep their stored order (the sort is stable). `top == 0` returns
/// everyone; otherwise at most `top` rows.
pub fn build_leaderboard(counters: &[DeathCounter], top: usize) -> Vec<UserDeaths> {
    let mut board: Vec<UserDeaths> = counters
        .iter()
        .map(|c| UserDeaths {
            user: c.user.clone(),
            count: c.count,
        })
        .collect();

    board.sort_by(|a, b| b.count.cmp(&a.count));

    if top > 0 {
        board.truncate(top);
    }
    board
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counters(rows: &[(&str, u32)]) -> Vec<DeathCounter> {
        rows.iter()
            .map(|(user, count)| DeathCounter {
                user: (*user).into(),
                count: *count,
            })
            .collect()
    }

    fn users(board: &[UserDeaths]) -> Vec<&str> {
        board.iter().map(|row| row.user.as_str()).collect()
    }

    #[test]
    fn test_sorted_by_count_descending() {
        let board =
            build_leaderboard(&counters(&[("a", 1), ("b", 7), ("c", 3)]), 0);
        assert_eq!(users(&board), vec!["b", "c", "a"]);
        assert_eq!(board[0].count, 7);
    }

    #[test]
    fn test_ties_keep_stored_order() {
        let board = build_leaderboard(
            &counters(&[("x", 2), ("y", 5), ("z", 2), ("w", 2)]),
            0,
        );
        assert_eq!(users(&board), vec!["y", "x", "z", "w"]);
    }

    #[test]
    fn test_top_truncates() {
        let rows = counters(&[("a", 1), ("b", 2), ("c", 3), ("d", 4)]);
        assert_eq!(users(&build_leaderboard(&rows, 2)), vec!["d", "c"]);
        assert_eq!(build_leaderboard(&rows, 10).len(), 4);
        assert_eq!(build_leaderboard(&rows, 0).len(), 4);
    }

    #[test]
    fn test_empty_room_has_empty_board() {
        assert!(build_leaderboard(&[], 10).is_empty());
    }
}
