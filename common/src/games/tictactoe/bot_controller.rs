use crate::games::SessionRng;
use crate::log;
use super::board::Board;
use super::types::{Difficulty, HUMAN_MARK, Mark, OPPONENT_MARK, Position, SearchResult};

pub const DEFAULT_INTERMEDIATE_DEPTH: usize = 3;

const WIN_SCORE: i32 = 10;

pub struct BotInput<'a> {
    pub board: &'a mut Board,
    pub intermediate_depth: usize,
}

impl<'a> BotInput<'a> {
    pub fn new(board: &'a mut Board, intermediate_depth: usize) -> Self {
        Self {
            board,
            intermediate_depth,
        }
    }
}

/// Picks the opponent's next move. The board is searched in place and left
/// exactly as it was given. Returns `None` when the game is already decided.
pub fn calculate_move(
    difficulty: Difficulty,
    input: BotInput<'_>,
    rng: &mut SessionRng,
) -> Option<Position> {
    if input.board.terminal_status().is_over() {
        return None;
    }

    match difficulty {
        Difficulty::Easy => calculate_random_move(input.board, rng),
        // A depth of 0 stops at the root without choosing a move.
        Difficulty::Intermediate => {
            calculate_minimax_move(input.board, Some(input.intermediate_depth.max(1)))
        }
        Difficulty::Hard => calculate_minimax_move(input.board, None),
    }
}

fn calculate_random_move(board: &Board, rng: &mut SessionRng) -> Option<Position> {
    let available_moves = board.empty_cells();
    match available_moves.len() {
        0 => None,
        1 => Some(available_moves[0]),
        len => Some(available_moves[rng.random_index(len)]),
    }
}

pub fn calculate_minimax_move(board: &mut Board, max_depth: Option<usize>) -> Option<Position> {
    let result = minimax_search(board, max_depth);
    result.position
}

/// Alpha-beta search from the opponent's point of view. `max_depth` of `None`
/// searches to the end of the game.
pub fn minimax_search(board: &mut Board, max_depth: Option<usize>) -> SearchResult {
    let mut search = Search {
        board,
        max_depth,
        nodes: 0,
    };
    let result = search.minimax(0, true, i32::MIN, i32::MAX);

    log!(
        "minimax depth_limit={:?} visited {} nodes, best {:?} score {}",
        max_depth,
        search.nodes,
        result.position,
        result.score
    );

    result
}

struct Search<'a> {
    board: &'a mut Board,
    max_depth: Option<usize>,
    nodes: u64,
}

impl Search<'_> {
    fn minimax(
        &mut self,
        depth: usize,
        is_maximizing: bool,
        mut alpha: i32,
        mut beta: i32,
    ) -> SearchResult {
        self.nodes += 1;
        let depth_score = depth as i32;

        if self.board.is_winner(HUMAN_MARK) {
            return SearchResult::leaf(-WIN_SCORE + depth_score);
        }
        if self.board.is_winner(OPPONENT_MARK) {
            return SearchResult::leaf(WIN_SCORE - depth_score);
        }
        if self.board.is_full() {
            return SearchResult::leaf(0);
        }
        if let Some(max_depth) = self.max_depth
            && depth >= max_depth
        {
            return SearchResult::leaf(0);
        }

        let mark: Mark = if is_maximizing {
            OPPONENT_MARK
        } else {
            HUMAN_MARK
        };
        let mut best = SearchResult {
            score: if is_maximizing { i32::MIN } else { i32::MAX },
            position: None,
        };

        for pos in self.board.empty_cells() {
            if self.board.place(pos, mark).is_err() {
                continue;
            }
            let score = self.minimax(depth + 1, !is_maximizing, alpha, beta).score;
            self.board.clear(pos);

            if is_maximizing {
                if score > best.score {
                    best = SearchResult {
                        score,
                        position: Some(pos),
                    };
                }
                alpha = alpha.max(best.score);
            } else {
                if score < best.score {
                    best = SearchResult {
                        score,
                        position: Some(pos),
                    };
                }
                beta = beta.min(best.score);
            }

            if beta <= alpha {
                break;
            }
        }

        best
    }
}
