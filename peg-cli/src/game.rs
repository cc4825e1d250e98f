//! The interactive game: opening removal, the jump/undo loop, and the final score.

use std::io::{BufRead, Write};

use anyhow::Result;
use log::{debug, info, warn};
use peg_core::{Board, OpenMoves, Rating, EMPTY_HOLE};

use crate::config::GameConfig;
use crate::prompt::{list_to_string, Prompter};

const ACTIONS_QUESTION: &str = "Select (J)ump, (U)ndo Previous Move, (V)iew History, (Q)uit";
const ACTIONS: [char; 4] = ['J', 'U', 'V', 'Q'];
const HISTORY_HEADER: &str = "-------- Move History --------";

/// How a single game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEnd {
    Finished { pegs_left: usize },
    Quit,
}

/// Banner printed before the first game.
pub fn game_info() -> String {
    format!(
        "Welcome to the Triangle Peg Game!

Game Description:
==============================================================
The goal of the game is to remove the most amount of pegs from the board.
The least amount of pegs on a board is 1.

Pegs can be removed by jumping over an existing peg into an empty peg hole.
If there are no valid moves left, the game is over.

The board is in the shape of a triangle, with a typical height of {height}.
However, the height can be adjusted with the --height option.

Game Instructions:
==============================================================
1. First select a starting peg hole, by selecting a peg to remove.
2. Next, select a peg number to move.
3. Next, select a peg hole number to move to.
4. Repeat steps 2 and 3 until there are no valid moves left.

Note: The pegs are numbered, and empty peg holes are represented by a \"{empty}\".
",
        height = GameConfig::DEFAULT_HEIGHT,
        empty = EMPTY_HOLE,
    )
}

/// `[4, 6] => 1, [12, 14] => 5`
pub fn open_moves_to_string(moves: &OpenMoves) -> String {
    moves
        .iter()
        .map(|(to, sources)| format!("{} => {}", list_to_string(sources), to))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Show the board and empty the starting hole, asking unless `start` is given.
fn initialize<R: BufRead, W: Write>(
    board: &mut Board,
    prompt: &mut Prompter<R, W>,
    start: Option<usize>,
) -> Result<()> {
    writeln!(prompt.out(), "{}\n", board)?;
    let number = match start {
        Some(number) => number,
        None => prompt.ask_number_in_range("Enter First Peg to Remove", 1, board.total_pegs())?,
    };
    board.remove_initial_peg(number)?;
    info!("game started with peg {} removed", number);
    Ok(())
}

/// Play one game to completion or until the player quits.
pub fn play_game<R: BufRead, W: Write>(
    config: &GameConfig,
    start: Option<usize>,
    prompt: &mut Prompter<R, W>,
) -> Result<GameEnd> {
    let mut board = Board::new(config.height)?;
    initialize(&mut board, prompt, start)?;

    let mut moves = board.all_moves();
    while !moves.is_empty() {
        writeln!(prompt.out(), "{}\n", board)?;
        writeln!(prompt.out(), "Available Moves: {}\n", open_moves_to_string(&moves))?;

        match prompt.ask_option(ACTIONS_QUESTION, &ACTIONS)? {
            'J' => {
                let from =
                    prompt.ask_number_in_list("Select a Peg to Move", &board.movable_pegs())?;
                let to = prompt.ask_number_in_list("Move To", &board.destinations_from(from))?;
                if let Err(err) = board.move_peg(from, to) {
                    warn!("rejected jump: {}", err);
                    writeln!(prompt.out(), "{}", err)?;
                }
            }
            'U' => {
                writeln!(prompt.out(), "Undo Previous Move")?;
                if let Err(err) = board.go_back() {
                    writeln!(prompt.out(), "{}", err)?;
                }
                // Undoing the opening removal starts the game over.
                if board.history().is_empty() {
                    initialize(&mut board, prompt, None)?;
                }
            }
            'V' => {
                writeln!(prompt.out(), "{}\n{}", HISTORY_HEADER, board.history())?;
            }
            _ => {
                writeln!(prompt.out(), "Quitting Game")?;
                info!("player quit with {} pegs left", board.pegs_left());
                return Ok(GameEnd::Quit);
            }
        }

        moves = board.all_moves();
    }

    let pegs_left = board.pegs_left();
    writeln!(prompt.out(), "{}", board)?;
    writeln!(prompt.out(), "{}\n{}", HISTORY_HEADER, board.history())?;
    writeln!(prompt.out(), "Total Pegs Left: {}", pegs_left)?;
    writeln!(prompt.out(), "\n{}\n", Rating::for_pegs_left(pegs_left))?;
    info!("game over with {} pegs left", pegs_left);

    Ok(GameEnd::Finished { pegs_left })
}

/// Play games until the player declines another. The configured start applies to the first game.
pub fn game_loop<R: BufRead, W: Write>(
    config: &GameConfig,
    prompt: &mut Prompter<R, W>,
) -> Result<()> {
    let mut start = config.start;
    loop {
        match play_game(config, start.take(), prompt)? {
            GameEnd::Finished { pegs_left } => debug!("finished game, {} left", pegs_left),
            GameEnd::Quit => debug!("quit game"),
        }
        if !prompt.ask_yes_no("Do You want to Play Again?")? {
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Cursor};

    fn run(config: &GameConfig, start: Option<usize>, input: &str) -> (Result<GameEnd>, String) {
        let mut prompt = Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        let end = play_game(config, start, &mut prompt);
        let out = String::from_utf8(prompt.into_output()).unwrap();
        (end, out)
    }

    fn small() -> GameConfig {
        GameConfig {
            height: 3,
            start: None,
        }
    }

    #[test]
    fn test_open_moves_to_string() {
        let mut moves = OpenMoves::new();
        moves.insert(1, vec![4, 6]);
        moves.insert(5, vec![12]);
        assert_eq!(open_moves_to_string(&moves), "[4, 6] => 1, [12] => 5");
        assert_eq!(open_moves_to_string(&OpenMoves::new()), "");
    }

    #[test]
    fn test_full_game() {
        let (end, out) = run(&small(), None, "1\nJ\n4\n1\nj\n6\n4\nJ\n1\n6\n");
        assert_eq!(end.unwrap(), GameEnd::Finished { pegs_left: 2 });
        assert!(out.contains("Available Moves: [4, 6] => 1"));
        assert!(out.contains("Total Pegs Left: 2"));
        assert!(out.contains("You are Pretty Smart!"));
        assert!(out.contains("2.\tJumped peg [6], over peg [5], to peg [4]"));
    }

    #[test]
    fn test_start_skips_opening_prompt() {
        let (end, out) = run(&small(), Some(1), "q\n");
        assert_eq!(end.unwrap(), GameEnd::Quit);
        assert!(!out.contains("Enter First Peg to Remove"));
        assert!(out.contains("Quitting Game"));
    }

    #[test]
    fn test_jump_only_offers_legal_choices() {
        // 5 is not movable, 2 is not a destination of 4.
        let (end, out) = run(&small(), Some(1), "J\n5\n4\n2\n1\nQ\n");
        assert_eq!(end.unwrap(), GameEnd::Quit);
        assert!(out.contains("Select a Peg to Move [4, 6]"));
        assert!(out.contains("Move To [1]"));
        assert!(out.contains("Available Moves: [6] => 4"));
    }

    #[test]
    fn test_undo_opening_asks_again() {
        let (end, out) = run(&small(), None, "1\nV\nU\n6\nQ\n");
        assert_eq!(end.unwrap(), GameEnd::Quit);
        assert!(out.contains("0.\tInitial peg removed [1]"));
        assert_eq!(out.matches("Enter First Peg to Remove").count(), 2);
        assert!(out.contains("Available Moves: [1] => 6"));
    }

    #[test]
    fn test_end_of_input_is_an_error() {
        let (end, _) = run(&small(), None, "1\n");
        let err = end.unwrap_err();
        let io_err = err.downcast_ref::<io::Error>().unwrap();
        assert_eq!(io_err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn test_game_loop_play_again() {
        let config = GameConfig {
            height: 3,
            start: Some(1),
        };
        let mut prompt = Prompter::new(Cursor::new(b"q\ny\n2\nn\n".to_vec()), Vec::new());
        game_loop(&config, &mut prompt).unwrap();
        let out = String::from_utf8(prompt.into_output()).unwrap();
        // Second game asks for the opening peg; hole 2 leaves no jumps on a 6-hole board.
        assert_eq!(out.matches("Enter First Peg to Remove").count(), 1);
        assert!(out.contains("Total Pegs Left: 5"));
        assert_eq!(out.matches("Do You want to Play Again? [y/n]").count(), 2);
    }
}
