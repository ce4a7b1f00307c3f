use std::io::{BufRead, Write};
use sweeper_core::{CellId, Coord2, GameSession, GameStatus, Snapshot};

use crate::command::Command;
use crate::render::render;

const HELP: &str = "\
Commands:
  r <row> <col>   reveal a cell
  f <row> <col>   flag or unflag a cell
  h               show this help
  q               quit";

/// Plays `session` with commands read from `input` until the game ends, the player quits, or
/// input runs out.
pub fn run(
    mut session: GameSession,
    input: impl BufRead,
    mut out: impl Write,
) -> anyhow::Result<GameStatus> {
    write!(out, "{}", render(&Snapshot::from_session(&session)))?;
    writeln!(out, "Type h for help.")?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(err) => {
                writeln!(out, "{err}")?;
                continue;
            }
        };
        log::debug!("Command: {command:?}");

        match command {
            Command::Help => {
                writeln!(out, "{HELP}")?;
                continue;
            }
            Command::Quit => {
                log::info!("Player quit");
                break;
            }
            Command::Reveal(coords) | Command::Flag(coords) => {
                let Some(id) = cell_id(&session, coords) else {
                    writeln!(out, "({}, {}) is not on the board", coords.0, coords.1)?;
                    continue;
                };

                let updated = match command {
                    Command::Reveal(_) => session.reveal(id)?.has_update(),
                    _ => session.toggle_flag(id)?.has_update(),
                };
                if !updated {
                    writeln!(out, "Nothing to do there.")?;
                    continue;
                }
            }
        }

        write!(out, "{}", render(&Snapshot::from_session(&session)))?;
        if session.is_finished() {
            break;
        }
    }

    log::info!("Game over: {:?}", session.status());
    Ok(session.status())
}

fn cell_id(session: &GameSession, (row, col): Coord2) -> Option<CellId> {
    let board = session.board();
    (row < board.height() && col < board.width()).then(|| board.shape().id_of((row, col)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use sweeper_core::Board;

    fn play(mines: &[CellId], script: &str) -> (GameStatus, String) {
        let board = Board::from_mine_ids(3, 2, mines).unwrap();
        let mut out = Vec::new();
        let status = run(GameSession::from_board(board), script.as_bytes(), &mut out).unwrap();
        (status, String::from_utf8(out).unwrap())
    }

    #[test]
    fn winning_script_ends_the_loop() {
        let (status, out) = play(&[0], "r 1 2\nr 1 0\nr 0 0\n");

        assert_eq!(status, GameStatus::Won);
        assert!(out.ends_with("You win!\n"));
    }

    #[test]
    fn losing_reveal_ends_the_loop() {
        let (status, out) = play(&[0], "f 1 1\nr 0 0\nr 1 2\n");

        assert_eq!(status, GameStatus::Lost);
        assert!(out.ends_with("Boom! You hit a mine.\n"));
    }

    #[test]
    fn bad_input_is_reported_and_play_continues() {
        let (status, out) = play(&[0], "dig\nr 5 5\n\nf 0 0\nr 0 0\nq\nr 1 2\n");

        assert_eq!(status, GameStatus::Active);
        assert!(out.contains("Unknown command \"dig\""));
        assert!(out.contains("(5, 5) is not on the board"));
        assert!(out.contains("Nothing to do there."));
    }

    #[test]
    fn end_of_input_leaves_game_active() {
        let (status, out) = play(&[0], "h\n");

        assert_eq!(status, GameStatus::Active);
        assert!(out.contains("flag or unflag a cell"));
    }
}
