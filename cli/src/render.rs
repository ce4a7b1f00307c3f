use sweeper_core::{CellState, CellView, GameStatus, Snapshot};

/// Draws the board as text, one row per line, with row and column headers.
pub fn render(snapshot: &Snapshot) -> String {
    let header: Vec<String> = (0..snapshot.width())
        .map(|col| (col % 10).to_string())
        .collect();
    let mut out = format!("   {}\n", header.join(" "));

    for (row, cells) in snapshot.rows().enumerate() {
        let symbols: Vec<String> = cells
            .iter()
            .map(|view| symbol(view, snapshot.status).to_string())
            .collect();
        out.push_str(&format!("{row:>2} {}\n", symbols.join(" ")));
    }

    out.push_str(&status_line(snapshot));
    out.push('\n');
    out
}

fn symbol(view: &CellView, status: GameStatus) -> char {
    if view.exploded {
        return 'X';
    }
    if view.shows_mine() {
        return '*';
    }

    match view.state {
        // every cell still hidden after a win is a mine
        CellState::Hidden if status == GameStatus::Won => 'F',
        CellState::Hidden => '.',
        CellState::Flagged => 'F',
        CellState::Revealed => match view.adjacent_count {
            Some(count @ 1..=8) => char::from(b'0' + count),
            _ => ' ',
        },
    }
}

fn status_line(snapshot: &Snapshot) -> String {
    match snapshot.status {
        GameStatus::Active => format!("Mines left: {}", snapshot.mines_left),
        GameStatus::Won => "You win!".to_owned(),
        GameStatus::Lost => "Boom! You hit a mine.".to_owned(),
    }
}
