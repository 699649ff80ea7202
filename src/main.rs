use std::io::{self, BufRead};

use sudoku_core::Grid;

// Reads puzzles in line format from stdin, one per line, and prints the
// solution (or "no solution") for each.
fn main() -> io::Result<()> {
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match Grid::from_str_line(&line) {
            Ok(grid) => match grid.solve() {
                Some(solution) => println!("{}", solution.to_str_line()),
                None => println!("no solution"),
            },
            Err(err) => eprintln!("skipping unreadable line: {}", err),
        }
    }
    Ok(())
}
