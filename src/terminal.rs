use anyhow::{anyhow, Result};
use crossterm::{
    style::{style, Attribute, Color, PrintStyledContent, Stylize},
    QueueableCommand,
};

use std::io::{stdin, stdout, BufRead, Write};

use connect4_engine::{
    board::{Board, Cell},
    engine::Strategy,
    HEIGHT, WIDTH,
};

/// Draws the board with coloured tiles, column numbers on top
pub fn display(board: &Board) -> Result<()> {
    let mut stdout = stdout();

    let cols: String = (1..=WIDTH).map(|x| x.to_string()).collect();
    stdout.queue(PrintStyledContent(style(cols + "\n")))?;

    for row in 0..HEIGHT {
        for column in 0..WIDTH {
            stdout.queue(PrintStyledContent(
                style("O")
                    .attribute(Attribute::Bold)
                    .on(Color::DarkBlue)
                    .with(match board.get(row, column) {
                        Cell::PlayerOne => Color::Red,
                        Cell::PlayerTwo => Color::Yellow,
                        Cell::Empty => Color::DarkBlue,
                    }),
            ))?;
        }
        stdout.queue(PrintStyledContent(style("\n")))?;
    }
    stdout.flush()?;
    Ok(())
}

/// Prints `question` and returns the trimmed answer
pub fn prompt(question: &str) -> Result<String> {
    read_answer(question, &mut stdin().lock(), &mut stdout())
}

/// Writes `question` to `output` and reads one line from `input`
///
/// Fails once `input` is exhausted, so callers re-asking in a loop stop.
fn read_answer<R: BufRead, W: Write>(
    question: &str,
    input: &mut R,
    output: &mut W,
) -> Result<String> {
    write!(output, "{}", question)?;
    output.flush()?;

    let mut buffer = String::new();
    if input.read_line(&mut buffer)? == 0 {
        return Err(anyhow!("stdin closed"));
    }
    Ok(buffer.trim().to_string())
}

pub fn ask_yes_no(question: &str) -> Result<bool> {
    loop {
        match prompt(question)?.to_lowercase().chars().next() {
            Some('y') => return Ok(true),
            Some('n') => return Ok(false),
            _ => println!("Unknown answer given"),
        }
    }
}

/// Lists the strategies and reads a choice, by number or by name
pub fn ask_strategy(question: &str) -> Result<Strategy> {
    for (idx, strategy) in Strategy::ALL.iter().enumerate() {
        println!("  {}. {}", idx + 1, strategy);
    }
    let answer = prompt(question)?;

    let strategy = match answer.parse::<usize>() {
        Ok(n) if (1..=Strategy::ALL.len()).contains(&n) => Strategy::ALL[n - 1],
        _ => Strategy::from_name(&answer),
    };
    println!("Selected {}", strategy);
    Ok(strategy)
}

#[cfg(test)]
mod test {
    use anyhow::Result;

    use super::read_answer;

    #[test]
    pub fn answers_are_trimmed() -> Result<()> {
        let mut input = "  4 \nsecond\n".as_bytes();
        let mut output = Vec::new();

        assert_eq!(read_answer("Move input > ", &mut input, &mut output)?, "4");
        assert_eq!(read_answer("Again > ", &mut input, &mut output)?, "second");
        assert_eq!(String::from_utf8(output)?, "Move input > Again > ");
        Ok(())
    }

    #[test]
    pub fn closed_input_is_an_error() {
        let mut input = "".as_bytes();
        let mut output = Vec::new();
        assert!(read_answer("Play again? y/n: ", &mut input, &mut output).is_err());

        // a blank line is still an answer
        let mut input = "\n".as_bytes();
        assert_eq!(read_answer("> ", &mut input, &mut output).ok(), Some(String::new()));
    }
}
