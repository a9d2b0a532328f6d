//! Interactive player mode over line-based input

use std::io::{BufRead, Write};

use anyhow::Result;

use monty_engine::{ErrorKind, HistorySnapshot, Outcome, Session, Step};

/// Read one trimmed line; `None` at end of input
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_ascii_lowercase()))
}

fn is_quit(answer: &str) -> bool {
    matches!(answer, "q" | "quit" | "exit")
}

/// Drive `session` until the player quits or input ends
pub fn run<R: BufRead, W: Write>(session: &mut Session, input: &mut R, out: &mut W) -> Result<()> {
    loop {
        let view = session.view();
        match view.step {
            Step::AwaitingChoice => {
                writeln!(out, "Step 1: Choose a door (1, 2 or 3), or q to quit.")?;
                let Some(answer) = read_line(input)? else { return Ok(()) };
                if is_quit(&answer) {
                    return Ok(());
                }
                let index = match answer.parse::<usize>().ok().and_then(|n| n.checked_sub(1)) {
                    Some(index) => index,
                    None => {
                        writeln!(out, "Please pick door 1, 2 or 3.")?;
                        continue;
                    }
                };
                if let Err(err) = session.choose_door(index) {
                    match err.kind() {
                        ErrorKind::InvalidInput => writeln!(out, "Please pick door 1, 2 or 3.")?,
                        ErrorKind::ProtocolViolation => return Err(err.into()),
                    }
                }
            }
            Step::AwaitingRevealAck => {
                if let Some(revealed) = view.revealed_door {
                    writeln!(out, "Step 2: Monty opens {revealed}, revealing a goat.")?;
                }
                writeln!(out, "Press Enter to continue.")?;
                let Some(answer) = read_line(input)? else { return Ok(()) };
                if is_quit(&answer) {
                    return Ok(());
                }
                session.acknowledge_reveal()?;
            }
            Step::AwaitingSwitchDecision => {
                writeln!(out, "Step 3: Stick (1) or switch (2)?")?;
                let Some(answer) = read_line(input)? else { return Ok(()) };
                let switch = match answer.as_str() {
                    "1" | "stick" | "stay" => false,
                    "2" | "switch" => true,
                    other if is_quit(other) => return Ok(()),
                    _ => {
                        writeln!(out, "Please answer 1 (stick) or 2 (switch).")?;
                        continue;
                    }
                };
                let view = session.decide_switch(switch)?;
                match (view.outcome, view.prize_door) {
                    (Some(Outcome::Win), _) => writeln!(out, "Congratulations! You won the car!")?,
                    (_, Some(prize)) => {
                        writeln!(out, "Sorry, you got a goat.")?;
                        writeln!(out, "The car was behind {prize}.")?;
                    }
                    _ => writeln!(out, "Sorry, you got a goat.")?,
                }
                write_history(out, &view.history)?;
            }
            Step::ShowingResult => {
                writeln!(out, "Play again? (y/n)")?;
                let Some(answer) = read_line(input)? else { return Ok(()) };
                match answer.as_str() {
                    "y" | "yes" | "" => {
                        session.play_again()?;
                    }
                    _ => return Ok(()),
                }
            }
        }
    }
}

fn write_history<W: Write>(out: &mut W, history: &HistorySnapshot) -> Result<()> {
    writeln!(out, "Game history:")?;
    writeln!(out, "  Switch wins:      {}", history.switch_wins)?;
    writeln!(out, "  Switch losses:    {}", history.switch_losses)?;
    writeln!(out, "  No switch wins:   {}", history.no_switch_wins)?;
    writeln!(out, "  No switch losses: {}", history.no_switch_losses)?;
    if let Some(rate) = history.switch_win_rate() {
        writeln!(out, "  Switching won {rate:.1}% of the time")?;
    }
    if let Some(rate) = history.stay_win_rate() {
        writeln!(out, "  Sticking won {rate:.1}% of the time")?;
    }
    Ok(())
}
