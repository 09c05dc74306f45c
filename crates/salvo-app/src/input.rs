//! Line-based angle reader.
//!
//! Runs on its own thread so the session keeps receiving target reports
//! while the player types. End of input counts as quitting.

use std::io::{self, BufRead, Write};
use std::thread::{self, JoinHandle};

use log::{debug, warn};

use salvo_core::commands::{parse_angle, ShotInput};
use salvo_core::error::AngleInputError;
use salvo_core::types::AngleBounds;
use salvo_sim::InputSender;

/// Forward every valid line of `reader` to the session.
///
/// Invalid lines go to `on_invalid` and reading continues. Stops after a
/// quit, once the session stops listening, or at end of input; in the last
/// case a quit is sent on the player's behalf.
pub fn forward_lines<R, F>(
    reader: R,
    bounds: &AngleBounds,
    input: &InputSender,
    mut on_invalid: F,
) -> io::Result<()>
where
    R: BufRead,
    F: FnMut(&str, &AngleInputError),
{
    for line in reader.lines() {
        let line = line?;
        match parse_angle(&line, bounds) {
            Ok(command) => {
                if !input.send(command) || command == ShotInput::Quit {
                    return Ok(());
                }
            }
            Err(err) => on_invalid(line.trim(), &err),
        }
    }
    debug!("end of input, quitting");
    input.quit();
    Ok(())
}

/// Read angles from stdin on a background thread.
///
/// The thread is not joined: it may be blocked on a read when the session
/// ends.
pub fn spawn_stdin_reader(
    input: InputSender,
    bounds: AngleBounds,
    prompt: String,
) -> io::Result<JoinHandle<()>> {
    thread::Builder::new()
        .name("salvo-stdin".into())
        .spawn(move || {
            let stdin = io::stdin();
            let result = forward_lines(stdin.lock(), &bounds, &input, |line, err| {
                debug!("rejected input: {}", err);
                println!("  Invalid Value: `{}`", line);
                print!("{}", prompt);
                let _ = io::stdout().flush();
            });
            if let Err(err) = result {
                warn!("stdin read failed: {}", err);
                input.quit();
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    use salvo_core::config::SimulationConfig;
    use salvo_core::enums::SessionEnd;
    use salvo_core::events::SessionEvent;
    use salvo_sim::spawn_session;

    fn fired_angles(events: &[SessionEvent]) -> Vec<f64> {
        events
            .iter()
            .filter_map(|e| match e {
                SessionEvent::ShotFired { angle, .. } => Some(*angle),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_skips_invalid_lines_and_quits_at_end_of_input() {
        let session = spawn_session(SimulationConfig::default(), 10_000.0).unwrap();
        let input = session.input();
        let bounds = AngleBounds::default();

        let mut rejected = Vec::new();
        let reader = Cursor::new("abc\n50\n 22.5 \n");
        forward_lines(reader, &bounds, &input, |line, _| rejected.push(line.to_string()))
            .unwrap();

        let (events, end) = session.collect();
        assert_eq!(rejected, vec!["abc".to_string(), "50".to_string()]);
        assert_eq!(fired_angles(&events), vec![22.5]);
        assert_eq!(end.unwrap(), SessionEnd::Quit { shots: 1 });
    }

    #[test]
    fn test_stops_reading_after_quit() {
        let session = spawn_session(SimulationConfig::default(), 10_000.0).unwrap();
        let input = session.input();
        let bounds = AngleBounds::default();

        let reader = Cursor::new("10\n0\n20\n");
        forward_lines(reader, &bounds, &input, |_, _| {}).unwrap();

        let (events, end) = session.collect();
        assert_eq!(fired_angles(&events), vec![10.0]);
        assert_eq!(end.unwrap(), SessionEnd::Quit { shots: 1 });
    }
}
