//! Text rendering of session events in metric or English units.

use salvo_core::constants::{
    FEET_PER_METER, FEET_PER_MILE, METERS_PER_KILOMETER, RULER_DIVISIONS, SECONDS_PER_HOUR,
};
use salvo_core::enums::{SessionEnd, ShotMode, TargetMotion};
use salvo_core::events::{HeaderView, SessionEvent};
use salvo_core::types::AngleBounds;
use salvo_sim::trajectory::ProfileRow;

const GAME_OVER: &str = "GAME OVER MAN, you just got crushed by the other tank!";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Units {
    #[default]
    Metric,
    English,
}

impl Units {
    pub fn from_english_flag(english: bool) -> Self {
        if english {
            Units::English
        } else {
            Units::Metric
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Units::Metric => "Metric",
            Units::English => "English",
        }
    }

    /// Unit for short distances (meters or feet).
    pub fn short_unit(self) -> &'static str {
        match self {
            Units::Metric => "meters",
            Units::English => "feet",
        }
    }

    /// Unit for long distances (kilometers or miles).
    pub fn long_unit(self) -> &'static str {
        match self {
            Units::Metric => "kilometers",
            Units::English => "miles",
        }
    }

    pub fn short(self, meters: f64) -> f64 {
        match self {
            Units::Metric => meters,
            Units::English => meters * FEET_PER_METER,
        }
    }

    pub fn long(self, meters: f64) -> f64 {
        match self {
            Units::Metric => meters / METERS_PER_KILOMETER,
            Units::English => meters * FEET_PER_METER / FEET_PER_MILE,
        }
    }

    /// `"6489.4 meters"` style text.
    pub fn distance(self, meters: f64) -> String {
        format!("{:3.1} {}", self.short(meters), self.short_unit())
    }
}

/// Formats events for a terminal.
#[derive(Debug, Clone)]
pub struct Display {
    units: Units,
    ruler_legend: String,
}

impl Display {
    pub fn new(units: Units, max_range: f64) -> Self {
        Self {
            units,
            ruler_legend: ruler_legend(units, max_range),
        }
    }

    /// Lines printed once before the session starts.
    pub fn intro(&self, shot_mode: ShotMode, motion: TargetMotion, tolerance: f64) -> Vec<String> {
        let mut lines = Vec::new();
        match shot_mode {
            ShotMode::Auto => lines.push("Shot Mode: Auto".to_string()),
            ShotMode::Manual => {
                lines.push("Shot Mode: Manual".to_string());
                lines.push(match motion {
                    TargetMotion::Realtime => "Target Mode: Realtime Target Movement".to_string(),
                    TargetMotion::Paused => {
                        "Target Mode: Pause Target During Shot Decision".to_string()
                    }
                });
            }
        }
        lines.push(format!("Units: {}", self.units.name()));
        lines.push(format!("Detonation Radius = {}", self.units.distance(tolerance)));
        lines
    }

    pub fn shot_profile(&self, rows: &[ProfileRow]) -> String {
        let border = "+-------+------------+-------+";
        let mut out = String::new();
        out.push('\n');
        out.push_str("Shot Profile:\n");
        out.push_str(border);
        out.push('\n');
        out.push_str("| Angle | Shot Range | Time  |\n");
        let unit = format!("({})", self.units.short_unit());
        out.push_str(&format!("| (deg) | {:>10} | (sec) |\n", unit));
        out.push_str(border);
        out.push('\n');
        for row in rows {
            out.push_str(&format!(
                "| {:5.1} | {:10.1} | {:5.1} |\n",
                row.angle,
                self.units.short(row.range),
                row.flight_time
            ));
        }
        out.push_str(border);
        out.push('\n');
        out
    }

    pub fn prompt(&self, bounds: &AngleBounds) -> String {
        format!(
            "Enter a shot angle from {:3.1} to {:3.1} degrees (0 to quit): ",
            bounds.min, bounds.max
        )
    }

    /// Text for one event. `None` for events with nothing to print.
    ///
    /// The prompt is returned without a trailing newline.
    pub fn render(&self, event: &SessionEvent) -> Option<String> {
        let units = self.units;
        let text = match event {
            SessionEvent::Header(view) => self.header(view),
            SessionEvent::AwaitingAngle { bounds } => self.prompt(bounds),
            SessionEvent::ShotFired {
                number,
                angle,
                flight_time,
            } => format!(
                "Taking shot #{} at {:4.2} degrees. Flight time is {:3.1} seconds.\n",
                number, angle, flight_time
            ),
            SessionEvent::ShotLanded { shot, target_range } => format!(
                "Shot #{} took {:3.1} seconds, and went {} ({:3.1} {}).\n\
                 Target Range = {} at time of impact.\n",
                shot.number,
                shot.flight_time,
                units.distance(shot.range),
                units.long(shot.range),
                units.long_unit(),
                units.distance(*target_range),
            ),
            SessionEvent::Missed { shot } => {
                let miss = units.distance(shot.miss_delta.abs());
                if shot.undershot() {
                    format!("<< Undershot target by {}.\n", miss)
                } else {
                    format!(">> Overshot target by {}.\n", miss)
                }
            }
            SessionEvent::Hit { shot } => format!(
                "\nDirect hit (within {}) after {} shots!!\n\n",
                units.distance(shot.miss_delta.abs()),
                shot.number
            ),
            SessionEvent::Timeline(frame) => format!(
                "\n{}\n{}\n{}\n\n",
                frame.flight_line, frame.impact_line, self.ruler_legend
            ),
            SessionEvent::TargetReport {
                range,
                elapsed_secs,
                speed_multiplier,
            } => {
                let note = if *speed_multiplier > 1.0 {
                    format!(" (at {}x real-time)", speed_multiplier)
                } else {
                    String::new()
                };
                format!(
                    "Target Range = {} after {:.0} seconds{}.\n",
                    units.distance(*range),
                    elapsed_secs,
                    note
                )
            }
            SessionEvent::TargetReachedOrigin { .. } => format!("\n{}\n\n", GAME_OVER),
            SessionEvent::Finished { end } => match end {
                SessionEnd::Quit { shots } => format!("Cease fire after {} shots.\n", shots),
                SessionEnd::Hit { .. } | SessionEnd::TargetReachedOrigin { .. } => return None,
            },
        };
        Some(text)
    }

    fn header(&self, view: &HeaderView) -> String {
        let units = self.units;
        let per_hour = units.long(view.target_speed * SECONDS_PER_HOUR);
        format!(
            "==================================\n\
             Projectile Velocity  = {}/sec\n\
             Max Projectile Range = {}\n\
             Target Velocity      = {:3.1} {}/hour\n\
             Target Velocity      = {}/sec\n\
             Current Target Range = {:3.1} {}\n\
             Current Target Range = {}\n\
             ----------------------------------\n",
            units.distance(view.muzzle_speed),
            units.distance(view.max_range),
            per_hour,
            units.long_unit(),
            units.distance(view.target_speed),
            units.long(view.target_range),
            units.long_unit(),
            units.distance(view.target_range),
        )
    }
}

/// Distance labels printed under the impact line, one per ruler division.
///
/// The last label's unit letter is spelled out, e.g. `9.2Kilometers`.
pub fn ruler_legend(units: Units, max_range: f64) -> String {
    let letter = match units {
        Units::Metric => "K",
        Units::English => "M",
    };
    let mut legend = String::from("  ");
    for division in 1..=RULER_DIVISIONS {
        let at = max_range * f64::from(division) / f64::from(RULER_DIVISIONS);
        let label = format!("{:4.1}{}", units.long(at), letter);
        legend.push_str(&format!("     {:>5}", label));
    }
    legend.pop();
    let unit = units.long_unit();
    let mut chars = unit.chars();
    if let Some(first) = chars.next() {
        legend.extend(first.to_uppercase());
        legend.push_str(chars.as_str());
    }
    legend
}

#[cfg(test)]
mod tests {
    use super::*;
    use salvo_core::types::{Shot, TimelineFrame};

    fn shot(miss_delta: f64) -> Shot {
        Shot {
            number: 3,
            angle: 22.5,
            range: 6489.43,
            flight_time: 23.41,
            miss_delta,
        }
    }

    #[test]
    fn test_converts_units() {
        assert_eq!(Units::Metric.distance(6489.43), "6489.4 meters");
        assert_eq!(Units::English.distance(100.0), "328.1 feet");
        assert!((Units::Metric.long(9177.4) - 9.1774).abs() < 1e-9);
        assert!((Units::English.long(1609.344) - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_ruler_legend_spells_out_last_unit() {
        let legend = ruler_legend(Units::Metric, 10_000.0);
        assert_eq!(
            legend,
            "        2.0K      4.0K      6.0K      8.0K     10.0Kilometers"
        );
        assert!(ruler_legend(Units::English, 10_000.0).ends_with("Miles"));
    }

    #[test]
    fn test_renders_shot_lines() {
        let display = Display::new(Units::Metric, 9177.4);
        let fired = display
            .render(&SessionEvent::ShotFired {
                number: 1,
                angle: 22.5,
                flight_time: 23.41,
            })
            .unwrap();
        assert_eq!(
            fired,
            "Taking shot #1 at 22.50 degrees. Flight time is 23.4 seconds.\n"
        );

        let under = display.render(&SessionEvent::Missed { shot: shot(3510.57) }).unwrap();
        assert_eq!(under, "<< Undershot target by 3510.6 meters.\n");
        let over = display.render(&SessionEvent::Missed { shot: shot(-42.0) }).unwrap();
        assert_eq!(over, ">> Overshot target by 42.0 meters.\n");

        let hit = display.render(&SessionEvent::Hit { shot: shot(-4.0) }).unwrap();
        assert!(hit.contains("Direct hit (within 4.0 meters) after 3 shots!!"));
    }

    #[test]
    fn test_prompt_has_no_newline() {
        let display = Display::new(Units::Metric, 9177.4);
        let prompt = display
            .render(&SessionEvent::AwaitingAngle {
                bounds: AngleBounds::default(),
            })
            .unwrap();
        assert_eq!(
            prompt,
            "Enter a shot angle from 1.0 to 45.0 degrees (0 to quit): "
        );
    }

    #[test]
    fn test_target_report_notes_speedup() {
        let display = Display::new(Units::Metric, 9177.4);
        let fast = display
            .render(&SessionEvent::TargetReport {
                range: 5000.0,
                elapsed_secs: 20.0,
                speed_multiplier: 10.0,
            })
            .unwrap();
        assert_eq!(
            fast,
            "Target Range = 5000.0 meters after 20 seconds (at 10x real-time).\n"
        );
        let slow = display
            .render(&SessionEvent::TargetReport {
                range: 5000.0,
                elapsed_secs: 10.0,
                speed_multiplier: 1.0,
            })
            .unwrap();
        assert_eq!(slow, "Target Range = 5000.0 meters after 10 seconds.\n");
    }

    #[test]
    fn test_timeline_includes_legend() {
        let display = Display::new(Units::Metric, 10_000.0);
        let text = display
            .render(&SessionEvent::Timeline(TimelineFrame {
                flight_line: " /\\".into(),
                impact_line: "/--\\T".into(),
                shot_index: 4,
                target_index: 5,
                hit: false,
            }))
            .unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[1], " /\\");
        assert_eq!(lines[2], "/--\\T");
        assert!(lines[3].ends_with("Kilometers"));
    }

    #[test]
    fn test_header_shows_both_scales() {
        let display = Display::new(Units::Metric, 9177.4);
        let text = display
            .render(&SessionEvent::Header(HeaderView {
                muzzle_speed: 300.0,
                max_range: 9177.4,
                target_speed: 10.0,
                target_range: 5000.0,
            }))
            .unwrap();
        assert!(text.contains("Projectile Velocity  = 300.0 meters/sec"));
        assert!(text.contains("Target Velocity      = 36.0 kilometers/hour"));
        assert!(text.contains("Current Target Range = 5.0 kilometers"));
    }

    #[test]
    fn test_quiet_on_hit_and_game_over_finish() {
        let display = Display::new(Units::Metric, 9177.4);
        assert!(display
            .render(&SessionEvent::Finished {
                end: SessionEnd::Hit { shots: 2 }
            })
            .is_none());
        assert!(display
            .render(&SessionEvent::Finished {
                end: SessionEnd::Quit { shots: 2 }
            })
            .is_some());
    }
}
