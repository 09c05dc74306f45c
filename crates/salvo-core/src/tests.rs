#[cfg(test)]
mod tests {
    use crate::commands::{parse_angle, ShotInput};
    use crate::config::{kph_to_mps, SimulationConfig};
    use crate::enums::*;
    use crate::error::{AngleInputError, ConfigError};
    use crate::events::SessionEvent;
    use crate::types::{AngleBounds, Shot};

    // ---- Angle input ----

    #[test]
    fn test_parse_angle_accepts_bounds_inclusive() {
        let bounds = AngleBounds::default();
        assert_eq!(
            parse_angle("1", &bounds),
            Ok(ShotInput::Angle { degrees: 1.0 })
        );
        assert_eq!(
            parse_angle(" 45.0 \n", &bounds),
            Ok(ShotInput::Angle { degrees: 45.0 })
        );
        assert_eq!(
            parse_angle("22.5", &bounds),
            Ok(ShotInput::Angle { degrees: 22.5 })
        );
    }

    #[test]
    fn test_parse_angle_zero_is_quit() {
        let bounds = AngleBounds::default();
        assert_eq!(parse_angle("0", &bounds), Ok(ShotInput::Quit));
        assert_eq!(parse_angle("0.0", &bounds), Ok(ShotInput::Quit));
    }

    #[test]
    fn test_parse_angle_rejects_garbage() {
        let bounds = AngleBounds::default();
        assert_eq!(
            parse_angle("fire!", &bounds),
            Err(AngleInputError::NotANumber("fire!".into()))
        );
        assert!(matches!(
            parse_angle("", &bounds),
            Err(AngleInputError::NotANumber(_))
        ));
    }

    #[test]
    fn test_parse_angle_rejects_out_of_range() {
        let bounds = AngleBounds::default();
        for text in ["45.1", "-3", "0.5", "90"] {
            assert!(
                matches!(
                    parse_angle(text, &bounds),
                    Err(AngleInputError::OutOfRange { .. })
                ),
                "`{}` should be out of range",
                text
            );
        }
    }

    // ---- Config ----

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(SimulationConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_config_rejects_zero_tolerance() {
        let config = SimulationConfig {
            tolerance: 0.0,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::NonPositiveTolerance(0.0))
        );
    }

    #[test]
    fn test_config_rejects_inverted_bounds() {
        let config = SimulationConfig {
            angle_bounds: AngleBounds::new(30.0, 10.0),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidAngleBounds { .. })
        ));
    }

    #[test]
    fn test_config_rejects_narrow_ruler() {
        let config = SimulationConfig {
            ruler_width: 6,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::RulerTooNarrow { width: 6, .. })
        ));
    }

    #[test]
    fn test_tick_interval_scales_with_multiplier() {
        let config = SimulationConfig {
            speed_multiplier: 10.0,
            ..Default::default()
        };
        assert_eq!(config.tick_interval().as_millis(), 100);
        assert!((config.flight_wait(23.0).as_secs_f64() - 2.3).abs() < 1e-6);
    }

    #[test]
    fn test_opening_angle_is_half_max() {
        assert_eq!(SimulationConfig::default().opening_angle(), 22.5);
    }

    #[test]
    fn test_kph_to_mps() {
        assert!((kph_to_mps(36.0) - 10.0).abs() < 1e-12);
    }

    // ---- Session end ----

    #[test]
    fn test_session_end_shots() {
        assert_eq!(SessionEnd::Hit { shots: 3 }.shots(), 3);
        assert_eq!(SessionEnd::Quit { shots: 0 }.shots(), 0);
    }

    // ---- Serde ----

    #[test]
    fn test_event_json_is_tagged() {
        let shot = Shot {
            number: 1,
            angle: 22.5,
            range: 6489.43,
            flight_time: 23.41,
            miss_delta: 3510.57,
        };
        let json = serde_json::to_string(&SessionEvent::Missed { shot }).unwrap();
        assert!(json.contains("\"type\":\"Missed\""), "{}", json);

        let back: SessionEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, SessionEvent::Missed { shot });
    }

    #[test]
    fn test_finished_event_serde() {
        let event = SessionEvent::Finished {
            end: SessionEnd::TargetReachedOrigin { shots: 4 },
        };
        let json = serde_json::to_string(&event).unwrap();
        let back: SessionEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }
}
