//! Configuration validation.
//!
//! Checks that a run configuration can actually be executed before any tape is
//! built or any worker is started:
//!
//! 1. **Tape**: the initial tape has at least one cell and at most
//!    [`MAX_TAPE_LEN`](crate::config::consts::MAX_TAPE_LEN)
//! 2. **Partition**: the section count the partitioned updater will use, explicit
//!    or derived from the CPU count, is at least one and at most the tape length
//! 3. **Exchange**: a configured timeout is non-zero
//! 4. **Rendering**: alive and dead glyphs can be told apart
//!
//! All checks run and every problem is returned, so a user sees the full list
//! at once.
//!
//! # Example
//!
//! ```rust
//! use rule110::config::{validate_config, Config};
//! use rule110::errors::ValidationError;
//!
//! let mut config = Config::default();
//! config.sections = Some(0);
//! config.render.dead = config.render.alive;
//!
//! let errors = validate_config(&config).unwrap_err();
//! assert_eq!(errors.len(), 2);
//! assert!(errors.contains(&ValidationError::NoSections));
//! ```

use crate::config::consts::MAX_TAPE_LEN;
use crate::config::{Config, Strategy};
use crate::errors::ValidationError;
use crate::observability::messages::validation::ConfigRuleViolated;
use crate::observability::messages::StructuredLog;

/// Validate a configuration, returning every problem found.
pub fn validate_config(config: &Config) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let tape_len = match config.tape.checked_len() {
        Some(0) => {
            errors.push(ValidationError::EmptyTape);
            None
        }
        Some(len) if len <= MAX_TAPE_LEN => Some(len),
        _ => {
            errors.push(ValidationError::TapeTooLong { max: MAX_TAPE_LEN });
            None
        }
    };

    // A sequential-only run never partitions, so the CPU-count fallback is not
    // held against it. An explicit count is still checked.
    let sections = match (config.strategy, config.sections) {
        (Strategy::Sequential, None) => None,
        _ => Some(config.effective_sections()),
    };
    match (sections, tape_len) {
        (Some(0), _) => errors.push(ValidationError::NoSections),
        (Some(sections), Some(tape_len)) if sections > tape_len => {
            errors.push(ValidationError::TooManySections { sections, tape_len })
        }
        _ => {}
    }

    if config.exchange.timeout_ms == Some(0) {
        errors.push(ValidationError::ZeroExchangeTimeout);
    }

    if config.render.alive == config.render.dead {
        errors.push(ValidationError::IndistinctGlyphs {
            glyph: config.render.alive,
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        for error in &errors {
            ConfigRuleViolated { error }.log();
        }
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TapeConfig;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(validate_config(&Config::default()), Ok(()));
    }

    #[test]
    fn test_empty_tape() {
        let mut config = Config::default();
        config.tape = TapeConfig {
            padding: 0,
            pattern: vec![],
        };
        assert_eq!(
            validate_config(&config),
            Err(vec![ValidationError::EmptyTape])
        );
    }

    #[test]
    fn test_too_many_sections() {
        let mut config = Config::default();
        config.tape.padding = 2;
        config.sections = Some(5);
        assert_eq!(
            validate_config(&config),
            Err(vec![ValidationError::TooManySections {
                sections: 5,
                tape_len: 4,
            }])
        );
    }

    #[test]
    fn test_sections_equal_to_tape_length_is_valid() {
        let mut config = Config::default();
        config.tape.padding = 2;
        config.sections = Some(4);
        assert_eq!(validate_config(&config), Ok(()));
    }

    #[test]
    fn test_derived_sections_checked_against_tape() {
        let mut config = Config::default();
        config.strategy = Strategy::Partitioned;
        config.sections = None;
        config.tape = TapeConfig {
            padding: 0,
            pattern: vec![true],
        };

        let derived = config.effective_sections();
        let expected = if derived > 1 {
            Err(vec![ValidationError::TooManySections {
                sections: derived,
                tape_len: 1,
            }])
        } else {
            Ok(())
        };
        assert_eq!(validate_config(&config), expected);
    }

    #[test]
    fn test_sequential_ignores_derived_sections() {
        let mut config = Config::default();
        config.strategy = Strategy::Sequential;
        config.sections = None;
        config.tape = TapeConfig {
            padding: 0,
            pattern: vec![true],
        };
        assert_eq!(validate_config(&config), Ok(()));

        config.sections = Some(2);
        assert_eq!(
            validate_config(&config),
            Err(vec![ValidationError::TooManySections {
                sections: 2,
                tape_len: 1,
            }])
        );
    }

    #[test]
    fn test_oversized_tape() {
        let mut config = Config::default();
        config.tape.padding = MAX_TAPE_LEN;
        assert_eq!(
            validate_config(&config),
            Err(vec![ValidationError::TapeTooLong { max: MAX_TAPE_LEN }])
        );

        config.tape.padding = usize::MAX;
        assert_eq!(
            validate_config(&config),
            Err(vec![ValidationError::TapeTooLong { max: MAX_TAPE_LEN }])
        );
    }

    #[test]
    fn test_largest_tape_is_valid() {
        let mut config = Config::default();
        config.tape.padding = MAX_TAPE_LEN - config.tape.pattern.len();
        assert_eq!(validate_config(&config), Ok(()));
    }

    #[test]
    fn test_zero_timeout() {
        let mut config = Config::default();
        config.exchange.timeout_ms = Some(0);
        assert_eq!(
            validate_config(&config),
            Err(vec![ValidationError::ZeroExchangeTimeout])
        );
    }

    #[test]
    fn test_collects_every_error() {
        let mut config = Config::default();
        config.tape = TapeConfig {
            padding: 0,
            pattern: vec![],
        };
        config.sections = Some(0);
        config.exchange.timeout_ms = Some(0);
        config.render.alive = '*';
        config.render.dead = '*';

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![
                ValidationError::EmptyTape,
                ValidationError::NoSections,
                ValidationError::ZeroExchangeTimeout,
                ValidationError::IndistinctGlyphs { glyph: '*' },
            ]
        );
    }
}
