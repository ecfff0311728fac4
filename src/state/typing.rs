use std::time::Duration;

use crate::config::Timings;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Typing,
    Paused,
    Deleting,
}

/// Types out each role one character at a time, holds it, deletes it, then moves
/// on to the next role. Each `tick` advances one step and returns how long to
/// wait before the next one.
#[derive(Debug, Clone)]
pub struct TypingEffect {
    roles: Vec<String>,
    timings: Timings,
    role: usize,
    // in chars, not bytes
    len: usize,
    phase: Phase,
}

impl TypingEffect {
    pub fn new(roles: Vec<String>, timings: Timings) -> Self {
        Self {
            roles,
            timings,
            role: 0,
            len: 0,
            phase: Phase::Typing,
        }
    }

    pub fn role_index(&self) -> usize {
        self.role
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    fn current(&self) -> &str {
        self.roles.get(self.role).map(String::as_str).unwrap_or("")
    }

    fn full_len(&self) -> usize {
        self.current().chars().count()
    }

    /// The visible prefix of the current role.
    pub fn text(&self) -> &str {
        let current = self.current();
        let end = current
            .char_indices()
            .nth(self.len)
            .map(|(i, _)| i)
            .unwrap_or(current.len());
        &current[..end]
    }

    /// Delay before the first tick.
    pub fn initial_delay(&self) -> Duration {
        self.timings.type_interval()
    }

    pub fn tick(&mut self) -> Duration {
        if self.roles.is_empty() {
            return self.timings.pause();
        }
        match self.phase {
            Phase::Typing => {
                if self.len < self.full_len() {
                    self.len += 1;
                }
                if self.len == self.full_len() {
                    self.phase = Phase::Paused;
                    self.timings.pause()
                } else {
                    self.timings.type_interval()
                }
            }
            Phase::Paused => {
                self.phase = Phase::Deleting;
                self.timings.delete_interval()
            }
            Phase::Deleting => {
                if self.len > 0 {
                    self.len -= 1;
                    self.timings.delete_interval()
                } else {
                    self.role = (self.role + 1) % self.roles.len();
                    self.phase = Phase::Typing;
                    self.timings.type_interval()
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn effect(roles: &[&str]) -> TypingEffect {
        TypingEffect::new(
            roles.iter().map(|s| s.to_string()).collect(),
            Timings::default(),
        )
    }

    #[test]
    fn test_grows_then_pauses_then_shrinks() {
        let mut fx = effect(&["abc"]);
        assert_eq!(fx.text(), "");
        assert_eq!(fx.tick(), Duration::from_millis(100));
        assert_eq!(fx.text(), "a");
        fx.tick();
        assert_eq!(fx.text(), "ab");
        // reaching full length waits for the pause
        assert_eq!(fx.tick(), Duration::from_millis(2000));
        assert_eq!(fx.text(), "abc");
        assert_eq!(fx.phase(), Phase::Paused);

        assert_eq!(fx.tick(), Duration::from_millis(50));
        assert_eq!(fx.phase(), Phase::Deleting);
        assert_eq!(fx.text(), "abc");
        fx.tick();
        assert_eq!(fx.text(), "ab");
    }

    #[test]
    fn test_full_cycle_is_monotonic_and_wraps() {
        let roles = ["Full Stack Developer", "Software Engineer", "Tech Enthusiast"];
        let mut fx = effect(&roles);

        for cycle in 0..(roles.len() * 2) {
            let expected = roles[cycle % roles.len()];
            assert_eq!(fx.role_index(), cycle % roles.len());

            // strictly grows to the full string
            let mut prev = fx.text().len();
            while fx.phase() == Phase::Typing {
                fx.tick();
                let now = fx.text().len();
                assert_eq!(now, prev + 1);
                assert!(expected.starts_with(fx.text()));
                prev = now;
            }
            assert_eq!(fx.text(), expected);

            // pause, then strictly shrinks to empty
            fx.tick();
            while !fx.text().is_empty() {
                let before = fx.text().len();
                fx.tick();
                assert_eq!(fx.text().len(), before - 1);
                assert_eq!(fx.role_index(), cycle % roles.len());
            }
            // one more tick to advance
            fx.tick();
            assert_eq!(fx.phase(), Phase::Typing);
        }
        assert_eq!(fx.role_index(), 0);
    }

    #[test]
    fn test_multibyte_roles() {
        let mut fx = effect(&["héllo🌍"]);
        for _ in 0..3 {
            fx.tick();
        }
        assert_eq!(fx.text(), "hél");
        for _ in 0..3 {
            fx.tick();
        }
        assert_eq!(fx.text(), "héllo🌍");
    }

    #[test]
    fn test_no_roles_idles() {
        let mut fx = effect(&[]);
        assert_eq!(fx.tick(), Duration::from_millis(2000));
        assert_eq!(fx.text(), "");
        assert_eq!(fx.role_index(), 0);
    }
}
