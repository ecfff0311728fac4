/// Viewport-relative vertical extent of a section, as from `getBoundingClientRect`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBounds {
    pub top: f64,
    pub bottom: f64,
}

impl SectionBounds {
    pub fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }

    /// True when the section's top has scrolled to within `threshold` px of the
    /// viewport top and the section still covers that line.
    pub fn crosses(&self, threshold: f64) -> bool {
        self.top <= threshold && self.bottom > threshold
    }
}

/// Tracks which registered anchor is in view.
#[derive(Debug, Clone)]
pub struct ScrollSpy {
    anchors: Vec<String>,
    threshold: f64,
    active: Option<usize>,
}

impl ScrollSpy {
    pub fn new<I, S>(anchors: I, threshold: f64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            anchors: anchors.into_iter().map(Into::into).collect(),
            threshold,
            active: None,
        }
    }

    pub fn active(&self) -> Option<&str> {
        self.active.map(|i| self.anchors[i].as_str())
    }

    /// Re-measures every anchor in registration order. The first one crossing the
    /// threshold becomes active; if none does, the previous value is kept.
    /// Anchors that can't be measured (not mounted) are skipped.
    ///
    /// Returns whether the active anchor changed.
    pub fn observe<F>(&mut self, mut measure: F) -> bool
    where
        F: FnMut(&str) -> Option<SectionBounds>,
    {
        let hit = self.anchors.iter().position(|anchor| {
            measure(anchor)
                .map(|b| b.crosses(self.threshold))
                .unwrap_or(false)
        });
        match hit {
            Some(i) if self.active != Some(i) => {
                self.active = Some(i);
                true
            }
            _ => false,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// A link inside the menu was followed.
    pub fn link_activated(&mut self) {
        self.open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn spy() -> ScrollSpy {
        ScrollSpy::new(["home", "work", "skills", "contact"], 100.0)
    }

    fn layout(entries: &[(&str, f64, f64)]) -> HashMap<String, SectionBounds> {
        entries
            .iter()
            .map(|(k, t, b)| (k.to_string(), SectionBounds::new(*t, *b)))
            .collect()
    }

    #[test]
    fn test_single_match_becomes_active() {
        let mut spy = spy();
        let bounds = layout(&[
            ("home", -900.0, -100.0),
            ("work", 50.0, 700.0),
            ("skills", 700.0, 1400.0),
            ("contact", 1400.0, 2000.0),
        ]);
        assert!(spy.observe(|a| bounds.get(a).copied()));
        assert_eq!(spy.active(), Some("work"));
    }

    #[test]
    fn test_no_match_keeps_previous() {
        let mut spy = spy();
        let first = layout(&[("home", 0.0, 800.0)]);
        spy.observe(|a| first.get(a).copied());
        assert_eq!(spy.active(), Some("home"));

        // gap between sections: nothing covers the threshold line
        let gap = layout(&[
            ("home", -900.0, 20.0),
            ("work", 300.0, 900.0),
        ]);
        assert!(!spy.observe(|a| gap.get(a).copied()));
        assert_eq!(spy.active(), Some("home"));
    }

    #[test]
    fn test_nothing_active_initially() {
        let mut spy = spy();
        assert_eq!(spy.active(), None);
        assert!(!spy.observe(|_| None));
        assert_eq!(spy.active(), None);
    }

    #[test]
    fn test_first_registered_wins() {
        let mut spy = spy();
        // overlapping sections, e.g. a fixed element
        let bounds = layout(&[("skills", 0.0, 500.0), ("work", -10.0, 400.0)]);
        spy.observe(|a| bounds.get(a).copied());
        assert_eq!(spy.active(), Some("work"));
    }

    #[test]
    fn test_same_section_reports_no_change() {
        let mut spy = spy();
        let bounds = layout(&[("contact", 10.0, 600.0)]);
        assert!(spy.observe(|a| bounds.get(a).copied()));
        assert!(!spy.observe(|a| bounds.get(a).copied()));
    }

    #[test]
    fn test_threshold_edges() {
        let b = SectionBounds::new(100.0, 101.0);
        assert!(b.crosses(100.0));
        let b = SectionBounds::new(101.0, 900.0);
        assert!(!b.crosses(100.0));
        let b = SectionBounds::new(-500.0, 100.0);
        assert!(!b.crosses(100.0));
    }

    #[test]
    fn test_mobile_menu() {
        let mut menu = MobileMenu::default();
        assert!(!menu.is_open());
        menu.toggle();
        assert!(menu.is_open());
        menu.toggle();
        assert!(!menu.is_open());

        menu.toggle();
        menu.link_activated();
        assert!(!menu.is_open());
        // closing an already closed menu is harmless
        menu.link_activated();
        assert!(!menu.is_open());
    }
}
