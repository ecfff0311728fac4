/// One-way latch. Starts hidden; once revealed it stays revealed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RevealGate {
    revealed: bool,
}

impl RevealGate {
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Returns true only on the call that flipped the gate.
    pub fn reveal(&mut self) -> bool {
        let flipped = !self.revealed;
        self.revealed = true;
        flipped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveal_once() {
        let mut gate = RevealGate::default();
        assert!(!gate.is_revealed());
        assert!(gate.reveal());
        assert!(gate.is_revealed());
        assert!(!gate.reveal());
        assert!(!gate.reveal());
        assert!(gate.is_revealed());
    }
}
