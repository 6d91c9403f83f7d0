use crate::ID;
use crate::gameroom::Connection;

/// Two connections about to become a game. The earlier joiner plays white.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pairing {
    pub white: ID<Connection>,
    pub black: ID<Connection>,
}

/// Single-slot matchmaking.
///
/// At most one connection waits at a time. The next different joiner is
/// paired with it on the spot, emptying the slot; the one after that waits.
#[derive(Debug, Default)]
pub struct Matchmaker {
    pending: Option<ID<Connection>>,
    matches: u64,
}

impl Matchmaker {
    /// Occupies the slot, or pairs with its occupant.
    /// A repeat request from the occupant itself leaves it waiting.
    pub fn request(&mut self, conn: ID<Connection>) -> Option<Pairing> {
        match self.pending {
            None => {
                self.pending = Some(conn);
                None
            }
            Some(other) if other == conn => None,
            Some(other) => {
                self.pending = None;
                self.matches += 1;
                Some(Pairing {
                    white: other,
                    black: conn,
                })
            }
        }
    }
    /// Empties the slot if `conn` holds it.
    pub fn cancel(&mut self, conn: ID<Connection>) -> bool {
        match self.pending {
            Some(other) if other == conn => {
                self.pending = None;
                true
            }
            _ => false,
        }
    }
    pub fn pending(&self) -> Option<ID<Connection>> {
        self.pending
    }
    /// Pairings made since startup.
    pub fn matches(&self) -> u64 {
        self.matches
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn first_joiner_waits() {
        let mut mm = Matchmaker::default();
        let a = ID::default();
        assert_eq!(mm.request(a), None);
        assert_eq!(mm.pending(), Some(a));
    }
    #[test]
    fn second_joiner_pairs_as_black() {
        let mut mm = Matchmaker::default();
        let a = ID::default();
        let b = ID::default();
        mm.request(a);
        assert_eq!(mm.request(b), Some(Pairing { white: a, black: b }));
        assert_eq!(mm.pending(), None);
        assert_eq!(mm.matches(), 1);
    }
    #[test]
    fn third_joiner_becomes_occupant() {
        let mut mm = Matchmaker::default();
        let (a, b, c) = (ID::default(), ID::default(), ID::default());
        mm.request(a);
        mm.request(b);
        assert_eq!(mm.request(c), None);
        assert_eq!(mm.pending(), Some(c));
    }
    #[test]
    fn occupant_cannot_pair_with_itself() {
        let mut mm = Matchmaker::default();
        let a = ID::default();
        mm.request(a);
        assert_eq!(mm.request(a), None);
        assert_eq!(mm.pending(), Some(a));
        assert_eq!(mm.matches(), 0);
    }
    #[test]
    fn cancel_only_by_occupant() {
        let mut mm = Matchmaker::default();
        let a = ID::default();
        mm.request(a);
        assert!(!mm.cancel(ID::default()));
        assert!(mm.cancel(a));
        assert!(!mm.cancel(a));
        assert_eq!(mm.pending(), None);
    }
}
