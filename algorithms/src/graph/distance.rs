use std::cmp::Ordering;
use std::fmt;

/// Tentative or final shortest-path distance. `Unreachable` orders after
/// every finite distance.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Distance {
    Finite(i64),
    Unreachable,
}

impl Distance {
    pub fn finite(self) -> Option<i64> {
        match self {
            Distance::Finite(d) => Some(d),
            Distance::Unreachable => None,
        }
    }
}

impl Ord for Distance {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Distance::Finite(a), Distance::Finite(b)) => a.cmp(b),
            (Distance::Finite(_), Distance::Unreachable) => Ordering::Less,
            (Distance::Unreachable, Distance::Finite(_)) => Ordering::Greater,
            (Distance::Unreachable, Distance::Unreachable) => Ordering::Equal,
        }
    }
}

impl PartialOrd for Distance {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Finite(d) => write!(f, "{d}"),
            Distance::Unreachable => f.write_str("INF"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Distance;

    #[test]
    fn unreachable_sorts_last_and_prints_inf() {
        assert!(Distance::Finite(i64::MAX) < Distance::Unreachable);
        assert!(Distance::Finite(-3) < Distance::Finite(2));
        assert_eq!(Distance::Unreachable.to_string(), "INF");
        assert_eq!(Distance::Finite(-7).to_string(), "-7");
    }
}
