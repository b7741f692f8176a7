use std::collections::HashSet;

/// A participant, identified by the trimmed name from the roster file.
/// Names compare exactly; no case folding.
pub type Person = String;

/// An unordered pairing of two people.
///
/// The two names are stored in sorted order, so `PairKey::new(a, b)` and
/// `PairKey::new(b, a)` are equal and hash identically.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PairKey {
    low: Person,
    high: Person,
}

impl PairKey {
    pub fn new(a: impl Into<Person>, b: impl Into<Person>) -> Self {
        let (a, b) = (a.into(), b.into());
        if a <= b {
            Self { low: a, high: b }
        } else {
            Self { low: b, high: a }
        }
    }

    pub fn people(&self) -> (&str, &str) {
        (&self.low, &self.high)
    }
}

/// Every pair that has been teamed together in a previous run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchHistory {
    pairs: HashSet<PairKey>,
}

impl MatchHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the pair was not already present.
    pub fn insert(&mut self, pair: PairKey) -> bool {
        self.pairs.insert(pair)
    }

    pub fn contains(&self, a: &str, b: &str) -> bool {
        self.pairs.contains(&PairKey::new(a, b))
    }

    /// Records all C(n, 2) pairs among `people`.
    pub fn record_group(&mut self, people: &[Person]) {
        for (i, first) in people.iter().enumerate() {
            for second in &people[i + 1..] {
                self.pairs.insert(PairKey::new(first.as_str(), second.as_str()));
            }
        }
    }

    pub fn merge(&mut self, other: MatchHistory) {
        self.pairs.extend(other.pairs);
    }

    pub fn clear(&mut self) {
        self.pairs.clear();
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl FromIterator<PairKey> for MatchHistory {
    fn from_iter<I: IntoIterator<Item = PairKey>>(iter: I) -> Self {
        Self {
            pairs: iter.into_iter().collect(),
        }
    }
}

/// A group of people meeting for one run: two members, or three when the
/// roster size is odd.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    members: Vec<Person>,
}

impl Team {
    pub(crate) fn pair(first: Person, second: Person) -> Self {
        Self {
            members: vec![first, second],
        }
    }

    pub(crate) fn absorb(&mut self, person: Person) {
        self.members.push(person);
    }

    pub fn members(&self) -> &[Person] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn contains(&self, person: &str) -> bool {
        self.members.iter().any(|m| m == person)
    }

    /// All unordered pairs within the team; three of them for a triple.
    pub fn pairs(&self) -> Vec<PairKey> {
        let mut pairs = Vec::new();
        for (i, first) in self.members.iter().enumerate() {
            for second in &self.members[i + 1..] {
                pairs.push(PairKey::new(first.as_str(), second.as_str()));
            }
        }
        pairs
    }
}

#[derive(Debug, Clone)]
pub struct RunInput {
    pub roster: Vec<Person>,
    pub history: MatchHistory,
    pub history_files: usize,
}

#[derive(Debug, Clone)]
pub struct RunResult {
    pub teams: Vec<Team>,
    pub history: MatchHistory,
    pub csv_output: String,
}
