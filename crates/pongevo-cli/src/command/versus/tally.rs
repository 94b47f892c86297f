use pongevo_engine::GameInfo;

/// Running results of the matches played in one session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub matches: u32,
    pub left_wins: u32,
    pub right_wins: u32,
    /// Matches that ended on the hit ceiling or the tick cap.
    pub unscored: u32,
    /// Most hits, both paddles together, in a single match.
    pub longest_rally: u32,
}

impl Tally {
    pub fn record(&mut self, result: &GameInfo) {
        self.matches += 1;
        match result.left_score.cmp(&result.right_score) {
            std::cmp::Ordering::Greater => self.left_wins += 1,
            std::cmp::Ordering::Less => self.right_wins += 1,
            std::cmp::Ordering::Equal => self.unscored += 1,
        }
        self.longest_rally = self
            .longest_rally
            .max(result.left_hits + result.right_hits);
    }
}
