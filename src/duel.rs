use crate::driver::{step_all, undo_all};
use crate::{
    evaluate, Conway, EngineConfig, Evolution, EvolutionReport, Grid, GridEngine, MatchResult,
    Player, Result, Rule,
};
use rand::Rng;

/// The two boards of a round, and the boards the players locked in before evolution started.
#[derive(Debug)]
pub struct Duel<R = Conway> {
    engines: [GridEngine<R>; 2],
    initial: Option<[Grid; 2]>,
}

impl Duel<Conway> {
    /// Build both boards from the same configuration.
    pub fn new<G>(config: &EngineConfig, rng: &mut G) -> Result<Self>
    where
        G: Rng + ?Sized,
    {
        Ok(Self::from_engines(config.build(rng)?, config.build(rng)?))
    }
}

impl<R> Duel<R> {
    pub fn from_engines(one: GridEngine<R>, two: GridEngine<R>) -> Self {
        Duel {
            engines: [one, two],
            initial: None,
        }
    }

    pub fn player(&self, player: Player) -> &GridEngine<R> {
        &self.engines[player.index()]
    }

    pub fn player_mut(&mut self, player: Player) -> &mut GridEngine<R> {
        &mut self.engines[player.index()]
    }

    /// Record the boards both players finished seeding. Calling it again replaces the record.
    pub fn lock_in(&mut self) {
        self.initial = Some([self.engines[0].snapshot(), self.engines[1].snapshot()]);
    }

    pub fn is_locked_in(&self) -> bool {
        self.initial.is_some()
    }

    /// The board a player locked in, if `lock_in` was called.
    pub fn initial(&self, player: Player) -> Option<&Grid> {
        self.initial.as_ref().map(|initial| &initial[player.index()])
    }

    /// Undo one generation on both boards.
    pub fn undo(&mut self) -> bool {
        undo_all(&mut self.engines)
    }

    /// Score the round. Boards that were never locked in count as unchanged.
    pub fn result(&self) -> Result<MatchResult> {
        let [one, two] = &self.engines;
        let (initial_one, initial_two) = match &self.initial {
            Some([a, b]) => (a, b),
            None => (one.grid(), two.grid()),
        };
        evaluate(initial_one, one.grid(), initial_two, two.grid())
    }
}

impl<R> Duel<R>
where
    R: Rule + Sync,
{
    /// Step both boards once, locking them in first if needed.
    pub fn step(&mut self) -> bool {
        if !self.is_locked_in() {
            self.lock_in();
        }
        step_all(&mut self.engines)
    }

    /// Run both boards to quiescence or the generation limit, locking them in first if needed.
    pub fn evolve(&mut self, evolution: &Evolution) -> EvolutionReport {
        if !self.is_locked_in() {
            self.lock_in();
        }
        evolution.run(&mut self.engines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Outcome, Verdict};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn config() -> EngineConfig {
        EngineConfig {
            side: 6,
            activation_limit: 4,
            seed_density: None,
        }
    }

    #[test]
    fn block_beats_blinker_fragment() {
        let mut duel = Duel::new(&config(), &mut StdRng::seed_from_u64(0)).unwrap();
        for &(x, y) in &[(1, 1), (2, 1), (1, 2), (2, 2)] {
            duel.player_mut(Player::One).activate(x, y).unwrap();
        }
        for &(x, y) in &[(0, 0), (5, 5)] {
            duel.player_mut(Player::Two).activate(x, y).unwrap();
        }
        duel.lock_in();
        let report = duel.evolve(&Evolution::default());
        assert!(report.quiescent);
        assert_eq!(report.generations, 2);

        let result = duel.result().unwrap();
        assert_eq!(result.outcome, Outcome::PlayerOneWins);
        assert_eq!(result.player_one.changed, 0);
        assert_eq!(result.player_one.score, 4);
        assert_eq!(result.player_two.changed, 2);
        assert_eq!(result.player_two.score, 0);
        assert_eq!(result.verdict(Player::Two), Verdict::Lose);
    }

    #[test]
    fn stepping_locks_in_the_starting_boards() {
        let mut duel = Duel::new(&config(), &mut StdRng::seed_from_u64(0)).unwrap();
        duel.player_mut(Player::Two).activate(3, 3).unwrap();
        assert!(duel.initial(Player::Two).is_none());
        assert!(duel.step());
        assert_eq!(duel.initial(Player::Two).unwrap().count_active(), 1);
        assert_eq!(duel.player(Player::Two).count_active(), 0);
        assert!(duel.undo());
        assert_eq!(duel.player(Player::Two).count_active(), 1);
    }

    #[test]
    fn empty_boards_tie() {
        let duel = Duel::new(&config(), &mut StdRng::seed_from_u64(0)).unwrap();
        let result = duel.result().unwrap();
        assert_eq!(result.outcome, Outcome::Tie);
        assert_eq!(result.player_one.changed, 0);
    }
}
