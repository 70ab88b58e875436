//! Twenty-One round controller.
//!
//! A round runs in fixed phases: deal two cards each (dealer first), the
//! human hits until they stay or bust, then the dealer draws to its
//! threshold. A human bust ends the round at once and the dealer never
//! draws.

use tracing::{debug, info};

use super::card::Rank;
use super::deck::Deck;
use super::hand::{Hand, TwentyOneRules};
use super::policy::{DealerAction, DealerPolicy, TurnChoice};
use crate::core::{DeckError, EngineError, PlayerIdentity, RandomSource, Side, SideMap};
use crate::io::{self, DisplaySink, InputProvider, RenderEvent, RoundReport};
use crate::rules::{RoundEngine, RoundOutcome};

pub const PLAYER_NAME: &str = "Player";
pub const DEALER_NAME: &str = "Dealer";

/// Where a round stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TablePhase {
    /// Waiting on the human's hit or stay.
    HumanTurn,
    /// Dealer draws to its threshold.
    DealerTurn,
    RoundOver(RoundOutcome),
}

/// A Twenty-One table: deck, both hands and the dealer policy.
#[derive(Clone, Debug)]
pub struct TwentyOne {
    rules: TwentyOneRules,
    dealer: DealerPolicy,
    deck: Deck,
    hands: SideMap<Hand>,
    identities: SideMap<PlayerIdentity>,
    phase: TablePhase,
}

impl Default for TwentyOne {
    fn default() -> Self {
        Self::new(PLAYER_NAME)
    }
}

impl TwentyOne {
    /// Create a table for a human called `name` against the dealer.
    pub fn new(name: impl Into<String>) -> Self {
        let rules = TwentyOneRules::standard();
        let human = PlayerIdentity::named(name);
        Self {
            dealer: DealerPolicy::new(&rules),
            rules,
            deck: Deck::new(),
            hands: SideMap::with_default(),
            identities: SideMap::new(|side| match side {
                Side::Human => human.clone(),
                Side::Opponent => PlayerIdentity::named(DEALER_NAME),
            }),
            phase: TablePhase::HumanTurn,
        }
    }

    #[must_use]
    pub fn rules(&self) -> &TwentyOneRules {
        &self.rules
    }

    #[must_use]
    pub fn hand(&self, side: Side) -> &Hand {
        &self.hands[side]
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    #[must_use]
    pub fn phase(&self) -> TablePhase {
        self.phase
    }

    /// Normalized score of one side's hand.
    #[must_use]
    pub fn score(&self, side: Side) -> u32 {
        self.hands[side].score(&self.rules)
    }

    /// Fresh deck and hands, then the opening deal: dealer first.
    pub fn deal<R: RandomSource>(&mut self, rng: &mut R) -> Result<(), DeckError> {
        self.reset();
        for side in [Side::Opponent, Side::Human] {
            for rank in self.deck.draw(self.rules.initial_deal, rng)? {
                self.hands[side].push(rank);
            }
        }
        debug!(
            human = ?self.hands[Side::Human].cards(),
            dealer_up = ?self.hands[Side::Opponent].up_card(),
            "opening deal"
        );
        Ok(())
    }

    fn hit<R: RandomSource>(&mut self, side: Side, rng: &mut R) -> Result<Rank, DeckError> {
        let rank = self.deck.draw_one(rng)?;
        self.hands[side].push(rank);
        debug!(%side, %rank, score = self.score(side), "hit");
        Ok(rank)
    }

    /// Apply the human's choice. Ignored outside the human phase.
    pub fn human_choice<R: RandomSource>(&mut self, choice: TurnChoice, rng: &mut R) -> Result<TablePhase, DeckError> {
        if self.phase != TablePhase::HumanTurn {
            return Ok(self.phase);
        }
        self.phase = match choice {
            TurnChoice::Hit => {
                self.hit(Side::Human, rng)?;
                if self.hands[Side::Human].is_bust(&self.rules) {
                    TablePhase::RoundOver(RoundOutcome::OpponentWin)
                } else {
                    TablePhase::HumanTurn
                }
            }
            TurnChoice::Stay => TablePhase::DealerTurn,
        };
        Ok(self.phase)
    }

    /// One dealer decision: draw a card, or stand and settle the round.
    /// Ignored outside the dealer phase.
    pub fn dealer_step<R: RandomSource>(&mut self, rng: &mut R) -> Result<TablePhase, DeckError> {
        if self.phase != TablePhase::DealerTurn {
            return Ok(self.phase);
        }
        match self.dealer.decide_hand(&self.hands[Side::Opponent], &self.rules) {
            DealerAction::Hit => {
                self.hit(Side::Opponent, rng)?;
            }
            DealerAction::Stand => {
                let (outcome, _) = self.settle();
                self.phase = TablePhase::RoundOver(outcome);
            }
        }
        Ok(self.phase)
    }

    /// Compare the hands: a bust loses, otherwise the higher score wins and
    /// equal scores tie. Also reports who busted.
    #[must_use]
    pub fn settle(&self) -> (RoundOutcome, Option<Side>) {
        if self.hands[Side::Human].is_bust(&self.rules) {
            return (RoundOutcome::OpponentWin, Some(Side::Human));
        }
        if self.hands[Side::Opponent].is_bust(&self.rules) {
            return (RoundOutcome::HumanWin, Some(Side::Opponent));
        }
        let human = self.score(Side::Human);
        let dealer = self.score(Side::Opponent);
        let outcome = match human.cmp(&dealer) {
            std::cmp::Ordering::Greater => RoundOutcome::HumanWin,
            std::cmp::Ordering::Less => RoundOutcome::OpponentWin,
            std::cmp::Ordering::Equal => RoundOutcome::Tie,
        };
        (outcome, None)
    }

    fn table_event(&self, reveal_dealer: bool) -> RenderEvent {
        RenderEvent::Table {
            human: self.hands[Side::Human].clone(),
            dealer: self.hands[Side::Opponent].clone(),
            reveal_dealer,
        }
    }
}

impl RoundEngine for TwentyOne {
    fn title(&self) -> &'static str {
        "Twenty-One"
    }

    fn identities(&self) -> &SideMap<PlayerIdentity> {
        &self.identities
    }

    fn reset(&mut self) {
        self.deck.reinitialize();
        for side in Side::ALL {
            self.hands[side].clear();
        }
        self.phase = TablePhase::HumanTurn;
    }

    fn play_round<I, D, R>(
        &mut self,
        input: &mut I,
        display: &mut D,
        rng: &mut R,
    ) -> Result<RoundOutcome, EngineError>
    where
        I: InputProvider,
        D: DisplaySink,
        R: RandomSource,
    {
        self.deal(rng)?;
        display.render(&self.table_event(false));

        loop {
            match self.phase {
                TablePhase::HumanTurn => {
                    let choice = io::ask_turn_choice(input, display)?;
                    if self.human_choice(choice, rng)? == TablePhase::HumanTurn {
                        display.render(&self.table_event(false));
                    }
                }
                TablePhase::DealerTurn => {
                    self.dealer_step(rng)?;
                }
                TablePhase::RoundOver(outcome) => {
                    let (_, bust) = self.settle();
                    info!(
                        ?outcome,
                        human = self.score(Side::Human),
                        dealer = self.score(Side::Opponent),
                        "twenty-one round over"
                    );
                    display.render(&self.table_event(true));
                    display.render(&RenderEvent::RoundOver(RoundReport {
                        outcome,
                        bust,
                        points: Some(SideMap::new(|side| self.score(side))),
                    }));
                    return Ok(outcome);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ScriptedRandom;
    use crate::io::{RecordingDisplay, ScriptedInput};

    // Rank indices into `Rank::ALL`.
    const TWO: usize = 0;
    const FIVE: usize = 3;
    const SIX: usize = 4;
    const NINE: usize = 7;
    const TEN: usize = 8;
    const JACK: usize = 9;
    const QUEEN: usize = 10;

    /// Script that draws `ranks` in order, each from a different suit so no
    /// draw is rejected for up to four copies of a rank.
    fn draws(ranks: &[usize]) -> ScriptedRandom {
        let picks: Vec<usize> = ranks
            .iter()
            .enumerate()
            .flat_map(|(i, &rank)| [i % 4, rank])
            .collect();
        ScriptedRandom::new(picks)
    }

    #[test]
    fn test_deal_gives_two_each() {
        let mut table = TwentyOne::default();
        let mut rng = draws(&[TEN, SIX, NINE, JACK]);
        table.deal(&mut rng).unwrap();

        assert_eq!(table.hand(Side::Opponent).cards(), &[Rank::Ten, Rank::Six]);
        assert_eq!(table.hand(Side::Human).cards(), &[Rank::Nine, Rank::Jack]);
        assert_eq!(table.deck().remaining(), 44);
        assert_eq!(table.phase(), TablePhase::HumanTurn);
    }

    #[test]
    fn test_human_bust_skips_dealer() {
        let mut table = TwentyOne::default();
        let mut rng = draws(&[TEN, SIX, TEN, FIVE, QUEEN]);
        let mut input = ScriptedInput::new(["hit"]);
        let mut display = RecordingDisplay::default();

        let outcome = table.play_round(&mut input, &mut display, &mut rng).unwrap();

        assert_eq!(outcome, RoundOutcome::OpponentWin);
        assert_eq!(table.hand(Side::Opponent).len(), 2);
        let report = display.round_reports().next().unwrap();
        assert_eq!(report.bust, Some(Side::Human));
        assert_eq!(report.points.as_ref().map(|p| p[Side::Human]), Some(25));
    }

    #[test]
    fn test_dealer_draws_to_threshold_and_busts() {
        let mut table = TwentyOne::default();
        // Dealer 10+6 = 16, human 10+9 = 19; dealer hits a Queen.
        let mut rng = draws(&[TEN, SIX, TEN, NINE, QUEEN]);
        let mut input = ScriptedInput::new(["stay"]);
        let mut display = RecordingDisplay::default();

        let outcome = table.play_round(&mut input, &mut display, &mut rng).unwrap();

        assert_eq!(outcome, RoundOutcome::HumanWin);
        assert_eq!(table.score(Side::Opponent), 26);
        assert_eq!(table.settle(), (RoundOutcome::HumanWin, Some(Side::Opponent)));
    }

    #[test]
    fn test_higher_score_wins() {
        let mut table = TwentyOne::default();
        // Dealer 10+9 = 19 stands; human 10+6 hits a 2 for 18 and stays.
        let mut rng = draws(&[TEN, NINE, TEN, SIX, TWO]);
        let mut input = ScriptedInput::new(["h", "s"]);
        let mut display = RecordingDisplay::default();

        let outcome = table.play_round(&mut input, &mut display, &mut rng).unwrap();

        assert_eq!(outcome, RoundOutcome::OpponentWin);
        assert_eq!(table.score(Side::Human), 18);
        assert_eq!(table.score(Side::Opponent), 19);
    }

    #[test]
    fn test_equal_scores_tie() {
        let mut table = TwentyOne::default();
        let mut rng = draws(&[TEN, NINE, JACK, NINE]);
        let mut input = ScriptedInput::new(["stay"]);
        let mut display = RecordingDisplay::default();

        let outcome = table.play_round(&mut input, &mut display, &mut rng).unwrap();

        assert_eq!(outcome, RoundOutcome::Tie);
        assert_eq!(display.round_reports().next().unwrap().bust, None);
    }

    #[test]
    fn test_dealer_hole_card_hidden_until_round_over() {
        let mut table = TwentyOne::default();
        let mut rng = draws(&[TEN, NINE, JACK, NINE]);
        let mut input = ScriptedInput::new(["stay"]);
        let mut display = RecordingDisplay::default();

        table.play_round(&mut input, &mut display, &mut rng).unwrap();

        let reveals: Vec<bool> = display
            .events
            .iter()
            .filter_map(|e| match e {
                RenderEvent::Table { reveal_dealer, .. } => Some(*reveal_dealer),
                _ => None,
            })
            .collect();
        assert_eq!(reveals, vec![false, true]);
    }

    #[test]
    fn test_choices_ignored_out_of_phase() {
        let mut table = TwentyOne::default();
        let mut rng = draws(&[TEN, NINE, JACK, NINE]);
        table.deal(&mut rng).unwrap();

        assert_eq!(table.dealer_step(&mut rng), Ok(TablePhase::HumanTurn));
        table.human_choice(TurnChoice::Stay, &mut rng).unwrap();
        assert_eq!(table.human_choice(TurnChoice::Hit, &mut rng), Ok(TablePhase::DealerTurn));
        assert_eq!(table.hand(Side::Human).len(), 2);
    }
}
