//! The player's three card piles and the transitions between them.
//!
//! A card lives in exactly one of deck, hand or discard. Every operation
//! here moves cards between piles; none creates or destroys them, so the
//! total across the three is fixed for a combat.
//!
//! The deck's top is the back of the vector: drawing pops from the back.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::ids::CardId;
use crate::core::rng::GameRng;

/// Pile identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PileId {
    Deck,
    Hand,
    Discard,
}

/// A successful draw.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Drawn {
    /// The card now in hand.
    pub card: Card,
    /// The discard pile was shuffled into the deck first.
    pub reshuffled: bool,
}

/// Deck, hand and discard.
///
/// Backed by `im::Vector` so cloning a combat state for a snapshot is O(1).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piles {
    deck: Vector<Card>,
    hand: Vector<Card>,
    discard: Vector<Card>,
}

impl Piles {
    /// Create piles with every card in the deck, in the given order.
    #[must_use]
    pub fn new(deck: impl IntoIterator<Item = Card>) -> Self {
        Self {
            deck: deck.into_iter().collect(),
            hand: Vector::new(),
            discard: Vector::new(),
        }
    }

    /// Cards in a pile, in order.
    #[must_use]
    pub fn pile(&self, pile: PileId) -> &Vector<Card> {
        match pile {
            PileId::Deck => &self.deck,
            PileId::Hand => &self.hand,
            PileId::Discard => &self.discard,
        }
    }

    /// The draw pile (top is the last element).
    #[must_use]
    pub fn deck(&self) -> &Vector<Card> {
        &self.deck
    }

    /// The hand.
    #[must_use]
    pub fn hand(&self) -> &Vector<Card> {
        &self.hand
    }

    /// The discard pile.
    #[must_use]
    pub fn discard(&self) -> &Vector<Card> {
        &self.discard
    }

    /// Size of a pile.
    #[must_use]
    pub fn len(&self, pile: PileId) -> usize {
        self.pile(pile).len()
    }

    /// Cards across all three piles.
    #[must_use]
    pub fn total(&self) -> usize {
        self.deck.len() + self.hand.len() + self.discard.len()
    }

    /// True when no card can be drawn, even after a reshuffle.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.deck.is_empty() && self.discard.is_empty()
    }

    /// Shuffle the draw pile in place.
    pub fn shuffle_deck(&mut self, rng: &mut GameRng) {
        let mut cards: Vec<Card> = self.deck.iter().cloned().collect();
        rng.shuffle(&mut cards);
        self.deck = cards.into_iter().collect();
    }

    /// Move the whole discard pile onto the deck and shuffle the deck.
    pub fn reshuffle_discard(&mut self, rng: &mut GameRng) {
        let discard = std::mem::take(&mut self.discard);
        self.deck.append(discard);
        self.shuffle_deck(rng);
    }

    /// Draw the top card into the hand.
    ///
    /// An empty deck is refilled from the discard pile first. Returns
    /// `None` when both are empty.
    pub fn draw(&mut self, rng: &mut GameRng) -> Option<Drawn> {
        let mut reshuffled = false;
        if self.deck.is_empty() {
            if self.discard.is_empty() {
                return None;
            }
            self.reshuffle_discard(rng);
            reshuffled = true;
        }

        let card = self.deck.pop_back()?;
        self.hand.push_back(card.clone());
        Some(Drawn { card, reshuffled })
    }

    /// Index of the first copy of `id` in hand.
    #[must_use]
    pub fn find_in_hand(&self, id: &CardId) -> Option<usize> {
        self.hand.iter().position(|c| &c.id == id)
    }

    /// Whether a copy of `id` is in hand.
    #[must_use]
    pub fn in_hand(&self, id: &CardId) -> bool {
        self.find_in_hand(id).is_some()
    }

    /// Remove the first copy of `id` from the hand.
    ///
    /// The caller must put the card back into a pile; see
    /// [`Piles::push_discard`].
    pub fn take_from_hand(&mut self, id: &CardId) -> Option<Card> {
        let idx = self.find_in_hand(id)?;
        Some(self.hand.remove(idx))
    }

    /// Put a card on top of the discard pile.
    pub fn push_discard(&mut self, card: Card) {
        self.discard.push_back(card);
    }

    /// Move the first copy of `id` from hand to discard.
    pub fn hand_to_discard(&mut self, id: &CardId) -> Option<Card> {
        let card = self.take_from_hand(id)?;
        self.push_discard(card.clone());
        Some(card)
    }
}
