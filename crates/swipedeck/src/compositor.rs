//! Stack composition
//!
//! Decides, for every card relative to the cursor, whether it is hidden
//! (already swiped), active (live style, receives gestures) or queued
//! (static, stacked beneath). Producing the actual visual is delegated to
//! a caller-supplied [`CardRenderer`].
//!
//! Layers are emitted in sequence order and carry an explicit z-order of
//! `-index`, so the active card is always on top and later cards sit
//! progressively further beneath.

use std::fmt::Debug;
use std::hash::Hash;
use swipedeck_core::{Angle, Vec2};

/// Stable identity of a card, used to key its visual across renders
pub trait CardKey {
    type Key: Clone + Eq + Hash + Debug;

    fn key(&self) -> Self::Key;
}

macro_rules! impl_card_key_for_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl CardKey for $ty {
                type Key = $ty;

                fn key(&self) -> Self::Key {
                    self.clone()
                }
            }
        )*
    };
}

impl_card_key_for_value!(u32, u64, usize, i32, i64, String, &'static str);

/// Produces visuals for cards and for the exhausted deck
pub trait CardRenderer<T> {
    type Visual;

    fn render_card(&mut self, card: &T) -> Self::Visual;

    fn render_no_more_cards(&mut self) -> Self::Visual;
}

/// [`CardRenderer`] built from a pair of closures
pub struct FnRenderer<C, E> {
    card: C,
    exhausted: E,
}

/// Build a renderer from a per-card closure and an exhausted-view closure
pub fn renderer<C, E>(card: C, exhausted: E) -> FnRenderer<C, E> {
    FnRenderer { card, exhausted }
}

impl<T, V, C, E> CardRenderer<T> for FnRenderer<C, E>
where
    C: FnMut(&T) -> V,
    E: FnMut() -> V,
{
    type Visual = V;

    fn render_card(&mut self, card: &T) -> V {
        (self.card)(card)
    }

    fn render_no_more_cards(&mut self) -> V {
        (self.exhausted)()
    }
}

/// Live style of the active card
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CardStyle {
    /// Offset from the resting position (left/top)
    pub offset: Vec2,
    pub rotation: Angle,
}

/// How a composed card participates in the stack
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CardRole {
    /// Top card: animated style, gesture handlers attached
    Active { style: CardStyle },
    /// Waiting beneath the active card: static, no gestures
    Queued,
}

impl CardRole {
    pub fn gesture_attached(&self) -> bool {
        matches!(self, CardRole::Active { .. })
    }
}

/// One composed card
#[derive(Clone, Debug, PartialEq)]
pub struct CardLayer<K, V> {
    pub key: K,
    pub index: usize,
    pub z_index: i32,
    pub role: CardRole,
    pub visual: V,
}

/// Result of a render pass
#[derive(Clone, Debug, PartialEq)]
pub enum Composition<K, V> {
    /// Remaining cards, in sequence order starting at the cursor
    Stack(Vec<CardLayer<K, V>>),
    /// Every card has been swiped
    Exhausted(V),
}

impl<K, V> Composition<K, V> {
    pub fn is_exhausted(&self) -> bool {
        matches!(self, Composition::Exhausted(_))
    }

    /// Layers in sequence order (empty when exhausted)
    pub fn layers(&self) -> &[CardLayer<K, V>] {
        match self {
            Composition::Stack(layers) => layers,
            Composition::Exhausted(_) => &[],
        }
    }

    /// Layers back-to-front: paint in this order and the active card
    /// ends up on top
    pub fn paint_order(&self) -> Vec<&CardLayer<K, V>> {
        let mut layers: Vec<_> = self.layers().iter().collect();
        layers.sort_by_key(|layer| layer.z_index);
        layers
    }

    pub fn active(&self) -> Option<&CardLayer<K, V>> {
        self.layers()
            .iter()
            .find(|layer| layer.role.gesture_attached())
    }

    /// Whether any layer has the gesture tracker attached
    pub fn gesture_attached(&self) -> bool {
        self.active().is_some()
    }
}

/// Compose the stack for `cards` with the cursor at `cursor`
pub fn compose_stack<T, R>(
    cards: &[T],
    cursor: usize,
    active_style: CardStyle,
    renderer: &mut R,
) -> Composition<T::Key, R::Visual>
where
    T: CardKey,
    R: CardRenderer<T>,
{
    if cursor >= cards.len() {
        return Composition::Exhausted(renderer.render_no_more_cards());
    }

    let layers = cards
        .iter()
        .enumerate()
        .skip(cursor)
        .map(|(index, card)| {
            let role = if index == cursor {
                CardRole::Active {
                    style: active_style,
                }
            } else {
                CardRole::Queued
            };
            CardLayer {
                key: card.key(),
                index,
                z_index: z_index_for(index),
                role,
                visual: renderer.render_card(card),
            }
        })
        .collect();

    Composition::Stack(layers)
}

fn z_index_for(index: usize) -> i32 {
    i32::try_from(index).map_or(i32::MIN, |i| -i)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn labels() -> FnRenderer<impl FnMut(&&'static str) -> String, impl FnMut() -> String> {
        renderer(|card: &&'static str| format!("card:{card}"), || "empty".to_string())
    }

    #[test]
    fn test_cards_before_cursor_are_hidden() {
        let cards = ["a", "b", "c", "d"];
        let composition = compose_stack(&cards, 2, CardStyle::default(), &mut labels());

        let keys: Vec<_> = composition.layers().iter().map(|l| l.key).collect();
        assert_eq!(keys, vec!["c", "d"]);
    }

    #[test]
    fn test_active_card_is_on_top() {
        let cards = ["a", "b", "c"];
        let style = CardStyle {
            offset: Vec2::new(30.0, 0.0),
            rotation: Angle::degrees(4.8),
        };
        let composition = compose_stack(&cards, 0, style, &mut labels());

        let active = composition.active().unwrap();
        assert_eq!(active.key, "a");
        assert_eq!(active.role, CardRole::Active { style });
        assert_eq!(active.visual, "card:a");

        let z: Vec<_> = composition.layers().iter().map(|l| l.z_index).collect();
        assert_eq!(z, vec![0, -1, -2]);

        let queued_attached = composition.layers()[1..]
            .iter()
            .any(|l| l.role.gesture_attached());
        assert!(!queued_attached);
    }

    #[test]
    fn test_paint_order_is_back_to_front() {
        let cards = ["a", "b", "c"];
        let composition = compose_stack(&cards, 1, CardStyle::default(), &mut labels());

        let painted: Vec<_> = composition.paint_order().iter().map(|l| l.key).collect();
        assert_eq!(painted, vec!["c", "b"]);
    }

    #[test]
    fn test_exhausted_uses_no_more_cards_view() {
        let cards: [&'static str; 0] = [];
        let composition = compose_stack(&cards, 0, CardStyle::default(), &mut labels());

        assert_eq!(composition, Composition::Exhausted("empty".to_string()));
        assert!(!composition.gesture_attached());
        assert!(composition.layers().is_empty());
    }

    #[test]
    fn test_renders_each_visible_card_once() {
        let cards = [1u32, 2, 3];
        let mut calls = Vec::new();
        let mut renderer = renderer(
            |card: &u32| {
                calls.push(*card);
                *card * 10
            },
            || 0,
        );
        let composition = compose_stack(&cards, 1, CardStyle::default(), &mut renderer);
        drop(renderer);

        assert_eq!(calls, vec![2, 3]);
        let visuals: Vec<_> = composition.layers().iter().map(|l| l.visual).collect();
        assert_eq!(visuals, vec![20, 30]);
    }
}
