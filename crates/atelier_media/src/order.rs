//! The single ordered list of media tokens.

use crate::{CanonicalOrder, EncodedRef, MediaItem, MediaRegistry, MediaToken};
use tracing::{debug, instrument};

/// Direction of a one-step move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards the front (index - 1)
    Backward,
    /// Towards the back (index + 1)
    Forward,
}

impl Direction {
    /// Interpret a signed step (`-1` / `+1`).
    pub fn from_step(step: i32) -> Option<Self> {
        match step {
            -1 => Some(Direction::Backward),
            1 => Some(Direction::Forward),
            _ => None,
        }
    }
}

/// Final media order as a list of tokens, independent of where each item is
/// stored.
///
/// Every operation is total: unknown tokens and boundary moves are no-ops.
/// The sequence may hold tokens whose items have since left the registry;
/// counting and encoding skip those.
///
/// # Examples
///
/// ```
/// use atelier_core::RemoteId;
/// use atelier_media::{Direction, MediaToken, OrderSequence};
///
/// let a = MediaToken::Remote(RemoteId(1));
/// let b = MediaToken::Remote(RemoteId(2));
///
/// let mut order = OrderSequence::default();
/// order.append([a, b, a]);
/// assert_eq!(order.tokens(), &[a, b]);
///
/// order.move_adjacent(&b, Direction::Backward);
/// assert_eq!(order.tokens(), &[b, a]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderSequence {
    tokens: Vec<MediaToken>,
}

impl OrderSequence {
    /// Tokens in display order, including dangling ones.
    pub fn tokens(&self) -> &[MediaToken] {
        &self.tokens
    }

    /// Raw length, including dangling tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether the sequence holds no tokens at all.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Whether the token is in the sequence.
    pub fn contains(&self, token: &MediaToken) -> bool {
        self.tokens.contains(token)
    }

    fn position(&self, token: &MediaToken) -> Option<usize> {
        self.tokens.iter().position(|t| t == token)
    }

    /// Append tokens at the end in input order, skipping any already present.
    ///
    /// Returns how many tokens were appended.
    pub fn append(&mut self, tokens: impl IntoIterator<Item = MediaToken>) -> usize {
        let before = self.tokens.len();
        for token in tokens {
            if self.contains(&token) {
                debug!(%token, "Rejecting duplicate token");
                continue;
            }
            self.tokens.push(token);
        }
        self.tokens.len() - before
    }

    /// Remove a token. Returns `false` if it was absent.
    pub fn remove(&mut self, token: &MediaToken) -> bool {
        match self.position(token) {
            Some(index) => {
                self.tokens.remove(index);
                true
            }
            None => false,
        }
    }

    /// Swap a token with its neighbour in `direction`.
    ///
    /// No-op for absent tokens, for the first token moving backward and for
    /// the last token moving forward.
    #[instrument(skip(self, token), fields(token = %token))]
    pub fn move_adjacent(&mut self, token: &MediaToken, direction: Direction) -> bool {
        let Some(index) = self.position(token) else {
            return false;
        };
        let neighbour = match direction {
            Direction::Backward => index.checked_sub(1),
            Direction::Forward => Some(index + 1).filter(|&n| n < self.tokens.len()),
        };
        match neighbour {
            Some(neighbour) => {
                self.tokens.swap(index, neighbour);
                debug!(from = index, to = neighbour, "Moved token");
                true
            }
            None => false,
        }
    }

    /// Move `source` to sit immediately before `target`, keeping the relative
    /// order of every other token.
    ///
    /// No-op if the tokens are equal or either is absent.
    #[instrument(skip(self, source, target), fields(source = %source, target = %target))]
    pub fn move_before(&mut self, source: &MediaToken, target: &MediaToken) -> bool {
        if source == target {
            return false;
        }
        let (Some(from), Some(target_index)) = (self.position(source), self.position(target))
        else {
            return false;
        };
        // Removing the source shifts a later target down by one.
        let to = if from < target_index {
            target_index - 1
        } else {
            target_index
        };
        let moved = self.tokens.remove(from);
        self.tokens.insert(to, moved);
        debug!(from, to, "Moved token before target");
        from != to
    }

    /// Tokens that are live in the registry, in order.
    pub fn live<'a>(
        &'a self,
        registry: &'a MediaRegistry,
    ) -> impl Iterator<Item = MediaToken> + 'a {
        self.tokens
            .iter()
            .copied()
            .filter(move |token| registry.is_live(token))
    }

    /// Number of tokens backed by a live registry item.
    ///
    /// This, not [`OrderSequence::len`], decides submit eligibility.
    pub fn effective_count(&self, registry: &MediaRegistry) -> usize {
        self.live(registry).count()
    }

    /// The cover slot: the first live token.
    pub fn cover(&self, registry: &MediaRegistry) -> Option<MediaToken> {
        self.live(registry).next()
    }

    /// Derive the backend encoding of the current order.
    ///
    /// Remote items are referenced by id. Local items are referenced by their
    /// zero-based position among the local files in final order, which is
    /// also the order of [`CanonicalOrder::local_files`]. Batch indices are
    /// recomputed on every call, so they are always contiguous. Dangling
    /// tokens are skipped.
    #[instrument(skip_all, fields(tokens = self.tokens.len()))]
    pub fn to_canonical_encoding(&self, registry: &MediaRegistry) -> CanonicalOrder {
        let mut refs = Vec::with_capacity(self.tokens.len());
        let mut local_files = Vec::new();

        for token in &self.tokens {
            match registry.get(token) {
                Some(MediaItem::Remote(remote)) => {
                    refs.push(EncodedRef::Remote { id: *remote.id() });
                }
                Some(MediaItem::Local(local)) => {
                    refs.push(EncodedRef::Local {
                        batch_index: local_files.len(),
                    });
                    local_files.push(local.file().clone());
                }
                None => debug!(%token, "Skipping dangling token"),
            }
        }

        debug!(
            refs = refs.len(),
            local_files = local_files.len(),
            "Encoded media order"
        );
        CanonicalOrder::new(refs, local_files)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NoPreviews;
    use atelier_core::{LocalFile, MimeClass, RemoteId, StoredMedia};
    use std::sync::Arc;

    fn tokens(ids: &[u64]) -> Vec<MediaToken> {
        ids.iter().map(|&id| MediaToken::Remote(RemoteId(id))).collect()
    }

    fn sequence(ids: &[u64]) -> OrderSequence {
        let mut order = OrderSequence::default();
        order.append(tokens(ids));
        order
    }

    #[test]
    fn test_append_rejects_duplicates() {
        let mut order = sequence(&[1, 2]);
        assert_eq!(order.append(tokens(&[2, 3, 3])), 1);
        assert_eq!(order.tokens(), tokens(&[1, 2, 3]).as_slice());
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut order = sequence(&[1, 2]);
        assert!(!order.remove(&MediaToken::Remote(RemoteId(9))));
        assert!(order.remove(&MediaToken::Remote(RemoteId(1))));
        assert_eq!(order.tokens(), tokens(&[2]).as_slice());
    }

    #[test]
    fn test_move_adjacent_boundaries_are_noops() {
        let mut order = sequence(&[1, 2, 3]);
        let first = MediaToken::Remote(RemoteId(1));
        let last = MediaToken::Remote(RemoteId(3));

        assert!(!order.move_adjacent(&first, Direction::Backward));
        assert!(!order.move_adjacent(&last, Direction::Forward));
        assert_eq!(order.tokens(), tokens(&[1, 2, 3]).as_slice());
    }

    #[test]
    fn test_move_adjacent_round_trip_restores_order() {
        let mut order = sequence(&[1, 2, 3]);
        let middle = MediaToken::Remote(RemoteId(2));

        assert!(order.move_adjacent(&middle, Direction::Forward));
        assert_eq!(order.tokens(), tokens(&[1, 3, 2]).as_slice());
        assert!(order.move_adjacent(&middle, Direction::Backward));
        assert_eq!(order.tokens(), tokens(&[1, 2, 3]).as_slice());
    }

    #[test]
    fn test_move_before_forward_and_backward() {
        let mut order = sequence(&[1, 2, 3, 4]);
        let one = MediaToken::Remote(RemoteId(1));
        let four = MediaToken::Remote(RemoteId(4));
        let two = MediaToken::Remote(RemoteId(2));

        assert!(order.move_before(&one, &four));
        assert_eq!(order.tokens(), tokens(&[2, 3, 1, 4]).as_slice());

        assert!(order.move_before(&four, &two));
        assert_eq!(order.tokens(), tokens(&[4, 2, 3, 1]).as_slice());
    }

    #[test]
    fn test_move_before_noops() {
        let mut order = sequence(&[1, 2, 3]);
        let one = MediaToken::Remote(RemoteId(1));
        let two = MediaToken::Remote(RemoteId(2));
        let missing = MediaToken::Remote(RemoteId(9));

        assert!(!order.move_before(&one, &one));
        assert!(!order.move_before(&missing, &one));
        assert!(!order.move_before(&one, &missing));
        // Already directly in front of the target.
        assert!(!order.move_before(&one, &two));
        assert_eq!(order.tokens(), tokens(&[1, 2, 3]).as_slice());
    }

    fn registry() -> MediaRegistry {
        MediaRegistry::new(Arc::new(NoPreviews))
    }

    #[test]
    fn test_dangling_tokens_are_not_counted_or_encoded() {
        let mut registry = registry();
        let mut order = OrderSequence::default();
        let first = registry
            .seed_remote(&StoredMedia::new(1u64, MimeClass::Image, false))
            .unwrap();
        let second = registry
            .seed_remote(&StoredMedia::new(2u64, MimeClass::Video, true))
            .unwrap();
        let local = registry
            .insert_local(LocalFile::new("a.png", "image/png", 10))
            .unwrap();
        order.append([local, first, second]);

        assert!(registry.take_remote(&first));
        assert!(registry.take_local(&local));

        assert_eq!(order.len(), 3);
        assert_eq!(order.effective_count(&registry), 1);
        assert_eq!(order.cover(&registry), Some(second));

        let encoded = order.to_canonical_encoding(&registry);
        assert_eq!(encoded.refs(), &vec![EncodedRef::Remote { id: RemoteId(2) }]);
        assert!(encoded.local_files().is_empty());
        assert_eq!(encoded.wire(), "e:2");
    }

    #[test]
    fn test_encoding_stays_consistent_across_mixed_edits() {
        let mut registry = registry();
        let mut order = OrderSequence::default();
        for id in 1..=4u64 {
            let token = registry
                .seed_remote(&StoredMedia::new(id, MimeClass::Image, false))
                .unwrap();
            order.append([token]);
        }

        // Deterministic LCG stream.
        let mut state: u64 = 0x5eed;
        let mut next = move |bound: usize| {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            ((state >> 33) as usize) % bound.max(1)
        };

        for step in 0..200 {
            let held = order.tokens().to_vec();
            match next(6) {
                0 | 1 => {
                    let file = LocalFile::new(format!("f{step}.png"), "image/png", step as u64);
                    if let Some(token) = registry.insert_local(file) {
                        order.append([token]);
                    }
                }
                2 if !held.is_empty() => {
                    let token = held[next(held.len())];
                    // Leave the token behind in the sequence half the time.
                    let keep_in_order = next(2) == 0;
                    if token.is_remote() {
                        registry.take_remote(&token);
                    } else {
                        registry.take_local(&token);
                    }
                    if !keep_in_order {
                        order.remove(&token);
                    }
                }
                3 if !held.is_empty() => {
                    let token = held[next(held.len())];
                    let direction = if next(2) == 0 {
                        Direction::Backward
                    } else {
                        Direction::Forward
                    };
                    order.move_adjacent(&token, direction);
                }
                4 if !held.is_empty() => {
                    let source = held[next(held.len())];
                    let target = held[next(held.len())];
                    order.move_before(&source, &target);
                }
                _ => {}
            }

            let encoded = order.to_canonical_encoding(&registry);
            assert_eq!(encoded.refs().len(), order.effective_count(&registry));

            let live: Vec<MediaToken> = order.live(&registry).collect();
            let mut batch = 0;
            for (token, encoded_ref) in live.iter().zip(encoded.refs()) {
                match (registry.get(token), encoded_ref) {
                    (Some(MediaItem::Remote(remote)), EncodedRef::Remote { id }) => {
                        assert_eq!(remote.id(), id, "step {step}");
                    }
                    (Some(MediaItem::Local(local)), EncodedRef::Local { batch_index }) => {
                        assert_eq!(*batch_index, batch, "step {step}");
                        assert_eq!(&encoded.local_files()[batch], local.file());
                        batch += 1;
                    }
                    other => panic!("step {step}: mismatched entry {other:?}"),
                }
            }
            assert_eq!(batch, encoded.local_files().len(), "step {step}");
        }
    }

    #[test]
    fn test_direction_from_step() {
        assert_eq!(Direction::from_step(-1), Some(Direction::Backward));
        assert_eq!(Direction::from_step(1), Some(Direction::Forward));
        assert_eq!(Direction::from_step(0), None);
        assert_eq!(Direction::from_step(2), None);
    }
}
