//! Ranked lexical matching on emotion tags.
//!
//! A record matches when its cleaned tag equals the cleaned query, or when
//! one contains the other under the length guards below. Matches are scored
//! by net sentiment and the best [`TOP_K`] are kept in a fixed array with
//! shift-insert. The result is drawn uniformly from the filled slots, so
//! repeated identical queries are not deterministic.

use rand::Rng;
use solace_core::QuoteRecord;
use tracing::debug;

use crate::errors::{MatchError, MatchMode, Result};
use crate::vocabulary::clean_token;

/// Number of top-scoring matches retained for the random pick.
pub const TOP_K: usize = 3;

/// A containing token must be longer than this for a substring match.
pub const SUBSTRING_GUARD_LEN: usize = 3;

/// A query contained in a longer tag must be at least this long, so `sa`
/// does not match `sadness`.
pub const MIN_FRAGMENT_LEN: usize = 3;

/// Whether a cleaned record tag matches a cleaned query.
///
/// - equal tokens always match
/// - the tag may sit inside a query longer than [`SUBSTRING_GUARD_LEN`]
/// - the query may sit inside a tag longer than [`SUBSTRING_GUARD_LEN`],
///   provided the query has at least [`MIN_FRAGMENT_LEN`] characters
pub fn emotion_matches(query: &str, tag: &str) -> bool {
    if query.is_empty() || tag.is_empty() {
        return false;
    }
    if query == tag {
        return true;
    }
    let query_len = query.chars().count();
    let tag_len = tag.chars().count();

    let tag_in_query = query_len > SUBSTRING_GUARD_LEN && query.contains(tag);
    let query_in_tag =
        tag_len > SUBSTRING_GUARD_LEN && query_len >= MIN_FRAGMENT_LEN && tag.contains(query);

    tag_in_query || query_in_tag
}

/// A matching record with its net sentiment score.
#[derive(Clone, Copy, Debug)]
pub struct Ranked<'a> {
    /// The matching record.
    pub record: &'a QuoteRecord,
    /// `positive - negative`.
    pub score: i64,
}

/// The best [`TOP_K`] matches seen so far, in descending score order.
///
/// Equal scores keep input order: promotion requires a strictly greater
/// score, so a later equal score lands behind the earlier one.
#[derive(Clone, Debug, Default)]
pub struct TopMatches<'a> {
    slots: [Option<Ranked<'a>>; TOP_K],
    tagged: usize,
    matched: usize,
}

impl<'a> TopMatches<'a> {
    /// Offer a candidate. It takes the first slot it beats (or the first
    /// empty slot); everything below shifts down and the last is evicted.
    pub fn offer(&mut self, record: &'a QuoteRecord, score: i64) {
        self.matched += 1;
        let Some(rank) = self
            .slots
            .iter()
            .position(|slot| slot.is_none_or(|held| score > held.score))
        else {
            return;
        };
        for i in (rank + 1..TOP_K).rev() {
            self.slots[i] = self.slots[i - 1];
        }
        self.slots[rank] = Some(Ranked { record, score });
    }

    /// Number of filled slots (0 to [`TOP_K`]).
    pub fn available(&self) -> usize {
        self.slots.iter().take_while(|s| s.is_some()).count()
    }

    /// Filled slots, best first.
    pub fn ranked(&self) -> impl Iterator<Item = &Ranked<'a>> {
        self.slots.iter().map_while(Option::as_ref)
    }

    /// Records that carried a non-blank emotion tag during the scan.
    pub fn tagged(&self) -> usize {
        self.tagged
    }

    /// Records that satisfied the match predicate during the scan.
    pub fn matched(&self) -> usize {
        self.matched
    }

    /// Pick one filled slot uniformly at random.
    pub fn pick<R: Rng>(&self, rng: &mut R) -> Option<Ranked<'a>> {
        let available = self.available();
        if available == 0 {
            return None;
        }
        let rank = rng.random_range(0..available);
        debug!(rank, available, "tie-break pick");
        self.slots[rank]
    }
}

/// Scan `records` once and keep the best [`TOP_K`] matches for `query`.
///
/// `query` is cleaned here; records without a non-blank tag are skipped.
pub fn rank<'a, I>(query: &str, records: I) -> TopMatches<'a>
where
    I: IntoIterator<Item = &'a QuoteRecord>,
{
    let query = clean_token(query);
    let mut top = TopMatches::default();
    for record in records {
        let Some(tag) = record.emotion_tag() else {
            continue;
        };
        top.tagged += 1;
        if emotion_matches(&query, &clean_token(tag)) {
            top.offer(record, record.net_score());
        }
    }
    top
}

/// Scan `records` for `emotion` and return the non-empty shortlist.
///
/// Errors:
/// - [`MatchError::EmptyOrBlankInput`] when `emotion` is blank
/// - [`MatchError::EmptyCorpus`] when no record carries an emotion tag
/// - [`MatchError::NoMatchingEmotion`] when tagged records exist but none match
pub fn shortlist<'a, I>(emotion: &str, records: I) -> Result<TopMatches<'a>>
where
    I: IntoIterator<Item = &'a QuoteRecord>,
{
    let query = clean_token(emotion);
    if query.is_empty() {
        return Err(MatchError::EmptyOrBlankInput);
    }

    let top = rank(&query, records);
    debug!(
        emotion = %query,
        tagged = top.tagged(),
        matched = top.matched(),
        "lexical scan complete"
    );
    if top.tagged() == 0 {
        return Err(MatchError::EmptyCorpus {
            mode: MatchMode::Emotion,
        });
    }
    if top.available() == 0 {
        return Err(MatchError::NoMatchingEmotion(query));
    }
    Ok(top)
}

/// Select one record among the top matches for `emotion`.
///
/// Errors as [`shortlist`].
pub fn find_top<'a, I, R>(emotion: &str, records: I, rng: &mut R) -> Result<&'a QuoteRecord>
where
    I: IntoIterator<Item = &'a QuoteRecord>,
    R: Rng,
{
    let top = shortlist(emotion, records)?;
    top.pick(rng)
        .map(|r| r.record)
        .ok_or_else(|| MatchError::NoMatchingEmotion(clean_token(emotion)))
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
