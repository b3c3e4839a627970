use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;

use super::patterns::{PatternGroup, FALLBACK_CAPTIONS, PATTERN_GROUPS};

pub const BASE_CONFIDENCE: f64 = 0.85;
pub const MATCH_BONUS: f64 = 0.10;
pub const MAX_CONFIDENCE: f64 = 0.98;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CaptionError {
    #[error("no candidate captions for {0}")]
    EmptyPool(&'static str),
}

/// Outcome of one selection. `group` is `None` when the fallback pool was used.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub caption: &'static str,
    pub confidence: f64,
    pub group: Option<&'static str>,
}

/// Selects a caption for `features` from the built-in tables.
pub fn select_caption<S, R>(features: &[S], rng: &mut R) -> Result<Selection, CaptionError>
where
    S: AsRef<str>,
    R: Rng + ?Sized,
{
    select_from(&PATTERN_GROUPS, &FALLBACK_CAPTIONS, features, rng)
}

/// First matching group wins; later groups are not consulted even if they
/// would also match.
pub fn select_from<S, R>(
    groups: &[PatternGroup],
    fallback: &[&'static str],
    features: &[S],
    rng: &mut R,
) -> Result<Selection, CaptionError>
where
    S: AsRef<str>,
    R: Rng + ?Sized,
{
    let matched = groups.iter().find(|group| group.matches(features));

    let (caption, bonus) = match matched {
        Some(group) => {
            let caption = group
                .captions
                .choose(rng)
                .ok_or(CaptionError::EmptyPool(group.name))?;
            (*caption, MATCH_BONUS)
        }
        None => {
            let caption = fallback
                .choose(rng)
                .ok_or(CaptionError::EmptyPool("fallback"))?;
            (*caption, 0.0)
        }
    };

    Ok(Selection {
        caption,
        confidence: (BASE_CONFIDENCE + bonus).min(MAX_CONFIDENCE),
        group: matched.map(|group| group.name),
    })
}
