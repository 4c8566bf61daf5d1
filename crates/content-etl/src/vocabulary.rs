//! Keyword vocabularies and the classifier that maps free text onto them.
//!
//! A [`Vocabulary`] is an ordered list of terms, each a label plus the
//! lowercase keywords that indicate it. [`classify`] picks the first term
//! whose keywords occur in a text, falling back to the vocabulary's default
//! label. [`matching_labels`] collects every matching label, which suits
//! multi-valued tags such as features or cuisine.

use serde::Deserialize;

use crate::cli::RecordKind;
use crate::error::EtlError;

const HOTEL_VOCABULARY: &str = include_str!("../vocabularies/hotels.json");
const RESTAURANT_VOCABULARY: &str = include_str!("../vocabularies/restaurants.json");

/// Lowercase alphanumeric words of `text`.
fn words(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(str::to_owned)
        .collect()
}

/// A keyword phrase; `prefix` lets the last word match any word it starts.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Keyword {
    words: Vec<String>,
    prefix: bool,
}

impl Keyword {
    fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        let (body, prefix) = trimmed
            .strip_suffix('*')
            .map_or((trimmed, false), |body| (body, true));
        let phrase = words(body);
        (!phrase.is_empty()).then_some(Self {
            words: phrase,
            prefix,
        })
    }

    fn matches(&self, haystack: &[String]) -> bool {
        let last = self.words.len().saturating_sub(1);
        haystack.windows(self.words.len()).any(|window| {
            window
                .iter()
                .zip(&self.words)
                .enumerate()
                .all(|(position, (word, keyword))| {
                    if self.prefix && position == last {
                        word.starts_with(keyword.as_str())
                    } else {
                        word == keyword
                    }
                })
        })
    }
}

/// One label and the keywords that select it.
///
/// Keywords match whole words, case-insensitively; multi-word keywords
/// match consecutive words. A trailing `*` turns the last word into a
/// prefix, so `fisch*` also matches `Fischbrötchen`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Term {
    label: String,
    keywords: Vec<Keyword>,
}

impl Term {
    /// Build a term from a label and its keywords.
    ///
    /// # Errors
    ///
    /// Returns [`EtlError::Vocabulary`] when the label is blank or no
    /// keyword contains a word.
    pub fn new<I, S>(label: &str, keywords: I) -> Result<Self, EtlError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let trimmed = label.trim();
        if trimmed.is_empty() {
            return Err(EtlError::vocabulary("term label must not be blank"));
        }
        let parsed: Vec<Keyword> = keywords
            .into_iter()
            .filter_map(|keyword| Keyword::parse(keyword.as_ref()))
            .collect();
        if parsed.is_empty() {
            return Err(EtlError::vocabulary(format!(
                "term '{trimmed}' needs at least one keyword"
            )));
        }
        Ok(Self {
            label: trimmed.to_owned(),
            keywords: parsed,
        })
    }

    /// Label emitted when the term matches.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    fn matches(&self, haystack: &[String]) -> bool {
        self.keywords.iter().any(|keyword| keyword.matches(haystack))
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TermDef {
    label: String,
    keywords: Vec<String>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct VocabularyDef {
    #[serde(default)]
    fallback: Option<String>,
    terms: Vec<TermDef>,
}

/// Ordered keyword table; earlier terms win in [`classify`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "VocabularyDef")]
pub struct Vocabulary {
    terms: Vec<Term>,
    fallback: Option<String>,
}

impl Vocabulary {
    /// Build a vocabulary from terms and an optional fallback label.
    #[must_use]
    pub fn new(terms: Vec<Term>, fallback: Option<&str>) -> Self {
        Self {
            terms,
            fallback: fallback
                .map(str::trim)
                .filter(|label| !label.is_empty())
                .map(str::to_owned),
        }
    }

    /// Terms in priority order.
    #[must_use]
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// Label used when no term matches.
    #[must_use]
    pub fn fallback(&self) -> Option<&str> {
        self.fallback.as_deref()
    }
}

impl TryFrom<VocabularyDef> for Vocabulary {
    type Error = EtlError;

    fn try_from(def: VocabularyDef) -> Result<Self, Self::Error> {
        let terms = def
            .terms
            .into_iter()
            .map(|term| Term::new(&term.label, term.keywords))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(terms, def.fallback.as_deref()))
    }
}

/// Label of the first term with a keyword in `text`, else the fallback.
///
/// See [`Term`] for how keywords match.
///
/// # Examples
///
/// ```
/// use content_etl::{Term, Vocabulary, classify};
///
/// let vocabulary = Vocabulary::new(
///     vec![
///         Term::new("Ferienwohnung", ["ferienwohnung*", "apartment*"]).expect("valid term"),
///         Term::new("Pension", ["pension", "gästehaus"]).expect("valid term"),
///     ],
///     Some("Hotel"),
/// );
///
/// assert_eq!(classify("Gästehaus Weiß", &vocabulary), Some("Pension"));
/// assert_eq!(classify("Apartments am Deich", &vocabulary), Some("Ferienwohnung"));
/// assert_eq!(classify("Hotel mit Halbpension", &vocabulary), Some("Hotel"));
/// ```
#[must_use]
pub fn classify<'v>(text: &str, vocabulary: &'v Vocabulary) -> Option<&'v str> {
    let haystack = words(text);
    vocabulary
        .terms
        .iter()
        .find(|term| term.matches(&haystack))
        .map(Term::label)
        .or_else(|| vocabulary.fallback())
}

/// Every distinct label with a keyword in `text`, in vocabulary order.
///
/// The fallback is never returned.
#[must_use]
pub fn matching_labels<'v>(text: &str, vocabulary: &'v Vocabulary) -> Vec<&'v str> {
    let haystack = words(text);
    let mut labels: Vec<&str> = Vec::new();
    for term in vocabulary.terms.iter().filter(|term| term.matches(&haystack)) {
        if !labels.contains(&term.label()) {
            labels.push(term.label());
        }
    }
    labels
}

/// The vocabularies used to format one record kind.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct VocabularySet {
    /// Category (`type`) labels; requires a fallback.
    pub categories: Vocabulary,
    /// Village names; requires a fallback.
    pub locations: Vocabulary,
    /// Amenity labels.
    pub features: Vocabulary,
    /// Cuisine labels, used for restaurants only.
    #[serde(default)]
    pub cuisine: Option<Vocabulary>,
}

impl VocabularySet {
    /// Parse a vocabulary set from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`EtlError::Vocabulary`] when the JSON is malformed, a term
    /// is invalid or the category or location table lacks a fallback.
    pub fn from_json(json: &str) -> Result<Self, EtlError> {
        let set: Self =
            serde_json::from_str(json).map_err(|err| EtlError::vocabulary(err.to_string()))?;
        for (name, vocabulary) in [("categories", &set.categories), ("locations", &set.locations)] {
            if vocabulary.fallback().is_none() {
                return Err(EtlError::vocabulary(format!("{name} needs a fallback label")));
            }
        }
        Ok(set)
    }

    /// Vocabulary set shipped with the crate for `kind`.
    ///
    /// # Errors
    ///
    /// Returns [`EtlError::Vocabulary`] if the embedded table is invalid.
    pub fn builtin(kind: RecordKind) -> Result<Self, EtlError> {
        match kind {
            RecordKind::Hotels => Self::from_json(HOTEL_VOCABULARY),
            RecordKind::Restaurants => Self::from_json(RESTAURANT_VOCABULARY),
        }
    }
}
