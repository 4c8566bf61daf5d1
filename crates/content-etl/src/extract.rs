//! Heuristic field extraction shared by the record formatters.

use std::collections::HashSet;

/// Euro-sign bands for a per-unit price.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct PriceBands {
    /// Prices below this are `€`.
    pub(crate) budget_below: f64,
    /// Prices below this (and not budget) are `€€`; everything else `€€€`.
    pub(crate) moderate_below: f64,
}

/// Bands for a night in double occupancy.
pub(crate) const HOTEL_PRICE_BANDS: PriceBands = PriceBands {
    budget_below: 80.0,
    moderate_below: 150.0,
};

/// Trim and collapse internal whitespace; `None` when nothing is left.
pub(crate) fn clean_text(raw: Option<&str>) -> Option<String> {
    let cleaned = raw?.split_whitespace().collect::<Vec<_>>().join(" ");
    (!cleaned.is_empty()).then_some(cleaned)
}

/// First decimal number in `text`; accepts `,` or `.` as decimal mark.
pub(crate) fn first_number(text: &str) -> Option<f64> {
    let mut digits = String::new();
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c.is_ascii_digit() {
            digits.push(c);
        } else if !digits.is_empty()
            && (c == ',' || c == '.')
            && !digits.contains('.')
            && chars.peek().is_some_and(char::is_ascii_digit)
        {
            digits.push('.');
        } else if !digits.is_empty() {
            break;
        }
    }
    digits.parse().ok()
}

/// Rating rounded to one decimal; values outside `0..=5` are dropped.
#[expect(clippy::float_arithmetic, reason = "ratings are rounded to one decimal")]
pub(crate) fn rating(value: Option<f64>) -> Option<f64> {
    value
        .filter(|rating| (0.0..=5.0).contains(rating))
        .map(|rating| (rating * 10.0).round() / 10.0)
}

/// Price range as euro signs.
///
/// Text made only of one to three `€` is kept; otherwise the amount is
/// placed in `bands`.
pub(crate) fn price_range(text: Option<&str>, amount: Option<f64>, bands: PriceBands) -> Option<String> {
    if let Some(signs) = text.map(str::trim)
        && (1..=3).contains(&signs.chars().count())
        && signs.chars().all(|c| c == '€')
    {
        return Some(signs.to_owned());
    }
    let price = amount.filter(|value| *value > 0.0)?;
    let band = if price < bands.budget_below {
        "€"
    } else if price < bands.moderate_below {
        "€€"
    } else {
        "€€€"
    };
    Some(band.to_owned())
}

/// International notation grouped as written, e.g. `+49 4682 1234`.
///
/// National numbers (leading `0`) are assumed to be German.
pub(crate) fn phone(raw: Option<&str>) -> Option<String> {
    let number = raw?;
    let groups: Vec<&str> = number
        .split(|c: char| !c.is_ascii_digit())
        .filter(|group| !group.is_empty())
        .collect();
    let (first, tail) = groups.split_first()?;
    let mut rest = tail;
    let mut parts: Vec<String> = Vec::with_capacity(groups.len().saturating_add(1));
    if number.trim_start().starts_with('+') {
        parts.push(format!("+{first}"));
        // `+49 (0)4682` carries the trunk zero in brackets.
        if let Some((&"0", after_trunk)) = rest.split_first() {
            rest = after_trunk;
        }
    } else if let Some(country) = first.strip_prefix("00") {
        parts.push(format!("+{country}"));
    } else if let Some(area) = first.strip_prefix('0') {
        parts.push("+49".to_owned());
        parts.push(area.to_owned());
    } else {
        parts.push((*first).to_owned());
    }
    parts.extend(rest.iter().map(|group| (*group).to_owned()));
    Some(parts.join(" "))
}

/// Web address with an `https://` scheme when none is given.
pub(crate) fn website(raw: Option<&str>) -> Option<String> {
    let url = clean_text(raw)?;
    if url.contains("://") {
        Some(url)
    } else {
        Some(format!("https://{url}"))
    }
}

/// URL-safe identifier: lowercase ASCII, German umlauts transliterated,
/// other runs of non-alphanumerics collapsed to `-`.
pub(crate) fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    for c in name.to_lowercase().chars() {
        match c {
            'ä' => slug.push_str("ae"),
            'ö' => slug.push_str("oe"),
            'ü' => slug.push_str("ue"),
            'ß' => slug.push_str("ss"),
            'é' | 'è' | 'ê' => slug.push('e'),
            'á' | 'à' | 'â' => slug.push('a'),
            c if c.is_ascii_alphanumeric() => slug.push(c),
            _ => {
                if !slug.is_empty() && !slug.ends_with('-') {
                    slug.push('-');
                }
            }
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

/// Hands out unique ids, suffixing repeats with the lowest free `-2`, `-3`, ...
///
/// Uniqueness is checked against every id already issued, so a name whose
/// slug already ends in a number cannot collide with a suffixed repeat.
#[derive(Debug, Default)]
pub(crate) struct IdAllocator {
    issued: HashSet<String>,
}

impl IdAllocator {
    pub(crate) fn allocate(&mut self, name: &str) -> String {
        let base = match slugify(name) {
            slug if slug.is_empty() => "eintrag".to_owned(),
            slug => slug,
        };
        let mut candidate = base.clone();
        let mut suffix: usize = 1;
        while self.issued.contains(&candidate) {
            suffix = suffix.saturating_add(1);
            candidate = format!("{base}-{suffix}");
        }
        self.issued.insert(candidate.clone());
        candidate
    }
}
