//! Scout argument parsing.
//!
//! Turns the free-form words after a scout command into catalog filters.
//! Recognized keywords (units, sub-units, years, attributes) are classified
//! directly; `kind=value` sets a filter explicitly; every other word is taken
//! as part of an idol name.

use std::collections::BTreeMap;

/// The catalog fields a scout can be filtered on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FilterKind {
    /// Main idol group.
    MainUnit,
    /// Sub-unit within a group.
    SubUnit,
    /// Idol name substring.
    Name,
    /// School year.
    Year,
    /// Card attribute.
    Attribute,
}

impl FilterKind {
    /// Parse an explicit filter key. Returns `None` for unknown keys.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "unit" | "main_unit" | "group" => Some(Self::MainUnit),
            "subunit" | "sub_unit" | "sub" => Some(Self::SubUnit),
            "name" | "idol" => Some(Self::Name),
            "year" => Some(Self::Year),
            "attribute" | "attr" => Some(Self::Attribute),
            _ => None,
        }
    }
}

impl std::fmt::Display for FilterKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MainUnit => write!(f, "main_unit"),
            Self::SubUnit => write!(f, "sub_unit"),
            Self::Name => write!(f, "name"),
            Self::Year => write!(f, "year"),
            Self::Attribute => write!(f, "attribute"),
        }
    }
}

/// Filter values for a scout, grouped by kind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoutFilters {
    values: BTreeMap<FilterKind, Vec<String>>,
}

impl ScoutFilters {
    /// No filters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a value to a filter kind. Duplicates are ignored.
    pub fn add(&mut self, kind: FilterKind, value: impl Into<String>) {
        let value = value.into();
        if value.is_empty() {
            return;
        }
        let entry = self.values.entry(kind).or_default();
        if !entry.contains(&value) {
            entry.push(value);
        }
    }

    /// Builder form of [`ScoutFilters::add`].
    pub fn with(mut self, kind: FilterKind, value: impl Into<String>) -> Self {
        self.add(kind, value);
        self
    }

    /// Values for one kind, empty if unset.
    pub fn get(&self, kind: FilterKind) -> &[String] {
        self.values.get(&kind).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether a name filter is present.
    pub fn has_name(&self) -> bool {
        !self.get(FilterKind::Name).is_empty()
    }

    /// Whether no filter has any value.
    pub fn is_empty(&self) -> bool {
        self.values.values().all(Vec::is_empty)
    }

    /// Non-empty filter kinds with their values, in a stable order.
    pub fn iter(&self) -> impl Iterator<Item = (FilterKind, &[String])> {
        self.values
            .iter()
            .filter(|(_, v)| !v.is_empty())
            .map(|(k, v)| (*k, v.as_slice()))
    }
}

const SUB_UNITS: &[(&str, &str)] = &[
    ("printemps", "Printemps"),
    ("lily white", "Lily White"),
    ("lilywhite", "Lily White"),
    ("bibi", "BiBi"),
    ("cyaron", "CYaRon!"),
    ("cyaron!", "CYaRon!"),
    ("azalea", "AZALEA"),
    ("guilty kiss", "Guilty Kiss"),
    ("guiltykiss", "Guilty Kiss"),
];

fn main_unit(word: &str) -> Option<&'static str> {
    match word {
        "muse" | "µ's" | "μ's" | "us" | "u's" => Some("Muse"),
        "aqours" => Some("Aqours"),
        _ => None,
    }
}

fn sub_unit(word: &str) -> Option<&'static str> {
    SUB_UNITS
        .iter()
        .find(|(key, _)| *key == word)
        .map(|(_, canonical)| *canonical)
}

fn year(word: &str) -> Option<&'static str> {
    match word {
        "first" => Some("First"),
        "second" => Some("Second"),
        "third" => Some("Third"),
        _ => None,
    }
}

fn attribute(word: &str) -> Option<&'static str> {
    match word {
        "smile" => Some("Smile"),
        "pure" => Some("Pure"),
        "cool" => Some("Cool"),
        _ => None,
    }
}

/// Canonical spelling of a value for the given kind.
fn canonical(kind: FilterKind, value: &str) -> String {
    let lower = value.trim().to_lowercase();
    let known = match kind {
        FilterKind::MainUnit => main_unit(&lower),
        FilterKind::SubUnit => sub_unit(&lower),
        FilterKind::Year => year(&lower),
        FilterKind::Attribute => attribute(&lower),
        FilterKind::Name => None,
    };
    known.map_or_else(|| title_case(value), str::to_string)
}

/// Capitalize the first letter of every word, lowercasing the rest.
fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn flush_name(filters: &mut ScoutFilters, words: &mut Vec<&str>) {
    if !words.is_empty() {
        filters.add(FilterKind::Name, title_case(&words.join(" ")));
        words.clear();
    }
}

/// Parse scout arguments into filters.
///
/// Unknown explicit keys are ignored rather than rejected.
pub fn parse_arguments<S: AsRef<str>>(args: &[S]) -> ScoutFilters {
    let mut filters = ScoutFilters::new();
    let mut name_words: Vec<&str> = Vec::new();
    let mut i = 0;

    while i < args.len() {
        let token = args[i].as_ref().trim();
        i += 1;
        if token.is_empty() {
            continue;
        }

        if let Some((key, value)) = token.split_once(['=', ':']) {
            flush_name(&mut filters, &mut name_words);
            if let Some(kind) = FilterKind::parse(key) {
                for v in value.split(',').map(str::trim).filter(|v| !v.is_empty()) {
                    filters.add(kind, canonical(kind, v));
                }
            }
            continue;
        }

        let lower = token.to_lowercase();

        // Two-word sub-units ("lily white", "guilty kiss")
        if let Some(next) = args.get(i) {
            let pair = format!("{lower} {}", next.as_ref().trim().to_lowercase());
            if let Some(unit) = sub_unit(&pair) {
                flush_name(&mut filters, &mut name_words);
                filters.add(FilterKind::SubUnit, unit);
                i += 1;
                continue;
            }
        }

        let keyword = main_unit(&lower)
            .map(|v| (FilterKind::MainUnit, v))
            .or_else(|| sub_unit(&lower).map(|v| (FilterKind::SubUnit, v)))
            .or_else(|| year(&lower).map(|v| (FilterKind::Year, v)))
            .or_else(|| attribute(&lower).map(|v| (FilterKind::Attribute, v)));

        match keyword {
            Some((kind, value)) => {
                flush_name(&mut filters, &mut name_words);
                filters.add(kind, value);
            }
            None => name_words.push(token),
        }
    }
    flush_name(&mut filters, &mut name_words);

    filters
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_args() {
        let filters = parse_arguments::<&str>(&[]);
        assert!(filters.is_empty());
        assert!(!filters.has_name());
    }

    #[test]
    fn keywords_classified() {
        let filters = parse_arguments(&["muse", "second", "PURE", "printemps"]);
        assert_eq!(filters.get(FilterKind::MainUnit), ["Muse"]);
        assert_eq!(filters.get(FilterKind::Year), ["Second"]);
        assert_eq!(filters.get(FilterKind::Attribute), ["Pure"]);
        assert_eq!(filters.get(FilterKind::SubUnit), ["Printemps"]);
        assert!(!filters.has_name());
    }

    #[test]
    fn adjacent_name_words_join() {
        let filters = parse_arguments(&["kousaka", "honoka", "smile"]);
        assert_eq!(filters.get(FilterKind::Name), ["Kousaka Honoka"]);
        assert_eq!(filters.get(FilterKind::Attribute), ["Smile"]);
    }

    #[test]
    fn separated_names_stay_separate() {
        let filters = parse_arguments(&["honoka", "cool", "umi"]);
        assert_eq!(filters.get(FilterKind::Name), ["Honoka", "Umi"]);
    }

    #[test]
    fn two_word_sub_unit() {
        let filters = parse_arguments(&["lily", "white", "nozomi"]);
        assert_eq!(filters.get(FilterKind::SubUnit), ["Lily White"]);
        assert_eq!(filters.get(FilterKind::Name), ["Nozomi"]);
    }

    #[test]
    fn explicit_form() {
        let filters = parse_arguments(&["unit=aqours,muse", "year:first", "name=watanabe you"]);
        assert_eq!(filters.get(FilterKind::MainUnit), ["Aqours", "Muse"]);
        assert_eq!(filters.get(FilterKind::Year), ["First"]);
        assert_eq!(filters.get(FilterKind::Name), ["Watanabe You"]);
    }

    #[test]
    fn unknown_explicit_key_ignored() {
        let filters = parse_arguments(&["colour=red", "smile"]);
        assert_eq!(filters.get(FilterKind::Attribute), ["Smile"]);
        assert_eq!(filters.iter().count(), 1);
    }

    #[test]
    fn duplicates_dropped() {
        let filters = parse_arguments(&["muse", "µ's", "unit=Muse"]);
        assert_eq!(filters.get(FilterKind::MainUnit), ["Muse"]);
    }

    #[test]
    fn filter_kind_parse() {
        assert_eq!(FilterKind::parse("sub-unit"), Some(FilterKind::SubUnit));
        assert_eq!(FilterKind::parse("ATTR"), Some(FilterKind::Attribute));
        assert_eq!(FilterKind::parse("rarity"), None);
    }

    #[test]
    fn title_case_words() {
        assert_eq!(title_case("nishikino MAKI"), "Nishikino Maki");
        assert_eq!(title_case("  "), "");
    }
}
