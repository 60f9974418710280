use crate::abbrev::abbreviate;
use crate::error::NameError;
use crate::permute::permutations;
use itertools::iproduct;

/// Surname counts at or above this make the `n!` expansion worth mentioning.
const LARGE_SURNAME_COUNT: usize = 7;

/// A full name split into its first name and surnames.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Name<'a> {
    pub first: &'a str,
    pub surnames: Vec<&'a str>,
}

impl<'a> Name<'a> {
    /// Splits `input` on whitespace. The first token is the first name and
    /// everything after it is a surname, in the order given.
    pub fn parse(input: &'a str) -> Result<Name<'a>, NameError> {
        let mut tokens = input.split_whitespace();
        let first = tokens.next();
        let surnames: Vec<&str> = tokens.collect();

        match first {
            Some(first) if !surnames.is_empty() => Ok(Name { first, surnames }),
            _ => Err(NameError::InsufficientTokens {
                found: first.map_or(0, |_| 1),
            }),
        }
    }
}

/// Full candidate list for `input`: full-form variations, then abbreviations.
pub fn generate(input: &str) -> Result<Vec<String>, NameError> {
    let name = Name::parse(input)?;
    tracing::debug!(first = name.first, surnames = name.surnames.len(), "Parsed name");

    if name.surnames.len() >= LARGE_SURNAME_COUNT {
        tracing::warn!(
            surnames = name.surnames.len(),
            "Many surnames given, every ordering of them will be generated"
        );
    }

    let mut candidates = Vec::new();
    full_variations(name.first, &name.surnames, &mut candidates);
    abbreviated_variations(name.first, &name.surnames, &mut candidates);

    tracing::debug!(candidates = candidates.len(), "Generated candidates");
    Ok(candidates)
}

/// First name joined with every ordering of the surnames, followed by each
/// name part on its own.
pub fn full_variations(first: &str, surnames: &[&str], candidates: &mut Vec<String>) {
    let perms = permutations(surnames);
    tracing::debug!(permutations = perms.len(), "Permuted surnames");

    for perm in perms {
        let joined = perm.concat();
        candidates.add_both_ways(first, &joined, "");
        candidates.add_both_ways(first, &joined, ".");
        candidates.add_both_ways(first, &joined, "_");
    }

    candidates.push(first.to_string());
    candidates.extend(surnames.iter().map(|s| s.to_string()));
}

/// Every prefix of the first name against every prefix of each surname,
/// then every first name prefix against each full surname.
pub fn abbreviated_variations(first: &str, surnames: &[&str], candidates: &mut Vec<String>) {
    let first_abbrevs = abbreviate(first);

    for surname in surnames {
        let surname_abbrevs = abbreviate(surname);
        for (abbr, sur_abbr) in iproduct!(&first_abbrevs, &surname_abbrevs) {
            candidates.add_both_ways(abbr, sur_abbr, "");
            candidates.add_both_ways(abbr, sur_abbr, "_");
            candidates.add_both_ways(abbr, sur_abbr, ".");
        }
    }

    for (abbr, surname) in iproduct!(&first_abbrevs, surnames) {
        candidates.add_both_ways(abbr, surname, "");
    }
}

trait AddBothWays {
    fn add_both_ways(&mut self, left: &str, right: &str, separator: &str);
}

impl AddBothWays for Vec<String> {
    fn add_both_ways(&mut self, left: &str, right: &str, separator: &str) {
        self.push(format!("{left}{separator}{right}"));
        self.push(format!("{right}{separator}{left}"));
    }
}
