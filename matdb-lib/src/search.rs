use std::collections::BTreeSet;

use matdb_data::MaterialRecord;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Raw search query parameters, as received from a caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SearchParams {
    #[serde(default)]
    pub min_density: Option<String>,
    #[serde(default)]
    pub max_density: Option<String>,
    #[serde(default)]
    pub include_elements: Option<String>,
    #[serde(default)]
    pub exclude_elements: Option<String>,
}

impl SearchParams {
    /// Parse list parameters and validate everything into [`SearchCriteria`].
    pub fn criteria(&self) -> Result<SearchCriteria, ValidationError> {
        let include = self
            .include_elements
            .as_deref()
            .map(parse_element_list)
            .unwrap_or_default();
        let exclude = self
            .exclude_elements
            .as_deref()
            .map(parse_element_list)
            .unwrap_or_default();

        SearchFilterBuilder::new()
            .min_density(self.min_density.as_deref())
            .max_density(self.max_density.as_deref())
            .include(include)
            .exclude(exclude)
            .build()
    }
}

/// Split a list parameter such as `[H,O]` or `H,O` into elements.
///
/// Brackets are stripped from both ends, then the rest is split on commas
/// without trimming. An empty value is an empty list; `[]` is a single empty
/// element, which matches every formula.
pub fn parse_element_list(raw: &str) -> Vec<String> {
    if raw.is_empty() {
        return Vec::new();
    }
    raw.trim_matches(['[', ']'])
        .split(',')
        .map(str::to_string)
        .collect()
}

/// Validated search criteria.
///
/// Only obtainable through [`SearchFilterBuilder`], so the include and
/// exclude sets are disjoint and `min_density < max_density` when both are
/// set.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SearchCriteria {
    min_density: Option<f64>,
    max_density: Option<f64>,
    include_elements: BTreeSet<String>,
    exclude_elements: BTreeSet<String>,
}

impl SearchCriteria {
    pub fn min_density(&self) -> Option<f64> {
        self.min_density
    }

    pub fn max_density(&self) -> Option<f64> {
        self.max_density
    }

    pub fn include_elements(&self) -> &BTreeSet<String> {
        &self.include_elements
    }

    pub fn exclude_elements(&self) -> &BTreeSet<String> {
        &self.exclude_elements
    }

    /// Whether `record` satisfies every clause of the criteria.
    ///
    /// Element clauses test substring containment on the formula text, so
    /// "N" also matches "Na2O".
    pub fn matches(&self, record: &MaterialRecord) -> bool {
        let formula = record.formula.as_str();

        self.min_density.is_none_or(|min| record.density >= min)
            && self.max_density.is_none_or(|max| record.density <= max)
            && (self.include_elements.is_empty()
                || self
                    .include_elements
                    .iter()
                    .any(|el| formula.contains(el.as_str())))
            && !self
                .exclude_elements
                .iter()
                .any(|el| formula.contains(el.as_str()))
    }

    /// Records satisfying the criteria, in input order.
    pub fn filter<I>(&self, records: I) -> Vec<MaterialRecord>
    where
        I: IntoIterator<Item = MaterialRecord>,
    {
        records.into_iter().filter(|r| self.matches(r)).collect()
    }
}

/// Builds [`SearchCriteria`] from raw density bounds and element lists.
#[derive(Debug, Clone, Default)]
pub struct SearchFilterBuilder {
    min_density: Option<String>,
    max_density: Option<String>,
    include: Vec<String>,
    exclude: Vec<String>,
}

impl SearchFilterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn min_density(mut self, raw: Option<&str>) -> Self {
        self.min_density = raw.map(str::to_string);
        self
    }

    pub fn max_density(mut self, raw: Option<&str>) -> Self {
        self.max_density = raw.map(str::to_string);
        self
    }

    pub fn include<I, S>(mut self, elements: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.include.extend(elements.into_iter().map(Into::into));
        self
    }

    pub fn exclude<I, S>(mut self, elements: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude.extend(elements.into_iter().map(Into::into));
        self
    }

    /// Validate in order: numeric bounds, bound ordering, element overlap.
    pub fn build(self) -> Result<SearchCriteria, ValidationError> {
        let min_density = parse_bound("min-density", self.min_density.as_deref())?;
        let max_density = parse_bound("max-density", self.max_density.as_deref())?;

        if let (Some(min), Some(max)) = (min_density, max_density) {
            if min >= max {
                return Err(ValidationError::InvalidRange { min, max });
            }
        }

        let include_elements: BTreeSet<String> = self.include.into_iter().collect();
        let exclude_elements: BTreeSet<String> = self.exclude.into_iter().collect();

        let common: Vec<String> = include_elements
            .intersection(&exclude_elements)
            .cloned()
            .collect();
        if !common.is_empty() {
            return Err(ValidationError::ConflictingElementSets(common));
        }

        Ok(SearchCriteria {
            min_density,
            max_density,
            include_elements,
            exclude_elements,
        })
    }

    /// One-shot validation of raw search inputs.
    pub fn validate<S: AsRef<str>>(
        min_density: Option<&str>,
        max_density: Option<&str>,
        include_elements: &[S],
        exclude_elements: &[S],
    ) -> Result<SearchCriteria, ValidationError> {
        Self::new()
            .min_density(min_density)
            .max_density(max_density)
            .include(include_elements.iter().map(|s| s.as_ref().to_string()))
            .exclude(exclude_elements.iter().map(|s| s.as_ref().to_string()))
            .build()
    }
}

fn parse_bound(field: &'static str, raw: Option<&str>) -> Result<Option<f64>, ValidationError> {
    raw.map(|value| {
        strip_digit_separators(value.trim())
            .and_then(|digits| digits.parse::<f64>().ok())
            .ok_or_else(|| ValidationError::InvalidNumericInput {
                field,
                value: value.to_string(),
            })
    })
    .transpose()
}

/// Drop `_` separators that sit between two digits (`1_000.5`). Any other
/// underscore makes the value invalid.
fn strip_digit_separators(value: &str) -> Option<String> {
    let bytes = value.as_bytes();
    let mut out = String::with_capacity(value.len());
    for (i, c) in value.char_indices() {
        if c != '_' {
            out.push(c);
            continue;
        }
        let after_digit = i > 0 && bytes[i - 1].is_ascii_digit();
        let before_digit = bytes.get(i + 1).is_some_and(u8::is_ascii_digit);
        if !(after_digit && before_digit) {
            return None;
        }
    }
    Some(out)
}
