//! Parsing of user selections such as `"1 3-5,8"` or `sg-003`.
//!
//! Commands that act on products accept either catalog ids or 1-based numbers
//! from the last `products` listing. Numbers follow a small grammar:
//!
//! - **Single numbers**: `1`, `3`, `5`
//! - **Space or comma lists**: `1 3 5`, `1,3,5`
//! - **Inclusive ranges**: `3-6` (expands to 3,4,5,6)
//! - **Mixed**: `1 3-5,8` (expands to 1,3,4,5,8)
//!
//! Numbers are deduplicated and sorted. A token containing anything other than
//! digits and `-` is treated as a product id instead.
//!
//! # Public API
//! - [`NumberParser`]: Parses and validates listing numbers
//! - [`Selection`]: Resolves mixed arguments to product ids

use crate::core::catalog::find_product;
use crate::core::error::{Result, StorefrontError};
use std::collections::BTreeSet;
use std::ops::RangeInclusive;

pub struct NumberParser;

impl NumberParser {
    /// Check the grammar only. Ranges stay unexpanded so their size never matters here.
    pub fn parse_ranges(input: &str) -> Result<Vec<RangeInclusive<usize>>> {
        let mut ranges = Vec::new();

        for part in input.split([' ', ',']).map(str::trim).filter(|s| !s.is_empty()) {
            if let Some((start, end)) = part.split_once('-') {
                if end.contains('-') {
                    return Err(StorefrontError::invalid_range_format(part));
                }

                let start: usize = start
                    .parse()
                    .map_err(|_| StorefrontError::invalid_range_number(start))?;
                let end: usize = end
                    .parse()
                    .map_err(|_| StorefrontError::invalid_range_number(end))?;

                if start > end {
                    return Err(StorefrontError::invalid_range_order(start, end));
                }
                ranges.push(start..=end);
            } else {
                let number: usize = part
                    .parse()
                    .map_err(|_| StorefrontError::invalid_number(part))?;
                ranges.push(number..=number);
            }
        }

        Ok(ranges)
    }

    /// Bounds-check against a listing of `available` entries, then expand.
    ///
    /// Every range is checked before any is expanded, so `1-99999999999`
    /// fails at once instead of materializing the range.
    pub fn expand(ranges: &[RangeInclusive<usize>], available: usize) -> Result<Vec<usize>> {
        if available == 0 {
            return Err(StorefrontError::NoListing);
        }
        if ranges.iter().any(|r| *r.start() == 0) {
            return Err(StorefrontError::ZeroIndex);
        }
        if let Some(max) = ranges.iter().map(|r| *r.end()).max() {
            if max > available {
                return Err(StorefrontError::index_out_of_range(max, available));
            }
        }

        let numbers: BTreeSet<usize> = ranges.iter().cloned().flatten().collect();
        Ok(numbers.into_iter().collect())
    }

    /// Parse `input` and resolve it against `available` entries.
    pub fn parse(input: &str, available: usize) -> Result<Vec<usize>> {
        Self::expand(&Self::parse_ranges(input)?, available)
    }
}

fn is_number_token(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| c.is_ascii_digit() || c == '-' || c == ',')
}

pub struct Selection;

impl Selection {
    /// Resolve command arguments to product ids, keeping first-seen order.
    ///
    /// `listing` is the cached id list from the last `products` run; numbers index
    /// into it. Ids are checked against the catalog.
    pub fn resolve(args: &[String], listing: &[String]) -> Result<Vec<String>> {
        if args.iter().all(|a| a.trim().is_empty()) {
            return Err(StorefrontError::NoSelectionProvided);
        }

        let mut ids: Vec<String> = Vec::new();
        let mut push = |id: String| {
            if !ids.contains(&id) {
                ids.push(id);
            }
        };

        let (number_args, id_args): (Vec<&String>, Vec<&String>) =
            args.iter().partition(|a| is_number_token(a.trim()));

        if !number_args.is_empty() {
            let joined = number_args
                .iter()
                .map(|s| s.as_str())
                .collect::<Vec<_>>()
                .join(" ");
            let ranges = NumberParser::parse_ranges(&joined)
                .map_err(|e| StorefrontError::invalid_selection(e.to_string()))?;
            let numbers = NumberParser::expand(&ranges, listing.len())?;
            for n in numbers {
                push(listing[n - 1].clone());
            }
        }

        for raw in id_args {
            let id = raw.trim();
            if id.is_empty() {
                continue;
            }
            let product = find_product(id).ok_or_else(|| StorefrontError::product_not_found(id))?;
            push(product.id.clone());
        }

        log::debug!("Resolved {} argument(s) to {} product id(s)", args.len(), ids.len());
        Ok(ids)
    }

    /// Resolve exactly one product; extra matches are an error.
    pub fn resolve_one(arg: &str, listing: &[String]) -> Result<String> {
        let ids = Self::resolve(&[arg.to_string()], listing)?;
        match ids.as_slice() {
            [id] => Ok(id.clone()),
            _ => Err(StorefrontError::invalid_selection(format!(
                "'{arg}' selects {} products, expected one",
                ids.len()
            ))),
        }
    }
}
