//! reads queries in the textual input format
//!
//! Format (whitespace separated, line breaks are not significant):
//! - q: number of queries
//! - per query: `cities roads library_cost road_cost`, then `roads` pairs of
//!   1-based city indices

use std::io::{BufRead, Read};
use std::str::{FromStr, SplitWhitespace};

use tracing::debug;

use crate::error::{Error, Result};

use super::Query;

struct Tokens<'a> {
    inner: SplitWhitespace<'a>,
}

impl Tokens<'_> {
    fn next<T: FromStr>(&mut self, what: impl Fn() -> String) -> Result<T> {
        let token = self.inner.next().ok_or_else(|| {
            Error::invalid_input(format!("unexpected end of input reading {}", what()))
        })?;
        token.parse::<T>().map_err(|_| {
            Error::invalid_input(format!(
                "expected an unsigned integer for {}, found {token:?}",
                what()
            ))
        })
    }
}

/// Parses every query from `reader`. Tokens after the last query are ignored.
pub fn parse_queries<R: BufRead>(mut reader: R) -> Result<Vec<Query>> {
    let mut input = String::new();
    reader.read_to_string(&mut input)?;
    parse_queries_str(&input)
}

pub fn parse_queries_str(input: &str) -> Result<Vec<Query>> {
    let mut tokens = Tokens {
        inner: input.split_whitespace(),
    };

    let q: usize = tokens.next(|| "the query count".to_string())?;
    let mut queries = Vec::with_capacity(q.min(1 << 16));

    for i in 0..q {
        let cities: u32 = tokens.next(|| format!("query {i}: city count"))?;
        let num_roads: usize = tokens.next(|| format!("query {i}: road count"))?;
        let library_cost = tokens.next(|| format!("query {i}: library cost"))?;
        let road_cost = tokens.next(|| format!("query {i}: road cost"))?;

        let mut roads = Vec::with_capacity(num_roads.min(1 << 20));
        for r in 0..num_roads {
            let c1 = tokens.next(|| format!("query {i}: road {r} first city"))?;
            let c2 = tokens.next(|| format!("query {i}: road {r} second city"))?;
            roads.push((c1, c2));
        }

        queries.push(Query {
            cities,
            library_cost,
            road_cost,
            roads,
        });
    }

    debug!(queries = queries.len(), "parsed input");
    Ok(queries)
}
