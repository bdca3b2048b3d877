//! Textual form of a pack
//!
//! `Display` writes `(v0,v1,...)`. Parsing accepts that form as well as bare
//! tokens separated by commas or whitespace.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::lane::Lane;
use crate::lane_count::{LaneCount, SupportedLaneCount};
use crate::pack::Pack;

impl<T: Lane, const N: usize> fmt::Display for Pack<T, N>
where
    LaneCount<N>: SupportedLaneCount,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, lane) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{lane}")?;
        }
        write!(f, ")")
    }
}

impl<T: Lane, const N: usize> fmt::Debug for Pack<T, N>
where
    LaneCount<N>: SupportedLaneCount,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = format!("Pack<{}, {}>", T::NAME, N);
        let mut tuple = f.debug_tuple(&name);
        for lane in self.iter() {
            tuple.field(lane);
        }
        tuple.finish()
    }
}

impl<T: Lane, const N: usize> Pack<T, N>
where
    LaneCount<N>: SupportedLaneCount,
{
    /// Consume exactly `N` tokens from `tokens`, one per lane in order
    ///
    /// Fails with `LaneCount` if the iterator runs dry and with `Parse` on the
    /// first token that is not a valid `T`.
    pub fn parse_tokens<'a, I>(tokens: &mut I) -> Result<Self>
    where
        I: Iterator<Item = &'a str>,
    {
        let mut lanes = [T::ZERO; N];
        for (i, lane) in lanes.iter_mut().enumerate() {
            let token = tokens.next().ok_or_else(|| Error::lane_count(N, i))?;
            *lane = parse_lane(token)?;
        }
        Ok(Self::from_array(lanes))
    }
}

fn parse_lane<T: Lane>(token: &str) -> Result<T> {
    token.parse().map_err(|_| {
        log::trace!("rejected {} lane token {token:?}", T::NAME);
        Error::parse(T::NAME, token)
    })
}

impl<T: Lane, const N: usize> FromStr for Pack<T, N>
where
    LaneCount<N>: SupportedLaneCount,
{
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let body = match trimmed.strip_prefix('(') {
            Some(rest) => rest
                .strip_suffix(')')
                .ok_or_else(|| Error::Parse(format!("unclosed parenthesis in '{trimmed}'")))?,
            None => trimmed,
        };

        let tokens: Vec<&str> = body
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|token| !token.is_empty())
            .collect();
        if tokens.len() != N {
            return Err(Error::lane_count(N, tokens.len()));
        }

        Self::parse_tokens(&mut tokens.into_iter())
    }
}
