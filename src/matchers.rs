//! Name-chain matchers.
//!
//! A matcher is a small predicate over the label paths produced by the
//! `_name_chain` walkers. Hosts combine them to select nodes by position in
//! the tree without writing ad-hoc string logic:
//!
//! ```
//! use weft::Matcher;
//!
//! let under_list = Matcher::prefix(["document", "list"]);
//! assert!(under_list.matches(&["document", "list", "item"]));
//! assert!(!under_list.matches(&["document", "table", "item"]));
//! ```
//!
//! All label comparisons ignore ASCII case.

/// Predicate over a root-to-node chain of labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Matcher {
    /// The chain equals these labels, element for element.
    Equal(Vec<String>),
    /// The chain starts with these labels.
    Prefix(Vec<String>),
    /// The chain ends with these labels.
    Suffix(Vec<String>),
    /// The chain has exactly this many labels.
    Length(usize),
    /// Every inner matcher accepts the chain. Empty matches nothing.
    All(Vec<Matcher>),
    /// At least one inner matcher accepts the chain. Empty matches nothing.
    Some(Vec<Matcher>),
}

fn labels<I, S>(parts: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    parts.into_iter().map(Into::into).collect()
}

fn eq(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b)
}

impl Matcher {
    pub fn equal<I, S>(parts: I) -> Matcher
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Matcher::Equal(labels(parts))
    }

    pub fn prefix<I, S>(parts: I) -> Matcher
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Matcher::Prefix(labels(parts))
    }

    pub fn suffix<I, S>(parts: I) -> Matcher
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Matcher::Suffix(labels(parts))
    }

    /// True when the chain satisfies this matcher.
    pub fn matches(&self, chain: &[&str]) -> bool {
        match self {
            Matcher::Equal(want) => {
                want.len() == chain.len() && want.iter().zip(chain).all(|(w, c)| eq(w, c))
            }
            Matcher::Prefix(want) => {
                chain.len() >= want.len() && want.iter().zip(chain).all(|(w, c)| eq(w, c))
            }
            Matcher::Suffix(want) => {
                chain.len() >= want.len()
                    && want.iter().rev().zip(chain.iter().rev()).all(|(w, c)| eq(w, c))
            }
            Matcher::Length(want) => chain.len() == *want,
            Matcher::All(inner) => !inner.is_empty() && inner.iter().all(|m| m.matches(chain)),
            Matcher::Some(inner) => inner.iter().any(|m| m.matches(chain)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Matcher;

    #[test]
    fn equal_requires_the_whole_chain() {
        let m = Matcher::equal(["a", "b"]);
        assert!(m.matches(&["a", "b"]));
        assert!(m.matches(&["A", "B"]));
        assert!(!m.matches(&["a", "b", "c"]));
        assert!(!m.matches(&["a"]));
    }

    #[test]
    fn prefix_accepts_longer_chains() {
        let m = Matcher::prefix(["a", "b"]);
        assert!(m.matches(&["a", "b"]));
        assert!(m.matches(&["a", "b", "c"]));
        assert!(!m.matches(&["a", "c", "b"]));
        assert!(!m.matches(&["a"]));
    }

    #[test]
    fn empty_prefix_and_suffix_accept_anything() {
        assert!(Matcher::prefix(Vec::<String>::new()).matches(&["a"]));
        assert!(Matcher::prefix(Vec::<String>::new()).matches(&[]));
        assert!(Matcher::suffix(Vec::<String>::new()).matches(&["a", "b"]));
    }

    #[test]
    fn suffix_anchors_at_the_end() {
        let m = Matcher::suffix(["b", "c"]);
        assert!(m.matches(&["a", "b", "c"]));
        assert!(m.matches(&["b", "c"]));
        assert!(!m.matches(&["b", "c", "d"]));
        assert!(!m.matches(&["c"]));
    }

    #[test]
    fn length_counts_labels() {
        assert!(Matcher::Length(2).matches(&["a", "b"]));
        assert!(!Matcher::Length(2).matches(&["a"]));
        assert!(Matcher::Length(0).matches(&[]));
    }

    #[test]
    fn all_requires_every_member() {
        let m = Matcher::All(vec![Matcher::prefix(["a"]), Matcher::Length(2)]);
        assert!(m.matches(&["a", "b"]));
        assert!(!m.matches(&["a", "b", "c"]));
        assert!(!m.matches(&["b", "c"]));
    }

    #[test]
    fn some_requires_at_least_one_member() {
        let m = Matcher::Some(vec![Matcher::Length(1), Matcher::suffix(["z"])]);
        assert!(m.matches(&["a"]));
        assert!(m.matches(&["a", "z"]));
        assert!(!m.matches(&["a", "b"]));
    }

    #[test]
    fn empty_combinators_match_nothing() {
        assert!(!Matcher::All(vec![]).matches(&["a"]));
        assert!(!Matcher::Some(vec![]).matches(&["a"]));
        assert!(!Matcher::All(vec![]).matches(&[]));
        assert!(!Matcher::Some(vec![]).matches(&[]));
    }

    #[test]
    fn nested_combinators_compose() {
        let m = Matcher::All(vec![
            Matcher::prefix(["doc"]),
            Matcher::Some(vec![Matcher::suffix(["item"]), Matcher::suffix(["row"])]),
        ]);
        assert!(m.matches(&["doc", "list", "item"]));
        assert!(m.matches(&["doc", "table", "row"]));
        assert!(!m.matches(&["doc", "table", "cell"]));
    }
}
