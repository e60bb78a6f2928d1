use alloc::borrow::Cow;
use alloc::boxed::Box;
use alloc::string::String;
use core::fmt;

use binder_utils::vec::FastVec;

use crate::access::ParseError;

/// A parsed, reusable dot-separated member path such as `"Owner.Name"`.
///
/// Every segment is non-empty; `""`, `".a"`, `"a."` and `"a..b"` are
/// rejected.
///
/// # Examples
///
/// ```
/// use binder_reflect::access::{MemberPath, ParseError};
///
/// let path = MemberPath::parse("Owner.Name").unwrap();
/// assert_eq!(path.len(), 2);
/// assert_eq!(path.to_string(), "Owner.Name");
///
/// assert_eq!(MemberPath::parse(""), Err(ParseError::Empty));
/// assert!(MemberPath::parse("Owner..Name").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MemberPath<'a> {
    hops: Box<[Cow<'a, str>]>,
    last: Cow<'a, str>,
}

#[inline]
fn check(segment: &str, offset: usize, path: &str) -> Result<(), ParseError> {
    if segment.is_empty() {
        return Err(ParseError::EmptySegment {
            offset,
            path: String::from(path),
        });
    }
    Ok(())
}

/// Feeds every segment but the last to `hop`, and returns the last one.
fn split_segments<'a>(
    path: &'a str,
    mut hop: impl FnMut(&'a str),
) -> Result<&'a str, ParseError> {
    if path.is_empty() {
        return Err(ParseError::Empty);
    }

    let mut offset = 0;
    let mut rest = path;
    while let Some((segment, tail)) = rest.split_once('.') {
        check(segment, offset, path)?;
        hop(segment);
        offset += segment.len() + 1;
        rest = tail;
    }
    check(rest, offset, path)?;
    Ok(rest)
}

impl<'a> MemberPath<'a> {
    /// Parses `path`, borrowing its segments.
    pub fn parse(path: &'a str) -> Result<Self, ParseError> {
        let mut vec: FastVec<Cow<'a, str>, 8> = FastVec::new();
        let data = vec.data();
        let last = split_segments(path, |segment| data.push(Cow::Borrowed(segment)))?;
        Ok(Self {
            hops: vec.into_boxed_slice(),
            last: Cow::Borrowed(last),
        })
    }

    /// Parses `path`, copying each segment into an owned string.
    pub fn parse_owned(path: &str) -> Result<MemberPath<'static>, ParseError> {
        let mut vec: FastVec<Cow<'static, str>, 8> = FastVec::new();
        let data = vec.data();
        let last = split_segments(path, |segment| data.push(Cow::Owned(String::from(segment))))?;
        Ok(MemberPath {
            hops: vec.into_boxed_slice(),
            last: Cow::Owned(String::from(last)),
        })
    }

    /// Converts this into an owned path.
    pub fn into_owned(self) -> MemberPath<'static> {
        MemberPath {
            hops: self
                .hops
                .into_iter()
                .map(|segment| Cow::Owned(segment.into_owned()))
                .collect(),
            last: Cow::Owned(self.last.into_owned()),
        }
    }

    /// Number of segments, always at least one.
    #[inline]
    pub fn len(&self) -> usize {
        self.hops.len() + 1
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&str> {
        match self.hops.get(index) {
            Some(segment) => Some(&**segment),
            None if index == self.hops.len() => Some(&*self.last),
            None => None,
        }
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.hops
            .iter()
            .map(|segment| &**segment)
            .chain(core::iter::once(&*self.last))
    }

    /// The segments walked through, and the terminal segment.
    #[inline]
    pub(crate) fn split_last(&self) -> (&[Cow<'a, str>], &str) {
        (&self.hops[..], &*self.last)
    }
}

impl fmt::Display for MemberPath<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in self.hops.iter() {
            f.write_str(segment)?;
            f.write_str(".")?;
        }
        f.write_str(&self.last)
    }
}
