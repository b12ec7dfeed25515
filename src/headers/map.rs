use super::{HeaderName, HeaderValue};

/// HTTP Headers Multimap.
///
/// Names are stored lowercase, so lookup by a lowercase key is effectively
/// case-insensitive. Insertion order of distinct names is preserved.
#[derive(Clone, Default)]
pub struct HeaderMap {
    fields: Vec<(HeaderName, HeaderValue)>,
}

impl HeaderMap {
    /// Create new empty [`HeaderMap`].
    ///
    /// This function does not allocate.
    #[inline]
    pub const fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Create new empty [`HeaderMap`] with at least the specified capacity.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            fields: Vec::with_capacity(capacity),
        }
    }

    /// Returns headers length, counting every value.
    #[inline]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if headers has no element.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

// ===== Lookup =====

impl HeaderMap {
    /// Returns `true` if the map contains a header value for given header name.
    ///
    /// # Panics
    ///
    /// When using static str, it must be valid header name and in lowercase,
    /// otherwise it panics.
    #[inline]
    pub fn contains_key<K: AsHeaderName>(&self, name: K) -> bool {
        let name = name.as_lowercase_str();
        self.fields.iter().any(|(n, _)| n.as_str() == name)
    }

    /// Returns a reference to the first header value corresponding to the
    /// given header name.
    ///
    /// # Panics
    ///
    /// When using static str, it must be valid header name and in lowercase,
    /// otherwise it panics.
    #[inline]
    pub fn get<K: AsHeaderName>(&self, name: K) -> Option<&HeaderValue> {
        let name = name.as_lowercase_str();
        self.fields
            .iter()
            .find_map(|(n, v)| (n.as_str() == name).then_some(v))
    }

    /// Returns an iterator to all header values corresponding to the given
    /// header name.
    ///
    /// # Panics
    ///
    /// When using static str, it must be valid header name and in lowercase,
    /// otherwise it panics.
    pub fn get_all<K: AsHeaderName>(&self, name: K) -> Option<GetAll<'_>> {
        let name = name.as_lowercase_str();
        let pos = self.fields.iter().position(|(n, _)| n.as_str() == name)?;
        Some(GetAll {
            name: &self.fields[pos].0,
            rest: self.fields[pos..].iter(),
        })
    }

    /// Returns an iterator over headers as name and value pair.
    #[inline]
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.fields.iter(),
        }
    }
}

// ===== Mutation =====

impl HeaderMap {
    /// Inserts a key-value pair into the map.
    ///
    /// If the map did have this key present, all of its values are replaced,
    /// and the first old value is returned.
    ///
    /// # Panics
    ///
    /// When using static str, it must be valid header name and in lowercase,
    /// otherwise it panics.
    pub fn insert<K: IntoHeaderName>(&mut self, name: K, value: HeaderValue) -> Option<HeaderValue> {
        let name = name.into_header_name();
        let old = self.remove(&name);
        self.fields.push((name, value));
        old
    }

    /// Append a header key and value into the map.
    ///
    /// Unlike [`insert`][HeaderMap::insert], if header key is present, header
    /// value is still appended as extra value.
    ///
    /// # Panics
    ///
    /// When using static str, it must be valid header name and in lowercase,
    /// otherwise it panics.
    #[inline]
    pub fn append<K: IntoHeaderName>(&mut self, name: K, value: HeaderValue) {
        self.fields.push((name.into_header_name(), value));
    }

    /// Removes a header from the map, returning the first header value at the
    /// key if the key was previously in the map.
    ///
    /// # Panics
    ///
    /// When using static str, it must be valid header name and in lowercase,
    /// otherwise it panics.
    pub fn remove<K: AsHeaderName>(&mut self, name: K) -> Option<HeaderValue> {
        let name = name.as_lowercase_str();
        let mut first = None;
        self.fields.retain(|(n, v)| {
            if n.as_str() == name {
                if first.is_none() {
                    first = Some(v.clone());
                }
                false
            } else {
                true
            }
        });
        first
    }

    /// Clear headers map, removing all the value.
    #[inline]
    pub fn clear(&mut self) {
        self.fields.clear();
    }
}

impl std::fmt::Debug for HeaderMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

// ===== Iterators =====

/// Iterator to all header values of one header name, returned by
/// [`get_all`][HeaderMap::get_all].
#[derive(Debug)]
pub struct GetAll<'a> {
    name: &'a HeaderName,
    rest: std::slice::Iter<'a, (HeaderName, HeaderValue)>,
}

impl<'a> Iterator for GetAll<'a> {
    type Item = &'a HeaderValue;

    fn next(&mut self) -> Option<Self::Item> {
        for (n, v) in self.rest.by_ref() {
            if n == self.name {
                return Some(v);
            }
        }
        None
    }
}

/// Iterator over headers as name and value pair, returned by
/// [`iter`][HeaderMap::iter].
#[derive(Debug)]
pub struct Iter<'a> {
    inner: std::slice::Iter<'a, (HeaderName, HeaderValue)>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a HeaderName, &'a HeaderValue);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(n, v)| (n, v))
    }
}

impl<'a> IntoIterator for &'a HeaderMap {
    type Item = (&'a HeaderName, &'a HeaderValue);
    type IntoIter = Iter<'a>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ===== Ref Traits =====

/// A type that can be used for [`HeaderMap`] lookup operation.
#[allow(private_bounds)]
pub trait AsHeaderName: SealedRef {}
trait SealedRef: Sized {
    /// Returns lowercase string
    fn as_lowercase_str(&self) -> &str;
}

/// for str input, it must already be lowercase
impl AsHeaderName for &'static str {}
impl SealedRef for &'static str {
    #[inline]
    fn as_lowercase_str(&self) -> &str {
        assert!(
            !self.bytes().any(|e| e.is_ascii_uppercase()),
            "static header name must be in lowercase"
        );
        self
    }
}

impl AsHeaderName for HeaderName {}
impl SealedRef for HeaderName {
    #[inline]
    fn as_lowercase_str(&self) -> &str {
        HeaderName::as_str(self)
    }
}

// blanket implementation
impl<K: AsHeaderName> AsHeaderName for &K {}
impl<S: SealedRef> SealedRef for &S {
    #[inline]
    fn as_lowercase_str(&self) -> &str {
        S::as_lowercase_str(self)
    }
}

// ===== Owned Traits =====

/// A type that can be used for name consuming [`HeaderMap`] operation.
#[allow(private_bounds)]
pub trait IntoHeaderName: Sealed {}
trait Sealed: Sized {
    fn into_header_name(self) -> HeaderName;
}

// for static data prefer the provided constants over static str
impl IntoHeaderName for &'static str {}
impl Sealed for &'static str {
    #[inline]
    fn into_header_name(self) -> HeaderName {
        HeaderName::from_static(self)
    }
}

impl IntoHeaderName for HeaderName {}
impl Sealed for HeaderName {
    #[inline]
    fn into_header_name(self) -> HeaderName {
        self
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn header_map() {
        let mut map = HeaderMap::new();

        assert!(map.get("content-type").is_none());

        map.insert("content-type", HeaderValue::from_string("FOO"));
        assert!(map.contains_key("content-type"));

        map.insert("accept", HeaderValue::from_string("BAR"));
        map.insert("host", HeaderValue::from_string("example.com"));
        assert_eq!(map.len(), 3);

        // mixed case input is normalized at construction
        let name = HeaderName::from_slice("X-Forwarded-For").unwrap();
        assert_eq!(name.as_str(), "x-forwarded-for");
        map.insert(name, HeaderValue::from_string("1.2.3.4"));
        assert_eq!(map.get("x-forwarded-for").unwrap().as_str(), "1.2.3.4");

        // append keeps both values
        map.append("accept", HeaderValue::from_string("BAZ"));
        let mut all = map.get_all("accept").unwrap();
        assert!(matches!(all.next(), Some(v) if v.as_str() == "BAR"));
        assert!(matches!(all.next(), Some(v) if v.as_str() == "BAZ"));
        assert!(all.next().is_none());

        // insert replaces every value
        assert!(map.insert("accept", HeaderValue::from_string("ONE")).is_some());
        let mut all = map.get_all("accept").unwrap();
        assert!(matches!(all.next(), Some(v) if v.as_str() == "ONE"));
        assert!(all.next().is_none());

        assert!(map.remove("host").is_some());
        assert!(!map.contains_key("host"));
        assert!(map.remove("host").is_none());

        map.clear();
        assert!(map.is_empty());
        assert!(!map.contains_key("content-type"));
    }
}
