use std::sync::Arc;

/// An error that can occur in this crate.
///
/// The main categories of errors are parse failures (a string did not match
/// a format, a zone expression was unrecognized, a phrase could not be
/// de-humanized), out-of-range field values and API misuse.
///
/// # Introspection is limited
///
/// Other than implementing the [`std::error::Error`] trait, the
/// [`core::fmt::Debug`] trait and the [`core::fmt::Display`] trait, this
/// error type provides coarse predicates like [`Error::is_parse_match`] for
/// the categories that callers plausibly want to branch on. The predicates
/// inspect the *root* cause of an error, so context added along the way
/// doesn't change the category.
///
/// # Design
///
/// This crate follows the "One True God Error Type Pattern," where only one
/// error type exists for a variety of different operations. Finer grained
/// error types proved difficult in the face of composition: almost every
/// operation here ends in "build an `Instant`," and the interesting part of
/// an error is its message and its category, not its Rust type.
#[derive(Clone)]
pub struct Error {
    /// The internal representation of an error.
    ///
    /// This is in an `Arc` to make an `Error` cheap to clone. It also makes
    /// the size of the error equal to one word, which keeps `Result<T,
    /// Error>` slim for the small `T` values this crate traffics in.
    inner: Arc<ErrorInner>,
}

#[derive(Debug)]
struct ErrorInner {
    kind: ErrorKind,
    cause: Option<Error>,
}

/// The category of an error.
///
/// Every variant carries a rendered message. We don't keep structured data
/// around beyond the category, since the categories themselves are the only
/// thing callers have ever been observed to branch on.
#[derive(Debug)]
pub(crate) enum ErrorKind {
    /// An ad hoc error message with no particular category.
    Adhoc(Box<str>),
    /// A zone expression was unrecognized, or a named zone is unknown.
    ZoneParse(Box<str>),
    /// An input string did not match the required pattern.
    ParseMatch(Box<str>),
    /// A format string contains a token outside the grammar, or one that the
    /// active locale cannot supply a pattern for.
    UnknownToken(Box<str>),
    /// A field value is out of range, or two captured fields contradict one
    /// another.
    FieldValue(Box<str>),
    /// A phrase did not match any pattern known to the locale.
    Dehumanize(Box<str>),
    /// The API was misused. For example, a malformed `bounds` string.
    Usage(Box<str>),
}

impl ErrorKind {
    fn message(&self) -> &str {
        match *self {
            ErrorKind::Adhoc(ref msg) => msg,
            ErrorKind::ZoneParse(ref msg) => msg,
            ErrorKind::ParseMatch(ref msg) => msg,
            ErrorKind::UnknownToken(ref msg) => msg,
            ErrorKind::FieldValue(ref msg) => msg,
            ErrorKind::Dehumanize(ref msg) => msg,
            ErrorKind::Usage(ref msg) => msg,
        }
    }
}

impl Error {
    /// Creates a new error value from `core::fmt::Arguments`.
    ///
    /// It is expected to use [`format_args!`](format_args) from Rust's
    /// standard library to create a `core::fmt::Arguments`. Inside this
    /// crate, that's what the `err!` macro does.
    pub(crate) fn adhoc(message: core::fmt::Arguments<'_>) -> Error {
        Error::from_kind(ErrorKind::Adhoc(to_boxed(message)))
    }

    /// Creates a new zone-parse error. See [`ErrorKind::ZoneParse`].
    #[inline(never)]
    #[cold]
    pub(crate) fn zone_parse(message: core::fmt::Arguments<'_>) -> Error {
        Error::from_kind(ErrorKind::ZoneParse(to_boxed(message)))
    }

    /// Creates a new parse-match error. See [`ErrorKind::ParseMatch`].
    #[inline(never)]
    #[cold]
    pub(crate) fn parse_match(message: core::fmt::Arguments<'_>) -> Error {
        Error::from_kind(ErrorKind::ParseMatch(to_boxed(message)))
    }

    /// Creates a new unknown-token error. See [`ErrorKind::UnknownToken`].
    #[inline(never)]
    #[cold]
    pub(crate) fn unknown_token(message: core::fmt::Arguments<'_>) -> Error {
        Error::from_kind(ErrorKind::UnknownToken(to_boxed(message)))
    }

    /// Creates a new field-value error. See [`ErrorKind::FieldValue`].
    #[inline(never)]
    #[cold]
    pub(crate) fn field_value(message: core::fmt::Arguments<'_>) -> Error {
        Error::from_kind(ErrorKind::FieldValue(to_boxed(message)))
    }

    /// Creates a new de-humanize error. See [`ErrorKind::Dehumanize`].
    #[inline(never)]
    #[cold]
    pub(crate) fn dehumanize(message: core::fmt::Arguments<'_>) -> Error {
        Error::from_kind(ErrorKind::Dehumanize(to_boxed(message)))
    }

    /// Creates a new usage error. See [`ErrorKind::Usage`].
    #[inline(never)]
    #[cold]
    pub(crate) fn usage(message: core::fmt::Arguments<'_>) -> Error {
        Error::from_kind(ErrorKind::Usage(to_boxed(message)))
    }

    /// Creates a new error indicating that a `given` value is out of the
    /// specified `min..=max` range. The given `what` label is used in the
    /// error message as a human readable description of what exactly is out
    /// of range. (e.g., "month")
    #[inline(never)]
    #[cold]
    pub(crate) fn range(
        what: &'static str,
        given: impl Into<i128>,
        min: impl Into<i128>,
        max: impl Into<i128>,
    ) -> Error {
        let (given, min, max) = (given.into(), min.into(), max.into());
        Error::from_kind(ErrorKind::FieldValue(
            format!(
                "parameter '{what}' with value {given} is not \
                 in the required range of {min}..={max}",
            )
            .into_boxed_str(),
        ))
    }

    fn from_kind(kind: ErrorKind) -> Error {
        Error { inner: Arc::new(ErrorInner { kind, cause: None }) }
    }

    /// Returns true when the root of this error is a zone-parse failure.
    ///
    /// # Example
    ///
    /// ```
    /// use sundial::Zone;
    ///
    /// assert!(Zone::parse("Mars/Olympus_Mons").unwrap_err().is_zone_parse());
    /// ```
    pub fn is_zone_parse(&self) -> bool {
        matches!(*self.root_kind(), ErrorKind::ZoneParse(_))
    }

    /// Returns true when the root of this error is an input string failing
    /// to match the required pattern.
    ///
    /// # Example
    ///
    /// ```
    /// use sundial::Instant;
    ///
    /// let err = Instant::from_format("blah1998-09-12", "YYYY-MM-DD");
    /// assert!(err.unwrap_err().is_parse_match());
    /// ```
    pub fn is_parse_match(&self) -> bool {
        matches!(*self.root_kind(), ErrorKind::ParseMatch(_))
    }

    /// Returns true when the root of this error is a format token outside
    /// the grammar (or one the active locale can't supply a pattern for).
    pub fn is_unknown_token(&self) -> bool {
        matches!(*self.root_kind(), ErrorKind::UnknownToken(_))
    }

    /// Returns true when the root of this error is an out-of-range or
    /// contradictory field value.
    ///
    /// # Example
    ///
    /// ```
    /// use sundial::{Instant, Zone};
    ///
    /// let err = Instant::from_date(2024, 13, 1, Zone::UTC).unwrap_err();
    /// assert!(err.is_field_value());
    /// ```
    pub fn is_field_value(&self) -> bool {
        matches!(*self.root_kind(), ErrorKind::FieldValue(_))
    }

    /// Returns true when the root of this error is a phrase that could not
    /// be de-humanized.
    pub fn is_dehumanize(&self) -> bool {
        matches!(*self.root_kind(), ErrorKind::Dehumanize(_))
    }

    /// Returns true when the root of this error is API misuse, e.g., a
    /// malformed `bounds` string.
    ///
    /// # Example
    ///
    /// ```
    /// use sundial::{Instant, Zone};
    ///
    /// let a = Instant::from_date(2024, 1, 1, Zone::UTC).unwrap();
    /// let b = Instant::from_date(2024, 2, 1, Zone::UTC).unwrap();
    /// let c = Instant::from_date(2024, 1, 15, Zone::UTC).unwrap();
    /// assert!(c.is_between(&a, &b, "(]").unwrap());
    /// assert!(c.is_between(&a, &b, "<>").unwrap_err().is_usage());
    /// ```
    pub fn is_usage(&self) -> bool {
        matches!(*self.root_kind(), ErrorKind::Usage(_))
    }

    /// Returns true when any error in the causal chain is a parse failure of
    /// some kind (match, token or field value).
    pub fn is_parse(&self) -> bool {
        self.is_parse_match() || self.is_unknown_token() || self.is_field_value()
    }

    /// Attaches `self` as the cause of `consequent` and returns `consequent`.
    pub(crate) fn context_impl(self, consequent: Error) -> Error {
        // An error causal chain is a linked list, not a tree, so the
        // consequent must not already have a cause.
        debug_assert!(consequent.inner.cause.is_none());
        Error {
            inner: Arc::new(ErrorInner {
                kind: match Arc::try_unwrap(consequent.inner) {
                    Ok(inner) => inner.kind,
                    Err(inner) => inner.kind.clone_kind(),
                },
                cause: Some(self),
            }),
        }
    }

    /// Returns the kind at the root of the causal chain.
    fn root_kind(&self) -> &ErrorKind {
        let mut err = self;
        while let Some(ref cause) = err.inner.cause {
            err = cause;
        }
        &err.inner.kind
    }
}

impl ErrorKind {
    /// Clones a kind. Only needed when a shared `Error` gets re-contextual-
    /// ized, which is rare enough that the string copy doesn't matter.
    fn clone_kind(&self) -> ErrorKind {
        match *self {
            ErrorKind::Adhoc(ref m) => ErrorKind::Adhoc(m.clone()),
            ErrorKind::ZoneParse(ref m) => ErrorKind::ZoneParse(m.clone()),
            ErrorKind::ParseMatch(ref m) => ErrorKind::ParseMatch(m.clone()),
            ErrorKind::UnknownToken(ref m) => ErrorKind::UnknownToken(m.clone()),
            ErrorKind::FieldValue(ref m) => ErrorKind::FieldValue(m.clone()),
            ErrorKind::Dehumanize(ref m) => ErrorKind::Dehumanize(m.clone()),
            ErrorKind::Usage(ref m) => ErrorKind::Usage(m.clone()),
        }
    }
}

impl std::error::Error for Error {}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "{}", self.inner.kind.message())?;
        let mut cause = self.inner.cause.as_ref();
        while let Some(err) = cause {
            write!(f, ": {}", err.inner.kind.message())?;
            cause = err.inner.cause.as_ref();
        }
        Ok(())
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if !f.alternate() {
            core::fmt::Display::fmt(self, f)
        } else {
            f.debug_struct("Error")
                .field("kind", &self.inner.kind)
                .field("cause", &self.inner.cause)
                .finish()
        }
    }
}

fn to_boxed(message: core::fmt::Arguments<'_>) -> Box<str> {
    match message.as_str() {
        Some(literal) => Box::from(literal),
        None => message.to_string().into_boxed_str(),
    }
}

/// A macro for constructing an ad hoc `Error` from a format string.
///
/// The kind-specific constructors on `Error` should be preferred at the
/// point where an error *originates*, since they pin the category. `err!`
/// is for context messages layered on top.
macro_rules! err {
    ($($tt:tt)*) => {{
        crate::error::Error::adhoc(format_args!($($tt)*))
    }}
}

pub(crate) use err;

/// A trait for contextualizing error values.
///
/// This makes it easy to contextualize either `Error` or `Result<T, Error>`.
/// Specifically, in the latter case, it absolves one of the need to call
/// `map_err` everywhere one wants to add context to an error.
///
/// This trick was borrowed from `anyhow`.
pub(crate) trait ErrorContext<T> {
    /// Contextualize the given consequent error with this (`self`) error as
    /// the cause.
    ///
    /// This is equivalent to saying that "consequent is caused by self."
    fn context(self, consequent: Error) -> Result<T, Error>;

    /// Like `context`, but hides error construction within a closure.
    ///
    /// This is useful when error construction is potentially "costly" (i.e.,
    /// it allocates). The closure avoids paying the cost of contextual error
    /// creation in the happy path.
    fn with_context(self, consequent: impl FnOnce() -> Error)
        -> Result<T, Error>;
}

impl<T> ErrorContext<T> for Result<T, Error> {
    #[inline(always)]
    fn context(self, consequent: Error) -> Result<T, Error> {
        self.map_err(|err| err.context_impl(consequent))
    }

    #[inline(always)]
    fn with_context(
        self,
        consequent: impl FnOnce() -> Error,
    ) -> Result<T, Error> {
        self.map_err(|err| err.context_impl(consequent()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // We test that our 'Error' type is the size we expect. This isn't an API
    // guarantee, but if the size increases, we really want to make sure we
    // decide to do that intentionally. So this should be a speed bump.
    #[test]
    fn error_size() {
        let expected_size = core::mem::size_of::<usize>();
        assert_eq!(expected_size, core::mem::size_of::<Error>());
    }

    #[test]
    fn chain_renders_outside_in() {
        let root = Error::field_value(format_args!("month 13 is silly"));
        let err: Result<(), Error> = Err(root);
        let err = err.context(err!("while parsing")).unwrap_err();
        assert_eq!(err.to_string(), "while parsing: month 13 is silly");
        assert!(err.is_field_value());
        assert!(!err.is_usage());
    }
}
