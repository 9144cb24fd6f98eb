/*!
Support for token-based formatting and parsing.

The same closed token grammar drives both directions, so a format string
that renders an [`Instant`](crate::Instant) can usually read one back. The
grammar is the Moment-style family:

| Family | Tokens | Example |
| ------ | ------ | ------- |
| Year | `YYYY`, `YY` | `2013`, `13` |
| Month | `MMMM`, `MMM`, `MM`, `M` | `January`, `Jan`, `01`, `1` |
| Day of month | `DD`, `D`, `Do` | `05`, `5`, `5th` |
| Day of year | `DDDD`, `DDD` | `034`, `34` |
| Day of week | `dddd`, `ddd`, `d` | `Monday`, `Mon`, `1` |
| Hour | `HH`, `H`, `hh`, `h` | `23`, `23`, `11`, `11` |
| Minute | `mm`, `m` | `09`, `9` |
| Second | `ss`, `s` | `07`, `7` |
| Subsecond | `S`…`SSSSSS` | `1`…`123456` |
| Meridian | `a`, `A` | `pm`, `PM` |
| Offset | `Z`, `ZZ`, `ZZZ` | `+0500`, `+05:00`, `EST` |
| Epoch | `X`, `x` | `1591328104`, `1591328104308000` |
| ISO week date | `W` | `2011-W05-4` |
| Literal | `[...]` | `[on] YYYY` → `on 2013` |

Unrecognized text in a format string is matched (or emitted) verbatim, so
separators like `T` need no escaping; brackets exist for text that would
otherwise scan as tokens.

When parsing, the pattern does not need to span the whole input, but it
must sit on whitespace-ish boundaries: `blah 2013-05-05 blah` parses with
`YYYY-MM-DD` while `blah2013-05-05` does not. A single punctuation
character may touch either end, so `(2013-05-05)` is fine. A trailing `Z`
on the input is tolerated even when the format has no offset token.

Compiled formats can be cached. The cache is keyed by `(format, locale)`
and disabled by default; see [`set_format_cache_capacity`].
*/

use std::{
    collections::HashMap,
    collections::VecDeque,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc, Mutex,
    },
};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::{
    error::{err, Error, ErrorContext},
    locale::Locale,
};

pub(crate) mod format;
pub(crate) mod iso;
pub(crate) mod parse;
#[cfg(feature = "serde")]
pub(crate) mod serde;
pub(crate) mod token;

use self::token::{tokenize, Token};

/// A tokenized format with its input-matching regex.
#[derive(Debug)]
pub(crate) struct Compiled {
    pub(crate) tokens: Vec<Token>,
    pub(crate) re: Regex,
}

/// Compiles a format for the given locale, consulting the cache when it
/// is enabled.
pub(crate) fn compile(
    format: &str,
    locale: &'static dyn Locale,
) -> Result<Arc<Compiled>, Error> {
    let capacity = CACHE_CAPACITY.load(Ordering::Relaxed);
    if capacity == 0 {
        return Ok(Arc::new(compile_uncached(format, locale)?));
    }

    let key = (format.to_string(), locale.names()[0].to_string());
    {
        let mut cache = CACHE.lock().expect("format cache lock poisoned");
        if let Some(compiled) = cache.get(&key) {
            return Ok(compiled);
        }
    }
    // Compiling outside the lock means two racing callers may both do the
    // work; the second insert wins and both results are equivalent.
    let compiled = Arc::new(compile_uncached(format, locale)?);
    let mut cache = CACHE.lock().expect("format cache lock poisoned");
    cache.insert(capacity, key, Arc::clone(&compiled));
    Ok(compiled)
}

fn compile_uncached(
    format: &str,
    locale: &'static dyn Locale,
) -> Result<Compiled, Error> {
    let tokens = tokenize(format);
    let mut pattern = String::new();
    for token in &tokens {
        let fragment = token
            .pattern(locale)
            .with_context(|| err!("invalid format string {format:?}"))?;
        if token.captures() {
            pattern.push('(');
            pattern.push_str(&fragment);
            pattern.push(')');
        } else {
            pattern.push_str(&fragment);
        }
    }
    // An input may carry a trailing `Z` the format says nothing about.
    pattern.push_str("Z?");
    let re = Regex::new(&pattern).map_err(|regex_err| {
        // Only reachable through a malformed locale-supplied fragment.
        err!(
            "format {format:?} produced an unusable pattern: {regex_err}",
        )
    })?;
    Ok(Compiled { tokens, re })
}

/// The number of compiled formats kept. Zero disables the cache.
static CACHE_CAPACITY: AtomicUsize = AtomicUsize::new(0);

static CACHE: Lazy<Mutex<Cache>> = Lazy::new(|| {
    Mutex::new(Cache { map: HashMap::new(), order: VecDeque::new() })
});

type CacheKey = (String, String);

/// A small LRU over compiled formats. Guarded by a mutex; contention is
/// bounded by how briefly the lock is held (lookup or insert, never a
/// compile).
struct Cache {
    map: HashMap<CacheKey, Arc<Compiled>>,
    order: VecDeque<CacheKey>,
}

impl Cache {
    fn get(&mut self, key: &CacheKey) -> Option<Arc<Compiled>> {
        let compiled = self.map.get(key).cloned()?;
        if let Some(pos) = self.order.iter().position(|k| k == key) {
            let key = self.order.remove(pos).expect("position is in range");
            self.order.push_back(key);
        }
        Some(compiled)
    }

    fn insert(
        &mut self,
        capacity: usize,
        key: CacheKey,
        compiled: Arc<Compiled>,
    ) {
        while self.map.len() >= capacity {
            let Some(oldest) = self.order.pop_front() else { break };
            self.map.remove(&oldest);
        }
        self.order.push_back(key.clone());
        self.map.insert(key, compiled);
    }

    fn clear(&mut self) {
        self.map.clear();
        self.order.clear();
    }
}

/// Sets the number of compiled `(format, locale)` pairs the crate keeps
/// in its shared cache.
///
/// The default is `0`, which disables caching entirely: every parse
/// compiles its format anew. Shrinking the capacity drops the cache's
/// existing contents.
///
/// # Example
///
/// ```
/// sundial::set_format_cache_capacity(64);
/// # sundial::set_format_cache_capacity(0);
/// ```
pub fn set_format_cache_capacity(capacity: usize) {
    let previous = CACHE_CAPACITY.swap(capacity, Ordering::Relaxed);
    if capacity < previous {
        CACHE.lock().expect("format cache lock poisoned").clear();
    }
}

#[cfg(test)]
mod tests {
    use crate::locale;

    use super::*;

    #[test]
    fn compile_produces_group_per_capturing_token() {
        let compiled = compile("YYYY-MM-DD", locale::default()).unwrap();
        assert_eq!(compiled.re.captures_len(), 4); // group 0 + three tokens
    }

    #[test]
    fn cache_eviction() {
        // Exercise the LRU directly rather than through the global, so
        // this test doesn't race with other tests compiling formats.
        let mut cache = Cache { map: HashMap::new(), order: VecDeque::new() };
        let compiled = |fmt: &str| {
            Arc::new(compile_uncached(fmt, locale::default()).unwrap())
        };
        let key = |fmt: &str| (fmt.to_string(), "en".to_string());

        cache.insert(2, key("YYYY"), compiled("YYYY"));
        cache.insert(2, key("MM"), compiled("MM"));
        assert!(cache.get(&key("YYYY")).is_some());
        // "YYYY" was just touched, so "MM" is the eviction victim.
        cache.insert(2, key("DD"), compiled("DD"));
        assert!(cache.get(&key("YYYY")).is_some());
        assert!(cache.get(&key("MM")).is_none());
        assert!(cache.get(&key("DD")).is_some());
    }
}
