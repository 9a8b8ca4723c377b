// Pseudo-random fixture data: integers, strings, picks, shuffles, dates and item factories.
// Nothing here fails; empty inputs and empty character sets give empty/None results.
use chrono::{DateTime, Utc};
use rand::Rng;
use rand::rngs::ThreadRng;

/// Named character sets accepted by [`Randomizer::random_string`].
pub const CHAR_PRESETS: &[(&str, &str)] = &[
    ("onlyLetters", "abcdefghijklmnopqrstuvwxyz"),
    ("onlyNumbers", "0123456789"),
    ("hex", "0123456789abcdef"),
    (
        "letterAndNumbers",
        "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz",
    ),
    (
        "common",
        "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz~!@-#$",
    ),
];

const ID_CHARS: &str = "0123456789abcdefghijklmnopqrstuvwxyz";

fn preset(name: &str) -> Option<&'static str> {
    CHAR_PRESETS
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, chars)| *chars)
}

/// Types with a fixed, listable set of values (fieldless enums).
pub trait Enumerable: Sized + 'static {
    const VALUES: &'static [Self];
}

#[derive(Debug, Clone)]
pub struct Randomizer<R> {
    rng: R,
}

impl Randomizer<ThreadRng> {
    pub fn thread() -> Self {
        Self { rng: rand::rng() }
    }
}

impl Default for Randomizer<ThreadRng> {
    fn default() -> Self {
        Self::thread()
    }
}

impl<R: Rng> Randomizer<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// `min + round(random() * (max - min))`, rounding half up.
    ///
    /// Rounding rather than flooring gives each endpoint half the weight of
    /// an interior value.
    pub fn n_random(&mut self, min: i64, max: i64) -> i64 {
        let span = max as f64 - min as f64;
        // Full-range spans exceed i64, so the offset is added in i128.
        let offset = (self.rng.random::<f64>() * span + 0.5).floor() as i128;
        let (lo, hi) = (min.min(max) as i128, min.max(max) as i128);
        (min as i128 + offset).clamp(lo, hi) as i64
    }

    /// Builds `len` characters sampled with replacement from a preset
    /// (see [`CHAR_PRESETS`]) or, for an unknown name, from `chars` itself.
    pub fn random_string(&mut self, len: usize, chars: &str) -> String {
        let allowed: Vec<char> = match preset(chars) {
            Some(set) => set.chars().collect(),
            None => {
                log::trace!("random_string: `{chars}` is not a preset, using it literally");
                chars.chars().collect()
            }
        };
        if allowed.is_empty() {
            log::debug!("random_string: empty character set");
            return String::new();
        }
        let max_pos = allowed.len() as i64 - 1;
        (0..len)
            .map(|_| allowed[self.n_random(0, max_pos) as usize])
            .collect()
    }

    pub fn random_id(&mut self) -> String {
        self.random_string(9, ID_CHARS)
    }

    pub fn random_item<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        let max_pos = items.len().saturating_sub(1) as i64;
        items.get(self.n_random(0, max_pos) as usize)
    }

    pub fn random_enum_value<E: Enumerable + Copy>(&mut self) -> Option<E> {
        self.random_item(E::VALUES).copied()
    }

    /// Tags each item with a random key and sorts by it.
    pub fn shuffle_items<T: Clone>(&mut self, items: &[T]) -> Vec<T> {
        let mut decorated: Vec<(f64, &T)> = items
            .iter()
            .map(|it| (self.rng.random::<f64>(), it))
            .collect();
        decorated.sort_by(|a, b| a.0.total_cmp(&b.0));
        decorated.into_iter().map(|(_, it)| it.clone()).collect()
    }

    pub fn random_date(&mut self, min: DateTime<Utc>, max: DateTime<Utc>) -> DateTime<Utc> {
        let ms = self.n_random(min.timestamp_millis(), max.timestamp_millis());
        DateTime::from_timestamp_millis(ms).unwrap_or(min)
    }

    /// Calls `factory(0..n)` in order, with `n = n_random(min, max)`.
    /// A missing or zero `max` means exactly `min` items.
    pub fn create_n_items<T>(
        &mut self,
        factory: impl FnMut(usize) -> T,
        min: i64,
        max: Option<i64>,
    ) -> Vec<T> {
        let max = max.filter(|m| *m != 0).unwrap_or(min);
        let len = usize::try_from(self.n_random(min, max)).unwrap_or(0);
        (0..len).map(factory).collect()
    }

    /// Calls `f(i)` `n_random(max(min, 1), max(max, min))` times. The usual
    /// call is `min = 1, max = 0`, which runs `f` once.
    pub fn exec_n_times(&mut self, mut f: impl FnMut(usize), min: i64, max: i64) {
        let times = self.n_random(min.max(1), max.max(min));
        for i in 0..usize::try_from(times).unwrap_or(0) {
            f(i);
        }
    }
}

pub fn n_random(min: i64, max: i64) -> i64 {
    Randomizer::thread().n_random(min, max)
}

pub fn random_string(len: usize, chars: &str) -> String {
    Randomizer::thread().random_string(len, chars)
}

pub fn random_id() -> String {
    Randomizer::thread().random_id()
}

pub fn random_item<T>(items: &[T]) -> Option<&T> {
    Randomizer::thread().random_item(items)
}

pub fn random_enum_value<E: Enumerable + Copy>() -> Option<E> {
    Randomizer::thread().random_enum_value()
}

pub fn shuffle_items<T: Clone>(items: &[T]) -> Vec<T> {
    Randomizer::thread().shuffle_items(items)
}

pub fn random_date(min: DateTime<Utc>, max: DateTime<Utc>) -> DateTime<Utc> {
    Randomizer::thread().random_date(min, max)
}

pub fn create_n_items<T>(factory: impl FnMut(usize) -> T, min: i64, max: Option<i64>) -> Vec<T> {
    Randomizer::thread().create_n_items(factory, min, max)
}

pub fn exec_n_times(f: impl FnMut(usize), min: i64, max: i64) {
    Randomizer::thread().exec_n_times(f, min, max)
}
