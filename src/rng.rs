/// Seed for deterministic generation. Numeric seeds become the PRNG state
/// directly (wrapped to 32 bits); text seeds are hashed with FNV-1a first,
/// so `Number(1)` and `Text("1")` produce different streams.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Seed {
    Number(u32),
    Text(String),
}

impl Seed {
    pub(crate) fn resolve(&self) -> u32 {
        match self {
            Seed::Number(n) => *n,
            Seed::Text(s) => fnv1a(s),
        }
    }
}

impl From<u32> for Seed {
    fn from(n: u32) -> Self { Seed::Number(n) }
}

impl From<&str> for Seed {
    fn from(s: &str) -> Self { Seed::Text(s.to_string()) }
}

impl From<String> for Seed {
    fn from(s: String) -> Self { Seed::Text(s) }
}

/// 32-bit FNV-1a over the string's bytes.
pub fn fnv1a(s: &str) -> u32 {
    let mut h: u32 = 0x811C_9DC5;
    for b in s.bytes() {
        h ^= u32::from(b);
        h = h.wrapping_mul(16_777_619);
    }
    h
}

/// Mulberry32 PRNG. One draw advances the state by 0x6D2B79F5 and mixes;
/// all arithmetic wraps at 32 bits so the stream is reproducible bit for
/// bit across platforms.
#[derive(Clone, Debug)]
pub struct Rng {
    state: u32,
}

impl Rng {
    /// Build from an optional seed; `None` pulls 32 bits of system entropy.
    pub fn new(seed: Option<&Seed>) -> Self {
        let state = match seed {
            Some(s) => s.resolve(),
            None => entropy_seed(),
        };
        Self { state }
    }

    fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_add(0x6D2B_79F5);
        let mut t = self.state;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        t ^ (t >> 14)
    }

    /// Uniform float in `[0, 1)`.
    pub fn next_float(&mut self) -> f64 {
        f64::from(self.next_u32()) / 4_294_967_296.0
    }

    /// Uniform integer over the inclusive range, from one float draw.
    pub fn next_int(&mut self, min: i32, max: i32) -> i32 {
        (self.next_float() * f64::from(max - min + 1)) as i32 + min
    }

    /// Fisher-Yates shuffle into a fresh vector; the input is untouched.
    pub fn shuffle<T: Clone>(&mut self, items: &[T]) -> Vec<T> {
        let mut a = items.to_vec();
        for i in (1..a.len()).rev() {
            let j = (self.next_float() * (i as f64 + 1.0)) as usize;
            a.swap(i, j);
        }
        a
    }
}

fn entropy_seed() -> u32 {
    let mut buf = [0u8; 4];
    getrandom::getrandom(&mut buf).expect("system entropy unavailable");
    u32::from_le_bytes(buf)
}
