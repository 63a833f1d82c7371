/// A parsed numeric literal.
///
/// Buffers without a decimal point parse as `Int`; buffers with one parse as
/// `Float`. A digit run too long for `i64` widens to `Float` instead of being
/// dropped, so arbitrarily long literals still take part in the comparison.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    /// Parse a tokenizer buffer: ASCII digits plus at most one `.`, grouping
    /// commas already removed. `None` only for buffers outside the
    /// tokenizer's grammar.
    pub(crate) fn parse(buffer: &str) -> Option<Self> {
        if buffer.is_empty() {
            return None;
        }

        if buffer.contains('.') {
            buffer.parse::<f64>().ok().map(Number::Float)
        } else {
            match buffer.parse::<i64>() {
                Ok(n) => Some(Number::Int(n)),
                Err(_) => buffer.parse::<f64>().ok().map(Number::Float),
            }
        }
    }

    /// Numeric value as `f64`, used for ordering candidates.
    pub fn value(self) -> f64 {
        match self {
            Number::Int(n) => n as f64,
            Number::Float(x) => x,
        }
    }

    /// Multiply by an integral scale factor. `Int` stays integral while the
    /// product fits `i64`, otherwise widens to `Float`. A factor of 1 leaves
    /// the value (and its variant) untouched.
    pub(crate) fn scaled_by(self, factor: i64) -> Self {
        if factor == 1 {
            return self;
        }

        match self {
            Number::Int(n) => match n.checked_mul(factor) {
                Some(product) => Number::Int(product),
                None => Number::Float(n as f64 * factor as f64),
            },
            Number::Float(x) => Number::Float(x * factor as f64),
        }
    }
}
