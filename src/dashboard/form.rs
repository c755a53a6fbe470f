//! Text-backed numeric forms with lenient coercion.
//!
//! Inputs are kept exactly as typed. Numbers are only produced at submission
//! time, and anything that is empty, unparsable or non-finite counts as `0`.

/// Static description of one numeric input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    /// Stable identifier, also used as the egui widget id.
    pub key: &'static str,
    pub label: &'static str,
    /// One-line help shown on hover.
    pub description: &'static str,
}

/// Raw text for a fixed, ordered set of fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormState {
    fields: &'static [FieldSpec],
    values: Vec<String>,
}

impl FormState {
    /// A form with every field blank.
    pub fn empty(fields: &'static [FieldSpec]) -> Self {
        Self {
            fields,
            values: vec![String::new(); fields.len()],
        }
    }

    /// A form seeded with initial text; missing trailing values stay blank.
    pub fn with_values<I, S>(fields: &'static [FieldSpec], values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut form = Self::empty(fields);
        for (slot, value) in form.values.iter_mut().zip(values) {
            *slot = value.into();
        }
        form
    }

    pub fn fields(&self) -> &'static [FieldSpec] {
        self.fields
    }

    /// Current text for `key`.
    pub fn value(&self, key: &str) -> Option<&str> {
        self.index_of(key).map(|index| self.values[index].as_str())
    }

    /// Replace the text for `key`. Returns `false` for unknown keys.
    pub fn set(&mut self, key: &str, text: impl Into<String>) -> bool {
        match self.index_of(key) {
            Some(index) => {
                self.values[index] = text.into();
                true
            }
            None => false,
        }
    }

    /// Mutable text buffer for the field at `index`, for binding to an input widget.
    pub fn text_mut(&mut self, index: usize) -> Option<&mut String> {
        self.values.get_mut(index)
    }

    /// Coerced value of the field at `index` (`0` when out of range).
    pub fn number(&self, index: usize) -> f64 {
        self.values
            .get(index)
            .map(|text| parse_lenient(text))
            .unwrap_or(0.0)
    }

    /// True when the field has text that will be sent as `0` instead.
    pub fn is_coerced(&self, index: usize) -> bool {
        self.values.get(index).is_some_and(|text| is_coerced(text))
    }

    /// Keys of all fields whose text will be coerced to `0`.
    pub fn coerced_keys(&self) -> Vec<&'static str> {
        self.fields
            .iter()
            .zip(&self.values)
            .filter(|(_, text)| is_coerced(text))
            .map(|(field, _)| field.key)
            .collect()
    }

    fn index_of(&self, key: &str) -> Option<usize> {
        self.fields.iter().position(|field| field.key == key)
    }
}

/// Value of the leading number in `text`, falling back to `0`.
///
/// Reads the longest decimal prefix after trimming, so `"12abc"` is `12` and
/// `"1,500"` is `1`. No prefix or a non-finite value gives `0`.
pub fn parse_lenient(text: &str) -> f64 {
    leading_number(text.trim()).map_or(0.0, |(value, _)| value)
}

/// Whether non-blank `text` is not sent exactly as typed: either nothing
/// numeric leads it or trailing characters are dropped.
pub fn is_coerced(text: &str) -> bool {
    let trimmed = text.trim();
    !trimmed.is_empty() && leading_number(trimmed).is_none_or(|(_, len)| len < trimmed.len())
}

/// Finite value of the leading number in `text` and its byte length.
fn leading_number(text: &str) -> Option<(f64, usize)> {
    let len = numeric_prefix_len(text.as_bytes());
    if len == 0 {
        return None;
    }
    text[..len]
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .map(|value| (value, len))
}

/// Length of `[+-]digits[.digits][(e|E)[+-]digits]` at the start of `bytes`.
fn numeric_prefix_len(bytes: &[u8]) -> usize {
    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int_digits = digit_run(&bytes[end..]);
    end += int_digits;
    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = digit_run(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return 0;
    }
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exponent = end + 1;
        if matches!(bytes.get(exponent), Some(b'+' | b'-')) {
            exponent += 1;
        }
        let exponent_digits = digit_run(&bytes[exponent..]);
        if exponent_digits > 0 {
            end = exponent + exponent_digits;
        }
    }
    end
}

fn digit_run(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|byte| byte.is_ascii_digit()).count()
}
