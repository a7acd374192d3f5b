//! Strings mit fester Kapazität
//!
//! Ersetzt die festen `char[N]`-Puffer der Firmware. Jeder Schreibzugriff
//! prüft die Kapazität explizit: ein Überlauf wird als [`CapacityError`]
//! gemeldet und der bisherige Inhalt bleibt unverändert.

use core::fmt;
use core::ops::Deref;

use heapless::String;

/// Fehler wenn ein Schreibzugriff die Kapazität überschreiten würde
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CapacityError {
    /// Kapazität des Ziels (Bytes bzw. Einträge)
    pub capacity: usize,
    /// Benötigte Größe nach dem Schreibzugriff
    pub required: usize,
}

/// UTF-8 String mit maximal `N` Bytes
///
/// `N` entspricht der deklarierten Puffergröße; ein Platz für den
/// Null-Terminator wird nicht reserviert.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoundedString<const N: usize> {
    inner: String<N>,
}

impl<const N: usize> BoundedString<N> {
    /// Leerer String
    pub const fn new() -> Self {
        Self {
            inner: String::new(),
        }
    }

    /// Kapazität in Bytes
    pub const fn capacity(&self) -> usize {
        N
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Noch freie Bytes
    pub fn remaining(&self) -> usize {
        N - self.inner.len()
    }

    pub fn as_str(&self) -> &str {
        self.inner.as_str()
    }

    pub fn clear(&mut self) {
        self.inner.clear();
    }

    /// Hängt `text` an
    ///
    /// # Fehlerbehandlung
    /// Gibt `CapacityError` zurück wenn `text` nicht mehr passt. Es wird
    /// dann nichts geschrieben.
    pub fn push_str(&mut self, text: &str) -> Result<(), CapacityError> {
        let required = self.inner.len() + text.len();
        if required > N {
            return Err(CapacityError {
                capacity: N,
                required,
            });
        }
        self.inner.push_str(text).map_err(|_| CapacityError {
            capacity: N,
            required,
        })
    }

    pub fn push(&mut self, c: char) -> Result<(), CapacityError> {
        let mut buf = [0u8; 4];
        self.push_str(c.encode_utf8(&mut buf))
    }

    /// Ersetzt den Inhalt durch `text`
    pub fn set(&mut self, text: &str) -> Result<(), CapacityError> {
        if text.len() > N {
            return Err(CapacityError {
                capacity: N,
                required: text.len(),
            });
        }
        self.inner.clear();
        self.push_str(text)
    }
}

impl<const N: usize> TryFrom<&str> for BoundedString<N> {
    type Error = CapacityError;

    fn try_from(text: &str) -> Result<Self, Self::Error> {
        let mut s = Self::new();
        s.set(text)?;
        Ok(s)
    }
}

impl<const N: usize> Deref for BoundedString<N> {
    type Target = str;

    fn deref(&self) -> &str {
        self.as_str()
    }
}

impl<const N: usize> fmt::Write for BoundedString<N> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.push_str(s).map_err(|_| fmt::Error)
    }
}

impl<const N: usize> fmt::Display for BoundedString<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<const N: usize> PartialEq<str> for BoundedString<N> {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl<const N: usize> PartialEq<&str> for BoundedString<N> {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

// ============================================================================
// serde / defmt Implementations (optional features)
// ============================================================================

#[cfg(feature = "serde")]
impl<const N: usize> serde::Serialize for BoundedString<N> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de, const N: usize> serde::Deserialize<'de> for BoundedString<N> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct BoundedVisitor<const M: usize>;

        impl<const M: usize> serde::de::Visitor<'_> for BoundedVisitor<M> {
            type Value = BoundedString<M>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "a string of at most {} bytes", M)
            }

            fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<Self::Value, E> {
                BoundedString::try_from(v).map_err(|_| E::invalid_length(v.len(), &self))
            }
        }

        deserializer.deserialize_str(BoundedVisitor::<N>)
    }
}

#[cfg(feature = "defmt")]
impl<const N: usize> defmt::Format for BoundedString<N> {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{=str}", self.as_str())
    }
}
