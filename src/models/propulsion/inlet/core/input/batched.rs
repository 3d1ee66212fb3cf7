/// A per-condition input that is either shared by every element or given per element.
#[derive(Debug, Clone, PartialEq)]
pub enum Batched<T> {
    /// One value broadcast to every element.
    Scalar(T),

    /// One value per element.
    Array(Vec<T>),
}

impl<T: Copy> Batched<T> {
    /// Returns the array length, or `None` for a scalar.
    #[must_use]
    pub fn array_len(&self) -> Option<usize> {
        match self {
            Self::Scalar(_) => None,
            Self::Array(values) => Some(values.len()),
        }
    }

    /// Returns the value for element `index`.
    ///
    /// The caller has already checked `index` against the resolved batch length.
    pub(crate) fn at(&self, index: usize) -> T {
        match self {
            Self::Scalar(value) => *value,
            Self::Array(values) => values[index],
        }
    }
}

impl<T> From<Vec<T>> for Batched<T> {
    fn from(values: Vec<T>) -> Self {
        Self::Array(values)
    }
}
