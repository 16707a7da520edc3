pub use jobboard_utils_derive::Patch;

/// A single field of a patch: either a new value or no change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PatchValue<T> {
    Update(T),
    #[default]
    Unchanged,
}

impl<T> PatchValue<T> {
    pub fn update(self, old_value: T) -> T {
        match self {
            Self::Update(new_value) => new_value,
            Self::Unchanged => old_value,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> PatchValue<U> {
        match self {
            Self::Update(x) => PatchValue::Update(f(x)),
            Self::Unchanged => PatchValue::Unchanged,
        }
    }

    pub fn as_ref(&self) -> PatchValue<&T> {
        match self {
            Self::Update(x) => PatchValue::Update(x),
            Self::Unchanged => PatchValue::Unchanged,
        }
    }

    pub fn is_update(&self) -> bool {
        matches!(self, Self::Update(_))
    }

    pub fn minimize(self, old_value: &T) -> Self
    where
        T: PartialEq,
    {
        match self {
            Self::Update(new_value) if &new_value == old_value => Self::Unchanged,
            other => other,
        }
    }
}

impl<T> From<Option<T>> for PatchValue<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(x) => PatchValue::Update(x),
            None => PatchValue::Unchanged,
        }
    }
}

pub trait Patch {
    type Patch;

    /// Returns a copy of `self` with every updated field of `patch` applied.
    fn update(self, patch: Self::Patch) -> Self;
}
