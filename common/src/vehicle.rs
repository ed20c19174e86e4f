use std::fmt;

/// A vehicle as described by the specification catalog.
///
/// Records are immutable once built; the registry hands them out behind an
/// `Arc` so every caller observes the same value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Vehicle {
    id: String,
    make: String,
    model: String,
    year: i32,
}

impl Vehicle {
    pub fn new(
        id: impl Into<String>,
        make: impl Into<String>,
        model: impl Into<String>,
        year: i32,
    ) -> Self {
        Self {
            id: id.into(),
            make: make.into(),
            model: model.into(),
            year,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn make(&self) -> &str {
        &self.make
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn year(&self) -> i32 {
        self.year
    }
}

impl fmt::Display for Vehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} (#{})", self.year, self.make, self.model, self.id)
    }
}
