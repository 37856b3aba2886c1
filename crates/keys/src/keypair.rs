use std::fmt;

/// Node keypair in the textual form printed by `genkeys`.
///
/// A keypair with both halves empty is the "no keys obtained" sentinel, see [`Keypair::empty`].
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Keypair {
    private: String,
    public: String,
}

impl Keypair {
    pub fn new(private: impl Into<String>, public: impl Into<String>) -> Self {
        Self {
            private: private.into(),
            public: public.into(),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn private(&self) -> &str {
        &self.private
    }

    pub fn public(&self) -> &str {
        &self.public
    }

    pub fn is_empty(&self) -> bool {
        self.private.is_empty() && self.public.is_empty()
    }

    /// Both halves are present.
    pub fn is_valid(&self) -> bool {
        !self.private.is_empty() && !self.public.is_empty()
    }
}

// Private key never goes into logs through `{:?}`
impl fmt::Debug for Keypair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Keypair")
            .field("private", &if self.private.is_empty() { "" } else { "<redacted>" })
            .field("public", &self.public)
            .finish()
    }
}
