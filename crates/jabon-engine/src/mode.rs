//! Operating modes and the encoder-driven mode selector.

/// The three operating modes, in encoder order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    /// SOAP bandpass with tremolo in front (the composite signature sound).
    #[default]
    Sab,
    /// Reference SVF bandpass, for auditioning the alternative topology.
    Bnp,
    /// Pure tremolo.
    Trm,
}

impl Mode {
    /// Numeric position in the encoder cycle (SAB = 0, BNP = 1, TRM = 2).
    #[inline]
    pub fn index(self) -> u8 {
        match self {
            Mode::Sab => 0,
            Mode::Bnp => 1,
            Mode::Trm => 2,
        }
    }

    /// Mode at a given cycle position, wrapping modulo 3.
    #[inline]
    pub fn from_index(index: i32) -> Self {
        match index.rem_euclid(3) {
            0 => Mode::Sab,
            1 => Mode::Bnp,
            _ => Mode::Trm,
        }
    }

    /// Advance by a signed encoder delta, wrapping in both directions.
    ///
    /// `rem_euclid` makes the `((m + delta) mod 3 + 3) mod 3` dance from the
    /// hardware unit unnecessary.
    #[inline]
    pub fn step(self, delta: i32) -> Self {
        Mode::from_index(i32::from(self.index()) + delta)
    }
}

/// Which of the two SAB renditions the engine runs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SabStyle {
    /// `(soap(tremolo(x)) + 0.1·x) / 2` - tremolo applied to the selected
    /// band, blended with a touch of dry. The canonical form.
    #[default]
    Composite,
    /// `3·soap(x)` - the bare bandpass with makeup gain, no tremolo, no dry.
    Direct,
}
