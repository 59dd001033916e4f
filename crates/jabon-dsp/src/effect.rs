//! Core Effect trait and related types.
//!
//! The [`Effect`] trait is the common interface for every per-sample
//! processor in the crate: single-sample and block-based processing,
//! sample-rate changes, and state reset.
//!
//! ## Design Decisions
//!
//! - **Mono processing**: single `f32` input/output. The jabón signal path
//!   is mono-summed; stereo routing happens in the engine, which emits the
//!   same sample on both channels.
//!
//! - **Object-safe**: `dyn Effect` is allowed for runtime composition,
//!   though the engine uses static dispatch throughout.
//!
//! - **No allocations**: all methods are callable from a real-time audio
//!   context.

/// Core trait for all audio processors.
///
/// # Example
///
/// ```rust
/// use jabon_dsp::Effect;
///
/// struct Gain {
///     gain: f32,
/// }
///
/// impl Effect for Gain {
///     fn process(&mut self, input: f32) -> f32 {
///         input * self.gain
///     }
///
///     fn set_sample_rate(&mut self, _sample_rate: f32) {}
///
///     fn reset(&mut self) {}
/// }
/// ```
pub trait Effect {
    /// Process a single sample.
    ///
    /// For stateful processors (filters, oscillators) this advances the
    /// internal state by one sample.
    ///
    /// # Arguments
    /// * `input` - Input sample, typically in range [-1.0, 1.0]
    fn process(&mut self, input: f32) -> f32;

    /// Process a block of samples.
    ///
    /// Default implementation calls `process()` for each sample.
    ///
    /// # Panics
    /// Default implementation debug-panics if `input.len() != output.len()`
    fn process_block(&mut self, input: &[f32], output: &mut [f32]) {
        debug_assert_eq!(
            input.len(),
            output.len(),
            "Input and output buffers must have same length"
        );
        for (inp, out) in input.iter().zip(output.iter_mut()) {
            *out = self.process(*inp);
        }
    }

    /// Process a block of samples in-place.
    fn process_block_inplace(&mut self, buffer: &mut [f32]) {
        for sample in buffer.iter_mut() {
            *sample = self.process(*sample);
        }
    }

    /// Update the sample rate.
    ///
    /// Processors recalculate any sample-rate-dependent coefficients
    /// (filter coefficients, LFO increments).
    fn set_sample_rate(&mut self, sample_rate: f32);

    /// Reset internal state.
    ///
    /// Clears delay lines and oscillator phase without changing parameters.
    fn reset(&mut self);
}

/// Extension trait for chaining effects.
pub trait EffectExt: Effect + Sized {
    /// Chain this effect with another, creating a composite effect.
    ///
    /// The output of `self` feeds into the input of `next`.
    ///
    /// # Example
    /// ```rust,ignore
    /// let sab = tremolo.chain(soap);
    /// ```
    fn chain<E: Effect>(self, next: E) -> Chain<Self, E> {
        Chain {
            first: self,
            second: next,
        }
    }
}

// Blanket implementation for all Effects
impl<T: Effect> EffectExt for T {}

/// Two effects chained in series.
///
/// Created by [`EffectExt::chain`]. The first effect's output feeds
/// into the second effect's input.
pub struct Chain<A, B> {
    first: A,
    second: B,
}

impl<A: Effect, B: Effect> Effect for Chain<A, B> {
    #[inline]
    fn process(&mut self, input: f32) -> f32 {
        let mid = self.first.process(input);
        self.second.process(mid)
    }

    fn process_block(&mut self, input: &[f32], output: &mut [f32]) {
        self.first.process_block(input, output);
        self.second.process_block_inplace(output);
    }

    fn set_sample_rate(&mut self, sample_rate: f32) {
        self.first.set_sample_rate(sample_rate);
        self.second.set_sample_rate(sample_rate);
    }

    fn reset(&mut self) {
        self.first.reset();
        self.second.reset();
    }
}

impl<A, B> Chain<A, B> {
    /// Get a reference to the first effect in the chain.
    pub fn first(&self) -> &A {
        &self.first
    }

    /// Get a mutable reference to the first effect in the chain.
    pub fn first_mut(&mut self) -> &mut A {
        &mut self.first
    }

    /// Get a reference to the second effect in the chain.
    pub fn second(&self) -> &B {
        &self.second
    }

    /// Get a mutable reference to the second effect in the chain.
    pub fn second_mut(&mut self) -> &mut B {
        &mut self.second
    }
}
