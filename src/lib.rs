/*
 * // Copyright (c) Radzivon Bartoshyk 10/2025. All rights reserved.
 * //
 * // Redistribution and use in source and binary forms, with or without modification,
 * // are permitted provided that the following conditions are met:
 * //
 * // 1.  Redistributions of source code must retain the above copyright notice, this
 * // list of conditions and the following disclaimer.
 * //
 * // 2.  Redistributions in binary form must reproduce the above copyright notice,
 * // this list of conditions and the following disclaimer in the documentation
 * // and/or other materials provided with the distribution.
 * //
 * // 3.  Neither the name of the copyright holder nor the names of its
 * // contributors may be used to endorse or promote products derived from
 * // this software without specific prior written permission.
 * //
 * // THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * // AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * // IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * // DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * // FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * // DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * // SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * // CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * // OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * // OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
//! Redundant (à trous) discrete wavelet transform for 1D and 2D signals.
//!
//! The transform omits the subsampling step of a decimated DWT, so every
//! subband keeps the sample count of the input and the decomposition is
//! exactly equivariant under circular shifts — the property that makes it
//! suitable for denoising and feature extraction aligned with the original
//! sampling grid. Signals are treated as periodically extended; the scaling
//! (prototype) filter is supplied by the caller and turned into the analysis
//! lowpass/highpass pair internally.
//!
//! ```
//! use std::borrow::Cow;
//! use std::sync::Arc;
//! use atrous::{Atrous, RdwtExecutor, ScalingFilterProvider};
//!
//! struct Haar;
//!
//! const HAAR: [f64; 2] = [std::f64::consts::FRAC_1_SQRT_2; 2];
//!
//! impl ScalingFilterProvider<f64> for Haar {
//!     fn get_scaling_filter(&self) -> Cow<'_, [f64]> {
//!         Cow::Borrowed(&HAAR)
//!     }
//! }
//!
//! # fn main() -> Result<(), atrous::AtrousError> {
//! let executor = Atrous::make_rdwt_f64(Arc::new(Haar))?;
//! let decomposition = executor.decompose(&[1.0, 2.0, 3.0, 4.0], 1, 4, 1)?;
//! assert_eq!(decomposition.lowpass.len(), 4);
//! assert_eq!(decomposition.highpass.len(), 4);
//! # Ok(())
//! # }
//! ```

use num_traits::MulAdd;
use std::fmt::Debug;
use std::ops::{Add, Mul, Neg};
use std::sync::Arc;

mod convolve;
mod err;
mod filters;
mod layout;
mod logging;
mod mla;
mod rdwt;
mod scratch;

use crate::layout::mat_index;
use crate::rdwt::RdwtHandler;
pub use err::AtrousError;
pub use rdwt::{RdwtExecutor, max_rdwt_levels};
pub use scratch::RdwtScratch;

/// Numeric sample type the transform operates on.
///
/// Implemented for `f32` and `f64`.
pub trait WaveletSample:
    Copy
    + Default
    + Debug
    + Send
    + Sync
    + 'static
    + Add<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
    + MulAdd<Self, Self, Output = Self>
{
}

impl WaveletSample for f32 {}
impl WaveletSample for f64 {}

/// Provides the scaling (prototype) filter coefficients a transform is
/// built from.
///
/// # Type Parameters
/// - `T`: The numeric type of the coefficients (e.g., `f32` or `f64`).
pub trait ScalingFilterProvider<T: ToOwned + Sized>
where
    [T]: ToOwned,
{
    /// Returns the scaling filter coefficients.
    fn get_scaling_filter(&self) -> std::borrow::Cow<'_, [T]>;
}

/// Exact output lengths of a decomposition for a given signal shape.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct RdwtSize {
    /// Element count of the lowpass matrix (equals the signal's).
    pub lowpass_length: usize,
    /// Element count of the highpass matrix across all level blocks.
    pub highpass_length: usize,
}

/// One of the three detail orientations a 2D level block is partitioned
/// into. The first word names the row filter, the second the column filter.
#[derive(Debug, Copy, Clone, Hash, Ord, PartialOrd, Eq, PartialEq)]
pub enum Subband {
    /// Row-lowpass intermediate, highpass filtered along columns.
    LowHigh,
    /// Row-highpass intermediate, lowpass filtered along columns.
    HighLow,
    /// Row-highpass intermediate, highpass filtered along columns.
    HighHigh,
}

impl Subband {
    #[inline]
    fn position(self) -> usize {
        match self {
            Subband::LowHigh => 0,
            Subband::HighLow => 1,
            Subband::HighHigh => 2,
        }
    }
}

/// Result of a redundant decomposition.
///
/// Both matrices are column-major and share the signal's row count. The
/// highpass matrix packs one block of columns per level, finest level
/// first; 2D blocks split further into the three [`Subband`] orientations.
#[derive(Debug)]
pub struct Rdwt<T> {
    /// Approximation subband, same dimensions as the signal.
    pub lowpass: Vec<T>,
    /// Detail subbands of every level, packed contiguously.
    pub highpass: Vec<T>,
    rows: usize,
    cols: usize,
    levels: usize,
}

impl<T> Rdwt<T> {
    pub(crate) fn new(
        lowpass: Vec<T>,
        highpass: Vec<T>,
        rows: usize,
        cols: usize,
        levels: usize,
    ) -> Self {
        Self {
            lowpass,
            highpass,
            rows,
            cols,
            levels,
        }
    }

    /// Row count of the decomposed signal, after orientation
    /// canonicalization (a single-column input is reported as one row).
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Column count of the decomposed signal, after orientation
    /// canonicalization.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of decomposition levels.
    pub fn levels(&self) -> usize {
        self.levels
    }

    /// True when the signal was one-dimensional.
    pub fn is_one_dimensional(&self) -> bool {
        self.rows == 1
    }

    fn block_width(&self) -> usize {
        if self.is_one_dimensional() {
            self.cols
        } else {
            3 * self.cols
        }
    }

    /// The contiguous column block of one level, `1` (finest) through
    /// `levels()` (coarsest). `None` outside that range.
    pub fn level_block(&self, level: usize) -> Option<&[T]> {
        if level == 0 || level > self.levels {
            return None;
        }
        let width = self.block_width();
        let start = mat_index(0, (level - 1) * width, self.rows);
        let end = mat_index(0, level * width, self.rows);
        Some(&self.highpass[start..end])
    }

    /// One detail orientation of a 2D level block. `None` for 1D signals
    /// (their level blocks carry a single unnamed orientation) or an
    /// out-of-range level.
    pub fn subband(&self, level: usize, band: Subband) -> Option<&[T]> {
        if self.is_one_dimensional() {
            return None;
        }
        let block = self.level_block(level)?;
        let width = self.cols * self.rows;
        let start = band.position() * width;
        Some(&block[start..start + width])
    }
}

/// Factory for redundant wavelet transform executors.
///
/// Constructs executors bound to a caller-supplied scaling filter for both
/// single and double precision.
pub struct Atrous {}

impl Atrous {
    fn make_rdwt<T: WaveletSample>(
        provider: Arc<dyn ScalingFilterProvider<T> + Send + Sync>,
    ) -> Result<Arc<dyn RdwtExecutor<T> + Send + Sync>, AtrousError> {
        let prototype = provider.get_scaling_filter();
        Ok(Arc::new(RdwtHandler::new(prototype.as_ref())?))
    }

    /// Creates a redundant transform executor for `f32` signals using a
    /// provided scaling filter.
    ///
    /// # Parameters
    /// - `provider`: Supplies the scaling filter coefficients.
    ///
    /// # Returns
    /// A `Result` containing a boxed `RdwtExecutor<f32>` if successful, or
    /// an [`AtrousError`] if the filter is empty or allocation fails.
    pub fn make_rdwt_f32(
        provider: Arc<dyn ScalingFilterProvider<f32> + Send + Sync>,
    ) -> Result<Arc<dyn RdwtExecutor<f32> + Send + Sync>, AtrousError> {
        Self::make_rdwt(provider)
    }

    /// Creates a redundant transform executor for `f64` signals using a
    /// provided scaling filter.
    ///
    /// Same as [`Self::make_rdwt_f32`], but for double-precision signals.
    pub fn make_rdwt_f64(
        provider: Arc<dyn ScalingFilterProvider<f64> + Send + Sync>,
    ) -> Result<Arc<dyn RdwtExecutor<f64> + Send + Sync>, AtrousError> {
        Self::make_rdwt(provider)
    }
}
