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
use crate::convolve::periodic_convolve_pair;
use crate::err::{AtrousError, try_vec};
use crate::filters::{AnalysisPair, analysis_pair};
use crate::layout::mat_index;
use crate::logging::verbose_log;
use crate::scratch::RdwtScratch;
use crate::{Rdwt, RdwtSize, WaveletSample};

/// Trait for performing the **redundant (à trous) discrete wavelet
/// transform** on 1D and 2D signals.
///
/// The transform omits the subsampling step of a decimated DWT, so every
/// subband keeps the sample count of the input. Each level filters rows and,
/// for 2D signals, columns of the running approximation with a stride that
/// doubles per level; the signal is treated as periodically extended, which
/// makes the decomposition exactly equivariant under circular shifts.
pub trait RdwtExecutor<T> {
    /// Computes the decomposition, allocating the outputs and scratch.
    ///
    /// # Parameters
    /// - `signal`: `rows * cols` samples in column-major order. A single
    ///   column with `rows > 1` is treated as a row vector of `rows` samples.
    /// - `rows`, `cols`: Signal dimensions, both at least 1.
    /// - `levels`: Number of decomposition levels; every transformed
    ///   dimension must be divisible by `2^levels`. Zero is legal and yields
    ///   the signal itself as the lowpass output.
    ///
    /// # Returns
    /// An [`Rdwt`] holding the lowpass matrix (same dimensions as the
    /// signal) and the highpass matrix (`cols * levels` columns for 1D
    /// signals, `3 * cols * levels` for 2D), or an [`AtrousError`] if the
    /// inputs violate the contract or allocation fails.
    fn decompose(
        &self,
        signal: &[T],
        rows: usize,
        cols: usize,
        levels: usize,
    ) -> Result<Rdwt<T>, AtrousError>;

    /// Computes the decomposition into preallocated buffers.
    ///
    /// This is a low-level API intended for performance-sensitive code where
    /// memory reuse is required. No allocations are performed.
    ///
    /// # Parameters
    /// - `signal`, `rows`, `cols`, `levels`: As in [`Self::decompose`].
    /// - `lowpass`: Exactly `rows * cols` elements; receives the
    ///   approximation subband, overwritten level by level.
    /// - `highpass`: Exactly [`Self::rdwt_size`]'s `highpass_length`
    ///   elements; receives the per-level detail blocks, finest level first.
    /// - `scratch`: Working buffers from [`RdwtScratch::new`]; any scratch
    ///   whose [`RdwtScratch::fits`] holds for these dimensions is accepted.
    ///
    /// # Returns
    /// - `Ok(())` on success.
    /// - `Err(AtrousError)` if buffer sizes, dimensions, or levels are
    ///   invalid.
    #[allow(clippy::too_many_arguments)]
    fn decompose_into(
        &self,
        signal: &[T],
        rows: usize,
        cols: usize,
        levels: usize,
        lowpass: &mut [T],
        highpass: &mut [T],
        scratch: &mut RdwtScratch<T>,
    ) -> Result<(), AtrousError>;

    /// Returns the output lengths for a decomposition of the given shape.
    ///
    /// # Returns
    /// The exact element counts of the lowpass and highpass matrices, or
    /// [`AtrousError::Overflow`] if they do not fit a `usize`.
    fn rdwt_size(
        &self,
        rows: usize,
        cols: usize,
        levels: usize,
    ) -> Result<RdwtSize, AtrousError>;

    /// Returns the number of coefficients in the underlying scaling filter.
    fn filter_length(&self) -> usize;
}

/// Deepest level count the dimension rule allows for a `rows x cols` signal.
///
/// Every transformed dimension must be divisible by `2^levels`; the result
/// is the largest `levels` satisfying that, ignoring the filter. Zero for
/// empty or odd-sized signals.
pub fn max_rdwt_levels(rows: usize, cols: usize) -> usize {
    if rows == 0 || cols == 0 {
        return 0;
    }
    let (m, n) = canonical_shape(rows, cols);
    if m == 1 {
        n.trailing_zeros() as usize
    } else {
        n.trailing_zeros().min(m.trailing_zeros()) as usize
    }
}

/// A single-column signal is reinterpreted as a row vector, so 1D signals
/// may be supplied in either orientation.
#[inline]
pub(crate) fn canonical_shape(rows: usize, cols: usize) -> (usize, usize) {
    if cols == 1 && rows > 1 {
        (1, rows)
    } else {
        (rows, cols)
    }
}

#[derive(Debug)]
pub(crate) struct RdwtHandler<T> {
    pub(crate) filters: AnalysisPair<T>,
}

impl<T: WaveletSample> RdwtHandler<T> {
    pub(crate) fn new(prototype: &[T]) -> Result<Self, AtrousError> {
        if prototype.is_empty() {
            return Err(AtrousError::EmptyFilter);
        }
        Ok(Self {
            filters: analysis_pair(prototype)?,
        })
    }

    /// Checks the caller contract and resolves the canonical shape.
    fn validate_shape(
        &self,
        rows: usize,
        cols: usize,
        levels: usize,
    ) -> Result<(usize, usize), AtrousError> {
        if rows == 0 || cols == 0 {
            return Err(AtrousError::ZeroSizedSignal);
        }
        let (m, n) = canonical_shape(rows, cols);
        if levels > 0 {
            let stride = u32::try_from(levels)
                .ok()
                .and_then(|l| 1usize.checked_shl(l))
                .ok_or(AtrousError::Overflow)?;
            if !n.is_multiple_of(stride) {
                return Err(AtrousError::NotDivisibleByLevels(n, stride));
            }
            if m > 1 && !m.is_multiple_of(stride) {
                return Err(AtrousError::NotDivisibleByLevels(m, stride));
            }
            let lh = self.filters.lowpass.len();
            let shortest = if m == 1 { n } else { m.min(n) };
            if lh > shortest {
                return Err(AtrousError::FilterLongerThanSignal(lh, shortest));
            }
        }
        Ok((m, n))
    }
}

impl<T: WaveletSample> RdwtExecutor<T> for RdwtHandler<T> {
    fn decompose(
        &self,
        signal: &[T],
        rows: usize,
        cols: usize,
        levels: usize,
    ) -> Result<Rdwt<T>, AtrousError> {
        let (m, n) = self.validate_shape(rows, cols, levels)?;
        let size = self.rdwt_size(m, n, levels)?;
        let mut lowpass = try_vec![T::default(); size.lowpass_length];
        let mut highpass = try_vec![T::default(); size.highpass_length];
        let mut scratch = RdwtScratch::new(m, n, self.filter_length())?;
        self.decompose_into(
            signal,
            m,
            n,
            levels,
            &mut lowpass,
            &mut highpass,
            &mut scratch,
        )?;
        Ok(Rdwt::new(lowpass, highpass, m, n, levels))
    }

    fn decompose_into(
        &self,
        signal: &[T],
        rows: usize,
        cols: usize,
        levels: usize,
        lowpass: &mut [T],
        highpass: &mut [T],
        scratch: &mut RdwtScratch<T>,
    ) -> Result<(), AtrousError> {
        let (m, n) = self.validate_shape(rows, cols, levels)?;
        let size = self.rdwt_size(m, n, levels)?;
        let lh = self.filters.lowpass.len();

        if signal.len() != size.lowpass_length {
            return Err(AtrousError::SignalSizeMismatch(
                size.lowpass_length,
                signal.len(),
            ));
        }
        if lowpass.len() != size.lowpass_length {
            return Err(AtrousError::OutputSizeIsTooSmall(
                lowpass.len(),
                size.lowpass_length,
            ));
        }
        if highpass.len() != size.highpass_length {
            return Err(AtrousError::OutputSizeIsTooSmall(
                highpass.len(),
                size.highpass_length,
            ));
        }
        if !scratch.fits(m, n, lh) {
            return Err(AtrousError::ScratchSize(
                m.max(n) + lh - 1,
                scratch.output_capacity(),
            ));
        }

        verbose_log!(
            debug,
            "rdwt: {m}x{n} signal, {lh} taps, {levels} levels"
        );

        lowpass.copy_from_slice(signal);

        let h0 = self.filters.lowpass.as_slice();
        let h1 = self.filters.highpass.as_slice();

        for level in 1..=levels {
            // stride between consecutive samples of one phase; doubling it
            // every level is what keeps the transform undecimated
            let sample_f = 1usize << (level - 1);
            let level_n = n / sample_f;
            let level_m = m / sample_f;
            let level_offset = if m == 1 {
                n * (level - 1)
            } else {
                3 * n * (level - 1)
            };

            for row in 0..m {
                for phase in 0..sample_f {
                    for i in 0..level_n {
                        scratch.stage_low[i] =
                            lowpass[mat_index(row, phase + i * sample_f, m)];
                    }
                    periodic_convolve_pair(
                        &mut scratch.stage_low,
                        level_n,
                        h0,
                        h1,
                        &mut scratch.low_low,
                        &mut scratch.high_high,
                    );
                    for i in 0..level_n {
                        let col = phase + i * sample_f;
                        lowpass[mat_index(row, col, m)] = scratch.low_low[i];
                        highpass[mat_index(row, level_offset + col, m)] =
                            scratch.high_high[i];
                    }
                }
            }

            // column pass; the row pass above has already rewritten `lowpass`
            // and parked the row-highpass intermediate in the first third of
            // the level block, so both get filtered vertically here
            if m > 1 {
                for col in 0..n {
                    for phase in 0..sample_f {
                        for i in 0..level_m {
                            let row = phase + i * sample_f;
                            scratch.stage_low[i] = lowpass[mat_index(row, col, m)];
                            scratch.stage_high[i] =
                                highpass[mat_index(row, level_offset + col, m)];
                        }
                        periodic_convolve_pair(
                            &mut scratch.stage_low,
                            level_m,
                            h0,
                            h1,
                            &mut scratch.low_low,
                            &mut scratch.low_high,
                        );
                        periodic_convolve_pair(
                            &mut scratch.stage_high,
                            level_m,
                            h0,
                            h1,
                            &mut scratch.high_low,
                            &mut scratch.high_high,
                        );
                        for i in 0..level_m {
                            let row = phase + i * sample_f;
                            lowpass[mat_index(row, col, m)] = scratch.low_low[i];
                            highpass[mat_index(row, level_offset + col, m)] =
                                scratch.low_high[i];
                            highpass[mat_index(row, level_offset + n + col, m)] =
                                scratch.high_low[i];
                            highpass[mat_index(row, level_offset + 2 * n + col, m)] =
                                scratch.high_high[i];
                        }
                    }
                }
            }
        }

        Ok(())
    }

    fn rdwt_size(
        &self,
        rows: usize,
        cols: usize,
        levels: usize,
    ) -> Result<RdwtSize, AtrousError> {
        let (m, n) = canonical_shape(rows, cols);
        let lowpass_length = m.checked_mul(n).ok_or(AtrousError::Overflow)?;
        let block_width = if m == 1 {
            n
        } else {
            n.checked_mul(3).ok_or(AtrousError::Overflow)?
        };
        let highpass_length = block_width
            .checked_mul(levels)
            .and_then(|w| w.checked_mul(m))
            .ok_or(AtrousError::Overflow)?;
        Ok(RdwtSize {
            lowpass_length,
            highpass_length,
        })
    }

    fn filter_length(&self) -> usize {
        self.filters.lowpass.len()
    }
}
