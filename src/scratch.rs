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
use crate::WaveletSample;
use crate::err::{AtrousError, try_vec};

/// Working storage for one decomposition call.
///
/// Holds the two input-staging buffers (longest signal dimension plus filter
/// overrun) and the four output-staging buffers (longest signal dimension)
/// that the row and column passes filter through. A scratch sized for one
/// signal can be reused across any number of calls whose dimensions and
/// filter fit, which keeps per-call allocation out of hot loops entirely.
///
/// Buffers are zero-initialized at construction and released when the value
/// is dropped; they are never shared between calls running concurrently,
/// since a decomposition borrows the scratch mutably for its whole duration.
pub struct RdwtScratch<T> {
    pub(crate) stage_low: Vec<T>,
    pub(crate) stage_high: Vec<T>,
    pub(crate) low_low: Vec<T>,
    pub(crate) low_high: Vec<T>,
    pub(crate) high_low: Vec<T>,
    pub(crate) high_high: Vec<T>,
}

impl<T: WaveletSample> RdwtScratch<T> {
    /// Allocates scratch buffers for a `rows x cols` signal and a
    /// `filter_length`-tap filter.
    ///
    /// # Returns
    /// The scratch, or [`AtrousError::OutOfMemory`] if any buffer cannot be
    /// allocated. Nothing leaks on the failure path; buffers acquired before
    /// the failing one are dropped.
    pub fn new(rows: usize, cols: usize, filter_length: usize) -> Result<Self, AtrousError> {
        let edge = rows.max(cols);
        let staged = edge
            .checked_add(filter_length.saturating_sub(1))
            .ok_or(AtrousError::Overflow)?;
        Ok(Self {
            stage_low: try_vec![T::default(); staged],
            stage_high: try_vec![T::default(); staged],
            low_low: try_vec![T::default(); edge],
            low_high: try_vec![T::default(); edge],
            high_low: try_vec![T::default(); edge],
            high_high: try_vec![T::default(); edge],
        })
    }

    /// True when the buffers are large enough for a `rows x cols` signal and
    /// a `filter_length`-tap filter.
    pub fn fits(&self, rows: usize, cols: usize, filter_length: usize) -> bool {
        let edge = rows.max(cols);
        let staged = match edge.checked_add(filter_length.saturating_sub(1)) {
            Some(s) => s,
            None => return false,
        };
        self.stage_low.len() >= staged
            && self.stage_high.len() >= staged
            && self.low_low.len() >= edge
            && self.low_high.len() >= edge
            && self.high_low.len() >= edge
            && self.high_high.len() >= edge
    }

    /// Staging capacity, in elements, of the smaller buffer class.
    pub(crate) fn output_capacity(&self) -> usize {
        self.low_low
            .len()
            .min(self.low_high.len())
            .min(self.high_low.len())
            .min(self.high_high.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffers_are_zeroed_and_sized() {
        let scratch = RdwtScratch::<f64>::new(4, 8, 3).unwrap();
        assert_eq!(scratch.stage_low.len(), 10);
        assert_eq!(scratch.stage_high.len(), 10);
        assert_eq!(scratch.low_low.len(), 8);
        assert!(scratch.stage_low.iter().all(|&v| v == 0.0));
        assert!(scratch.high_high.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn fits_reports_capacity() {
        let scratch = RdwtScratch::<f32>::new(8, 8, 4).unwrap();
        assert!(scratch.fits(8, 8, 4));
        assert!(scratch.fits(4, 2, 4));
        assert!(scratch.fits(8, 8, 1));
        assert!(!scratch.fits(16, 8, 4));
        assert!(!scratch.fits(8, 8, 6));
    }
}
