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
use crate::mla::fmla;

/// Filters one periodically extended sequence through both analysis filters.
///
/// `stage[..length]` holds the sequence; the next `filter length - 1` cells are
/// overwritten with the wrap-around extension. For `i` in `[0, length)`:
///
/// `out_low[i]  = Σ_j stage[i + j] · h0[lh - 1 - j]`
/// `out_high[i] = Σ_j stage[i + j] · h1[lh - 1 - j]`
///
/// The extension is copied sequentially, so it stays a true periodic repeat
/// even when the filter is longer than the sequence.
pub(crate) fn periodic_convolve_pair<T: WaveletSample>(
    stage: &mut [T],
    length: usize,
    h0: &[T],
    h1: &[T],
    out_low: &mut [T],
    out_high: &mut [T],
) {
    let lh = h0.len();
    debug_assert_eq!(h0.len(), h1.len());
    debug_assert!(stage.len() + 1 >= length + lh);
    debug_assert!(out_low.len() >= length);
    debug_assert!(out_high.len() >= length);

    for k in 0..lh - 1 {
        stage[length + k] = stage[k];
    }

    for (i, (dst_low, dst_high)) in out_low[..length]
        .iter_mut()
        .zip(out_high[..length].iter_mut())
        .enumerate()
    {
        let window = &stage[i..i + lh];
        let mut acc_low = T::default();
        let mut acc_high = T::default();
        for ((&x, &c_low), &c_high) in window
            .iter()
            .zip(h0.iter().rev())
            .zip(h1.iter().rev())
        {
            acc_low = fmla(x, c_low, acc_low);
            acc_high = fmla(x, c_high, acc_high);
        }
        *dst_low = acc_low;
        *dst_high = acc_high;
    }
}
