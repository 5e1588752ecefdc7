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

/// Analysis half of a two-channel quadrature-mirror filter bank, derived from
/// a prototype scaling filter.
#[derive(Debug)]
pub(crate) struct AnalysisPair<T> {
    /// `h0`, the time-reversed prototype.
    pub(crate) lowpass: Vec<T>,
    /// `h1`, the prototype with every even-indexed tap sign-negated.
    pub(crate) highpass: Vec<T>,
}

/// Derives the analysis lowpass/highpass pair from a prototype scaling filter.
///
/// `h0[i] = prototype[lh - 1 - i]` and `h1[i] = ±prototype[i]`, negated at
/// even `i`. The alternating sign pattern is what gives `h1` its
/// quadrature-mirror relation to `h0`.
pub(crate) fn analysis_pair<T: WaveletSample>(
    prototype: &[T],
) -> Result<AnalysisPair<T>, AtrousError> {
    let lh = prototype.len();
    let mut lowpass = try_vec![T::default(); lh];
    let mut highpass = try_vec![T::default(); lh];

    for (i, (h0, h1)) in lowpass.iter_mut().zip(highpass.iter_mut()).enumerate() {
        *h0 = prototype[lh - 1 - i];
        *h1 = if i % 2 == 0 {
            -prototype[i]
        } else {
            prototype[i]
        };
    }

    Ok(AnalysisPair { lowpass, highpass })
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAC_SQRT2: f64 = std::f64::consts::FRAC_1_SQRT_2;

    #[test]
    fn haar_pair() {
        let pair = analysis_pair(&[FRAC_SQRT2, FRAC_SQRT2]).unwrap();
        assert_eq!(pair.lowpass, vec![FRAC_SQRT2, FRAC_SQRT2]);
        assert_eq!(pair.highpass, vec![-FRAC_SQRT2, FRAC_SQRT2]);
    }

    #[test]
    fn four_taps_pair() {
        let prototype = [1.0, 2.0, 3.0, 4.0];
        let pair = analysis_pair(&prototype).unwrap();
        assert_eq!(pair.lowpass, vec![4.0, 3.0, 2.0, 1.0]);
        assert_eq!(pair.highpass, vec![-1.0, 2.0, -3.0, 4.0]);
    }

    #[test]
    fn single_tap_negates_index_zero() {
        let pair = analysis_pair(&[1.0f32]).unwrap();
        assert_eq!(pair.lowpass, vec![1.0]);
        assert_eq!(pair.highpass, vec![-1.0]);
    }
}
