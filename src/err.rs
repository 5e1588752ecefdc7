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

#[derive(Clone, Debug)]
pub enum AtrousError {
    OutOfMemory(usize),
    EmptyFilter,
    ZeroSizedSignal,
    SignalSizeMismatch(usize, usize),
    NotDivisibleByLevels(usize, usize),
    FilterLongerThanSignal(usize, usize),
    OutputSizeIsTooSmall(usize, usize),
    ScratchSize(usize, usize),
    Overflow,
}

impl Error for AtrousError {}

impl std::fmt::Display for AtrousError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            AtrousError::OutOfMemory(length) => {
                f.write_fmt(format_args!("Cannot allocate {length} bytes to vector"))
            }
            AtrousError::EmptyFilter => f.write_str("Scaling filter must not be empty"),
            AtrousError::ZeroSizedSignal => f.write_str("Signal dimensions must not be zero"),
            AtrousError::SignalSizeMismatch(expected, actual) => f.write_fmt(format_args!(
                "Signal length {actual} does not match its dimensions product {expected}"
            )),
            AtrousError::NotDivisibleByLevels(size, divisor) => f.write_fmt(format_args!(
                "Transformed dimension {size} must be divisible by {divisor}"
            )),
            AtrousError::FilterLongerThanSignal(filter_size, signal_size) => {
                f.write_fmt(format_args!(
                    "Filter of {filter_size} taps does not fit signal dimension {signal_size}"
                ))
            }
            AtrousError::OutputSizeIsTooSmall(were_length, min_length) => f.write_fmt(
                format_args!("Output size should be {min_length}, but it was {were_length}"),
            ),
            AtrousError::ScratchSize(required, actual) => f.write_fmt(format_args!(
                "Scratch buffers of {actual} elements are too small, {required} is required"
            )),
            AtrousError::Overflow => f.write_str("Overflow is happened"),
        }
    }
}

macro_rules! try_vec {
    () => {
        Vec::new()
    };
    ($elem:expr; $n:expr) => {{
        let mut v = Vec::new();
        v.try_reserve_exact($n)
            .map_err(|_| crate::err::AtrousError::OutOfMemory($n))?;
        v.resize($n, $elem);
        v
    }};
}

use std::error::Error;
use std::fmt::Formatter;
pub(crate) use try_vec;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_not_divisible() {
        let err = AtrousError::NotDivisibleByLevels(6, 4);
        assert_eq!(
            err.to_string(),
            "Transformed dimension 6 must be divisible by 4"
        );
    }

    #[test]
    fn display_filter_longer_than_signal() {
        let err = AtrousError::FilterLongerThanSignal(5, 4);
        assert_eq!(
            err.to_string(),
            "Filter of 5 taps does not fit signal dimension 4"
        );
    }

    #[test]
    fn display_scratch_size() {
        let err = AtrousError::ScratchSize(16, 8);
        assert_eq!(
            err.to_string(),
            "Scratch buffers of 8 elements are too small, 16 is required"
        );
    }
}
