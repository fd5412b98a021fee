// Licensed under the Apache License, Version 2.0 (the "License"); you may
// not use this file except in compliance with the License. You may obtain
// a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS, WITHOUT
// WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied. See the
// License for the specific language governing permissions and limitations
// under the License.

use thiserror::Error;

/// Errors raised by the clique counting routines.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliqueCountError {
    /// The requested clique size is smaller than one.
    #[error("k must be an integer and at least 1, got {k}")]
    InvalidArgument { k: usize },

    /// The raw detection total no longer fits in a `u64`.
    #[error("clique count for k = {k} overflowed a 64-bit accumulator")]
    CountOverflow { k: usize },
}
