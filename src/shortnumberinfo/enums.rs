// Copyright (C) 2009 The Libphonenumber Authors
// Copyright (C) 2025 Kashin Vladislav (Rust adaptation author)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use strum::EnumIter;

/// The billing cost category of a short number.
#[derive(Debug, EnumIter, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShortNumberCost {
    /// **Toll-free.**
    /// The call costs the caller nothing. Emergency numbers count as
    /// toll-free even when no explicit toll-free pattern covers them.
    TollFree,
    /// **Standard rate.**
    /// The call is billed like an ordinary local call.
    StandardRate,
    /// **Premium rate.**
    /// The call is billed above the standard rate, as for content services.
    PremiumRate,
    /// **Unknown cost.**
    /// The number matches no cost pattern for the region, or the region has
    /// no usable metadata. Since such a number might be premium-rate
    /// somewhere, unknown is reported in aggregates over cheaper categories.
    UnknownCost,
}
