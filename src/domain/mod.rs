// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0

mod change;
mod classification;
mod commit;

pub use change::*;
pub use classification::*;
pub use commit::*;
