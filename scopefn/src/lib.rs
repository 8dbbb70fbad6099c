// Copyright 2026 scopefn Project Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! scopefn - scope functions for Rust.
//!
//! A scope function runs a block with a value bound to it, then returns either the block's result or the original
//! value. The [`Scope`](prelude::Scope) extension trait provides them as methods on every type, [`run`](prelude::run)
//! and [`with`](prelude::with) are the free-function forms, and [`OptionExt`](prelude::OptionExt) skips the block
//! for absent values.
//!
//! ```rust
//! use scopefn::prelude::*;
//!
//! let list = Vec::new().apply(|this| {
//!     this.push(1);
//!     this.push(2);
//! });
//! assert_eq!(list, vec![1, 2]);
//! assert_eq!(with(&list, |this| this.len()), 2);
//! ```
//!
//! The table of scope functions is available as data through [`ScopeFunction`](prelude::ScopeFunction), which can
//! also dispatch a block at runtime.

use scopefn_common as common;

mod dispatch;
mod table;

/// The prelude of scopefn.
pub mod prelude;
