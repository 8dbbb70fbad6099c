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

use crate::scope::Scope;

/// Conditional invocation of scope functions for [`std::option::Option`].
///
/// Each method checks presence first. For `None` the block is never called and the result is `None`; for
/// `Some(v)` the call is delegated to the matching [`Scope`] method on `v`.
///
/// ```rust
/// # use scopefn_common::option::OptionExt;
/// let greet = |v: Option<&str>| v.then_let(|it| format!("{it} World!"));
/// assert_eq!(greet(Some("Hello")), Some("Hello World!".to_string()));
/// assert_eq!(greet(None), None);
/// ```
pub trait OptionExt {
    /// Wrapped type by [`Option`].
    type Val;

    /// Consume the wrapped value with the given function if there is.
    fn then<F>(self, f: F)
    where
        F: FnOnce(Self::Val);

    /// [`Scope::let_`] on the wrapped value if there is.
    fn then_let<F, R>(self, f: F) -> Option<R>
    where
        F: FnOnce(Self::Val) -> R;

    /// [`Scope::run`] on the wrapped value if there is.
    fn then_run<F, R>(&mut self, f: F) -> Option<R>
    where
        F: FnOnce(&mut Self::Val) -> R;

    /// [`Scope::apply`] on the wrapped value if there is.
    fn then_apply<F>(self, f: F) -> Self
    where
        F: FnOnce(&mut Self::Val);

    /// [`Scope::also`] on the wrapped value if there is.
    fn then_also<F>(self, f: F) -> Self
    where
        F: FnOnce(&Self::Val);
}

impl<T> OptionExt for Option<T> {
    type Val = T;

    fn then<F>(self, f: F)
    where
        F: FnOnce(Self::Val),
    {
        if let Some(val) = self {
            f(val)
        }
    }

    fn then_let<F, R>(self, f: F) -> Option<R>
    where
        F: FnOnce(Self::Val) -> R,
    {
        match self {
            Some(val) => Some(val.let_(f)),
            None => None,
        }
    }

    fn then_run<F, R>(&mut self, f: F) -> Option<R>
    where
        F: FnOnce(&mut Self::Val) -> R,
    {
        match self {
            Some(val) => Some(val.run(f)),
            None => None,
        }
    }

    fn then_apply<F>(self, f: F) -> Self
    where
        F: FnOnce(&mut Self::Val),
    {
        match self {
            Some(val) => Some(val.apply(f)),
            None => None,
        }
    }

    fn then_also<F>(self, f: F) -> Self
    where
        F: FnOnce(&Self::Val),
    {
        match self {
            Some(val) => Some(val.also(f)),
            None => None,
        }
    }
}
