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

//! Scope functions.
//!
//! A scope function runs a block with a value bound to it, then returns either the block's result or the
//! original value.
//!
//! | method      | binding              | returns        |
//! |-------------|----------------------|----------------|
//! | `let_`      | parameter, owned     | block result   |
//! | `let_ref`   | parameter, shared    | block result   |
//! | `let_mut`   | parameter, exclusive | block result   |
//! | `run`       | receiver             | block result   |
//! | `apply`     | receiver             | original value |
//! | `also`      | parameter, shared    | original value |
//! | `also_mut`  | parameter, exclusive | original value |
//!
//! Rust has no implicit receiver, so receiver-bound methods hand the block `&mut Self` to stand in for `this`.
//!
//! [`run`] and [`with`] are the free-function forms.

/// Scoped functional programming extensions.
///
/// Implemented for every type. None of the methods has side effects of its own.
pub trait Scope {
    /// Scoped with ownership, returns the block result.
    ///
    /// `let` is a keyword, hence the trailing underscore.
    ///
    /// ```rust
    /// # use scopefn_common::scope::Scope;
    /// let len = String::from("Hello").let_(|it| it.len());
    /// assert_eq!(len, 5);
    /// ```
    #[inline]
    fn let_<F, R>(self, f: F) -> R
    where
        Self: Sized,
        F: FnOnce(Self) -> R,
    {
        f(self)
    }

    /// Scoped with reference, returns the block result.
    #[inline]
    fn let_ref<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Self) -> R,
    {
        f(self)
    }

    /// Scoped with mutable reference, returns the block result.
    #[inline]
    fn let_mut<F, R>(&mut self, f: F) -> R
    where
        F: FnOnce(&mut Self) -> R,
    {
        f(self)
    }

    /// Scoped with the value as receiver, returns the block result.
    ///
    /// ```rust
    /// # use scopefn_common::scope::Scope;
    /// let mut list = vec![];
    /// let len = list.run(|this| {
    ///     this.push(1);
    ///     this.push(2);
    ///     this.len()
    /// });
    /// assert_eq!(len, 2);
    /// ```
    #[inline]
    fn run<F, R>(&mut self, f: F) -> R
    where
        F: FnOnce(&mut Self) -> R,
    {
        f(self)
    }

    /// Scoped with the value as receiver, returns the value itself.
    ///
    /// ```rust
    /// # use scopefn_common::scope::Scope;
    /// let list = Vec::new().apply(|this| {
    ///     this.push(1);
    ///     this.push(2);
    /// });
    /// assert_eq!(list, vec![1, 2]);
    /// ```
    #[inline]
    fn apply<F>(mut self, f: F) -> Self
    where
        Self: Sized,
        F: FnOnce(&mut Self),
    {
        f(&mut self);
        self
    }

    /// Scoped with reference, returns the value itself.
    #[inline]
    fn also<F>(self, f: F) -> Self
    where
        Self: Sized,
        F: FnOnce(&Self),
    {
        f(&self);
        self
    }

    /// Scoped with mutable reference, returns the value itself.
    #[inline]
    fn also_mut<F>(mut self, f: F) -> Self
    where
        Self: Sized,
        F: FnOnce(&mut Self),
    {
        f(&mut self);
        self
    }
}

impl<T: ?Sized> Scope for T {}

/// Run the block without any bound value and return its result.
#[inline]
pub fn run<F, R>(f: F) -> R
where
    F: FnOnce() -> R,
{
    f()
}

/// Run the block with `receiver` bound and return its result.
///
/// Pass `&value` or `&mut value` to keep the ownership of the value.
///
/// ```rust
/// # use scopefn_common::scope::with;
/// let list = vec![1, 2];
/// assert_eq!(with(&list, |this| this.len()), 2);
/// ```
#[inline]
pub fn with<T, F, R>(receiver: T, f: F) -> R
where
    F: FnOnce(T) -> R,
{
    f(receiver)
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn test_let_family() {
        let list = vec![1, 2, 3];
        assert_eq!(list.let_ref(|it| it.iter().sum::<i32>()), 6);

        let mut list = list;
        let popped = list.let_mut(|it| it.pop());
        assert_eq!(popped, Some(3));
        assert_eq!(list, vec![1, 2]);

        let doubled = list.let_(|it| it.into_iter().map(|v| v * 2).collect::<Vec<_>>());
        assert_eq!(doubled, vec![2, 4]);
    }

    #[test]
    fn test_unsized_receiver() {
        let s: &str = "Hello";
        assert_eq!(s.let_ref(|it: &str| it.len()), 5);

        let slice: &mut [i32] = &mut [3, 1, 2];
        slice.run(|this: &mut [i32]| this.sort());
        assert_eq!(slice, &[1, 2, 3]);
    }

    #[test]
    fn test_also_observes_without_changing() {
        let seen = Cell::new(0);
        let list = vec![1, 2].also(|it| seen.set(it.len()));
        assert_eq!(seen.get(), 2);
        assert_eq!(list, vec![1, 2]);
    }

    #[test]
    fn test_block_runs_exactly_once() {
        let calls = Cell::new(0);
        let bump = || calls.set(calls.get() + 1);

        let _ = 0_i32.let_(|_| bump());
        let _ = 0_i32.apply(|_| bump());
        let _ = 0_i32.also(|_| bump());
        let _ = 0_i32.also_mut(|_| bump());
        let _ = 0_i32.run(|_| bump());
        run(bump);
        with(0_i32, |_| bump());

        assert_eq!(calls.get(), 7);
    }

    #[test]
    fn test_free_functions() {
        assert_eq!(run(|| 40 + 2), 42);

        let mut list = vec![1];
        with(&mut list, |this| this.push(2));
        assert_eq!(list, vec![1, 2]);
    }
}
