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

use scopefn_common::{
    either::Either,
    error::{Error, Result},
    scope::{self, Scope},
    strict_assert_eq,
};

use crate::table::{BindingMode, ReturnMode, ScopeFunction};

/// Outcome of a runtime dispatch: the block result as `Left`, or the original value as `Right`.
pub type Outcome<R, T> = Either<R, T>;

impl ScopeFunction {
    /// Run `block` with `value` bound the way this scope function binds it.
    ///
    /// Block-result functions return [`Either::Left`], original-value functions return [`Either::Right`].
    ///
    /// [`ScopeFunction::RunFree`] binds no value, so it returns an [`ErrorKind::Unbound`] error without running
    /// the block. Use [`ScopeFunction::invoke_free`] for it.
    ///
    /// [`ErrorKind::Unbound`]: scopefn_common::error::ErrorKind::Unbound
    ///
    /// ```rust
    /// # use scopefn::prelude::*;
    /// let outcome = ScopeFunction::Apply.invoke(vec![], |this| this.push(1)).unwrap();
    /// assert_eq!(outcome.right(), Some(vec![1]));
    /// ```
    pub fn invoke<T, F, R>(self, value: T, block: F) -> Result<Outcome<R, T>>
    where
        F: FnOnce(&mut T) -> R,
    {
        tracing::trace!(
            "[dispatch]: invoke {} (binding: {}, returns: {})",
            self,
            self.binding(),
            self.returns()
        );

        let outcome = self.bind(value, block)?.map_right(|(value, _)| value);
        strict_assert_eq!(outcome.is_right(), self.returns() == ReturnMode::Original);
        Ok(outcome)
    }

    /// Like [`ScopeFunction::invoke`], with a fallible block.
    ///
    /// A block failure is returned as an [`ErrorKind::External`] error with the block's error as its source. For
    /// original-value functions the value is dropped on failure.
    ///
    /// [`ErrorKind::External`]: scopefn_common::error::ErrorKind::External
    ///
    /// ```rust
    /// # use scopefn::prelude::*;
    /// let err = ScopeFunction::Let
    ///     .try_invoke("x".to_string(), |it| it.parse::<u8>())
    ///     .unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::External);
    /// assert!(err.downcast_ref::<std::num::ParseIntError>().is_some());
    /// ```
    pub fn try_invoke<T, F, R, E>(self, value: T, block: F) -> Result<Outcome<R, T>>
    where
        F: FnOnce(&mut T) -> std::result::Result<R, E>,
        E: Into<anyhow::Error>,
    {
        tracing::trace!(
            "[dispatch]: try invoke {} (binding: {}, returns: {})",
            self,
            self.binding(),
            self.returns()
        );

        let outcome = match self.bind(value, block)? {
            Either::Left(Ok(res)) => Either::Left(res),
            Either::Right((value, Ok(_))) => Either::Right(value),
            Either::Left(Err(e)) | Either::Right((_, Err(e))) => {
                tracing::trace!("[dispatch]: block of {} failed", self);
                return Err(Error::external(e).with_context("function", self));
            }
        };
        strict_assert_eq!(outcome.is_right(), self.returns() == ReturnMode::Original);
        Ok(outcome)
    }

    /// Bind `value`, run `block` once, and keep the value alongside the block result for original-value functions.
    fn bind<T, F, R>(self, value: T, block: F) -> Result<Either<R, (T, R)>>
    where
        F: FnOnce(&mut T) -> R,
    {
        let res = match self {
            ScopeFunction::Let => Either::Left(value.let_(|mut it| block(&mut it))),
            ScopeFunction::Run => {
                let mut value = value;
                Either::Left(value.run(block))
            }
            ScopeFunction::With => Either::Left(scope::with(value, |mut this| block(&mut this))),
            ScopeFunction::Apply => {
                let mut value = value;
                let res = value.run(block);
                Either::Right((value, res))
            }
            ScopeFunction::Also => {
                let mut value = value;
                let res = value.let_mut(block);
                Either::Right((value, res))
            }
            ScopeFunction::RunFree => {
                return Err(Error::unbound(self, "no value is bound to the block"));
            }
        };
        Ok(res)
    }

    /// Run `block` without a bound value.
    ///
    /// Only [`ScopeFunction::RunFree`] binds no value, every other scope function returns an
    /// [`ErrorKind::Unbound`] error without running the block.
    ///
    /// [`ErrorKind::Unbound`]: scopefn_common::error::ErrorKind::Unbound
    pub fn invoke_free<F, R>(self, block: F) -> Result<R>
    where
        F: FnOnce() -> R,
    {
        tracing::trace!("[dispatch]: invoke {} without value", self);

        if self.binding() != BindingMode::Unbound {
            return Err(Error::unbound(self, "a value must be bound to the block"));
        }
        Ok(scope::run(block))
    }
}
