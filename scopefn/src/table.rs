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

use std::{fmt::Display, str::FromStr};

use scopefn_common::error::{Error, ErrorKind, Result};

/// How the block references the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum BindingMode {
    /// The value is the receiver of the block.
    Receiver,
    /// The value is passed to the block as its single parameter.
    Parameter,
    /// No value is bound.
    Unbound,
}

/// What the scope function yields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ReturnMode {
    /// The block's own result.
    BlockResult,
    /// The original value.
    Original,
}

/// How the scope function is called.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CallStyle {
    /// Called as a method on the value.
    Method,
    /// Called as a free function without arguments.
    Free,
    /// Called as a free function with the value as its first argument.
    FreeWithArgument,
}

macro_rules! impl_display {
    ($type:ty { $($variant:ident => $name:literal,)* }) => {
        impl Display for $type {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                let name = match self {
                    $(Self::$variant => $name,)*
                };
                write!(f, "{name}")
            }
        }
    };
}

impl_display! { BindingMode {
    Receiver => "receiver",
    Parameter => "parameter",
    Unbound => "unbound",
} }

impl_display! { ReturnMode {
    BlockResult => "block result",
    Original => "original value",
} }

impl_display! { CallStyle {
    Method => "method",
    Free => "free",
    FreeWithArgument => "free with argument",
} }

/// A combination of binding mode, return mode and call style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Selection {
    /// Binding mode.
    pub binding: BindingMode,
    /// Return mode.
    pub returns: ReturnMode,
    /// Call style.
    pub style: CallStyle,
}

impl Selection {
    /// Create a selection.
    pub fn new(binding: BindingMode, returns: ReturnMode, style: CallStyle) -> Self {
        Self {
            binding,
            returns,
            style,
        }
    }
}

/// The scope functions.
///
/// | name         | binding   | returns        | call style         |
/// |--------------|-----------|----------------|--------------------|
/// | `let`        | parameter | block result   | method             |
/// | `run`        | receiver  | block result   | method             |
/// | `run (free)` | unbound   | block result   | free               |
/// | `with`       | receiver  | block result   | free with argument |
/// | `apply`      | receiver  | original value | method             |
/// | `also`       | parameter | original value | method             |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ScopeFunction {
    /// `let`.
    Let,
    /// `run` called on a value.
    Run,
    /// `run` called without a value.
    RunFree,
    /// `with`.
    With,
    /// `apply`.
    Apply,
    /// `also`.
    Also,
}

impl ScopeFunction {
    /// All scope functions, in table order.
    pub const ALL: [ScopeFunction; 6] = [
        ScopeFunction::Let,
        ScopeFunction::Run,
        ScopeFunction::RunFree,
        ScopeFunction::With,
        ScopeFunction::Apply,
        ScopeFunction::Also,
    ];

    /// Conventional name of the scope function.
    pub fn name(&self) -> &'static str {
        match self {
            ScopeFunction::Let => "let",
            ScopeFunction::Run => "run",
            ScopeFunction::RunFree => "run (free)",
            ScopeFunction::With => "with",
            ScopeFunction::Apply => "apply",
            ScopeFunction::Also => "also",
        }
    }

    /// How the block references the value.
    pub fn binding(&self) -> BindingMode {
        match self {
            ScopeFunction::Let | ScopeFunction::Also => BindingMode::Parameter,
            ScopeFunction::Run | ScopeFunction::With | ScopeFunction::Apply => BindingMode::Receiver,
            ScopeFunction::RunFree => BindingMode::Unbound,
        }
    }

    /// What the scope function yields.
    pub fn returns(&self) -> ReturnMode {
        match self {
            ScopeFunction::Apply | ScopeFunction::Also => ReturnMode::Original,
            _ => ReturnMode::BlockResult,
        }
    }

    /// How the scope function is called.
    pub fn call_style(&self) -> CallStyle {
        match self {
            ScopeFunction::RunFree => CallStyle::Free,
            ScopeFunction::With => CallStyle::FreeWithArgument,
            _ => CallStyle::Method,
        }
    }

    /// The row of the table describing the scope function.
    pub fn selection(&self) -> Selection {
        Selection::new(self.binding(), self.returns(), self.call_style())
    }

    /// Choose the scope function for the given selection.
    ///
    /// Returns an [`ErrorKind::Unsupported`] error if no scope function matches.
    ///
    /// ```rust
    /// # use scopefn::prelude::*;
    /// let f = ScopeFunction::select(Selection::new(
    ///     BindingMode::Receiver,
    ///     ReturnMode::Original,
    ///     CallStyle::Method,
    /// ))
    /// .unwrap();
    /// assert_eq!(f, ScopeFunction::Apply);
    /// ```
    pub fn select(selection: Selection) -> Result<ScopeFunction> {
        let res = Self::ALL.into_iter().find(|f| f.selection() == selection);
        tracing::trace!("[table]: select {:?} => {:?}", selection, res);
        res.ok_or_else(|| {
            Error::new(ErrorKind::Unsupported, "no scope function for the selection")
                .with_context("binding", selection.binding)
                .with_context("returns", selection.returns)
                .with_context("style", selection.style)
        })
    }
}

impl Display for ScopeFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for ScopeFunction {
    type Err = Error;

    /// Parse a conventional name, ignoring case and surrounding whitespace.
    ///
    /// `run_free` is accepted as an alias of `run (free)`.
    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim().to_ascii_lowercase();
        match name.as_str() {
            "let" => Ok(ScopeFunction::Let),
            "run" => Ok(ScopeFunction::Run),
            "run (free)" | "run_free" => Ok(ScopeFunction::RunFree),
            "with" => Ok(ScopeFunction::With),
            "apply" => Ok(ScopeFunction::Apply),
            "also" => Ok(ScopeFunction::Also),
            _ => Err(Error::unknown_name(s)),
        }
    }
}
